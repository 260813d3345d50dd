//! cosmic コマンドの enum（Command Pattern）
//!
//! 対話フローと管理画面の分岐を enum で明示する。

use crate::domain::matching::MatchVariant;
use common::domain::ModelName;
use std::path::PathBuf;

/// cosmic の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum CosmicCommand {
    Help,
    /// 対話フロー
    Play {
        variant: Option<MatchVariant>,
        model: Option<ModelName>,
    },
    /// 管理画面（コード未指定なら対話で尋ねる）
    Admin {
        code: Option<String>,
        action: AdminAction,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminAction {
    Overview,
    Records,
    Export { output: Option<PathBuf> },
    Purge { assume_yes: bool },
}

impl AdminAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Records => "records",
            Self::Export { .. } => "export",
            Self::Purge { .. } => "purge",
        }
    }
}
