//! 破壊的操作の確認の実装

use std::sync::Arc;

use common::error::Error;

use crate::ports::outbound::{Confirm, Console};

/// 端末で y/yes の入力を求める
pub struct ConsoleConfirm {
    console: Arc<dyn Console>,
}

impl ConsoleConfirm {
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self { console }
    }
}

impl Confirm for ConsoleConfirm {
    fn confirm(&self, question: &str) -> Result<bool, Error> {
        let answer = self.console.ask(&format!("{} [y/N]: ", question))?;
        Ok(matches!(
            answer.as_deref().map(|s| s.trim().to_lowercase()).as_deref(),
            Some("y") | Some("yes")
        ))
    }
}

/// --yes 指定時: 確認せずに承認
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _question: &str) -> Result<bool, Error> {
        Ok(true)
    }
}
