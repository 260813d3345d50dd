//! 設定ファイル（<home>/config.json）の読み込み（adapter 層）

use common::domain::HomeDir;
use common::error::Error;
use common::ports::outbound::FileSystem;
use serde::Deserialize;

use crate::domain::MatchVariant;

pub const DEFAULT_WELCOME_DELAY_MS: u64 = 1500;
pub const DEFAULT_SELECTION_DELAY_MS: u64 = 1500;

/// config.json の内容。書かれていない項目は既定値。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub model: Option<String>,
    pub variant: Option<MatchVariant>,
    pub welcome_delay_ms: u64,
    pub selection_delay_ms: u64,
    pub api_base_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: None,
            variant: None,
            welcome_delay_ms: DEFAULT_WELCOME_DELAY_MS,
            selection_delay_ms: DEFAULT_SELECTION_DELAY_MS,
            api_base_url: None,
        }
    }
}

/// 設定を読み込む。ファイルがなければ既定値、読めない・壊れている場合は警告を出して既定値。
pub fn load_app_config(fs: &dyn FileSystem, home: &HomeDir) -> AppConfig {
    let path = home.config_file();
    if !fs.exists(&path) {
        return AppConfig::default();
    }
    match read_config(fs, &path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load {}: {}", path.display(), e);
            AppConfig::default()
        }
    }
}

fn read_config(fs: &dyn FileSystem, path: &std::path::Path) -> Result<AppConfig, Error> {
    let content = fs.read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| Error::json(e.to_string()))
}
