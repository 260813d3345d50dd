//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::{ApiKey, HomeDir};
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

const HOME_DIR_NAME: &str = "cosmic-mate";

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.trim().is_empty())
}

impl EnvResolver for StdEnvResolver {
    fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
        if let Some(home) = non_empty_var("COSMIC_HOME") {
            return Ok(HomeDir::new(PathBuf::from(home)));
        }

        let config_base = non_empty_var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| non_empty_var("HOME").map(|h| PathBuf::from(h).join(".config")))
            .ok_or_else(|| Error::env("HOME is not set"))?;

        Ok(HomeDir::new(config_base.join(HOME_DIR_NAME)))
    }

    fn gemini_api_key(&self) -> Option<ApiKey> {
        non_empty_var("GEMINI_API_KEY")
            .or_else(|| non_empty_var("API_KEY"))
            .map(ApiKey::new)
    }

    fn current_dir(&self) -> Result<PathBuf, Error> {
        env::current_dir().map_err(|e| Error::io_msg(format!("Failed to get current dir: {}", e)))
    }
}
