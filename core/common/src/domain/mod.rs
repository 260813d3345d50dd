//! ドメイン型（Newtype）
//!
//! String / PathBuf を直接運ばず、意味のある型に包んで境界を明確にする。

use std::path::{Path, PathBuf};

/// ホームディレクトリのパス（設定・データ・ログの置き場）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeDir(PathBuf);

impl HomeDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// 設定ファイル（config.json）のパス
    pub fn config_file(&self) -> PathBuf {
        self.0.join("config.json")
    }

    /// キー・バリューストアのデータディレクトリ
    pub fn data_dir(&self) -> PathBuf {
        self.0.join("data")
    }

    /// JSONL ログファイルのパス
    pub fn log_file(&self) -> PathBuf {
        self.0.join("logs").join("cosmic.jsonl")
    }
}

impl std::ops::Deref for HomeDir {
    type Target = PathBuf;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for HomeDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl From<PathBuf> for HomeDir {
    fn from(p: PathBuf) -> Self {
        Self(p)
    }
}

/// モデル名（gemini-3-flash-preview 等）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelName(String);

impl ModelName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl std::ops::Deref for ModelName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ModelName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ModelName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ModelName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// API キー（Debug 出力では伏せる）
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_dir_paths() {
        let home = HomeDir::new("/tmp/cosmic");
        assert_eq!(home.config_file(), PathBuf::from("/tmp/cosmic/config.json"));
        assert_eq!(home.data_dir(), PathBuf::from("/tmp/cosmic/data"));
        assert_eq!(home.log_file(), PathBuf::from("/tmp/cosmic/logs/cosmic.jsonl"));
    }

    #[test]
    fn test_api_key_debug_is_masked() {
        let key = ApiKey::new("secret-value");
        assert_eq!(format!("{:?}", key), "ApiKey(***)");
        assert_eq!(key.expose(), "secret-value");
    }
}
