//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリと API キーを環境変数から解決する。
//! usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::{ApiKey, HomeDir};
use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// ホームディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. COSMIC_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/cosmic-mate（XDG_CONFIG_HOME が設定されていれば）
    /// 3. $HOME/.config/cosmic-mate
    fn resolve_home_dir(&self) -> Result<HomeDir, Error>;

    /// Gemini の API キー（GEMINI_API_KEY、なければ API_KEY）。空文字は未設定扱い。
    fn gemini_api_key(&self) -> Option<ApiKey>;

    /// カレントディレクトリ（CSV 出力の既定の置き場）
    fn current_dir(&self) -> Result<PathBuf, Error>;
}
