//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。種別ごとに終了コード（sysexits 準拠）を持つ。

/// 共通エラー型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 引数・入力の不正（終了コード 64）
    #[error("{0}")]
    InvalidArgument(String),
    /// JSON のシリアライズ・パース失敗（終了コード 65）
    #[error("{0}")]
    Json(String),
    /// HTTP 通信・API エラー（終了コード 69）
    #[error("{0}")]
    Http(String),
    /// 内部エラー（終了コード 70）
    #[error("{0}")]
    System(String),
    /// I/O エラー（終了コード 74）
    #[error("{0}")]
    Io(String),
    /// 環境変数・設定の不足（終了コード 78）
    #[error("{0}")]
    Env(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    /// プロセスの終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::Json(_) => 65,
            Self::Http(_) => 69,
            Self::System(_) => 70,
            Self::Io(_) => 74,
            Self::Env(_) => 78,
        }
    }

    /// 使い方の誤り（usage を表示すべきエラー）か
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
