//! マッチ照会の失敗

use common::error::Error;

/// 照会の失敗（ERROR ステップに運ばれる）
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchFailure {
    /// 資格情報（API キー）がない
    #[error("credential missing: {0}")]
    Configuration(String),
    /// 呼び出し失敗・応答なし
    #[error("service call failed: {0}")]
    Service(String),
    /// 応答が期待した形でない
    #[error("malformed payload: {0}")]
    Parse(String),
}

impl MatchFailure {
    /// 画面に出す文言
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "Missing API Configuration. Please set GEMINI_API_KEY and try again.",
            Self::Service(_) | Self::Parse(_) => "The stars are clouded right now. Please try again.",
        }
    }

    /// ログの kind
    pub fn log_kind(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "config",
            Self::Service(_) => "service",
            Self::Parse(_) => "parse",
        }
    }
}

impl From<Error> for MatchFailure {
    fn from(e: Error) -> Self {
        match e {
            Error::Env(msg) => Self::Configuration(msg),
            other => Self::Service(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            MatchFailure::Configuration("x".into()).user_message(),
            "Missing API Configuration. Please set GEMINI_API_KEY and try again."
        );
        let clouded = "The stars are clouded right now. Please try again.";
        assert_eq!(MatchFailure::Service("x".into()).user_message(), clouded);
        assert_eq!(MatchFailure::Parse("x".into()).user_message(), clouded);
    }

    #[test]
    fn test_from_common_error() {
        assert!(matches!(
            MatchFailure::from(Error::env("GEMINI_API_KEY is not set")),
            MatchFailure::Configuration(_)
        ));
        assert!(matches!(
            MatchFailure::from(Error::http("503")),
            MatchFailure::Service(_)
        ));
        assert!(matches!(
            MatchFailure::from(Error::json("bad")),
            MatchFailure::Service(_)
        ));
    }

    #[test]
    fn test_log_kinds_are_distinct() {
        assert_eq!(MatchFailure::Service(String::new()).log_kind(), "service");
        assert_eq!(MatchFailure::Parse(String::new()).log_kind(), "parse");
        assert_eq!(MatchFailure::Configuration(String::new()).log_kind(), "config");
    }
}
