//! マッチ照会 Outbound ポート

use crate::domain::{MatchFailure, MatchResponse, MatchVariant, UserInput};

/// 入力から著名人マッチを 1 回照会する（再試行しない）
///
/// 成功時の matches の件数は variant の件数と必ず一致する。
pub trait MatchService: Send + Sync {
    fn request_match(
        &self,
        input: &UserInput,
        variant: MatchVariant,
    ) -> Result<MatchResponse, MatchFailure>;
}
