//! 破壊的操作の確認 Outbound ポート

use common::error::Error;

/// はい/いいえの確認を取る
pub trait Confirm: Send + Sync {
    fn confirm(&self, question: &str) -> Result<bool, Error>;
}
