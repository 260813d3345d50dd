//! キー・バリュー永続化 Outbound ポート
//!
//! 文字列キーに文字列値（JSON 等）を 1 つ保存する単純なストア。
//! 値の形式は呼び出し側が決める。

use crate::error::Error;

/// キー・バリューストア抽象（Outbound ポート）
///
/// 実装は `common::adapter::FileKeyValueStore`（ファイル 1 キー 1 ファイル）や
/// テスト用の `MemoryKeyValueStore`。
pub trait KeyValueStore: Send + Sync {
    /// 値を取得する（未保存なら Ok(None)）
    fn get(&self, key: &str) -> Result<Option<String>, Error>;
    /// 値を保存する（既存値は置き換え）
    fn set(&self, key: &str, value: &str) -> Result<(), Error>;
    /// 値を削除する（未保存でも Ok）
    fn remove(&self, key: &str) -> Result<(), Error>;
}
