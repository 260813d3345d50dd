//! 端末入出力 Outbound ポート

use common::error::Error;

/// 対話の行単位入出力
///
/// 実装は adapter::StdConsole（stdin/stdout）やテスト用の ScriptedConsole。
pub trait Console: Send + Sync {
    /// 1 行表示する
    fn say(&self, line: &str);

    /// プロンプトを出して 1 行読む。入力が尽きたら None。
    fn ask(&self, prompt: &str) -> Result<Option<String>, Error>;
}
