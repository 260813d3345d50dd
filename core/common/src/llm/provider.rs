//! LLMプロバイダのトレイト定義

use crate::error::Error;
use crate::llm::schema::Schema;
use serde_json::Value;

/// LLMプロバイダのトレイト
///
/// 各プロバイダはこのトレイトを実装する必要があります。
/// 1 回のプロンプトに対し、スキーマに沿った JSON テキストを 1 つ受け取る用途に絞っている。
pub trait LlmProvider: Send + Sync {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// リクエストペイロードを生成
    ///
    /// # Arguments
    /// * `prompt` - ユーザープロンプト
    /// * `schema` - 応答スキーマ（指定時は JSON 応答を要求する）
    fn make_request_payload(&self, prompt: &str, schema: Option<&Schema>) -> Result<Value, Error>;

    /// HTTPリクエストを実行してレスポンスを取得
    ///
    /// # Returns
    /// * `Ok(String)` - レスポンスJSON文字列
    /// * `Err(Error)` - 通信失敗・API エラー
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスからテキストを抽出
    ///
    /// # Returns
    /// * `Ok(Option<String>)` - 抽出したテキスト（存在しない場合はNone）
    /// * `Err(Error)` - レスポンスが壊れている・API エラー
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;
}
