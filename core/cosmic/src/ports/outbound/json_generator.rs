//! スキーマ付き JSON 生成 Outbound ポート

use common::error::Error;
use common::llm::Schema;

/// プロンプトとスキーマを渡し、スキーマに沿った JSON テキストを受け取る
///
/// 資格情報がない場合は Error::Env を返す。
pub trait JsonGenerator: Send + Sync {
    fn generate_json(&self, prompt: &str, schema: &Schema) -> Result<String, Error>;
}
