//! LLMドライバーとプロバイダの実装
//!
//! スキーマ付きの単発生成（プロンプト 1 つ → JSON テキスト 1 つ）に必要なものだけを置く。

pub mod driver;
pub mod gemini;
pub mod provider;
pub mod schema;

pub use driver::LlmDriver;
pub use gemini::GeminiProvider;
pub use provider::LlmProvider;
pub use schema::{Schema, SchemaType};
