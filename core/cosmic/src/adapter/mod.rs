//! アダプター（ports::outbound の実装）

pub mod config;
pub mod confirm;
pub mod console;
pub mod csv_export;
pub mod gemini_generator;
pub mod kv_record_store;
pub mod llm_match_service;
pub mod match_prompt;
pub mod pause;
pub mod stub_generator;

pub use config::{load_app_config, AppConfig};
pub use confirm::{AssumeYes, ConsoleConfirm};
pub use console::StdConsole;
pub use gemini_generator::GeminiJsonGenerator;
pub use kv_record_store::KvRecordStore;
pub use llm_match_service::LlmMatchService;
pub use pause::StdPause;

#[cfg(test)]
pub use console::ScriptedConsole;
#[cfg(test)]
pub use pause::NoPause;
#[cfg(test)]
pub use stub_generator::StubGenerator;
