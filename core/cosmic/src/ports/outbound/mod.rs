//! Outbound ポート: アプリが外界を使うための trait

pub mod confirm;
pub mod console;
pub mod json_generator;
pub mod match_service;
pub mod pause;
pub mod record_store;

pub use confirm::Confirm;
pub use console::Console;
pub use json_generator::JsonGenerator;
pub use match_service::MatchService;
pub use pause::Pause;
pub use record_store::RecordStore;
