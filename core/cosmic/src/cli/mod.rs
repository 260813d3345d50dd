//! CLI 層: 引数解析・画面表示・対話ドライバ

pub mod args;
pub mod interactive;
pub mod render;

pub use args::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
pub use interactive::InteractiveSession;
