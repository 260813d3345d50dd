//! アダプター（外界の I/O の標準実装）
//!
//! usecase は ports::outbound の trait 経由でのみファイル・時刻・環境変数・永続化に触れる。
//! ここには標準実装（Std*）とテスト用の実装を置く。

pub mod file_json_log;
pub mod file_key_value;
pub mod memory_key_value;
pub mod std_clock;
pub mod std_env_resolver;
pub mod std_fs;

pub use file_json_log::{FileJsonLog, NoopLog, StderrLog, TeeLog};
pub use file_key_value::FileKeyValueStore;
pub use memory_key_value::MemoryKeyValueStore;
pub use std_clock::{FixedClock, StdClock};
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
