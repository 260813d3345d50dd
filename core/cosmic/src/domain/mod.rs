//! ドメイン型
//!
//! 入力値・マッチ結果・状態機械・記録・集計。I/O は持たない。

pub mod access;
pub mod command;
pub mod failure;
pub mod flow;
pub mod matching;
pub mod record;
pub mod stats;
pub mod traits;
pub mod user_input;

pub use access::check_access_code;
pub use command::{AdminAction, CosmicCommand};
pub use failure::MatchFailure;
pub use flow::{InputDraft, MatchFlow, Step};
pub use matching::{CelebrityMatch, MatchResponse, MatchTier, MatchVariant};
pub use record::{SessionRecord, MAX_RECORDS};
pub use stats::{AdminStats, FrequencyTable, RECENT_LIMIT};
pub use traits::{find_trait, ToggleOutcome, MAX_TRAITS, TRAIT_CATALOG};
pub use user_input::{BirthDate, GenderPreference, Region, StatusPreference, UserInput};
