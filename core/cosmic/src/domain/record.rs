//! 保存するセッション記録

use crate::domain::user_input::UserInput;
use serde::{Deserialize, Serialize};

/// 保持する記録の上限（新しい順に残す）
pub const MAX_RECORDS: usize = 100;

/// 1 回分の照会の要約
///
/// 地域・性別・存命の好みは保存形式のまま文字列で持つ。
/// 性別と存命の好みがなかった頃の記録は None で読み込まれる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: String,
    /// Unix ミリ秒
    pub timestamp: i64,
    pub name: String,
    pub birth_date: String,
    #[serde(default)]
    pub traits: Vec<String>,
    pub match_name: String,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_preference: Option<String>,
}

impl SessionRecord {
    /// id は作成時刻（ミリ秒）の文字列
    pub fn new(timestamp_ms: i64, input: &UserInput, match_name: &str) -> Self {
        Self {
            id: timestamp_ms.to_string(),
            timestamp: timestamp_ms,
            name: input.name.as_str().to_string(),
            birth_date: input.birth_date.to_iso(),
            traits: input.traits.clone(),
            match_name: match_name.to_string(),
            region: input.region.as_str().to_string(),
            gender: Some(input.gender.as_str().to_string()),
            status_preference: Some(input.status.as_str().to_string()),
        }
    }

    pub fn gender_or_default(&self) -> &str {
        self.gender.as_deref().unwrap_or("any")
    }

    pub fn status_or_default(&self) -> &str {
        self.status_preference.as_deref().unwrap_or("all")
    }
}
