//! マッチ結果の型（生成サービスの応答をパースした後の形）

use serde::{Deserialize, Serialize};

/// 照会の種類。返ってくるマッチ件数と豆知識の件数が決まる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchVariant {
    /// 1 件。好みの入力ステップなし。
    Single,
    /// 3 件。
    #[default]
    Trio,
    /// 6 件。
    Six,
}

impl MatchVariant {
    pub fn cardinality(&self) -> usize {
        match self {
            Self::Single => 1,
            Self::Trio => 3,
            Self::Six => 6,
        }
    }

    pub fn fun_fact_count(&self) -> usize {
        match self {
            Self::Single => 3,
            Self::Trio => 5,
            Self::Six => 10,
        }
    }

    /// PREFERENCE ステップを通るか
    pub fn has_preference_step(&self) -> bool {
        !matches!(self, Self::Single)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Trio => "trio",
            Self::Six => "six",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "single" => Some(Self::Single),
            "trio" => Some(Self::Trio),
            "six" => Some(Self::Six),
            _ => None,
        }
    }
}

/// 候補の存命状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeStatus {
    Living,
    Deceased,
}

impl LifeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Living => "Living",
            Self::Deceased => "Historical",
        }
    }
}

/// マッチの階層（誕生日一致 > 名前一致 > 性格による代替）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchTier {
    #[serde(rename = "Perfect Match")]
    PerfectMatch,
    #[serde(rename = "Birthday Twin")]
    BirthdayTwin,
    #[serde(rename = "Name Twin")]
    NameTwin,
    #[serde(rename = "Soul Match")]
    SoulMatch,
}

impl MatchTier {
    pub const ALL: [MatchTier; 4] = [
        Self::PerfectMatch,
        Self::BirthdayTwin,
        Self::NameTwin,
        Self::SoulMatch,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::PerfectMatch => "Perfect Match",
            Self::BirthdayTwin => "Birthday Twin",
            Self::NameTwin => "Name Twin",
            Self::SoulMatch => "Soul Match",
        }
    }
}

/// 名前の由来（trio / six のみ）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameAnalysis {
    pub origin: String,
    pub meaning: String,
    pub soul_vibration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentTrait {
    #[serde(rename = "trait")]
    pub trait_name: String,
    pub connection: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeLesson {
    pub mistake: String,
    pub lesson: String,
}

/// 著名人 1 件分のマッチ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelebrityMatch {
    pub id: String,
    pub name: String,
    pub birth_date: String,
    pub occupation: String,
    pub status: LifeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub era_context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_type: Option<MatchTier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub match_reason: String,
    pub alignment_traits: Vec<AlignmentTrait>,
    pub destiny_prediction: String,
    pub predicted_legacy_year: i64,
    pub legacy_label: String,
    pub life_lessons: Vec<LifeLesson>,
    pub spiritual_nemesis: String,
    pub nemesis_manifestation: String,
    pub fun_facts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifespan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mystery_note: Option<String>,
}

/// 1 回の照会の応答
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<NameAnalysis>,
    pub matches: Vec<CelebrityMatch>,
}

impl MatchResponse {
    pub fn find(&self, id: &str) -> Option<&CelebrityMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    /// 候補選択を挟まず結果に進める応答か
    pub fn is_single(&self) -> bool {
        self.matches.len() == 1
    }
}
