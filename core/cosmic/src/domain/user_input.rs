//! ユーザー入力（生年月日・名前・性格・好み）

use chrono::{Datelike, NaiveDate};
use common::error::Error;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

fn date_pattern() -> Result<&'static Regex, Error> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").ok())
        .as_ref()
        .ok_or_else(|| Error::system("birth date pattern failed to compile"))
}

/// 生年月日（時刻なしの暦日）
///
/// `YYYY-MM-DD` を年・月・日の整数に分解してから組み立てる。
/// タイムゾーン付きの日時を経由しないので、ホストの時差で日付がずれない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    pub fn parse(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        let caps = date_pattern()?
            .captures(s)
            .ok_or_else(|| Error::invalid_argument(format!("Birth date must be YYYY-MM-DD: '{}'", s)))?;
        let year: i32 = caps[1].parse().map_err(|_| invalid_date(s))?;
        let month: u32 = caps[2].parse().map_err(|_| invalid_date(s))?;
        let day: u32 = caps[3].parse().map_err(|_| invalid_date(s))?;
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| invalid_date(s))
    }

    /// 月名（"July"）
    pub fn month_name(&self) -> String {
        self.0.format("%B").to_string()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// プロンプト・表示用の "July 4"
    pub fn month_day(&self) -> String {
        format!("{} {}", self.month_name(), self.day())
    }

    /// 保存用の "1990-07-04"
    pub fn to_iso(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

fn invalid_date(s: &str) -> Error {
    Error::invalid_argument(format!("Not a valid calendar date: '{}'", s))
}

impl std::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso())
    }
}

/// 表示名（前後の空白を除いて空でない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn parse(s: &str) -> Result<Self, Error> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_argument("Name is required"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// 存命・故人の好み
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusPreference {
    Living,
    Deceased,
    #[default]
    All,
}

impl StatusPreference {
    pub const ALL: [StatusPreference; 3] = [Self::Deceased, Self::Living, Self::All];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Living => "living",
            Self::Deceased => "deceased",
            Self::All => "all",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Living => "Living Legends",
            Self::Deceased => "Historical Souls",
            Self::All => "All of Time",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "living" => Some(Self::Living),
            "deceased" => Some(Self::Deceased),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

/// 性別の好み
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderPreference {
    Male,
    Female,
    #[default]
    Any,
}

impl GenderPreference {
    pub const ALL: [GenderPreference; 3] = [Self::Male, Self::Female, Self::Any];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Any => "any",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Any => "Any",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "any" => Some(Self::Any),
            _ => None,
        }
    }
}

/// 出身地域の好み
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    #[default]
    Global,
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    Oceania,
}

impl Region {
    pub const ALL: [Region; 7] = [
        Self::Global,
        Self::Africa,
        Self::Asia,
        Self::Europe,
        Self::NorthAmerica,
        Self::SouthAmerica,
        Self::Oceania,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Africa => "africa",
            Self::Asia => "asia",
            Self::Europe => "europe",
            Self::NorthAmerica => "north_america",
            Self::SouthAmerica => "south_america",
            Self::Oceania => "oceania",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Global => "Global (Any)",
            Self::Africa => "Africa",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::NorthAmerica => "N. America",
            Self::SouthAmerica => "S. America",
            Self::Oceania => "Oceania",
        }
    }

    /// プロンプト用の地域名
    pub fn prompt_name(&self) -> &'static str {
        match self {
            Self::Global => "anywhere in the world",
            Self::Africa => "Africa",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::NorthAmerica => "North America",
            Self::SouthAmerica => "South America",
            Self::Oceania => "Oceania",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let key = s.trim().to_lowercase().replace(&[' ', '-'][..], "_");
        Self::ALL.into_iter().find(|r| r.as_str() == key)
    }
}

/// 確定したユーザー入力（照会を投げた時点で固定される）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInput {
    pub name: DisplayName,
    pub birth_date: BirthDate,
    /// 選択順を保った性格 ID（0〜3 件）
    pub traits: Vec<String>,
    pub status: StatusPreference,
    pub gender: GenderPreference,
    pub region: Region,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birth_date_month_day() {
        let d = BirthDate::parse("1990-07-04").unwrap();
        assert_eq!(d.month_day(), "July 4");
        assert_eq!(d.to_iso(), "1990-07-04");
    }

    #[test]
    fn test_birth_date_new_years_day_does_not_shift() {
        // UTC 深夜 0 時に当たる日付でも前日にずれない
        let d = BirthDate::parse("2000-01-01").unwrap();
        assert_eq!(d.month_day(), "January 1");
        let d = BirthDate::parse("1999-12-31").unwrap();
        assert_eq!(d.month_day(), "December 31");
    }

    #[test]
    fn test_birth_date_leap_day() {
        assert_eq!(BirthDate::parse("2000-02-29").unwrap().month_day(), "February 29");
        assert!(BirthDate::parse("2001-02-29").is_err());
    }

    #[test]
    fn test_birth_date_rejects_malformed() {
        for s in ["", "1990-7-4", "07/04/1990", "1990-13-01", "1990-00-10", "abcd-ef-gh"] {
            let err = BirthDate::parse(s).unwrap_err();
            assert_eq!(err.exit_code(), 64, "{}", s);
        }
    }

    #[test]
    fn test_display_name_trims_and_requires_text() {
        assert_eq!(DisplayName::parse("  Alex ").unwrap().as_str(), "Alex");
        assert!(DisplayName::parse("   ").is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(StatusPreference::default(), StatusPreference::All);
        assert_eq!(GenderPreference::default(), GenderPreference::Any);
        assert_eq!(Region::default(), Region::Global);
    }

    #[test]
    fn test_region_parse_accepts_labels_and_ids() {
        assert_eq!(Region::parse("north_america"), Some(Region::NorthAmerica));
        assert_eq!(Region::parse("South America"), Some(Region::SouthAmerica));
        assert_eq!(Region::parse("mars"), None);
        assert_eq!(Region::ALL.len(), 7);
    }

    #[test]
    fn test_preference_serde_names() {
        assert_eq!(serde_json::to_string(&Region::NorthAmerica).unwrap(), "\"north_america\"");
        assert_eq!(serde_json::to_string(&GenderPreference::Any).unwrap(), "\"any\"");
        assert_eq!(
            serde_json::from_str::<StatusPreference>("\"deceased\"").unwrap(),
            StatusPreference::Deceased
        );
    }
}
