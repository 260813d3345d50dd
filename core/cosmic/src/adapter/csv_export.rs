//! 記録の CSV 書き出し

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::domain::SessionRecord;

const HEADER: [&str; 8] = [
    "Timestamp",
    "Name",
    "Birth Date",
    "Region",
    "Gender",
    "Preference",
    "Match",
    "Traits",
];

/// 既定のファイル名（cosmic_data_YYYY-MM-DD.csv）
pub fn default_file_name(today: NaiveDate) -> String {
    format!("cosmic_data_{}.csv", today.format("%Y-%m-%d"))
}

/// Unix ミリ秒を "2026-10-16T08:30:00.000Z" 形式に
pub fn format_timestamp(ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| ms.to_string())
}

/// カンマ・ダブルクォート・改行を含む値だけクォートし、中の " は "" にする
pub fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains(&[',', '"', '\n', '\r'][..]) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

pub fn records_to_csv(records: &[SessionRecord]) -> String {
    let mut out = HEADER.join(",");
    out.push('\n');
    for r in records {
        let row = [
            format_timestamp(r.timestamp),
            r.name.clone(),
            r.birth_date.clone(),
            r.region.clone(),
            r.gender_or_default().to_string(),
            r.status_or_default().to_string(),
            r.match_name.clone(),
            r.traits.join(", "),
        ];
        let line: Vec<Cow<'_, str>> = row.iter().map(|v| csv_field(v)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SessionRecord {
        SessionRecord {
            id: "1792139400000".into(),
            timestamp: 1_792_139_400_000,
            name: "Alex".into(),
            birth_date: "1990-07-04".into(),
            traits: vec!["creative".into(), "calm".into()],
            match_name: "Tom Cruise".into(),
            region: "north_america".into(),
            gender: None,
            status_preference: Some("living".into()),
        }
    }

    #[test]
    fn test_timestamp_format() {
        assert_eq!(format_timestamp(1_792_139_400_000), "2026-10-16T08:30:00.000Z");
        assert_eq!(format_timestamp(0), "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_default_file_name() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(default_file_name(day), "cosmic_data_2026-10-16.csv");
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_records_to_csv() {
        let csv = records_to_csv(&[record()]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "Timestamp,Name,Birth Date,Region,Gender,Preference,Match,Traits"
        );
        assert_eq!(
            lines[1],
            "2026-10-16T08:30:00.000Z,Alex,1990-07-04,north_america,any,living,Tom Cruise,\"creative, calm\""
        );
    }

    #[test]
    fn test_name_with_quote_is_escaped() {
        let mut r = record();
        r.name = "Al \"Ace\" Lee".into();
        r.traits = vec!["calm".into()];
        let csv = records_to_csv(&[r]);
        assert!(csv.contains(",\"Al \"\"Ace\"\" Lee\",1990-07-04,"));
        assert!(csv.ends_with(",Tom Cruise,calm\n"));
    }
}
