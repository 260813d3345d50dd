//! 管理画面の集計

use crate::domain::record::SessionRecord;

/// 上位表示の件数
pub const TOP_N: usize = 5;
/// 最近の記録として表示する件数
pub const RECENT_LIMIT: usize = 10;

/// 出現回数の表（回数の降順、同数は初出順）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    pub fn tally<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut entries: Vec<(String, usize)> = Vec::new();
        for item in items {
            match entries.iter_mut().find(|(k, _)| k == item) {
                Some((_, n)) => *n += 1,
                None => entries.push((item.to_string(), 1)),
            }
        }
        // sort_by は安定ソートなので同数は初出順のまま
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn top(&self, n: usize) -> &[(String, usize)] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn leader(&self) -> Option<(&str, usize)> {
        self.entries.first().map(|(k, n)| (k.as_str(), *n))
    }

    pub fn count_of(&self, key: &str) -> usize {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map_or(0, |(_, n)| *n)
    }

    /// 先頭の回数を 100 とした割合（棒グラフの長さ）
    pub fn percent_of_leader(&self, count: usize) -> u32 {
        match self.leader() {
            Some((_, top)) if top > 0 => ((count * 100 + top / 2) / top) as u32,
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 記録全体の集計
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminStats {
    pub total: usize,
    pub traits: FrequencyTable,
    pub regions: FrequencyTable,
    pub genders: FrequencyTable,
    pub statuses: FrequencyTable,
}

impl AdminStats {
    pub fn from_records(records: &[SessionRecord]) -> Self {
        Self {
            total: records.len(),
            traits: FrequencyTable::tally(
                records.iter().flat_map(|r| r.traits.iter().map(String::as_str)),
            ),
            regions: FrequencyTable::tally(records.iter().map(|r| r.region.as_str())),
            genders: FrequencyTable::tally(records.iter().map(|r| r.gender_or_default())),
            statuses: FrequencyTable::tally(records.iter().map(|r| r.status_or_default())),
        }
    }

    pub fn top_traits(&self) -> &[(String, usize)] {
        self.traits.top(TOP_N)
    }

    pub fn top_regions(&self) -> &[(String, usize)] {
        self.regions.top(TOP_N)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(traits: &[&str], region: &str, gender: Option<&str>) -> SessionRecord {
        SessionRecord {
            id: "1".into(),
            timestamp: 1,
            name: "A".into(),
            birth_date: "1990-07-04".into(),
            traits: traits.iter().map(|s| s.to_string()).collect(),
            match_name: "B".into(),
            region: region.into(),
            gender: gender.map(str::to_string),
            status_preference: None,
        }
    }

    #[test]
    fn test_trait_ties_keep_first_seen_order() {
        let records = vec![
            record(&["creative", "calm"], "asia", None),
            record(&["creative"], "asia", None),
            record(&["energetic"], "europe", None),
        ];
        let stats = AdminStats::from_records(&records);
        assert_eq!(
            stats.top_traits(),
            &[
                ("creative".to_string(), 2),
                ("calm".to_string(), 1),
                ("energetic".to_string(), 1),
            ]
        );
        assert_eq!(stats.traits.leader(), Some(("creative", 2)));
        assert_eq!(stats.traits.percent_of_leader(1), 50);
    }

    #[test]
    fn test_top_traits_is_capped() {
        let all = ["a", "b", "c", "d", "e", "f", "g"];
        let records = vec![record(&all[..3], "asia", None), record(&all[3..], "asia", None)];
        let stats = AdminStats::from_records(&records);
        assert_eq!(stats.top_traits().len(), TOP_N);
        assert_eq!(stats.traits.entries().len(), 7);
    }

    #[test]
    fn test_missing_gender_and_status_fall_back() {
        let records = vec![
            record(&[], "asia", None),
            record(&[], "asia", Some("female")),
        ];
        let stats = AdminStats::from_records(&records);
        assert_eq!(stats.genders.count_of("any"), 1);
        assert_eq!(stats.genders.count_of("female"), 1);
        assert_eq!(stats.statuses.count_of("all"), 2);
        assert_eq!(stats.regions.leader(), Some(("asia", 2)));
    }

    #[test]
    fn test_empty_records() {
        let stats = AdminStats::from_records(&[]);
        assert_eq!(stats.total, 0);
        assert!(stats.traits.is_empty());
        assert_eq!(stats.traits.leader(), None);
        assert_eq!(stats.traits.percent_of_leader(3), 0);
    }
}
