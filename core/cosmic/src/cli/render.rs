//! 画面ごとのテキスト表示（純粋関数。出力は Console に渡す行の列）

use crate::domain::{
    find_trait, AdminStats, BirthDate, CelebrityMatch, FrequencyTable, GenderPreference,
    InputDraft, MatchResponse, Region, SessionRecord, StatusPreference, MAX_TRAITS,
    TRAIT_CATALOG,
};
use crate::usecase::AdminOverview;
use crate::adapter::csv_export::format_timestamp;

const BAR_WIDTH: usize = 20;

pub fn welcome() -> Vec<String> {
    vec![
        String::new(),
        "  C O S M I C   M A T E".to_string(),
        "  Aligning your stars...".to_string(),
        String::new(),
    ]
}

pub fn loading() -> Vec<String> {
    vec![
        "Consulting the Archives".to_string(),
        "Scanning birthdays across history...".to_string(),
    ]
}

/// 性格の選択肢（番号付き、選択済みに印）
pub fn traits(draft: &InputDraft) -> Vec<String> {
    let mut lines = vec![format!(
        "Choose up to {} traits ({} selected):",
        MAX_TRAITS,
        draft.traits.len()
    )];
    for (i, t) in TRAIT_CATALOG.iter().enumerate() {
        let mark = if draft.traits.contains(t.id) { "x" } else { " " };
        lines.push(format!("  [{}] {:>2}. {}", mark, i + 1, t.label));
    }
    lines
}

pub fn preferences(draft: &InputDraft) -> Vec<String> {
    let names = |labels: Vec<(&str, &str)>| {
        labels
            .into_iter()
            .map(|(id, label)| format!("{} ({})", id, label))
            .collect::<Vec<_>>()
            .join(", ")
    };
    vec![
        "Refine your search".to_string(),
        format!(
            "  Gender: {}",
            names(GenderPreference::ALL.iter().map(|g| (g.as_str(), g.label())).collect())
        ),
        format!(
            "  Region: {}",
            names(Region::ALL.iter().map(|r| (r.as_str(), r.label())).collect())
        ),
        format!(
            "  Era:    {}",
            names(StatusPreference::ALL.iter().map(|s| (s.as_str(), s.label())).collect())
        ),
        format!(
            "  Current: {} / {} / {}",
            draft.gender.label(),
            draft.region.label(),
            draft.status.label()
        ),
    ]
}

/// 候補一覧（名前の由来と、番号付きの候補）
pub fn selection(response: &MatchResponse, user_name: &str) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(a) = &response.analysis {
        lines.push(format!("The name {}", user_name));
        lines.push(format!("  Origin:  {}", a.origin));
        lines.push(format!("  Meaning: {}", a.meaning));
        lines.push(format!("  \"{}\"", a.soul_vibration));
        lines.push(String::new());
    }
    lines.push("Your cosmic candidates:".to_string());
    for (i, m) in response.matches.iter().enumerate() {
        let tier = m.match_type.map(|t| t.label()).unwrap_or("Match");
        lines.push(format!(
            "  {}. {} [{}] ({}, {})",
            i + 1,
            m.name,
            tier,
            m.occupation,
            m.status.label()
        ));
        lines.push(format!("     {}", m.match_reason));
    }
    lines
}

/// 結果画面
pub fn result(m: &CelebrityMatch, birth_date: Option<&BirthDate>) -> Vec<String> {
    let mut lines = vec!["Cosmic Connection Found".to_string()];
    if let Some(d) = birth_date {
        lines.push(format!("Your birthday: {}", d.month_day()));
    }
    lines.push(String::new());
    lines.push(m.name.clone());
    lines.push(format!("  {}", m.occupation));
    lines.push(format!("  Born: {}", m.birth_date));
    if let Some(lifespan) = &m.lifespan {
        lines.push(format!("  Lifespan: {}", lifespan));
    }
    if let Some(era) = &m.era_context {
        lines.push(format!("  Era: {}", era));
    }
    lines.push(String::new());
    lines.push("The Connection".to_string());
    lines.push(format!("  {}", m.match_reason));
    if let Some(bio) = &m.bio {
        lines.push("Who They Are".to_string());
        lines.push(format!("  {}", bio));
    }
    if !m.alignment_traits.is_empty() {
        lines.push("Alignment".to_string());
        for a in &m.alignment_traits {
            let label = find_trait(&a.trait_name).map_or(a.trait_name.as_str(), |t| t.label);
            lines.push(format!("  {}: {}", label, a.connection));
        }
    }
    if !m.fun_facts.is_empty() {
        lines.push("Stellar Secrets".to_string());
        for fact in &m.fun_facts {
            lines.push(format!("  * {}", fact));
        }
    }
    if !m.life_lessons.is_empty() {
        lines.push("Life Lessons".to_string());
        for l in &m.life_lessons {
            lines.push(format!("  Mistake: {}", l.mistake));
            lines.push(format!("  Lesson:  {}", l.lesson));
        }
    }
    lines.push(format!("Spiritual Nemesis: {}", m.spiritual_nemesis));
    lines.push(format!("  {}", m.nemesis_manifestation));
    if let Some(note) = &m.mystery_note {
        lines.push(format!("Mystery: {}", note));
    }
    lines.push(String::new());
    lines.push("Destiny Timeline".to_string());
    lines.push(format!("  {}", m.destiny_prediction));
    lines.push(format!(
        "  Projected Transformation Year: {} ({})",
        m.predicted_legacy_year, m.legacy_label
    ));
    lines.push(
        "  AI generated prediction for entertainment purposes only. Not actual life expectancy."
            .to_string(),
    );
    lines
}

pub fn error(message: &str) -> Vec<String> {
    vec!["Cosmic Interference".to_string(), format!("  {}", message)]
}

fn bar(table: &FrequencyTable, count: usize) -> String {
    let pct = table.percent_of_leader(count) as usize;
    "#".repeat(pct * BAR_WIDTH / 100)
}

fn frequency_lines(title: &str, table: &FrequencyTable, rows: &[(String, usize)]) -> Vec<String> {
    let mut lines = vec![title.to_string()];
    if rows.is_empty() {
        lines.push("  (no data)".to_string());
    }
    for (key, n) in rows {
        lines.push(format!("  {:<16} {:>3} {}", key, n, bar(table, *n)));
    }
    lines
}

pub fn overview(o: &AdminOverview) -> Vec<String> {
    let s: &AdminStats = &o.stats;
    let mut lines = vec![format!("Total seekers: {}", s.total)];
    lines.push(match s.traits.leader() {
        Some((t, n)) => format!("Top trait: {} ({})", t, n),
        None => "Top trait: N/A".to_string(),
    });
    lines.push(format!(
        "Top region: {}",
        s.regions.leader().map_or("N/A", |(r, _)| r)
    ));
    lines.push(format!(
        "Dominant era: {}",
        s.statuses.leader().map_or("N/A", |(st, _)| st)
    ));
    lines.push(String::new());
    lines.extend(frequency_lines("Traits", &s.traits, s.top_traits()));
    lines.extend(frequency_lines("Regions", &s.regions, s.top_regions()));
    lines.extend(frequency_lines("Gender", &s.genders, s.genders.entries()));
    lines.extend(frequency_lines("Era", &s.statuses, s.statuses.entries()));
    lines.push(String::new());
    lines.push("Recent activity".to_string());
    if o.recent.is_empty() {
        lines.push("  (no records)".to_string());
    }
    for r in &o.recent {
        lines.push(format!("  {} {} -> {}", format_timestamp(r.timestamp), r.name, r.match_name));
    }
    lines
}

pub fn records(records: &[SessionRecord]) -> Vec<String> {
    if records.is_empty() {
        return vec!["No records.".to_string()];
    }
    let mut lines = vec![format!(
        "{:<24}  {:<16}  {:<10}  {:<14}  {:<7}  {:<8}  {:<20}  {}",
        "Timestamp", "Name", "Birth Date", "Region", "Gender", "Era", "Match", "Traits"
    )];
    for r in records {
        lines.push(format!(
            "{:<24}  {:<16}  {:<10}  {:<14}  {:<7}  {:<8}  {:<20}  {}",
            format_timestamp(r.timestamp),
            r.name,
            r.birth_date,
            r.region,
            r.gender_or_default(),
            r.status_or_default(),
            r.match_name,
            r.traits.join(", ")
        ));
    }
    lines
}
