//! マッチ照会のプロンプトと出力スキーマ
//!
//! 誕生日は BirthDate（暦日）から月名と日を取り出して埋め込む。

use crate::domain::{
    find_trait, GenderPreference, MatchTier, MatchVariant, Region, StatusPreference, UserInput,
};
use common::llm::Schema;

/// 性格 ID を表示名に（カタログにないものは ID のまま）
fn trait_labels(ids: &[String]) -> String {
    ids.iter()
        .map(|id| find_trait(id).map_or(id.as_str(), |t| t.label))
        .collect::<Vec<_>>()
        .join(", ")
}

fn gender_clause(gender: GenderPreference) -> &'static str {
    match gender {
        GenderPreference::Male => "Only include men.",
        GenderPreference::Female => "Only include women.",
        GenderPreference::Any => "Any gender is fine.",
    }
}

fn status_clause(status: StatusPreference) -> &'static str {
    match status {
        StatusPreference::Living => "Only include people who are alive today.",
        StatusPreference::Deceased => "Only include historical figures who have passed away.",
        StatusPreference::All => "They may be living or deceased.",
    }
}

fn region_clause(region: Region) -> String {
    match region {
        Region::Global => "They may come from anywhere in the world.".to_string(),
        other => format!("Prefer people from {}.", other.prompt_name()),
    }
}

/// 照会プロンプトを組み立てる
pub fn build_prompt(input: &UserInput, variant: MatchVariant) -> String {
    let day = input.birth_date.month_day();
    let traits = trait_labels(&input.traits);
    let facts = variant.fun_fact_count();

    match variant {
        MatchVariant::Single => format!(
            "The user was born on {day}.\n\
             Their personality traits are: {traits}.\n\
             \n\
             Task:\n\
             1. Find a famous person (actor, musician, historical figure, etc.) who was born on EXACTLY {day}.\n\
             2. Among the people born on this day, pick the one whose vibe best matches the user's traits.\n\
             3. Write a short, mystical two-sentence bio.\n\
             4. Explain why the user and this person are \"soul siblings\" based on the traits, and give one alignment entry per trait.\n\
             5. Playfully predict a \"Legacy Year\" (a major transformation, not a death) with a short poetic label. Keep it PG-13.\n\
             6. Give 2 mistake/lesson pairs from their life, a spiritual nemesis and how it manifests.\n\
             7. Give exactly {facts} lesser-known fun facts.\n\
             Optionally add their lifespan, a mystery note and a brief era context.\n"
        ),
        MatchVariant::Trio | MatchVariant::Six => {
            let count = variant.cardinality();
            format!(
                "The user's name is {name} and they were born on {day}.\n\
                 Their personality traits are: {traits}.\n\
                 \n\
                 Task:\n\
                 1. Analyse the name {name}: its cultural origin, its meaning and a one-line soul vibration.\n\
                 2. Find exactly {count} famous people. Rank them by tier:\n\
                    - \"Perfect Match\": born on EXACTLY {day} and sharing the name {name}.\n\
                    - \"Birthday Twin\": born on EXACTLY {day}.\n\
                    - \"Name Twin\": sharing the name {name}.\n\
                    - \"Soul Match\": only when the tiers above run out, chosen by personality.\n\
                 3. {gender} {region} {status}\n\
                 4. For each person give: a unique id, birth date (Month Day, Year), occupation, living/deceased status, \
                 tier, a short bio, why they match, one alignment entry per user trait, a destiny prediction, \
                 a transformative legacy year with a poetic label, 2 mistake/lesson pairs, a spiritual nemesis \
                 and its manifestation, and exactly {facts} fun facts.\n\
                 Optionally add lifespan, a mystery note and a brief era context.\n\
                 Keep predictions playful and PG-13; the legacy year is a transformation, not a death.\n",
                name = input.name,
                gender = gender_clause(input.gender),
                region = region_clause(input.region),
                status = status_clause(input.status),
            )
        }
    }
}

fn match_schema(variant: MatchVariant) -> Schema {
    let facts = variant.fun_fact_count();
    let tiers = Schema::string_enum(MatchTier::ALL.iter().map(|t| t.label()));
    let base = Schema::object();
    let base = if variant == MatchVariant::Single {
        base.optional("id", Schema::string())
    } else {
        base.required("id", Schema::string().describe("Unique id within this response"))
    };
    let base = base
        .required("name", Schema::string())
        .required(
            "birthDate",
            Schema::string().describe("The person's full birth date (Month Day, Year)"),
        )
        .required("occupation", Schema::string())
        .required("status", Schema::string_enum(["living", "deceased"]))
        .optional("eraContext", Schema::string().describe("Brief note about their era"));
    let base = if variant == MatchVariant::Single {
        base.optional("matchType", tiers)
    } else {
        base.required("matchType", tiers)
    };
    base.optional("bio", Schema::string().describe("A short 2-sentence bio"))
        .required(
            "matchReason",
            Schema::string().describe("Why the user's traits match this person"),
        )
        .required(
            "alignmentTraits",
            Schema::array(
                Schema::object()
                    .required("trait", Schema::string())
                    .required("connection", Schema::string()),
            ),
        )
        .required(
            "destinyPrediction",
            Schema::string().describe("A mystical prediction about a major transformation"),
        )
        .required(
            "predictedLegacyYear",
            Schema::integer().describe("A specific future year for the transformation"),
        )
        .required(
            "legacyLabel",
            Schema::string().describe("e.g. 'Age of Ascendance' or 'Golden Zenith'"),
        )
        .required(
            "lifeLessons",
            Schema::array(
                Schema::object()
                    .required("mistake", Schema::string())
                    .required("lesson", Schema::string()),
            ),
        )
        .required("spiritualNemesis", Schema::string())
        .required("nemesisManifestation", Schema::string())
        .required(
            "funFacts",
            Schema::array(Schema::string()).describe(format!("Exactly {} fun facts", facts)),
        )
        .optional("lifespan", Schema::string())
        .optional("mysteryNote", Schema::string())
}

/// 出力スキーマ。single は著名人オブジェクト単体、trio / six は analysis + matches。
pub fn response_schema(variant: MatchVariant) -> Schema {
    match variant {
        MatchVariant::Single => match_schema(variant),
        MatchVariant::Trio | MatchVariant::Six => Schema::object()
            .required(
                "analysis",
                Schema::object()
                    .required("origin", Schema::string().describe("Country, culture or ethnicity"))
                    .required("meaning", Schema::string())
                    .required("soulVibration", Schema::string()),
            )
            .required(
                "matches",
                Schema::array(match_schema(variant))
                    .describe(format!("Exactly {} matches", variant.cardinality())),
            ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user_input::DisplayName;
    use crate::domain::BirthDate;
    use common::llm::SchemaType;

    fn input() -> UserInput {
        UserInput {
            name: DisplayName::parse("Alex").unwrap(),
            birth_date: BirthDate::parse("1990-07-04").unwrap(),
            traits: vec!["creative".into(), "calm".into()],
            status: StatusPreference::Deceased,
            gender: GenderPreference::Female,
            region: Region::SouthAmerica,
        }
    }

    #[test]
    fn test_single_prompt_uses_month_day_and_labels() {
        let prompt = build_prompt(&input(), MatchVariant::Single);
        assert!(prompt.contains("born on July 4."));
        assert!(prompt.contains("EXACTLY July 4"));
        assert!(prompt.contains("Creative, Calm"));
        assert!(prompt.contains("exactly 3 lesser-known fun facts"));
        assert!(!prompt.contains("Alex"));
    }

    #[test]
    fn test_multi_prompt_carries_filters() {
        let prompt = build_prompt(&input(), MatchVariant::Six);
        assert!(prompt.contains("The user's name is Alex"));
        assert!(prompt.contains("exactly 6 famous people"));
        assert!(prompt.contains("Only include women."));
        assert!(prompt.contains("South America"));
        assert!(prompt.contains("passed away"));
        assert!(prompt.contains("exactly 10 fun facts"));
        assert!(prompt.contains("\"Birthday Twin\""));
    }

    #[test]
    fn test_single_schema_is_bare_match() {
        let schema = response_schema(MatchVariant::Single);
        assert_eq!(schema.schema_type(), SchemaType::Object);
        assert!(schema.property("matches").is_none());
        assert!(!schema.required_names().iter().any(|n| n == "id"));
        assert!(!schema.required_names().iter().any(|n| n == "matchType"));
        assert!(schema.required_names().iter().any(|n| n == "predictedLegacyYear"));
        assert_eq!(
            schema.property("predictedLegacyYear").unwrap().schema_type(),
            SchemaType::Integer
        );
    }

    #[test]
    fn test_trio_schema_requires_analysis_and_tier() {
        let schema = response_schema(MatchVariant::Trio);
        let names = schema.required_names();
        assert!(names.iter().any(|n| n == "analysis"));
        assert!(names.iter().any(|n| n == "matches"));
        let item = schema.property("matches").unwrap().items().unwrap();
        assert!(item.required_names().iter().any(|n| n == "matchType"));
        assert!(item.required_names().iter().any(|n| n == "id"));
        assert!(!item.required_names().iter().any(|n| n == "lifespan"));
    }

    #[test]
    fn test_schema_renders_for_gemini() {
        let json = response_schema(MatchVariant::Trio).to_json();
        assert_eq!(json["type"], "OBJECT");
        assert_eq!(json["properties"]["matches"]["type"], "ARRAY");
        assert_eq!(
            json["properties"]["matches"]["items"]["properties"]["matchType"]["enum"][0],
            "Perfect Match"
        );
    }
}
