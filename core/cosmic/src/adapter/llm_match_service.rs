//! 生成サービスによるマッチ照会（MatchService の実装）
//!
//! プロンプトとスキーマを 1 回送り、返ってきた JSON を型付きの MatchResponse に読み込んで検査する。
//! 形が合わなければ MatchFailure::Parse。部分的な応答は返さない。

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::Value;

use crate::adapter::match_prompt::{build_prompt, response_schema};
use crate::domain::{CelebrityMatch, MatchFailure, MatchResponse, MatchVariant, UserInput};
use crate::ports::outbound::{JsonGenerator, MatchService};

pub struct LlmMatchService {
    generator: Arc<dyn JsonGenerator>,
}

impl LlmMatchService {
    pub fn new(generator: Arc<dyn JsonGenerator>) -> Self {
        Self { generator }
    }
}

impl MatchService for LlmMatchService {
    fn request_match(
        &self,
        input: &UserInput,
        variant: MatchVariant,
    ) -> Result<MatchResponse, MatchFailure> {
        let prompt = build_prompt(input, variant);
        let schema = response_schema(variant);
        let text = self.generator.generate_json(&prompt, &schema)?;
        parse_match_payload(&text, variant)
    }
}

fn parse_error(msg: impl std::fmt::Display) -> MatchFailure {
    MatchFailure::Parse(msg.to_string())
}

/// 応答テキストを MatchResponse に読み込む
///
/// single は著名人オブジェクト単体が返るので、analysis なしの 1 件の応答に包む。
/// id がなければ "match-1" を振る。
pub fn parse_match_payload(text: &str, variant: MatchVariant) -> Result<MatchResponse, MatchFailure> {
    let value: Value = serde_json::from_str(text.trim())
        .map_err(|e| parse_error(format!("payload is not JSON: {}", e)))?;

    let mut response = match variant {
        MatchVariant::Single => {
            let mut value = value;
            let obj = value
                .as_object_mut()
                .ok_or_else(|| parse_error("payload is not an object"))?;
            let missing_id = obj
                .get("id")
                .and_then(Value::as_str)
                .map_or(true, |s| s.trim().is_empty());
            if missing_id {
                obj.insert("id".to_string(), Value::String("match-1".to_string()));
            }
            let m: CelebrityMatch = serde_json::from_value(value).map_err(parse_error)?;
            MatchResponse {
                analysis: None,
                matches: vec![m],
            }
        }
        MatchVariant::Trio | MatchVariant::Six => {
            let r: MatchResponse = serde_json::from_value(value).map_err(parse_error)?;
            if r.analysis.is_none() {
                return Err(parse_error("name analysis is missing"));
            }
            r
        }
    };

    for m in &mut response.matches {
        normalize_optional(m);
    }
    validate(&response, variant)?;
    Ok(response)
}

/// 空文字の任意項目は「なし」として扱う
fn normalize_optional(m: &mut CelebrityMatch) {
    for field in [
        &mut m.era_context,
        &mut m.bio,
        &mut m.lifespan,
        &mut m.mystery_note,
    ] {
        if field.as_deref().map_or(false, |s| s.trim().is_empty()) {
            *field = None;
        }
    }
}

fn validate(response: &MatchResponse, variant: MatchVariant) -> Result<(), MatchFailure> {
    let expected = variant.cardinality();
    if response.matches.len() != expected {
        return Err(parse_error(format!(
            "expected {} matches, got {}",
            expected,
            response.matches.len()
        )));
    }
    let mut seen = HashSet::new();
    for m in &response.matches {
        if m.id.trim().is_empty() {
            return Err(parse_error("match id is blank"));
        }
        if !seen.insert(m.id.as_str()) {
            return Err(parse_error(format!("duplicate match id '{}'", m.id)));
        }
        if m.name.trim().is_empty() {
            return Err(parse_error(format!("match '{}' has no name", m.id)));
        }
        if variant != MatchVariant::Single && m.match_type.is_none() {
            return Err(parse_error(format!("match '{}' has no tier", m.id)));
        }
    }
    Ok(())
}
