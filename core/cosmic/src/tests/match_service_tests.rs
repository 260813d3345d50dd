use std::sync::Arc;

use serde_json::{json, Value};

use crate::adapter::{LlmMatchService, StubGenerator};
use crate::domain::{MatchFailure, MatchTier, MatchVariant};
use crate::ports::outbound::MatchService;
use crate::tests::fixtures::{match_json, multi_payload, sample_input, single_payload};

const VARIANTS: [MatchVariant; 3] = [MatchVariant::Single, MatchVariant::Trio, MatchVariant::Six];

fn request(text: &str, variant: MatchVariant) -> Result<usize, MatchFailure> {
    let service = LlmMatchService::new(Arc::new(StubGenerator::replying(text)));
    service
        .request_match(&sample_input(), variant)
        .map(|r| r.matches.len())
}

#[test]
fn test_match_count_always_equals_cardinality_or_fails() {
    let mut payloads: Vec<String> = (0..=7).map(multi_payload).collect();
    payloads.push(single_payload());
    payloads.push("not json".to_string());
    payloads.push("{}".to_string());
    for variant in VARIANTS {
        for payload in &payloads {
            match request(payload, variant) {
                Ok(n) => assert_eq!(n, variant.cardinality(), "{:?}", variant),
                Err(f) => assert!(matches!(f, MatchFailure::Parse(_)), "{:?}", f),
            }
        }
    }
}

#[test]
fn test_each_variant_accepts_its_own_shape() {
    assert_eq!(request(&single_payload(), MatchVariant::Single).unwrap(), 1);
    assert_eq!(request(&multi_payload(3), MatchVariant::Trio).unwrap(), 3);
    assert_eq!(request(&multi_payload(6), MatchVariant::Six).unwrap(), 6);
}

#[test]
fn test_single_variant_rejects_wrapped_shape() {
    assert!(matches!(
        request(&multi_payload(1), MatchVariant::Single),
        Err(MatchFailure::Parse(_))
    ));
}

#[test]
fn test_unknown_tier_is_parse_failure() {
    let mut v: Value = serde_json::from_str(&multi_payload(3)).unwrap();
    v["matches"][0]["matchType"] = json!("Distant Cousin");
    assert!(matches!(
        request(&v.to_string(), MatchVariant::Trio),
        Err(MatchFailure::Parse(_))
    ));
}

#[test]
fn test_unknown_status_is_parse_failure() {
    let mut v = match_json(1, Some(MatchTier::SoulMatch));
    v["status"] = json!("immortal");
    assert!(matches!(
        request(&v.to_string(), MatchVariant::Single),
        Err(MatchFailure::Parse(_))
    ));
}

#[test]
fn test_every_request_calls_the_generator_once() {
    let stub = Arc::new(StubGenerator::replying(&multi_payload(3)));
    let service = LlmMatchService::new(stub.clone());
    let input = sample_input();
    service.request_match(&input, MatchVariant::Trio).unwrap();
    service.request_match(&input, MatchVariant::Trio).unwrap();
    assert_eq!(stub.prompts().len(), 2);
}
