use chrono::{TimeZone, Utc};
use promptproof_core::{LlmResponse, ProofError};
use serde_json::json;

#[test]
fn builder_defaults_tokens_used_to_prompt_plus_completion() {
    let response = LlmResponse::builder("gpt-4o-mini", "openai")
        .content("4")
        .tokens(50, 50)
        .latency_ms(120.0)
        .cost_usd(0.001)
        .build()
        .unwrap();

    assert_eq!(response.tokens_used, 100);
    assert_eq!(response.prompt_tokens, 50);
    assert_eq!(response.completion_tokens, 50);
}

#[test]
fn builder_allows_provider_rounded_tokens_used() {
    // Providers may round or estimate, so the sum invariant is not enforced.
    let response = LlmResponse::builder("claude-3-haiku", "anthropic")
        .tokens(40, 60)
        .tokens_used(101)
        .build()
        .unwrap();

    assert_eq!(response.tokens_used, 101);
}

#[test]
fn defaulted_tokens_used_saturates_instead_of_overflowing() {
    let response = LlmResponse::builder("m", "p")
        .tokens(u32::MAX, 1)
        .build()
        .unwrap();

    assert_eq!(response.tokens_used, u32::MAX);
}

#[test]
fn builder_rejects_negative_latency() {
    let err = LlmResponse::builder("m", "p")
        .latency_ms(-5.0)
        .build()
        .unwrap_err();

    assert!(matches!(err, ProofError::InvalidRecord(_)));
}

#[test]
fn builder_rejects_non_finite_cost() {
    let err = LlmResponse::builder("m", "p")
        .cost_usd(f64::NAN)
        .build()
        .unwrap_err();

    assert!(matches!(err, ProofError::InvalidRecord(_)));
}

#[test]
fn builder_carries_metadata_and_raw_response() {
    let timestamp = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let response = LlmResponse::builder("gpt-4o", "openai")
        .content("hello")
        .timestamp(timestamp)
        .metadata_entry("suite", json!("smoke"))
        .metadata_entry("attempt", json!(2))
        .raw_response(json!({"id": "chatcmpl-123"}))
        .build()
        .unwrap();

    assert_eq!(response.timestamp, timestamp);
    assert_eq!(response.metadata["suite"], json!("smoke"));
    assert_eq!(response.metadata["attempt"], json!(2));
    assert_eq!(response.raw_response, Some(json!({"id": "chatcmpl-123"})));
}

#[test]
fn empty_metadata_and_raw_response_are_skipped_in_json() {
    let response = LlmResponse::builder("m", "p").content("x").build().unwrap();
    let serialized = serde_json::to_string(&response).unwrap();

    assert!(!serialized.contains("metadata"));
    assert!(!serialized.contains("raw_response"));
}
