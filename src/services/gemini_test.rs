use super::*;

// =============================================================
// Request construction
// =============================================================

#[test]
fn request_body_carries_the_topic_prompt() {
    let body = build_request_body("board games", 8);
    let text = body["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default();
    assert!(text.contains("board games"));
    assert!(text.contains('8'));
}

#[test]
fn request_body_pins_a_structured_json_schema() {
    let body = build_request_body("snacks", DEFAULT_ITEM_COUNT);
    let config = &body["generationConfig"];
    assert_eq!(config["responseMimeType"], "application/json");
    let schema = &config["responseSchema"];
    assert_eq!(schema["type"], "OBJECT");
    assert_eq!(schema["properties"]["items"]["type"], "ARRAY");
    assert_eq!(schema["required"][0], "items");
}

#[test]
fn endpoint_targets_the_flash_model() {
    let url = endpoint();
    assert!(url.starts_with("https://generativelanguage.googleapis.com/"));
    assert!(url.contains(MODEL));
    assert!(url.ends_with(":generateContent"));
}

// =============================================================
// Response parsing
// =============================================================

fn wrap_candidate(payload: &str) -> String {
    serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": payload }] }
        }]
    })
    .to_string()
}

#[test]
fn parse_extracts_items_in_order() {
    let body = wrap_candidate(r#"{"items":["Chess","Go","Catan"]}"#);
    let items = parse_generated_items(&body).unwrap();
    assert_eq!(items, ["Chess", "Go", "Catan"]);
}

#[test]
fn parse_trims_and_drops_blank_items() {
    let body = wrap_candidate(r#"{"items":["  Chess  ","","   "]}"#);
    let items = parse_generated_items(&body).unwrap();
    assert_eq!(items, ["Chess"]);
}

#[test]
fn parse_rejects_a_response_without_candidates() {
    let err = parse_generated_items(r#"{"candidates":[]}"#).unwrap_err();
    assert!(err.contains("no content"));
}

#[test]
fn parse_rejects_non_json_bodies() {
    let err = parse_generated_items("<html>rate limited</html>").unwrap_err();
    assert!(err.contains("unexpected Gemini response"));
}

#[test]
fn parse_rejects_a_payload_that_is_not_the_schema() {
    let body = wrap_candidate("just some prose, not JSON");
    let err = parse_generated_items(&body).unwrap_err();
    assert!(err.contains("unexpected Gemini payload"));
}
