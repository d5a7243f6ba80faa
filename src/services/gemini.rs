//! Gemini list generation: topic in, ordered wheel entries out.
//!
//! Client-side (csr): real HTTP call via `gloo-net`. Off-wasm builds get
//! a stub error since generation is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<Vec<String>, String>`. A missing credential or a
//! failed/unparseable upstream call is terminal for that one request;
//! the user may retry manually and the entry list is never touched from
//! here.

#[cfg(test)]
#[path = "gemini_test.rs"]
mod gemini_test;

#[cfg(any(test, feature = "csr"))]
use serde::Deserialize;

/// Number of entries requested when the user does not choose one.
pub const DEFAULT_ITEM_COUNT: u32 = 10;
/// Per-entry length target passed to the model; advisory, not enforced.
pub const ADVISORY_MAX_CHARS: u32 = 20;

pub(crate) const MISSING_KEY_ERROR: &str = "GEMINI_API_KEY is not configured";

#[cfg(any(test, feature = "csr"))]
const MODEL: &str = "gemini-3-flash-preview";

/// Compile-time credential, baked into the bundle at build time like the
/// rest of the deployment configuration.
fn api_key() -> Option<&'static str> {
    option_env!("GEMINI_API_KEY").filter(|key| !key.is_empty())
}

#[cfg(any(test, feature = "csr"))]
fn endpoint() -> String {
    format!("https://generativelanguage.googleapis.com/v1beta/models/{MODEL}:generateContent")
}

#[cfg(any(test, feature = "csr"))]
fn prompt_text(topic: &str, count: u32) -> String {
    format!(
        "Create a list of about {count} short items (under {ADVISORY_MAX_CHARS} characters each) \
         for the topic: \"{topic}\". This is content for a lucky wheel."
    )
}

/// Request body with a structured-output schema so the reply is a strict
/// `{ "items": [string] }` object.
#[cfg(any(test, feature = "csr"))]
fn build_request_body(topic: &str, count: u32) -> serde_json::Value {
    serde_json::json!({
        "contents": [{ "parts": [{ "text": prompt_text(topic, count) }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "items": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" }
                    }
                },
                "required": ["items"]
            }
        }
    })
}

#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Deserialize)]
struct GeneratedList {
    #[serde(default)]
    items: Vec<String>,
}

/// Pull the schema-shaped item list out of a raw API response body.
#[cfg(any(test, feature = "csr"))]
fn parse_generated_items(body: &str) -> Result<Vec<String>, String> {
    let response = serde_json::from_str::<GenerateContentResponse>(body)
        .map_err(|e| format!("unexpected Gemini response: {e}"))?;
    let text = response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.parts.first())
        .map(|part| part.text.clone())
        .ok_or_else(|| "Gemini response contained no content".to_owned())?;
    let list = serde_json::from_str::<GeneratedList>(&text)
        .map_err(|e| format!("unexpected Gemini payload: {e}"))?;
    Ok(list
        .items
        .into_iter()
        .map(|item| item.trim().to_owned())
        .filter(|item| !item.is_empty())
        .collect())
}

/// Generate wheel entries for `topic`.
///
/// # Errors
///
/// Missing credential, transport failure, non-success status, or an
/// unparseable response body.
#[allow(clippy::unused_async)]
pub async fn generate_wheel_list(topic: &str, count: u32) -> Result<Vec<String>, String> {
    let Some(key) = api_key() else {
        return Err(MISSING_KEY_ERROR.to_owned());
    };

    #[cfg(feature = "csr")]
    {
        let url = format!("{}?key={key}", endpoint());
        let response = gloo_net::http::Request::post(&url)
            .json(&build_request_body(topic, count))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.ok() {
            return Err(format!("Gemini request failed: {}", response.status()));
        }
        let body = response.text().await.map_err(|e| e.to_string())?;
        parse_generated_items(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (topic, count, key);
        Err("Gemini generation is only available in the browser".to_owned())
    }
}
