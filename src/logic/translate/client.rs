//! Translation Client
//!
//! HTTP client for LibreTranslate-compatible endpoints with sequential
//! failover. Unlike query generation, translation failure is load-bearing
//! information: after exhausting every endpoint the last error is surfaced
//! to the caller, never silently absorbed.

use std::time::Duration;

use serde::Serialize;

use crate::logic::config::TranslationConfig;
use crate::logic::translate::failover::{self, FailoverError};

// ============================================================================
// WIRE TYPES
// ============================================================================

#[derive(Debug, Clone, Serialize)]
struct TranslateRequest {
    q: String,
    source: String,
    target: String,
    format: String,
}

/// Response field names recognized as carrying the translated text
pub const TRANSLATED_TEXT_FIELDS: &[&str] = &["translatedText", "translated_text", "translation"];

/// Successful translation plus the endpoint that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationResult {
    pub text: String,
    pub endpoint: String,
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Translation errors. Timeouts surface as `Network`.
#[derive(Debug, Clone)]
pub enum TranslateError {
    NoEndpoints,
    Network(String),
    Server(u16),
    Parse(String),
    /// 2xx response without any recognized translated-text field
    MissingField,
}

impl std::fmt::Display for TranslateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoEndpoints => write!(f, "No translation endpoints configured"),
            Self::Network(e) => write!(f, "Network error: {}", e),
            Self::Server(code) => write!(f, "Server error: {}", code),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::MissingField => write!(f, "Response lacks a translated-text field"),
        }
    }
}

impl std::error::Error for TranslateError {}

// ============================================================================
// CLIENT
// ============================================================================

/// Translation client over an ordered, deduplicated endpoint list
pub struct TranslateClient {
    config: TranslationConfig,
    http: reqwest::Client,
}

impl TranslateClient {
    pub fn new(config: TranslationConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Client configured from the environment
    pub fn from_env() -> Self {
        Self::new(TranslationConfig::default())
    }

    pub fn endpoints(&self) -> &[String] {
        &self.config.endpoints
    }

    /// Translate `text`, trying each endpoint in order. The first success
    /// short-circuits; if all endpoints fail the last error is returned.
    pub async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<TranslationResult, TranslateError> {
        let request = TranslateRequest {
            q: text.to_string(),
            source: source.to_string(),
            target: target.to_string(),
            format: "text".to_string(),
        };
        let http = self.http.clone();
        let timeout = Duration::from_secs(self.config.timeout_seconds);

        let outcome = failover::try_each(&self.config.endpoints, move |endpoint| {
            let http = http.clone();
            let request = request.clone();
            async move { attempt_translate(http, endpoint, request, timeout).await }
        })
        .await;

        match outcome {
            Ok((text, endpoint)) => Ok(TranslationResult { text, endpoint }),
            Err(FailoverError::Exhausted(e)) => Err(e),
            Err(FailoverError::NoEndpoints) => Err(TranslateError::NoEndpoints),
        }
    }
}

/// One translation attempt against one endpoint, independently bounded
/// by the timeout
async fn attempt_translate(
    http: reqwest::Client,
    endpoint: String,
    request: TranslateRequest,
    timeout: Duration,
) -> Result<String, TranslateError> {
    let url = format!("{}/translate", endpoint.trim_end_matches('/'));

    let response = http
        .post(&url)
        .timeout(timeout)
        .json(&request)
        .send()
        .await
        .map_err(|e| TranslateError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(TranslateError::Server(response.status().as_u16()));
    }

    let payload: serde_json::Value = response
        .json()
        .await
        .map_err(|e| TranslateError::Parse(e.to_string()))?;

    extract_translated_text(&payload).ok_or(TranslateError::MissingField)
}

/// First recognized translated-text field present in the payload
fn extract_translated_text(payload: &serde_json::Value) -> Option<String> {
    TRANSLATED_TEXT_FIELDS
        .iter()
        .find_map(|field| payload.get(field).and_then(|v| v.as_str()))
        .map(|s| s.to_string())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_recognized_fields() {
        let payload = json!({ "translatedText": "hello" });
        assert_eq!(extract_translated_text(&payload), Some("hello".to_string()));

        let payload = json!({ "translated_text": "salut" });
        assert_eq!(extract_translated_text(&payload), Some("salut".to_string()));

        let payload = json!({ "translation": "hola" });
        assert_eq!(extract_translated_text(&payload), Some("hola".to_string()));
    }

    #[test]
    fn test_extract_prefers_first_field() {
        let payload = json!({ "translation": "second", "translatedText": "first" });
        assert_eq!(extract_translated_text(&payload), Some("first".to_string()));
    }

    #[test]
    fn test_extract_missing_or_wrong_type() {
        assert_eq!(extract_translated_text(&json!({ "detectedLanguage": "en" })), None);
        assert_eq!(extract_translated_text(&json!({ "translatedText": 7 })), None);
    }

    #[test]
    fn test_request_wire_shape() {
        let request = TranslateRequest {
            q: "bonjour".to_string(),
            source: "fr".to_string(),
            target: "en".to_string(),
            format: "text".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["q"], "bonjour");
        assert_eq!(json["source"], "fr");
        assert_eq!(json["target"], "en");
        assert_eq!(json["format"], "text");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            TranslateError::Server(502).to_string(),
            "Server error: 502"
        );
        assert_eq!(
            TranslateError::MissingField.to_string(),
            "Response lacks a translated-text field"
        );
    }
}
