//! Generation Client
//!
//! HTTP client for the text-generation endpoint (Ollama-compatible
//! `/api/generate`). Send prompt + sampling options, receive text, honor
//! the timeout - nothing else. Absorbing failures is the generator's job,
//! not this client's.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::logic::config::GenerationConfig;

// ============================================================================
// WIRE TYPES
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    top_p: f32,
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Generation call errors. Timeouts surface as `Network` - the caller
/// treats both the same way.
#[derive(Debug, Clone)]
pub enum GenerationError {
    Network(String),
    Server(u16),
    Parse(String),
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(e) => write!(f, "Network error: {}", e),
            Self::Server(code) => write!(f, "Server error: {}", code),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for GenerationError {}

// ============================================================================
// CLIENT
// ============================================================================

/// Client for one generation endpoint
pub struct GenerationClient {
    config: GenerationConfig,
    http: reqwest::Client,
}

impl GenerationClient {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Client configured from the environment
    pub fn from_env() -> Self {
        Self::new(GenerationConfig::default())
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// One generation call, bounded by the configured timeout
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!(
            "{}/api/generate",
            self.config.endpoint.trim_end_matches('/')
        );

        let request = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: self.config.temperature,
                top_p: self.config.top_p,
                num_predict: self.config.num_predict,
            },
        };

        let response = self
            .http
            .post(&url)
            .timeout(Duration::from_secs(self.config.timeout_seconds))
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GenerationError::Server(response.status().as_u16()));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Parse(e.to_string()))?;

        Ok(body.response)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = GenerateRequest {
            model: "llama3",
            prompt: "derive queries",
            stream: false,
            options: GenerateOptions {
                temperature: 0.3,
                top_p: 0.9,
                num_predict: 200,
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama3");
        assert_eq!(json["stream"], false);
        assert_eq!(json["options"]["num_predict"], 200);
    }

    #[test]
    fn test_error_display() {
        let e = GenerationError::Server(503);
        assert_eq!(e.to_string(), "Server error: 503");
    }
}
