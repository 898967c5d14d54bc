//! Core Configuration
//!
//! Assembles the configuration surface this core consumes: endpoint
//! addresses, per-call timeouts, retention and analysis windows. Values
//! come from `constants` (env overrides with defaults); nothing here is
//! computed by the core itself.

use std::path::PathBuf;

use crate::constants;

/// Generation endpoint configuration
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    pub endpoint: String,
    pub model: String,
    pub timeout_seconds: u64,
    pub temperature: f32,
    pub top_p: f32,
    pub num_predict: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: constants::get_generation_url(),
            model: constants::get_generation_model(),
            timeout_seconds: constants::get_generation_timeout(),
            temperature: constants::DEFAULT_TEMPERATURE,
            top_p: constants::DEFAULT_TOP_P,
            num_predict: constants::DEFAULT_NUM_PREDICT,
        }
    }
}

/// Translation endpoint configuration
#[derive(Debug, Clone)]
pub struct TranslationConfig {
    /// Ordered endpoint list: primary first, then extras. Deduplicated.
    pub endpoints: Vec<String>,
    pub timeout_seconds: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoints: dedup_endpoints(
                constants::get_translate_url(),
                constants::get_translate_extra_urls(),
            ),
            timeout_seconds: constants::get_translate_timeout(),
        }
    }
}

/// Analysis log configuration
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    pub path: PathBuf,
    pub retention: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: constants::get_history_path(),
            retention: constants::get_retention(),
        }
    }
}

/// Trend analysis windows and limits
#[derive(Debug, Clone)]
pub struct TrendConfig {
    pub recent_window: usize,
    pub context_limit: usize,
    pub common_cve_limit: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            recent_window: constants::DEFAULT_RECENT_WINDOW,
            context_limit: constants::DEFAULT_CONTEXT_LIMIT,
            common_cve_limit: constants::DEFAULT_COMMON_CVE_LIMIT,
        }
    }
}

/// Full configuration surface of the core
#[derive(Debug, Clone, Default)]
pub struct CoreConfig {
    pub generation: GenerationConfig,
    pub translation: TranslationConfig,
    pub history: HistoryConfig,
    pub trend: TrendConfig,
}

impl CoreConfig {
    /// Read configuration from the environment with built-in defaults
    pub fn from_env() -> Self {
        Self::default()
    }
}

/// Build the ordered endpoint list: primary first, then extras in listed
/// order, duplicates removed. Trailing slashes are ignored for comparison
/// so `http://a/` and `http://a` count as one endpoint.
pub fn dedup_endpoints(primary: String, extras: Vec<String>) -> Vec<String> {
    let mut endpoints: Vec<String> = Vec::with_capacity(1 + extras.len());

    for candidate in std::iter::once(primary).chain(extras) {
        let normalized = candidate.trim_end_matches('/').to_string();
        if normalized.is_empty() {
            continue;
        }
        if !endpoints.contains(&normalized) {
            endpoints.push(normalized);
        }
    }

    endpoints
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_preserves_order() {
        let endpoints = dedup_endpoints(
            "https://a.example".to_string(),
            vec![
                "https://b.example".to_string(),
                "https://a.example/".to_string(),
                "https://c.example".to_string(),
                "https://b.example".to_string(),
            ],
        );

        assert_eq!(
            endpoints,
            vec![
                "https://a.example".to_string(),
                "https://b.example".to_string(),
                "https://c.example".to_string(),
            ]
        );
    }

    #[test]
    fn test_dedup_skips_empty_extras() {
        let endpoints = dedup_endpoints("https://a.example".to_string(), vec!["".to_string()]);
        assert_eq!(endpoints, vec!["https://a.example".to_string()]);
    }
}
