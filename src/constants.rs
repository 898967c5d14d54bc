//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change a default endpoint or limit, only edit this file.

use std::path::PathBuf;

/// Default generation endpoint (Ollama-compatible API)
///
/// This is the fallback URL when no environment variable is set.
pub const DEFAULT_GENERATION_URL: &str = "http://localhost:11434";

/// Default generation model name
pub const DEFAULT_GENERATION_MODEL: &str = "llama3";

/// Default generation timeout (seconds)
pub const DEFAULT_GENERATION_TIMEOUT: u64 = 30;

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Default nucleus-sampling parameter
pub const DEFAULT_TOP_P: f32 = 0.9;

/// Default output-length cap (tokens)
pub const DEFAULT_NUM_PREDICT: u32 = 200;

/// Primary translation endpoint (LibreTranslate-compatible API)
pub const DEFAULT_TRANSLATE_URL: &str = "https://libretranslate.com";

/// Default per-endpoint translation timeout (seconds)
pub const DEFAULT_TRANSLATE_TIMEOUT: u64 = 10;

/// Canonical fallback search query, returned whenever no valid
/// model-derived query exists
pub const FALLBACK_QUERY: &str = "after:1";

/// Maximum queries kept from one generation call
pub const MAX_QUERIES: usize = 3;

/// Maximum posts included in one prompt
pub const MAX_PROMPT_POSTS: usize = 10;

/// Minimum post content length to qualify for the prompt
pub const MIN_POST_CHARS: usize = 20;

/// Posts are truncated to this many characters before prompting
pub const MAX_POST_CHARS: usize = 200;

/// Accepted query length bounds
pub const MIN_QUERY_LEN: usize = 2;
pub const MAX_QUERY_LEN: usize = 200;

/// Maximum records retained in the analysis log
pub const DEFAULT_RETENTION: usize = 30;

/// Records considered "recent" for trend and emerging-threat windows
pub const DEFAULT_RECENT_WINDOW: usize = 5;

/// Records returned as previous analyses in the historical context
pub const DEFAULT_CONTEXT_LIMIT: usize = 10;

/// Maximum repeated CVEs ranked in the historical context
pub const DEFAULT_COMMON_CVE_LIMIT: usize = 10;

/// Mean-score delta separating stable from improving/worsening
pub const TREND_DELTA: f64 = 10.0;

/// Neutral average score reported when no history exists
pub const NEUTRAL_SCORE: u8 = 50;

/// History file name
pub const HISTORY_FILE_NAME: &str = "analysis_history.json";

/// App name (used for the data directory)
pub const APP_NAME: &str = "IntelWatch";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get generation endpoint URL from environment or use default
pub fn get_generation_url() -> String {
    std::env::var("INTELWATCH_GENERATION_URL")
        .unwrap_or_else(|_| DEFAULT_GENERATION_URL.to_string())
}

/// Get generation model name from environment or use default
pub fn get_generation_model() -> String {
    std::env::var("INTELWATCH_GENERATION_MODEL")
        .unwrap_or_else(|_| DEFAULT_GENERATION_MODEL.to_string())
}

/// Get generation timeout from environment or use default
pub fn get_generation_timeout() -> u64 {
    std::env::var("INTELWATCH_GENERATION_TIMEOUT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_GENERATION_TIMEOUT)
}

/// Get primary translation endpoint from environment or use default
pub fn get_translate_url() -> String {
    std::env::var("INTELWATCH_TRANSLATE_URL")
        .unwrap_or_else(|_| DEFAULT_TRANSLATE_URL.to_string())
}

/// Get extra translation endpoints (comma-separated) from environment
pub fn get_translate_extra_urls() -> Vec<String> {
    std::env::var("INTELWATCH_TRANSLATE_EXTRA_URLS")
        .map(|s| {
            s.split(',')
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Get per-endpoint translation timeout from environment or use default
pub fn get_translate_timeout() -> u64 {
    std::env::var("INTELWATCH_TRANSLATE_TIMEOUT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TRANSLATE_TIMEOUT)
}

/// Get retention limit from environment or use default
pub fn get_retention() -> usize {
    std::env::var("INTELWATCH_RETENTION")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_RETENTION)
}

/// Default path of the persisted analysis log
pub fn get_history_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
        .join(HISTORY_FILE_NAME)
}
