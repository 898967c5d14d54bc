//! Query Generator
//!
//! Orchestrates one generation pass: build a prompt from qualifying posts,
//! call the model, parse and validate the output, and degrade to the
//! canonical fallback query on any failure.
//!
//! Contract: the result always carries at least one valid query, and no
//! network or parsing error ever reaches the caller. `from_model` records
//! which path produced the queries.

use serde::Serialize;

use crate::constants::{
    FALLBACK_QUERY, MAX_POST_CHARS, MAX_PROMPT_POSTS, MAX_QUERIES, MAX_QUERY_LEN, MIN_POST_CHARS,
};
use crate::logic::query::llm::{GenerationClient, GenerationError};
use crate::logic::query::validator;

/// Instruction prefix for the generation call. The interesting part of the
/// prompt is the post excerpts appended below it.
const PROMPT_HEADER: &str = "Derive up to 3 search-engine queries (field:value \
syntax, IPv4 addresses, or CVE identifiers) from the following posts. \
One query per line, no commentary.";

// ============================================================================
// RESULT TYPE
// ============================================================================

/// Outcome of one generation call. Always non-empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryGenerationResult {
    /// Validated queries, at most three, model order preserved
    pub queries: Vec<String>,
    /// True when the queries came from the model, false on the fallback path
    pub from_model: bool,
    pub reasoning: String,
}

impl QueryGenerationResult {
    fn fallback(reasoning: &str) -> Self {
        Self {
            queries: vec![FALLBACK_QUERY.to_string()],
            from_model: false,
            reasoning: reasoning.to_string(),
        }
    }
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Generate validated search queries from a collection of posts.
/// Never returns an empty query list; never returns an error.
pub async fn generate_queries(client: &GenerationClient, posts: &[String]) -> QueryGenerationResult {
    let prompt = match build_prompt(posts) {
        Some(prompt) => prompt,
        None => return QueryGenerationResult::fallback("no qualifying posts to analyze"),
    };

    resolve_model_output(client.generate(&prompt).await)
}

// ============================================================================
// PROMPT ASSEMBLY
// ============================================================================

/// Build the prompt from up to 10 qualifying posts, each truncated to 200
/// characters. Returns None when nothing qualifies.
pub fn build_prompt(posts: &[String]) -> Option<String> {
    let excerpts: Vec<String> = posts
        .iter()
        .map(|p| p.trim())
        .filter(|p| p.chars().count() >= MIN_POST_CHARS)
        .take(MAX_PROMPT_POSTS)
        .map(|p| truncate_chars(p, MAX_POST_CHARS))
        .collect();

    if excerpts.is_empty() {
        return None;
    }

    let mut prompt = String::from(PROMPT_HEADER);
    for excerpt in &excerpts {
        prompt.push_str("\n- ");
        prompt.push_str(excerpt);
    }

    Some(prompt)
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

// ============================================================================
// RESPONSE PARSING
// ============================================================================

/// Turn the call outcome into the guaranteed result
fn resolve_model_output(outcome: Result<String, GenerationError>) -> QueryGenerationResult {
    match outcome {
        Ok(text) => {
            let queries = extract_queries(&text);
            if queries.is_empty() {
                QueryGenerationResult::fallback("model output contained no valid queries")
            } else {
                let reasoning = format!("{} validated queries from model output", queries.len());
                QueryGenerationResult {
                    queries,
                    from_model: true,
                    reasoning,
                }
            }
        }
        Err(e) => {
            log::debug!("Generation call failed ({}), using fallback query", e);
            QueryGenerationResult::fallback(&format!("generation call failed: {}", e))
        }
    }
}

/// Split raw model text into candidate lines, strip markdown artifacts,
/// validate, and keep the first valid queries in original order.
pub fn extract_queries(raw: &str) -> Vec<String> {
    let mut queries = Vec::new();

    for line in raw.lines() {
        let candidate = strip_artifacts(line);
        if candidate.is_empty() || candidate.chars().count() > MAX_QUERY_LEN {
            continue;
        }

        if validator::is_valid_query(&candidate) {
            queries.push(candidate);
            if queries.len() == MAX_QUERIES {
                break;
            }
        }
    }

    queries
}

/// Remove code-fence markers, bullet markers and numeric-list prefixes
fn strip_artifacts(line: &str) -> String {
    let mut text = line.trim();

    // A fence line carries no query
    if text.starts_with("```") {
        return String::new();
    }

    // Bullet markers
    for marker in ["- ", "* ", "+ ", "\u{2022} "] {
        if let Some(rest) = text.strip_prefix(marker) {
            text = rest.trim_start();
            break;
        }
    }

    // Numeric-list prefixes: "1. query" / "2) query"
    let digits = text.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 && digits < text.len() {
        let rest = &text[digits..];
        if let Some(stripped) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            if stripped.starts_with(' ') {
                text = stripped.trim_start();
            }
        }
    }

    // Inline code spans around the query itself
    text.trim_matches('`').trim().to_string()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::config::GenerationConfig;

    #[tokio::test]
    async fn test_empty_posts_always_fall_back() {
        let client = GenerationClient::new(GenerationConfig::default());

        let result = generate_queries(&client, &[]).await;

        assert_eq!(result.queries, vec![FALLBACK_QUERY.to_string()]);
        assert!(!result.from_model);
    }

    #[tokio::test]
    async fn test_short_posts_do_not_qualify() {
        let client = GenerationClient::new(GenerationConfig::default());
        let posts = vec!["too short".to_string(), "tiny".to_string()];

        let result = generate_queries(&client, &posts).await;

        assert_eq!(result.queries, vec![FALLBACK_QUERY.to_string()]);
        assert!(!result.from_model);
    }

    #[test]
    fn test_prompt_limits() {
        let posts: Vec<String> = (0..15)
            .map(|i| format!("post number {:02} with enough content {}", i, "x".repeat(300)))
            .collect();

        let prompt = build_prompt(&posts).unwrap();

        // 10 posts max, each truncated to 200 chars
        assert_eq!(prompt.matches("\n- ").count(), 10);
        for line in prompt.lines().skip(1) {
            assert!(line.chars().count() <= MAX_POST_CHARS + 2);
        }
    }

    #[test]
    fn test_extract_valid_queries_in_order() {
        let raw = "product:Apache port:80\nCVE-2024-1234\nrandom sentence";

        let queries = extract_queries(raw);

        assert_eq!(
            queries,
            vec![
                "product:Apache port:80".to_string(),
                "CVE-2024-1234".to_string(),
            ]
        );
    }

    #[test]
    fn test_extract_rejects_non_answer() {
        assert!(extract_queries("no data available").is_empty());
    }

    #[test]
    fn test_extract_caps_at_three() {
        let raw = "port:80\nport:443\nport:8080\nport:22";
        assert_eq!(extract_queries(raw).len(), 3);
        assert_eq!(extract_queries(raw)[2], "port:8080");
    }

    #[test]
    fn test_markdown_artifacts_are_stripped() {
        let raw = "```\n1. product:Apache\n- port:443\n* `service:ssh`\n```";

        let queries = extract_queries(raw);

        assert_eq!(
            queries,
            vec![
                "product:Apache".to_string(),
                "port:443".to_string(),
                "service:ssh".to_string(),
            ]
        );
    }

    #[test]
    fn test_numbered_list_prefixes() {
        assert_eq!(strip_artifacts("2) port:443"), "port:443");
        assert_eq!(strip_artifacts("10. service:http"), "service:http");
        // Bare IPv4 lines are not list prefixes
        assert_eq!(strip_artifacts("10.0.0.1"), "10.0.0.1");
    }

    #[test]
    fn test_resolve_success_marks_from_model() {
        let result = resolve_model_output(Ok("port:80".to_string()));
        assert!(result.from_model);
        assert_eq!(result.queries, vec!["port:80".to_string()]);
    }

    #[test]
    fn test_resolve_no_valid_lines_falls_back() {
        let result = resolve_model_output(Ok("no data available".to_string()));
        assert!(!result.from_model);
        assert_eq!(result.queries, vec![FALLBACK_QUERY.to_string()]);
    }

    #[test]
    fn test_resolve_call_failure_falls_back() {
        let result =
            resolve_model_output(Err(GenerationError::Network("timed out".to_string())));
        assert!(!result.from_model);
        assert_eq!(result.queries, vec![FALLBACK_QUERY.to_string()]);
        assert!(result.reasoning.contains("generation call failed"));
    }
}
