//! Query Validator
//!
//! Pure predicate deciding whether one candidate line is a usable search
//! query. Applies the fixed tables from `rules` in order: length bounds,
//! non-answer rejection, then query-syntax recognition.

use crate::constants::{MAX_QUERY_LEN, MIN_QUERY_LEN};
use crate::logic::query::rules;

/// True if the candidate is a well-formed search query
pub fn is_valid_query(candidate: &str) -> bool {
    let candidate = candidate.trim();

    let len = candidate.chars().count();
    if len < MIN_QUERY_LEN || len > MAX_QUERY_LEN {
        return false;
    }

    if rules::non_answer_match(candidate).is_some() {
        return false;
    }

    rules::syntax_match(candidate).is_some() || rules::has_query_literal(candidate)
}

// ============================================================================
// TESTS
// ============================================================================
