//! Query Validation Rules
//!
//! The two fixed pattern sets used by the validator, kept as declarative
//! data so they stay auditable in one place. NO validation logic here -
//! only the tables and their compiled forms.

use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// PATTERN TABLES
// ============================================================================

/// One labeled pattern
#[derive(Debug, Clone, Copy)]
pub struct PatternRule {
    pub label: &'static str,
    pub pattern: &'static str,
}

/// Lines the model produces when it has nothing useful to say: negations,
/// refusals, off-topic chatter. Any match rejects the candidate.
pub const NON_ANSWER_RULES: &[PatternRule] = &[
    PatternRule {
        label: "negation-opening",
        pattern: r"(?i)^(no|none|nothing|n/?a|unknown|null)\b",
    },
    PatternRule {
        label: "refusal",
        pattern: r"(?i)\b(cannot|can't|can not|unable to|not (possible|available|enough|applicable))\b",
    },
    PatternRule {
        label: "assistant-chatter",
        pattern: r"(?i)\b(sorry|apologi[sz]e|as an ai|language model)\b",
    },
    PatternRule {
        label: "preamble",
        pattern: r"(?i)^(here (is|are)|sure\b|okay\b|note[:,]|i (think|believe|would))",
    },
    PatternRule {
        label: "empty-result",
        pattern: r"(?i)\b(no (data|results?|information|queries|matches))\b",
    },
];

/// Recognized search-query syntax. At least one match (or a literal from
/// `QUERY_LITERALS`) is required for a candidate to be accepted.
pub const QUERY_SYNTAX_RULES: &[PatternRule] = &[
    PatternRule {
        label: "service-field",
        pattern: r"(?i)^(service|port|protocol|banner|device|os):\S",
    },
    PatternRule {
        label: "software-field",
        pattern: r"(?i)^(product|app|software|server|version|vendor):\S",
    },
    PatternRule {
        label: "vulnerability-field",
        pattern: r"(?i)^(vuln|cve|vulnerability|exploit):\S",
    },
    PatternRule {
        label: "ipv4-literal",
        pattern: r"\b(?:(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)\.){3}(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)\b",
    },
    PatternRule {
        label: "cve-id",
        pattern: r"(?i)\bCVE-\d{4}-\d{4,}\b",
    },
];

/// Literal substrings that mark a candidate as query syntax on their own
pub const QUERY_LITERALS: &[&str] = &["after:", "before:", "port:"];

// ============================================================================
// COMPILED FORMS
// ============================================================================

static NON_ANSWER_REGEXES: Lazy<Vec<(&'static str, Regex)>> =
    Lazy::new(|| compile(NON_ANSWER_RULES));

static QUERY_SYNTAX_REGEXES: Lazy<Vec<(&'static str, Regex)>> =
    Lazy::new(|| compile(QUERY_SYNTAX_RULES));

fn compile(rules: &[PatternRule]) -> Vec<(&'static str, Regex)> {
    rules
        .iter()
        .filter_map(|rule| match Regex::new(rule.pattern) {
            Ok(re) => Some((rule.label, re)),
            Err(e) => {
                log::error!("Invalid pattern '{}' ({}): {}", rule.label, rule.pattern, e);
                None
            }
        })
        .collect()
}

// ============================================================================
// LOOKUPS
// ============================================================================

/// Label of the first non-answer rule the text matches, if any
pub fn non_answer_match(text: &str) -> Option<&'static str> {
    NON_ANSWER_REGEXES
        .iter()
        .find(|(_, re)| re.is_match(text))
        .map(|(label, _)| *label)
}

/// Label of the first query-syntax rule the text matches, if any
pub fn syntax_match(text: &str) -> Option<&'static str> {
    QUERY_SYNTAX_REGEXES
        .iter()
        .find(|(_, re)| re.is_match(text))
        .map(|(label, _)| *label)
}

/// True if the text contains one of the literal query markers
pub fn has_query_literal(text: &str) -> bool {
    let lower = text.to_lowercase();
    QUERY_LITERALS.iter().any(|lit| lower.contains(lit))
}

// ============================================================================
// TESTS
// ============================================================================
