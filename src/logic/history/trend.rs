//! Trend Analyzer
//!
//! Pure derivation of `HistoricalContext` from the record list.
//! Recomputed on demand; same input always yields the same output.
//!
//! Cold start (no records) yields a fixed neutral context rather than an
//! error: average 50, stable trend, empty lists.

use std::collections::HashMap;

use crate::constants;
use crate::logic::config::TrendConfig;
use crate::logic::history::types::{AnalysisRecord, HistoricalContext, TrendDirection};

// ============================================================================
// PUBLIC API
// ============================================================================

/// Derive the historical context with default windows and limits
pub fn analyze(records: &[AnalysisRecord]) -> HistoricalContext {
    analyze_with(records, &TrendConfig::default())
}

/// Derive the historical context with explicit windows and limits
pub fn analyze_with(records: &[AnalysisRecord], config: &TrendConfig) -> HistoricalContext {
    if records.is_empty() {
        return HistoricalContext {
            previous_analyses: Vec::new(),
            average_risk_score: constants::NEUTRAL_SCORE,
            trend: TrendDirection::Stable,
            common_cves: Vec::new(),
            emerging_threats: Vec::new(),
        };
    }

    let recent_start = records.len().saturating_sub(config.recent_window);
    let context_start = records.len().saturating_sub(config.context_limit);

    HistoricalContext {
        previous_analyses: records[context_start..].to_vec(),
        average_risk_score: rounded_mean(records),
        trend: classify_trend(&records[..recent_start], &records[recent_start..]),
        common_cves: common_cves(records, config.common_cve_limit),
        emerging_threats: emerging_threats(&records[recent_start..]),
    }
}

// ============================================================================
// INTERNAL HELPERS
// ============================================================================

/// Arithmetic mean of risk scores
fn mean_score(records: &[AnalysisRecord]) -> f64 {
    let sum: f64 = records.iter().map(|r| r.risk_score as f64).sum();
    sum / records.len() as f64
}

/// Mean across all records, rounded half-up to the nearest integer
fn rounded_mean(records: &[AnalysisRecord]) -> u8 {
    mean_score(records).round() as u8
}

/// Compare the recent window against everything before it. An empty older
/// slice inherits the recent mean, which keeps short histories stable.
fn classify_trend(older: &[AnalysisRecord], recent: &[AnalysisRecord]) -> TrendDirection {
    let recent_mean = mean_score(recent);
    let older_mean = if older.is_empty() {
        recent_mean
    } else {
        mean_score(older)
    };

    if recent_mean > older_mean + constants::TREND_DELTA {
        TrendDirection::Worsening
    } else if recent_mean < older_mean - constants::TREND_DELTA {
        TrendDirection::Improving
    } else {
        TrendDirection::Stable
    }
}

/// CVEs appearing in more than one record, most frequent first. Ties keep
/// the order in which each CVE was first encountered iterating oldest to
/// newest - tracked explicitly, never left to map iteration order.
fn common_cves(records: &[AnalysisRecord], limit: usize) -> Vec<String> {
    let mut stats: HashMap<&str, (usize, usize)> = HashMap::new();
    let mut next_seen_index = 0usize;

    for record in records {
        for cve in &record.cve_ids {
            let entry = stats.entry(cve.as_str()).or_insert_with(|| {
                let first_seen = next_seen_index;
                next_seen_index += 1;
                (0, first_seen)
            });
            entry.0 += 1;
        }
    }

    let mut repeated: Vec<(&str, usize, usize)> = stats
        .into_iter()
        .filter(|(_, (count, _))| *count > 1)
        .map(|(cve, (count, first_seen))| (cve, count, first_seen))
        .collect();

    repeated.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    repeated.truncate(limit);

    repeated.into_iter().map(|(cve, _, _)| cve.to_string()).collect()
}

/// Distinct threat types within the recent window, in order of first
/// appearance. No count threshold.
fn emerging_threats(recent: &[AnalysisRecord]) -> Vec<String> {
    let mut threats: Vec<String> = Vec::new();

    for record in recent {
        if !threats.contains(&record.threat_type) {
            threats.push(record.threat_type.clone());
        }
    }

    threats
}

// ============================================================================
// TESTS
// ============================================================================
