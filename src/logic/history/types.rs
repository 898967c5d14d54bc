//! History Types
//!
//! Core types for the analysis log and derived context.
//! No logic here beyond label/score mapping - only data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// RISK LEVEL
// ============================================================================

/// Categorical risk label attached to one analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    /// Derive the label from a 0-100 risk score
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=24 => RiskLevel::Low,
            25..=49 => RiskLevel::Medium,
            50..=74 => RiskLevel::High,
            _ => RiskLevel::Critical,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// INDICATOR COUNTS
// ============================================================================

/// Summary of distinct indicators observed in one analysis run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorCounts {
    pub unique_cves: usize,
    pub unique_domains: usize,
    pub unique_ips: usize,
    pub total: usize,
}

impl IndicatorCounts {
    /// Build counts with a consistent total
    pub fn new(unique_cves: usize, unique_domains: usize, unique_ips: usize) -> Self {
        Self {
            unique_cves,
            unique_domains,
            unique_ips,
            total: unique_cves + unique_domains + unique_ips,
        }
    }
}

// ============================================================================
// ANALYSIS RECORD
// ============================================================================

/// One persisted point-in-time risk assessment.
/// Created once per analysis run by the caller; never mutated afterwards;
/// discarded only by retention eviction in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub timestamp: DateTime<Utc>,
    /// Risk score 0-100
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub correlation_score: f32,
    pub threat_type: String,
    /// CVE identifiers, in the order the analysis reported them
    pub cve_ids: Vec<String>,
    pub indicators: IndicatorCounts,
    pub key_findings: Vec<String>,
}

impl AnalysisRecord {
    /// Create a record stamped now, with the risk label derived from the score
    pub fn new(risk_score: u8, correlation_score: f32, threat_type: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            risk_score,
            risk_level: RiskLevel::from_score(risk_score),
            correlation_score,
            threat_type: threat_type.to_string(),
            cve_ids: Vec::new(),
            indicators: IndicatorCounts::default(),
            key_findings: Vec::new(),
        }
    }

    pub fn with_cves(mut self, cve_ids: Vec<String>) -> Self {
        self.cve_ids = cve_ids;
        self
    }

    pub fn with_indicators(mut self, indicators: IndicatorCounts) -> Self {
        self.indicators = indicators;
        self
    }

    pub fn with_findings(mut self, key_findings: Vec<String>) -> Self {
        self.key_findings = key_findings;
        self
    }
}

// ============================================================================
// TREND DIRECTION
// ============================================================================

/// Categorical trend derived from recent vs. older average risk scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Stable,
    Worsening,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Improving => "improving",
            TrendDirection::Stable => "stable",
            TrendDirection::Worsening => "worsening",
        }
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// HISTORICAL CONTEXT
// ============================================================================

/// Derived summary over the analysis log. Ephemeral: recomputed from the
/// store on every read, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalContext {
    /// Last records, insertion order preserved (oldest first)
    pub previous_analyses: Vec<AnalysisRecord>,
    /// Mean risk score across all stored records, rounded half-up
    pub average_risk_score: u8,
    pub trend: TrendDirection,
    /// CVEs seen in more than one record, most frequent first
    pub common_cves: Vec<String>,
    /// Distinct threat types among the most recent records
    pub emerging_threats: Vec<String>,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_from_score() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(24), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(25), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(49), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(50), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(74), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(75), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::Critical);
    }

    #[test]
    fn test_record_builder() {
        let record = AnalysisRecord::new(80, 0.6, "ransomware")
            .with_cves(vec!["CVE-2024-1234".to_string()])
            .with_indicators(IndicatorCounts::new(1, 2, 3))
            .with_findings(vec!["campaign observed in the wild".to_string()]);

        assert_eq!(record.risk_level, RiskLevel::Critical);
        assert_eq!(record.cve_ids.len(), 1);
        assert_eq!(record.indicators.total, 6);
        assert_eq!(record.key_findings.len(), 1);
    }

    #[test]
    fn test_labels() {
        assert_eq!(RiskLevel::High.as_str(), "high");
        assert_eq!(TrendDirection::Worsening.as_str(), "worsening");
        assert_eq!(format!("{}", TrendDirection::Stable), "stable");
    }
}
