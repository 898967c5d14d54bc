//! History Module - Bounded Analysis Log & Trends
//!
//! - `types` - Record and context data structures
//! - `store` - Append-only bounded JSON log (FIFO eviction)
//! - `trend` - Derived historical context (pure, recomputed per read)

pub mod store;
pub mod trend;
pub mod types;

pub use store::RecordStore;
pub use trend::analyze;
pub use types::{AnalysisRecord, HistoricalContext, IndicatorCounts, RiskLevel, TrendDirection};
