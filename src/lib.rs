//! IntelWatch Core - Resilience layer for threat-intel collection
//!
//! Wraps the unreliable external dependencies of the watcher (generation
//! model endpoint, translation endpoints, local analysis log) behind
//! validated, bounded operations:
//!
//! - `logic/history` - Bounded analysis log + trend derivation
//! - `logic/query`   - Search-query generation with validation and fallback
//! - `logic/translate` - Sequential endpoint failover for translation
//!
//! Entry points, prompt text, and reporting live in the embedding binary.

pub mod constants;
pub mod logic;

pub use logic::config::CoreConfig;
pub use logic::history::store::RecordStore;
pub use logic::history::trend::analyze;
pub use logic::history::types::{AnalysisRecord, HistoricalContext};
pub use logic::query::generator::{generate_queries, QueryGenerationResult};
pub use logic::translate::client::{TranslateClient, TranslationResult};
