//! Query Module - Generation, Validation & Fallback
//!
//! - `rules`     - Fixed pattern sets (constants and config only, no logic)
//! - `validator` - Pure accept/reject predicate over candidate queries
//! - `llm`       - Generation endpoint client (single endpoint, timeout)
//! - `generator` - Orchestration: prompt, parse, validate, fallback

pub mod generator;
pub mod llm;
pub mod rules;
pub mod validator;

pub use generator::{generate_queries, QueryGenerationResult};
pub use llm::GenerationClient;
pub use validator::is_valid_query;
