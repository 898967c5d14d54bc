//! Logic Module - Core Engines
//!
//! Contains the resilience engines: History (bounded log + trends),
//! Query (generation with validation/fallback), Translate (failover).

pub mod config;
pub mod history;
pub mod query;
pub mod translate;
