//! Translate Module - Endpoint Failover
//!
//! - `failover` - Generic sequential try-each-endpoint primitive
//! - `client`   - Translation client built on the failover primitive

pub mod client;
pub mod failover;

pub use client::{TranslateClient, TranslateError, TranslationResult};
pub use failover::{try_each, FailoverError};
