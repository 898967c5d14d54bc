//! Endpoint Failover
//!
//! Sequential attempt across an ordered endpoint list: first success wins
//! and identifies its endpoint, otherwise the last failure is surfaced.
//! Attempts run one at a time - ordering expresses preference and keeps
//! load off the backup endpoints. Each attempt carries its own deadline;
//! that is the attempt closure's responsibility.

use std::future::Future;

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Failure of a full failover pass
#[derive(Debug)]
pub enum FailoverError<E> {
    /// The endpoint list was empty; nothing was attempted.
    /// Configuration is the caller's responsibility, not validated here.
    NoEndpoints,
    /// Every endpoint failed; carries the last underlying error
    Exhausted(E),
}

impl<E: std::fmt::Display> std::fmt::Display for FailoverError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoEndpoints => write!(f, "No endpoints configured"),
            Self::Exhausted(e) => write!(f, "All endpoints failed, last error: {}", e),
        }
    }
}

impl<E: std::fmt::Debug + std::fmt::Display> std::error::Error for FailoverError<E> {}

// ============================================================================
// FAILOVER LOOP
// ============================================================================

/// Run `attempt` against each endpoint in order until one succeeds.
/// Returns the successful value together with the endpoint that produced
/// it, or the last error once every endpoint has been tried.
pub async fn try_each<T, E, F, Fut>(
    endpoints: &[String],
    attempt: F,
) -> Result<(T, String), FailoverError<E>>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut last_error = None;

    for endpoint in endpoints {
        match attempt(endpoint.clone()).await {
            Ok(value) => return Ok((value, endpoint.clone())),
            Err(e) => {
                log::debug!("Endpoint {} failed: {}", endpoint, e);
                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) => Err(FailoverError::Exhausted(e)),
        None => Err(FailoverError::NoEndpoints),
    }
}

// ============================================================================
// TESTS
// ============================================================================
