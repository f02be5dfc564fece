//! Readiness - Bounded wait for a host to become usable

use std::future::Future;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::errors::DomainError;

/// Poll `probe` until it reports ready, at most `max_attempts` times.
///
/// Sleeps `interval` between attempts and returns the attempt number that
/// succeeded.
pub async fn wait_until_ready<F, Fut>(
    what: &str,
    max_attempts: u32,
    interval: Duration,
    mut probe: F,
) -> Result<u32, DomainError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    if max_attempts == 0 {
        return Err(DomainError::Validation(
            "max_attempts must be at least 1".to_string(),
        ));
    }

    for attempt in 1..=max_attempts {
        if probe().await {
            debug!(target_name = %what, attempt, "Ready");
            return Ok(attempt);
        }
        if attempt < max_attempts {
            tokio::time::sleep(interval).await;
        }
    }

    warn!(target_name = %what, max_attempts, "Gave up waiting for readiness");
    Err(DomainError::ExternalService(format!(
        "{} not ready after {} attempts",
        what, max_attempts
    )))
}
