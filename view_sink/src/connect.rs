//! Blocking connect-with-retry for host views that may not be up yet.

use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use crate::SinkError;

/// How often, and how many times, to try reaching the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub interval:     Duration,
    /// `None` retries forever.
    pub max_attempts: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            interval:     Duration::from_secs(5),
            max_attempts: None,
        }
    }
}

/// Call `connect` until it succeeds, sleeping `policy.interval` between
/// attempts.  Gives up with the last error once `max_attempts` is reached.
pub fn connect_with_retry<T, F>(policy: RetryPolicy, mut connect: F) -> Result<T, SinkError>
where
    F: FnMut() -> Result<T, SinkError>,
{
    let mut attempt = 0u32;
    loop {
        attempt += 1;
        match connect() {
            Ok(view) => {
                if attempt > 1 {
                    info!(attempt, "connected to host view");
                }
                return Ok(view);
            }
            Err(e) => {
                if policy.max_attempts.is_some_and(|max| attempt >= max) {
                    return Err(e);
                }
                warn!(attempt, error = %e, retry_in = ?policy.interval, "host view not reachable");
                thread::sleep(policy.interval);
            }
        }
    }
}
