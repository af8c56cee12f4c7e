use std::time::Duration;

use tokio::time::sleep;
use tracing::trace;

/// Fixed pauses inserted between API calls so a scan does not hammer the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    after_index: Duration,
    between_requests: Duration,
}

impl Pacing {
    pub fn new(after_index: Duration, between_requests: Duration) -> Self {
        Self {
            after_index,
            between_requests,
        }
    }

    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn after_index(&self) -> Duration {
        self.after_index
    }

    pub fn between_requests(&self) -> Duration {
        self.between_requests
    }

    pub async fn pause_after_index(&self) {
        pause(self.after_index).await;
    }

    pub async fn pause_between_requests(&self) {
        pause(self.between_requests).await;
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), Duration::from_millis(500))
    }
}

async fn pause(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    trace!(?delay, "pausing");
    sleep(delay).await;
}
