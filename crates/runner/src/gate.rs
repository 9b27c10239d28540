//! Pacing admission gate
//!
//! Delays every bidder task by a fixed interval before it starts
//! evaluating. This bounds how fast tasks start, not how many run at once:
//! there are no permits and nothing to give back.

use async_trait::async_trait;
use auction_ports::AdmissionGate;
use std::time::Duration;

/// Interval for a capacity hint of one execution unit
const BASE_INTERVAL_MS: u64 = 10;

/// Fixed-interval pacing gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacingGate {
    interval: Duration,
}

impl PacingGate {
    /// Gate sized from a capacity hint (e.g. CPU count)
    ///
    /// Interval is `10ms / hint` in whole milliseconds, so hints above 10
    /// give no delay at all. A hint of 0 counts as 1.
    pub fn new(capacity_hint: usize) -> Self {
        let hint = capacity_hint.max(1) as u64;
        Self {
            interval: Duration::from_millis(BASE_INTERVAL_MS / hint),
        }
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self { interval }
    }

    /// Gate that admits immediately
    pub fn open() -> Self {
        Self::with_interval(Duration::ZERO)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

#[async_trait]
impl AdmissionGate for PacingGate {
    async fn acquire(&self) {
        if !self.interval.is_zero() {
            tokio::time::sleep(self.interval).await;
        }
    }
}
