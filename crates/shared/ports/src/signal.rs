use std::time::Duration;
use tokio::time::Instant;

/// Deadline-triggered cancellation signal for one auction
///
/// Fires automatically once the deadline instant passes. Every clone
/// observes the same instant, so the bidder tasks and the collection loop
/// of one auction are cancelled together. Holds no mutable state.
#[derive(Debug, Clone, Copy)]
pub struct DeadlineSignal {
    deadline: Instant,
}

impl DeadlineSignal {
    /// Signal firing `timeout` after `start`
    pub fn after(start: Instant, timeout: Duration) -> Self {
        Self {
            deadline: start + timeout,
        }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Whether the deadline has already passed
    pub fn is_fired(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// Completes when the deadline is reached (immediately if already past)
    pub async fn fired(&self) {
        if self.is_fired() {
            return;
        }
        tokio::time::sleep_until(self.deadline).await;
    }
}
