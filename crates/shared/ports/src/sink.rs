use auction_core::Bid;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::agent::{BidOutcome, DropReason};
use crate::signal::DeadlineSignal;

/// Upper bound on a single delivery attempt
pub const DELIVERY_TIMEOUT: Duration = Duration::from_millis(5);

/// Write-only side of the bid collection channel
///
/// Many bidder tasks hold clones; the orchestrator owns the single
/// receiver. The channel closes once every sender has been dropped.
#[derive(Debug, Clone)]
pub struct BidSink {
    tx: mpsc::Sender<Bid>,
}

impl BidSink {
    /// Create a sink/receiver pair; capacity is clamped to at least 1
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<Bid>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, rx)
    }

    /// Attempt a single delivery, bounded by [`DELIVERY_TIMEOUT`] and the signal
    ///
    /// A bid that cannot be enqueued in time is dropped, never retried.
    pub async fn deliver(&self, bid: Bid, signal: &DeadlineSignal) -> BidOutcome {
        if signal.is_fired() {
            return BidOutcome::Dropped(DropReason::Cancelled);
        }

        tokio::select! {
            biased;

            _ = signal.fired() => BidOutcome::Dropped(DropReason::Cancelled),

            sent = tokio::time::timeout(DELIVERY_TIMEOUT, self.tx.send(bid)) => match sent {
                Ok(Ok(())) => BidOutcome::Delivered,
                Ok(Err(_)) => BidOutcome::Dropped(DropReason::SinkClosed),
                Err(_) => BidOutcome::Dropped(DropReason::TimedOut),
            },
        }
    }

    /// Whether the consumer has gone away
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}
