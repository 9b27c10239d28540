//! Bidder tasks - one per bidder per auction
//!
//! Each task:
//! - Waits on the admission gate
//! - Invokes the bidder with the shared request
//! - Runs in its own tokio task, so a panic stays inside it
//!
//! The supervisor joins every task, converts faults into abstentions,
//! then closes the bid sink by dropping its sender.

use auction_core::{AuctionId, BidderId};
use auction_ports::{AdmissionGate, BidOutcome, BidRequest, BidSink, BidderAgent, BidderResult};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Handle to one running bidder task
pub struct BidderTask {
    pub bidder_id: BidderId,
    handle: JoinHandle<BidderResult<BidOutcome>>,
}

/// Launch a bidder behind the admission gate
pub fn spawn_bidder(
    bidder: Arc<dyn BidderAgent>,
    gate: Arc<dyn AdmissionGate>,
    request: BidRequest,
) -> BidderTask {
    let bidder_id = bidder.id();
    let handle = tokio::spawn(async move {
        gate.acquire().await;
        let result = bidder.bid(request).await;
        gate.release();
        result
    });

    BidderTask { bidder_id, handle }
}

/// Per-auction tally of how bidder tasks ended
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskTally {
    pub delivered: usize,
    pub abandoned: usize,
    pub dropped: usize,
    /// Errors and panics, counted as abstentions
    pub faulted: usize,
}

impl TaskTally {
    fn record(&mut self, outcome: BidOutcome) {
        match outcome {
            BidOutcome::Delivered => self.delivered += 1,
            BidOutcome::Abandoned(_) => self.abandoned += 1,
            BidOutcome::Dropped(_) => self.dropped += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.delivered + self.abandoned + self.dropped + self.faulted
    }
}

/// Join all bidder tasks, then close the sink
///
/// The supervisor is the only holder of the primary sender. Dropping it
/// after the join closes the channel exactly once, whether or not the
/// deadline fired first.
pub async fn supervise(auction_id: AuctionId, tasks: Vec<BidderTask>, sink: BidSink) -> TaskTally {
    let mut tally = TaskTally::default();

    for task in tasks {
        match task.handle.await {
            Ok(Ok(outcome)) => tally.record(outcome),
            Ok(Err(e)) => {
                log::warn!(
                    "[auction {}] bidder {} faulted: {}",
                    auction_id,
                    task.bidder_id,
                    e
                );
                tally.faulted += 1;
            }
            Err(e) if e.is_panic() => {
                log::warn!(
                    "[auction {}] bidder {} panicked, treated as no bid",
                    auction_id,
                    task.bidder_id
                );
                tally.faulted += 1;
            }
            Err(e) => {
                log::warn!(
                    "[auction {}] bidder {} task failed: {}",
                    auction_id,
                    task.bidder_id,
                    e
                );
                tally.faulted += 1;
            }
        }
    }

    drop(sink);

    if tally.faulted > 0 {
        log::warn!(
            "[auction {}] {} of {} bidder tasks faulted",
            auction_id,
            tally.faulted,
            tally.total()
        );
    }
    log::debug!(
        "[auction {}] bidders finished: delivered={} abandoned={} dropped={} faulted={}",
        auction_id,
        tally.delivered,
        tally.abandoned,
        tally.dropped,
        tally.faulted
    );

    tally
}
