use async_trait::async_trait;
use auction_core::{AttributeSet, AuctionId, BidderId};
use std::sync::Arc;
use tokio::time::Instant;

use crate::error::BidderResult;
use crate::signal::DeadlineSignal;
use crate::sink::BidSink;

/// Everything a bidder needs for one auction
#[derive(Debug, Clone)]
pub struct BidRequest {
    pub auction_id: AuctionId,
    /// Shared read-only by every bidder of the auction
    pub attributes: Arc<AttributeSet>,
    pub sink: BidSink,
    pub started_at: Instant,
    pub signal: DeadlineSignal,
}

impl BidRequest {
    /// Whole milliseconds since the auction started
    pub fn elapsed_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }
}

/// Why a bidder ended without bidding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbandonReason {
    /// Deadline fired while waiting out the decision delay
    CancelledDuringWait,
    /// Deadline fired just as the delay elapsed
    CancelledAfterWait,
    /// Voluntary abstention
    Declined,
}

/// Why a computed bid never reached the orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    TimedOut,
    Cancelled,
    SinkClosed,
}

/// Terminal state of one bidder invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidOutcome {
    Delivered,
    Abandoned(AbandonReason),
    Dropped(DropReason),
}

/// Bidder agent contract
///
/// One instance represents one simulated participant and is reused
/// across auctions, possibly concurrently. Invocations keep no state
/// between calls; the only side effect is at most one enqueue on the sink.
#[async_trait]
pub trait BidderAgent: Send + Sync {
    fn id(&self) -> BidderId;

    /// Decide whether and how much to bid in one auction
    async fn bid(&self, request: BidRequest) -> BidderResult<BidOutcome>;
}
