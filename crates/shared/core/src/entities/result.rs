use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{AttributeSet, Bid};
use crate::ranking::resolve_winner;
use crate::values::{AuctionId, Timestamp};

/// Outcome of one auction
///
/// `bids` holds the ranked list, not arrival order. `winner` is a copy of
/// `bids[0]` when any bid was collected and `None` otherwise; the
/// constructor derives it so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionResult {
    pub auction_id: AuctionId,
    pub attributes: AttributeSet,
    pub bids: Vec<Bid>,
    pub winner: Option<Bid>,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub duration_ms: u64,
    pub timeout_ms: u64,
    pub total_bidders: usize,
}

impl AuctionResult {
    /// Resolve the collected bids and assemble the result
    ///
    /// `elapsed` is the monotonic auction duration; the end timestamp is
    /// derived from it so `end_time - start_time == duration_ms`.
    pub fn resolve(
        auction_id: AuctionId,
        attributes: AttributeSet,
        collected: Vec<Bid>,
        start_time: Timestamp,
        elapsed: Duration,
        timeout_ms: u64,
        total_bidders: usize,
    ) -> Self {
        let (bids, winner) = resolve_winner(collected);
        let end_time = start_time
            + chrono::Duration::from_std(elapsed).unwrap_or_else(|_| chrono::Duration::zero());

        Self {
            auction_id,
            attributes,
            bids,
            winner,
            start_time,
            end_time,
            duration_ms: elapsed.as_millis() as u64,
            timeout_ms,
            total_bidders,
        }
    }

    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    /// Fraction of the population that delivered a bid
    pub fn participation(&self) -> f64 {
        if self.total_bidders == 0 {
            return 0.0;
        }
        self.bids.len() as f64 / self.total_bidders as f64
    }
}
