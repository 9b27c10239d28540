use serde::{Deserialize, Serialize};

use crate::values::BidderId;

/// A sealed bid submitted by one bidder in one auction
///
/// Never mutated after creation; ownership moves to the orchestrator
/// once the bid is enqueued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub bidder_id: BidderId,
    pub amount: f64,
    /// Milliseconds since the auction started
    pub time_offset_ms: u64,
    pub meta: String,
}

impl Bid {
    pub fn new(
        bidder_id: BidderId,
        amount: f64,
        time_offset_ms: u64,
        meta: impl Into<String>,
    ) -> Self {
        Self {
            bidder_id,
            amount,
            time_offset_ms,
            meta: meta.into(),
        }
    }
}
