use serde::{Deserialize, Serialize};

use crate::values::Timestamp;

/// One record per batch of auctions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub elapsed_ms: u64,
    /// Auctions requested by the batch configuration
    pub auctions: usize,
    pub auctions_completed: usize,
    pub auctions_failed: usize,
    /// Bidders taking part in each auction
    pub bidders: usize,
}
