use auction_core::{AttributeSet, AuctionResult, BatchSummary};

use crate::error::{GenerationError, SinkError};

/// Produces the attribute set for one auction
pub trait AttributeGenerator: Send + Sync {
    fn generate(&self, count: usize) -> Result<AttributeSet, GenerationError>;
}

/// Destination for completed auction results
pub trait ResultSink: Send + Sync {
    fn record_result(&self, result: &AuctionResult) -> Result<(), SinkError>;

    fn record_summary(&self, summary: &BatchSummary) -> Result<(), SinkError>;
}
