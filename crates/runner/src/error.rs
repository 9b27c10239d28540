use auction_ports::{BidderError, GenerationError, SinkError};
use thiserror::Error;

use crate::config::ConfigError;

/// Failure of a single auction
///
/// Orchestration itself cannot fail; only the attribute collaborator can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuctionError {
    #[error("Attribute generation failed: {0}")]
    AttributeGeneration(#[from] GenerationError),
}

/// Failures surfaced while setting up or finishing a batch
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Bidder construction failed: {0}")]
    Bidder(#[from] BidderError),

    #[error("Result sink error: {0}")]
    Sink(#[from] SinkError),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
