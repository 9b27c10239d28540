use thiserror::Error;

/// Faults raised inside a bidder's decision logic
///
/// Never reaches the orchestrator's caller: the task boundary turns every
/// fault into an abstention.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BidderError {
    #[error("Attribute set is empty")]
    EmptyAttributes,

    #[error("Computed bid amount is not finite: {0}")]
    NonFiniteAmount(f64),

    #[error("Invalid bidder profile: {0}")]
    InvalidProfile(String),
}

/// Attribute generation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Attribute count must be positive")]
    EmptySet,

    #[error("Attribute generation failed: {0}")]
    Failed(String),
}

/// Result persistence failures
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("IO error at {path}: {error}")]
    Io {
        path: String,
        error: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type BidderResult<T> = std::result::Result<T, BidderError>;
