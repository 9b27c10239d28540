//! Auction Ports
//!
//! Port definitions (traits) for the auction simulator.
//! These define the boundaries between the orchestrator and its collaborators,
//! plus the request, sink and cancellation types that cross them.

mod agent;
mod collaborators;
mod error;
mod gate;
mod signal;
mod sink;

pub use agent::{AbandonReason, BidOutcome, BidRequest, BidderAgent, DropReason};
pub use collaborators::{AttributeGenerator, ResultSink};
pub use error::{BidderError, BidderResult, GenerationError, SinkError};
pub use gate::AdmissionGate;
pub use signal::DeadlineSignal;
pub use sink::{BidSink, DELIVERY_TIMEOUT};
