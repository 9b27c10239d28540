//! Auction Runner - Concurrent Sealed-Bid Auctions
//!
//! Runs auctions against a population of simulated bidders:
//!
//! - **Orchestrator**: one auction, fan-out to bidders, deadline, winner
//! - **Agent tasks**: gated bidder tasks and the supervisor that closes the sink
//! - **Gate**: paces how fast bidder tasks start
//! - **Batch**: many concurrent auctions over one population, results to a sink
//!
//! ## Architecture
//!
//! ```text
//!            ┌──────────────────────┐
//!            │ Attribute Generator  │
//!            └──────────┬───────────┘
//!                       │ Arc<AttributeSet>
//!                       ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                  AUCTION ORCHESTRATOR                   │
//! │                                                         │
//! │   ┌──────────┐   ┌──────────┐         ┌──────────┐      │
//! │   │ bidder 0 │   │ bidder 1 │   ...   │ bidder N │      │
//! │   └────┬─────┘   └────┬─────┘         └────┬─────┘      │
//! │        │  gate + decision delay            │            │
//! │        └──────────────┬────────────────────┘            │
//! │                       ▼ BidSink (mpsc)                  │
//! │          collection loop  ◄── DeadlineSignal            │
//! └───────────────────────┬─────────────────────────────────┘
//!                         │ ranked bids + winner
//!                         ▼
//!               ┌───────────────────┐
//!               │    ResultSink     │
//!               └───────────────────┘
//! ```

pub mod agent;
pub mod attributes;
pub mod batch;
pub mod config;
pub mod error;
pub mod gate;
pub mod orchestrator;
pub mod persistence;
pub mod population;

// Re-export main types
pub use agent::{BidderTask, TaskTally, spawn_bidder, supervise};
pub use attributes::{DEFAULT_ATTRIBUTE_COUNT, FixedAttributeGenerator, UniformAttributeGenerator};
pub use batch::BatchRunner;
pub use config::{BatchConfig, ConfigError, PopulationConfig};
pub use error::{AuctionError, Result, RunnerError};
pub use gate::PacingGate;
pub use orchestrator::AuctionOrchestrator;
pub use persistence::{JsonFileSink, MemorySink};
pub use population::PopulationBuilder;
