//! Auction Bidder Strategies
//!
//! Provides the bidder side of the simulator:
//! - Randomized sealed-bid agent ([`RandomBidder`])
//! - Bidder profiles and a factory for building populations
//! - Injectable draw sources so probabilistic paths are reproducible
//!
//! ## Decision flow
//!
//! ```text
//! Idle ──► WaitingDelay ──┬──► Abandoned (deadline during wait)
//!                         ▼
//!                     Evaluating ──┬──► Abandoned (deadline / declined)
//!                                  ▼
//!                          ComputingAmount ──► Delivering ──┬──► Delivered
//!                                                           └──► Dropped (timeout / deadline)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use auction_bidder::{BidderFactory, SeededSource};
//! use std::sync::Arc;
//!
//! let factory = BidderFactory::new(Arc::new(SeededSource::new(42)));
//! let bidder = factory.build(0, 0.7, 120)?;
//! ```

pub mod draws;
pub mod profile;
pub mod random_bidder;

// Re-export main types
pub use draws::{DrawSource, Draws, EntropySource, ScriptedSource, SeededSource};
pub use profile::{BidderFactory, BidderProfile};
pub use random_bidder::RandomBidder;
