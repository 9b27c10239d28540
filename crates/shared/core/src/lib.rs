//! Auction Core Domain
//!
//! Pure domain types for the sealed-bid auction simulator.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod ranking;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{AttributeSet, AuctionResult, BatchSummary, Bid};
pub use ranking::{bid_priority, rank_bids, resolve_winner};
pub use values::{AuctionId, BidderId, Timestamp};
