use chrono::{DateTime, Utc};

/// Auction identifier, unique within one batch
pub type AuctionId = u32;

/// Bidder identifier, assigned when the population is built
/// Used for attribution only, never for routing
pub type BidderId = u32;

/// Timestamp in UTC
pub type Timestamp = DateTime<Utc>;
