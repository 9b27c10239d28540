mod attributes;
mod bid;
mod result;
mod summary;

pub use attributes::AttributeSet;
pub use bid::Bid;
pub use result::AuctionResult;
pub use summary::BatchSummary;
