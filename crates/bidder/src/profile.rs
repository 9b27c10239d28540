use auction_core::BidderId;
use auction_ports::{BidderError, BidderResult};
use std::sync::Arc;

use crate::draws::{DrawSource, EntropySource};
use crate::random_bidder::RandomBidder;

/// Construction parameters for one simulated bidder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BidderProfile {
    pub id: BidderId,
    /// 0.0 = timid, 1.0 = aggressive
    pub aggressiveness: f64,
    /// Mean decision latency (ms), must be positive
    pub mean_latency_ms: u64,
}

impl BidderProfile {
    pub fn new(id: BidderId, aggressiveness: f64, mean_latency_ms: u64) -> Self {
        Self {
            id,
            aggressiveness,
            mean_latency_ms,
        }
    }

    pub fn validate(&self) -> BidderResult<()> {
        if !(0.0..=1.0).contains(&self.aggressiveness) {
            return Err(BidderError::InvalidProfile(format!(
                "aggressiveness {} outside [0, 1] for bidder {}",
                self.aggressiveness, self.id
            )));
        }
        if self.mean_latency_ms == 0 {
            return Err(BidderError::InvalidProfile(format!(
                "mean latency must be positive for bidder {}",
                self.id
            )));
        }
        Ok(())
    }
}

/// Builds bidders that share one draw source
#[derive(Clone)]
pub struct BidderFactory {
    draws: Arc<dyn DrawSource>,
}

impl BidderFactory {
    pub fn new(draws: Arc<dyn DrawSource>) -> Self {
        Self { draws }
    }

    pub fn build(
        &self,
        id: BidderId,
        aggressiveness: f64,
        mean_latency_ms: u64,
    ) -> BidderResult<RandomBidder> {
        RandomBidder::with_draws(
            BidderProfile::new(id, aggressiveness, mean_latency_ms),
            Arc::clone(&self.draws),
        )
    }
}

impl Default for BidderFactory {
    fn default() -> Self {
        Self::new(Arc::new(EntropySource))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auction_ports::BidderAgent;

    #[test]
    fn test_validate_bounds() {
        assert!(BidderProfile::new(0, 0.0, 1).validate().is_ok());
        assert!(BidderProfile::new(0, 1.0, 400).validate().is_ok());
        assert!(BidderProfile::new(0, -0.1, 10).validate().is_err());
        assert!(BidderProfile::new(0, 1.5, 10).validate().is_err());
        assert!(BidderProfile::new(0, f64::NAN, 10).validate().is_err());
        assert!(BidderProfile::new(0, 0.5, 0).validate().is_err());
    }

    #[test]
    fn test_factory_builds_valid_bidder() {
        let factory = BidderFactory::default();
        let bidder = factory.build(12, 0.25, 80).unwrap();
        assert_eq!(bidder.id(), 12);
        assert_eq!(bidder.profile().mean_latency_ms, 80);
    }

    #[test]
    fn test_factory_rejects_invalid_profile() {
        let factory = BidderFactory::default();
        let err = factory.build(3, 2.0, 80).unwrap_err();
        assert!(matches!(err, BidderError::InvalidProfile(_)));
    }
}
