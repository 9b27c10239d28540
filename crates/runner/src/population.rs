//! Population - builds the bidders shared by every auction of a batch
//!
//! Each bidder gets:
//! - A stable id, its index in the population
//! - Aggressiveness drawn uniformly from [0, 1)
//! - Mean latency `base + uniform[0, spread)` ms

use auction_bidder::BidderFactory;
use auction_ports::{BidderAgent, BidderResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

use crate::config::PopulationConfig;

/// Draws bidder profiles and builds them through a factory
pub struct PopulationBuilder {
    config: PopulationConfig,
    rng: StdRng,
}

impl PopulationBuilder {
    pub fn new(config: PopulationConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create with a specific seed for reproducible populations
    pub fn with_seed(config: PopulationConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn build(
        &mut self,
        size: usize,
        factory: &BidderFactory,
    ) -> BidderResult<Vec<Arc<dyn BidderAgent>>> {
        let mut bidders: Vec<Arc<dyn BidderAgent>> = Vec::with_capacity(size);

        for id in 0..size {
            let aggressiveness = self.rng.r#gen::<f64>();
            let latency = self.config.latency_base_ms + self.latency_jitter();
            bidders.push(Arc::new(factory.build(id as u32, aggressiveness, latency)?));
        }

        log::info!(
            "Built population of {} bidders (latency {}..{}ms)",
            size,
            self.config.latency_base_ms,
            self.config.latency_base_ms + self.config.latency_spread_ms
        );

        Ok(bidders)
    }

    fn latency_jitter(&mut self) -> u64 {
        if self.config.latency_spread_ms == 0 {
            0
        } else {
            self.rng.gen_range(0..self.config.latency_spread_ms)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auction_bidder::SeededSource;

    #[test]
    fn test_ids_follow_index() {
        let mut builder = PopulationBuilder::with_seed(PopulationConfig::default(), 1);
        let bidders = builder.build(25, &BidderFactory::default()).unwrap();

        assert_eq!(bidders.len(), 25);
        for (i, bidder) in bidders.iter().enumerate() {
            assert_eq!(bidder.id(), i as u32);
        }
    }

    #[test]
    fn test_zero_spread_uses_base_latency() {
        let config = PopulationConfig {
            latency_base_ms: 30,
            latency_spread_ms: 0,
        };
        let mut builder = PopulationBuilder::with_seed(config, 9);

        assert_eq!(builder.latency_jitter(), 0);
        assert_eq!(builder.build(3, &BidderFactory::default()).unwrap().len(), 3);
    }

    #[test]
    fn test_jitter_within_spread() {
        let mut builder = PopulationBuilder::with_seed(PopulationConfig::default(), 2);
        for _ in 0..1000 {
            assert!(builder.latency_jitter() < 400);
        }
    }

    #[test]
    fn test_zero_base_is_rejected_by_factory() {
        let config = PopulationConfig {
            latency_base_ms: 0,
            latency_spread_ms: 0,
        };
        let mut builder = PopulationBuilder::new(config);
        let factory = BidderFactory::new(Arc::new(SeededSource::new(3)));

        assert!(builder.build(2, &factory).is_err());
    }

    #[test]
    fn test_empty_population() {
        let mut builder = PopulationBuilder::new(PopulationConfig::default());
        assert!(builder.build(0, &BidderFactory::default()).unwrap().is_empty());
    }
}
