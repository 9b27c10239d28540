//! Injectable randomness for bidder decisions
//!
//! Each invocation pulls a fresh [`Draws`] stream from a [`DrawSource`],
//! keyed by (auction, bidder). Nothing is shared between invocations, so
//! concurrent auctions never contend on a generator.
//!
//! Draw order per invocation: decision delay, abstention, amount.

use auction_core::{AuctionId, BidderId};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::HashMap;

/// Stream of uniform draws for one bidder invocation
pub trait Draws: Send {
    /// Next uniform draw in [0, 1)
    fn unit(&mut self) -> f64;
}

/// Hands out per-invocation draw streams
pub trait DrawSource: Send + Sync {
    fn draws_for(&self, auction_id: AuctionId, bidder_id: BidderId) -> Box<dyn Draws>;
}

struct RngDraws<R>(R);

impl<R: Rng + Send> Draws for RngDraws<R> {
    fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

/// Fresh OS-seeded generator per invocation
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropySource;

impl DrawSource for EntropySource {
    fn draws_for(&self, _auction_id: AuctionId, _bidder_id: BidderId) -> Box<dyn Draws> {
        Box::new(RngDraws(StdRng::from_entropy()))
    }
}

/// Reproducible draws: same seed, auction and bidder give the same stream
#[derive(Debug, Clone, Copy)]
pub struct SeededSource {
    seed: u64,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    fn stream_seed(&self, auction_id: AuctionId, bidder_id: BidderId) -> u64 {
        let key = ((auction_id as u64) << 32) | bidder_id as u64;
        self.seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ key
    }
}

impl DrawSource for SeededSource {
    fn draws_for(&self, auction_id: AuctionId, bidder_id: BidderId) -> Box<dyn Draws> {
        let seed = self.stream_seed(auction_id, bidder_id);
        Box::new(RngDraws(StdRng::seed_from_u64(seed)))
    }
}

/// Fixed draw sequences, for forcing specific decision paths
///
/// Every invocation replays its bidder's script from the start, falling
/// back to the default script. Scripts repeat when exhausted; an empty
/// script yields zeros. Values should lie in [0, 1).
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    default: Vec<f64>,
    per_bidder: HashMap<BidderId, Vec<f64>>,
}

impl ScriptedSource {
    pub fn new(default: impl Into<Vec<f64>>) -> Self {
        Self {
            default: default.into(),
            per_bidder: HashMap::new(),
        }
    }

    /// Override the script for one bidder
    pub fn with_bidder(mut self, bidder_id: BidderId, script: impl Into<Vec<f64>>) -> Self {
        self.per_bidder.insert(bidder_id, script.into());
        self
    }
}

struct ScriptedDraws {
    values: Vec<f64>,
    next: usize,
}

impl Draws for ScriptedDraws {
    fn unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

impl DrawSource for ScriptedSource {
    fn draws_for(&self, _auction_id: AuctionId, bidder_id: BidderId) -> Box<dyn Draws> {
        let values = self
            .per_bidder
            .get(&bidder_id)
            .unwrap_or(&self.default)
            .clone();
        Box::new(ScriptedDraws { values, next: 0 })
    }
}
