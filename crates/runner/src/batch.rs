//! Batch runner - many auctions over one bidder population
//!
//! ```text
//!   auction 0 ─┐
//!   auction 1 ─┼──► results channel ──► ResultSink (as each one finishes)
//!   auction N ─┘                              │
//!                                             ▼
//!                                       BatchSummary
//! ```
//!
//! Auctions run concurrently, one task each, sharing the population, the
//! admission gate and the orchestrator.

use auction_bidder::{BidderFactory, SeededSource};
use auction_core::{AuctionId, AuctionResult, BatchSummary};
use auction_ports::{AdmissionGate, AttributeGenerator, BidderAgent, ResultSink};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::attributes::UniformAttributeGenerator;
use crate::config::BatchConfig;
use crate::error::{AuctionError, Result};
use crate::gate::PacingGate;
use crate::orchestrator::AuctionOrchestrator;
use crate::population::PopulationBuilder;

/// Runs a batch of auctions and records every outcome
pub struct BatchRunner {
    orchestrator: Arc<AuctionOrchestrator>,
    bidders: Arc<[Arc<dyn BidderAgent>]>,
    gate: Arc<dyn AdmissionGate>,
    sink: Arc<dyn ResultSink>,
    timeout_ms: u64,
}

impl BatchRunner {
    pub fn new(
        orchestrator: AuctionOrchestrator,
        bidders: Vec<Arc<dyn BidderAgent>>,
        gate: Arc<dyn AdmissionGate>,
        sink: Arc<dyn ResultSink>,
        timeout_ms: u64,
    ) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            bidders: bidders.into(),
            gate,
            sink,
            timeout_ms,
        }
    }

    /// Wire a runner from configuration
    ///
    /// With a seed, attributes, population and bidder draws all derive
    /// from it; otherwise everything draws from entropy.
    pub fn from_config(config: &BatchConfig, sink: Arc<dyn ResultSink>) -> Result<Self> {
        config.validate()?;

        let generator: Arc<dyn AttributeGenerator> = match config.seed {
            Some(seed) => Arc::new(UniformAttributeGenerator::with_seed(seed)),
            None => Arc::new(UniformAttributeGenerator::new()),
        };
        let (factory, mut builder) = match config.seed {
            Some(seed) => (
                BidderFactory::new(Arc::new(SeededSource::new(seed))),
                PopulationBuilder::with_seed(config.population, seed),
            ),
            None => (
                BidderFactory::default(),
                PopulationBuilder::new(config.population),
            ),
        };

        let bidders = builder.build(config.bidders, &factory)?;
        let gate = PacingGate::new(config.capacity_hint());
        log::info!(
            "Admission gate: capacity hint {}, interval {:?}",
            config.capacity_hint(),
            gate.interval()
        );

        Ok(Self::new(
            AuctionOrchestrator::new(generator).with_attribute_count(config.attributes),
            bidders,
            Arc::new(gate),
            sink,
            config.timeout_ms,
        ))
    }

    pub fn bidder_count(&self) -> usize {
        self.bidders.len()
    }

    /// Run `auctions` auctions concurrently
    ///
    /// Results reach the sink in completion order. A failed auction or a
    /// failed result write is logged and the batch carries on; only the
    /// summary write can fail the batch.
    pub async fn run(&self, auctions: usize) -> Result<BatchSummary> {
        let start_time = Utc::now();
        let started_at = Instant::now();

        log::info!(
            "Starting batch: {} auctions, {} bidders, timeout {}ms",
            auctions,
            self.bidders.len(),
            self.timeout_ms
        );

        let (result_tx, mut result_rx) =
            mpsc::channel::<(AuctionId, std::result::Result<AuctionResult, AuctionError>)>(
                auctions.max(1),
            );

        for auction_id in 0..auctions as AuctionId {
            let orchestrator = Arc::clone(&self.orchestrator);
            let bidders = Arc::clone(&self.bidders);
            let gate = Arc::clone(&self.gate);
            let result_tx = result_tx.clone();
            let timeout_ms = self.timeout_ms;

            tokio::spawn(async move {
                let outcome = orchestrator
                    .run_auction(auction_id, &bidders, timeout_ms, gate)
                    .await;
                let _ = result_tx.send((auction_id, outcome)).await;
            });
        }
        drop(result_tx);

        let mut completed = 0;
        while let Some((auction_id, outcome)) = result_rx.recv().await {
            match outcome {
                Ok(result) => {
                    completed += 1;
                    if let Err(e) = self.sink.record_result(&result) {
                        log::warn!("[auction {}] failed to record result: {}", auction_id, e);
                    }
                }
                Err(e) => log::warn!("[auction {}] failed: {}", auction_id, e),
            }
        }

        let elapsed = started_at.elapsed();
        let summary = BatchSummary {
            start_time,
            end_time: start_time
                + chrono::Duration::from_std(elapsed).unwrap_or_else(|_| chrono::Duration::zero()),
            elapsed_ms: elapsed.as_millis() as u64,
            auctions,
            auctions_completed: completed,
            // Includes auctions whose task died before reporting
            auctions_failed: auctions - completed,
            bidders: self.bidders.len(),
        };

        log::info!(
            "Batch complete: {}/{} auctions in {}ms",
            summary.auctions_completed,
            summary.auctions,
            summary.elapsed_ms
        );

        self.sink.record_summary(&summary)?;
        Ok(summary)
    }
}
