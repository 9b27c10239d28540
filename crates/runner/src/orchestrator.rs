//! Auction Orchestrator - runs one sealed-bid auction
//!
//! Ties together:
//! - The deadline signal shared by every task of the auction
//! - One gated bidder task per agent
//! - A supervisor that closes the bid sink exactly once
//! - The collection loop and winner resolution

use auction_core::{AuctionId, AuctionResult};
use auction_ports::{
    AdmissionGate, AttributeGenerator, BidRequest, BidSink, BidderAgent, DeadlineSignal,
};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

use crate::agent::{spawn_bidder, supervise};
use crate::attributes::DEFAULT_ATTRIBUTE_COUNT;
use crate::error::AuctionError;

/// Runs auctions against a shared attribute generator
///
/// Holds no per-auction state, so one orchestrator can run many auctions
/// concurrently.
pub struct AuctionOrchestrator {
    generator: Arc<dyn AttributeGenerator>,
    attribute_count: usize,
}

impl AuctionOrchestrator {
    pub fn new(generator: Arc<dyn AttributeGenerator>) -> Self {
        Self {
            generator,
            attribute_count: DEFAULT_ATTRIBUTE_COUNT,
        }
    }

    /// Number of attributes requested per auction
    pub fn with_attribute_count(mut self, attribute_count: usize) -> Self {
        self.attribute_count = attribute_count;
        self
    }

    pub fn attribute_count(&self) -> usize {
        self.attribute_count
    }

    /// Run a single auction to completion or deadline
    ///
    /// Returns once every bidder has finished or the deadline fires,
    /// whichever comes first. Bidder faults never surface here; the only
    /// error is a failure to produce the attribute set.
    pub async fn run_auction(
        &self,
        auction_id: AuctionId,
        bidders: &[Arc<dyn BidderAgent>],
        timeout_ms: u64,
        gate: Arc<dyn AdmissionGate>,
    ) -> Result<AuctionResult, AuctionError> {
        let start_time = Utc::now();
        let started_at = Instant::now();
        let signal = DeadlineSignal::after(started_at, Duration::from_millis(timeout_ms));

        let attributes = Arc::new(self.generator.generate(self.attribute_count)?);

        // Room for every bidder, so delivery only ever blocks on timeout/cancel
        let (sink, mut bid_rx) = BidSink::channel(bidders.len());

        let tasks = bidders
            .iter()
            .map(|bidder| {
                let request = BidRequest {
                    auction_id,
                    attributes: Arc::clone(&attributes),
                    sink: sink.clone(),
                    started_at,
                    signal,
                };
                spawn_bidder(Arc::clone(bidder), Arc::clone(&gate), request)
            })
            .collect();

        // Detached: the collection loop must not wait on stragglers past the deadline
        tokio::spawn(supervise(auction_id, tasks, sink));

        let mut collected = Vec::with_capacity(bidders.len());
        loop {
            tokio::select! {
                biased;

                _ = signal.fired() => {
                    log::debug!(
                        "[auction {}] deadline reached after {} bids",
                        auction_id,
                        collected.len()
                    );
                    break;
                }

                received = bid_rx.recv() => match received {
                    Some(bid) => collected.push(bid),
                    None => break,
                },
            }
        }

        // Late bidders see a closed sink instead of waiting out the delivery timeout
        bid_rx.close();

        let result = AuctionResult::resolve(
            auction_id,
            attributes.as_ref().clone(),
            collected,
            start_time,
            started_at.elapsed(),
            timeout_ms,
            bidders.len(),
        );

        match &result.winner {
            Some(winner) => log::info!(
                "[auction {}] {} bids, winner bidder {} with {:.2} in {}ms",
                auction_id,
                result.bids.len(),
                winner.bidder_id,
                winner.amount,
                result.duration_ms
            ),
            None => log::info!(
                "[auction {}] no bids in {}ms",
                auction_id,
                result.duration_ms
            ),
        }

        Ok(result)
    }
}
