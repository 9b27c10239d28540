//! Randomized Sealed-Bid Agent
//!
//! Models a participant that:
//! - Waits out a random decision delay around its mean latency
//! - Abstains with a probability that shrinks as aggressiveness grows
//! - Bids a fraction of the mean attribute value, plus noise
//! - Gives up as soon as the auction deadline fires

use async_trait::async_trait;
use auction_core::{Bid, BidderId};
use auction_ports::{
    AbandonReason, BidOutcome, BidRequest, BidderAgent, BidderError, BidderResult,
};
use std::sync::Arc;
use std::time::Duration;

use crate::draws::{DrawSource, EntropySource};
use crate::profile::BidderProfile;

/// Abstention floor: even a timid bidder bids this often
const BASE_BID_PROBABILITY: f64 = 0.45;
const AGGRESSIVENESS_PROBABILITY_WEIGHT: f64 = 0.5;
/// Share of the attribute mean a timid bidder offers
const BASE_AMOUNT_FACTOR: f64 = 0.2;
const AMOUNT_NOISE_FACTOR: f64 = 0.5;

/// Randomized bidder strategy
pub struct RandomBidder {
    profile: BidderProfile,
    draws: Arc<dyn DrawSource>,
}

impl std::fmt::Debug for RandomBidder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomBidder")
            .field("profile", &self.profile)
            .finish_non_exhaustive()
    }
}

impl RandomBidder {
    /// Create a bidder drawing from OS entropy
    pub fn new(profile: BidderProfile) -> BidderResult<Self> {
        Self::with_draws(profile, Arc::new(EntropySource))
    }

    /// Create a bidder with an explicit draw source
    pub fn with_draws(profile: BidderProfile, draws: Arc<dyn DrawSource>) -> BidderResult<Self> {
        profile.validate()?;
        Ok(Self { profile, draws })
    }

    pub fn profile(&self) -> &BidderProfile {
        &self.profile
    }

    /// Probability of bidding once the delay has elapsed, in [0.45, 0.95]
    pub fn bid_probability(&self) -> f64 {
        BASE_BID_PROBABILITY + self.profile.aggressiveness * AGGRESSIVENESS_PROBABILITY_WEIGHT
    }

    /// Map a unit draw onto [0.5 × mean, 1.5 × mean)
    pub fn decision_delay(&self, unit: f64) -> Duration {
        let micros = self.profile.mean_latency_ms as f64 * 1000.0 * (0.5 + unit);
        Duration::from_micros(micros as u64)
    }

    /// Bid amount for the given attribute mean and noise draw
    pub fn amount(&self, base: f64, noise: f64) -> f64 {
        base * (BASE_AMOUNT_FACTOR + self.profile.aggressiveness)
            + noise * base * AMOUNT_NOISE_FACTOR
    }
}

#[async_trait]
impl BidderAgent for RandomBidder {
    fn id(&self) -> BidderId {
        self.profile.id
    }

    async fn bid(&self, request: BidRequest) -> BidderResult<BidOutcome> {
        let mut draws = self.draws.draws_for(request.auction_id, self.profile.id);
        let probability = self.bid_probability();
        let delay = self.decision_delay(draws.unit());

        tokio::select! {
            biased;

            _ = request.signal.fired() => {
                return Ok(BidOutcome::Abandoned(AbandonReason::CancelledDuringWait));
            }
            _ = tokio::time::sleep(delay) => {}
        }

        if request.signal.is_fired() {
            return Ok(BidOutcome::Abandoned(AbandonReason::CancelledAfterWait));
        }
        if draws.unit() > probability {
            return Ok(BidOutcome::Abandoned(AbandonReason::Declined));
        }

        let base = request
            .attributes
            .mean()
            .ok_or(BidderError::EmptyAttributes)?;
        let amount = self.amount(base, draws.unit());
        if !amount.is_finite() {
            return Err(BidderError::NonFiniteAmount(amount));
        }

        let bid = Bid::new(
            self.profile.id,
            amount,
            request.elapsed_ms(),
            format!("latency={}ms", delay.as_millis()),
        );
        let outcome = request.sink.deliver(bid, &request.signal).await;

        log::debug!(
            "[auction {}] bidder {} amount={:.2} -> {:?}",
            request.auction_id,
            self.profile.id,
            amount,
            outcome
        );

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draws::ScriptedSource;
    use auction_core::AttributeSet;
    use auction_ports::{BidSink, DeadlineSignal, DropReason};
    use tokio::sync::mpsc;
    use tokio::time::Instant;

    fn bidder(aggressiveness: f64, latency_ms: u64, script: &[f64]) -> RandomBidder {
        RandomBidder::with_draws(
            BidderProfile::new(1, aggressiveness, latency_ms),
            Arc::new(ScriptedSource::new(script.to_vec())),
        )
        .unwrap()
    }

    fn request(
        attributes: AttributeSet,
        timeout: Duration,
    ) -> (BidRequest, mpsc::Receiver<Bid>) {
        let (sink, rx) = BidSink::channel(4);
        let started_at = Instant::now();
        let request = BidRequest {
            auction_id: 0,
            attributes: Arc::new(attributes),
            sink,
            started_at,
            signal: DeadlineSignal::after(started_at, timeout),
        };
        (request, rx)
    }

    fn tens() -> AttributeSet {
        AttributeSet::from_values([10.0; 5])
    }

    #[test]
    fn test_new_validates_profile() {
        assert!(RandomBidder::new(BidderProfile::new(3, 0.4, 120)).is_ok());
        assert!(matches!(
            RandomBidder::new(BidderProfile::new(3, 1.5, 120)),
            Err(BidderError::InvalidProfile(_))
        ));
        assert!(matches!(
            RandomBidder::new(BidderProfile::new(3, 0.4, 0)),
            Err(BidderError::InvalidProfile(_))
        ));
    }

    #[test]
    fn test_bid_probability_range() {
        assert_eq!(bidder(0.0, 10, &[]).bid_probability(), 0.45);
        assert_eq!(bidder(1.0, 10, &[]).bid_probability(), 0.95);
    }

    #[test]
    fn test_decision_delay_range() {
        let b = bidder(0.5, 100, &[]);
        assert_eq!(b.decision_delay(0.0), Duration::from_millis(50));
        assert_eq!(b.decision_delay(0.5), Duration::from_millis(100));
        assert!(b.decision_delay(0.999_999) < Duration::from_millis(150));
    }

    #[tokio::test(start_paused = true)]
    async fn test_delivers_bid_after_delay() {
        let _ = env_logger::try_init();
        let b = bidder(0.5, 10, &[0.5, 0.0, 0.5]);
        let (req, mut rx) = request(tens(), Duration::from_secs(1));

        let outcome = b.bid(req).await.unwrap();
        assert_eq!(outcome, BidOutcome::Delivered);

        let bid = rx.recv().await.unwrap();
        assert_eq!(bid.bidder_id, 1);
        // 10 * (0.2 + 0.5) + 0.5 * 10 * 0.5
        assert!((bid.amount - 9.5).abs() < 1e-9);
        assert!(bid.time_offset_ms >= 10 && bid.time_offset_ms <= 11);
        assert_eq!(bid.meta, "latency=10ms");
    }

    #[tokio::test(start_paused = true)]
    async fn test_declines_when_draw_exceeds_probability() {
        let b = bidder(0.0, 10, &[0.0, 0.9, 0.0]);
        let (req, mut rx) = request(tens(), Duration::from_secs(1));

        let outcome = b.bid(req).await.unwrap();

        assert_eq!(outcome, BidOutcome::Abandoned(AbandonReason::Declined));
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_abandons_when_deadline_fires_during_wait() {
        let b = bidder(1.0, 1000, &[0.5, 0.0, 0.0]);
        let (req, mut rx) = request(tens(), Duration::from_millis(100));
        let started = Instant::now();

        let outcome = b.bid(req).await.unwrap();

        assert_eq!(
            outcome,
            BidOutcome::Abandoned(AbandonReason::CancelledDuringWait)
        );
        assert!(started.elapsed() < Duration::from_millis(200));
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_timeout_never_bids() {
        let b = bidder(1.0, 1, &[0.0, 0.0, 0.0]);
        let (req, _rx) = request(tens(), Duration::ZERO);

        let outcome = b.bid(req).await.unwrap();

        assert_eq!(
            outcome,
            BidOutcome::Abandoned(AbandonReason::CancelledDuringWait)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_attributes_is_a_fault() {
        let b = bidder(0.5, 5, &[0.0, 0.0, 0.0]);
        let (req, _rx) = request(AttributeSet::default(), Duration::from_secs(1));

        let err = b.bid(req).await.unwrap_err();
        assert_eq!(err, BidderError::EmptyAttributes);
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_sink_drops_bid() {
        let b = bidder(0.5, 5, &[0.0, 0.0, 0.0]);
        let (req, rx) = request(tens(), Duration::from_secs(1));
        drop(rx);

        let outcome = b.bid(req).await.unwrap();
        assert_eq!(outcome, BidOutcome::Dropped(DropReason::SinkClosed));
    }

    #[tokio::test(start_paused = true)]
    async fn test_amount_within_bounds_for_any_noise() {
        for aggressiveness in [0.0, 0.5, 1.0] {
            for noise in [0.0, 0.25, 0.75, 0.999] {
                let b = bidder(aggressiveness, 5, &[0.0, 0.0, noise]);
                let (req, mut rx) = request(tens(), Duration::from_secs(1));
                b.bid(req).await.unwrap();

                let bid = rx.recv().await.unwrap();
                let floor = 10.0 * (0.2 + aggressiveness);
                assert!(bid.amount >= floor - 1e-9);
                assert!(bid.amount < floor + 5.0);
            }
        }
    }
}
