//! Winner resolution
//!
//! Bids are ranked by:
//! 1. Highest amount
//! 2. Earliest time offset at the same amount
//!
//! The sort is stable, so bids equal on both keys keep collection order.
//! The outcome depends only on the collected sequence, never on which
//! bidder task happened to run first.

use std::cmp::Ordering;

use crate::entities::Bid;

/// Priority ordering: `Less` means `a` ranks ahead of `b`
pub fn bid_priority(a: &Bid, b: &Bid) -> Ordering {
    b.amount
        .total_cmp(&a.amount)
        .then_with(|| a.time_offset_ms.cmp(&b.time_offset_ms))
}

/// Sort collected bids into final ranking order
pub fn rank_bids(mut bids: Vec<Bid>) -> Vec<Bid> {
    bids.sort_by(bid_priority);
    bids
}

/// Rank bids and pick the winner (first ranked bid, if any)
pub fn resolve_winner(bids: Vec<Bid>) -> (Vec<Bid>, Option<Bid>) {
    let ranked = rank_bids(bids);
    let winner = ranked.first().cloned();
    (ranked, winner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bid(bidder_id: u32, amount: f64, time_offset_ms: u64) -> Bid {
        Bid::new(bidder_id, amount, time_offset_ms, "")
    }

    #[test]
    fn test_highest_amount_wins() {
        let (ranked, winner) =
            resolve_winner(vec![bid(1, 10.0, 5), bid(2, 30.0, 50), bid(3, 20.0, 1)]);

        let order: Vec<_> = ranked.iter().map(|b| b.bidder_id).collect();
        assert_eq!(order, vec![2, 3, 1]);
        assert_eq!(winner.unwrap().bidder_id, 2);
    }

    #[test]
    fn test_tie_on_amount_goes_to_earliest() {
        let (_, winner) = resolve_winner(vec![bid(1, 25.0, 40), bid(2, 25.0, 12), bid(3, 25.0, 30)]);
        assert_eq!(winner.unwrap().bidder_id, 2);
    }

    #[test]
    fn test_full_tie_keeps_collection_order() {
        let ranked = rank_bids(vec![
            bid(7, 25.0, 10),
            bid(3, 25.0, 10),
            bid(9, 99.0, 1),
            bid(5, 25.0, 10),
        ]);

        let order: Vec<_> = ranked.iter().map(|b| b.bidder_id).collect();
        assert_eq!(order, vec![9, 7, 3, 5]);
    }

    #[test]
    fn test_empty_has_no_winner() {
        let (ranked, winner) = resolve_winner(Vec::new());
        assert!(ranked.is_empty());
        assert!(winner.is_none());
    }

    #[test]
    fn test_ranking_independent_of_arrival_order() {
        // Distinct (amount, time) pairs: every arrival order must rank the same
        let bids = vec![
            bid(1, 12.5, 30),
            bid(2, 40.0, 90),
            bid(3, 12.5, 10),
            bid(4, 7.0, 2),
            bid(5, 40.0, 45),
        ];
        let expected: Vec<_> = rank_bids(bids.clone())
            .into_iter()
            .map(|b| b.bidder_id)
            .collect();
        assert_eq!(expected, vec![5, 2, 3, 1, 4]);

        let mut rotated = bids;
        for _ in 0..rotated.len() {
            rotated.rotate_left(1);
            let order: Vec<_> = rank_bids(rotated.clone())
                .into_iter()
                .map(|b| b.bidder_id)
                .collect();
            assert_eq!(order, expected);

            let reversed: Vec<_> = rank_bids(rotated.iter().rev().cloned().collect())
                .into_iter()
                .map(|b| b.bidder_id)
                .collect();
            assert_eq!(reversed, expected);
        }
    }
}
