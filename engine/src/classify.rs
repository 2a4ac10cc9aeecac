//! Rank classifier used while building the lookup tables
//!
//! Maps five rank indices (repeats allowed, any order) to a tiered score,
//! ignoring suits. Never called on the evaluation hot path.

use crate::score::{pack_ranks, HandScore, Tier};

/// A-5-4-3-2, sorted descending
const WHEEL: [u8; 5] = [12, 3, 2, 1, 0];
/// Tie-break of the wheel: a five-high straight
const WHEEL_HIGH: u32 = 3;

/// Classify five ranks by multiplicity pattern
///
/// Five distinct ranks are a straight or high card. Otherwise the groups are
/// checked in order quads, full house, trips, two pair, one pair, with the
/// group ranks packed before the kickers. Five copies of one rank cannot come
/// from a real deck and classify as `Tier::None`.
pub fn classify(mut ranks: [u8; 5]) -> HandScore {
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let mut counts = [0u8; 13];
    for &rank in ranks.iter() {
        counts[rank as usize] += 1;
    }
    let distinct = counts.iter().filter(|&&c| c > 0).count();

    if distinct == 5 {
        if ranks == WHEEL {
            return HandScore::new(Tier::Straight, WHEEL_HIGH);
        }
        if ranks[0] - ranks[4] == 4 {
            return HandScore::new(Tier::Straight, ranks[0] as u32);
        }
        return HandScore::new(Tier::HighCard, pack_ranks(&ranks));
    }

    // groups collected highest rank first
    let mut quad = None;
    let mut trip = None;
    let mut pairs = Vec::with_capacity(2);
    let mut kickers = Vec::with_capacity(3);
    for rank in (0..13u8).rev() {
        match counts[rank as usize] {
            4 => quad = Some(rank),
            3 => trip = Some(rank),
            2 => pairs.push(rank),
            1 => kickers.push(rank),
            _ => {}
        }
    }

    match (quad, trip, pairs.as_slice()) {
        (Some(q), _, _) => HandScore::new(Tier::FourOfAKind, pack_ranks(&[q, kickers[0]])),
        (None, Some(t), &[p]) => HandScore::new(Tier::FullHouse, pack_ranks(&[t, p])),
        (None, Some(t), _) => {
            HandScore::new(Tier::ThreeOfAKind, pack_ranks(&[t, kickers[0], kickers[1]]))
        }
        (None, None, &[high, low]) => {
            HandScore::new(Tier::TwoPair, pack_ranks(&[high, low, kickers[0]]))
        }
        (None, None, &[p]) => HandScore::new(
            Tier::OnePair,
            pack_ranks(&[p, kickers[0], kickers[1], kickers[2]]),
        ),
        _ => HandScore::NONE,
    }
}

/// True when the score is a plain straight
pub(crate) fn is_straight(score: HandScore) -> bool {
    score.tier() == Tier::Straight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straights() {
        let broadway = classify([12, 11, 10, 9, 8]);
        assert_eq!(broadway, HandScore::new(Tier::Straight, 12));

        let six_high = classify([2, 4, 1, 3, 0]);
        assert_eq!(six_high, HandScore::new(Tier::Straight, 4));

        let wheel = classify([0, 12, 1, 3, 2]);
        assert_eq!(wheel, HandScore::new(Tier::Straight, 3), "Wheel is a five-high straight");
        assert!(wheel < six_high, "Wheel is the lowest straight");
    }

    #[test]
    fn test_wheel_lookalikes_are_high_card() {
        // ace-high with 5-4-3 but no deuce: not a straight
        assert_eq!(classify([12, 3, 2, 1, 5]).tier(), Tier::HighCard);
        // A-K-Q-J-2 does not wrap around
        assert_eq!(classify([12, 11, 10, 9, 0]).tier(), Tier::HighCard);
        // ace on top of any other four-card run below the king
        for high in 4..11u8 {
            let ranks = [12, high, high - 1, high - 2, high - 3];
            assert_eq!(classify(ranks).tier(), Tier::HighCard, "{:?} must not wrap", ranks);
        }
    }

    #[test]
    fn test_group_patterns() {
        assert_eq!(classify([5, 5, 5, 5, 12]), HandScore::new(Tier::FourOfAKind, 0x5C));
        assert_eq!(classify([12, 5, 5, 5, 5]), HandScore::new(Tier::FourOfAKind, 0x5C));
        assert_eq!(classify([3, 3, 9, 9, 9]), HandScore::new(Tier::FullHouse, 0x93));
        assert_eq!(classify([7, 7, 7, 12, 0]), HandScore::new(Tier::ThreeOfAKind, 0x7C0));
        assert_eq!(classify([4, 11, 4, 11, 6]), HandScore::new(Tier::TwoPair, 0xB46));
        assert_eq!(classify([2, 2, 12, 8, 0]), HandScore::new(Tier::OnePair, 0x2C80));
        assert_eq!(classify([12, 10, 8, 5, 0]), HandScore::new(Tier::HighCard, 0xCA850));
    }

    #[test]
    fn test_five_of_a_kind_is_none() {
        assert_eq!(classify([6; 5]), HandScore::NONE);
    }

    #[test]
    fn test_kicker_ordering() {
        assert!(classify([9, 9, 12, 3, 2]) > classify([9, 9, 11, 10, 8]), "Better first kicker wins");
        assert!(classify([9, 9, 4, 4, 12]) > classify([9, 9, 4, 4, 11]), "Two pair decided by kicker");
        assert!(classify([10, 10, 10, 0, 0]) > classify([9, 9, 9, 12, 12]), "Full house by trips first");
    }
}
