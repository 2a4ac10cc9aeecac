//! Tiered hand scores
//!
//! Bits 24-27 hold the tier, bits 0-19 hold tie-break rank nibbles (highest
//! relevant rank first). Higher scores are stronger hands, and equal scores
//! split the pot.

use std::fmt;

pub(crate) const TIER_SHIFT: u32 = 24;
pub(crate) const TIEBREAK_BITS: u32 = (1 << TIER_SHIFT) - 1;

/// Hand category, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Tier {
    None = 0,
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl Tier {
    pub const ALL: [Tier; 10] = [
        Tier::None,
        Tier::HighCard,
        Tier::OnePair,
        Tier::TwoPair,
        Tier::ThreeOfAKind,
        Tier::Straight,
        Tier::Flush,
        Tier::FullHouse,
        Tier::FourOfAKind,
        Tier::StraightFlush,
    ];
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tier::None => "none",
            Tier::HighCard => "high card",
            Tier::OnePair => "one pair",
            Tier::TwoPair => "two pair",
            Tier::ThreeOfAKind => "three of a kind",
            Tier::Straight => "straight",
            Tier::Flush => "flush",
            Tier::FullHouse => "full house",
            Tier::FourOfAKind => "four of a kind",
            Tier::StraightFlush => "straight flush",
        };
        f.write_str(name)
    }
}

/// Hand strength as a comparable integer
///
/// Comparing two scores numerically is the same as comparing the hands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandScore(u32);

impl HandScore {
    /// The empty score; weaker than every real hand
    pub const NONE: HandScore = HandScore(0);

    pub fn new(tier: Tier, tiebreak: u32) -> Self {
        debug_assert!(tiebreak <= TIEBREAK_BITS, "tiebreak overflows into tier bits");
        HandScore(((tier as u32) << TIER_SHIFT) | tiebreak)
    }

    /// Get the raw score value
    pub fn value(self) -> u32 {
        self.0
    }

    pub fn tier(self) -> Tier {
        Tier::ALL
            .get((self.0 >> TIER_SHIFT) as usize)
            .copied()
            .unwrap_or(Tier::None)
    }

    pub fn tiebreak(self) -> u32 {
        self.0 & TIEBREAK_BITS
    }

    /// Same tie-break bits under a different tier
    pub fn retag(self, tier: Tier) -> Self {
        HandScore::new(tier, self.tiebreak())
    }
}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:#07x})", self.tier(), self.tiebreak())
    }
}

/// Pack rank indices as 4-bit nibbles, first rank in the highest nibble
pub(crate) fn pack_ranks(ranks: &[u8]) -> u32 {
    ranks.iter().fold(0, |acc, &r| (acc << 4) | r as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_dominates_tiebreak() {
        let best_pair = HandScore::new(Tier::OnePair, pack_ranks(&[12, 11, 10, 9]));
        let worst_two_pair = HandScore::new(Tier::TwoPair, pack_ranks(&[1, 0, 2]));
        assert!(worst_two_pair > best_pair, "Any two pair should beat any one pair");
        assert!(HandScore::new(Tier::HighCard, 0) > HandScore::NONE);
    }

    #[test]
    fn test_retag_keeps_tiebreak() {
        let straight = HandScore::new(Tier::Straight, 7);
        let sf = straight.retag(Tier::StraightFlush);
        assert_eq!(sf.tier(), Tier::StraightFlush);
        assert_eq!(sf.tiebreak(), 7);
    }

    #[test]
    fn test_pack_ranks_descending() {
        assert_eq!(pack_ranks(&[12, 3, 0]), 0xC30);
        assert_eq!(pack_ranks(&[12, 11, 10, 9, 7]), 0xCBA97);
    }
}
