//! Lookup tables for the 5-card evaluator
//!
//! Two tables are built once per process:
//! - a direct-indexed flush table over 13-bit rank masks
//! - an open-addressed prime-product table covering every 5-rank multiset
//!
//! After construction both are read-only and shared freely across threads.
//! Allocation failure while building aborts the process; there is no
//! evaluator without its tables.

use crate::card::RANK_PRIMES;
use crate::classify::{classify, is_straight};
use crate::score::{pack_ranks, HandScore, Tier};
use itertools::Itertools;
use std::sync::OnceLock;
use std::time::Instant;

/// One slot per 13-bit rank mask
pub const FLUSH_TABLE_SIZE: usize = 1 << 13;
/// Slots in the prime-product table; must be a power of two
pub const PRIME_TABLE_SIZE: usize = 1 << 15;
const PRIME_TABLE_MASK: u32 = (PRIME_TABLE_SIZE - 1) as u32;

/// Number of 5-rank multisets over 13 ranks, C(17, 5)
pub const RANK_MULTISETS: usize = 6188;
/// Number of 5-distinct-rank sets, C(13, 5)
pub const FLUSH_RANK_SETS: usize = 1287;

static TABLES: OnceLock<LookupTables> = OnceLock::new();

/// Build the process-wide tables on first call and return them
///
/// Safe to call from any number of threads; exactly one caller builds and
/// the rest wait for it. Later calls are a plain load.
pub fn init() -> &'static LookupTables {
    TABLES.get_or_init(LookupTables::build)
}

/// A `(product, score)` slot; product 0 marks an empty slot
#[derive(Debug, Clone, Copy, Default)]
struct HashEntry {
    product: u32,
    score: HandScore,
}

/// Folds the high bits of a prime product into the low bits before masking
#[inline]
fn slot(product: u32) -> usize {
    (product
        .wrapping_add(product >> 11)
        .wrapping_add(product.wrapping_mul(17))
        & PRIME_TABLE_MASK) as usize
}

/// The flush and prime-product tables
pub struct LookupTables {
    flush: Box<[HandScore]>,
    primes: Box<[HashEntry]>,
    entries: usize,
}

impl LookupTables {
    /// Enumerate every rank class and fill both tables
    ///
    /// Prefer [`init`], which builds once and shares the result.
    pub fn build() -> Self {
        let start = Instant::now();
        let mut tables = LookupTables {
            flush: build_flush_table(),
            primes: vec![HashEntry::default(); PRIME_TABLE_SIZE].into_boxed_slice(),
            entries: 0,
        };

        // non-decreasing rank sequences, one per multiset
        for ranks in (0..13u8).combinations_with_replacement(5) {
            let ranks = [ranks[0], ranks[1], ranks[2], ranks[3], ranks[4]];
            let product = ranks.iter().map(|&r| RANK_PRIMES[r as usize]).product();
            tables.insert(product, classify(ranks));
        }

        log::debug!(
            "built lookup tables: {} flush classes, {} prime products in {} slots ({:?})",
            FLUSH_RANK_SETS,
            tables.entries,
            PRIME_TABLE_SIZE,
            start.elapsed()
        );
        tables
    }

    /// Linear-probe insert; a product already present is left alone
    fn insert(&mut self, product: u32, score: HandScore) {
        let mut idx = slot(product);
        loop {
            let entry = &mut self.primes[idx];
            if entry.product == product {
                return;
            }
            if entry.product == 0 {
                *entry = HashEntry { product, score };
                self.entries += 1;
                return;
            }
            idx = (idx + 1) & PRIME_TABLE_MASK as usize;
        }
    }

    /// Score of a five-card flush by its OR-ed rank mask
    #[inline]
    pub fn flush_score(&self, rank_mask: u32) -> HandScore {
        self.flush[rank_mask as usize & (FLUSH_TABLE_SIZE - 1)]
    }

    /// Score of a non-flush hand by the product of its rank primes
    ///
    /// Every product of five real cards is present, so the probe always ends
    /// on a match. An unknown product ends on an empty slot and scores
    /// `HandScore::NONE`.
    #[inline]
    pub fn prime_score(&self, product: u32) -> HandScore {
        let mut idx = slot(product);
        loop {
            let entry = self.primes[idx];
            if entry.product == product {
                return entry.score;
            }
            if entry.product == 0 {
                return HandScore::NONE;
            }
            idx = (idx + 1) & PRIME_TABLE_MASK as usize;
        }
    }

    /// Number of prime products stored
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }
}

/// Straight flushes keep the straight's tie-break; other flushes pack all five
/// ranks highest first
fn build_flush_table() -> Box<[HandScore]> {
    let mut table = vec![HandScore::NONE; FLUSH_TABLE_SIZE].into_boxed_slice();
    for mask in 0..FLUSH_TABLE_SIZE {
        if mask.count_ones() != 5 {
            continue;
        }
        let ranks: Vec<u8> = (0..13u8).rev().filter(|&r| (mask >> r) & 1 == 1).collect();
        let ranks = [ranks[0], ranks[1], ranks[2], ranks[3], ranks[4]];
        let score = classify(ranks);
        table[mask] = if is_straight(score) {
            score.retag(Tier::StraightFlush)
        } else {
            HandScore::new(Tier::Flush, pack_ranks(&ranks))
        };
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn mask(ranks: &[u8]) -> u32 {
        ranks.iter().fold(0, |acc, &r| acc | 1 << r)
    }

    #[test]
    fn test_flush_table_completeness() {
        let tables = init();
        let mut filled = 0;
        let mut straight_flushes = 0;
        for m in 0..FLUSH_TABLE_SIZE as u32 {
            let score = tables.flush_score(m);
            if m.count_ones() == 5 {
                assert_ne!(score, HandScore::NONE, "Mask {:#015b} has no entry", m);
                filled += 1;
                if score.tier() == Tier::StraightFlush {
                    straight_flushes += 1;
                } else {
                    assert_eq!(score.tier(), Tier::Flush);
                }
            } else {
                assert_eq!(score, HandScore::NONE, "Mask {:#015b} should be empty", m);
            }
        }
        assert_eq!(filled, FLUSH_RANK_SETS);
        assert_eq!(straight_flushes, 10, "Ten straight flushes from wheel to royal");
    }

    #[test]
    fn test_flush_tiebreak_highest_first() {
        let tables = init();
        let ace_high = tables.flush_score(mask(&[12, 5, 3, 1, 0]));
        let king_high = tables.flush_score(mask(&[11, 10, 9, 8, 6]));
        assert!(ace_high > king_high, "Ace-high flush must beat king-high flush");

        let royal = tables.flush_score(mask(&[12, 11, 10, 9, 8]));
        let steel_wheel = tables.flush_score(mask(&[12, 3, 2, 1, 0]));
        assert_eq!(royal, HandScore::new(Tier::StraightFlush, 12));
        assert_eq!(steel_wheel, HandScore::new(Tier::StraightFlush, 3));
    }

    #[test]
    fn test_prime_table_completeness() {
        let tables = init();
        assert_eq!(tables.len(), RANK_MULTISETS);

        let mut products = HashSet::new();
        for ranks in (0..13u8).combinations_with_replacement(5) {
            let product: u32 = ranks.iter().map(|&r| RANK_PRIMES[r as usize]).product();
            assert!(products.insert(product), "Product {} is not unique", product);
            let score = tables.prime_score(product);
            let expected = classify([ranks[0], ranks[1], ranks[2], ranks[3], ranks[4]]);
            assert_eq!(score, expected, "Wrong score for ranks {:?}", ranks);
            if ranks.iter().all_equal() {
                assert_eq!(score, HandScore::NONE);
            } else {
                assert_ne!(score, HandScore::NONE, "Ranks {:?} missing", ranks);
            }
        }
        assert_eq!(products.len(), RANK_MULTISETS);
    }

    #[test]
    fn test_init_is_idempotent() {
        let first = init() as *const LookupTables;
        let second = init() as *const LookupTables;
        assert_eq!(first, second, "Tables must be built once");

        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| init() as *const LookupTables as usize))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), first as usize);
        }
    }

    #[test]
    fn test_duplicate_insert_is_ignored() {
        let mut tables = LookupTables::build();
        let before = tables.len();
        let product = 41 * 41 * 41 * 41 * 37;
        tables.insert(product, HandScore::NONE);
        assert_eq!(tables.len(), before);
        assert_eq!(tables.prime_score(product).tier(), Tier::FourOfAKind);
    }
}
