//! Hand evaluator implementation using a Cactus Kev two-path approach
//!
//! - Flush: suit bits AND-ed across five cards survive → rank-mask lookup
//! - Non-flush: product of the five rank primes → open-addressed table probe
//!
//! Seven-card hands take the best of their 21 five-card subsets.

use crate::card::{Card, SUIT_BITS};
use crate::score::HandScore;
use crate::tables::{self, LookupTables};
use rayon::prelude::*;

/// The 21 five-card subsets of seven cards, as indices
pub const FIVE_OF_SEVEN: [[usize; 5]; 21] = [
    [0, 1, 2, 3, 4],
    [0, 1, 2, 3, 5],
    [0, 1, 2, 3, 6],
    [0, 1, 2, 4, 5],
    [0, 1, 2, 4, 6],
    [0, 1, 2, 5, 6],
    [0, 1, 3, 4, 5],
    [0, 1, 3, 4, 6],
    [0, 1, 3, 5, 6],
    [0, 1, 4, 5, 6],
    [0, 2, 3, 4, 5],
    [0, 2, 3, 4, 6],
    [0, 2, 3, 5, 6],
    [0, 2, 4, 5, 6],
    [0, 3, 4, 5, 6],
    [1, 2, 3, 4, 5],
    [1, 2, 3, 4, 6],
    [1, 2, 3, 5, 6],
    [1, 2, 4, 5, 6],
    [1, 3, 4, 5, 6],
    [2, 3, 4, 5, 6],
];

/// Hand evaluator trait
///
/// The equity solver calls this once per player per board, so
/// implementations should be cheap and free of shared mutable state.
pub trait HandEvaluator {
    /// Evaluate a 7-card hand (5 board cards + 2 hole cards)
    ///
    /// Higher scores are stronger; equal scores tie.
    fn evaluate(&self, board: [Card; 5], hand: [Card; 2]) -> HandScore;
}

/// Table-driven evaluator over the process-wide lookup tables
#[derive(Clone, Copy)]
pub struct CactusKevEvaluator {
    tables: &'static LookupTables,
}

impl CactusKevEvaluator {
    /// Create an evaluator, building the lookup tables if needed
    pub fn new() -> Self {
        CactusKevEvaluator {
            tables: tables::init(),
        }
    }

    /// Rank a 5-card hand in O(1)
    #[inline]
    pub fn evaluate5(&self, cards: [Card; 5]) -> HandScore {
        let [a, b, c, d, e] = cards.map(Card::value);
        if a & b & c & d & e & SUIT_BITS != 0 {
            return self.tables.flush_score(a | b | c | d | e);
        }
        let product = cards.iter().map(|card| card.prime()).product();
        self.tables.prime_score(product)
    }

    /// Best score over the 21 five-card subsets of a 7-card hand
    #[inline]
    pub fn evaluate7(&self, cards: &[Card; 7]) -> HandScore {
        FIVE_OF_SEVEN
            .iter()
            .map(|&idx| self.evaluate5(idx.map(|i| cards[i])))
            .max()
            .unwrap_or(HandScore::NONE)
    }

    /// Evaluate a batch of 7-card hands across the rayon pool
    pub fn evaluate_batch(&self, boards: &[[Card; 5]], hands: &[[Card; 2]]) -> Vec<HandScore> {
        assert_eq!(boards.len(), hands.len(), "boards and hands must have same length");
        boards
            .par_iter()
            .zip(hands.par_iter())
            .map(|(board, hand)| self.evaluate(*board, *hand))
            .collect()
    }
}

impl Default for CactusKevEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl HandEvaluator for CactusKevEvaluator {
    #[inline]
    fn evaluate(&self, board: [Card; 5], hand: [Card; 2]) -> HandScore {
        let [b0, b1, b2, b3, b4] = board;
        let [h0, h1] = hand;
        self.evaluate7(&[h0, h1, b0, b1, b2, b3, b4])
    }
}

/// Score five cards with the shared tables
pub fn evaluate5(cards: [Card; 5]) -> HandScore {
    CactusKevEvaluator::new().evaluate5(cards)
}

/// Score seven cards with the shared tables
pub fn evaluate7(cards: &[Card; 7]) -> HandScore {
    CactusKevEvaluator::new().evaluate7(cards)
}

/// Deterministic (board, hand) samples of seven distinct cards
pub fn sample_hands(count: usize, seed: u64) -> (Vec<[Card; 5]>, Vec<[Card; 2]>) {
    let deck: Vec<Card> = Card::deck().collect();
    let mut state = seed;
    let mut next = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 33) as usize % deck.len()
    };

    let mut boards = Vec::with_capacity(count);
    let mut hands = Vec::with_capacity(count);
    for _ in 0..count {
        let mut cards: Vec<Card> = Vec::with_capacity(7);
        while cards.len() < 7 {
            let card = deck[next()];
            if !cards.contains(&card) {
                cards.push(card);
            }
        }
        boards.push([cards[0], cards[1], cards[2], cards[3], cards[4]]);
        hands.push([cards[5], cards[6]]);
    }
    (boards, hands)
}

/// Benchmark helper for CLI
///
/// Runs a batch evaluation and returns (evals_per_sec, duration_ms)
pub fn benchmark_throughput(sample_size: usize) -> (f64, u64) {
    use std::time::Instant;

    let evaluator = CactusKevEvaluator::new();
    let (boards, hands) = sample_hands(sample_size, 12345);

    // Warm-up
    for i in 0..10_000.min(sample_size) {
        let _ = evaluator.evaluate(boards[i], hands[i]);
    }

    let start = Instant::now();
    let results = evaluator.evaluate_batch(&boards, &hands);
    let duration = start.elapsed();
    log::debug!("evaluated {} hands", results.len());

    let evals_per_sec = sample_size as f64 / duration.as_secs_f64();
    (evals_per_sec, duration.as_millis() as u64)
}
