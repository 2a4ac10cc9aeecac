//! Exact equity by exhaustive board completion
//!
//! Every way to complete the board from the remaining deck is visited once.
//! Each completed board awards one unit of pot: a sole winner takes it, tied
//! winners split it, everyone else records a loss. Counters stay raw until
//! [`finalize`] turns them into percentages, so shards can be summed first.

use crate::card::{parse_cards, Card, Rank, Suit};
use crate::combinations::{binomial, shards, Combinations};
use crate::error::EquityError;
use crate::evaluator::{CactusKevEvaluator, HandEvaluator};
use crate::options::{CancelToken, SolveOptions, CHECK_INTERVAL};
use crate::score::HandScore;
use rayon::prelude::*;
use std::collections::HashSet;
use std::ops::Range;
use std::time::Instant;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 8;
pub const BOARD_SIZE: usize = 5;

/// Pot units per board: lcm(1..=8), so every tie split is a whole number
pub const SHARE_UNITS: u64 = 840;

/// Raw per-player counters for one equity request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimStats {
    pub wins: Vec<u64>,
    pub ties: Vec<u64>,
    pub losses: Vec<u64>,
    /// Pot won, in units of 1/`SHARE_UNITS` of a board
    pub shares: Vec<u64>,
    pub total_boards: u64,
}

impl SimStats {
    pub fn new(players: usize) -> Self {
        SimStats {
            wins: vec![0; players],
            ties: vec![0; players],
            losses: vec![0; players],
            shares: vec![0; players],
            total_boards: 0,
        }
    }

    pub fn players(&self) -> usize {
        self.wins.len()
    }

    /// Fractional pots won by `player`
    pub fn equity(&self, player: usize) -> f64 {
        self.shares[player] as f64 / SHARE_UNITS as f64
    }

    /// Sum the counters of two runs over disjoint boards
    pub fn merge(mut self, other: SimStats) -> SimStats {
        debug_assert_eq!(self.players(), other.players());
        let columns = [
            (&mut self.wins, &other.wins),
            (&mut self.ties, &other.ties),
            (&mut self.losses, &other.losses),
            (&mut self.shares, &other.shares),
        ];
        for (mine, theirs) in columns {
            for (a, b) in mine.iter_mut().zip(theirs) {
                *a += b;
            }
        }
        self.total_boards += other.total_boards;
        self
    }

    /// Tally one completed board from every player's score
    fn record(&mut self, scores: &[HandScore]) {
        let best = scores.iter().copied().max().unwrap_or(HandScore::NONE);
        let winners = scores.iter().filter(|&&s| s == best).count() as u64;
        let share = SHARE_UNITS / winners;
        for (player, &score) in scores.iter().enumerate() {
            if score != best {
                self.losses[player] += 1;
                continue;
            }
            if winners == 1 {
                self.wins[player] += 1;
            } else {
                self.ties[player] += 1;
            }
            self.shares[player] += share;
        }
        self.total_boards += 1;
    }
}

/// Percentages for one player, each in [0, 100]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlayerResult {
    pub win_pct: f64,
    pub tie_pct: f64,
    pub loss_pct: f64,
    pub equity_pct: f64,
}

/// Turn raw counters into percentages
///
/// With no boards at all every percentage is zero.
pub fn finalize(stats: &SimStats) -> Vec<PlayerResult> {
    let total = stats.total_boards;
    let pct = |count: u64| {
        if total == 0 {
            0.0
        } else {
            count as f64 / total as f64 * 100.0
        }
    };
    (0..stats.players())
        .map(|p| PlayerResult {
            win_pct: pct(stats.wins[p]),
            tie_pct: pct(stats.ties[p]),
            loss_pct: pct(stats.losses[p]),
            equity_pct: if total == 0 {
                0.0
            } else {
                stats.equity(p) / total as f64 * 100.0
            },
        })
        .collect()
}

/// A validated equity question: hole cards, known board, remaining deck
#[derive(Debug, Clone)]
pub struct EquityRequest {
    holes: Vec<[Card; 2]>,
    board: Vec<Card>,
    deck: Vec<Card>,
}

impl EquityRequest {
    /// Validate player count, board size and card uniqueness
    pub fn new(holes: Vec<[Card; 2]>, board: Vec<Card>) -> Result<Self, EquityError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&holes.len()) {
            return Err(EquityError::PlayerCount(holes.len()));
        }
        if board.len() > BOARD_SIZE {
            return Err(EquityError::BoardTooLarge(board.len()));
        }
        let mut known = HashSet::with_capacity(holes.len() * 2 + board.len());
        for &card in holes.iter().flatten().chain(board.iter()) {
            if !known.insert(card) {
                return Err(EquityError::DuplicateCard(card));
            }
        }
        let deck = Card::deck().filter(|card| !known.contains(card)).collect();
        Ok(EquityRequest { holes, board, deck })
    }

    /// Parse card notation, e.g. `(&["As Ks", "Td Tc"], "Qs Js 9h")`
    pub fn parse(holes: &[&str], board: &str) -> Result<Self, EquityError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&holes.len()) {
            return Err(EquityError::PlayerCount(holes.len()));
        }
        let holes = holes
            .iter()
            .enumerate()
            .map(|(i, hole)| match parse_cards(hole)?.as_slice() {
                &[a, b] => Ok([a, b]),
                cards => Err(EquityError::HoleCardCount {
                    player: i + 1,
                    found: cards.len(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(holes, parse_cards(board)?)
    }

    pub fn holes(&self) -> &[[Card; 2]] {
        &self.holes
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// Cards neither held nor on the board, rank-major
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Board cards still to come
    pub fn missing(&self) -> usize {
        BOARD_SIZE - self.board.len()
    }

    /// Number of board completions the solver will visit
    pub fn boards(&self) -> u64 {
        binomial(self.deck.len(), self.missing())
    }

    /// Enumerate with the table-driven evaluator
    pub fn solve(&self, options: &SolveOptions) -> Result<SimStats, EquityError> {
        self.solve_with(&CactusKevEvaluator::new(), options)
    }

    /// Enumerate every board completion and tally the results
    ///
    /// When sharded, each shard tallies its own counters and the sums are
    /// merged. A cancelled or timed-out run reports the boards visited by the
    /// shard that stopped.
    pub fn solve_with<E>(&self, evaluator: &E, options: &SolveOptions) -> Result<SimStats, EquityError>
    where
        E: HandEvaluator + Sync,
    {
        let total = self.boards();
        let start = Instant::now();
        let deadline = options.timeout.map(|timeout| start + timeout);
        let cancel = options.cancel.as_ref();
        let spans = shards(total, options.shard_count(total));
        log::info!(
            "solving {} players, {} known board cards: {} boards in {} shards",
            self.holes.len(),
            self.board.len(),
            total,
            spans.len().max(1)
        );

        let stats = if spans.len() <= 1 {
            self.solve_span(evaluator, 0..total, deadline, cancel)?
        } else {
            spans
                .into_par_iter()
                .map(|span| self.solve_span(evaluator, span, deadline, cancel))
                .try_reduce(|| SimStats::new(self.holes.len()), |a, b| Ok(a.merge(b)))?
        };

        let elapsed = start.elapsed();
        log::info!(
            "solved {} boards in {:?} ({:.0} boards/sec)",
            stats.total_boards,
            elapsed,
            stats.total_boards as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
        );
        Ok(stats)
    }

    /// Tally the board completions at lexicographic positions `span`
    fn solve_span<E>(
        &self,
        evaluator: &E,
        span: Range<u64>,
        deadline: Option<Instant>,
        cancel: Option<&CancelToken>,
    ) -> Result<SimStats, EquityError>
    where
        E: HandEvaluator,
    {
        let known = self.board.len();
        let mut stats = SimStats::new(self.holes.len());
        let mut scores = vec![HandScore::NONE; self.holes.len()];
        let mut board = [Card::new(Rank::Two, Suit::Clubs); BOARD_SIZE];
        board[..known].copy_from_slice(&self.board);

        let mut walk = Combinations::range(self.deck.len(), self.missing(), span);
        while let Some(indices) = walk.next() {
            for (slot, &i) in board[known..].iter_mut().zip(indices) {
                *slot = self.deck[i];
            }
            for (score, hole) in scores.iter_mut().zip(&self.holes) {
                *score = evaluator.evaluate(board, *hole);
            }
            stats.record(&scores);
            if stats.total_boards % CHECK_INTERVAL == 0 {
                interrupted(stats.total_boards, deadline, cancel)?;
            }
        }
        Ok(stats)
    }
}

/// Err when the run should stop early
fn interrupted(boards: u64, deadline: Option<Instant>, cancel: Option<&CancelToken>) -> Result<(), EquityError> {
    if cancel.is_some_and(CancelToken::is_cancelled) {
        log::warn!("enumeration cancelled after {} boards", boards);
        return Err(EquityError::Cancelled { boards });
    }
    if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
        log::warn!("enumeration timed out after {} boards", boards);
        return Err(EquityError::TimedOut { boards });
    }
    Ok(())
}

/// Exact win/tie/loss/equity percentages for each player, in input order
///
/// `holes` holds one two-card string per player (2 to 8 players); `board`
/// holds 0 to 5 known community cards and may be empty.
pub fn calculate_equity(holes: &[&str], board: &str) -> Result<Vec<PlayerResult>, EquityError> {
    calculate_equity_with(holes, board, &SolveOptions::default())
}

/// [`calculate_equity`] with explicit solver options
pub fn calculate_equity_with(
    holes: &[&str],
    board: &str,
    options: &SolveOptions,
) -> Result<Vec<PlayerResult>, EquityError> {
    let request = EquityRequest::parse(holes, board)?;
    let stats = request.solve(options)?;
    Ok(finalize(&stats))
}
