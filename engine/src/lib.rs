//! Exact hold'em equity engine
//!
//! Ranks hands through two precomputed tables (flush masks and prime-product
//! hashes) and computes exact win/tie/loss/equity by visiting every possible
//! completion of the board.
//!
//! ```no_run
//! let results = equity_engine::calculate_equity(&["As Ks", "Td Tc"], "Qs Js 9h")?;
//! for (i, r) in results.iter().enumerate() {
//!     println!("P{}: {:.2}% equity", i + 1, r.equity_pct);
//! }
//! # Ok::<(), equity_engine::EquityError>(())
//! ```
//!
//! The lookup tables are built on first use; call [`tables::init`] up front to
//! keep that cost out of the first request.

pub mod card;
pub mod classify;
pub mod combinations;
pub mod equity;
pub mod error;
pub mod evaluator;
pub mod options;
pub mod score;
pub mod tables;

pub use card::{parse_cards, Card, Rank, Suit};
pub use equity::{calculate_equity, calculate_equity_with, finalize, EquityRequest, PlayerResult, SimStats};
pub use error::{EquityError, TokenDefect};
pub use evaluator::{evaluate5, evaluate7, CactusKevEvaluator, HandEvaluator};
pub use options::{CancelToken, SolveOptions};
pub use score::{HandScore, Tier};
