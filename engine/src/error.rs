//! Error types for card parsing, request validation and enumeration control

use crate::card::Card;
use thiserror::Error;

/// Why a single card token was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenDefect {
    #[error("expected 2 characters, got {0}")]
    Length(usize),

    #[error("unknown rank '{0}'")]
    Rank(char),

    #[error("unknown suit '{0}'")]
    Suit(char),
}

/// Errors surfaced by the equity engine
///
/// Everything here is raised before enumeration starts, except `Cancelled`
/// and `TimedOut`, which report how far the enumeration got.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EquityError {
    #[error("invalid card token \"{token}\": {defect}")]
    InvalidCardToken { token: String, defect: TokenDefect },

    #[error("expected 2 to 8 players, got {0}")]
    PlayerCount(usize),

    #[error("player {player} must hold exactly 2 hole cards, got {found}")]
    HoleCardCount { player: usize, found: usize },

    #[error("board holds at most 5 cards, got {0}")]
    BoardTooLarge(usize),

    #[error("card {0} appears more than once")]
    DuplicateCard(Card),

    #[error("enumeration cancelled after {boards} boards")]
    Cancelled { boards: u64 },

    #[error("enumeration timed out after {boards} boards")]
    TimedOut { boards: u64 },
}

impl EquityError {
    /// Build an `InvalidCardToken` from the offending token
    pub(crate) fn token(token: &str, defect: TokenDefect) -> Self {
        EquityError::InvalidCardToken {
            token: token.to_string(),
            defect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn test_error_messages_name_the_culprit() {
        let err = EquityError::token("Xz", TokenDefect::Rank('X'));
        assert_eq!(err.to_string(), "invalid card token \"Xz\": unknown rank 'X'");

        let err = EquityError::DuplicateCard(Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(err.to_string(), "card As appears more than once");

        let err = EquityError::HoleCardCount { player: 2, found: 1 };
        assert!(err.to_string().contains("player 2"), "message should name the player");
    }
}
