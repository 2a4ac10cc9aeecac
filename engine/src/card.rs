//! Packed card representation and card notation parsing
//!
//! A card is a single `u32` carrying three independent views of itself:
//!
//! ```text
//!     xxxx xxxx ssss xppp pppb bbbb bbbb bbbb
//! ```
//!
//! - `b` (bits 0-12): one-hot rank bit, `1 << rank`
//! - `p` (bits 13-18): the rank's prime (2, 3, 5, ..., 41)
//! - `s` (bits 20-23): one-hot suit bit, `0x100000 << suit`
//!
//! AND-ing five cards leaves a suit bit set iff all five share a suit; OR-ing
//! them gives the 13-bit rank mask; multiplying their primes identifies the
//! rank multiset.

use crate::error::{EquityError, TokenDefect};
use std::fmt;
use std::str::FromStr;

/// Prime numbers for each rank (2-A, where 2=index 0, A=index 12)
pub const RANK_PRIMES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

pub(crate) const RANK_BITS: u32 = 0x1FFF;
pub(crate) const PRIME_SHIFT: u32 = 13;
pub(crate) const PRIME_BITS: u32 = 0x3F;
pub(crate) const SUIT_SHIFT: u32 = 20;
pub(crate) const SUIT_BITS: u32 = 0xF << SUIT_SHIFT;

/// Card rank, two low and ace high
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Rank from its index 0-12
    pub fn from_index(index: u8) -> Option<Rank> {
        Rank::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// The prime standing in for this rank in prime-product keys
    pub fn prime(self) -> u32 {
        RANK_PRIMES[self as usize]
    }

    fn from_char(c: char) -> Option<Rank> {
        match c.to_ascii_uppercase() {
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'A' => Some(Rank::Ace),
            _ => None,
        }
    }
}

/// Card suit; the discriminant picks the one-hot suit bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Suit from its index 0-3
    pub fn from_index(index: u8) -> Option<Suit> {
        Suit::ALL.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// A playing card packed into a `u32` (see module docs for the layout)
///
/// The encoding is a bijection over the 52 (rank, suit) pairs, so two cards
/// are equal iff their packed values are equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card(u32);

impl Card {
    /// Encode a card from its rank and suit
    pub fn new(rank: Rank, suit: Suit) -> Self {
        let suit_bit = 1u32 << (SUIT_SHIFT + suit as u32);
        let prime = rank.prime() << PRIME_SHIFT;
        let rank_bit = 1u32 << rank as u32;
        Card(suit_bit | prime | rank_bit)
    }

    /// Encode a card from a rank index 0-12 and a suit index 0-3
    ///
    /// Returns `None` when either index is out of range.
    pub fn encode(rank: u8, suit: u8) -> Option<Self> {
        Some(Card::new(Rank::from_index(rank)?, Suit::from_index(suit)?))
    }

    /// Get the packed card value
    pub fn value(self) -> u32 {
        self.0
    }

    pub fn rank(self) -> Rank {
        Rank::ALL[(self.0 & RANK_BITS).trailing_zeros() as usize]
    }

    pub fn suit(self) -> Suit {
        Suit::ALL[((self.0 & SUIT_BITS) >> SUIT_SHIFT).trailing_zeros() as usize]
    }

    /// One-hot rank-presence bit
    #[inline]
    pub fn rank_bit(self) -> u32 {
        self.0 & RANK_BITS
    }

    /// Embedded rank prime
    #[inline]
    pub fn prime(self) -> u32 {
        (self.0 >> PRIME_SHIFT) & PRIME_BITS
    }

    /// All 52 cards, rank-major then suit
    pub fn deck() -> impl Iterator<Item = Card> {
        Rank::ALL
            .into_iter()
            .flat_map(|rank| Suit::ALL.into_iter().map(move |suit| Card::new(rank, suit)))
    }
}

impl FromStr for Card {
    type Err = EquityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (rank, suit) = match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => (rank, suit),
            _ => return Err(EquityError::token(s, TokenDefect::Length(s.chars().count()))),
        };
        let rank = Rank::from_char(rank).ok_or_else(|| EquityError::token(s, TokenDefect::Rank(rank)))?;
        let suit = Suit::from_char(suit).ok_or_else(|| EquityError::token(s, TokenDefect::Suit(suit)))?;
        Ok(Card::new(rank, suit))
    }
}

/// Parse whitespace-separated card tokens such as `"As Kh 7d"`
///
/// Every token must be a valid two-character card; the first bad token is
/// reported instead of being skipped. An empty string yields no cards.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, EquityError> {
    s.split_whitespace().map(Card::from_str).collect()
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };
        write!(f, "{}", c)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };
        write!(f, "{}", c)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({} [{:#010x}])", self, self.0)
    }
}
