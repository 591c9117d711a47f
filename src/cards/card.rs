//! Cards: a suit and a rank from fixed symbol sets.
//!
//! Cards render as `<rank>-<suit>`, e.g. `T-H` for the ten of hearts,
//! and parse back from the same form.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::CardError;

/// One of the four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Spades,
    Hearts,
    Diamonds,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Spades, Suit::Hearts, Suit::Diamonds];

    /// Single-character symbol: 'C', 'S', 'H' or 'D'.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
        }
    }

    /// Look up a suit by its symbol.
    pub fn from_symbol(symbol: char) -> Result<Self, CardError> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.symbol() == symbol)
            .ok_or(CardError::InvalidSuit(symbol))
    }
}

/// One of the thirteen ranks, Ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks, Ace through King.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
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
    ];

    /// Number of ranks; also the height of a full base column.
    pub const COUNT: usize = Self::ALL.len();

    /// Face value, Ace = 1 through King = 13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 1
    }

    /// Single-character symbol: 'A', '2'..'9', 'T', 'J', 'Q', 'K'.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Rank::Ace => 'A',
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
        }
    }

    /// Look up a rank by its symbol.
    pub fn from_symbol(symbol: char) -> Result<Self, CardError> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.symbol() == symbol)
            .ok_or(CardError::InvalidRank(symbol))
    }
}

/// An immutable playing card.
///
/// Equality and hashing use the (suit, rank) pair. Ordering is partial:
/// cards of the same suit compare by value, cards of different suits
/// are unordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    /// Create a card from typed parts. Cannot fail.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Create a card from its suit and rank symbols.
    ///
    /// ```
    /// use patience::cards::{Card, Rank, Suit};
    ///
    /// let card = Card::from_symbols('H', 'T').unwrap();
    /// assert_eq!(card, Card::new(Suit::Hearts, Rank::Ten));
    /// assert!(Card::from_symbols('X', 'T').is_err());
    /// ```
    pub fn from_symbols(suit: char, rank: char) -> Result<Self, CardError> {
        Ok(Self::new(Suit::from_symbol(suit)?, Rank::from_symbol(rank)?))
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Face value, 1..=13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.rank.value()
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.suit == other.suit).then(|| self.value().cmp(&other.value()))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some('-'), Some(suit), None) => Self::from_symbols(suit, rank),
            _ => Err(CardError::Malformed(s.to_string())),
        }
    }
}
