//! Card values: identity, rank, suit, and display state.
//!
//! A [`Card`] is a plain value. Collections own their cards outright and hand
//! them over by move; anything that needs to remember a card for later (the
//! undo history) keeps its own clone.

use std::fmt;

use bevy::prelude::*;

/// Stable identity of a card for the lifetime of a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(pub u32);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Card rank, Ace low. `value()` gives the 1..=13 number used for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
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

    pub fn value(self) -> u8 {
        self as u8 + 1
    }

    /// Inverse of [`Rank::value`].
    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// Rank for a zero-based face index (0 = Ace), as level files store it.
    pub fn from_face_index(index: i64) -> Option<Rank> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Rank::ALL.get(i).copied())
    }

    fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Suit for a zero-based index (0 = Clubs), as level files store it.
    pub fn from_index(index: i64) -> Option<Suit> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Suit::ALL.get(i).copied())
    }

    fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

/// Whether two ranks are adjacent, counting King and Ace as neighbours.
pub fn can_match(a: Rank, b: Rank) -> bool {
    let (a, b) = (a.value(), b.value());
    a.abs_diff(b) == 1 || matches!((a, b), (1, 13) | (13, 1))
}

/// One card and its display state.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub rank: Rank,
    pub suit: Suit,
    pub position: Vec2,
    /// Where the card was laid out when the level was generated.
    pub original_position: Vec2,
    pub visible: bool,
    /// Set while a presentation animation for this card is outstanding.
    pub moving: bool,
}

impl Card {
    pub fn new(id: CardId, rank: Rank, suit: Suit, position: Vec2) -> Self {
        Self {
            id,
            rank,
            suit,
            position,
            original_position: position,
            visible: true,
            moving: false,
        }
    }

    pub fn can_match(&self, other: &Card) -> bool {
        can_match(self.rank, other.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}
