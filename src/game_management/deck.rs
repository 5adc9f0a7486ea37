//! Deck module
//!
//! The fixed 36-card universe: four suits, values 6 through 14.
//! Cards here are plain values; a card only becomes a database record
//! once it has been dealt to somebody.

use crate::entity::cards::Suit;

/// Number of cards in the deck
pub const DECK_SIZE: usize = 36;

/// Lowest card value in the deck
pub const MIN_CARD_VALUE: i32 = 6;

/// Highest card value in the deck (the ace)
pub const MAX_CARD_VALUE: i32 = 14;

/// All four suits
pub const SUITS: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

/// A card as a plain value, before it is dealt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub value: i32,
}

/// Build the full 36-card deck
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in SUITS {
        for value in MIN_CARD_VALUE..=MAX_CARD_VALUE {
            deck.push(Card { suit, value });
        }
    }
    deck
}
