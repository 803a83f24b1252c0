//! The card list shown on screen.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::render::{CardView, render_card};
use crate::style::CardStyle;

/// An ordered list of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

/// A rendered deck: a vertically scrolling list of card views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckView {
    /// Rendered cards, in deck order.
    pub cards: Vec<CardView>,
    /// Vertical padding of the scroll container.
    pub padding_vertical: u16,
}

impl Deck {
    /// Creates a deck from cards in display order.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// The four starter cards: Pikachu, Charmander, Bulbasaur, Squirtle.
    ///
    /// List items are kept exactly as written, stray spaces and commas
    /// included.
    #[must_use]
    pub fn starter() -> Self {
        Self::from_cards(alloc::vec![
            Card::new("Pikachu", "assets/images/pikachu.png", 100)
                .with_type("electric")
                .with_moves(["Thunderbolt", "Quick Attack"])
                .with_weaknesses(["Ground"]),
            Card::new("Charmander", "assets/images/charmander.png", 100)
                .with_type("fire")
                .with_moves(["Ember", "Scratch"])
                .with_weaknesses(["Water", "Rock"]),
            Card::new("Bulbasaur", "assets/images/bulbasaur.png", 100)
                .with_type("grass")
                .with_moves(["Vine Whip", " Power Whip"])
                .with_weaknesses(["Fire,", "Flying", "Ice"]),
            Card::new("Squirtle", "assets/images/squirtle.png", 100)
                .with_type("water")
                .with_moves(["Tackle", "Water Gun"])
                .with_weaknesses(["Electric", "Grass "]),
        ])
    }

    /// Returns the cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Renders every card, preserving order.
    #[must_use]
    pub fn render(&self) -> DeckView {
        tracing::debug!(cards = self.cards.len(), "rendering deck");
        DeckView {
            cards: self.cards.iter().map(render_card).collect(),
            padding_vertical: CardStyle::DEFAULT.list_padding_vertical,
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::starter()
    }
}
