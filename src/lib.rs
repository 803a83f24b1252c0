//! Creature cards with type badges, rendered into display blocks, with
//! optional `no_std` support.
//!
//! A [`Card`] is a plain record of a creature's name, image, type, health,
//! moves, and weaknesses. [`render_card`] turns it into a [`CardView`] that a
//! host UI can draw directly, resolving the type label to a badge colour and
//! emoji with [`resolve_type`]. [`Deck`] holds an ordered list of cards and
//! [`TextRenderer`] draws the result in a terminal.
//!
//! # Example
//!
//! ```
//! use pokecards::{Deck, RenderOptions, TextRenderer};
//!
//! let view = Deck::starter().render();
//! assert_eq!(view.cards.len(), 4);
//!
//! let text = TextRenderer::new(RenderOptions::default()).render_deck(&view);
//! assert!(text.contains("Moves: Thunderbolt, Quick Attack"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod element;
pub mod error;
pub mod options;
pub mod render;
pub mod style;
pub mod text;

// Re-export main types
pub use card::{Card, ImageRef};
pub use deck::{Deck, DeckView};
pub use element::{Color, DisplayAttributes, ElementType, resolve_type};
pub use error::CardError;
pub use options::RenderOptions;
pub use render::{
    BadgeView, CardView, HeaderView, ImageFit, ImageView, UNKNOWN_TYPE, render_card,
    try_render_card,
};
pub use style::{CardStyle, Font, Shadow};
pub use text::TextRenderer;
