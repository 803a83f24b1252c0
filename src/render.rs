//! Card rendering: turns a [`Card`] into a display block.

extern crate alloc;

use alloc::string::String;

use crate::card::{Card, ImageRef};
use crate::element::{Color, DisplayAttributes, ElementType, resolve_type};
use crate::error::CardError;

/// Badge text shown when a card has no type.
pub const UNKNOWN_TYPE: &str = "Unknown";

/// How the image is fitted into its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFit {
    /// Scale to fit entirely inside the frame, without cropping.
    #[default]
    Contain,
}

/// Header row: name on the left, HP on the right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    /// Creature name.
    pub name: String,
    /// HP label, e.g. `❤️HP: 100`.
    pub hp_label: String,
}

/// Image element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    /// Asset to display.
    pub source: ImageRef,
    /// Label for assistive technology.
    pub accessibility_label: String,
    /// Fit mode.
    pub fit: ImageFit,
}

/// Centered type badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeView {
    /// Resolved emoji.
    pub emoji: &'static str,
    /// Type text as given on the card, or [`UNKNOWN_TYPE`].
    pub text: String,
    /// Resolved border colour.
    pub border_color: Color,
}

/// A rendered card, with its parts in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Header row.
    pub header: HeaderView,
    /// Card image.
    pub image: ImageView,
    /// Type badge.
    pub badge: BadgeView,
    /// `Moves: ` followed by the joined move list.
    pub moves_line: String,
    /// `Weakness: ` followed by the joined weakness list.
    pub weakness_line: String,
}

/// Joins list items with `", "`.
///
/// Items are not trimmed or sanitized, so an item that already ends in a
/// comma produces a double comma.
///
/// ```
/// use pokecards::render::join_list;
///
/// assert_eq!(join_list(&["Fire,", "Flying"]), "Fire,, Flying");
/// assert_eq!(join_list::<&str>(&[]), "");
/// ```
#[must_use]
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    let mut joined = String::new();
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            joined.push_str(", ");
        }
        joined.push_str(item.as_ref());
    }
    joined
}

/// Renders a card into its display block.
///
/// Never fails. A type label that is present but not recognized renders with
/// the default badge and logs a warning.
///
/// # Example
///
/// ```
/// use pokecards::{Card, render_card};
///
/// let card = Card::new("Pikachu", "assets/images/pikachu.png", 100).with_type("electric");
/// let view = render_card(&card);
/// assert_eq!(view.header.hp_label, "❤️HP: 100");
/// assert_eq!(view.badge.emoji, "⚡️");
/// assert_eq!(view.moves_line, "Moves: ");
/// ```
#[must_use]
pub fn render_card(card: &Card) -> CardView {
    let label = card.type_label();
    let DisplayAttributes {
        border_color,
        emoji,
    } = resolve_type(label);

    if let Some(label) = label.filter(|label| ElementType::from_label(label).is_none()) {
        tracing::warn!(card = card.name(), type_label = label, "unrecognized card type");
    }

    CardView {
        header: HeaderView {
            name: String::from(card.name()),
            hp_label: alloc::format!("❤️HP: {}", card.hp()),
        },
        image: ImageView {
            source: card.image().clone(),
            accessibility_label: card.accessibility_label(),
            fit: ImageFit::Contain,
        },
        badge: BadgeView {
            emoji,
            text: String::from(label.unwrap_or(UNKNOWN_TYPE)),
            border_color,
        },
        moves_line: alloc::format!("Moves: {}", join_list(card.moves())),
        weakness_line: alloc::format!("Weakness: {}", join_list(card.weaknesses())),
    }
}

/// Validates a card, then renders it.
///
/// # Errors
///
/// Returns the [`CardError`] reported by [`Card::validate`].
pub fn try_render_card(card: &Card) -> Result<CardView, CardError> {
    card.validate()?;
    Ok(render_card(card))
}
