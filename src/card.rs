//! Card records.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::element::ElementType;
use crate::error::CardError;

/// Identifier of a bundled image asset.
///
/// The identifier is opaque to this crate; turning it into pixels is left to
/// the host's asset pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    /// Creates an image reference from an asset identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the asset identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageRef {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ImageRef {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One creature's display record.
///
/// Cards are built once and never mutated. Optional fields are filled in with
/// the `with_*` builders:
///
/// ```
/// use pokecards::Card;
///
/// let card = Card::new("Pikachu", "assets/images/pikachu.png", 100)
///     .with_type("electric")
///     .with_moves(["Thunderbolt", "Quick Attack"])
///     .with_weaknesses(["Ground"]);
/// assert_eq!(card.moves().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    name: String,
    image: ImageRef,
    type_label: Option<String>,
    hp: u32,
    moves: Vec<String>,
    weaknesses: Vec<String>,
}

impl Card {
    /// Creates a card with no type, moves, or weaknesses.
    pub fn new(name: impl Into<String>, image: impl Into<ImageRef>, hp: u32) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            type_label: None,
            hp,
            moves: Vec::new(),
            weaknesses: Vec::new(),
        }
    }

    /// Sets the type label. The label is kept verbatim for display.
    #[must_use]
    pub fn with_type(mut self, label: impl Into<String>) -> Self {
        self.type_label = Some(label.into());
        self
    }

    /// Sets the move list.
    #[must_use]
    pub fn with_moves<I, S>(mut self, moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.moves = moves.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the weakness list.
    #[must_use]
    pub fn with_weaknesses<I, S>(mut self, weaknesses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.weaknesses = weaknesses.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the creature's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the image reference.
    #[must_use]
    pub const fn image(&self) -> &ImageRef {
        &self.image
    }

    /// Returns the raw type label, if any.
    #[must_use]
    pub fn type_label(&self) -> Option<&str> {
        self.type_label.as_deref()
    }

    /// Returns the recognized elemental type, if the label names one.
    #[must_use]
    pub fn element(&self) -> Option<ElementType> {
        self.type_label().and_then(ElementType::from_label)
    }

    /// Returns the health points.
    #[must_use]
    pub const fn hp(&self) -> u32 {
        self.hp
    }

    /// Returns the moves in display order.
    #[must_use]
    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    /// Returns the weaknesses in display order.
    #[must_use]
    pub fn weaknesses(&self) -> &[String] {
        &self.weaknesses
    }

    /// Returns the text exposed to assistive technology for the image.
    #[must_use]
    pub fn accessibility_label(&self) -> String {
        alloc::format!("{} Pokemon", self.name)
    }

    /// Checks that the card has a name and an image.
    ///
    /// Rendering never calls this; it is an opt-in check for cards that do
    /// not come from trusted literals.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::EmptyName`] if the name is blank, or
    /// [`CardError::EmptyImage`] if the image identifier is empty.
    pub fn validate(&self) -> Result<(), CardError> {
        if self.name.trim().is_empty() {
            return Err(CardError::EmptyName);
        }
        if self.image.as_str().is_empty() {
            return Err(CardError::EmptyImage);
        }
        Ok(())
    }
}
