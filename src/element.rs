//! Elemental types and the badge colour/emoji lookup.

use core::fmt;

/// A 24-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Creates a colour from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Gold, used for electric types.
    pub const GOLD: Self = Self::rgb(0xFF, 0xD7, 0x00);
    /// Blue, used for water types.
    pub const BLUE: Self = Self::rgb(0x64, 0x93, 0xEA);
    /// Orange-red, used for fire types.
    pub const ORANGE_RED: Self = Self::rgb(0xFF, 0x57, 0x33);
    /// Green, used for grass types.
    pub const GREEN: Self = Self::rgb(0x66, 0xCC, 0x66);
    /// Gray, used when the type is absent or unrecognized.
    pub const GRAY: Self = Self::rgb(0xA0, 0xA0, 0xA0);
    /// White.
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);

    /// Formats the colour as `#RRGGBB`.
    ///
    /// # Example
    ///
    /// ```
    /// use pokecards::Color;
    ///
    /// assert_eq!(Color::GOLD.hex(), "#FFD700");
    /// ```
    #[must_use]
    pub fn hex(self) -> alloc::string::String {
        alloc::format!("{self}")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Border colour and emoji shown on a card's type badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayAttributes {
    /// Badge border colour.
    pub border_color: Color,
    /// Single glyph shown before the type text.
    pub emoji: &'static str,
}

impl DisplayAttributes {
    /// Attributes for an absent or unrecognized type.
    pub const DEFAULT: Self = Self {
        border_color: Color::GRAY,
        emoji: "❓",
    };
}

impl Default for DisplayAttributes {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A recognized elemental type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// Electric.
    Electric,
    /// Water.
    Water,
    /// Fire.
    Fire,
    /// Grass.
    Grass,
}

impl ElementType {
    /// Every recognized type.
    pub const ALL: [Self; 4] = [Self::Electric, Self::Water, Self::Fire, Self::Grass];

    /// Parses a type label, ignoring ASCII case.
    ///
    /// # Example
    ///
    /// ```
    /// use pokecards::ElementType;
    ///
    /// assert_eq!(ElementType::from_label("FIRE"), Some(ElementType::Fire));
    /// assert_eq!(ElementType::from_label("psychic"), None);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|element| element.label().eq_ignore_ascii_case(label))
    }

    /// Returns the lowercase label of this type.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Electric => "electric",
            Self::Water => "water",
            Self::Fire => "fire",
            Self::Grass => "grass",
        }
    }

    /// Returns the badge attributes of this type.
    #[must_use]
    pub const fn attributes(self) -> DisplayAttributes {
        match self {
            Self::Electric => DisplayAttributes {
                border_color: Color::GOLD,
                emoji: "⚡️",
            },
            Self::Water => DisplayAttributes {
                border_color: Color::BLUE,
                emoji: "💧",
            },
            Self::Fire => DisplayAttributes {
                border_color: Color::ORANGE_RED,
                emoji: "🔥",
            },
            Self::Grass => DisplayAttributes {
                border_color: Color::GREEN,
                emoji: "🌿",
            },
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolves an optional type label to its badge attributes.
///
/// Absent, empty, and unrecognized labels all fall back to
/// [`DisplayAttributes::DEFAULT`].
///
/// # Example
///
/// ```
/// use pokecards::{resolve_type, Color, DisplayAttributes};
///
/// assert_eq!(resolve_type(Some("Water")).border_color, Color::BLUE);
/// assert_eq!(resolve_type(None), DisplayAttributes::DEFAULT);
/// ```
#[must_use]
pub fn resolve_type(label: Option<&str>) -> DisplayAttributes {
    label
        .and_then(ElementType::from_label)
        .map_or(DisplayAttributes::DEFAULT, ElementType::attributes)
}
