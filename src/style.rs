//! Fixed layout metrics of the card screen.
//!
//! Hosts that draw [`CardView`](crate::CardView)s natively read these values
//! instead of hardcoding their own. All lengths are density-independent
//! pixels.

use crate::element::Color;

/// Drop shadow drawn under each card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    /// Horizontal and vertical offset.
    pub offset: (u16, u16),
    /// Shadow colour.
    pub color: Color,
    /// Shadow opacity in `0.0..=1.0`.
    pub opacity: f32,
    /// Blur radius.
    pub radius: u16,
    /// Elevation used on platforms without shadow offsets.
    pub elevation: u16,
}

/// Text size and weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    /// Font size.
    pub size: u16,
    /// Whether the text is bold.
    pub bold: bool,
}

impl Font {
    const fn regular(size: u16) -> Self {
        Self { size, bold: false }
    }

    const fn bold(size: u16) -> Self {
        Self { size, bold: true }
    }
}

/// Layout metrics for a card and the list that holds it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    /// Card background.
    pub background: Color,
    /// Card corner radius.
    pub border_radius: u16,
    /// Card border width.
    pub border_width: u16,
    /// Inner padding of the card.
    pub padding: u16,
    /// Outer margin of the card.
    pub margin: u16,
    /// Card shadow.
    pub shadow: Shadow,
    /// Space below the header row.
    pub header_margin_bottom: u16,
    /// Creature name.
    pub name_font: Font,
    /// HP label.
    pub hp_font: Font,
    /// Image height; the image spans the full card width.
    pub image_height: u16,
    /// Space below the image.
    pub image_margin_bottom: u16,
    /// Space below the badge row.
    pub badge_row_margin_bottom: u16,
    /// Vertical badge padding.
    pub badge_padding_vertical: u16,
    /// Horizontal badge padding.
    pub badge_padding_horizontal: u16,
    /// Badge corner radius.
    pub badge_radius: u16,
    /// Badge border width.
    pub badge_border_width: u16,
    /// Badge emoji.
    pub emoji_font: Font,
    /// Gap between the emoji and the type text.
    pub emoji_margin_right: u16,
    /// Badge type text.
    pub type_font: Font,
    /// Moves and weakness lines.
    pub line_font: Font,
    /// Space below the moves line.
    pub moves_margin_bottom: u16,
    /// Space below the weakness line.
    pub weakness_margin_bottom: u16,
    /// Vertical padding of the scroll container.
    pub list_padding_vertical: u16,
}

impl CardStyle {
    /// The card screen's stylesheet.
    pub const DEFAULT: Self = Self {
        background: Color::WHITE,
        border_radius: 16,
        border_width: 2,
        padding: 16,
        margin: 16,
        shadow: Shadow {
            offset: (2, 2),
            color: Color::rgb(0x33, 0x33, 0x33),
            opacity: 0.3,
            radius: 4,
            elevation: 5,
        },
        header_margin_bottom: 32,
        name_font: Font::bold(30),
        hp_font: Font::regular(22),
        image_height: 200,
        image_margin_bottom: 16,
        badge_row_margin_bottom: 40,
        badge_padding_vertical: 6,
        badge_padding_horizontal: 12,
        badge_radius: 20,
        badge_border_width: 4,
        emoji_font: Font::regular(30),
        emoji_margin_right: 12,
        type_font: Font::bold(22),
        line_font: Font::bold(22),
        moves_margin_bottom: 12,
        weakness_margin_bottom: 8,
        list_padding_vertical: 16,
    };
}

impl Default for CardStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}
