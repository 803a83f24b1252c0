//! Plain-text surface for rendered cards.
//!
//! Draws each [`CardView`] as an open box: a top rule, one `│ `-prefixed line
//! per element, and a bottom rule. Lines longer than the box are not wrapped.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::deck::DeckView;
use crate::element::Color;
use crate::options::RenderOptions;
use crate::render::CardView;

const RULE: char = '─';

/// Renders card views as terminal text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    options: RenderOptions,
}

impl TextRenderer {
    /// Creates a renderer with the given options.
    #[must_use]
    pub const fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Returns the renderer's options.
    #[must_use]
    pub const fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Renders one card.
    #[must_use]
    pub fn render_card(&self, view: &CardView) -> String {
        let width = self.options.effective_width();
        // Two columns for the "│ " prefix.
        let inner = width - 2;
        let color = view.badge.border_color;

        let mut lines: Vec<String> = Vec::new();
        lines.push(self.rule('╭', width, color));

        let name_len = text_width(&view.header.name);
        let hp_len = text_width(&view.header.hp_label);
        let gap = inner.saturating_sub(name_len + hp_len).max(1);
        lines.push(self.row(
            &alloc::format!("{}{:gap$}{}", view.header.name, "", view.header.hp_label),
            color,
        ));

        for row in 0..self.options.image_rows {
            let text = if row == 0 {
                alloc::format!("[image: {}]", view.image.accessibility_label)
            } else {
                String::from("[ ]")
            };
            lines.push(self.row(&text, color));
        }

        let badge = alloc::format!("{} {}", view.badge.emoji, view.badge.text);
        let indent = inner.saturating_sub(text_width(&badge)) / 2;
        let badge = if self.options.color {
            colorize(&badge, color)
        } else {
            badge
        };
        lines.push(self.row(&alloc::format!("{:indent$}{badge}", ""), color));

        lines.push(self.row(&view.moves_line, color));
        lines.push(self.row(&view.weakness_line, color));
        lines.push(self.rule('╰', width, color));

        lines.join("\n")
    }

    /// Renders every card in a deck, separated by blank lines.
    #[must_use]
    pub fn render_deck(&self, deck: &DeckView) -> String {
        deck.cards
            .iter()
            .map(|view| self.render_card(view))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn rule(&self, corner: char, width: usize, color: Color) -> String {
        let mut rule = String::with_capacity(width * 3);
        rule.push(corner);
        rule.extend(core::iter::repeat_n(RULE, width - 1));
        self.border(&rule, color)
    }

    fn row(&self, text: &str, color: Color) -> String {
        let mut row = self.border("│", color);
        row.push(' ');
        row.push_str(text);
        row
    }

    fn border(&self, text: &str, color: Color) -> String {
        if self.options.color {
            colorize(text, color)
        } else {
            String::from(text)
        }
    }
}

/// Approximate column count: one column per `char`, ignoring variation
/// selectors.
fn text_width(text: &str) -> usize {
    text.chars().filter(|c| *c != '\u{fe0f}').count()
}

fn colorize(text: &str, color: Color) -> String {
    alloc::format!("\u{1b}[38;2;{};{};{}m{text}\u{1b}[0m", color.r, color.g, color.b)
}
