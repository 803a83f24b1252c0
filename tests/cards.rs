//! Card rendering integration tests.

extern crate alloc;

use alloc::sync::Arc;
use std::io;
use std::sync::{Mutex, PoisonError};

use pokecards::{
    Card, CardError, CardStyle, Color, Deck, DisplayAttributes, ElementType, ImageFit,
    RenderOptions, TextRenderer, UNKNOWN_TYPE, render_card, resolve_type, try_render_card,
};
use proptest::prelude::*;
use tracing_subscriber::fmt::MakeWriter;

fn pikachu() -> Card {
    Card::new("Pikachu", "assets/images/pikachu.png", 100)
        .with_type("electric")
        .with_moves(["Thunderbolt", "Quick Attack"])
        .with_weaknesses(["Ground"])
}

#[test]
fn resolver_maps_known_types() {
    let cases = [
        ("electric", Color::GOLD, "⚡️"),
        ("water", Color::BLUE, "💧"),
        ("fire", Color::ORANGE_RED, "🔥"),
        ("grass", Color::GREEN, "🌿"),
    ];
    for (label, color, emoji) in cases {
        let attrs = resolve_type(Some(label));
        assert_eq!(attrs.border_color, color, "{label}");
        assert_eq!(attrs.emoji, emoji, "{label}");
    }
}

#[test]
fn resolver_ignores_case() {
    let fire = ElementType::Fire.attributes();
    assert_eq!(resolve_type(Some("FIRE")), fire);
    assert_eq!(resolve_type(Some("Fire")), fire);
    assert_eq!(resolve_type(Some("fire")), fire);
}

#[test]
fn resolver_falls_back_to_default() {
    assert_eq!(resolve_type(None), DisplayAttributes::DEFAULT);
    assert_eq!(resolve_type(Some("")), DisplayAttributes::DEFAULT);
    assert_eq!(resolve_type(Some("psychic")), DisplayAttributes::DEFAULT);
    assert_eq!(resolve_type(Some(" fire")), DisplayAttributes::DEFAULT);
    assert_eq!(DisplayAttributes::DEFAULT.border_color.hex(), "#A0A0A0");
    assert_eq!(DisplayAttributes::DEFAULT.emoji, "❓");
}

#[test]
fn colors_format_as_hex() {
    assert_eq!(Color::GOLD.hex(), "#FFD700");
    assert_eq!(Color::BLUE.hex(), "#6493EA");
    assert_eq!(Color::ORANGE_RED.hex(), "#FF5733");
    assert_eq!(Color::GREEN.hex(), "#66CC66");
}

#[test]
fn pikachu_renders_every_part() {
    let view = render_card(&pikachu());

    assert_eq!(view.header.name, "Pikachu");
    assert_eq!(view.header.hp_label, "❤️HP: 100");
    assert_eq!(view.image.source.as_str(), "assets/images/pikachu.png");
    assert_eq!(view.image.accessibility_label, "Pikachu Pokemon");
    assert_eq!(view.image.fit, ImageFit::Contain);
    assert_eq!(view.badge.emoji, "⚡️");
    assert_eq!(view.badge.text, "electric");
    assert_eq!(view.badge.border_color, Color::GOLD);
    assert_eq!(view.moves_line, "Moves: Thunderbolt, Quick Attack");
    assert_eq!(view.weakness_line, "Weakness: Ground");
}

#[test]
fn badge_keeps_label_as_written() {
    let card = Card::new("Charmander", "assets/images/charmander.png", 39).with_type("FIRE");
    let view = render_card(&card);
    assert_eq!(view.badge.text, "FIRE");
    assert_eq!(view.badge.emoji, "🔥");
}

#[test]
fn join_preserves_stray_commas_and_spaces() {
    let card = Card::new("Bulbasaur", "assets/images/bulbasaur.png", 100)
        .with_type("grass")
        .with_moves(["Vine Whip", " Power Whip"])
        .with_weaknesses(["Fire,", "Flying", "Ice"]);
    let view = render_card(&card);
    assert_eq!(view.weakness_line, "Weakness: Fire,, Flying, Ice");
    assert_eq!(view.moves_line, "Moves: Vine Whip,  Power Whip");
}

#[test]
fn empty_lists_render_bare_labels() {
    let view = render_card(&Card::new("Ditto", "assets/images/ditto.png", 48));
    assert_eq!(view.moves_line, "Moves: ");
    assert_eq!(view.weakness_line, "Weakness: ");
}

#[test]
fn missing_type_renders_unknown_badge() {
    let view = render_card(&Card::new("Ditto", "assets/images/ditto.png", 48));
    assert_eq!(view.badge.text, UNKNOWN_TYPE);
    assert_eq!(view.badge.text, "Unknown");
    assert_eq!(view.badge.emoji, "❓");
    assert_eq!(view.badge.border_color, Color::GRAY);
}

#[test]
fn unrecognized_type_keeps_text_with_default_badge() {
    let card = Card::new("Abra", "assets/images/abra.png", 25).with_type("Psychic");
    let view = render_card(&card);
    assert_eq!(view.badge.text, "Psychic");
    assert_eq!(view.badge.emoji, "❓");
    assert_eq!(view.badge.border_color, Color::GRAY);
}

/// Log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        let buf = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn warnings_while_rendering(card: &Card) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let _view = render_card(card);
    });
    logs.contents()
}

#[test]
fn unrecognized_type_logs_a_warning() {
    let abra = Card::new("Abra", "assets/images/abra.png", 25).with_type("Psychic");
    let logs = warnings_while_rendering(&abra);
    assert!(logs.contains("unrecognized card type"), "{logs}");
    assert!(logs.contains("Psychic"), "{logs}");

    let charmander =
        Card::new("Charmander", "assets/images/charmander.png", 39).with_type("FIRE");
    assert_eq!(warnings_while_rendering(&charmander), "");

    let ditto = Card::new("Ditto", "assets/images/ditto.png", 48);
    assert_eq!(warnings_while_rendering(&ditto), "");
}

#[test]
fn zero_hp_is_rendered() {
    let view = render_card(&Card::new("Magikarp", "assets/images/magikarp.png", 0));
    assert_eq!(view.header.hp_label, "❤️HP: 0");
}

#[test]
fn card_exposes_recognized_element() {
    assert_eq!(pikachu().element(), Some(ElementType::Electric));
    assert_eq!(
        Card::new("Abra", "a.png", 25).with_type("psychic").element(),
        None
    );
    assert_eq!(Card::new("Abra", "a.png", 25).element(), None);
}

#[test]
fn validation_rejects_blank_fields() {
    assert_eq!(pikachu().validate(), Ok(()));
    assert_eq!(
        Card::new("  ", "assets/images/x.png", 10).validate(),
        Err(CardError::EmptyName)
    );
    assert_eq!(
        Card::new("Eevee", "", 10).validate(),
        Err(CardError::EmptyImage)
    );
    assert_eq!(
        try_render_card(&Card::new("", "", 10)),
        Err(CardError::EmptyName)
    );
    assert_eq!(try_render_card(&pikachu()), Ok(render_card(&pikachu())));
    assert_eq!(CardError::EmptyImage.to_string(), "card image reference is empty");
}

#[test]
fn starter_deck_keeps_fixed_order() {
    let deck = Deck::starter();
    assert_eq!(deck.len(), 4);
    assert!(!deck.is_empty());

    let view = deck.render();
    let names: Vec<_> = view.cards.iter().map(|card| card.header.name.as_str()).collect();
    assert_eq!(names, ["Pikachu", "Charmander", "Bulbasaur", "Squirtle"]);
    assert_eq!(view.padding_vertical, 16);

    let badges: Vec<_> = view.cards.iter().map(|card| card.badge.emoji).collect();
    assert_eq!(badges, ["⚡️", "🔥", "🌿", "💧"]);
}

#[test]
fn starter_deck_literals_are_verbatim() {
    let view = Deck::starter().render();
    assert_eq!(view.cards[0].moves_line, "Moves: Thunderbolt, Quick Attack");
    assert_eq!(view.cards[1].weakness_line, "Weakness: Water, Rock");
    assert_eq!(view.cards[2].weakness_line, "Weakness: Fire,, Flying, Ice");
    assert_eq!(view.cards[3].weakness_line, "Weakness: Electric, Grass ");
    assert!(view.cards.iter().all(|card| card.header.hp_label == "❤️HP: 100"));
}

#[test]
fn custom_deck_renders_in_given_order() {
    let deck = Deck::from_cards(vec![
        Card::new("Squirtle", "s.png", 44).with_type("water"),
        Card::new("Pikachu", "p.png", 35),
    ]);
    let view = deck.render();
    assert_eq!(view.cards[0].header.name, "Squirtle");
    assert_eq!(view.cards[1].badge.text, "Unknown");
    assert!(Deck::from_cards(Vec::new()).render().cards.is_empty());
}

#[test]
fn text_renderer_lays_out_lines_in_order() {
    let view = render_card(&pikachu());
    let text = TextRenderer::new(RenderOptions::default()).render_card(&view);
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines.len(), 7);
    assert!(lines[0].starts_with('╭'));
    assert!(lines[1].starts_with("│ Pikachu"));
    assert!(lines[1].ends_with("❤️HP: 100"));
    assert_eq!(lines[2], "│ [image: Pikachu Pokemon]");
    assert_eq!(lines[3].trim_start_matches('│').trim(), "⚡️ electric");
    assert_eq!(lines[4], "│ Moves: Thunderbolt, Quick Attack");
    assert_eq!(lines[5], "│ Weakness: Ground");
    assert!(lines[6].starts_with('╰'));
    assert!(!text.contains('\u{1b}'));
}

#[test]
fn text_renderer_respects_options() {
    let view = render_card(&pikachu());

    let wide = TextRenderer::new(RenderOptions::default().with_width(30).with_image_rows(3))
        .render_card(&view);
    let lines: Vec<_> = wide.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0].chars().count(), 30);
    assert_eq!(lines[3], "│ [ ]");

    let narrow = TextRenderer::new(RenderOptions::default().with_width(3)).render_card(&view);
    assert_eq!(narrow.lines().next().map(|line| line.chars().count()), Some(20));

    let colored =
        TextRenderer::new(RenderOptions::default().with_color(true)).render_card(&view);
    assert!(colored.contains("\u{1b}[38;2;255;215;0m"));
}

#[test]
fn text_renderer_separates_deck_cards() {
    let renderer = TextRenderer::default();
    let text = renderer.render_deck(&Deck::starter().render());
    assert_eq!(text.split("\n\n").count(), 4);
    assert!(text.contains("│ Weakness: Fire,, Flying, Ice"));
}

#[test]
fn style_matches_card_screen() {
    let style = CardStyle::default();
    assert_eq!(style.border_width, 2);
    assert_eq!(style.badge_border_width, 4);
    assert_eq!(style.image_height, 200);
    assert_eq!(style.list_padding_vertical, 16);
    assert!(style.name_font.bold);
    assert!(!style.hp_font.bold);
}

proptest! {
    #[test]
    fn unknown_labels_resolve_to_default(label in "[a-zA-Z ]{0,12}") {
        prop_assume!(ElementType::from_label(&label).is_none());
        prop_assert_eq!(resolve_type(Some(label.as_str())), DisplayAttributes::DEFAULT);
    }

    #[test]
    fn known_labels_ignore_case(index in 0usize..4, mask in any::<u16>()) {
        let element = ElementType::ALL[index];
        let label: String = element
            .label()
            .chars()
            .enumerate()
            .map(|(i, c)| if mask & (1 << i) != 0 { c.to_ascii_uppercase() } else { c })
            .collect();
        prop_assert_eq!(resolve_type(Some(label.as_str())), element.attributes());
    }
}
