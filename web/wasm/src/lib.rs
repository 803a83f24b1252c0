use pokecards::{
    BadgeView, Card, CardStyle, CardView, DeckView, DisplayAttributes, Font, ImageFit,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Renders the starter deck.
#[wasm_bindgen]
pub fn starter_deck() -> Result<JsValue, JsValue> {
    let deck = JsDeck::from(pokecards::Deck::starter().render());
    to_js_value(&deck)
}

/// Resolves a type label to its badge colour and emoji.
#[wasm_bindgen]
pub fn resolve_type(label: Option<String>) -> Result<JsValue, JsValue> {
    let attrs = JsAttributes::from(pokecards::resolve_type(label.as_deref()));
    to_js_value(&attrs)
}

/// Validates and renders a card described by a plain JS object.
#[wasm_bindgen]
pub fn render_card(card: JsValue) -> Result<JsValue, JsValue> {
    let input: JsCardInput = serde_wasm_bindgen::from_value(card).map_err(js_err)?;
    let view = pokecards::try_render_card(&Card::from(input)).map_err(js_err)?;
    to_js_value(&JsCard::from(view))
}

/// Returns the card layout metrics.
#[wasm_bindgen]
pub fn card_style() -> Result<JsValue, JsValue> {
    to_js_value(&JsStyle::from(CardStyle::DEFAULT))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsCardInput {
    name: String,
    image: String,
    #[serde(rename = "type", default)]
    type_label: Option<String>,
    hp: u32,
    #[serde(default)]
    moves: Vec<String>,
    #[serde(default)]
    weaknesses: Vec<String>,
}

impl From<JsCardInput> for Card {
    fn from(input: JsCardInput) -> Self {
        let card = Card::new(input.name, input.image, input.hp)
            .with_moves(input.moves)
            .with_weaknesses(input.weaknesses);
        match input.type_label {
            Some(label) => card.with_type(label),
            None => card,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsDeck {
    cards: Vec<JsCard>,
    padding_vertical: u16,
}

impl From<DeckView> for JsDeck {
    fn from(deck: DeckView) -> Self {
        Self {
            cards: deck.cards.into_iter().map(JsCard::from).collect(),
            padding_vertical: deck.padding_vertical,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsCard {
    name: String,
    hp_label: String,
    image: String,
    accessibility_label: String,
    resize_mode: &'static str,
    badge: JsBadge,
    moves_line: String,
    weakness_line: String,
}

impl From<CardView> for JsCard {
    fn from(view: CardView) -> Self {
        Self {
            name: view.header.name,
            hp_label: view.header.hp_label,
            image: view.image.source.to_string(),
            accessibility_label: view.image.accessibility_label,
            resize_mode: fit_to_str(view.image.fit),
            badge: JsBadge::from(view.badge),
            moves_line: view.moves_line,
            weakness_line: view.weakness_line,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsBadge {
    emoji: &'static str,
    text: String,
    border_color: String,
}

impl From<BadgeView> for JsBadge {
    fn from(badge: BadgeView) -> Self {
        Self {
            emoji: badge.emoji,
            text: badge.text,
            border_color: badge.border_color.hex(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsAttributes {
    border_color: String,
    emoji: &'static str,
}

impl From<DisplayAttributes> for JsAttributes {
    fn from(attrs: DisplayAttributes) -> Self {
        Self {
            border_color: attrs.border_color.hex(),
            emoji: attrs.emoji,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsFont {
    font_size: u16,
    font_weight: &'static str,
}

impl From<Font> for JsFont {
    fn from(font: Font) -> Self {
        Self {
            font_size: font.size,
            font_weight: if font.bold { "bold" } else { "normal" },
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsStyle {
    background_color: String,
    border_radius: u16,
    border_width: u16,
    padding: u16,
    margin: u16,
    shadow_offset: (u16, u16),
    shadow_color: String,
    shadow_opacity: f32,
    shadow_radius: u16,
    elevation: u16,
    header_margin_bottom: u16,
    name: JsFont,
    hp: JsFont,
    image_height: u16,
    image_margin_bottom: u16,
    badge_row_margin_bottom: u16,
    badge_padding_vertical: u16,
    badge_padding_horizontal: u16,
    badge_radius: u16,
    badge_border_width: u16,
    emoji: JsFont,
    emoji_margin_right: u16,
    type_text: JsFont,
    line: JsFont,
    moves_margin_bottom: u16,
    weakness_margin_bottom: u16,
    list_padding_vertical: u16,
}

impl From<CardStyle> for JsStyle {
    fn from(style: CardStyle) -> Self {
        Self {
            background_color: style.background.hex(),
            border_radius: style.border_radius,
            border_width: style.border_width,
            padding: style.padding,
            margin: style.margin,
            shadow_offset: style.shadow.offset,
            shadow_color: style.shadow.color.hex(),
            shadow_opacity: style.shadow.opacity,
            shadow_radius: style.shadow.radius,
            elevation: style.shadow.elevation,
            header_margin_bottom: style.header_margin_bottom,
            name: JsFont::from(style.name_font),
            hp: JsFont::from(style.hp_font),
            image_height: style.image_height,
            image_margin_bottom: style.image_margin_bottom,
            badge_row_margin_bottom: style.badge_row_margin_bottom,
            badge_padding_vertical: style.badge_padding_vertical,
            badge_padding_horizontal: style.badge_padding_horizontal,
            badge_radius: style.badge_radius,
            badge_border_width: style.badge_border_width,
            emoji: JsFont::from(style.emoji_font),
            emoji_margin_right: style.emoji_margin_right,
            type_text: JsFont::from(style.type_font),
            line: JsFont::from(style.line_font),
            moves_margin_bottom: style.moves_margin_bottom,
            weakness_margin_bottom: style.weakness_margin_bottom,
            list_padding_vertical: style.list_padding_vertical,
        }
    }
}

fn fit_to_str(fit: ImageFit) -> &'static str {
    match fit {
        ImageFit::Contain => "contain",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
