//! Prints the starter deck as terminal cards.
//!
//! Usage: `cargo run --example card_list -- [--color] [--width N] [--image-rows N]`

use core::str::FromStr;
use std::env;
use std::process::ExitCode;

use pokecards::{Deck, RenderOptions, TextRenderer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    init_logger();

    let options = match parse_options(env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            tracing::error!("{message}");
            eprintln!("usage: card_list [--color] [--width N] [--image-rows N]");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?options, "render options");

    let cards = Deck::starter()
        .cards()
        .iter()
        .filter(|card| match card.validate() {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(card = card.name(), %err, "skipping invalid card");
                false
            }
        })
        .cloned()
        .collect();
    let deck = Deck::from_cards(cards);

    let renderer = TextRenderer::new(options);
    println!("{}", renderer.render_deck(&deck.render()));
    ExitCode::SUCCESS
}

fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pokecards=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<RenderOptions, String> {
    let mut options = RenderOptions::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--color" => options = options.with_color(true),
            "--width" => options = options.with_width(parse_value(&arg, args.next())?),
            "--image-rows" => options = options.with_image_rows(parse_value(&arg, args.next())?),
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(options)
}

fn parse_value<T: FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{flag} needs a value"))?;
    value
        .parse()
        .map_err(|_| format!("{flag}: invalid value {value:?}"))
}
