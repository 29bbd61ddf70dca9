//! `tracing` output for the browser console.
//!
//! Formatting is the usual `tracing-subscriber` fmt layer; `tracing-web`
//! routes each event to the `console` method matching its level.

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

/// Installs the global subscriber. Safe to call more than once.
pub fn init_logging(max_level: Level) {
    // wasm32 has no system clock, so timestamps are off.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    let _ = tracing_subscriber::registry()
        .with(LevelFilter::from_level(max_level))
        .with(fmt_layer)
        .try_init();
}
