//! Lytes Music Library
//!
//! # What this program is
//! A small desktop app (built with `iced`) for importing audio files,
//! filing them under an artist and a genre, browsing/searching that library,
//! and playing songs through `rodio`.
//!
//! # How it's put together
//! - `core`: library store, playback state machine, audio engine thread. No iced.
//! - `gui`: iced state / update / view / subscription.
//! - `config`: settings file.
//!
//! Message happens -> update changes state -> view redraws.
//!
//! # Concurrency model
//! - Library and playback state are owned by `Lytes` and only touched in `update`.
//! - Audio runs on its own thread; it talks back through a channel that the GUI
//!   drains on a timer.
//! - Folder scans run on a throwaway thread and report back as a Message.
//!
//! The library lives in memory only; it's gone when the app exits.

mod config;
mod core;
mod gui;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::gui::{Lytes, subscription, update, view};

fn main() -> iced::Result {
    let settings = Settings::load();
    init_tracing(&settings);
    info!(?settings, "starting");

    iced::application(move || Lytes::new(settings.clone()), update, view)
        .title("Lytes Music Library")
        .subscription(subscription)
        .window_size((800.0, 500.0))
        .run()
}

/// RUST_LOG wins; otherwise the settings file's filter.
fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
