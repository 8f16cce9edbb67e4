//! Now-playing label, transport buttons, volume.
//!
//! Emits only Messages (no rodio, no decoding).

use iced::widget::{button, row, slider, text};
use iced::{Alignment, Length};

use super::super::state::{Lytes, Message};
use super::constants::{LABEL_W, VOLUME_W};

pub(crate) fn fmt_duration(ms: u64) -> String {
    let s = ms / 1000;
    let m = s / 60;
    let s = s % 60;
    format!("{m}:{s:02}")
}

pub(crate) fn now_playing(state: &Lytes) -> iced::widget::Row<'_, Message> {
    let label = state.player.now_playing(&state.library);

    let time_text = match (state.player.current(), state.player.duration_ms()) {
        (None, _) => String::new(),
        (Some(_), Some(dur)) => format!(
            "{} / {}",
            fmt_duration(state.player.position_ms()),
            fmt_duration(dur)
        ),
        // show position even if duration unknown
        (Some(_), None) => format!("{} / -:--", fmt_duration(state.player.position_ms())),
    };

    row![text(label).width(Length::Fill), text(time_text).size(12)]
        .spacing(10)
        .align_y(Alignment::Center)
}

pub(crate) fn transport(state: &Lytes) -> iced::widget::Row<'_, Message> {
    let play_label = if state.player.is_playing() { "⏸ Pause" } else { "▶ Play" };

    let import_file = if state.scanning {
        button("Import File")
    } else {
        button("Import File").on_press(Message::ImportFilePressed)
    };
    let import_folder = if state.scanning {
        button("Scanning...")
    } else {
        button("Import Folder").on_press(Message::ImportFolderPressed)
    };

    row![
        button("⏮").on_press(Message::Prev),
        button(play_label).on_press(Message::TogglePlayPause),
        button("⏹").on_press(Message::Stop),
        button("⏭").on_press(Message::Next),
        import_file,
        import_folder,
    ]
    .spacing(8)
    .align_y(Alignment::Center)
}

pub(crate) fn volume_row(state: &Lytes) -> iced::widget::Row<'_, Message> {
    // slider works in percent
    let percent = (state.player.volume() * 100.0).round().clamp(0.0, 100.0);
    let vol_slider = slider(0.0..=100.0, percent, Message::SetVolume)
        .step(1.0)
        .width(Length::Fixed(VOLUME_W));

    row![
        text("Volume:").width(Length::Fixed(LABEL_W)),
        vol_slider,
        text(format!("{percent:.0}%")).size(12),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
}
