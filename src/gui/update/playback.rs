//! gui/update/playback.rs
//! GUI -> playback controller bridge.
//!
//! - GUI never touches rodio directly.
//! - Every transport button becomes a `Command` for the controller.
//! - Engine events are drained on the TickPlayback timer.

use iced::Task;

use super::super::state::{Lytes, Message};
use crate::core::playback::{Command, PlayerEvent};
use crate::core::types::SongRef;

fn run(state: &mut Lytes, cmd: Command) -> Task<Message> {
    if let Err(e) = state.player.dispatch(&state.library, cmd) {
        state.status = format!("Playback error: {e}");
    }
    Task::none()
}

pub(crate) fn drain_events(state: &mut Lytes) -> Task<Message> {
    let drained: Vec<PlayerEvent> = state.player_events.try_iter().collect();

    for ev in drained {
        if let Some(err) = state.player.handle_event(ev) {
            state.status = format!("Playback error: {err}");
        }
    }

    Task::none()
}

pub(crate) fn play_entry(state: &mut Lytes, at: SongRef) -> Task<Message> {
    run(state, Command::Play(at))
}

pub(crate) fn toggle_play_pause(state: &mut Lytes) -> Task<Message> {
    run(state, Command::TogglePlayPause)
}

pub(crate) fn stop(state: &mut Lytes) -> Task<Message> {
    let task = run(state, Command::Stop);
    if let Some(song) = state.player.last_stopped().and_then(|at| state.library.song(at)) {
        state.status = format!("Stopped {}", song.title);
    }
    task
}

pub(crate) fn next(state: &mut Lytes) -> Task<Message> {
    run(state, Command::Next)
}

pub(crate) fn prev(state: &mut Lytes) -> Task<Message> {
    run(state, Command::Previous)
}

/// Slider works in percent; the controller wants a fraction.
pub(crate) fn set_volume(state: &mut Lytes, percent: f32) -> Task<Message> {
    run(state, Command::SetVolume(percent / 100.0))
}
