//! core/playback/mod.rs
//! Lytes playback core module.
//!
//! - `controller`: what should play and when (state machine, no audio code)
//! - `engine`: how it plays (rodio owner, runs on its own thread)
//!
//! The two meet at the `AudioEngine` trait.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use tracing::error;

use super::error::EngineError;

mod controller;
mod engine;

pub use controller::{Command, PlaybackController, PlaybackStatus};
use engine::PlaybackEngine;

/// Tags one `load` so its events can be told apart from an earlier load of
/// the same file.
pub type LoadId = u64;

/// What the controller needs from whatever actually produces sound.
pub trait AudioEngine {
    /// Load `path` as the current source (replaces whatever was loaded).
    /// Every event about this source carries `id`.
    fn load(&mut self, id: LoadId, path: &Path) -> Result<(), EngineError>;
    fn play(&mut self) -> Result<(), EngineError>;
    fn pause(&mut self) -> Result<(), EngineError>;
    fn stop(&mut self) -> Result<(), EngineError>;
    /// 0.0..=1.0
    fn set_volume(&mut self, volume: f32) -> Result<(), EngineError>;
}

/// Sender half of the engine thread. Cheap to clone.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    command_tx: Sender<PlayerCommand>,
}

impl EngineHandle {
    fn send(&self, cmd: PlayerCommand) -> Result<(), EngineError> {
        self.command_tx
            .send(cmd)
            .map_err(|_| EngineError::Disconnected)
    }
}

impl AudioEngine for EngineHandle {
    fn load(&mut self, id: LoadId, path: &Path) -> Result<(), EngineError> {
        self.send(PlayerCommand::Load {
            id,
            path: path.to_path_buf(),
        })
    }

    fn play(&mut self) -> Result<(), EngineError> {
        self.send(PlayerCommand::Play)
    }

    fn pause(&mut self) -> Result<(), EngineError> {
        self.send(PlayerCommand::Pause)
    }

    fn stop(&mut self) -> Result<(), EngineError> {
        self.send(PlayerCommand::Stop)
    }

    fn set_volume(&mut self, volume: f32) -> Result<(), EngineError> {
        self.send(PlayerCommand::SetVolume(volume))
    }
}

#[derive(Debug)]
pub enum PlayerCommand {
    Load { id: LoadId, path: PathBuf },
    Play,
    Pause,
    Stop,
    SetVolume(f32), // 0.0..=1.0
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    Started {
        load_id: LoadId,
        path: PathBuf,
        duration_ms: Option<u64>,
    },
    Position {
        load_id: LoadId,
        position_ms: u64,
    },
    TrackEnded {
        load_id: LoadId,
    },
    /// `load_id` is `None` when the failure isn't tied to a track
    /// (no output device).
    Failed {
        load_id: Option<LoadId>,
        error: EngineError,
    },
}

/// Spawns playback thread and returns:
/// - EngineHandle (wrap in a PlaybackController)
/// - Receiver<PlayerEvent> (drained by the GUI on a timer)
///
/// The thread exits when every `EngineHandle` is dropped.
pub fn start_playback(tick: Duration) -> (EngineHandle, Receiver<PlayerEvent>) {
    let (command_tx, command_rx) = mpsc::channel::<PlayerCommand>();
    let (event_tx, event_rx) = mpsc::channel::<PlayerEvent>();

    thread::spawn(move || {
        let mut engine = match PlaybackEngine::new(event_tx.clone(), tick) {
            Ok(e) => e,
            Err(err) => {
                error!(error = %err, "audio output unavailable");
                let _ = event_tx.send(PlayerEvent::Failed {
                    load_id: None,
                    error: err,
                });
                return;
            }
        };

        engine.run(command_rx);
    });

    (EngineHandle { command_tx }, event_rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_reports_disconnect_once_thread_is_gone() {
        let (command_tx, command_rx) = mpsc::channel();
        drop(command_rx);

        let mut handle = EngineHandle { command_tx };
        assert_eq!(handle.play(), Err(EngineError::Disconnected));
        assert_eq!(
            handle.load(1, Path::new("/a.mp3")),
            Err(EngineError::Disconnected)
        );
    }

    #[test]
    fn handle_forwards_commands_in_order() {
        let (command_tx, command_rx) = mpsc::channel();
        let mut handle = EngineHandle { command_tx };

        handle.load(7, Path::new("/a.mp3")).unwrap();
        handle.play().unwrap();
        handle.set_volume(0.5).unwrap();

        let got: Vec<_> = command_rx.try_iter().collect();
        assert!(matches!(
            &got[0],
            PlayerCommand::Load { id: 7, path } if path == Path::new("/a.mp3")
        ));
        assert!(matches!(got[1], PlayerCommand::Play));
        assert!(matches!(got[2], PlayerCommand::SetVolume(v) if v == 0.5));
    }
}
