//! core/playback/controller.rs
//! Playback state machine: Idle / Playing / Paused.
//!
//! Decides *what* plays and *when*. The `AudioEngine` decides *how*.
//! Navigation never wraps: next/previous at the ends of an artist bucket do nothing.

use tracing::{debug, info, warn};

use super::{AudioEngine, LoadId, PlayerEvent};
use crate::core::error::PlaybackError;
use crate::core::library::Library;
use crate::core::types::SongRef;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    #[default]
    Idle,
    Playing(SongRef),
    Paused(SongRef),
}

/// Everything the UI can ask the controller to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Play(SongRef),
    TogglePlayPause,
    Stop,
    Next,
    Previous,
    SetVolume(f32),
}

pub struct PlaybackController<E> {
    engine: E,
    status: PlaybackStatus,
    /// What was current when `stop` ran. Informational only; never resumed.
    last_stopped: Option<SongRef>,
    volume: f32,
    position_ms: u64,
    duration_ms: Option<u64>,
    /// Id of the load behind `status`. Events with any other id are stale.
    current_load: Option<LoadId>,
    last_load: LoadId,
}

impl<E: AudioEngine> PlaybackController<E> {
    pub fn new(mut engine: E, volume: f32) -> Self {
        let volume = volume.clamp(0.0, 1.0);
        if let Err(e) = engine.set_volume(volume) {
            warn!(error = %e, "couldn't set initial volume");
        }

        Self {
            engine,
            status: PlaybackStatus::Idle,
            last_stopped: None,
            volume,
            position_ms: 0,
            duration_ms: None,
            current_load: None,
            last_load: 0,
        }
    }

    pub fn dispatch(&mut self, library: &Library, cmd: Command) -> Result<(), PlaybackError> {
        debug!(?cmd, "dispatch");

        match cmd {
            Command::Play(at) => self.play(library, at),
            Command::TogglePlayPause => self.toggle_play_pause(library),
            Command::Stop => self.stop(),
            Command::Next => self.next(library),
            Command::Previous => self.previous(library),
            Command::SetVolume(v) => self.set_volume(v),
        }
    }

    /// Load and start `at`. Unknown refs are rejected and change nothing.
    pub fn play(&mut self, library: &Library, at: SongRef) -> Result<(), PlaybackError> {
        let Some(song) = library.song(&at) else {
            return Err(PlaybackError::NotFound(at));
        };

        let load_id = self.last_load + 1;
        self.last_load = load_id;
        self.engine.load(load_id, &song.path)?;
        self.engine.play()?;

        info!(song = %song.title, at = %at, load_id, "playing");
        self.status = PlaybackStatus::Playing(at);
        self.current_load = Some(load_id);
        self.position_ms = 0;
        self.duration_ms = None;
        Ok(())
    }

    /// Idle: play the first song in the library (if any).
    /// Playing: pause. Paused: resume.
    pub fn toggle_play_pause(&mut self, library: &Library) -> Result<(), PlaybackError> {
        match std::mem::take(&mut self.status) {
            PlaybackStatus::Idle => match library.first() {
                Some(first) => self.play(library, first),
                None => Ok(()),
            },
            PlaybackStatus::Playing(at) => {
                // Put the state back first so an engine error leaves it untouched.
                self.status = PlaybackStatus::Playing(at.clone());
                self.engine.pause()?;
                self.status = PlaybackStatus::Paused(at);
                Ok(())
            }
            PlaybackStatus::Paused(at) => {
                self.status = PlaybackStatus::Paused(at.clone());
                self.engine.play()?;
                self.status = PlaybackStatus::Playing(at);
                Ok(())
            }
        }
    }

    /// Any state -> Idle.
    pub fn stop(&mut self) -> Result<(), PlaybackError> {
        self.go_idle();
        self.engine.stop()?;
        Ok(())
    }

    pub fn next(&mut self, library: &Library) -> Result<(), PlaybackError> {
        let Some(cur) = self.current() else {
            return Ok(());
        };

        let len = library
            .songs(cur.genre, &cur.artist)
            .map_or(0, <[_]>::len);
        if cur.index + 1 >= len {
            return Ok(());
        }

        let target = cur.with_index(cur.index + 1);
        self.play(library, target)
    }

    pub fn previous(&mut self, library: &Library) -> Result<(), PlaybackError> {
        let Some(cur) = self.current() else {
            return Ok(());
        };
        if cur.index == 0 {
            return Ok(());
        }

        let target = cur.with_index(cur.index - 1);
        self.play(library, target)
    }

    pub fn set_volume(&mut self, volume: f32) -> Result<(), PlaybackError> {
        self.volume = volume.clamp(0.0, 1.0);
        self.engine.set_volume(self.volume)?;
        Ok(())
    }

    /// Fold one engine event into controller state.
    ///
    /// Events from any load but the current one are ignored, even when they
    /// name the same file. Returns the error to show, if the event was a
    /// failure of the current song or of the output itself.
    pub fn handle_event(&mut self, event: PlayerEvent) -> Option<PlaybackError> {
        match event {
            PlayerEvent::Started {
                load_id,
                path,
                duration_ms,
            } => {
                if self.is_current_load(load_id) {
                    debug!(path = %path.display(), ?duration_ms, "track started");
                    self.duration_ms = duration_ms;
                    self.position_ms = 0;
                }
                None
            }
            PlayerEvent::Position {
                load_id,
                position_ms,
            } => {
                if self.is_current_load(load_id) {
                    self.position_ms = position_ms;
                }
                None
            }
            PlayerEvent::TrackEnded { load_id } => {
                if self.is_current_load(load_id) {
                    debug!(load_id, "track ended");
                    self.go_idle();
                }
                None
            }
            PlayerEvent::Failed { load_id, error } => {
                if load_id.is_some_and(|id| !self.is_current_load(id)) {
                    debug!(?load_id, %error, "ignoring failure for stale load");
                    return None;
                }
                warn!(%error, "playback failed");
                self.go_idle();
                Some(PlaybackError::Engine(error))
            }
        }
    }

    /// Human-readable description of the current state.
    pub fn now_playing(&self, library: &Library) -> String {
        let (verb, at) = match &self.status {
            PlaybackStatus::Idle => return "No song selected".to_string(),
            PlaybackStatus::Playing(at) => ("Playing", at),
            PlaybackStatus::Paused(at) => ("Paused", at),
        };

        match library.song(at) {
            Some(song) => format!("{verb}: {} by {} ({})", song.title, at.artist, at.genre),
            None => "No song selected".to_string(),
        }
    }

    pub fn status(&self) -> &PlaybackStatus {
        &self.status
    }

    pub fn current(&self) -> Option<&SongRef> {
        match &self.status {
            PlaybackStatus::Idle => None,
            PlaybackStatus::Playing(at) | PlaybackStatus::Paused(at) => Some(at),
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.status, PlaybackStatus::Playing(_))
    }

    pub fn last_stopped(&self) -> Option<&SongRef> {
        self.last_stopped.as_ref()
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn position_ms(&self) -> u64 {
        self.position_ms
    }

    pub fn duration_ms(&self) -> Option<u64> {
        self.duration_ms
    }

    #[cfg(test)]
    pub(crate) fn engine(&self) -> &E {
        &self.engine
    }

    fn go_idle(&mut self) {
        if let PlaybackStatus::Playing(at) | PlaybackStatus::Paused(at) =
            std::mem::take(&mut self.status)
        {
            self.last_stopped = Some(at);
        }
        self.position_ms = 0;
        self.duration_ms = None;
        self.current_load = None;
    }

    fn is_current_load(&self, load_id: LoadId) -> bool {
        self.current_load == Some(load_id)
    }
}
