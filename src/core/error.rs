//! core/error.rs
//! Error types for the library store, the audio engine and the playback controller.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::types::SongRef;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("artist name is empty")]
    EmptyArtist,

    #[error("not a file: {}", .0.display())]
    NoFileName(PathBuf),

    #[error("couldn't read {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Engine-side failures.
///
/// Cloneable (strings only) so it can travel inside `PlayerEvent` and GUI messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("playback engine is not running")]
    Disconnected,

    #[error("no audio output: {0}")]
    OutputUnavailable(String),

    #[error("couldn't open {}: {message}", path.display())]
    Open { path: PathBuf, message: String },

    #[error("couldn't decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("song not found: {0}")]
    NotFound(SongRef),

    #[error(transparent)]
    Engine(#[from] EngineError),
}
