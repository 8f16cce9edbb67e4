//! GUI state + messages.
//! Pure data definitions used by update/ + view/.

use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use crate::config::Settings;
use crate::core::library::Library;
use crate::core::playback::{EngineHandle, PlaybackController, PlayerEvent, start_playback};
use crate::core::types::{Genre, SongRef};

/// What the user picked in the native dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ImportSource {
    File(PathBuf),
    Folder(PathBuf),
}

/// Import form: the picked file/folder plus artist + genre still being chosen.
///
/// Nothing touches the library until the form is confirmed.
#[derive(Debug, Clone)]
pub(crate) struct ImportDraft {
    pub source: ImportSource,
    pub artist: String,
    pub genre: Genre,
}

/// App state
pub(crate) struct Lytes {
    pub settings: Settings,
    pub status: String,

    // Library
    pub library: Library,

    // Playback
    pub player: PlaybackController<EngineHandle>,
    pub player_events: Receiver<PlayerEvent>,

    // Search
    /// What's typed in the search box.
    pub search_input: String,
    /// Last submitted query. None = show the whole library.
    pub search_query: Option<String>,

    // Import
    pub import: Option<ImportDraft>,
    /// True while a folder scan runs off-thread.
    pub scanning: bool,
}

impl Lytes {
    pub(crate) fn new(settings: Settings) -> Self {
        let (engine, events) = start_playback(settings.tick());
        let player = PlaybackController::new(engine, settings.initial_volume);

        Self {
            settings,
            status: "Import a file to get started.".to_string(),

            library: Library::new(),

            player,
            player_events: events,

            search_input: String::new(),
            search_query: None,

            import: None,
            scanning: false,
        }
    }
}

/// Message = “something happened”.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    TickPlayback,

    // Search
    SearchInputChanged(String),
    SearchSubmitted,

    // Library
    PlayEntry(SongRef),

    // Transport
    TogglePlayPause,
    Stop,
    Next,
    Prev,
    /// Slider value, 0..=100.
    SetVolume(f32),

    // Import
    ImportFilePressed,
    ImportFolderPressed,
    ImportArtistChanged(String),
    ImportGenreSelected(Genre),
    ImportConfirmed,
    ImportCancelled,
    FolderScanned {
        genre: Genre,
        artist: String,
        result: Result<Vec<PathBuf>, String>,
    },
}
