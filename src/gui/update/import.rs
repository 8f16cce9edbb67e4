//! gui/update/import.rs
//! Import flow: native picker -> import form -> library.
//!
//! - Cancelling the picker or the form changes nothing.
//! - Single files go straight into the library on confirm.
//! - Folders are scanned off-thread, then inserted on FolderScanned.

use std::path::PathBuf;

use iced::Task;
use rfd::FileDialog;
use tracing::{info, warn};

use super::super::state::{ImportDraft, ImportSource, Lytes, Message};
use super::util::spawn_blocking;
use crate::core::library::{AUDIO_EXTENSIONS, scan_audio_files};
use crate::core::tags::read_import_hints;
use crate::core::types::Genre;

pub(crate) fn pick_file(state: &mut Lytes) -> Task<Message> {
    if state.scanning {
        return Task::none();
    }

    let Some(path) = FileDialog::new()
        .set_title("Select Music File")
        .add_filter("Audio Files", &AUDIO_EXTENSIONS)
        .pick_file()
    else {
        state.status = "Import cancelled.".into();
        return Task::none();
    };

    let hints = read_import_hints(&path);
    state.import = Some(ImportDraft {
        source: ImportSource::File(path),
        artist: hints.artist.unwrap_or_default(),
        genre: hints.genre.unwrap_or(Genre::Pop),
    });
    state.status = "Enter artist and genre, then Add.".into();
    Task::none()
}

pub(crate) fn pick_folder(state: &mut Lytes) -> Task<Message> {
    if state.scanning {
        return Task::none();
    }

    let Some(folder) = FileDialog::new()
        .set_title("Select Music Folder")
        .pick_folder()
    else {
        state.status = "Import cancelled.".into();
        return Task::none();
    };

    state.import = Some(ImportDraft {
        source: ImportSource::Folder(folder),
        artist: String::new(),
        genre: Genre::Pop,
    });
    state.status = "Enter artist and genre, then Add.".into();
    Task::none()
}

pub(crate) fn artist_changed(state: &mut Lytes, s: String) -> Task<Message> {
    if let Some(draft) = state.import.as_mut() {
        draft.artist = s;
    }
    Task::none()
}

pub(crate) fn genre_selected(state: &mut Lytes, genre: Genre) -> Task<Message> {
    if let Some(draft) = state.import.as_mut() {
        draft.genre = genre;
    }
    Task::none()
}

pub(crate) fn cancel(state: &mut Lytes) -> Task<Message> {
    state.import = None;
    state.status = "Import cancelled.".into();
    Task::none()
}

pub(crate) fn confirm(state: &mut Lytes) -> Task<Message> {
    let Some(draft) = state.import.take() else {
        return Task::none();
    };

    // Keep the form open so the user can fix the name.
    if draft.artist.trim().is_empty() {
        state.status = "Enter an artist name.".into();
        state.import = Some(draft);
        return Task::none();
    }

    let ImportDraft {
        source,
        artist,
        genre,
    } = draft;

    match source {
        ImportSource::File(path) => {
            match state.library.import_song(genre, &artist, path) {
                Ok(at) => {
                    let title = state
                        .library
                        .song(&at)
                        .map(|s| s.title.clone())
                        .unwrap_or_default();
                    info!(%title, artist = %at.artist, %genre, "imported");
                    state.status = format!("Imported {title} ({} / {genre})", at.artist);
                }
                Err(e) => {
                    warn!(error = %e, "import failed");
                    state.status = format!("Import failed: {e}");
                }
            }
            Task::none()
        }
        ImportSource::Folder(root) => {
            state.scanning = true;
            state.status = format!("Scanning {}...", root.display());

            Task::perform(
                spawn_blocking(move || scan_audio_files(&root).map_err(|e| e.to_string())),
                move |result| Message::FolderScanned {
                    genre,
                    artist: artist.clone(),
                    result,
                },
            )
        }
    }
}

pub(crate) fn folder_scanned(
    state: &mut Lytes,
    genre: Genre,
    artist: String,
    result: Result<Vec<PathBuf>, String>,
) -> Task<Message> {
    state.scanning = false;

    let paths = match result {
        Ok(paths) => paths,
        Err(e) => {
            warn!(error = %e, "folder scan failed");
            state.status = format!("Scan error: {e}");
            return Task::none();
        }
    };

    if paths.is_empty() {
        state.status = "No audio files found in that folder.".into();
        return Task::none();
    }

    match state.library.import_paths(genre, &artist, paths) {
        Ok(refs) => {
            info!(count = refs.len(), %artist, %genre, "imported folder");
            state.status = format!("Imported {} songs ({} / {genre})", refs.len(), artist.trim());
        }
        Err(e) => state.status = format!("Import failed: {e}"),
    }

    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::core::types::SongRef;

    fn lytes_with_draft(source: ImportSource, artist: &str) -> Lytes {
        let mut state = Lytes::new(Settings::default());
        state.import = Some(ImportDraft {
            source,
            artist: artist.to_string(),
            genre: Genre::Amapiano,
        });
        state
    }

    fn file(path: &str) -> ImportSource {
        ImportSource::File(PathBuf::from(path))
    }

    #[test]
    fn cancel_drops_the_draft_and_leaves_library_alone() {
        let mut state = lytes_with_draft(file("/m/a.mp3"), "Kabza");

        let _ = cancel(&mut state);

        assert!(state.import.is_none());
        assert!(state.library.is_empty());
        assert_eq!(state.status, "Import cancelled.");
    }

    #[test]
    fn confirm_with_blank_artist_keeps_the_form_open() {
        let mut state = lytes_with_draft(file("/m/a.mp3"), "   ");

        let _ = confirm(&mut state);

        let draft = state.import.as_ref().unwrap();
        assert_eq!(draft.source, file("/m/a.mp3"));
        assert_eq!(draft.genre, Genre::Amapiano);
        assert!(state.library.is_empty());
        assert_eq!(state.status, "Enter an artist name.");
    }

    #[test]
    fn confirm_file_imports_under_trimmed_artist() {
        let mut state = lytes_with_draft(file("/m/a.mp3"), " Kabza ");

        let _ = confirm(&mut state);

        assert!(state.import.is_none());
        let at = SongRef::new(Genre::Amapiano, "Kabza", 0);
        assert_eq!(state.library.song(&at).unwrap().title, "a.mp3");
        assert_eq!(state.library.len(), 1);
    }

    #[test]
    fn confirm_folder_starts_a_scan_without_importing() {
        let mut state = lytes_with_draft(ImportSource::Folder(PathBuf::from("/m")), "Kabza");

        let _ = confirm(&mut state);

        assert!(state.scanning);
        assert!(state.import.is_none());
        assert!(state.library.is_empty());
    }

    #[test]
    fn failed_scan_imports_nothing_and_clears_scanning() {
        let mut state = Lytes::new(Settings::default());
        state.scanning = true;

        let _ = folder_scanned(
            &mut state,
            Genre::Jazz,
            "Y".into(),
            Err("permission denied".into()),
        );

        assert!(!state.scanning);
        assert!(state.library.is_empty());
        assert_eq!(state.status, "Scan error: permission denied");
    }

    #[test]
    fn empty_scan_imports_nothing_and_clears_scanning() {
        let mut state = Lytes::new(Settings::default());
        state.scanning = true;

        let _ = folder_scanned(&mut state, Genre::Jazz, "Y".into(), Ok(Vec::new()));

        assert!(!state.scanning);
        assert!(state.library.is_empty());
        assert_eq!(state.status, "No audio files found in that folder.");
    }

    #[test]
    fn finished_scan_imports_every_path_in_order() {
        let mut state = Lytes::new(Settings::default());
        state.scanning = true;
        let paths = vec![PathBuf::from("/m/1.mp3"), PathBuf::from("/m/2.ogg")];

        let _ = folder_scanned(&mut state, Genre::Jazz, "Y".into(), Ok(paths));

        assert!(!state.scanning);
        let titles: Vec<_> = state
            .library
            .songs(Genre::Jazz, "Y")
            .unwrap()
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(titles, ["1.mp3", "2.ogg"]);
        assert_eq!(state.status, "Imported 2 songs (Y / Jazz)");
    }
}
