//! core/library.rs
//! In-memory music library: genre -> artist -> ordered songs.
//!
//! - Genres are the fixed `Genre::ALL` set, always present, always in that order.
//! - Artist buckets appear on first import and keep insertion order.
//! - Songs are only appended, so a song's index in its bucket never changes.
//!
//! Nothing here touches the GUI or the audio engine.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::error::LibraryError;
use super::types::{Genre, Song, SongRef};

/// Extensions picked up by folder import and offered by the file picker.
pub const AUDIO_EXTENSIONS: [&str; 4] = ["mp3", "wav", "ogg", "flac"];

/// The ordered songs of one artist within one genre.
#[derive(Debug, Clone, Default)]
pub struct ArtistBucket {
    pub name: String,
    pub songs: Vec<Song>,
}

/// One song plus its address, as shown in a list row.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    pub genre: Genre,
    pub artist: &'a str,
    pub index: usize,
    pub song: &'a Song,
}

impl Entry<'_> {
    pub fn song_ref(&self) -> SongRef {
        SongRef::new(self.genre, self.artist, self.index)
    }
}

/// Result of a search.
///
/// An empty query isn't "no hits", it means "show the whole library".
#[derive(Debug)]
pub enum SearchOutcome<'a> {
    ShowAll,
    Matches(Vec<Entry<'a>>),
}

#[derive(Debug, Clone, Default)]
pub struct Library {
    /// Indexed by `Genre::index()`.
    shelves: [Vec<ArtistBucket>; Genre::COUNT],
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one file to `genre`/`artist`, creating the artist bucket if needed.
    ///
    /// No existence check, no duplicate detection: importing the same path twice
    /// stores two songs.
    pub fn import_song(
        &mut self,
        genre: Genre,
        artist: &str,
        path: impl Into<PathBuf>,
    ) -> Result<SongRef, LibraryError> {
        let artist = artist.trim();
        if artist.is_empty() {
            return Err(LibraryError::EmptyArtist);
        }

        let path = path.into();
        let Some(title) = path.file_name().map(|s| s.to_string_lossy().into_owned()) else {
            return Err(LibraryError::NoFileName(path));
        };

        let shelf = &mut self.shelves[genre.index()];
        let bucket = match shelf.iter().position(|b| b.name == artist) {
            Some(i) => &mut shelf[i],
            None => {
                shelf.push(ArtistBucket {
                    name: artist.to_string(),
                    songs: Vec::new(),
                });
                let last = shelf.len() - 1;
                &mut shelf[last]
            }
        };

        bucket.songs.push(Song { title, path });
        let index = bucket.songs.len() - 1;

        debug!(%genre, artist, index, "imported song");
        Ok(SongRef::new(genre, artist, index))
    }

    /// Import a batch of already-discovered paths under one artist/genre.
    ///
    /// Validates the artist once up front so a bad name doesn't half-import.
    pub fn import_paths(
        &mut self,
        genre: Genre,
        artist: &str,
        paths: Vec<PathBuf>,
    ) -> Result<Vec<SongRef>, LibraryError> {
        if artist.trim().is_empty() {
            return Err(LibraryError::EmptyArtist);
        }

        paths
            .into_iter()
            .map(|p| self.import_song(genre, artist, p))
            .collect()
    }

    pub fn artists(&self, genre: Genre) -> &[ArtistBucket] {
        &self.shelves[genre.index()]
    }

    pub fn songs(&self, genre: Genre, artist: &str) -> Option<&[Song]> {
        self.artists(genre)
            .iter()
            .find(|b| b.name == artist)
            .map(|b| b.songs.as_slice())
    }

    pub fn song(&self, at: &SongRef) -> Option<&Song> {
        self.songs(at.genre, &at.artist)?.get(at.index)
    }

    /// Every song, in library order: genre order, then artist insertion order, then index.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> {
        Genre::ALL.into_iter().flat_map(move |genre| {
            self.artists(genre).iter().flat_map(move |bucket| {
                bucket.songs.iter().enumerate().map(move |(index, song)| Entry {
                    genre,
                    artist: bucket.name.as_str(),
                    index,
                    song,
                })
            })
        })
    }

    /// First song in library order, if any.
    pub fn first(&self) -> Option<SongRef> {
        self.entries().next().map(|e| e.song_ref())
    }

    /// Case-insensitive substring match on title, artist or genre name.
    pub fn search(&self, query: &str) -> SearchOutcome<'_> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return SearchOutcome::ShowAll;
        }

        let hits = self
            .entries()
            .filter(|e| {
                e.song.title.to_lowercase().contains(&query)
                    || e.artist.to_lowercase().contains(&query)
                    || e.genre.name().to_lowercase().contains(&query)
            })
            .collect();

        SearchOutcome::Matches(hits)
    }

    pub fn len(&self) -> usize {
        self.shelves
            .iter()
            .flatten()
            .map(|b| b.songs.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Walk `root` recursively for audio files. Sorted by full path.
///
/// Symlinked directories are not descended into, so a link back into the
/// tree can't loop. Symlinked files are kept.
pub fn scan_audio_files(root: &Path) -> Result<Vec<PathBuf>, LibraryError> {
    let mut out = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|err| scan_error(root, err))?;
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if is_file && is_audio(entry.path()) {
            out.push(entry.into_path());
        }
    }

    out.sort();
    debug!(root = %root.display(), found = out.len(), "folder scanned");
    Ok(out)
}

fn scan_error(root: &Path, err: walkdir::Error) -> LibraryError {
    let path = err.path().unwrap_or(root).to_path_buf();
    let source = match err.into_io_error() {
        Some(io) => io,
        None => io::Error::other("filesystem loop"),
    };
    LibraryError::Scan { path, source }
}

fn is_audio(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| AUDIO_EXTENSIONS.iter().any(|a| ext.eq_ignore_ascii_case(a)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(lib: &Library, genre: Genre, artist: &str) -> Vec<String> {
        lib.songs(genre, artist)
            .unwrap_or_default()
            .iter()
            .map(|s| s.title.clone())
            .collect()
    }

    #[test]
    fn import_creates_bucket_then_appends_in_order() {
        let mut lib = Library::new();

        let a = lib.import_song(Genre::Pop, "X", "/music/A.mp3").unwrap();
        assert_eq!(a, SongRef::new(Genre::Pop, "X", 0));
        assert_eq!(lib.artists(Genre::Pop).len(), 1);
        assert_eq!(titles(&lib, Genre::Pop, "X"), ["A.mp3"]);

        let b = lib.import_song(Genre::Pop, "X", "/music/B.mp3").unwrap();
        assert_eq!(b.index, 1);
        assert_eq!(lib.artists(Genre::Pop).len(), 1);
        assert_eq!(titles(&lib, Genre::Pop, "X"), ["A.mp3", "B.mp3"]);
    }

    #[test]
    fn duplicates_are_stored_independently() {
        let mut lib = Library::new();
        lib.import_song(Genre::Jazz, "Y", "/a/song.ogg").unwrap();
        lib.import_song(Genre::Jazz, "Y", "/a/song.ogg").unwrap();
        assert_eq!(lib.len(), 2);
    }

    #[test]
    fn empty_artist_is_rejected_without_mutation() {
        let mut lib = Library::new();
        assert!(matches!(
            lib.import_song(Genre::Pop, "   ", "/a.mp3"),
            Err(LibraryError::EmptyArtist)
        ));
        assert!(lib.is_empty());
        assert!(lib.artists(Genre::Pop).is_empty());
    }

    #[test]
    fn path_without_file_name_is_rejected() {
        let mut lib = Library::new();
        assert!(matches!(
            lib.import_song(Genre::Pop, "X", "/"),
            Err(LibraryError::NoFileName(_))
        ));
        assert!(lib.is_empty());
    }

    #[test]
    fn entries_follow_genre_then_artist_insertion_order() {
        let mut lib = Library::new();
        lib.import_song(Genre::RnB, "Zed", "/z.mp3").unwrap();
        lib.import_song(Genre::Pop, "Mia", "/m1.mp3").unwrap();
        lib.import_song(Genre::Pop, "Abe", "/a1.mp3").unwrap();
        lib.import_song(Genre::Pop, "Mia", "/m2.mp3").unwrap();

        let order: Vec<_> = lib
            .entries()
            .map(|e| (e.genre, e.artist.to_string(), e.song.title.clone()))
            .collect();

        assert_eq!(
            order,
            vec![
                (Genre::Pop, "Mia".to_string(), "m1.mp3".to_string()),
                (Genre::Pop, "Mia".to_string(), "m2.mp3".to_string()),
                (Genre::Pop, "Abe".to_string(), "a1.mp3".to_string()),
                (Genre::RnB, "Zed".to_string(), "z.mp3".to_string()),
            ]
        );
        assert_eq!(lib.first(), Some(SongRef::new(Genre::Pop, "Mia", 0)));
    }

    #[test]
    fn search_by_genre_name_returns_whole_genre() {
        let mut lib = Library::new();
        lib.import_song(Genre::Reggae, "Marley", "/one_love.mp3").unwrap();
        lib.import_song(Genre::Reggae, "Tosh", "/legalize.mp3").unwrap();
        lib.import_song(Genre::Jazz, "Davis", "/so_what.mp3").unwrap();

        let SearchOutcome::Matches(hits) = lib.search("REGGAE") else {
            panic!("expected matches");
        };
        let refs: Vec<_> = hits.iter().map(|e| e.song_ref()).collect();
        assert_eq!(
            refs,
            vec![
                SongRef::new(Genre::Reggae, "Marley", 0),
                SongRef::new(Genre::Reggae, "Tosh", 0),
            ]
        );
    }

    #[test]
    fn search_matches_title_and_artist_case_insensitively() {
        let mut lib = Library::new();
        lib.import_song(Genre::Pop, "Adele", "/hello.mp3").unwrap();
        lib.import_song(Genre::Gospel, "Kirk", "/Hello World.wav").unwrap();

        let SearchOutcome::Matches(hits) = lib.search("  hello ") else {
            panic!("expected matches");
        };
        assert_eq!(hits.len(), 2);

        let SearchOutcome::Matches(hits) = lib.search("kir") else {
            panic!("expected matches");
        };
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].artist, "Kirk");

        let SearchOutcome::Matches(hits) = lib.search("nothing like this") else {
            panic!("expected matches");
        };
        assert!(hits.is_empty());
    }

    #[test]
    fn blank_search_means_show_all() {
        let mut lib = Library::new();
        lib.import_song(Genre::Pop, "X", "/a.mp3").unwrap();
        assert!(matches!(lib.search(""), SearchOutcome::ShowAll));
        assert!(matches!(lib.search(" \t "), SearchOutcome::ShowAll));
    }

    #[test]
    fn folder_import_is_recursive_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("disc2");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(dir.path().join("b.mp3"), b"").unwrap();
        std::fs::write(dir.path().join("a.WAV"), b"").unwrap();
        std::fs::write(dir.path().join("cover.jpg"), b"").unwrap();
        std::fs::write(nested.join("c.ogg"), b"").unwrap();

        let paths = scan_audio_files(dir.path()).unwrap();
        let mut lib = Library::new();
        let refs = lib.import_paths(Genre::Afrobeat, "Fela", paths).unwrap();

        assert_eq!(refs.len(), 3);
        assert_eq!(titles(&lib, Genre::Afrobeat, "Fela"), ["a.WAV", "b.mp3", "c.ogg"]);
    }

    #[test]
    fn scanning_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = scan_audio_files(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, LibraryError::Scan { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn folder_scan_skips_symlinked_dirs_but_keeps_symlinked_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.mp3"), b"").unwrap();
        std::os::unix::fs::symlink(".", dir.path().join("loop")).unwrap();
        std::os::unix::fs::symlink("a.mp3", dir.path().join("alias.mp3")).unwrap();

        let found = scan_audio_files(dir.path()).unwrap();
        assert_eq!(
            found,
            vec![dir.path().join("a.mp3"), dir.path().join("alias.mp3")]
        );
    }

    #[test]
    fn batch_import_with_blank_artist_imports_nothing() {
        let mut lib = Library::new();
        let err = lib
            .import_paths(Genre::Pop, " ", vec![PathBuf::from("/a.mp3")])
            .unwrap_err();
        assert!(matches!(err, LibraryError::EmptyArtist));
        assert!(lib.is_empty());
    }
}
