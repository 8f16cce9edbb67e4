//! Core data types shared between core logic and the UI.
//!
//! Rule of thumb:
//! - These structs should be “boring bags of data”
//! - No GUI code
//! - No filesystem code
//!
//! 'Song' is ONE imported audio file; 'SongRef' is where it lives in the library.

use std::fmt;
use std::path::PathBuf;

/// The fixed set of genres an artist can be filed under.
///
/// Order matters: it is the browse order of the library and the order
/// "play the first song" walks when nothing is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Genre {
    Pop,
    HipHop,
    Afrobeat,
    Amapiano,
    Reggae,
    Jazz,
    Gospel,
    RnB,
}

impl Genre {
    pub const COUNT: usize = 8;

    pub const ALL: [Genre; Genre::COUNT] = [
        Genre::Pop,
        Genre::HipHop,
        Genre::Afrobeat,
        Genre::Amapiano,
        Genre::Reggae,
        Genre::Jazz,
        Genre::Gospel,
        Genre::RnB,
    ];

    /// Display name, exactly as shown in the genre picker and the Genre column.
    pub fn name(self) -> &'static str {
        match self {
            Genre::Pop => "Pop",
            Genre::HipHop => "Hip Hop",
            Genre::Afrobeat => "Afrobeat",
            Genre::Amapiano => "Amapiano",
            Genre::Reggae => "Reggae",
            Genre::Jazz => "Jazz",
            Genre::Gospel => "Gospel",
            Genre::RnB => "RnB",
        }
    }

    /// Position in `Genre::ALL`.
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Loose match for free-text genre values (ID3 TCON, user input).
    ///
    /// - case-insensitive
    /// - ignores spaces, dashes, apostrophes and '&'
    /// - "R&B" / "R'n'B" / "rnb" all map to RnB
    pub fn from_loose(s: &str) -> Option<Genre> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_' | '\'' | '&'))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "pop" => Some(Genre::Pop),
            "hiphop" | "rap" => Some(Genre::HipHop),
            "afrobeat" | "afrobeats" => Some(Genre::Afrobeat),
            "amapiano" => Some(Genre::Amapiano),
            "reggae" => Some(Genre::Reggae),
            "jazz" => Some(Genre::Jazz),
            "gospel" => Some(Genre::Gospel),
            "rnb" | "rb" | "rhythmandblues" => Some(Genre::RnB),
            _ => None,
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One imported audio file.
///
/// Created on import and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    /// File name of `path` (extension included).
    pub title: String,
    /// Where the file lives on disk. Not checked for existence.
    pub path: PathBuf,
}

/// Address of one song: genre bucket, artist bucket, position in that bucket.
///
/// Positions are stable because songs are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SongRef {
    pub genre: Genre,
    pub artist: String,
    pub index: usize,
}

impl SongRef {
    pub fn new(genre: Genre, artist: impl Into<String>, index: usize) -> Self {
        Self {
            genre,
            artist: artist.into(),
            index,
        }
    }

    /// Same artist bucket, different position.
    pub fn with_index(&self, index: usize) -> Self {
        Self {
            genre: self.genre,
            artist: self.artist.clone(),
            index,
        }
    }
}

impl fmt::Display for SongRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} #{}", self.genre, self.artist, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_declaration_order() {
        for (i, g) in Genre::ALL.iter().enumerate() {
            assert_eq!(g.index(), i);
        }
        assert_eq!(Genre::ALL[1].name(), "Hip Hop");
    }

    #[test]
    fn loose_genre_parsing() {
        assert_eq!(Genre::from_loose("Hip-Hop"), Some(Genre::HipHop));
        assert_eq!(Genre::from_loose("hip hop"), Some(Genre::HipHop));
        assert_eq!(Genre::from_loose("R&B"), Some(Genre::RnB));
        assert_eq!(Genre::from_loose("R'n'B"), Some(Genre::RnB));
        assert_eq!(Genre::from_loose("JAZZ"), Some(Genre::Jazz));
        assert_eq!(Genre::from_loose("Death Metal"), None);
    }
}
