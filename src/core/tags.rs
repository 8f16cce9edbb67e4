//! ID3 tag hints for the import form.
//!
//! Importing never depends on tags: the song title is always the file name.
//! Tags are only used to prefill the artist box and the genre picker.
//!
//! API design:
//! - `read_import_hints(path)` never fails; unreadable tags give empty hints.

use std::path::Path;

use id3::frame::Content;
use id3::{Tag, TagLike};
use tracing::debug;

use super::types::Genre;

/// What the tags suggest for a file about to be imported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportHints {
    pub artist: Option<String>,
    pub genre: Option<Genre>,
}

pub fn read_import_hints(path: &Path) -> ImportHints {
    match Tag::read_from_path(path) {
        Ok(tag) => hints_from_tag(&tag),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no readable tags");
            ImportHints::default()
        }
    }
}

fn hints_from_tag(tag: &Tag) -> ImportHints {
    let artist = tag
        .artist()
        .map(str::to_owned)
        .or_else(|| text_frame(tag, "TPE2"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let genre = tag.genre().and_then(parse_tcon);

    ImportHints { artist, genre }
}

fn text_frame(tag: &Tag, id: &str) -> Option<String> {
    match tag.get(id)?.content() {
        Content::Text(s) => Some(s.clone()),
        _ => None,
    }
}

/// Map a raw TCON value onto a known genre.
///
/// Handles plain names ("Hip-Hop"), v1 numeric refs ("(7)", "7"),
/// and the combined form ("(7)Hip-Hop").
fn parse_tcon(raw: &str) -> Option<Genre> {
    let raw = raw.trim();

    if let Some(rest) = raw.strip_prefix('(') {
        let (num, tail) = rest.split_once(')')?;
        return Genre::from_loose(tail).or_else(|| genre_from_v1(num));
    }

    Genre::from_loose(raw).or_else(|| genre_from_v1(raw))
}

/// The handful of ID3v1 genre numbers that have a counterpart in `Genre`.
fn genre_from_v1(num: &str) -> Option<Genre> {
    match num.trim().parse::<u8>().ok()? {
        7 | 15 => Some(Genre::HipHop),
        8 => Some(Genre::Jazz),
        13 => Some(Genre::Pop),
        14 => Some(Genre::RnB),
        16 => Some(Genre::Reggae),
        38 => Some(Genre::Gospel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tcon_forms() {
        assert_eq!(parse_tcon("Jazz"), Some(Genre::Jazz));
        assert_eq!(parse_tcon("(16)"), Some(Genre::Reggae));
        assert_eq!(parse_tcon("14"), Some(Genre::RnB));
        assert_eq!(parse_tcon("(7)Hip-Hop"), Some(Genre::HipHop));
        assert_eq!(parse_tcon("(17)Rock"), None);
        assert_eq!(parse_tcon("Polka"), None);
    }

    #[test]
    fn hints_from_built_tag() {
        let mut tag = Tag::new();
        tag.set_artist("  Burna Boy ");
        tag.set_genre("Afrobeats");

        let hints = hints_from_tag(&tag);
        assert_eq!(hints.artist.as_deref(), Some("Burna Boy"));
        assert_eq!(hints.genre, Some(Genre::Afrobeat));
    }

    #[test]
    fn unreadable_file_gives_empty_hints() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noise.mp3");
        std::fs::write(&path, b"not really an mp3").unwrap();

        assert_eq!(read_import_hints(&path), ImportHints::default());
    }
}
