//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;

use super::state::{Lytes, Message};

mod import;
mod playback;
mod search;
mod util;

pub(crate) fn update(state: &mut Lytes, message: Message) -> Task<Message> {
    match message {
        Message::TickPlayback => playback::drain_events(state),

        // Search
        Message::SearchInputChanged(s) => search::input_changed(state, s),
        Message::SearchSubmitted => search::submit(state),

        // Playback
        Message::PlayEntry(at) => playback::play_entry(state, at),
        Message::TogglePlayPause => playback::toggle_play_pause(state),
        Message::Stop => playback::stop(state),
        Message::Next => playback::next(state),
        Message::Prev => playback::prev(state),
        Message::SetVolume(percent) => playback::set_volume(state, percent),

        // Import
        Message::ImportFilePressed => import::pick_file(state),
        Message::ImportFolderPressed => import::pick_folder(state),
        Message::ImportArtistChanged(s) => import::artist_changed(state, s),
        Message::ImportGenreSelected(g) => import::genre_selected(state, g),
        Message::ImportConfirmed => import::confirm(state),
        Message::ImportCancelled => import::cancel(state),
        Message::FolderScanned {
            genre,
            artist,
            result,
        } => import::folder_scanned(state, genre, artist, result),
    }
}
