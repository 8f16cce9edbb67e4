//! Import form: picked file/folder, artist box, genre picker.

use iced::widget::{button, column, container, pick_list, row, text, text_input};
use iced::{Alignment, Length};

use super::super::state::{ImportDraft, ImportSource, Message};
use super::constants::LABEL_W;
use crate::core::types::Genre;

pub(crate) fn import_panel(draft: &ImportDraft) -> iced::widget::Container<'_, Message> {
    let picked = match &draft.source {
        ImportSource::File(p) => format!("File: {}", p.display()),
        ImportSource::Folder(p) => format!("Folder: {}", p.display()),
    };

    let artist = row![
        text("Artist").width(Length::Fixed(LABEL_W)),
        text_input("Enter artist name", &draft.artist)
            .on_input(Message::ImportArtistChanged)
            .on_submit(Message::ImportConfirmed)
            .width(Length::Fill),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let genre = row![
        text("Genre").width(Length::Fixed(LABEL_W)),
        pick_list(Genre::ALL, Some(draft.genre), Message::ImportGenreSelected),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let add_btn = if draft.artist.trim().is_empty() {
        button("Add")
    } else {
        button("Add").on_press(Message::ImportConfirmed)
    };

    let actions = row![add_btn, button("Cancel").on_press(Message::ImportCancelled)].spacing(8);

    container(column![text(picked).size(13), artist, genre, actions].spacing(8)).padding(8)
}
