//! Library view (table list). Shows the full library or the last search's hits.

use iced::widget::{Column, column, container, mouse_area, row, scrollable, text};
use iced::{Alignment, Element, Length};

use super::super::state::{Lytes, Message};
use super::constants::{
    ARTIST_W, GENRE_W, HEADER_TEXT, LIST_SPACING, MARKER_W, ROW_H, ROW_HPAD, ROW_TEXT,
    ROW_VPAD, TITLE_W,
};
use crate::core::library::{Entry, SearchOutcome};
use crate::core::playback::PlaybackStatus;

pub(crate) fn build_library_table(state: &Lytes) -> Column<'_, Message> {
    let (heading, entries): (String, Vec<Entry<'_>>) = match state
        .search_query
        .as_deref()
        .map(|q| state.library.search(q))
    {
        Some(SearchOutcome::Matches(hits)) => (format!("Search results ({})", hits.len()), hits),
        Some(SearchOutcome::ShowAll) | None => (
            format!("Library ({})", state.library.len()),
            state.library.entries().collect(),
        ),
    };

    let body: Element<'_, Message> = if entries.is_empty() {
        let hint = if state.library.is_empty() {
            "No songs yet. Use Import File or Import Folder."
        } else {
            "No matches."
        };
        text(hint).size(ROW_TEXT).into()
    } else {
        build_rows(state, entries).into()
    };

    column![text(heading).size(18), container(body).height(Length::Fill)].spacing(12)
}

fn build_rows<'a>(state: &'a Lytes, entries: Vec<Entry<'a>>) -> iced::widget::Scrollable<'a, Message> {
    let header = row![
        text("").size(HEADER_TEXT).width(Length::Fixed(MARKER_W)),
        text("Song").size(HEADER_TEXT).width(Length::Fixed(TITLE_W)),
        text("Artist").size(HEADER_TEXT).width(Length::Fixed(ARTIST_W)),
        text("Genre").size(HEADER_TEXT).width(Length::Fixed(GENRE_W)),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let mut col = column![header].spacing(LIST_SPACING);

    for entry in entries {
        let at = entry.song_ref();
        let marker = match state.player.status() {
            PlaybackStatus::Playing(cur) if *cur == at => "▶",
            PlaybackStatus::Paused(cur) if *cur == at => "⏸",
            _ => "",
        };

        let row_cells = row![
            text(marker).size(ROW_TEXT).width(Length::Fixed(MARKER_W)),
            text(entry.song.title.as_str())
                .size(ROW_TEXT)
                .width(Length::Fixed(TITLE_W)),
            text(entry.artist).size(ROW_TEXT).width(Length::Fixed(ARTIST_W)),
            text(entry.genre.name())
                .size(ROW_TEXT)
                .width(Length::Fixed(GENRE_W)),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let row_widget = mouse_area(
            container(row_cells)
                .padding([ROW_VPAD, ROW_HPAD])
                .height(Length::Fixed(ROW_H))
                .width(Length::Fill),
        )
        .on_double_click(Message::PlayEntry(at));

        col = col.push(row_widget);
    }

    scrollable(col).height(Length::Fill)
}
