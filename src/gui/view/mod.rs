//! GUI renderer (reads state, produces widgets; no mutation).

mod constants;
mod controls;
mod import;
mod library;
mod search;

use iced::Length;
use iced::widget::{Column, column, text};

use super::state::{Lytes, Message};
use constants::STATUS_TEXT;

pub(crate) fn view(state: &Lytes) -> Column<'_, Message> {
    let mut col = column![
        search::search_bar(state),
        library::build_library_table(state).height(Length::Fill),
    ]
    .spacing(12)
    .padding(12);

    if let Some(draft) = &state.import {
        col = col.push(import::import_panel(draft));
    }

    col.push(controls::now_playing(state))
        .push(controls::transport(state))
        .push(controls::volume_row(state))
        .push(text(&state.status).size(STATUS_TEXT))
}
