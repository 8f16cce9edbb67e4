//! Search bar.

use iced::widget::{button, row, text_input};
use iced::{Alignment, Length};

use super::super::state::{Lytes, Message};

pub(crate) fn search_bar(state: &Lytes) -> iced::widget::Row<'_, Message> {
    let input = text_input("Search song, artist, or genre...", &state.search_input)
        .on_input(Message::SearchInputChanged)
        .on_submit(Message::SearchSubmitted)
        .width(Length::Fill);

    row![input, button("Search").on_press(Message::SearchSubmitted)]
        .spacing(8)
        .align_y(Alignment::Center)
}
