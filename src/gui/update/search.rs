//! gui/update/search.rs
//! Search box: typing edits the input, submitting sets the query the view filters by.

use iced::Task;

use super::super::state::{Lytes, Message};

pub(crate) fn input_changed(state: &mut Lytes, s: String) -> Task<Message> {
    state.search_input = s;
    Task::none()
}

/// Blank query = back to the full library.
pub(crate) fn submit(state: &mut Lytes) -> Task<Message> {
    let query = state.search_input.trim();
    state.search_query = if query.is_empty() {
        None
    } else {
        Some(query.to_string())
    };
    Task::none()
}
