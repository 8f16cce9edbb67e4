//! gui/subscription.rs
//! Poll playback events by emitting a periodic TickPlayback message.

use iced::{Subscription, time};

use super::state::{Lytes, Message};

pub(crate) fn subscription(state: &Lytes) -> Subscription<Message> {
    time::every(state.settings.tick()).map(|_| Message::TickPlayback)
}
