// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::Message;
use crate::ui::gallery;
use iced::Task;

/// Forwards a gallery message and lifts its follow-up tasks back to the
/// top-level message type.
pub fn handle_gallery_message(
    gallery: &mut gallery::State,
    message: gallery::Message,
) -> Task<Message> {
    gallery.handle_message(message).map(Message::Gallery)
}

/// Advances time-driven state (the loading spinner).
pub fn handle_tick(gallery: &mut gallery::State) -> Task<Message> {
    gallery.tick();
    Task::none()
}
