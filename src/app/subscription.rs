// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the animation tick subscription.
///
/// Only active while the manifest fetch is in flight, so the application
/// stays completely idle once content (or the failure panel) is on screen.
pub fn create_tick_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
