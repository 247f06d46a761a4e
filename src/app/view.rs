// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the single gallery
//! screen based on application state.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use iced::widget::Container;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
}

/// Renders the gallery screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery_view = ctx
        .gallery
        .view(gallery::ViewEnv { i18n: ctx.i18n })
        .map(Message::Gallery);

    Container::new(gallery_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
