// SPDX-License-Identifier: MPL-2.0
//! Loading view with animated spinner.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::gallery::component::Message;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

/// Renders the centered spinner shown while the manifest fetch is in flight.
pub fn view<'a>(i18n: &I18n, spinner_rotation: f32) -> Element<'a, Message> {
    let spinner = AnimatedSpinner::new(palette::PRIMARY_500, spinner_rotation).into_element();

    let caption = Text::new(i18n.tr("gallery-loading"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(spinner)
        .push(caption);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
