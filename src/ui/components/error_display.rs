// SPDX-License-Identifier: MPL-2.0
//! Failure panel shown when the manifest fetch fails.
//!
//! One panel serves the application's single error kind: a headline, a hint,
//! a retry button, and collapsible technical details carrying the underlying
//! cause. All labels are provided by the caller so the panel itself stays
//! locale-agnostic.

use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, container, rule, text, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

/// Localized labels for the details toggle and heading.
#[derive(Debug, Clone)]
pub struct DetailLabels {
    pub show: String,
    pub hide: String,
    pub heading: String,
}

/// The fetch-failure panel.
#[derive(Debug, Clone)]
pub struct FailurePanel<Message> {
    title: String,
    message: String,
    details: String,
    details_visible: bool,
    retry_label: String,
    on_retry: Message,
    on_toggle_details: Message,
    detail_labels: DetailLabels,
}

impl<Message: Clone + 'static> FailurePanel<Message> {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        retry_label: impl Into<String>,
        on_retry: Message,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            details: String::new(),
            details_visible: false,
            retry_label: retry_label.into(),
            on_retry: on_retry.clone(),
            on_toggle_details: on_retry,
            detail_labels: DetailLabels {
                show: "Show details".to_string(),
                hide: "Hide details".to_string(),
                heading: "Technical details".to_string(),
            },
        }
    }

    /// Attaches the technical details and the message toggling them.
    pub fn details(
        mut self,
        details: impl Into<String>,
        visible: bool,
        on_toggle: Message,
        labels: DetailLabels,
    ) -> Self {
        self.details = details.into();
        self.details_visible = visible;
        self.on_toggle_details = on_toggle;
        self.detail_labels = labels;
        self
    }

    /// Renders the panel centered inside its parent.
    pub fn view(self) -> Element<'static, Message> {
        let title = Text::new(self.title)
            .size(typography::TITLE_MD)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::ERROR_500),
            });

        let hint = Text::new(self.message).size(typography::BODY);

        let retry = button(Text::new(self.retry_label))
            .on_press(self.on_retry)
            .style(button_styles::primary);

        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill)
            .push(title)
            .push(
                Container::new(hint)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            )
            .push(
                Container::new(retry)
                    .padding(spacing::SM)
                    .align_x(alignment::Horizontal::Center),
            );

        if !self.details.is_empty() {
            let toggle_label = if self.details_visible {
                self.detail_labels.hide
            } else {
                self.detail_labels.show
            };
            let toggle = button(Text::new(toggle_label).size(typography::BODY_SM))
                .on_press(self.on_toggle_details);
            content =
                content.push(Container::new(toggle).align_x(alignment::Horizontal::Center));

            if self.details_visible {
                let heading = Text::new(self.detail_labels.heading)
                    .size(typography::BODY)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().secondary.base.text),
                    });
                let body = Text::new(self.details)
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().secondary.base.text),
                    });

                content = content.push(
                    Container::new(
                        Column::new()
                            .spacing(spacing::XS)
                            .width(Length::Fill)
                            .push(rule::horizontal(1))
                            .push(heading)
                            .push(body),
                    )
                    .width(Length::Fill)
                    .padding(spacing::SM),
                );
            }
        }

        let panel = Container::new(content)
            .width(Length::Fill)
            .max_width(500.0)
            .padding(spacing::LG)
            .style(|theme: &Theme| {
                let colors = theme.extended_palette();
                container::Style {
                    background: Some(iced::Background::Color(colors.background.weak.color)),
                    border: iced::Border {
                        color: colors.background.strong.color,
                        width: 1.0,
                        radius: radius::MD.into(),
                    },
                    text_color: Some(theme.palette().text),
                    ..Default::default()
                }
            });

        Container::new(panel)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding(spacing::LG)
            .into()
    }
}
