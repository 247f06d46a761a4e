// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::radius;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Card surface behind each photo thumbnail.
///
/// The colors are derived from the active Iced `Theme` background, so cards
/// stay readable in both light and dark modes without hard-coding colors.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
