// SPDX-License-Identifier: MPL-2.0
//! Scrollable photo grid for a loaded manifest.
//!
//! Photos render in server order, chunked into fixed-width rows. Each card is
//! identified by its photo id through the thumbnail cache, so a card keeps
//! showing the same photo's placeholder, image, or fallback across re-renders
//! regardless of layout changes.

use crate::api::Photo;
use crate::i18n::fluent::I18n;
use crate::media::{Thumbnail, ThumbnailCache};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::gallery::component::Message;
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::image::Image;
use iced::widget::{scrollable, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Side length of one square photo card.
pub const CARD_SIZE: f32 = 160.0;

/// Renders the photo grid, or the empty hint when the manifest has no photos.
pub fn view<'a>(
    photos: &'a [Photo],
    thumbnails: &'a ThumbnailCache,
    columns: u16,
    i18n: &I18n,
) -> Element<'a, Message> {
    if photos.is_empty() {
        return empty_view(i18n);
    }

    let columns = usize::from(columns.max(1));
    let mut grid = Column::new().spacing(spacing::XS);

    for row_photos in photos.chunks(columns) {
        let mut row = Row::new().spacing(spacing::XS);
        for photo in row_photos {
            row = row.push(card(photo, thumbnails));
        }
        grid = grid.push(row);
    }

    let content = Container::new(grid)
        .width(Length::Fill)
        .padding(spacing::SM)
        .align_x(alignment::Horizontal::Center);

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// One square card: the photo once it arrived, the placeholder while its
/// download is pending, or the broken-image fallback after a failure.
fn card<'a>(photo: &'a Photo, thumbnails: &'a ThumbnailCache) -> Element<'a, Message> {
    let content: Element<'a, Message> = match thumbnails.get(&photo.id) {
        Some(Thumbnail::Ready(handle)) => Image::new(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Some(Thumbnail::Failed) => icons::sized(icons::broken_image(), sizing::ICON_XL).into(),
        Some(Thumbnail::Pending) | None => {
            icons::sized(icons::placeholder(), sizing::ICON_XL).into()
        }
    };

    Container::new(content)
        .width(Length::Fixed(CARD_SIZE))
        .height(Length::Fixed(CARD_SIZE))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::card)
        .into()
}

fn empty_view<'a>(i18n: &I18n) -> Element<'a, Message> {
    let hint = Text::new(i18n.tr("gallery-empty"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    Container::new(hint)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
