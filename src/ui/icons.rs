// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for embedded PNG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`, so repeated renders reuse the same decoded data.

use iced::widget::image::{Handle, Image};
use iced::Length;
use std::sync::OnceLock;

/// Placeholder shown inside a card while its photo downloads.
pub fn placeholder() -> Image<Handle> {
    static HANDLE: OnceLock<Handle> = OnceLock::new();
    static DATA: &[u8] = include_bytes!("../../assets/icons/image-placeholder.png");
    let handle = HANDLE.get_or_init(|| Handle::from_bytes(DATA));
    Image::new(handle.clone())
}

/// Fallback shown inside a card when its photo download fails.
pub fn broken_image() -> Image<Handle> {
    static HANDLE: OnceLock<Handle> = OnceLock::new();
    static DATA: &[u8] = include_bytes!("../../assets/icons/broken-image.png");
    let handle = HANDLE.get_or_init(|| Handle::from_bytes(DATA));
    Image::new(handle.clone())
}

/// Resizes an icon to a square of the given size.
pub fn sized(icon: Image<Handle>, size: f32) -> Image<Handle> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
