// SPDX-License-Identifier: MPL-2.0
//! Photo image handling.
//!
//! The manifest only carries URLs; each card's image is downloaded on its own
//! and kept in a bounded in-memory cache. A card whose download is still in
//! flight renders a placeholder, and a failed download renders a fallback,
//! without ever affecting the gallery as a whole.

pub mod cache;
pub mod remote;

pub use cache::{Thumbnail, ThumbnailCache};
