// SPDX-License-Identifier: MPL-2.0
//! Thumbnail cache for downloaded photo images.
//!
//! # Design
//!
//! - **Id-keyed**: entries are indexed by photo id, which is also how grid
//!   cards keep their identity across re-renders
//! - **LRU eviction**: least recently inserted images are evicted first
//! - **Memory-bounded**: total encoded size limited by a byte budget
//! - **In-flight tracking**: a pending marker suppresses duplicate downloads
//!   for the same photo

use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Default cache budget for encoded image bytes (64 MB).
pub const DEFAULT_CACHE_BYTES: usize = 64 * 1024 * 1024;

/// Default maximum number of tracked photos.
pub const DEFAULT_MAX_ENTRIES: usize = 512;

/// Lifecycle of one photo's image.
#[derive(Debug, Clone)]
pub enum Thumbnail {
    /// Download in flight; render the placeholder.
    Pending,
    /// Decoded handle ready to display.
    Ready(Handle),
    /// Download failed; render the broken-image fallback.
    Failed,
}

#[derive(Debug)]
struct Entry {
    thumbnail: Thumbnail,
    size_bytes: usize,
}

/// Bounded store of photo images, keyed by photo id.
pub struct ThumbnailCache {
    entries: LruCache<String, Entry>,
    max_bytes: usize,
    current_bytes: usize,
}

impl ThumbnailCache {
    /// Creates a cache with the given byte budget and entry capacity.
    ///
    /// # Panics
    ///
    /// Panics if `DEFAULT_MAX_ENTRIES` is zero, which would indicate a build
    /// configuration error.
    #[must_use]
    pub fn new(max_bytes: usize, max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(
            NonZeroUsize::new(DEFAULT_MAX_ENTRIES).expect("DEFAULT_MAX_ENTRIES must be non-zero"),
        );

        Self {
            entries: LruCache::new(capacity),
            max_bytes,
            current_bytes: 0,
        }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_CACHE_BYTES, DEFAULT_MAX_ENTRIES)
    }

    /// Marks a photo as in flight.
    ///
    /// Returns `false` when the id is already tracked (pending, ready, or
    /// failed), letting the caller skip a duplicate download.
    pub fn begin(&mut self, id: &str) -> bool {
        if self.entries.contains(id) {
            return false;
        }

        self.make_room_for_entry();
        self.entries.put(
            id.to_string(),
            Entry {
                thumbnail: Thumbnail::Pending,
                size_bytes: 0,
            },
        );
        true
    }

    /// Stores downloaded bytes as a ready thumbnail, evicting old entries
    /// until the byte budget holds.
    pub fn insert_ready(&mut self, id: &str, bytes: Vec<u8>) {
        let size_bytes = bytes.len();

        if let Some(old) = self.entries.pop(id) {
            self.current_bytes = self.current_bytes.saturating_sub(old.size_bytes);
        }

        while self.current_bytes + size_bytes > self.max_bytes && !self.entries.is_empty() {
            self.evict_one();
        }

        self.make_room_for_entry();
        self.entries.put(
            id.to_string(),
            Entry {
                thumbnail: Thumbnail::Ready(Handle::from_bytes(bytes)),
                size_bytes,
            },
        );
        self.current_bytes += size_bytes;
    }

    /// Records a failed download so the card can render its fallback.
    pub fn mark_failed(&mut self, id: &str) {
        if let Some(entry) = self.entries.get_mut(id) {
            self.current_bytes = self.current_bytes.saturating_sub(entry.size_bytes);
            entry.thumbnail = Thumbnail::Failed;
            entry.size_bytes = 0;
            return;
        }

        self.make_room_for_entry();
        self.entries.put(
            id.to_string(),
            Entry {
                thumbnail: Thumbnail::Failed,
                size_bytes: 0,
            },
        );
    }

    /// Looks up a thumbnail without touching the recency order, so the view
    /// can read entries through a shared reference.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Thumbnail> {
        self.entries.peek(id).map(|entry| &entry.thumbnail)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.current_bytes = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current encoded-byte usage.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }

    /// Pops entries until the capacity count has room for one more.
    fn make_room_for_entry(&mut self) {
        while self.entries.len() >= self.entries.cap().get() {
            self.evict_one();
        }
    }

    fn evict_one(&mut self) {
        if let Some((_, evicted)) = self.entries.pop_lru() {
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
        }
    }
}

impl std::fmt::Debug for ThumbnailCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThumbnailCache")
            .field("entries", &self.entries.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.max_bytes)
            .finish()
    }
}
