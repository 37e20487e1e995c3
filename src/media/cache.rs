// SPDX-License-Identifier: MPL-2.0
//! Decoded image cache shared by the gallery and the flip book.
//!
//! # Design
//!
//! - **LRU eviction**: Least recently used images are evicted first
//! - **Memory-bounded**: Total decoded size limited by a byte budget
//! - **Id-keyed**: Images indexed by their page id
//! - **Load tracking**: In-flight and failed loads are remembered so each page
//!   is requested at most once until it is evicted
//!
//! # Usage
//!
//! ```ignore
//! if cache.begin_load(&page.id) {
//!     // spawn load_image(...) and later call insert() or mark_failed()
//! }
//! match cache.status(&page.id) { ... }
//! ```

use super::ImageData;
use crate::config::{
    DEFAULT_CACHE_MAX_IMAGES, DEFAULT_CACHE_MAX_MEGABYTES, MAX_CACHE_MAX_IMAGES,
    MAX_CACHE_MAX_MEGABYTES, MIN_CACHE_MAX_IMAGES, MIN_CACHE_MAX_MEGABYTES,
};
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

const BYTES_PER_MEGABYTE: usize = 1024 * 1024;

/// Bounds for the image cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheLimits {
    pub max_images: usize,
    pub max_bytes: usize,
}

impl Default for CacheLimits {
    fn default() -> Self {
        Self {
            max_images: DEFAULT_CACHE_MAX_IMAGES,
            max_bytes: DEFAULT_CACHE_MAX_MEGABYTES * BYTES_PER_MEGABYTE,
        }
    }
}

impl CacheLimits {
    /// Creates limits from user-facing values, clamping each to its range.
    #[must_use]
    pub fn new(max_images: usize, max_megabytes: usize) -> Self {
        Self {
            max_images: max_images.clamp(MIN_CACHE_MAX_IMAGES, MAX_CACHE_MAX_IMAGES),
            max_bytes: max_megabytes.clamp(MIN_CACHE_MAX_MEGABYTES, MAX_CACHE_MAX_MEGABYTES)
                * BYTES_PER_MEGABYTE,
        }
    }
}

/// What the cache knows about one page image.
#[derive(Debug, Clone, Copy)]
pub enum ImageStatus<'a> {
    /// Never requested, or evicted.
    Missing,
    /// A load is in flight.
    Loading,
    /// Decoded and ready.
    Ready(&'a ImageData),
    /// The last load failed; rendered as a broken image.
    Failed,
}

/// Statistics about cache behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub image_count: usize,
    pub total_bytes: usize,
    pub insertions: u64,
    pub evictions: u64,
    pub failures: u64,
}

/// LRU cache of decoded page images.
pub struct ImageCache {
    entries: LruCache<String, ImageData>,
    pending: HashSet<String>,
    failed: HashSet<String>,
    limits: CacheLimits,
    current_bytes: usize,
    stats: CacheStats,
    /// Bumped by `clear`; loads started earlier carry an older value.
    generation: u64,
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(CacheLimits::default())
    }
}

impl ImageCache {
    #[must_use]
    pub fn new(limits: CacheLimits) -> Self {
        let capacity = NonZeroUsize::new(limits.max_images).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            pending: HashSet::new(),
            failed: HashSet::new(),
            limits,
            current_bytes: 0,
            stats: CacheStats::default(),
            generation: 0,
        }
    }

    /// Looks up a page image without changing LRU order.
    #[must_use]
    pub fn status(&self, id: &str) -> ImageStatus<'_> {
        if let Some(data) = self.entries.peek(id) {
            ImageStatus::Ready(data)
        } else if self.pending.contains(id) {
            ImageStatus::Loading
        } else if self.failed.contains(id) {
            ImageStatus::Failed
        } else {
            ImageStatus::Missing
        }
    }

    /// Marks `id` as loading if nothing is known about it yet.
    ///
    /// Returns `true` when the caller should start a load.
    pub fn begin_load(&mut self, id: &str) -> bool {
        if self.entries.contains(id) || self.pending.contains(id) || self.failed.contains(id) {
            return false;
        }
        self.pending.insert(id.to_string());
        true
    }

    /// Marks `id` as most recently used.
    pub fn touch(&mut self, id: &str) {
        let _ = self.entries.get(id);
    }

    /// Stores a decoded image, evicting older entries to stay within budget.
    ///
    /// An image larger than the whole budget is still kept (alone) so the
    /// current page can always be displayed.
    pub fn insert(&mut self, id: String, image: ImageData) {
        self.pending.remove(&id);
        self.failed.remove(&id);

        if let Some(existing) = self.entries.pop(&id) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes());
        }

        let size = image.size_bytes();
        while (self.current_bytes + size > self.limits.max_bytes
            || self.entries.len() >= self.limits.max_images)
            && !self.entries.is_empty()
        {
            if let Some((evicted_id, evicted)) = self.entries.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes());
                self.stats.evictions += 1;
                tracing::debug!(id = %evicted_id, "evicted cached image");
            }
        }

        self.current_bytes += size;
        self.entries.put(id, image);
        self.stats.insertions += 1;
        self.stats.image_count = self.entries.len();
        self.stats.total_bytes = self.current_bytes;
    }

    /// Records a failed load.
    pub fn mark_failed(&mut self, id: String) {
        self.pending.remove(&id);
        self.failed.insert(id);
        self.stats.failures += 1;
    }

    /// Drops every entry and forgets pending and failed loads.
    ///
    /// Results of loads started before the call are rejected by
    /// [`ImageCache::awaits`] even when the same id is requested again.
    pub fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.entries.clear();
        self.pending.clear();
        self.failed.clear();
        self.current_bytes = 0;
        self.stats.image_count = 0;
        self.stats.total_bytes = 0;
    }

    /// Whether a load for `id` is still awaited.
    #[must_use]
    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.contains(id)
    }

    /// Current generation, to be attached to loads started now.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a result for `id` from a load started in `generation` should
    /// be stored.
    #[must_use]
    pub fn awaits(&self, id: &str, generation: u64) -> bool {
        generation == self.generation && self.pending.contains(id)
    }

    /// Forgets failures so the next request retries them.
    pub fn clear_failures(&mut self) {
        self.failed.clear();
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
