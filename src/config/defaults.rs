// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Flip**: Page turn animation duration
//! - **Controls**: Auto-hide timeout for the viewer chrome
//! - **Swipe**: Touch gesture distance threshold
//! - **Prefetch**: Neighbour pages loaded ahead of time
//! - **Cache**: Decoded image cache bounds

// ==========================================================================
// Flip Animation Defaults
// ==========================================================================

/// Default duration of a page turn (in milliseconds).
pub const DEFAULT_FLIP_DURATION_MS: u64 = 300;

/// Minimum page turn duration (in milliseconds).
pub const MIN_FLIP_DURATION_MS: u64 = 50;

/// Maximum page turn duration (in milliseconds).
pub const MAX_FLIP_DURATION_MS: u64 = 2000;

// ==========================================================================
// Controls Timeout Defaults
// ==========================================================================

/// Default auto-hide timeout for the viewer controls (in seconds).
pub const DEFAULT_CONTROLS_TIMEOUT_SECS: u32 = 3;

/// Minimum controls timeout (in seconds).
pub const MIN_CONTROLS_TIMEOUT_SECS: u32 = 1;

/// Maximum controls timeout (in seconds).
pub const MAX_CONTROLS_TIMEOUT_SECS: u32 = 30;

// ==========================================================================
// Swipe Defaults
// ==========================================================================

/// Default horizontal distance a finger must travel to turn a page (logical pixels).
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Minimum swipe threshold (logical pixels).
pub const MIN_SWIPE_THRESHOLD: f32 = 10.0;

/// Maximum swipe threshold (logical pixels).
pub const MAX_SWIPE_THRESHOLD: f32 = 400.0;

// ==========================================================================
// Prefetch Defaults
// ==========================================================================

/// Default number of pages prefetched on each side of the current page.
pub const DEFAULT_PREFETCH_RADIUS: usize = 1;

/// Maximum prefetch radius.
pub const MAX_PREFETCH_RADIUS: usize = 4;

// ==========================================================================
// Image Cache Defaults
// ==========================================================================

/// Default maximum number of decoded images kept in memory.
pub const DEFAULT_CACHE_MAX_IMAGES: usize = 24;

/// Minimum number of cached images.
pub const MIN_CACHE_MAX_IMAGES: usize = 4;

/// Maximum number of cached images.
pub const MAX_CACHE_MAX_IMAGES: usize = 128;

/// Default memory budget for decoded images (in megabytes).
pub const DEFAULT_CACHE_MAX_MEGABYTES: usize = 256;

/// Minimum memory budget (in megabytes).
pub const MIN_CACHE_MAX_MEGABYTES: usize = 32;

/// Maximum memory budget (in megabytes).
pub const MAX_CACHE_MAX_MEGABYTES: usize = 2048;

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Bounding box for preview grid thumbnails (in pixels).
pub const THUMBNAIL_MAX_SIDE: u32 = 480;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_sit_inside_their_ranges() {
        assert!((MIN_FLIP_DURATION_MS..=MAX_FLIP_DURATION_MS).contains(&DEFAULT_FLIP_DURATION_MS));
        assert!(
            (MIN_CONTROLS_TIMEOUT_SECS..=MAX_CONTROLS_TIMEOUT_SECS)
                .contains(&DEFAULT_CONTROLS_TIMEOUT_SECS)
        );
        assert!((MIN_SWIPE_THRESHOLD..=MAX_SWIPE_THRESHOLD).contains(&DEFAULT_SWIPE_THRESHOLD));
        assert!(DEFAULT_PREFETCH_RADIUS <= MAX_PREFETCH_RADIUS);
        assert!(
            (MIN_CACHE_MAX_IMAGES..=MAX_CACHE_MAX_IMAGES).contains(&DEFAULT_CACHE_MAX_IMAGES)
        );
        assert!(
            (MIN_CACHE_MAX_MEGABYTES..=MAX_CACHE_MAX_MEGABYTES)
                .contains(&DEFAULT_CACHE_MAX_MEGABYTES)
        );
    }
}
