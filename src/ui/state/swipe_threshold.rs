// SPDX-License-Identifier: MPL-2.0
//! Swipe distance threshold domain type.

use crate::config::{DEFAULT_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD, MIN_SWIPE_THRESHOLD};

/// Horizontal finger travel, in logical pixels, that a gesture must exceed
/// to turn a page. Always positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a new threshold, clamping to the 10–400 px range.
    ///
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(MIN_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD))
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(SwipeThreshold::new(1.0).value(), MIN_SWIPE_THRESHOLD);
        assert_eq!(SwipeThreshold::new(9000.0).value(), MAX_SWIPE_THRESHOLD);
        assert_eq!(SwipeThreshold::new(75.0).value(), 75.0);
    }

    #[test]
    fn nan_falls_back_to_default() {
        assert_eq!(SwipeThreshold::new(f32::NAN), SwipeThreshold::default());
    }
}
