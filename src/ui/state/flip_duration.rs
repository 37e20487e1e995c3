// SPDX-License-Identifier: MPL-2.0
//! Page turn duration domain type.

use crate::config::{DEFAULT_FLIP_DURATION_MS, MAX_FLIP_DURATION_MS, MIN_FLIP_DURATION_MS};
use std::time::Duration;

/// Duration of one page turn, clamped to 50–2000 ms.
///
/// The page index is committed when this much time has elapsed since the
/// navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipDuration(u64);

impl FlipDuration {
    /// Creates a new flip duration, clamping to valid range.
    #[must_use]
    pub fn from_millis(value: u64) -> Self {
        Self(value.clamp(MIN_FLIP_DURATION_MS, MAX_FLIP_DURATION_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for FlipDuration {
    fn default() -> Self {
        Self(DEFAULT_FLIP_DURATION_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_millis_clamps() {
        assert_eq!(FlipDuration::from_millis(0).as_millis(), MIN_FLIP_DURATION_MS);
        assert_eq!(
            FlipDuration::from_millis(60_000).as_millis(),
            MAX_FLIP_DURATION_MS
        );
        assert_eq!(FlipDuration::from_millis(420).as_millis(), 420);
    }

    #[test]
    fn default_is_three_hundred_millis() {
        assert_eq!(
            FlipDuration::default().as_duration(),
            Duration::from_millis(300)
        );
    }
}
