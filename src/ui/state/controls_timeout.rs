// SPDX-License-Identifier: MPL-2.0
//! Controls timeout domain type for the flip book viewer.
//!
//! This module provides a type-safe wrapper for the auto-hide timeout of the
//! viewer chrome, in seconds.

use crate::config::{
    DEFAULT_CONTROLS_TIMEOUT_SECS, MAX_CONTROLS_TIMEOUT_SECS, MIN_CONTROLS_TIMEOUT_SECS,
};

/// Controls auto-hide timeout in seconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–30 seconds).
///
/// # Example
///
/// ```
/// use flipbook::ui::state::ControlsTimeout;
///
/// let timeout = ControlsTimeout::new(5);
/// assert_eq!(timeout.value(), 5);
///
/// // Values outside range are clamped
/// let too_high = ControlsTimeout::new(100);
/// assert_eq!(too_high.value(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsTimeout(u32);

impl ControlsTimeout {
    /// Creates a new controls timeout value, clamping to valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(MIN_CONTROLS_TIMEOUT_SECS, MAX_CONTROLS_TIMEOUT_SECS))
    }

    /// Returns the value as u32.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> std::time::Duration {
        std::time::Duration::from_secs(u64::from(self.0))
    }
}

impl Default for ControlsTimeout {
    fn default() -> Self {
        Self(DEFAULT_CONTROLS_TIMEOUT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(ControlsTimeout::new(0).value(), MIN_CONTROLS_TIMEOUT_SECS);
        assert_eq!(ControlsTimeout::new(100).value(), MAX_CONTROLS_TIMEOUT_SECS);
    }

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(ControlsTimeout::new(1).value(), 1);
        assert_eq!(ControlsTimeout::new(15).value(), 15);
        assert_eq!(ControlsTimeout::new(30).value(), 30);
    }

    #[test]
    fn default_returns_expected_value() {
        assert_eq!(
            ControlsTimeout::default().value(),
            DEFAULT_CONTROLS_TIMEOUT_SECS
        );
    }

    #[test]
    fn as_duration_converts_correctly() {
        let timeout = ControlsTimeout::new(5);
        assert_eq!(timeout.as_duration(), std::time::Duration::from_secs(5));
    }
}
