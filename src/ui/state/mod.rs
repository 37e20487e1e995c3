// SPDX-License-Identifier: MPL-2.0
//! UI state value types
//!
//! Clamped newtypes for the tunable viewer settings, kept apart from the
//! widgets that consume them.

pub mod controls_timeout;
pub mod flip_duration;
pub mod swipe_threshold;

// Re-export commonly used types for convenience
pub use controls_timeout::ControlsTimeout;
pub use flip_duration::FlipDuration;
pub use swipe_threshold::SwipeThreshold;
