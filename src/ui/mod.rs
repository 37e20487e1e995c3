// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`gallery`] - Landing page with the preview grid and the open button
//! - [`flipbook`] - Full-window page viewer with flip transitions
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Validated value types for viewer settings
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod flipbook;
pub mod gallery;
pub mod state;
pub mod styles;
pub mod theming;
