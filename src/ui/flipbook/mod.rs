// SPDX-License-Identifier: MPL-2.0
//! Full-window flip book viewer.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── navigation  - Current page and the in-flight flip
//!     ├── controls    - Auto-hiding chrome
//!     ├── swipe       - Touch gesture recognition
//!     ├── page_view   - Sheet, fold animation, caption
//!     └── indicators  - Page dots
//! ```

pub mod component;
pub mod controls;
pub mod indicators;
pub mod navigation;
pub mod page_view;
pub mod swipe;

pub use component::{Effect, Message, Settings, State, ViewEnv};
