// SPDX-License-Identifier: MPL-2.0
//! `flipbook` is a page-turning image gallery built with the Iced GUI
//! framework.
//!
//! A gallery screen previews the pages of a catalog; the flip book viewer
//! shows them one at a time with an animated page turn, auto-hiding
//! controls and keyboard, click and swipe navigation.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
