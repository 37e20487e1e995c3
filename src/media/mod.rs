// SPDX-License-Identifier: MPL-2.0
//! Page image loading: source classification, HTTP transport, decoding and
//! the shared decoded-image cache.

pub mod cache;
pub mod http;
pub mod image;
pub mod source;

pub use cache::{CacheLimits, ImageCache, ImageStatus};
pub use image::{load_image, ImageData};
pub use source::Source;
