// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::Catalog;
use crate::error::Error;
use crate::media::ImageData;
use crate::ui::{flipbook, gallery};
use iced::{event, window};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Viewer(flipbook::Message),
    /// Periodic tick driving the flip animation and the controls timer.
    Tick(Instant),
    /// Native event received while the gallery is shown.
    WindowEvent {
        window: window::Id,
        event: event::Event,
    },
    /// Result of loading the configured catalog.
    CatalogLoaded(Result<Catalog, Error>),
    /// Result of fetching and decoding one page image.
    ImageLoaded {
        id: String,
        /// Cache generation the load was started in.
        generation: u64,
        result: Result<ImageData, Error>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FLIPBOOK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Catalog path or URL. Takes precedence over `[catalog] source`.
    pub catalog: Option<String>,
    /// Open the flip book right after startup instead of the gallery.
    pub open_viewer: bool,
}
