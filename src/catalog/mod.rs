// SPDX-License-Identifier: MPL-2.0
//! Page catalog: the ordered, immutable list of pages the flip book presents.
//!
//! A catalog is either the built-in sample or a TOML document read from disk
//! or fetched over HTTP:
//!
//! ```toml
//! project_name = "Holiday 2024"
//!
//! [[pages]]
//! id = "cover"
//! image = "photos/cover.jpg"
//! title = "Arrival"
//! description = "First morning by the lake"
//!
//! [[pages]]
//! id = "beach"
//! image = "https://example.com/beach.jpg"
//! ```
//!
//! Relative image paths in a catalog file are resolved against the file's
//! directory.

mod sample;

use crate::error::{Error, Result};
use crate::media::{http, Source};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// One displayable unit of the flip book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Unique identifier within the catalog.
    pub id: String,
    /// Image reference: `http(s)://` URL, `file://` URL or filesystem path.
    #[serde(alias = "image_url")]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Page {
    /// Parsed image source for this page.
    #[must_use]
    pub fn source(&self) -> Source {
        Source::parse(&self.image)
    }
}

/// A named, ordered sequence of pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub project_name: String,
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

impl Catalog {
    /// The built-in "Architectural Design Portfolio" sample.
    #[must_use]
    pub fn sample() -> Self {
        sample::catalog()
    }

    /// Parses and validates a catalog document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let catalog: Catalog =
            toml::from_str(content).map_err(|e| Error::Catalog(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks that every page id is non-empty and unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.pages.len());
        for page in &self.pages {
            if page.id.trim().is_empty() {
                return Err(Error::Catalog("page with empty id".to_string()));
            }
            if !seen.insert(page.id.as_str()) {
                return Err(Error::Catalog(format!("duplicate page id `{}`", page.id)));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Rewrites relative local image paths so they are rooted at `base`.
    fn resolve_relative_images(&mut self, base: &Path) {
        for page in &mut self.pages {
            if let Source::Local(path) = page.source() {
                if path.is_relative() {
                    page.image = base.join(path).to_string_lossy().into_owned();
                }
            }
        }
    }

    /// Rewrites relative image references against the URL of a remote
    /// catalog. References with their own scheme and absolute paths are kept.
    fn resolve_relative_urls(&mut self, base: &reqwest::Url) -> Result<()> {
        for page in &mut self.pages {
            let Source::Local(path) = page.source() else {
                continue;
            };
            if path.has_root() || reqwest::Url::parse(&page.image).is_ok() {
                continue;
            }
            let resolved = base.join(page.image.trim()).map_err(|err| {
                Error::Catalog(format!("page '{}': bad image reference: {err}", page.id))
            })?;
            page.image = resolved.into();
        }
        Ok(())
    }
}

/// Loads a catalog file from disk.
pub fn load_from_path(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)?;
    let mut catalog = Catalog::from_toml_str(&content)?;
    if let Some(parent) = path.parent() {
        catalog.resolve_relative_images(parent);
    }
    tracing::info!(
        path = %path.display(),
        pages = catalog.len(),
        "loaded catalog file"
    );
    Ok(catalog)
}

/// Downloads and parses a catalog document.
pub async fn fetch(url: &str) -> Result<Catalog> {
    let base = reqwest::Url::parse(url)
        .map_err(|err| Error::Catalog(format!("invalid catalog URL {url}: {err}")))?;
    let content = http::get_text(url).await?;
    let mut catalog = Catalog::from_toml_str(&content)?;
    catalog.resolve_relative_urls(&base)?;
    tracing::info!(url, pages = catalog.len(), "fetched remote catalog");
    Ok(catalog)
}

/// Loads a catalog from either a local file or an HTTP URL.
pub async fn load(source: Source) -> Result<Catalog> {
    match source {
        Source::Remote(url) => fetch(&url).await,
        Source::Local(path) => load_from_path(&path),
    }
}
