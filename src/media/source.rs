// SPDX-License-Identifier: MPL-2.0
//! Resource references: remote URL or local path.

use std::path::PathBuf;

/// Where an image or catalog lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Source {
    /// `http://` or `https://` URL.
    Remote(String),
    /// Filesystem path (`file://` prefix stripped).
    Local(PathBuf),
}

impl Source {
    /// Classifies a reference string.
    ///
    /// The scheme check is case-insensitive; anything that is not an HTTP(S)
    /// URL is treated as a path.
    #[must_use]
    pub fn parse(reference: &str) -> Self {
        let trimmed = reference.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Source::Remote(trimmed.to_string())
        } else if lower.starts_with("file://") {
            Source::Local(PathBuf::from(&trimmed["file://".len()..]))
        } else {
            Source::Local(PathBuf::from(trimmed))
        }
    }

    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Source::Remote(_))
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Remote(url) => f.write_str(url),
            Source::Local(path) => write!(f, "{}", path.display()),
        }
    }
}
