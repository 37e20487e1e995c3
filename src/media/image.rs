// SPDX-License-Identifier: MPL-2.0
//! Image fetching and decoding.
//!
//! Bytes come from the filesystem or over HTTP; decoding happens on a blocking
//! worker so large photographs never stall the UI thread.

use super::{http, Source};
use crate::config::THUMBNAIL_MAX_SIDE;
use crate::error::{Error, Result};
use iced::widget::image;

/// A decoded page image ready for rendering.
#[derive(Debug, Clone)]
pub struct ImageData {
    /// Full resolution handle, used by the flip book.
    pub handle: image::Handle,
    /// Downscaled handle, used by the preview grid.
    pub thumbnail: image::Handle,
    pub width: u32,
    pub height: u32,
    size_bytes: usize,
}

impl ImageData {
    /// Builds both handles from a decoded image.
    #[must_use]
    pub fn from_dynamic(img: &image_rs::DynamicImage) -> Self {
        let full = img.to_rgba8();
        let (width, height) = full.dimensions();

        let thumb = if width > THUMBNAIL_MAX_SIDE || height > THUMBNAIL_MAX_SIDE {
            img.thumbnail(THUMBNAIL_MAX_SIDE, THUMBNAIL_MAX_SIDE).to_rgba8()
        } else {
            full.clone()
        };
        let (thumb_width, thumb_height) = thumb.dimensions();

        let size_bytes = rgba_len(width, height) + rgba_len(thumb_width, thumb_height);

        Self {
            handle: image::Handle::from_rgba(width, height, full.into_raw()),
            thumbnail: image::Handle::from_rgba(thumb_width, thumb_height, thumb.into_raw()),
            width,
            height,
            size_bytes,
        }
    }

    /// Approximate memory held by the decoded pixels.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.size_bytes
    }
}

fn rgba_len(width: u32, height: u32) -> usize {
    (width as usize) * (height as usize) * 4
}

/// Decodes encoded bytes (PNG, JPEG, WebP, ...) into [`ImageData`].
pub fn decode(bytes: &[u8]) -> Result<ImageData> {
    let img = image_rs::load_from_memory(bytes)?;
    if img.width() == 0 || img.height() == 0 {
        return Err(Error::Image("image has empty dimensions".into()));
    }
    Ok(ImageData::from_dynamic(&img))
}

/// Reads the raw bytes behind a source.
pub async fn fetch_bytes(source: &Source) -> Result<Vec<u8>> {
    match source {
        Source::Remote(url) => http::get_bytes(url).await,
        Source::Local(path) => Ok(std::fs::read(path)?),
    }
}

/// Fetches and decodes the image behind `source`.
pub async fn load_image(source: Source) -> Result<ImageData> {
    let bytes = fetch_bytes(&source).await?;
    let decoded = tokio::task::spawn_blocking(move || decode(&bytes))
        .await
        .map_err(|e| Error::Image(format!("decoder task failed: {e}")))??;
    tracing::debug!(
        %source,
        width = decoded.width,
        height = decoded.height,
        "decoded image"
    );
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;
    use tempfile::tempdir;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));
        let mut out = Cursor::new(Vec::new());
        image
            .write_to(&mut out, ImageFormat::Png)
            .expect("encode png");
        out.into_inner()
    }

    #[test]
    fn decode_png_returns_expected_dimensions() {
        let data = decode(&png_bytes(4, 2)).expect("decode");
        assert_eq!((data.width, data.height), (4, 2));
        // Small images reuse the full size pixels for the thumbnail
        assert_eq!(data.size_bytes(), 2 * 4 * 2 * 4);
    }

    #[test]
    fn large_images_get_a_smaller_thumbnail() {
        let data = decode(&png_bytes(THUMBNAIL_MAX_SIDE * 2, 10)).expect("decode");
        let full = rgba_len(THUMBNAIL_MAX_SIDE * 2, 10);
        assert!(data.size_bytes() < full * 2);
    }

    #[test]
    fn decode_garbage_is_image_error() {
        assert!(matches!(decode(b"not an image"), Err(Error::Image(_))));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn load_image_reads_local_files() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("page.png");
        std::fs::write(&path, png_bytes(3, 3)).expect("write png");

        let data = load_image(Source::Local(path)).await.expect("load");
        assert_eq!((data.width, data.height), (3, 3));
    }

    #[tokio::test]
    async fn load_image_missing_file_is_io_error() {
        let result = load_image(Source::Local("/no/such/page.png".into())).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
