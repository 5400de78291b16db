// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for the slideshow and the lightbox.
//!
//! Decoding happens on a blocking worker so the UI thread never stalls on
//! a large JPEG. Decoded pixels are wrapped in an Iced handle once and the
//! handle is reused for every subsequent render.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::path::{Path, PathBuf};

/// File extensions the decoder accepts.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Returns whether the path's extension is a decodable image format.
#[must_use]
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let lower = ext.to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

/// Decodes an image file into an Iced handle, synchronously.
pub fn load_sync(path: &Path) -> Result<ImageData> {
    if !is_supported(path) {
        return Err(Error::Image(format!(
            "unsupported image format: {}",
            path.display()
        )));
    }

    let img = image_rs::open(path).map_err(|e| Error::Image(e.to_string()))?;
    let (width, height) = img.dimensions();
    let rgba = img.into_rgba8().into_raw();
    Ok(ImageData::from_rgba(width, height, rgba))
}

/// Decodes an image file off the UI thread.
pub async fn load(path: PathBuf) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || load_sync(&path))
        .await
        .map_err(|e| Error::Image(e.to_string()))?
}
