//! PNG export of the pixel buffer.

use std::path::Path;

use image::{ImageBuffer, Rgba};
use thiserror::Error;

use crate::buffer::PixelBuffer;

/// Why an export failed. Rendering itself is total; only the final write
/// can go wrong.
#[derive(Debug, Error)]
pub enum ExportError {
    /// No pixel buffer exists (last resize produced a zero-area viewport).
    #[error("no pixel buffer to export")]
    NoBuffer,
    /// The destination could not be written.
    #[error("failed to write PNG: {0}")]
    Write(#[from] image::ImageError),
}

/// Write the buffer's pixels to `path` as an RGBA8 PNG.
///
/// On success the file is fully written; on failure the error is returned
/// to the caller and no retry is attempted.
pub fn write_png(buffer: &PixelBuffer, path: &Path) -> Result<(), ExportError> {
    let img: ImageBuffer<Rgba<u8>, _> = ImageBuffer::from_raw(
        buffer.width(),
        buffer.height(),
        buffer.bytes().to_vec(),
    )
    .expect("buffer byte length matches its dimensions");
    img.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
