//! Image reader implementation using the `image` crate.
//!
//! The format is detected from the file contents. Gray, RGB and RGBA 8-bit
//! images are passed through unchanged; gray+alpha is widened to RGBA.
//! Anything with deeper samples is rejected, since range conversion is only
//! defined for 8-bit data.

use image::DynamicImage;
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::codec::reader::ImageReader;
use crate::image_pipeline::range::types::ImageBuffer;

pub struct StandardImageReader;

impl ImageReader for StandardImageReader {
    fn read_image(&self, data: &[u8]) -> Result<ImageBuffer> {
        debug!("Decoding image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| ConversionError::InvalidBuffer(e.to_string()))?;

        let height = decoded.height() as usize;
        let width = decoded.width() as usize;

        let (channels, samples) = match decoded {
            DynamicImage::ImageLuma8(buffer) => (1, buffer.into_raw()),
            DynamicImage::ImageRgb8(buffer) => (3, buffer.into_raw()),
            DynamicImage::ImageRgba8(buffer) => (4, buffer.into_raw()),
            DynamicImage::ImageLumaA8(buffer) => {
                (4, DynamicImage::ImageLumaA8(buffer).to_rgba8().into_raw())
            }
            other => {
                return Err(ConversionError::InvalidBuffer(format!(
                    "expected 8-bit unsigned samples, got {:?}",
                    other.color()
                )));
            }
        };

        debug!("Decoded image: {}x{}x{}", height, width, channels);

        ImageBuffer::new(height, width, channels, samples)
    }
}
