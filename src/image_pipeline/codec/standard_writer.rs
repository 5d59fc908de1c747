use std::io::{Cursor, Write};

use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, ImageEncoder, ImageFormat};
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::codec::writer::ImageWriter;
use crate::image_pipeline::conversions::types::ConversionConfig;
use crate::image_pipeline::range::types::ImageBuffer;

pub struct StandardImageWriter;

fn color_type(channels: usize) -> Result<ColorType> {
    match channels {
        1 => Ok(ColorType::L8),
        3 => Ok(ColorType::Rgb8),
        4 => Ok(ColorType::Rgba8),
        other => Err(ConversionError::InvalidBuffer(format!(
            "unsupported channel count {}",
            other
        ))),
    }
}

impl ImageWriter for StandardImageWriter {
    fn write_image(
        &self,
        image: &ImageBuffer,
        format: ImageFormat,
        output: &mut dyn Write,
        config: &ConversionConfig,
    ) -> Result<()> {
        debug!("Encoding {:?} image: {}x{}", format, image.width, image.height);

        image.validate()?;
        let color = color_type(image.channels)?;
        let width = image.width as u32;
        let height = image.height as u32;

        let mut buffer = Vec::new();

        match format {
            ImageFormat::Jpeg => {
                JpegEncoder::new_with_quality(&mut buffer, config.jpeg_quality)
                    .write_image(&image.data, width, height, color.into())
                    .map_err(|e| ConversionError::InvalidBuffer(e.to_string()))?;
            }
            _ => {
                image::write_buffer_with_format(
                    &mut Cursor::new(&mut buffer),
                    &image.data,
                    width,
                    height,
                    color,
                    format,
                )
                .map_err(|e| ConversionError::InvalidBuffer(e.to_string()))?;
            }
        }

        output.write_all(&buffer)?;

        debug!("Encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
