use std::io::Write;

use image::ImageFormat;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::conversions::types::ConversionConfig;
use crate::image_pipeline::range::types::ImageBuffer;

pub trait ImageWriter {
    fn write_image(
        &self,
        image: &ImageBuffer,
        format: ImageFormat,
        output: &mut dyn Write,
        config: &ConversionConfig,
    ) -> Result<()>;
}
