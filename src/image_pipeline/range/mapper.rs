//! Per-sample affine rescaling between pixel ranges.
//!
//! Samples are clamped to the source range, then mapped with
//! `(v - src.min) * dst.span / src.span + dst.min`, rounded half away from
//! zero in integer arithmetic. For the 0-255 / 16-235 pair no exact ties
//! occur, so the result is always the nearest integer.

use tracing::{debug, warn};

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::range::types::{ImageBuffer, RangeDirection};

/// Maps a single sample in the given direction.
pub fn map_sample(value: u8, direction: RangeDirection) -> u8 {
    let source = direction.source();
    let target = direction.target();

    let clamped = value.clamp(source.min, source.max);
    let numerator = u32::from(clamped - source.min) * target.span();
    let denominator = source.span();
    let scaled = (2 * numerator + denominator) / (2 * denominator);

    let mapped = (scaled + u32::from(target.min)).min(u32::from(target.max));
    mapped as u8
}

fn lookup_table(direction: RangeDirection) -> [u8; 256] {
    let mut table = [0u8; 256];
    for (value, slot) in table.iter_mut().enumerate() {
        *slot = map_sample(value as u8, direction);
    }
    table
}

/// Rescales every sample of `image`, alpha included, into a new buffer.
pub fn convert_range(image: &ImageBuffer, direction: RangeDirection) -> Result<ImageBuffer> {
    image.validate()?;

    let source = direction.source();
    let out_of_range = image.data.iter().filter(|&&v| !source.contains(v)).count();
    if out_of_range > 0 {
        warn!(
            "{} samples outside ({}-{}) will be clipped",
            out_of_range, source.min, source.max
        );
    }

    let table = lookup_table(direction);
    let data: Vec<u8> = image.data.iter().map(|&v| table[v as usize]).collect();

    debug!(
        "Mapped {}x{}x{} buffer {}",
        image.height, image.width, image.channels, direction
    );

    Ok(ImageBuffer {
        height: image.height,
        width: image.width,
        channels: image.channels,
        bits_per_sample: image.bits_per_sample,
        data,
    })
}
