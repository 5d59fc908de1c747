//! Range conversion data types

use std::fmt;
use std::str::FromStr;

use crate::image_pipeline::common::error::{ConversionError, Result};

/// Channel counts an [`ImageBuffer`] may carry: gray, RGB, RGBA.
pub const SUPPORTED_CHANNELS: [usize; 3] = [1, 3, 4];

/// Decoded 8-bit image data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    /// Height of the image in pixels
    pub height: usize,
    /// Width of the image in pixels
    pub width: usize,
    /// Samples per pixel (1, 3 or 4)
    pub channels: usize,
    /// Bits per sample as reported by the decoder
    pub bits_per_sample: u32,
    /// Row-major interleaved samples, `height * width * channels` long
    pub data: Vec<u8>,
}

impl ImageBuffer {
    /// Builds an 8-bit buffer, checking that the shape matches the data.
    pub fn new(height: usize, width: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        let image = Self {
            height,
            width,
            channels,
            bits_per_sample: 8,
            data,
        };
        image.validate()?;
        Ok(image)
    }

    pub fn validate(&self) -> Result<()> {
        if self.height == 0 || self.width == 0 || self.channels == 0 {
            return Err(ConversionError::InvalidBuffer(format!(
                "zero dimension in shape {}x{}x{}",
                self.height, self.width, self.channels
            )));
        }

        if !SUPPORTED_CHANNELS.contains(&self.channels) {
            return Err(ConversionError::InvalidBuffer(format!(
                "unsupported channel count {}",
                self.channels
            )));
        }

        if self.bits_per_sample != 8 {
            return Err(ConversionError::InvalidBuffer(format!(
                "expected 8-bit unsigned samples, got {} bits",
                self.bits_per_sample
            )));
        }

        let expected = self.height * self.width * self.channels;
        if self.data.len() != expected {
            return Err(ConversionError::InvalidBuffer(format!(
                "expected {} samples for {}x{}x{}, got {}",
                expected,
                self.height,
                self.width,
                self.channels,
                self.data.len()
            )));
        }

        Ok(())
    }
}

/// Inclusive span of 8-bit sample values used by a range convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRange {
    pub min: u8,
    pub max: u8,
}

impl PixelRange {
    /// Full range, 0-255
    pub const FULL: PixelRange = PixelRange { min: 0, max: 255 };
    /// Limited/studio range, 16-235
    pub const LIMITED: PixelRange = PixelRange { min: 16, max: 235 };

    pub fn span(&self) -> u32 {
        u32::from(self.max - self.min)
    }

    pub fn contains(&self, value: u8) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Direction of a range conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeDirection {
    /// Limited (16-235) to full (0-255)
    ToFull,
    /// Full (0-255) to limited (16-235)
    ToLimited,
}

impl RangeDirection {
    /// Range the input samples are expected to be in
    pub fn source(&self) -> PixelRange {
        match self {
            RangeDirection::ToFull => PixelRange::LIMITED,
            RangeDirection::ToLimited => PixelRange::FULL,
        }
    }

    /// Range the output samples end up in
    pub fn target(&self) -> PixelRange {
        match self {
            RangeDirection::ToFull => PixelRange::FULL,
            RangeDirection::ToLimited => PixelRange::LIMITED,
        }
    }

    /// Command-line token, also used as the output filename suffix
    pub fn token(&self) -> &'static str {
        match self {
            RangeDirection::ToFull => "full",
            RangeDirection::ToLimited => "limited",
        }
    }
}

impl fmt::Display for RangeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for RangeDirection {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "full" => Ok(RangeDirection::ToFull),
            "limited" => Ok(RangeDirection::ToLimited),
            other => Err(ConversionError::InvalidDirection(other.to_string())),
        }
    }
}
