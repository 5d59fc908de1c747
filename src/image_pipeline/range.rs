//! Range mapping module
//!
//! This module rescales 8-bit image samples between full range (0-255)
//! and limited/studio range (16-235).

mod mapper;
pub mod types;

#[cfg(test)]
mod tests;

pub use mapper::{convert_range, map_sample};
pub use types::{ImageBuffer, PixelRange, RangeDirection};
