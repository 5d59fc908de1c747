//! Image coding module
//!
//! This module provides format-agnostic decoding into [`ImageBuffer`]s and
//! encoding back into the file's original format.
//!
//! [`ImageBuffer`]: crate::image_pipeline::range::ImageBuffer

mod reader;
mod writer;
mod standard_reader;
mod standard_writer;


pub use reader::ImageReader;
pub use writer::ImageWriter;
pub use standard_reader::StandardImageReader;
pub use standard_writer::StandardImageWriter;
