//! Image processing pipeline module
//!
//! This module provides a structured approach to full/limited range conversion,
//! with separate modules for range mapping, image coding, file discovery and
//! conversion orchestration.

pub mod common;
pub mod range;
pub mod codec;
pub mod discovery;
pub mod prompt;
pub mod conversions;

pub use common::{
    ConversionError,
    Result,
};

pub use range::{
    ImageBuffer,
    PixelRange,
    RangeDirection,
    convert_range,
    map_sample,
};

pub use codec::{
    ImageReader,
    ImageWriter,
    StandardImageReader,
    StandardImageWriter,
};

pub use discovery::{
    FileEntry,
    MountDirectory,
    NoVolumes,
    SuffixState,
    VolumeSource,
    default_volume_source,
};

pub use prompt::{
    AssumeYes,
    Prompt,
    TerminalPrompt,
};

pub use conversions::{
    AutoOutcome,
    BatchSummary,
    ConversionConfig,
    ConversionConfigBuilder,
    RangeConversionPipeline,
};
