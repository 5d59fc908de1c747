//! Conversion driver module
//!
//! This module orchestrates manual and automatic range conversion batches.

mod pipeline;
mod summary;
pub mod types;


pub use pipeline::RangeConversionPipeline;
pub use summary::{AutoOutcome, BatchSummary, FileFailure};
pub use types::{ConversionConfig, ConversionConfigBuilder};
