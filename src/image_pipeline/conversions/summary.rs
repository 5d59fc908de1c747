use std::path::PathBuf;

use tracing::{error, info};

use crate::image_pipeline::common::error::ConversionError;

#[derive(Debug)]
pub struct FileFailure {
    pub input: PathBuf,
    pub error: ConversionError,
}

/// Per-file outcomes of one batch, in processing order
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub converted: Vec<(PathBuf, PathBuf)>,
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<FileFailure>,
}

impl BatchSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_converted(&mut self, input: PathBuf, output: PathBuf) {
        self.converted.push((input, output));
    }

    pub fn record_skipped(&mut self, input: PathBuf) {
        self.skipped.push(input);
    }

    pub fn record_failure(&mut self, input: PathBuf, error: ConversionError) {
        error!("{}", error);
        self.failed.push(FileFailure { input, error });
    }

    pub fn merge(&mut self, other: BatchSummary) {
        self.converted.extend(other.converted);
        self.skipped.extend(other.skipped);
        self.failed.extend(other.failed);
    }

    pub fn attempted(&self) -> usize {
        self.converted.len() + self.failed.len()
    }

    /// True when files were attempted and every one of them failed
    pub fn all_failed(&self) -> bool {
        self.converted.is_empty() && !self.failed.is_empty()
    }

    pub fn log(&self) {
        info!(
            converted = self.converted.len(),
            skipped = self.skipped.len(),
            failed = self.failed.len(),
            "Batch complete"
        );
    }
}

/// How an automatic run ended
#[derive(Debug)]
pub enum AutoOutcome {
    /// No volume had an images folder
    NoVolumesFound,
    /// Every image on every folder was already converted
    UpToDate,
    /// The user declined every folder that had candidates
    Declined,
    Completed(BatchSummary),
}

impl AutoOutcome {
    pub fn summary(&self) -> Option<&BatchSummary> {
        match self {
            AutoOutcome::Completed(summary) => Some(summary),
            _ => None,
        }
    }
}
