//! Output naming and the suffix guard.
//!
//! A converted file carries `_full` or `_limited` right before its extension.
//! Files that already carry one of these suffixes are never converted again.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::image_pipeline::range::types::RangeDirection;

/// Conversion suffix found at the end of a file stem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixState {
    None,
    Full,
    Limited,
}

impl SuffixState {
    pub fn of(path: &Path) -> Self {
        let Some(stem) = path.file_stem() else {
            return SuffixState::None;
        };
        let stem = stem.to_string_lossy();
        if stem.ends_with(&suffix_for(RangeDirection::ToFull)) {
            SuffixState::Full
        } else if stem.ends_with(&suffix_for(RangeDirection::ToLimited)) {
            SuffixState::Limited
        } else {
            SuffixState::None
        }
    }

    pub fn is_converted(&self) -> bool {
        !matches!(self, SuffixState::None)
    }
}

fn suffix_for(direction: RangeDirection) -> String {
    format!("_{}", direction.token())
}

/// A path together with the suffix state inferred from its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub suffix: SuffixState,
}

impl FileEntry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let suffix = SuffixState::of(&path);
        Self { path, suffix }
    }
}

/// `<stem>_<token>.<ext>`, keeping the original extension untouched.
fn converted_file_name(input: &Path, direction: RangeDirection) -> OsString {
    let mut name = input
        .file_stem()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(suffix_for(direction));
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    name
}

/// Output beside the input: `<dir>/<stem>_<token>.<ext>`
pub fn manual_output_path(input: &Path, direction: RangeDirection) -> PathBuf {
    input.with_file_name(converted_file_name(input, direction))
}

/// Output under the collection's output directory:
/// `<output_dir>/<stem>_full.<ext>`
pub fn automatic_output_path(input: &Path, output_dir: &Path) -> PathBuf {
    output_dir.join(converted_file_name(input, RangeDirection::ToFull))
}
