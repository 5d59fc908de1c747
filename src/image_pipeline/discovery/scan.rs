use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::conversions::types::ConversionConfig;
use crate::image_pipeline::discovery::naming::{FileEntry, automatic_output_path};
use crate::image_pipeline::discovery::volumes::VolumeSource;

/// An `IMAGES` folder found on a volume, with where its outputs go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFolder {
    pub volume: PathBuf,
    pub images_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl ImageFolder {
    fn new(volume: PathBuf, config: &ConversionConfig) -> Self {
        let images_dir = volume.join(&config.images_dir_name);
        let output_dir = volume.join(&config.output_dir_name);
        Self {
            volume,
            images_dir,
            output_dir,
        }
    }

    pub fn output_path(&self, input: &Path) -> PathBuf {
        automatic_output_path(input, &self.output_dir)
    }
}

pub fn find_image_folders<V: VolumeSource + ?Sized>(
    volumes: &V,
    config: &ConversionConfig,
) -> Result<Vec<ImageFolder>> {
    info!("Looking for {} folder...", config.images_dir_name);

    let mut folders = Vec::new();
    for volume in volumes.list_removable_volumes()? {
        let folder = ImageFolder::new(volume, config);
        if folder.images_dir.is_dir() {
            info!("Found {} folder at {}", config.images_dir_name, folder.images_dir.display());
            folders.push(folder);
        } else {
            debug!("No {} folder on {}", config.images_dir_name, folder.volume.display());
        }
    }

    Ok(folders)
}

/// Lists files directly inside the folder that still need converting.
///
/// Hidden files, unsupported extensions, files already bearing a conversion
/// suffix and files whose output exists are left out.
pub fn list_candidates(folder: &ImageFolder, config: &ConversionConfig) -> Result<Vec<FileEntry>> {
    let mut candidates = Vec::new();

    for entry in std::fs::read_dir(&folder.images_dir)? {
        let entry = entry?;
        let path = entry.path();

        if entry.file_name().to_string_lossy().starts_with('.') || !path.is_file() {
            continue;
        }
        if !config.accepts_extension(&path) {
            continue;
        }

        let file = FileEntry::new(path);
        if file.suffix.is_converted() {
            debug!("Skipping converted file {}", file.path.display());
            continue;
        }
        if folder.output_path(&file.path).exists() {
            info!("Skipping {}", file.path.display());
            continue;
        }

        candidates.push(file);
    }

    candidates.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(candidates)
}
