//! Removable volume enumeration.
//!
//! Only the listing of mount roots is platform specific; everything after it
//! works on plain paths.

use std::path::PathBuf;

use tracing::debug;

use crate::image_pipeline::common::error::Result;

pub trait VolumeSource {
    fn list_removable_volumes(&self) -> Result<Vec<PathBuf>>;
}

/// Treats every visible subdirectory of `root` as a mounted volume.
#[derive(Debug, Clone)]
pub struct MountDirectory {
    root: PathBuf,
}

impl MountDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl VolumeSource for MountDirectory {
    fn list_removable_volumes(&self) -> Result<Vec<PathBuf>> {
        debug!("Listing volumes under {}", self.root.display());

        let mut volumes = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }
            let path = entry.path();
            if path.is_dir() {
                volumes.push(path);
            }
        }

        volumes.sort();
        Ok(volumes)
    }
}

/// Volume source for platforms without removable media support.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVolumes;

impl VolumeSource for NoVolumes {
    fn list_removable_volumes(&self) -> Result<Vec<PathBuf>> {
        Ok(Vec::new())
    }
}

#[cfg(target_os = "macos")]
pub fn default_volume_source() -> Box<dyn VolumeSource> {
    Box::new(MountDirectory::new("/Volumes"))
}

#[cfg(not(target_os = "macos"))]
pub fn default_volume_source() -> Box<dyn VolumeSource> {
    tracing::warn!("Automatic volume discovery is only supported on macOS");
    Box::new(NoVolumes)
}

impl<T: VolumeSource + ?Sized> VolumeSource for Box<T> {
    fn list_removable_volumes(&self) -> Result<Vec<PathBuf>> {
        (**self).list_removable_volumes()
    }
}
