//! File discovery module
//!
//! Naming policy for converted files, the removable-volume capability
//! interface, and listing of conversion candidates inside `IMAGES` folders.

pub mod naming;
pub mod volumes;
pub mod scan;


pub use naming::{FileEntry, SuffixState, automatic_output_path, manual_output_path};
pub use volumes::{MountDirectory, NoVolumes, VolumeSource, default_volume_source};
pub use scan::{ImageFolder, find_image_folders, list_candidates};
