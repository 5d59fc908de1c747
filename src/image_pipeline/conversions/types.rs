//! Conversion configuration types

use std::path::Path;

/// Configuration for range conversion batches
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Folder name looked for at the root of each volume
    pub images_dir_name: String,
    /// Sibling folder, next to the images folder, receiving automatic outputs
    pub output_dir_name: String,
    /// File extensions picked up by automatic discovery, lowercase
    pub extensions: Vec<String>,
    /// Quality used when writing JPEG outputs (1-100)
    pub jpeg_quality: u8,
    /// Whether to skip a manual conversion whose output already exists
    pub skip_existing: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            images_dir_name: "IMAGES".to_string(),
            output_dir_name: "full".to_string(),
            extensions: vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()],
            jpeg_quality: 95,
            skip_existing: true,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }

    /// Case-insensitive match of the path's extension against `extensions`
    pub fn accepts_extension(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| *allowed == ext))
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    images_dir_name: Option<String>,
    output_dir_name: Option<String>,
    extensions: Option<Vec<String>>,
    jpeg_quality: Option<u8>,
    skip_existing: Option<bool>,
}

impl ConversionConfigBuilder {
    pub fn images_dir_name(mut self, name: impl Into<String>) -> Self {
        self.images_dir_name = Some(name.into());
        self
    }

    pub fn output_dir_name(mut self, name: impl Into<String>) -> Self {
        self.output_dir_name = Some(name.into());
        self
    }

    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = Some(
            extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_ascii_lowercase())
                .collect(),
        );
        self
    }

    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = Some(quality.clamp(1, 100));
        self
    }

    pub fn skip_existing(mut self, skip: bool) -> Self {
        self.skip_existing = Some(skip);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            images_dir_name: self.images_dir_name.unwrap_or(default.images_dir_name),
            output_dir_name: self.output_dir_name.unwrap_or(default.output_dir_name),
            extensions: self.extensions.unwrap_or(default.extensions),
            jpeg_quality: self.jpeg_quality.unwrap_or(default.jpeg_quality),
            skip_existing: self.skip_existing.unwrap_or(default.skip_existing),
        }
    }
}
