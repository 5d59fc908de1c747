use std::io::Write;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::{error, info, instrument};

use crate::image_pipeline::{
    codec::{ImageReader, ImageWriter, StandardImageReader, StandardImageWriter},
    common::error::{ConversionError, Result},
    conversions::{
        summary::{AutoOutcome, BatchSummary},
        types::ConversionConfig,
    },
    discovery::{
        FileEntry, ImageFolder, VolumeSource, find_image_folders, list_candidates,
        manual_output_path,
    },
    prompt::Prompt,
    range::{ImageBuffer, RangeDirection, convert_range},
};

pub struct RangeConversionPipeline<R: ImageReader, W: ImageWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl RangeConversionPipeline<StandardImageReader, StandardImageWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: StandardImageReader,
            writer: StandardImageWriter,
            config,
        }
    }
}

impl<R: ImageReader, W: ImageWriter> RangeConversionPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn decode_and_map(
        &self,
        input_data: &[u8],
        source: &Path,
        direction: RangeDirection,
    ) -> Result<ImageBuffer> {
        let decode_failure = |e: ConversionError| ConversionError::DecodeFailure {
            path: source.to_path_buf(),
            reason: e.to_string(),
        };

        let image = {
            let _span = tracing::info_span!("decode_image").entered();
            self.reader.read_image(input_data).map_err(decode_failure)?
        };

        let _span = tracing::info_span!("map_range",
            width = image.width,
            height = image.height,
            channels = image.channels
        ).entered();
        convert_range(&image, direction).map_err(decode_failure)
    }

    fn encode(
        &self,
        image: &ImageBuffer,
        source: &Path,
        format: ImageFormat,
        output: &mut dyn Write,
    ) -> Result<()> {
        let _span = tracing::info_span!("encode_image").entered();
        self.writer
            .write_image(image, format, output, &self.config)
            .map_err(|e| ConversionError::EncodeFailure {
                path: source.to_path_buf(),
                reason: e.to_string(),
            })
    }

    /// Decodes `input_data`, rescales it and encodes the result as `format`.
    ///
    /// `source` only labels errors; nothing is read from it.
    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(
        &self,
        input_data: &[u8],
        source: &Path,
        format: ImageFormat,
        direction: RangeDirection,
        output: &mut dyn Write,
    ) -> Result<()> {
        let converted = self.decode_and_map(input_data, source, direction)?;
        self.encode(&converted, source, format, output)
    }

    /// Converts one file, writing the output in the format of its extension.
    ///
    /// The input is read and decoded before the output format is resolved,
    /// so unreadable inputs always report as decode failures. The output is
    /// encoded in memory first, so a failed conversion never leaves a
    /// partial file behind.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
        direction: RangeDirection,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file to {} range", direction
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| ConversionError::DecodeFailure {
                path: input_path.to_path_buf(),
                reason: e.to_string(),
            })?
        };

        let converted = self.decode_and_map(&input_data, input_path, direction)?;

        let format = ImageFormat::from_path(output_path).map_err(|e| {
            ConversionError::EncodeFailure {
                path: output_path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        let mut encoded = Vec::new();
        self.encode(&converted, input_path, format, &mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &encoded).map_err(|e| ConversionError::EncodeFailure {
                path: output_path.to_path_buf(),
                reason: e.to_string(),
            })?;
        }

        Ok(())
    }

    /// Converts each file beside itself as `<stem>_<direction>.<ext>`.
    ///
    /// Only an invalid direction token fails the call; per-file problems are
    /// recorded in the returned summary.
    pub fn convert_manual<I, P>(&self, direction: &str, paths: I) -> Result<BatchSummary>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let direction: RangeDirection = direction.parse()?;
        info!("Converting files to {} range", direction);

        let mut summary = BatchSummary::new();
        for path in paths {
            let path = path.as_ref().to_path_buf();

            if FileEntry::new(&path).suffix.is_converted() {
                summary.record_failure(path.clone(), ConversionError::SuffixGuardViolation(path));
                continue;
            }

            let output = manual_output_path(&path, direction);
            if self.config.skip_existing && output.exists() {
                info!("Skipping {}, {} already exists", path.display(), output.display());
                summary.record_skipped(path);
                continue;
            }

            match self.convert_file(&path, &output, direction) {
                Ok(()) => summary.record_converted(path, output),
                Err(e) => summary.record_failure(path, e),
            }
        }

        summary.log();
        Ok(summary)
    }

    /// Finds `IMAGES` folders on removable volumes and converts their
    /// unconverted images to full range once the prompt confirms.
    pub fn run_automatic<V, P>(&self, volumes: &V, prompt: &mut P) -> Result<AutoOutcome>
    where
        V: VolumeSource + ?Sized,
        P: Prompt + ?Sized,
    {
        let folders = find_image_folders(volumes, &self.config)?;
        if folders.is_empty() {
            info!("No {} folder found, nothing to do", self.config.images_dir_name);
            return Ok(AutoOutcome::NoVolumesFound);
        }

        let mut summary = BatchSummary::new();
        let mut pending = 0;
        let mut declined = 0;

        for folder in &folders {
            let candidates = match list_candidates(folder, &self.config) {
                Ok(candidates) => candidates,
                Err(e) => {
                    error!("Failed to list {}", folder.images_dir.display());
                    summary.record_failure(folder.images_dir.clone(), e);
                    continue;
                }
            };

            if candidates.is_empty() {
                info!("All images in {} are already converted", folder.images_dir.display());
                continue;
            }

            pending += 1;
            let question = format!(
                "Convert {} images in {} to full range?",
                candidates.len(),
                folder.images_dir.display()
            );
            if !prompt.confirm(&question)? {
                info!("Leaving {} untouched", folder.images_dir.display());
                declined += 1;
                continue;
            }

            let paths: Vec<PathBuf> = candidates.into_iter().map(|file| file.path).collect();
            summary.merge(self.convert_folder(folder, &paths));
        }

        if summary.failed.is_empty() {
            if pending == 0 {
                return Ok(AutoOutcome::UpToDate);
            }
            if declined == pending {
                return Ok(AutoOutcome::Declined);
            }
        }

        summary.log();
        Ok(AutoOutcome::Completed(summary))
    }

    /// Converts one folder's candidates. If the output directory can't be
    /// created, every candidate is recorded as failed and nothing is decoded.
    fn convert_folder(&self, folder: &ImageFolder, paths: &[PathBuf]) -> BatchSummary {
        let mut summary = BatchSummary::new();

        if let Err(e) = std::fs::create_dir_all(&folder.output_dir) {
            error!("Failed to create {}: {}", folder.output_dir.display(), e);
            for path in paths {
                summary.record_failure(path.clone(), ConversionError::EncodeFailure {
                    path: folder.output_path(path),
                    reason: format!("cannot create {}: {}", folder.output_dir.display(), e),
                });
            }
            return summary;
        }

        for path in paths {
            let output = folder.output_path(path);
            match self.convert_file(path, &output, RangeDirection::ToFull) {
                Ok(()) => summary.record_converted(path.clone(), output),
                Err(e) => summary.record_failure(path.clone(), e),
            }
        }

        summary
    }
}
