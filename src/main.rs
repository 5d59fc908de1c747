use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rangeconv::image_pipeline::{
    AssumeYes, AutoOutcome, BatchSummary, ConversionConfig, ConversionError, MountDirectory, Prompt,
    RangeConversionPipeline, TerminalPrompt, VolumeSource, default_volume_source,
};
use rangeconv::logger;

use tracing::{error, info};

/// Converts images between full range (0-255) and limited range (16-235).
///
/// Without arguments, looks for an IMAGES folder on removable volumes and
/// converts its images from limited to full range into a sibling `full`
/// folder. With arguments, converts the given files beside themselves.
#[derive(Parser)]
#[command(name = "rangeconv")]
#[command(version, long_about = None)]
struct Cli {
    /// Target range: "full" or "limited"
    #[arg(value_name = "DIRECTION")]
    direction: Option<String>,

    /// Images to convert
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Convert without asking for confirmation
    #[arg(short, long)]
    yes: bool,

    /// Directory whose subdirectories are scanned as volumes
    #[arg(long, value_name = "DIR")]
    volumes: Option<PathBuf>,

    /// JPEG output quality (1-100)
    #[arg(long, value_name = "N", default_value_t = 95)]
    jpeg_quality: u8,

    /// Reconvert files whose output already exists
    #[arg(long)]
    overwrite: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

const EXIT_ALL_FAILED: u8 = 1;
const EXIT_INVALID_DIRECTION: u8 = 2;

/// How a run ended, as far as the exit code is concerned
enum RunResult {
    InvalidDirection,
    Manual(BatchSummary),
    Automatic(AutoOutcome),
}

fn exit_status(result: &RunResult) -> u8 {
    let all_failed = match result {
        RunResult::InvalidDirection => return EXIT_INVALID_DIRECTION,
        RunResult::Manual(summary) => summary.all_failed(),
        RunResult::Automatic(outcome) => outcome.summary().is_some_and(BatchSummary::all_failed),
    };

    if all_failed { EXIT_ALL_FAILED } else { 0 }
}

fn run(cli: &Cli) -> anyhow::Result<RunResult> {
    let config = ConversionConfig::builder()
        .jpeg_quality(cli.jpeg_quality)
        .skip_existing(!cli.overwrite)
        .build();
    let pipeline = RangeConversionPipeline::new(config);

    let Some(direction) = &cli.direction else {
        let volumes: Box<dyn VolumeSource> = match &cli.volumes {
            Some(root) => Box::new(MountDirectory::new(root)),
            None => default_volume_source(),
        };
        let mut prompt: Box<dyn Prompt> = if cli.yes {
            Box::new(AssumeYes)
        } else {
            Box::new(TerminalPrompt::stdio())
        };

        let outcome = pipeline.run_automatic(&volumes, &mut *prompt)?;
        match &outcome {
            AutoOutcome::NoVolumesFound | AutoOutcome::Completed(_) => {}
            AutoOutcome::UpToDate => info!("All images already converted, nothing to do"),
            AutoOutcome::Declined => info!("Conversion declined"),
        }
        return Ok(RunResult::Automatic(outcome));
    };

    match pipeline.convert_manual(direction, &cli.files) {
        Ok(summary) => {
            if summary.attempted() == 0 && summary.skipped.is_empty() {
                info!("No files given, nothing to do");
            }
            Ok(RunResult::Manual(summary))
        }
        Err(e @ ConversionError::InvalidDirection(_)) => {
            error!("{}", e);
            Ok(RunResult::InvalidDirection)
        }
        Err(e) => Err(e.into()),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logger::init(if cli.verbose { "debug" } else { "info" });

    let result = run(&cli)?;
    Ok(ExitCode::from(exit_status(&result)))
}
