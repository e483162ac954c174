//! Command-line interface for batch dithering of image files

use crate::algorithm::{DitherSettings, Method};
use crate::analysis::intensity::black_fraction;
use crate::io::configuration::{
    DEFAULT_ALPHA, DEFAULT_CELLSIZE, DEFAULT_GAMMA, DEFAULT_SEED, OUTPUT_EXTENSION, OUTPUT_SUFFIX,
    SUPPORTED_EXTENSIONS,
};
use crate::io::error::{HalftoneError, Result, unsupported_input};
use crate::io::image::{export_raster_as_png, load_grayscale};
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "halftone")]
#[command(
    author,
    version,
    about = "Dither grayscale images to black and white"
)]
/// Command-line arguments for the dithering tool
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Dithering method
    #[arg(short, long, value_enum, default_value_t = Method::FloydSteinberg)]
    pub method: Method,

    /// Stipple cell edge length in pixels
    #[arg(short, long, default_value_t = DEFAULT_CELLSIZE)]
    pub cellsize: usize,

    /// Stipple noise floor: cells needing fewer dots stay blank
    #[arg(short, long, default_value_t = DEFAULT_ALPHA)]
    pub alpha: f64,

    /// Stipple contrast gain
    #[arg(short, long, default_value_t = DEFAULT_GAMMA)]
    pub gamma: f64,

    /// Random seed for reproducible stippling
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validate the stipple flags into dithering settings
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error for a zero cell size or a negative
    /// or non-finite alpha or gamma
    pub fn settings(&self) -> Result<DitherSettings> {
        DitherSettings::new(self.cellsize, self.alpha, self.gamma, self.seed)
    }
}

/// Orchestrates dithering of one file or a directory of files
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// Returns the paths of the outputs written.
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, target validation or any
    /// file's decoding, dithering or export fails
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let settings = self.cli.settings()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len(), self.cli.method.name());
        }

        let mut written = Vec::with_capacity(files.len());
        for file in &files {
            written.push(self.process_file(file, &settings)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_supported_image(target) {
                return Err(unsupported_input(target, "not a supported image format"));
            }
            if is_dithered_output(target) {
                log::warn!("Skipping: {} (already a dithered output)", target.display());
                return Ok(vec![]);
            }
            if self.should_process_file(target) {
                Ok(vec![target.clone()])
            } else {
                Ok(vec![])
            }
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| HalftoneError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;

            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if path.is_file()
                    && is_supported_image(&path)
                    && !is_dithered_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(unsupported_input(
                target,
                "target must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            log::warn!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&self, input_path: &Path, settings: &DitherSettings) -> Result<PathBuf> {
        let start_time = Instant::now();
        let output_path = Self::get_output_path(input_path);

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let gray = load_grayscale(input_path)?;
        let dithered = self.cli.method.apply(&gray, settings);
        export_raster_as_png(&dithered, &output_path)?;

        log::info!(
            "{} -> {} ({}, {}x{}, {:.1}% black, {:?})",
            input_path.display(),
            output_path.display(),
            self.cli.method.name(),
            dithered.width(),
            dithered.height(),
            black_fraction(&dithered) * 100.0,
            start_time.elapsed()
        );

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(output_path)
    }

    /// Output path written for `input_path`: `<stem>_dithered.png` beside it
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            OUTPUT_EXTENSION
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

// Earlier outputs must not be dithered again
fn is_dithered_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}
