use anyhow::{anyhow, Context, Result};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::converter::{self, LogSink};
use crate::file_utils::FileManager;
use crate::vtt_writer::{VttWriter, WriterOptions};

// @module: Application controller for subtitle conversion

/// Outcome of converting one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Output written
    Converted,
    /// Output already existed and overwrite was not forced
    Skipped,
}

/// Counters for a folder run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Main application controller for ASS → WebVTT conversion
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    /// Convert ASS text to WebVTT text using the configured output options
    pub fn convert_text(&self, source: &str) -> Result<String> {
        let items = converter::convert(source, &mut LogSink)?;
        let writer = VttWriter::new(WriterOptions {
            include_notes: self.config.output.include_notes,
        });
        Ok(writer.render(&items))
    }

    /// Output path for an input file
    pub fn output_path_for(&self, input_file: &Path, output_dir: &Path) -> PathBuf {
        FileManager::generate_output_path(input_file, output_dir, &self.config.output.extension)
    }

    /// Convert a single file into `output_dir`
    pub fn run(&self, input_file: &Path, output_dir: &Path, force_overwrite: bool) -> Result<FileOutcome> {
        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let output_path = self.output_path_for(input_file, output_dir);
        if output_path.exists() && !force_overwrite {
            warn!("Skipping {:?}, output already exists (use -f to force overwrite)", input_file);
            return Ok(FileOutcome::Skipped);
        }

        let start_time = std::time::Instant::now();

        let source = FileManager::read_to_string(input_file)?;
        let vtt = self
            .convert_text(&source)
            .with_context(|| format!("Failed to convert {:?}", input_file))?;

        FileManager::write_to_file(&output_path, &vtt)?;

        debug!("Converted {:?} in {:?}", input_file, start_time.elapsed());
        info!("Success: {:?}", output_path);

        Ok(FileOutcome::Converted)
    }

    /// Convert every matching file below `input_dir`.
    ///
    /// Without `output_dir` each result lands next to its source; with it the
    /// directory structure below `input_dir` is mirrored there. A failing file
    /// is logged and counted, the remaining files are still converted.
    pub fn run_folder(&self, input_dir: &Path, output_dir: Option<&Path>, force_overwrite: bool) -> Result<RunSummary> {
        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let files = FileManager::find_files(input_dir, &self.config.input_extensions)?;
        if files.is_empty() {
            return Err(anyhow!(
                "No subtitle files ({}) found in directory: {:?}",
                self.config.input_extensions.join(", "),
                input_dir
            ));
        }

        info!("Converting {} file(s) in {:?}", files.len(), input_dir);

        let mut summary = RunSummary::default();
        for file in &files {
            let target_dir = target_dir_for(file, input_dir, output_dir);

            match self.run(file, &target_dir, force_overwrite) {
                Ok(FileOutcome::Converted) => summary.converted += 1,
                Ok(FileOutcome::Skipped) => summary.skipped += 1,
                Err(e) => {
                    error!("Error processing file {:?}: {:#}", file, e);
                    summary.failed += 1;
                }
            }
        }

        info!(
            "Finished: {} converted, {} skipped, {} failed",
            summary.converted, summary.skipped, summary.failed
        );

        Ok(summary)
    }
}

fn target_dir_for(file: &Path, input_dir: &Path, output_dir: Option<&Path>) -> PathBuf {
    let parent = file.parent().unwrap_or(input_dir);
    match output_dir {
        None => parent.to_path_buf(),
        Some(out) => match parent.strip_prefix(input_dir) {
            Ok(relative) => out.join(relative),
            Err(_) => out.to_path_buf(),
        },
    }
}
