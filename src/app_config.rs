use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// File extensions picked up when converting a directory
    #[serde(default = "default_input_extensions")]
    pub input_extensions: Vec<String>,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Output file settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    /// Extension of written files
    #[serde(default = "default_output_extension")]
    pub extension: String,

    /// Whether script metadata and comments are written as NOTE blocks
    #[serde(default = "default_true")]
    pub include_notes: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            extension: default_output_extension(),
            include_notes: true,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching `log` level filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_input_extensions() -> Vec<String> {
    vec!["ass".to_string(), "ssa".to_string()]
}

fn default_output_extension() -> String {
    "vtt".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Write the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.input_extensions.is_empty() {
            return Err(anyhow!("At least one input extension is required"));
        }

        if self.input_extensions.iter().any(|ext| ext.trim_start_matches('.').is_empty()) {
            return Err(anyhow!("Input extensions must not be empty"));
        }

        let output_ext = self.output.extension.trim_start_matches('.');
        if output_ext.is_empty() {
            return Err(anyhow!("Output extension must not be empty"));
        }

        // Writing the output over its own source would destroy the input
        if self
            .input_extensions
            .iter()
            .any(|ext| ext.trim_start_matches('.').eq_ignore_ascii_case(output_ext))
        {
            return Err(anyhow!(
                "Output extension '{}' collides with an input extension",
                output_ext
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            input_extensions: default_input_extensions(),
            output: OutputConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
