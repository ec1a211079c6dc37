//! Configuration structures for the park pass generator
//!
//! This module contains the command line arguments, the optional JSON
//! configuration file, and the merged `ParkConfig` with its validation logic.

use super::OutputFormat;
use crate::entrant::{RawEntrantFields, ValidatorOptions};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Swipe cooldown constants
pub mod cooldown {
    /// Seconds an entrant has to wait between two checked ride swipes
    pub const DEFAULT_SECONDS: u64 = 5;

    /// Longest cooldown a configuration may request
    pub const MAX_SECONDS: u64 = 3600;
}

/// Command line arguments structure
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "park-pass",
    version = "0.1.0",
    about = "Park Pass Generator - validates entrants, issues passes and tests swipes",
    long_about = "Validates entrant information for a pass subtype, issues the pass and runs area, ride and discount swipes against it. A scenario file can script a whole session of swipes for several entrants.

EXAMPLES:
    # Issue a classic guest pass and test every swipe
    park-pass --subtype classic

    # Validate a child guest
    park-pass --subtype child --date-of-birth 03/14/2023

    # Fill in sample data for a vendor
    park-pass --subtype vendor --sample --seed 7

    # Run a scripted session
    park-pass --scenario session.json --output-format text

    # Generate configuration template
    park-pass --print-config > park.json

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Scenario file describing entrants and scripted swipes
    #[arg(long, help = "Scenario file path (JSON format)")]
    pub scenario: Option<String>,

    /// Entrant subtype for a single pass
    #[arg(
        long,
        help = "Entrant subtype (child, classic, senior, vip, season, food, ride, maintenance, contract, manager, vendor)"
    )]
    pub subtype: Option<String>,

    /// Date of birth, MM/dd/yyyy
    #[arg(long, help = "Date of birth (MM/dd/yyyy)")]
    pub date_of_birth: Option<String>,

    /// Social security number
    #[arg(long, help = "Social security number (###-##-####)")]
    pub ssn: Option<String>,

    /// Project number
    #[arg(long, help = "Four digit project number")]
    pub project_number: Option<String>,

    /// Company name
    #[arg(long, help = "Vendor company")]
    pub company: Option<String>,

    /// First name
    #[arg(long, help = "First name")]
    pub first_name: Option<String>,

    /// Last name
    #[arg(long, help = "Last name")]
    pub last_name: Option<String>,

    /// Street address
    #[arg(long, help = "Street address")]
    pub street_address: Option<String>,

    /// City
    #[arg(long, help = "City")]
    pub city: Option<String>,

    /// State
    #[arg(long, help = "Two letter state")]
    pub state: Option<String>,

    /// Zip code
    #[arg(long, help = "Zip code (##### or #####-####)")]
    pub zip_code: Option<String>,

    /// Minimum seconds between checked ride swipes
    #[arg(
        long,
        help = "Seconds between ride swipes",
        long_help = "Minimum number of seconds between two checked ride swipes on the same pass. Must be between 1 and 3600. Default: 5"
    )]
    pub cooldown_seconds: Option<u64>,

    /// Report format failures on every present field
    #[arg(long, help = "Report format errors on optional fields too")]
    pub strict_format: bool,

    /// Skip project number and company allow-lists
    #[arg(
        long,
        help = "Do not enforce project number and company allow-lists",
        long_help = "Issue passes for unrecognized project numbers and companies. Those passes are denied at swipe time instead."
    )]
    pub lenient_allow_lists: bool,

    /// Output format for results
    #[arg(long, help = "Output format (json or text)")]
    pub output_format: Option<String>,

    /// Random seed for sample data
    #[arg(long, help = "Random seed for reproducible sample data")]
    pub seed: Option<u64>,

    /// Fill missing entrant fields with sample data
    #[arg(long, help = "Fill entrant fields with generated sample data")]
    pub sample: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Log to stderr as JSON
    #[arg(long, help = "Write console logs as JSON")]
    pub log_json: bool,

    /// Directory for daily rolling JSON log files
    #[arg(long, help = "Also write JSON logs to daily files in this directory")]
    pub log_dir: Option<String>,

    /// Tracing filter directives, e.g. `park_pass_generator=trace`
    #[arg(long, help = "Tracing filter directives (overrides RUST_LOG)")]
    pub log_filter: Option<String>,

    /// Disable colored log output
    #[arg(long, help = "Disable ANSI colors in console logs")]
    pub no_color: bool,

    /// Dry run mode - validate configuration without issuing passes
    #[arg(long, help = "Validate configuration without issuing passes")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

impl CliArgs {
    /// Collect the raw entrant field flags
    pub fn raw_fields(&self) -> RawEntrantFields {
        RawEntrantFields {
            date_of_birth: self.date_of_birth.clone(),
            ssn: self.ssn.clone(),
            project_number: self.project_number.clone(),
            company: self.company.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            street_address: self.street_address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip_code: self.zip_code.clone(),
        }
    }
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Minimum seconds between checked ride swipes
    pub cooldown_seconds: Option<u64>,

    /// Report format failures on every present field
    pub strict_format: Option<bool>,

    /// Enforce project number and company allow-lists
    pub enforce_allow_lists: Option<bool>,

    /// Output format for results
    pub output_format: Option<String>,

    /// Random seed for sample data
    pub seed: Option<u64>,

    /// Scenario file to run
    pub scenario: Option<String>,
}

/// Configuration for validating entrants and running swipes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkConfig {
    /// Minimum seconds between checked ride swipes
    pub cooldown_seconds: u64,

    /// Report format failures on every present field
    pub strict_format: bool,

    /// Enforce project number and company allow-lists
    pub enforce_allow_lists: bool,

    /// Output format for results
    pub output_format: String,

    /// Random seed for sample data
    pub seed: Option<u64>,

    /// Scenario file to run
    pub scenario: Option<String>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for park configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Cooldown is out of range
    #[error("Cooldown must be between 1 and {max} seconds, got {value}")]
    InvalidCooldown {
        /// The rejected cooldown
        value: u64,
        /// The largest accepted cooldown
        max: u64,
    },

    /// Output format is not recognized
    #[error("Unknown output format: {0}")]
    InvalidOutputFormat(String),
}

impl Default for ParkConfig {
    fn default() -> Self {
        Self {
            cooldown_seconds: cooldown::DEFAULT_SECONDS,
            strict_format: false,
            enforce_allow_lists: true,
            output_format: "json".to_string(),
            seed: None,
            scenario: None,
        }
    }
}

impl ParkConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            cooldown_seconds: config_file.cooldown_seconds.unwrap_or(defaults.cooldown_seconds),
            strict_format: config_file.strict_format.unwrap_or(defaults.strict_format),
            enforce_allow_lists: config_file
                .enforce_allow_lists
                .unwrap_or(defaults.enforce_allow_lists),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            seed: config_file.seed.or(defaults.seed),
            scenario: config_file.scenario.or(defaults.scenario),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.cooldown_seconds {
            config.cooldown_seconds = value;
        }
        if args.strict_format {
            config.strict_format = true;
        }
        if args.lenient_allow_lists {
            config.enforce_allow_lists = false;
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.scenario {
            config.scenario = Some(value);
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.cooldown_seconds == 0 || self.cooldown_seconds > cooldown::MAX_SECONDS {
            return Err(ConfigValidationError::InvalidCooldown {
                value: self.cooldown_seconds,
                max: cooldown::MAX_SECONDS,
            });
        }

        self.get_output_format()
            .map_err(|_| ConfigValidationError::InvalidOutputFormat(self.output_format.clone()))?;

        Ok(())
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, String> {
        self.output_format.parse()
    }

    /// The configured swipe cooldown
    pub fn cooldown(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.cooldown_seconds as i64)
    }

    /// Validator options derived from this configuration
    pub fn validator_options(&self) -> ValidatorOptions {
        ValidatorOptions {
            strict_format: self.strict_format,
            enforce_allow_lists: self.enforce_allow_lists,
        }
    }
}
