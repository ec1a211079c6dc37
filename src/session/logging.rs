//! Logging and tracing configuration
//!
//! Console output goes to stderr so stdout stays clean for pass and session
//! output. Optional file logging writes JSON to daily rolling files.

use std::io;
use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Boxed error returned by logging initialisation
pub type LoggingError = Box<dyn std::error::Error + Send + Sync>;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the library and binary
    pub level: Level,
    /// Whether console output is JSON
    pub json_format: bool,
    /// Whether to also log to files
    pub log_to_file: bool,
    /// Log file directory, `logs` when unset
    pub log_directory: Option<String>,
    /// Log file name prefix
    pub log_file_prefix: String,
    /// Whether to log span open and close events
    pub enable_span_events: bool,
    /// Whether to use ANSI colors on the console
    pub enable_ansi: bool,
    /// Filter directive overriding `level` and `RUST_LOG`
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            json_format: false,
            log_to_file: false,
            log_directory: None,
            log_file_prefix: "park-pass".to_string(),
            enable_span_events: false,
            enable_ansi: true,
            env_filter: None,
        }
    }
}

/// Keeps background log writers alive; logs are flushed when dropped
#[derive(Debug)]
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _guards: Vec<WorkerGuard>,
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enable JSON console output
    pub fn with_json_format(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Enable file logging into `directory`
    pub fn with_file_logging(mut self, directory: impl Into<String>) -> Self {
        self.log_to_file = true;
        self.log_directory = Some(directory.into());
        self
    }

    /// Enable span events
    pub fn with_span_events(mut self) -> Self {
        self.enable_span_events = true;
        self
    }

    /// Disable ANSI colors
    pub fn without_ansi(mut self) -> Self {
        self.enable_ansi = false;
        self
    }

    /// Set custom environment filter
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Filter directives used when neither `env_filter` nor `RUST_LOG` is set
    pub fn default_directives(&self) -> String {
        format!("park_pass_generator={level},park_pass={level}", level = self.level)
    }

    fn build_filter(&self) -> Result<EnvFilter, LoggingError> {
        match &self.env_filter {
            Some(filter) => Ok(EnvFilter::try_new(filter)?),
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(self.default_directives()))),
        }
    }

    fn span_events(&self) -> FmtSpan {
        if self.enable_span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Install the global tracing subscriber
    ///
    /// Fails if a global subscriber is already set.
    pub fn init(self) -> Result<LoggingGuard, LoggingError> {
        let filter = self.build_filter()?;
        let mut guards = Vec::new();

        let file_layer = if self.log_to_file {
            let directory = self.log_directory.as_deref().unwrap_or("logs");
            let (writer, guard) = non_blocking(rolling::daily(directory, &self.log_file_prefix));
            guards.push(guard);
            Some(
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_span_events(self.span_events()),
            )
        } else {
            None
        };

        let (json_console, pretty_console) = if self.json_format {
            let layer =
                fmt::layer().json().with_writer(io::stderr).with_span_events(self.span_events());
            (Some(layer), None)
        } else {
            let layer = fmt::layer()
                .pretty()
                .with_writer(io::stderr)
                .with_ansi(self.enable_ansi)
                .with_span_events(self.span_events());
            (None, Some(layer))
        };

        Registry::default()
            .with(filter)
            .with(file_layer)
            .with(json_console)
            .with(pretty_console)
            .try_init()?;

        info!(
            level = %self.level,
            json = self.json_format,
            file = self.log_to_file,
            "Logging initialized"
        );
        Ok(LoggingGuard { _guards: guards })
    }
}
