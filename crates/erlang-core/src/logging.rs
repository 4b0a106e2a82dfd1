//! Logging setup
//!
//! The library itself only emits `tracing` events: search probes at
//! `trace`, settled answers at `debug`, exhausted server limits at `warn`.
//! Applications that want them printed can install a subscriber through
//! [`setup_logging`] or [`crate::init`].

use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ErlangError, Result};

/// Target under which the crate emits its events
pub const LOG_TARGET: &str = "erlang_core";

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level applied to this crate's events
    pub level: Level,
    /// Whether to enable JSON formatting
    pub json: bool,
    /// Whether to include file and line information
    pub file_info: bool,
    /// Whether to log spans
    pub log_spans: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: Level::INFO,
            json: false,
            file_info: false,
            log_spans: false,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new(level: Level) -> Self {
        LoggingConfig {
            level,
            ..Default::default()
        }
    }

    /// Every search probe with its bracket, as spans
    pub fn search_tracing() -> Self {
        Self::new(Level::TRACE).with_spans()
    }

    /// Enable JSON formatting
    pub fn with_json(mut self) -> Self {
        self.json = true;
        self
    }

    /// Enable file and line information in logs
    pub fn with_file_info(mut self) -> Self {
        self.file_info = true;
        self
    }

    /// Enable span logging
    pub fn with_spans(mut self) -> Self {
        self.log_spans = true;
        self
    }
}

/// Install a global subscriber for the given configuration
///
/// The configured level applies to the `erlang_core` target; other
/// `RUST_LOG` directives are kept. Fails with
/// [`ErlangError::InvalidConfig`] if a global subscriber is already
/// installed.
pub fn setup_logging(config: LoggingConfig) -> Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(crate_directive(config.level)?);

    let span_events = if config.log_spans {
        FmtSpan::ACTIVE
    } else {
        FmtSpan::NONE
    };

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_span_events(span_events)
        .with_file(config.file_info)
        .with_line_number(config.file_info);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| ErlangError::invalid_config(format!("logging: {}", e)))
}

fn crate_directive(level: Level) -> Result<Directive> {
    format!("{}={}", LOG_TARGET, level)
        .parse()
        .map_err(|e| ErlangError::invalid_config(format!("logging directive: {}", e)))
}

/// Parse a log level from a string
pub fn parse_log_level(level: &str) -> Result<Level> {
    Level::from_str(level)
        .map_err(|_| ErlangError::invalid_config(format!("Invalid log level: {}", level)))
}
