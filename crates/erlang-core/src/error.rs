//! Error handling for the Erlang library
//!
//! Every operation reports failure through [`ErlangError`] instead of
//! panicking. Invalid input, an undefined queue state and a search that
//! cannot reach its boundary are all ordinary outcomes that callers are
//! expected to match on (or collapse with `.ok()`).

#![allow(missing_docs)]

use std::fmt;
use thiserror::Error;

use crate::types::ParamKind;

/// Result type alias for Erlang operations
pub type Result<T> = std::result::Result<T, ErlangError>;

/// Error type for Erlang formula evaluation and inversion
#[derive(Error, Debug)]
pub enum ErlangError {
    /// A parameter failed its kind's validity predicate
    #[error("Invalid {kind} parameter {value}: {constraint}")]
    InvalidParameter {
        kind: ParamKind,
        value: f64,
        constraint: &'static str,
    },

    /// The formula has no defined value for these inputs (e.g. no steady state)
    #[error("Undefined result in {operation}: {reason}")]
    Undefined {
        operation: &'static str,
        reason: String,
    },

    /// A boundary search ran past its configured limit
    #[error("Boundary not reachable in {operation} (searched up to {bound})")]
    Unreachable { operation: &'static str, bound: f64 },

    /// Bisection stopped shrinking before reaching the requested precision
    #[error("Bisection did not converge after {iterations} iterations (bracket width {width:e})")]
    NonConvergence { iterations: usize, width: f64 },

    /// A computed probability fell outside [0, 1]
    #[error("Inconsistent probability {value} computed in {operation} (this is a bug, please report it)")]
    InconsistentProbability {
        operation: &'static str,
        value: f64,
    },

    /// Invalid engine configuration
    #[error("Invalid configuration: {details}")]
    InvalidConfig { details: String },

    /// Configuration file could not be parsed
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// I/O operation failed
    #[error("I/O operation failed: {reason}")]
    IoError { reason: String },
}

impl ErlangError {
    /// Create a new invalid parameter error
    pub fn invalid_parameter(kind: ParamKind, value: f64, constraint: &'static str) -> Self {
        Self::InvalidParameter {
            kind,
            value,
            constraint,
        }
    }

    /// Create a new undefined result error
    pub fn undefined(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::Undefined {
            operation,
            reason: reason.into(),
        }
    }

    /// Create a new unreachable boundary error
    pub fn unreachable(operation: &'static str, bound: f64) -> Self {
        Self::Unreachable { operation, bound }
    }

    /// Create a new invalid configuration error
    pub fn invalid_config(details: impl Into<String>) -> Self {
        Self::InvalidConfig {
            details: details.into(),
        }
    }

    /// Whether the error stems from the queue having no steady state
    /// or the formula having no value, as opposed to bad input
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined { .. })
    }

    /// Check if retrying with different inputs or settings may succeed
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidParameter { .. }
            | Self::Undefined { .. }
            | Self::InconsistentProbability { .. }
            | Self::InvalidConfig { .. }
            | Self::ConfigParse(_) => false,

            // A larger search cap or a coarser precision may succeed
            Self::Unreachable { .. } | Self::NonConvergence { .. } | Self::IoError { .. } => true,
        }
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidParameter { .. } => ErrorCategory::Input,
            Self::Undefined { .. } => ErrorCategory::Domain,
            Self::Unreachable { .. } | Self::NonConvergence { .. } => ErrorCategory::Convergence,
            Self::InconsistentProbability { .. } => ErrorCategory::Internal,
            Self::InvalidConfig { .. } | Self::ConfigParse(_) | Self::IoError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }
}

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A caller-supplied parameter is out of its domain
    Input,
    /// The queueing model has no value for the inputs
    Domain,
    /// An iterative search or bisection failed to finish
    Convergence,
    /// Internal consistency errors
    Internal,
    /// Configuration loading and validation errors
    Configuration,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Domain => write!(f, "Domain"),
            Self::Convergence => write!(f, "Convergence"),
            Self::Internal => write!(f, "Internal"),
            Self::Configuration => write!(f, "Configuration"),
        }
    }
}

/// Convert from I/O errors
impl From<std::io::Error> for ErlangError {
    fn from(error: std::io::Error) -> Self {
        Self::IoError {
            reason: error.to_string(),
        }
    }
}
