//! Engine configuration
//!
//! The solver precision and the search limits are plain values carried by
//! each [`crate::ErlangC`] engine. Every inversion also accepts a per-call
//! precision that overrides the configured one.
//!
//! Configuration can be loaded from TOML:
//!
//! ```toml
//! precision = 1e-7
//! max_servers = 100000
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ErlangError, Result};

/// Precision used when neither the call nor the configuration sets one
pub const DEFAULT_PRECISION: f64 = 1e-6;

/// Largest server count a server search will probe before giving up
pub const DEFAULT_MAX_SERVERS: u32 = 1 << 20;

/// Configuration for an Erlang engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErlangConfig {
    /// Absolute precision for traffic searches and bisection
    pub precision: f64,
    /// Upper limit for server count searches
    pub max_servers: u32,
}

impl Default for ErlangConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            max_servers: DEFAULT_MAX_SERVERS,
        }
    }
}

impl ErlangConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default solver precision
    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    /// Set the server search limit
    pub fn with_max_servers(mut self, max_servers: u32) -> Self {
        self.max_servers = max_servers;
        self
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if !(self.precision > 0.0 && self.precision.is_finite()) {
            return Err(ErlangError::invalid_config(format!(
                "precision must be finite and > 0, got {}",
                self.precision
            )));
        }
        if self.max_servers == 0 {
            return Err(ErlangError::invalid_config("max_servers must be > 0"));
        }
        Ok(())
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            "Loaded Erlang config from {}: precision={:e}, max_servers={}",
            path.as_ref().display(),
            config.precision,
            config.max_servers
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ErlangConfig::default();
        assert_eq!(config.precision, DEFAULT_PRECISION);
        assert_eq!(config.max_servers, DEFAULT_MAX_SERVERS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ErlangConfig::new().with_precision(1e-9).with_max_servers(500);
        assert_eq!(config.precision, 1e-9);
        assert_eq!(config.max_servers, 500);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(ErlangConfig::new().with_precision(0.0).validate().is_err());
        assert!(ErlangConfig::new().with_precision(f64::NAN).validate().is_err());
        assert!(ErlangConfig::new().with_max_servers(0).validate().is_err());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = ErlangConfig::from_toml_str("precision = 1e-8").unwrap();
        assert_eq!(config.precision, 1e-8);
        assert_eq!(config.max_servers, DEFAULT_MAX_SERVERS);
    }

    #[test]
    fn test_from_toml_invalid() {
        assert!(matches!(
            ErlangConfig::from_toml_str("precision = \"fine\""),
            Err(ErlangError::ConfigParse(_))
        ));
        assert!(matches!(
            ErlangConfig::from_toml_str("precision = -1.0"),
            Err(ErlangError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_from_file() {
        let dir = temp_dir::TempDir::new().unwrap();
        let path = dir.child("erlang.toml");
        std::fs::write(&path, "precision = 1e-7\nmax_servers = 2048\n").unwrap();

        let config = ErlangConfig::from_file(&path).unwrap();
        assert_eq!(config.precision, 1e-7);
        assert_eq!(config.max_servers, 2048);

        assert!(matches!(
            ErlangConfig::from_file(dir.child("missing.toml")),
            Err(ErlangError::IoError { .. })
        ));
    }
}
