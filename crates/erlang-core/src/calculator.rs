//! The Erlang C engine
//!
//! [`ErlangC`] pairs a blocking probability model with an [`ErlangConfig`].
//! The direct formulas live in [`crate::formulas`] and the inversions in
//! [`crate::inversion`]; both are implemented as methods on this type.
//!
//! ```rust
//! use erlang_core::{ErlangC, ErlangConfig};
//!
//! let engine = ErlangC::with_config(ErlangConfig::new().with_precision(1e-8))?;
//! let waits = engine.wait_probability(5.0, 10)?;
//! let servers = engine.servers_waitprob(5.0, waits)?;
//! assert!(servers <= 10);
//! # Ok::<(), erlang_core::ErlangError>(())
//! ```

use crate::blocking::{BlockingModel, ErlangB};
use crate::config::ErlangConfig;
use crate::error::Result;
use crate::utils::resolve_precision;

/// Erlang C (M/M/S/∞/∞) calculator
#[derive(Debug, Clone, Default)]
pub struct ErlangC<M = ErlangB> {
    model: M,
    config: ErlangConfig,
}

impl ErlangC<ErlangB> {
    /// Create an engine using Erlang B and the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine using Erlang B and the given configuration
    pub fn with_config(config: ErlangConfig) -> Result<Self> {
        Self::with_model(ErlangB, config)
    }
}

impl<M: BlockingModel> ErlangC<M> {
    /// Create an engine over a custom blocking probability model
    pub fn with_model(model: M, config: ErlangConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { model, config })
    }

    /// The engine configuration
    pub fn config(&self) -> &ErlangConfig {
        &self.config
    }

    /// The blocking probability model
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Blocking probability from the underlying model
    pub fn blocking_probability(&self, traffic: f64, servers: u32) -> Result<f64> {
        self.model.blocking_probability(traffic, servers)
    }

    pub(crate) fn precision(&self, precision: Option<f64>) -> f64 {
        resolve_precision(precision, self.config.precision)
    }
}
