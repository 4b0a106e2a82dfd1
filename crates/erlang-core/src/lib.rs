//! # Erlang-Core: Queueing Formulas for Call Center Capacity Planning
//!
//! This library evaluates the Erlang C model (M/M/S/∞/∞: Poisson arrivals,
//! exponential service times, `S` servers, unlimited queue) used to size
//! telephony and call center staffing, and solves its formulas backwards.
//!
//! ## Features
//!
//! - **Direct formulas**: probability of waiting, probability of being
//!   served within a deadline, average wait time
//! - **Inversions**: required servers, supported traffic, implied service
//!   time or deadline for a target probability or wait time
//! - **Explicit failure**: invalid input, unstable queues and unreachable
//!   targets are reported as [`ErlangError`] values, never panics
//! - **Configurable precision**: a per-engine default, overridable per call
//!
//! ## Usage
//!
//! ```rust
//! use erlang_core::ErlangC;
//!
//! let engine = ErlangC::new();
//!
//! // 5 Erlangs offered to 10 agents
//! let waits = engine.wait_probability(5.0, 10)?;
//! assert!((waits - 0.0361).abs() < 1e-4);
//!
//! // How many agents answer 80% of calls within 20s when calls last 180s?
//! let agents = engine.servers_maxtime(5.0, 180.0, 20.0, 0.8)?;
//! assert!(engine.maxtime_probability(5.0, agents, 180.0, 20.0)? >= 0.8);
//! # Ok::<(), erlang_core::ErlangError>(())
//! ```
//!
//! The free functions at the crate root run on a default [`ErlangC`].

#![deny(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod blocking;
pub mod calculator;
pub mod config;
pub mod error;
pub mod formulas;
pub mod inversion;
pub mod logging;
pub mod metrics;
pub mod search;
pub mod solver;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use blocking::{BlockingModel, ErlangB};
pub use calculator::ErlangC;
pub use config::{ErlangConfig, DEFAULT_MAX_SERVERS, DEFAULT_PRECISION};
pub use error::{ErlangError, ErrorCategory, Result};
pub use logging::{setup_logging, LoggingConfig};
pub use metrics::QueueMetrics;
pub use types::{Param, ParamKind};

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Names of the operations exposed by the engine
pub const OPERATIONS: &[&str] = &[
    "wait_probability",
    "maxtime_probability",
    "average_wait_time",
    "servers_waitprob",
    "traffic_waitprob",
    "servers_maxtime",
    "traffic_maxtime",
    "service_time_maxtime",
    "service_time2_maxtime",
    "max_time_maxtime",
    "servers_waittime",
    "traffic_waittime",
    "service_time_waittime",
    "service_time2_waittime",
];

/// Initialize the library
///
/// Installs the default [`LoggingConfig`] subscriber if none is set yet.
/// Safe to call multiple times.
pub fn init() -> Result<()> {
    // an already installed subscriber is kept
    let _ = setup_logging(LoggingConfig::default());

    tracing::info!("Erlang-Core v{} initialized", VERSION);
    tracing::debug!("Default precision: {:e}", DEFAULT_PRECISION);

    Ok(())
}

/// Get library information
pub fn info() -> LibraryInfo {
    LibraryInfo {
        version: VERSION,
        operations: OPERATIONS.to_vec(),
        default_precision: DEFAULT_PRECISION,
    }
}

/// Library information structure
#[derive(Debug, Clone)]
pub struct LibraryInfo {
    /// Library version
    pub version: &'static str,
    /// Names of the available operations
    pub operations: Vec<&'static str>,
    /// Precision used when none is configured
    pub default_precision: f64,
}

/// Probability that a request waits (see [`ErlangC::wait_probability`])
pub fn wait_probability(traffic: f64, servers: u32) -> Result<f64> {
    ErlangC::new().wait_probability(traffic, servers)
}

/// Probability of service within `maxtime` (see [`ErlangC::maxtime_probability`])
pub fn maxtime_probability(
    traffic: f64,
    servers: u32,
    mean_service_time: f64,
    maxtime: f64,
) -> Result<f64> {
    ErlangC::new().maxtime_probability(traffic, servers, mean_service_time, maxtime)
}

/// Average queue wait (see [`ErlangC::average_wait_time`])
pub fn average_wait_time(traffic: f64, servers: u32, mean_service_time: f64) -> Result<f64> {
    ErlangC::new().average_wait_time(traffic, servers, mean_service_time)
}

/// Servers for a wait probability target (see [`ErlangC::servers_waitprob`])
pub fn servers_waitprob(traffic: f64, probability: f64) -> Result<u32> {
    ErlangC::new().servers_waitprob(traffic, probability)
}

/// Traffic for a wait probability target (see [`ErlangC::traffic_waitprob`])
pub fn traffic_waitprob(servers: u32, probability: f64, precision: Option<f64>) -> Result<f64> {
    ErlangC::new().traffic_waitprob(servers, probability, precision)
}

/// Servers for a service level target (see [`ErlangC::servers_maxtime`])
pub fn servers_maxtime(
    traffic: f64,
    mean_service_time: f64,
    maxtime: f64,
    probability: f64,
) -> Result<u32> {
    ErlangC::new().servers_maxtime(traffic, mean_service_time, maxtime, probability)
}

/// Traffic for a service level target (see [`ErlangC::traffic_maxtime`])
pub fn traffic_maxtime(
    servers: u32,
    mean_service_time: f64,
    maxtime: f64,
    probability: f64,
    precision: Option<f64>,
) -> Result<f64> {
    ErlangC::new().traffic_maxtime(servers, mean_service_time, maxtime, probability, precision)
}

/// Service time for a service level target (see [`ErlangC::service_time_maxtime`])
pub fn service_time_maxtime(
    traffic: f64,
    servers: u32,
    maxtime: f64,
    probability: f64,
) -> Result<f64> {
    ErlangC::new().service_time_maxtime(traffic, servers, maxtime, probability)
}

/// Service time for a service level target at a request frequency
/// (see [`ErlangC::service_time2_maxtime`])
pub fn service_time2_maxtime(
    servers: u32,
    frequency: f64,
    maxtime: f64,
    probability: f64,
    precision: Option<f64>,
) -> Result<f64> {
    ErlangC::new().service_time2_maxtime(servers, frequency, maxtime, probability, precision)
}

/// Deadline for a service level target (see [`ErlangC::max_time_maxtime`])
pub fn max_time_maxtime(
    traffic: f64,
    servers: u32,
    mean_service_time: f64,
    probability: f64,
) -> Result<f64> {
    ErlangC::new().max_time_maxtime(traffic, servers, mean_service_time, probability)
}

/// Servers for an average wait target (see [`ErlangC::servers_waittime`])
pub fn servers_waittime(traffic: f64, mean_service_time: f64, waittime: f64) -> Result<u32> {
    ErlangC::new().servers_waittime(traffic, mean_service_time, waittime)
}

/// Traffic for an average wait target (see [`ErlangC::traffic_waittime`])
pub fn traffic_waittime(
    servers: u32,
    mean_service_time: f64,
    waittime: f64,
    precision: Option<f64>,
) -> Result<f64> {
    ErlangC::new().traffic_waittime(servers, mean_service_time, waittime, precision)
}

/// Service time for an average wait target (see [`ErlangC::service_time_waittime`])
pub fn service_time_waittime(traffic: f64, servers: u32, waittime: f64) -> Result<f64> {
    ErlangC::new().service_time_waittime(traffic, servers, waittime)
}

/// Service time for an average wait target at a request frequency
/// (see [`ErlangC::service_time2_waittime`])
pub fn service_time2_waittime(
    servers: u32,
    frequency: f64,
    waittime: f64,
    precision: Option<f64>,
) -> Result<f64> {
    ErlangC::new().service_time2_waittime(servers, frequency, waittime, precision)
}
