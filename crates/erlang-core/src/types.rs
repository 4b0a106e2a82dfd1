//! Parameter kinds and their validity predicates
//!
//! Each quantity that enters a computation is tagged with a [`ParamKind`].
//! The kind owns the predicate that decides whether a raw value is usable,
//! so validation never depends on string lookups.

use std::fmt;

/// The kinds of scalar quantity accepted by the Erlang operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// Offered load in Erlangs, `A >= 0`
    Traffic,
    /// Number of serving agents, a non-negative integer
    Servers,
    /// A probability, `0 <= p <= 1`
    Probability,
    /// A duration (service time, wait time, deadline), `t >= 0`
    Time,
    /// Convergence tolerance for iterative solves, `eps > 0`
    Precision,
    /// Request arrival rate (requests per time unit), `lambda >= 0`
    Frequency,
}

impl ParamKind {
    /// Get the parameter kind name
    pub fn name(self) -> &'static str {
        match self {
            Self::Traffic => "traffic",
            Self::Servers => "servers",
            Self::Probability => "probability",
            Self::Time => "time",
            Self::Precision => "precision",
            Self::Frequency => "frequency",
        }
    }

    /// Check a raw value against this kind's constraint
    ///
    /// Returns the violated constraint on failure. NaN never passes.
    pub fn check(self, value: f64) -> std::result::Result<(), &'static str> {
        if value.is_nan() {
            return Err("must be a number");
        }
        match self {
            Self::Traffic | Self::Time | Self::Frequency => {
                if value < 0.0 {
                    Err("must be >= 0")
                } else if value.is_infinite() {
                    Err("must be finite")
                } else {
                    Ok(())
                }
            }
            Self::Servers => {
                if value < 0.0 {
                    Err("must be >= 0")
                } else if value.fract() != 0.0 || value > f64::from(u32::MAX) {
                    Err("must be a whole number of servers")
                } else {
                    Ok(())
                }
            }
            Self::Probability => {
                if (0.0..=1.0).contains(&value) {
                    Ok(())
                } else {
                    Err("must lie in [0, 1]")
                }
            }
            Self::Precision => {
                if value > 0.0 && value.is_finite() {
                    Ok(())
                } else {
                    Err("must be finite and > 0")
                }
            }
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A tagged parameter value awaiting validation
///
/// `value` is `None` only for an unset precision, which means
/// "use the configured default".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Param {
    /// The kind deciding which predicate applies
    pub kind: ParamKind,
    /// The raw value
    pub value: Option<f64>,
}

impl Param {
    /// Offered traffic in Erlangs
    pub fn traffic(value: f64) -> Self {
        Self { kind: ParamKind::Traffic, value: Some(value) }
    }

    /// A server count
    pub fn servers(value: u32) -> Self {
        Self { kind: ParamKind::Servers, value: Some(f64::from(value)) }
    }

    /// A probability
    pub fn probability(value: f64) -> Self {
        Self { kind: ParamKind::Probability, value: Some(value) }
    }

    /// A duration
    pub fn time(value: f64) -> Self {
        Self { kind: ParamKind::Time, value: Some(value) }
    }

    /// An optional solver precision
    pub fn precision(value: Option<f64>) -> Self {
        Self { kind: ParamKind::Precision, value }
    }

    /// A request frequency
    pub fn frequency(value: f64) -> Self {
        Self { kind: ParamKind::Frequency, value: Some(value) }
    }
}
