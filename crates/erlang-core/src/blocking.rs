//! Blocking probability (Erlang B)
//!
//! Erlang C is derived from the Erlang B loss formula. The loss formula is
//! behind the [`BlockingModel`] trait so an engine can run against another
//! implementation (a table lookup, or a fixture in tests).

use crate::error::Result;
use crate::types::Param;
use crate::utils::validate_params;

/// Source of the blocking probability of a loss system
pub trait BlockingModel {
    /// Probability that a request is rejected when `traffic` Erlangs are
    /// offered to `servers` servers with no waiting room
    ///
    /// # Errors
    ///
    /// Returns an error if `traffic` is not a valid traffic value.
    fn blocking_probability(&self, traffic: f64, servers: u32) -> Result<f64>;
}

impl<M: BlockingModel + ?Sized> BlockingModel for &M {
    fn blocking_probability(&self, traffic: f64, servers: u32) -> Result<f64> {
        (**self).blocking_probability(traffic, servers)
    }
}

/// Erlang B evaluated with the standard recurrence
///
/// ```text
/// B(A, 0) = 1
/// B(A, n) = A·B(A, n-1) / (n + A·B(A, n-1))
/// ```
///
/// The recurrence stays in [0, 1] at every step, so it does not overflow
/// for large server counts the way the factorial form does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErlangB;

impl BlockingModel for ErlangB {
    fn blocking_probability(&self, traffic: f64, servers: u32) -> Result<f64> {
        validate_params(&[Param::traffic(traffic), Param::servers(servers)])?;

        if servers == 0 {
            return Ok(1.0);
        }
        if traffic == 0.0 {
            return Ok(0.0);
        }

        let mut blocking = 1.0;
        for n in 1..=servers {
            let load = traffic * blocking;
            blocking = load / (f64::from(n) + load);
        }
        Ok(blocking)
    }
}
