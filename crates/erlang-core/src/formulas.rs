//! Direct Erlang C formulas
//!
//! Given the offered traffic `A` (Erlangs), the number of servers `S` and,
//! where needed, the mean service time and a deadline, these compute:
//!
//! ```text
//! wait probability        C  = B / (1 - (1 - B)·A/S)        B = ErlangB(A, S)
//! served within deadline  P  = 1 - C·exp(-(S - A)·t / mst)
//! average wait time       W  = C·mst / (S - A)
//! ```
//!
//! Saturated inputs (zero traffic, zero servers, zero time) are answered
//! directly instead of going through the general formula.

use crate::blocking::BlockingModel;
use crate::calculator::ErlangC;
use crate::error::{ErlangError, Result};
use crate::types::Param;
use crate::utils::{ensure_probability, validate_params};

impl<M: BlockingModel> ErlangC<M> {
    /// Probability that a request has to wait in the queue
    ///
    /// A blocking probability of exactly 0 or 1 is returned unchanged.
    /// This function does not require `servers > traffic`: an unstable
    /// queue (`servers <= traffic`) makes every request wait, so the result
    /// saturates at 1. Formulas that need a steady state check for it
    /// themselves.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid input or if the blocking model fails.
    pub fn wait_probability(&self, traffic: f64, servers: u32) -> Result<f64> {
        validate_params(&[Param::traffic(traffic), Param::servers(servers)])?;

        let blocking = ensure_probability(
            "blocking_probability",
            self.blocking_probability(traffic, servers)?,
        )?;
        if blocking == 0.0 || blocking == 1.0 {
            return Ok(blocking);
        }

        let servers = f64::from(servers);
        if servers <= traffic {
            return Ok(1.0);
        }

        let wait = blocking / (1.0 - (1.0 - blocking) * traffic / servers);
        ensure_probability("wait_probability", wait)
    }

    /// Probability that a request is served within `maxtime`
    ///
    /// Degenerate inputs are checked in this order before the steady state
    /// requirement: zero traffic gives 1, zero servers gives 0, a zero mean
    /// service time gives 1 and a zero deadline gives 0.
    ///
    /// # Errors
    ///
    /// Returns [`ErlangError::Undefined`] when `servers <= traffic`.
    pub fn maxtime_probability(
        &self,
        traffic: f64,
        servers: u32,
        mean_service_time: f64,
        maxtime: f64,
    ) -> Result<f64> {
        validate_params(&[
            Param::traffic(traffic),
            Param::servers(servers),
            Param::time(mean_service_time),
            Param::time(maxtime),
        ])?;

        if traffic == 0.0 {
            return Ok(1.0);
        }
        if servers == 0 {
            return Ok(0.0);
        }
        if mean_service_time == 0.0 {
            return Ok(1.0);
        }
        if maxtime == 0.0 {
            return Ok(0.0);
        }

        let spare = f64::from(servers) - traffic;
        if spare <= 0.0 {
            return Err(no_steady_state("maxtime_probability", traffic, servers));
        }

        let wait = self.wait_probability(traffic, servers)?;
        let served = 1.0 - wait * (-spare * maxtime / mean_service_time).exp();
        ensure_probability("maxtime_probability", served)
    }

    /// Average time a request spends waiting in the queue
    ///
    /// Zero traffic or a zero mean service time gives 0.
    ///
    /// # Errors
    ///
    /// Returns [`ErlangError::Undefined`] when `servers` is zero or
    /// `servers <= traffic`.
    pub fn average_wait_time(
        &self,
        traffic: f64,
        servers: u32,
        mean_service_time: f64,
    ) -> Result<f64> {
        validate_params(&[
            Param::traffic(traffic),
            Param::servers(servers),
            Param::time(mean_service_time),
        ])?;

        if traffic == 0.0 || mean_service_time == 0.0 {
            return Ok(0.0);
        }
        if servers == 0 {
            return Err(ErlangError::undefined(
                "average_wait_time",
                "no servers to serve the queue",
            ));
        }

        let spare = f64::from(servers) - traffic;
        if spare <= 0.0 {
            return Err(no_steady_state("average_wait_time", traffic, servers));
        }

        let wait = self.wait_probability(traffic, servers)?;
        Ok(wait * mean_service_time / spare)
    }
}

pub(crate) fn no_steady_state(operation: &'static str, traffic: f64, servers: u32) -> ErlangError {
    ErlangError::undefined(
        operation,
        format!(
            "{} servers cannot carry {} Erlangs, the queue has no steady state",
            servers, traffic
        ),
    )
}
