//! Inversions of the direct formulas
//!
//! Each direct formula can be solved for one of its inputs:
//!
//! | Formula | Servers | Traffic | Service time | Deadline |
//! |---|---|---|---|---|
//! | wait probability | `servers_waitprob` | `traffic_waitprob` | | |
//! | served within deadline | `servers_maxtime` | `traffic_maxtime` | `service_time_maxtime`, `service_time2_maxtime` | `max_time_maxtime` |
//! | average wait time | `servers_waittime` | `traffic_waittime` | `service_time_waittime`, `service_time2_waittime` | |
//!
//! Server counts come from [`crate::search::generic_servers`], traffic from
//! [`crate::search::generic_traffic`]. The `service_time2_*` variants take a
//! request frequency instead of a traffic value, so traffic and service time
//! move together and the answer is found with [`crate::solver::cross`].
//! The remaining inversions are closed form.

mod maxtime;
mod waitprob;
mod waittime;

use crate::error::{ErlangError, Result};

/// Attribute a search failure to the inversion that ran the search
pub(crate) fn relabel(operation: &'static str) -> impl Fn(ErlangError) -> ErlangError {
    move |err| match err {
        ErlangError::Unreachable { bound, .. } => ErlangError::Unreachable { operation, bound },
        other => other,
    }
}

/// Read an undefined probe (unstable queue) as a fixed predicate outcome
pub(crate) fn undefined_as(probe: Result<bool>, outcome: bool) -> Result<bool> {
    match probe {
        Err(err) if err.is_undefined() => Ok(outcome),
        other => other,
    }
}
