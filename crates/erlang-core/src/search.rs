//! Monotone boundary searches
//!
//! Both searches assume a predicate that is true up to some boundary and
//! false after it. Errors raised by the predicate abort the search and are
//! returned unchanged.

use tracing::{debug, trace, warn};

use crate::error::{ErlangError, Result};

/// Find the smallest server count for which `predicate` is false
///
/// Probes 0, 1, 2, 4, ... until the predicate fails, then narrows the
/// last doubling step with a binary search. Gives up with
/// [`ErlangError::Unreachable`] if the predicate still holds at
/// `max_servers`.
pub fn generic_servers<F>(mut predicate: F, max_servers: u32) -> Result<u32>
where
    F: FnMut(u32) -> Result<bool>,
{
    if !predicate(0)? {
        return Ok(0);
    }

    let exhausted = || {
        warn!("Server search exceeded limit of {} servers", max_servers);
        Err(ErlangError::unreachable("generic_servers", f64::from(max_servers)))
    };
    if max_servers == 0 {
        return exhausted();
    }

    let mut low = 0u32;
    let mut high = 1u32;
    loop {
        trace!("Server search probing {}", high);
        if !predicate(high)? {
            break;
        }
        low = high;
        if high == max_servers {
            return exhausted();
        }
        high = high.saturating_mul(2).min(max_servers);
    }

    // predicate(low) holds, predicate(high) does not
    while high - low > 1 {
        let mid = low + (high - low) / 2;
        if predicate(mid)? {
            low = mid;
        } else {
            high = mid;
        }
    }

    debug!("Server search settled on {} servers", high);
    Ok(high)
}

/// Find the largest traffic in `[0, upper_bound]` for which `predicate` holds
///
/// The result is resolved to within `precision` and always lies on the side
/// where the predicate holds. Returns `upper_bound` when the predicate holds
/// there, and [`ErlangError::Unreachable`] when it already fails at zero.
pub fn generic_traffic<F>(mut predicate: F, precision: f64, upper_bound: f64) -> Result<f64>
where
    F: FnMut(f64) -> Result<bool>,
{
    if !predicate(0.0)? {
        return Err(ErlangError::unreachable("generic_traffic", 0.0));
    }
    if predicate(upper_bound)? {
        return Ok(upper_bound);
    }

    let mut low = 0.0;
    let mut high = upper_bound;
    let mut iterations = 0usize;
    while high - low > precision {
        let mid = low + (high - low) / 2.0;
        if mid <= low || mid >= high {
            break;
        }
        trace!("Traffic search [{}, {}] probing {}", low, high, mid);
        if predicate(mid)? {
            low = mid;
        } else {
            high = mid;
        }
        iterations += 1;
    }

    debug!(
        "Traffic search settled on {} after {} iterations",
        low, iterations
    );
    Ok(low)
}
