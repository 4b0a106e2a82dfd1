//! Crossing point of two monotone curves
//!
//! Some inversions have no closed form but reduce to finding where a rising
//! curve meets a falling one over the same variable. [`cross`] bisects the
//! difference `desc(v) - asc(v)`, which is decreasing over the bracket.
//!
//! ```rust
//! use erlang_core::solver::cross;
//!
//! // 2v rises, 6 - v falls; they meet at v = 2
//! let v = cross(|v| Ok(2.0 * v), |v| Ok(6.0 - v), 0.0, 10.0, 1e-9)?;
//! assert!((v - 2.0).abs() < 1e-9);
//! # Ok::<(), erlang_core::ErlangError>(())
//! ```

use tracing::{debug, trace};

use crate::error::{ErlangError, Result};

/// Locate `v` in `[begin, end]` where `asc(v)` meets `desc(v)`
///
/// `asc` must be non-decreasing and `desc` non-increasing over the bracket.
/// Bisection stops once the bracket is narrower than `precision` and returns
/// its midpoint, so the result is within `precision / 2` of the crossing.
/// A bracket that is already narrower than `precision` is returned without
/// evaluating either curve. The curves are only evaluated strictly inside
/// the bracket.
///
/// # Errors
///
/// Propagates any error raised by a curve. Returns
/// [`ErlangError::NonConvergence`] if floating point spacing stops the
/// bracket from shrinking before `precision` is reached.
pub fn cross<A, D>(asc: A, desc: D, begin: f64, end: f64, precision: f64) -> Result<f64>
where
    A: Fn(f64) -> Result<f64>,
    D: Fn(f64) -> Result<f64>,
{
    let mut low = begin;
    let mut high = end;
    let mut iterations = 0usize;

    while high - low >= precision {
        let mid = low + (high - low) / 2.0;
        if mid <= low || mid >= high {
            return Err(ErlangError::NonConvergence {
                iterations,
                width: high - low,
            });
        }

        let difference = desc(mid)? - asc(mid)?;
        trace!("cross [{}, {}] mid={} diff={}", low, high, mid, difference);
        if difference > 0.0 {
            low = mid;
        } else {
            high = mid;
        }
        iterations += 1;
    }

    let result = low + (high - low) / 2.0;
    debug!("cross converged to {} after {} iterations", result, iterations);
    Ok(result)
}
