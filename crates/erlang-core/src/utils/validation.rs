//! Input validation utilities for Erlang operations

use crate::error::{ErlangError, Result};
use crate::types::{Param, ParamKind};

/// Validate a batch of parameters
///
/// All-or-nothing: the first parameter that fails its kind's predicate
/// aborts the batch and is reported with the violated constraint. An unset
/// value is accepted only for [`ParamKind::Precision`].
pub fn validate_params(params: &[Param]) -> Result<()> {
    for param in params {
        validate_param(*param)?;
    }
    Ok(())
}

/// Validate a single parameter
pub fn validate_param(param: Param) -> Result<()> {
    match (param.kind, param.value) {
        (ParamKind::Precision, None) => Ok(()),
        (kind, None) => Err(ErlangError::invalid_parameter(kind, f64::NAN, "must be set")),
        (kind, Some(value)) => kind
            .check(value)
            .map_err(|constraint| ErlangError::invalid_parameter(kind, value, constraint)),
    }
}

/// Resolve an optional per-call precision against the configured default
pub fn resolve_precision(precision: Option<f64>, default: f64) -> f64 {
    precision.unwrap_or(default)
}

/// Ensure a computed probability lies in [0, 1]
///
/// Rounding overshoot within `1e-12` is clamped; anything larger means the
/// computation is inconsistent.
pub fn ensure_probability(operation: &'static str, value: f64) -> Result<f64> {
    const SLACK: f64 = 1e-12;
    if value.is_nan() || value < -SLACK || value > 1.0 + SLACK {
        return Err(ErlangError::InconsistentProbability { operation, value });
    }
    Ok(value.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_batch() {
        let params = [
            Param::traffic(5.0),
            Param::servers(10),
            Param::probability(0.2),
            Param::time(20.0),
            Param::precision(None),
        ];
        assert!(validate_params(&params).is_ok());
    }

    #[test]
    fn test_first_failure_is_reported() {
        let params = [
            Param::traffic(5.0),
            Param::probability(1.2),
            Param::time(-3.0),
        ];
        match validate_params(&params) {
            Err(ErlangError::InvalidParameter { kind, value, .. }) => {
                assert_eq!(kind, ParamKind::Probability);
                assert_eq!(value, 1.2);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_unset_only_allowed_for_precision() {
        let unset_time = Param {
            kind: ParamKind::Time,
            value: None,
        };
        assert!(validate_param(unset_time).is_err());
        assert!(validate_param(Param::precision(None)).is_ok());
        assert!(validate_param(Param::precision(Some(0.0))).is_err());
    }

    #[test]
    fn test_ensure_probability() {
        assert_eq!(ensure_probability("test", 1.0 + 1e-14).unwrap(), 1.0);
        assert_eq!(ensure_probability("test", 0.25).unwrap(), 0.25);
        assert!(ensure_probability("test", 1.01).is_err());
        assert!(ensure_probability("test", f64::NAN).is_err());
    }
}
