//! Utility functions shared by the formula and inversion modules

pub mod validation;

pub use validation::{ensure_probability, resolve_precision, validate_param, validate_params};
