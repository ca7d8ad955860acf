//! Core error type.
//!
//! Sub-crates define their own error enums and convert `CoreError` into them
//! via `From` impls where a core validation can fail inside their operations.

use thiserror::Error;

use crate::WeightMetric;

/// Errors produced while constructing `lro-core` value types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("unknown weight metric {0:?} (expected distance, time or cost)")]
    UnknownMetric(String),

    #[error("invalid {metric} weight {value}: must be finite and non-negative")]
    InvalidWeight { metric: WeightMetric, value: f64 },
}

/// Shorthand result type for `lro-core`.
pub type CoreResult<T> = Result<T, CoreError>;
