//! Error types for fakegen-core.
//!
//! The generation core itself never fails under in-range inputs; everything
//! here is boundary validation of caller-supplied parameters.

use crate::params::MAX_ERROR_INTENSITY;

/// Rejected generation parameters.
///
/// Validation happens at the input-handling boundary (parameter setters and
/// `generate_page`), never inside the synthesizer or corruption engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamsError {
    /// Error intensity was NaN or infinite.
    #[error("error intensity must be finite, got {value}")]
    IntensityNotFinite { value: f64 },

    /// Error intensity was negative.
    #[error("error intensity must be non-negative, got {value}")]
    IntensityNegative { value: f64 },

    /// Error intensity exceeded the configured ceiling.
    #[error("error intensity {value} exceeds maximum {max}", max = MAX_ERROR_INTENSITY)]
    IntensityTooLarge { value: f64 },

    /// Pages are 1-based.
    #[error("page must be >= 1")]
    PageZero,
}
