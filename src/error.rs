//! Error types for the formula library
//!
//! Only conditions the formulas check explicitly are represented here.
//! IEEE effects of degenerate inputs (NaN from a fractional power of a
//! negative base, infinity from dividing by zero) are returned as-is.

use thiserror::Error;

/// Errors raised by formula validation
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FinanceError {
    /// Growing annuity/perpetuity formulas require the rate to exceed growth.
    #[error("Underlying assumption of this calculation is that r > g (r = {rate}, g = {growth})")]
    PreconditionViolation {
        /// Rate of return per period
        rate: f64,
        /// Growth rate of the cash flow per period
        growth: f64,
    },

    /// APR to EAR conversion with zero compounding periods per year.
    #[error("Compounding frequency must be at least one period per year")]
    InvalidCompoundingFrequency,

    /// Batch inputs whose lengths cannot be broadcast together.
    #[error("Cannot broadcast input of length {found} against length {expected}")]
    ShapeMismatch {
        /// Common length of the batch
        expected: usize,
        /// Offending input length
        found: usize,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, FinanceError>;
