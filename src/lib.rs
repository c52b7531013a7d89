//! TVM Formulas - Closed-form time-value-of-money calculations
//!
//! This library provides:
//! - Discount factors and single cash flow future/present values
//! - Present value of level and growing annuities and perpetuities
//! - After-tax and inflation-adjusted returns
//! - APR to EAR conversion
//! - Element-wise batch evaluation over slices
//!
//! All functions are pure; there is no shared state.
//!
//! # Example
//! ```
//! use tvm_formulas::{annuity_pv, perpetuity_pv};
//!
//! let pv = annuity_pv(100.0, 0.10, 10.0, 0.0).unwrap();
//! assert!((pv - 614.46).abs() < 0.01);
//! assert_eq!(perpetuity_pv(100.0, 0.10, 0.0).unwrap(), 1000.0);
//! assert!(perpetuity_pv(100.0, 0.05, 0.05).is_err());
//! ```

pub mod error;
pub mod valuation;
pub mod rates;
pub mod terms;
pub mod batch;

// Re-export commonly used items
pub use error::{FinanceError, Result};
pub use valuation::{
    discount_factor, future_value, present_value,
    annuity_pv, perpetuity_pv, level_annuity_pv, level_perpetuity_pv,
};
pub use rates::{after_tax_return, real_return_inflation, convert_apr_to_ear};
pub use terms::{CashFlowTerms, AnnuityTerms, PerpetuityTerms, Compounding};
