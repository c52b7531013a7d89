//! Compound discount factor and single cash flow values
//!
//! Future and present value share the same multiplicative factor. The
//! direction of the move along the time axis is carried by the sign of `t`:
//! a positive `t` compounds forward, a negative `t` discounts back.

/// Discount factor at time `t` for a per-period rate `r`
///
/// `DF = (1 + r)^t`. A zero `t` gives exactly 1.0 for any `r`.
///
/// A negative base (`r < -1`) with a fractional `t` has no real result and
/// returns NaN.
pub fn discount_factor(r: f64, t: f64) -> f64 {
    (1.0 + r).powf(t)
}

/// Value at time `t` of a cash flow received at time 0
pub fn future_value(cash_flow: f64, r: f64, t: f64) -> f64 {
    cash_flow * discount_factor(r, t)
}

/// Value of a cash flow moved `t` periods along the time axis
///
/// Uses the same factor as [`future_value`]; pass a negative `t` to discount
/// a future cash flow back to today.
pub fn present_value(cash_flow: f64, r: f64, t: f64) -> f64 {
    cash_flow * discount_factor(r, t)
}
