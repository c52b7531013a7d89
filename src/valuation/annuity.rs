//! Present value of annuities and perpetuities with optional growth
//!
//! Both formulas sum a geometric series of cash flows that starts at
//! `cash_flow` one period from now and grows by `growth` each period. The
//! series only converges (perpetuity) or stays positive (annuity) when the
//! rate exceeds the growth, so that is checked before evaluating.

use crate::error::{FinanceError, Result};

/// Reject `r <= g`, including either side being NaN
fn ensure_rate_exceeds_growth(r: f64, g: f64) -> Result<()> {
    if r > g {
        Ok(())
    } else {
        log::debug!("Rejected growth formula inputs: r = {}, g = {}", r, g);
        Err(FinanceError::PreconditionViolation { rate: r, growth: g })
    }
}

/// Present value of an annuity paying `cash_flow` at the end of each of `t`
/// periods, growing by `g` per period
///
/// `PV = CF / (r - g) * (1 - ((1 + r) / (1 + g))^-t)`
///
/// # Errors
/// [`FinanceError::PreconditionViolation`] when `r <= g`.
pub fn annuity_pv(cash_flow: f64, r: f64, t: f64, g: f64) -> Result<f64> {
    ensure_rate_exceeds_growth(r, g)?;
    Ok(cash_flow / (r - g) * (1.0 - ((1.0 + r) / (1.0 + g)).powf(-t)))
}

/// Present value of a perpetuity paying `cash_flow` from next period,
/// growing by `g` per period
///
/// `PV = CF / (r - g)`
///
/// # Errors
/// [`FinanceError::PreconditionViolation`] when `r <= g`.
pub fn perpetuity_pv(cash_flow: f64, r: f64, g: f64) -> Result<f64> {
    ensure_rate_exceeds_growth(r, g)?;
    Ok(cash_flow / (r - g))
}

/// Level-payment annuity (`g = 0`)
pub fn level_annuity_pv(cash_flow: f64, r: f64, t: f64) -> Result<f64> {
    annuity_pv(cash_flow, r, t, 0.0)
}

/// Level-payment perpetuity (`g = 0`)
pub fn level_perpetuity_pv(cash_flow: f64, r: f64) -> Result<f64> {
    perpetuity_pv(cash_flow, r, 0.0)
}
