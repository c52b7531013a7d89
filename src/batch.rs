//! Element-wise evaluation of the formulas over slices of inputs
//!
//! Every input slice either has the common batch length or length 1, in
//! which case its single value is reused for every element. Elements are
//! independent and evaluated in parallel with rayon.
//!
//! # Example
//! ```
//! use tvm_formulas::batch;
//!
//! let factors = batch::discount_factors(&[0.05], &[0.0, 1.0, 2.0]).unwrap();
//! assert_eq!(factors.len(), 3);
//! assert_eq!(factors[0], 1.0);
//! ```

use rayon::prelude::*;

use crate::error::{FinanceError, Result};
use crate::rates::{after_tax_return, convert_apr_to_ear, real_return_inflation};
use crate::valuation::{annuity_pv, discount_factor, future_value, perpetuity_pv, present_value};

/// Common length of a set of inputs under scalar broadcasting
fn broadcast_len(lens: &[usize]) -> Result<usize> {
    let mut expected: Option<usize> = None;

    for &found in lens.iter().filter(|&&n| n != 1) {
        match expected {
            None => expected = Some(found),
            Some(n) if n == found => {}
            Some(n) => {
                log::debug!("Batch inputs cannot be broadcast: lengths {:?}", lens);
                return Err(FinanceError::ShapeMismatch { expected: n, found });
            }
        }
    }

    let n = expected.unwrap_or(if lens.is_empty() { 0 } else { 1 });
    log::trace!("Evaluating batch of {} elements", n);
    Ok(n)
}

/// Element `idx` of a broadcast input
#[inline]
fn at(values: &[f64], idx: usize) -> f64 {
    if values.len() == 1 {
        values[0]
    } else {
        values[idx]
    }
}

fn map2<F>(a: &[f64], b: &[f64], f: F) -> Result<Vec<f64>>
where
    F: Fn(f64, f64) -> f64 + Sync,
{
    let n = broadcast_len(&[a.len(), b.len()])?;
    Ok((0..n).into_par_iter().map(|k| f(at(a, k), at(b, k))).collect())
}

fn map3<F>(a: &[f64], b: &[f64], c: &[f64], f: F) -> Result<Vec<f64>>
where
    F: Fn(f64, f64, f64) -> f64 + Sync,
{
    let n = broadcast_len(&[a.len(), b.len(), c.len()])?;
    Ok((0..n)
        .into_par_iter()
        .map(|k| f(at(a, k), at(b, k), at(c, k)))
        .collect())
}

/// Discount factor per element
pub fn discount_factors(r: &[f64], t: &[f64]) -> Result<Vec<f64>> {
    map2(r, t, discount_factor)
}

/// Future value per element
pub fn future_values(cash_flow: &[f64], r: &[f64], t: &[f64]) -> Result<Vec<f64>> {
    map3(cash_flow, r, t, future_value)
}

/// Present value per element
pub fn present_values(cash_flow: &[f64], r: &[f64], t: &[f64]) -> Result<Vec<f64>> {
    map3(cash_flow, r, t, present_value)
}

/// Annuity present value per element
///
/// Fails the whole batch if any element has `r <= g`.
pub fn annuity_pvs(cash_flow: &[f64], r: &[f64], t: &[f64], g: &[f64]) -> Result<Vec<f64>> {
    let n = broadcast_len(&[cash_flow.len(), r.len(), t.len(), g.len()])?;
    (0..n)
        .into_par_iter()
        .map(|k| annuity_pv(at(cash_flow, k), at(r, k), at(t, k), at(g, k)))
        .collect()
}

/// Perpetuity present value per element
///
/// Fails the whole batch if any element has `r <= g`.
pub fn perpetuity_pvs(cash_flow: &[f64], r: &[f64], g: &[f64]) -> Result<Vec<f64>> {
    let n = broadcast_len(&[cash_flow.len(), r.len(), g.len()])?;
    (0..n)
        .into_par_iter()
        .map(|k| perpetuity_pv(at(cash_flow, k), at(r, k), at(g, k)))
        .collect()
}

/// After-tax return per element
pub fn after_tax_returns(r: &[f64], tax: &[f64]) -> Result<Vec<f64>> {
    map2(r, tax, after_tax_return)
}

/// Inflation-adjusted real return per element
pub fn real_returns_inflation(r: &[f64], i: &[f64]) -> Result<Vec<f64>> {
    map2(r, i, real_return_inflation)
}

/// Effective annual rate per element
pub fn apr_to_ear(apr: &[f64], k: &[u32]) -> Result<Vec<f64>> {
    let n = broadcast_len(&[apr.len(), k.len()])?;
    (0..n)
        .into_par_iter()
        .map(|idx| {
            let periods = if k.len() == 1 { k[0] } else { k[idx] };
            convert_apr_to_ear(at(apr, idx), periods)
        })
        .collect()
}
