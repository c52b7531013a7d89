//! After-tax and inflation-adjusted returns

/// Return left after tax: `r * (1 - tax)`
pub fn after_tax_return(r: f64, tax: f64) -> f64 {
    r * (1.0 - tax)
}

/// Real rate of return for nominal `r` and inflation `i`
///
/// Solves `1 + rr = (1 + r) / (1 + i)`. An inflation rate of exactly -1
/// divides by zero and yields an infinite (or NaN) result.
pub fn real_return_inflation(r: f64, i: f64) -> f64 {
    (1.0 + r) / (1.0 + i) - 1.0
}
