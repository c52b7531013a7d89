//! Nominal to effective annual rate conversion

use crate::error::{FinanceError, Result};

/// Compounding periods per year used for daily compounding
pub const DAYS_PER_YEAR: u32 = 365;

/// Effective annual rate of a nominal `apr` compounded `k` times per year
///
/// `EAR = (1 + apr / k)^k - 1`
///
/// # Errors
/// [`FinanceError::InvalidCompoundingFrequency`] when `k` is zero.
pub fn convert_apr_to_ear(apr: f64, k: u32) -> Result<f64> {
    if k == 0 {
        log::debug!("Rejected APR conversion with zero compounding periods (apr = {})", apr);
        return Err(FinanceError::InvalidCompoundingFrequency);
    }

    let periods = f64::from(k);
    let period_rate = apr / periods;
    Ok((1.0 + period_rate).powf(periods) - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_compounding() {
        assert_relative_eq!(convert_apr_to_ear(0.12, 12).unwrap(), 0.126825, epsilon = 1e-6);
    }

    #[test]
    fn test_annual_compounding_is_identity() {
        assert_relative_eq!(convert_apr_to_ear(0.07, 1).unwrap(), 0.07, max_relative = 1e-12);
    }

    #[test]
    fn test_daily_compounding_approaches_continuous() {
        let daily = convert_apr_to_ear(0.10, DAYS_PER_YEAR).unwrap();
        let continuous = 0.10_f64.exp() - 1.0;
        assert!(daily < continuous);
        assert!((continuous - daily) < 1e-4);
    }

    #[test]
    fn test_zero_frequency_rejected() {
        assert_eq!(convert_apr_to_ear(0.12, 0), Err(FinanceError::InvalidCompoundingFrequency));
    }
}
