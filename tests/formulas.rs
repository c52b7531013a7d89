//! Public API checks for the formula library

use approx::assert_relative_eq;
use tvm_formulas::{
    after_tax_return, annuity_pv, batch, convert_apr_to_ear, discount_factor, future_value,
    perpetuity_pv, present_value, real_return_inflation, AnnuityTerms, FinanceError,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn discount_factor_is_compound_growth() {
    for &(r, t) in &[(0.05, 3.0), (0.0, 12.0), (-0.02, 4.0), (0.12, 0.25)] {
        let expected: f64 = (1.0_f64 + r).powf(t);
        assert_eq!(discount_factor(r, t), expected);
        assert_eq!(discount_factor(r, 0.0), 1.0);
    }
}

#[test]
fn future_and_present_value_share_the_factor() {
    let (cf, r, t) = (1500.0, 0.035, 8.0);
    let fv = future_value(cf, r, t);
    assert_eq!(fv, present_value(cf, r, t));
    assert_eq!(fv, cf * discount_factor(r, t));
}

#[test]
fn growth_formulas_require_rate_above_growth() {
    init_logging();
    for &(r, g) in &[(0.05, 0.05), (0.03, 0.05)] {
        assert_eq!(
            annuity_pv(100.0, r, 10.0, g),
            Err(FinanceError::PreconditionViolation { rate: r, growth: g })
        );
        assert_eq!(
            perpetuity_pv(100.0, r, g),
            Err(FinanceError::PreconditionViolation { rate: r, growth: g })
        );
    }
}

#[test]
fn reference_values() -> anyhow::Result<()> {
    assert_eq!(perpetuity_pv(100.0, 0.10, 0.0)?, 1000.0);
    assert_relative_eq!(annuity_pv(100.0, 0.10, 10.0, 0.0)?, 614.4567, epsilon = 1e-4);
    assert_relative_eq!(after_tax_return(0.08, 0.25), 0.06, epsilon = 1e-15);
    assert_relative_eq!(real_return_inflation(0.05, 0.02), 0.0294117647, epsilon = 1e-10);
    assert_relative_eq!(convert_apr_to_ear(0.12, 12)?, 0.126825, epsilon = 1e-6);
    Ok(())
}

#[test]
fn repeated_calls_are_bit_identical() -> anyhow::Result<()> {
    assert_eq!(discount_factor(0.07, 3.3).to_bits(), discount_factor(0.07, 3.3).to_bits());
    assert_eq!(
        annuity_pv(120.0, 0.06, 15.0, 0.02)?.to_bits(),
        annuity_pv(120.0, 0.06, 15.0, 0.02)?.to_bits()
    );
    assert_eq!(
        convert_apr_to_ear(0.05, 4)?.to_bits(),
        convert_apr_to_ear(0.05, 4)?.to_bits()
    );
    Ok(())
}

#[test]
fn batch_results_match_scalar_calls() -> anyhow::Result<()> {
    init_logging();
    let cash_flows = [100.0, 200.0, 300.0];
    let rates = [0.04, 0.06, 0.08];
    let values = batch::annuity_pvs(&cash_flows, &rates, &[20.0], &[0.01])?;

    for (k, value) in values.iter().enumerate() {
        assert_eq!(*value, annuity_pv(cash_flows[k], rates[k], 20.0, 0.01)?);
    }

    assert!(matches!(
        batch::discount_factors(&[0.01, 0.02], &[1.0, 2.0, 3.0]),
        Err(FinanceError::ShapeMismatch { expected: 2, found: 3 })
    ));
    Ok(())
}

#[test]
fn terms_from_json() -> anyhow::Result<()> {
    let terms: AnnuityTerms = serde_json::from_str(
        r#"{"cash_flow": 100.0, "rate": 0.10, "periods": 10.0, "growth": 0.05}"#,
    )?;
    assert_eq!(terms.present_value()?, annuity_pv(100.0, 0.10, 10.0, 0.05)?);
    Ok(())
}
