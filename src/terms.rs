//! Serializable parameter sets for the formulas
//!
//! These carry the same inputs as the free functions, with `growth`
//! defaulting to zero when absent from serialized input.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rates::{convert_apr_to_ear, DAYS_PER_YEAR};
use crate::valuation::{annuity_pv, future_value, perpetuity_pv, present_value};

/// A single cash flow moved `periods` along the time axis at `rate`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlowTerms {
    pub cash_flow: f64,
    pub rate: f64,
    pub periods: f64,
}

impl CashFlowTerms {
    pub fn new(cash_flow: f64, rate: f64, periods: f64) -> Self {
        Self { cash_flow, rate, periods }
    }

    pub fn future_value(&self) -> f64 {
        future_value(self.cash_flow, self.rate, self.periods)
    }

    pub fn present_value(&self) -> f64 {
        present_value(self.cash_flow, self.rate, self.periods)
    }
}

/// Finite stream of payments starting at `cash_flow` one period from now
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnuityTerms {
    pub cash_flow: f64,
    pub rate: f64,
    pub periods: f64,

    /// Growth of the payment per period
    #[serde(default)]
    pub growth: f64,
}

impl AnnuityTerms {
    /// Level annuity (zero growth)
    pub fn new(cash_flow: f64, rate: f64, periods: f64) -> Self {
        Self { cash_flow, rate, periods, growth: 0.0 }
    }

    /// Set the payment growth rate
    pub fn with_growth(mut self, growth: f64) -> Self {
        self.growth = growth;
        self
    }

    pub fn present_value(&self) -> Result<f64> {
        annuity_pv(self.cash_flow, self.rate, self.periods, self.growth)
    }
}

/// Infinite stream of payments starting at `cash_flow` one period from now
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerpetuityTerms {
    pub cash_flow: f64,
    pub rate: f64,

    /// Growth of the payment per period
    #[serde(default)]
    pub growth: f64,
}

impl PerpetuityTerms {
    /// Level perpetuity (zero growth)
    pub fn new(cash_flow: f64, rate: f64) -> Self {
        Self { cash_flow, rate, growth: 0.0 }
    }

    /// Set the payment growth rate
    pub fn with_growth(mut self, growth: f64) -> Self {
        self.growth = growth;
        self
    }

    pub fn present_value(&self) -> Result<f64> {
        perpetuity_pv(self.cash_flow, self.rate, self.growth)
    }
}

/// Nominal annual rate and the number of times it compounds per year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Compounding {
    pub apr: f64,
    pub periods_per_year: u32,
}

impl Compounding {
    pub fn new(apr: f64, periods_per_year: u32) -> Self {
        Self { apr, periods_per_year }
    }

    pub fn monthly(apr: f64) -> Self {
        Self::new(apr, 12)
    }

    pub fn quarterly(apr: f64) -> Self {
        Self::new(apr, 4)
    }

    pub fn daily(apr: f64) -> Self {
        Self::new(apr, DAYS_PER_YEAR)
    }

    /// Rate earned over a year once intra-year compounding is included
    pub fn effective_annual_rate(&self) -> Result<f64> {
        convert_apr_to_ear(self.apr, self.periods_per_year)
    }
}
