//! Valuation of single cash flows, annuities and perpetuities

mod discount;
mod annuity;

pub use discount::{discount_factor, future_value, present_value};
pub use annuity::{annuity_pv, perpetuity_pv, level_annuity_pv, level_perpetuity_pv};
