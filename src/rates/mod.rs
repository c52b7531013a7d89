//! Rate adjustments and conversions

mod adjust;
mod compounding;

pub use adjust::{after_tax_return, real_return_inflation};
pub use compounding::{convert_apr_to_ear, DAYS_PER_YEAR};
