//! Language byte aggregation and percentage calculation.

mod ratio;
mod totals;

pub use ratio::{OTHER_LABEL, RatioPolicy, Ratios};
pub use totals::{LanguageTotals, aggregate_languages};
