//! Statistics Module
//!
//! Reduces the per-batch estimates of e to a mean and a standard error.
//!
//! ## Usage
//!
//! The driver calls `BatchCollector::record(result)` once per batch. Batches
//! that observed no derangement are counted as skipped and never enter the
//! result set. `BatchCollector::summarize(formula)` produces the final
//! `Summary`.
//!
//! ## Standard Error
//!
//! - **Corrected**: sample standard deviation / sqrt(n)
//! - **Legacy**: the same value divided by sqrt(n) a second time, kept so
//!   output can be compared against the historical figures

mod formulas;
mod collector;

pub use formulas::{mean, sample_std_dev, standard_error, legacy_standard_error};
pub use collector::{BatchCollector, summarize};
