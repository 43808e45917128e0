use serde::Serialize;
use std::fmt;

use crate::error::EstimatorError;

// =============================================================================
// CONSTANTS
// =============================================================================

pub const BATCH_COUNT: usize = 1_000; // Makes for precision
pub const SAMPLES_PER_BATCH: usize = 100; // Makes for accuracy
pub const SEQUENCE_LEN: usize = 1_000; // Elements per permutation
pub const MIN_BATCHES_FOR_STD_DEV: usize = 2; // n - 1 divisor needs at least two estimates

// =============================================================================
// ENUMS
// =============================================================================

/// Which standard-error formula the summary reports.
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorFormula {
    /// sample_std_dev / sqrt(n), applied once
    #[default]
    Corrected,
    /// sample_std_dev / sqrt(n) / sqrt(n); reads roughly 5x too small at the default sizes
    Legacy,
}

// =============================================================================
// CONFIGURATION
// =============================================================================

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub batch_count: usize,
    pub samples_per_batch: usize,
    pub sequence_len: usize,
    pub error_formula: ErrorFormula,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            batch_count: BATCH_COUNT,
            samples_per_batch: SAMPLES_PER_BATCH,
            sequence_len: SEQUENCE_LEN,
            error_formula: ErrorFormula::Corrected,
        }
    }
}

impl SimulationConfig {
    /// Reject configurations that can never produce a summary.
    ///
    /// A sequence length of zero is allowed: every empty permutation is
    /// vacuously a derangement, so each batch estimates exactly 1.0.
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if self.samples_per_batch == 0 {
            return Err(EstimatorError::InvalidConfig(
                "samples_per_batch must be at least 1".to_string(),
            ));
        }
        if self.batch_count < MIN_BATCHES_FOR_STD_DEV {
            return Err(EstimatorError::InvalidConfig(format!(
                "batch_count must be at least {} to compute a standard deviation, got {}",
                MIN_BATCHES_FOR_STD_DEV, self.batch_count
            )));
        }
        Ok(())
    }
}

// =============================================================================
// BATCH RESULT
// =============================================================================

/// One noisy estimate of e: samples drawn divided by derangements observed.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct BatchEstimate {
    pub samples: usize,
    pub derangements: usize,
    pub estimate: f64,
}

// =============================================================================
// SUMMARY
// =============================================================================

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub std_dev: f64,
    /// Value reported on the output line, chosen by `formula`
    pub standard_error: f64,
    pub corrected_standard_error: f64,
    pub legacy_standard_error: f64,
    pub formula: ErrorFormula,
    pub batches_used: usize,
    pub batches_skipped: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e = {:.6} +-{:.6}", self.mean, self.standard_error)
    }
}
