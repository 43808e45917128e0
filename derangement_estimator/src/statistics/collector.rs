use tracing::warn;

use super::formulas::{legacy_standard_error, mean, sample_std_dev, standard_error};
use crate::error::EstimatorError;
use crate::types::{BatchEstimate, ErrorFormula, Summary};

/// Accumulates batch estimates in the order they were produced.
#[derive(Clone, Debug, Default)]
pub struct BatchCollector {
    estimates: Vec<f64>,
    skipped: usize,
}

impl BatchCollector {
    pub fn with_capacity(batch_count: usize) -> Self {
        Self {
            estimates: Vec::with_capacity(batch_count),
            skipped: 0,
        }
    }

    /// Record one batch outcome.
    ///
    /// A batch with no derangement is excluded from the result set; any other
    /// error is propagated.
    pub fn record(&mut self, result: Result<BatchEstimate, EstimatorError>) -> Result<(), EstimatorError> {
        match result {
            Ok(batch) => {
                self.estimates.push(batch.estimate);
                Ok(())
            }
            Err(EstimatorError::NoDerangements { samples }) => {
                self.skipped += 1;
                warn!(samples, skipped = self.skipped, "batch observed no derangements, excluded");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    pub fn estimates(&self) -> &[f64] {
        &self.estimates
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn summarize(&self, formula: ErrorFormula) -> Result<Summary, EstimatorError> {
        let mut summary = summarize(&self.estimates, formula)?;
        summary.batches_skipped = self.skipped;
        Ok(summary)
    }
}

/// Mean and standard error over a result set.
pub fn summarize(estimates: &[f64], formula: ErrorFormula) -> Result<Summary, EstimatorError> {
    let corrected = standard_error(estimates)?;
    let legacy = legacy_standard_error(estimates)?;
    Ok(Summary {
        mean: mean(estimates)?,
        std_dev: sample_std_dev(estimates)?,
        standard_error: match formula {
            ErrorFormula::Corrected => corrected,
            ErrorFormula::Legacy => legacy,
        },
        corrected_standard_error: corrected,
        legacy_standard_error: legacy,
        formula,
        batches_used: estimates.len(),
        batches_skipped: 0,
    })
}
