//! Derangement Estimator
//!
//! **Method:**
//! Shuffle the identity sequence `0..N` and check whether any element kept its
//! place. For large N the probability of a derangement is 1/e, so the number
//! of shuffles drawn per derangement observed estimates e.
//!
//! **Pipeline:**
//! - Sampler: identity sequence, random permutation, derangement test
//! - Estimator: one batch of shuffles reduced to samples / derangements
//! - Statistics: mean and standard error over all batch estimates
//!
//! **Randomness:**
//! One ChaCha generator per process, seeded once and passed down by `&mut`.

use rand::Rng;
use tracing::{debug, info};

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

pub mod error;
pub mod estimator;
pub mod logging;
pub mod sampler;
pub mod seed;
pub mod statistics;
pub mod types;

#[cfg(test)]
mod tests;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use error::EstimatorError;
pub use estimator::estimate_batch;
pub use sampler::{generate_sequence, is_derangement, sample_permutation};
pub use seed::RandomnessSeed;
pub use types::{BatchEstimate, ErrorFormula, SimulationConfig, Summary};

// =============================================================================
// DRIVER
// =============================================================================

/// Run every batch in order and summarise the estimates.
pub fn run_simulation<R: Rng + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Result<Summary, EstimatorError> {
    config.validate()?;

    info!(
        batches = config.batch_count,
        samples = config.samples_per_batch,
        sequence_len = config.sequence_len,
        formula = ?config.error_formula,
        "starting simulation"
    );

    let mut collector = statistics::BatchCollector::with_capacity(config.batch_count);
    for _ in 0..config.batch_count {
        collector.record(estimate_batch(config.samples_per_batch, config.sequence_len, rng))?;
    }

    let summary = collector.summarize(config.error_formula)?;

    info!(
        mean = summary.mean,
        standard_error = summary.standard_error,
        skipped = summary.batches_skipped,
        "simulation complete"
    );
    if let Ok(json) = serde_json::to_string(&summary) {
        debug!(summary = %json, "summary");
    }

    Ok(summary)
}
