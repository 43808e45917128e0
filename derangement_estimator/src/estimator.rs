use rand::Rng;
use tracing::debug;

use crate::error::EstimatorError;
use crate::sampler::{generate_sequence, is_derangement, sample_permutation};
use crate::types::BatchEstimate;

// =============================================================================
// BATCH ESTIMATOR
// =============================================================================

/// Draw `samples` random permutations of `0..sequence_len` and estimate e as
/// samples / derangements.
///
/// P(derangement) tends to 1/e as the sequence grows, so the expected number
/// of draws per derangement tends to e. A batch with no derangement has no
/// finite estimate and is reported as `NoDerangements` instead of infinity.
pub fn estimate_batch<R: Rng + ?Sized>(
    samples: usize,
    sequence_len: usize,
    rng: &mut R,
) -> Result<BatchEstimate, EstimatorError> {
    if samples == 0 {
        return Err(EstimatorError::ZeroSamples);
    }

    let mut derangements = 0usize;
    for _ in 0..samples {
        let original = generate_sequence(sequence_len);
        let permutation = sample_permutation(&original, rng);
        if is_derangement(&permutation, &original)? {
            derangements += 1;
        }
    }

    if derangements == 0 {
        return Err(EstimatorError::NoDerangements { samples });
    }

    let estimate = samples as f64 / derangements as f64;
    debug!(samples, derangements, estimate, "batch estimated");

    Ok(BatchEstimate {
        samples,
        derangements,
        estimate,
    })
}
