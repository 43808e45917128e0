use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::EstimatorError;

// =============================================================================
// SEQUENCE GENERATION
// =============================================================================

/// Identity sequence `0..n`: element at index i equals i.
pub fn generate_sequence(n: usize) -> Vec<u32> {
    (0..n as u32).collect()
}

// =============================================================================
// SAMPLING
// =============================================================================

/// Uniformly random permutation of `sequence` (Fisher-Yates).
///
/// The generator is borrowed, never reseeded, so consecutive calls advance
/// one shared stream.
pub fn sample_permutation<R: Rng + ?Sized>(sequence: &[u32], rng: &mut R) -> Vec<u32> {
    let mut permutation = sequence.to_vec();
    permutation.shuffle(rng);
    permutation
}

// =============================================================================
// DERANGEMENT TEST
// =============================================================================

/// True iff no index holds the same value in both slices.
///
/// Empty input is vacuously a derangement. Returns early on the first fixed point.
pub fn is_derangement(permutation: &[u32], reference: &[u32]) -> Result<bool, EstimatorError> {
    if permutation.len() != reference.len() {
        return Err(EstimatorError::LengthMismatch {
            permutation: permutation.len(),
            reference: reference.len(),
        });
    }
    Ok(permutation.iter().zip(reference).all(|(p, r)| p != r))
}
