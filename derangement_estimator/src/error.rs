//! Errors raised while sampling, estimating and summarising.

/// Errors that can occur during a derangement simulation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimatorError {
    #[error("Length mismatch: permutation has {permutation} elements, reference has {reference}")]
    LengthMismatch { permutation: usize, reference: usize },

    #[error("No derangements observed in a batch of {samples} samples")]
    NoDerangements { samples: usize },

    #[error("A batch must draw at least one sample")]
    ZeroSamples,

    #[error("Only {usable} usable batch estimates, need at least {required}")]
    InsufficientEstimates { usable: usize, required: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
