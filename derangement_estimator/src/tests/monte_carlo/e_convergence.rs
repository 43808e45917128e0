//! Convergence Tests
//!
//! The mean of the batch estimates must land near e. Each batch estimate is
//! S/D with D binomial, so it carries a small upward bias of roughly
//! e * (e - 1) / S. Tolerances below absorb both that bias and the noise.

use std::f64::consts::E;

use crate::seed::RandomnessSeed;
use crate::types::SimulationConfig;
use crate::run_simulation;

/// Spread of a single-sample estimate of e: e * sqrt(e - 1)
fn per_sample_sd() -> f64 {
    E * (E - 1.0).sqrt()
}

#[test]
fn test_small_run_within_tolerance() {
    let config = SimulationConfig {
        batch_count: 10,
        samples_per_batch: 50,
        sequence_len: 1000,
        ..Default::default()
    };
    let mut rng = RandomnessSeed::from_u64(42).into_rng();
    let summary = run_simulation(&config, &mut rng).unwrap();

    let total = (config.batch_count * config.samples_per_batch) as f64;
    let tolerance = 5.0 * per_sample_sd() / total.sqrt() + 0.1;

    println!("Mean: {:.5} +-{:.5}", summary.mean, summary.standard_error);
    println!("Tolerance: {:.5}", tolerance);

    assert!(
        (summary.mean - E).abs() < tolerance,
        "Mean {} outside {} of e",
        summary.mean, tolerance
    );
}

/// Full-size run with the original constants
#[test]
fn test_default_run_converges() {
    let config = SimulationConfig::default();
    let mut rng = RandomnessSeed::from_u64(7).into_rng();
    let summary = run_simulation(&config, &mut rng).unwrap();

    println!("Mean over {} batches: {:.6}", summary.batches_used, summary.mean);
    println!("Corrected SE: {:.6}", summary.corrected_standard_error);
    println!("Legacy SE: {:.6}", summary.legacy_standard_error);

    assert_eq!(summary.batches_used + summary.batches_skipped, config.batch_count);
    // Noise ~0.011, bias ~0.047
    assert!((summary.mean - E).abs() < 0.1, "Mean {} not close to e", summary.mean);
    assert!(summary.corrected_standard_error > 0.0);
    assert!(summary.legacy_standard_error < summary.corrected_standard_error);
}

/// Different seeds give different runs, all near e
#[test]
fn test_independent_seeds_agree() {
    let config = SimulationConfig {
        batch_count: 50,
        samples_per_batch: 100,
        ..Default::default()
    };

    let means: Vec<f64> = (0..5u64)
        .map(|seed| {
            let mut rng = RandomnessSeed::from_u64(seed).into_rng();
            run_simulation(&config, &mut rng).unwrap().mean
        })
        .collect();

    println!("Means: {:?}", means);

    for mean in &means {
        assert!((mean - E).abs() < 0.35, "Mean {} not close to e", mean);
    }
    assert!(means.windows(2).any(|w| w[0] != w[1]));
}
