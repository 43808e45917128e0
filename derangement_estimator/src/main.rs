//! Estimate e from the rate of derangements among random permutations.

use anyhow::{Context, Result};
use tracing::debug;

use derangement_estimator::logging::init_tracing;
use derangement_estimator::{run_simulation, RandomnessSeed, SimulationConfig};

fn main() -> Result<()> {
    init_tracing();

    let seed = RandomnessSeed::from_entropy();
    debug!(seed_hash = %seed.seed_hash(), "generator seeded");
    let mut rng = seed.into_rng();

    let config = SimulationConfig::default();
    let summary = run_simulation(&config, &mut rng).context("derangement simulation failed")?;

    println!("{}", summary);
    Ok(())
}
