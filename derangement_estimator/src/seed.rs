use rand::rngs::OsRng;
use rand::RngCore;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

// =============================================================================
// SEED
// =============================================================================

/// 32-byte seed for the process-wide generator.
///
/// Production runs draw it once from the OS entropy source; tests build it
/// from a fixed `u64` so permutations are reproducible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomnessSeed {
    current_seed: [u8; 32],
}

impl RandomnessSeed {
    /// Draw fresh entropy and whiten it through SHA-256.
    pub fn from_entropy() -> Self {
        let mut random_bytes = [0u8; 32];
        OsRng.fill_bytes(&mut random_bytes);
        Self::from_bytes(&random_bytes)
    }

    /// Derive a seed from arbitrary bytes.
    pub fn from_bytes(random_bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(random_bytes);
        Self {
            current_seed: hasher.finalize().into(),
        }
    }

    /// Deterministic seed for tests and reproducible runs.
    pub fn from_u64(seed: u64) -> Self {
        Self::from_bytes(&seed.to_be_bytes())
    }

    /// Hex SHA-256 of the seed, safe to log.
    pub fn seed_hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.current_seed);
        hex::encode(hasher.finalize())
    }

    /// Build the generator. Called once per process.
    pub fn into_rng(self) -> ChaCha8Rng {
        ChaCha8Rng::from_seed(self.current_seed)
    }
}
