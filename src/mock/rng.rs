//! The single randomness source behind every mock generator.
//!
//! Generators take `&mut StdRng` so tests can pass a fixed seed and assert on
//! deterministic output. Handlers get a fresh instance per request, seeded
//! from `MOCK_SEED` when that env var is set.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::util::env;

pub fn mock_rng() -> StdRng {
    match env::env_opt("MOCK_SEED").and_then(|raw| raw.parse::<u64>().ok()) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
pub(crate) fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
