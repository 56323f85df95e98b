//! `DeterministicRng` backed by `rand`'s `StdRng`.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::domain::DeterministicRng;

/// Picks the first player in production.
pub struct StdTurnRng {
    rng: StdRng,
}

impl StdTurnRng {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DeterministicRng for StdTurnRng {
    fn next_index(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        self.rng.gen_range(0..upper)
    }
}
