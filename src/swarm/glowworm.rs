//! Candidate encoding and population seeding.
//!
//! A glowworm is one candidate execution order together with the cost it
//! was last scored at; its brightness is the inverse of that cost. Fresh
//! candidates carry [`u64::MAX`] so any real evaluation strictly improves
//! on the sentinel.
//!
//! Randomness is organized as independent streams: every candidate index
//! (and every perturbation round) derives its own `SmallRng` from a base
//! seed via a SplitMix64 mixer, so populations come out identical whether
//! candidates are processed sequentially or in parallel.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::Schedule;

/// One candidate in the swarm: an execution order and its last cost.
///
/// Lower cost = brighter worm (minimization convention).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glowworm {
    /// Candidate execution order.
    pub schedule: Schedule,
    /// Cost at the last evaluation; `u64::MAX` until scored.
    pub cost: u64,
}

impl Glowworm {
    /// Wraps an order as an unscored candidate.
    pub fn new(schedule: Schedule) -> Self {
        Self {
            schedule,
            cost: u64::MAX,
        }
    }

    /// An unscored candidate with a uniformly random order.
    pub fn random<R: Rng>(task_count: usize, rng: &mut R) -> Self {
        Self::new(Schedule::random(task_count, rng))
    }

    /// Whether this candidate has been scored since its order last changed.
    pub fn is_evaluated(&self) -> bool {
        self.cost != u64::MAX
    }
}

/// Seeds a population of independent uniformly-random candidates.
///
/// Each candidate draws from its own derived RNG stream, so the result
/// depends only on `base_seed` and the index — never on generation
/// order. Generation runs data-parallel; a sequential walk over the
/// same streams would produce the identical population.
pub fn seed_population(population_size: usize, task_count: usize, base_seed: u64) -> Vec<Glowworm> {
    (0..population_size)
        .into_par_iter()
        .map(|index| {
            let mut rng = stream_rng(base_seed, 0, index as u64);
            Glowworm::random(task_count, &mut rng)
        })
        .collect()
}

/// RNG stream for candidate `index` in `round` of a run keyed by `base_seed`.
///
/// Round 0 is seeding; perturbation rounds start at 1.
pub(crate) fn stream_rng(base_seed: u64, round: u64, index: u64) -> SmallRng {
    SmallRng::seed_from_u64(splitmix64(base_seed ^ (round << 32) ^ index))
}

/// SplitMix64 mixer for deriving per-stream seeds from a base seed.
#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
