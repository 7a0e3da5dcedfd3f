//! Simulation RNG wrapper.
//!
//! A single `SimRng` drives all randomness in a run: initial placement and
//! the per-frame Gaussian jitter. Seeding it explicitly makes a whole run
//! reproducible, which the tests rely on; the interactive binary seeds from
//! entropy.

use nannou::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

pub struct SimRng(SmallRng);

impl SimRng {
    /// Deterministic RNG for tests and reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Entropy-seeded RNG for interactive use.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Uniform value in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Isotropic standard-normal 2D sample, used for velocity jitter.
    #[inline]
    pub fn gaussian_vec2(&mut self) -> Vec2 {
        vec2(self.0.sample(StandardNormal), self.0.sample(StandardNormal))
    }

    /// Random point uniformly distributed over `[0, bounds.x) x [0, bounds.y)`.
    pub fn point_in(&mut self, bounds: Vec2) -> Point2 {
        pt2(
            self.0.gen_range(0.0..bounds.x),
            self.0.gen_range(0.0..bounds.y),
        )
    }
}
