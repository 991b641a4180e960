// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;
use rand::distributions::{Distribution as _, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of independent `U[0, 1)` draws.
///
/// This is the only randomness in the crate. The generator is injected, so tests
/// can pin a seed or supply any other `Rng` without touching the mapper.
pub struct UniformSampler<R: Rng = StdRng> {
    rng: R,
    unit: Uniform<f64>,
}

impl UniformSampler<StdRng> {
    /// Deterministic sampler for reproducible byte sources.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Sampler seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> UniformSampler<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            unit: Uniform::new(0.0, 1.0),
        }
    }

    /// Draw `n` values from `U[0, 1)`.
    pub fn draws(&mut self, n: usize) -> Array1<f64> {
        Array1::from_iter((0..n).map(|_| self.unit.sample(&mut self.rng)))
    }
}
