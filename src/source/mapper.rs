// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;
use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::source::cdf::Cdf;
use crate::source::distribution::{ALPHABET_SIZE, Distribution, SUM_TOLERANCE};
use crate::source::sampler::UniformSampler;

/// Inverse-transform sampling: map each draw `f` to the smallest `i` with `f <= F[i]`.
///
/// Symbol `i` owns the right-closed interval `(F[i-1], F[i]]`, so zero-width
/// symbols are unreachable and a draw of exactly 0 lands on the first symbol with
/// `F[i] > 0`. A draw past the last cumulative value (only `f == 1.0`, or a CDF
/// ending slightly below 1) is clamped to the last symbol.
///
/// `cdf` may be shorter than the alphabet; the result never exceeds 255.
pub fn inverse_cdf(cdf: &[f64], draws: &Array1<f64>) -> Array1<u8> {
    debug_assert!(!cdf.is_empty(), "CDF must not be empty");
    let last = cdf.len().min(ALPHABET_SIZE).saturating_sub(1);
    draws.mapv(|f| {
        // Monotone predicate over a non-decreasing CDF; `c <= 0` only matters for f == 0.
        let idx = cdf.partition_point(|&c| c < f || c <= 0.0);
        idx.min(last) as u8
    })
}

/// Generated symbols together with the uniform draws they came from.
pub struct Generated {
    pub draws: Array1<f64>,
    pub symbols: Array1<u8>,
}

/// Discrete memoryless byte source: a distribution, its CDF and a sampler.
pub struct ByteSource<R: Rng = StdRng> {
    cdf: Cdf,
    sampler: UniformSampler<R>,
}

impl<R: Rng> ByteSource<R> {
    pub fn new(dist: &Distribution, sampler: UniformSampler<R>) -> Self {
        let cdf = Cdf::from_distribution(dist);
        debug!(total = cdf.total(), "Built CDF");
        if (cdf.total() - 1.0).abs() > SUM_TOLERANCE {
            warn!(total = cdf.total(), "CDF does not end at 1");
        }
        Self { cdf, sampler }
    }

    pub fn cdf(&self) -> &Cdf {
        &self.cdf
    }

    /// Draw `n` uniforms and map them to symbols, keeping the draws.
    pub fn generate_with_draws(&mut self, n: usize) -> Generated {
        let draws = self.sampler.draws(n);
        debug!(draws = draws.len(), "Generated uniform draws");
        let symbols = inverse_cdf(self.cdf.as_slice(), &draws);
        debug!(symbols = symbols.len(), "Mapped draws to symbols");
        Generated { draws, symbols }
    }

    /// Emit `n` symbols.
    pub fn generate(&mut self, n: usize) -> Array1<u8> {
        self.generate_with_draws(n).symbols
    }
}
