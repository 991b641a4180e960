// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::error::{Result, SourceError};
use crate::source::distribution::{ALPHABET_SIZE, Distribution};

/// Shared dataset for the byte-alphabet frequency estimator.
pub struct SymbolDataset {
    /// Observed symbol stream
    pub data: Array1<u8>,
    /// Counts per symbol, all 256 bins
    pub counts: Array1<usize>,
    /// Total number of observations
    pub n: usize,
    /// Empirical distribution `counts / n`
    pub dist: Distribution,
}

impl SymbolDataset {
    /// Build a SymbolDataset from an observed stream. Fails on an empty stream.
    pub fn from_data(data: Array1<u8>) -> Result<Self> {
        let n = data.len();
        if n == 0 {
            return Err(SourceError::EmptyInput);
        }
        let counts = count_symbols(data.iter().copied());
        let dist = Distribution::from_trusted(normalise(&counts, n));
        Ok(Self {
            data,
            counts,
            n,
            dist,
        })
    }

    /// Map each sample to its empirical probability.
    pub fn map_probs(&self) -> Array1<f64> {
        let probs = self.dist.probabilities();
        self.data.mapv(|v| probs[v as usize])
    }

    /// Number of distinct symbols observed.
    pub fn observed_support(&self) -> usize {
        self.counts.iter().filter(|&&c| c != 0).count()
    }
}

/// Dense 256-bin histogram of a symbol stream.
pub fn count_symbols<I>(symbols: I) -> Array1<usize>
where
    I: IntoIterator<Item = u8>,
{
    let mut dense = [0usize; ALPHABET_SIZE];
    for s in symbols {
        dense[s as usize] += 1;
    }
    Array1::from(dense.to_vec())
}

/// Empirical probability of every byte value, `count(i) / n`.
///
/// Absent symbols get probability 0. Empty input is rejected.
pub fn probability(symbols: &[u8]) -> Result<Array1<f64>> {
    if symbols.is_empty() {
        return Err(SourceError::EmptyInput);
    }
    let counts = count_symbols(symbols.iter().copied());
    Ok(normalise(&counts, symbols.len()))
}

/// Frequency estimator: empirical [`Distribution`] of a symbol stream.
pub fn empirical_distribution(symbols: &[u8]) -> Result<Distribution> {
    probability(symbols).map(Distribution::from_trusted)
}

fn normalise(counts: &Array1<usize>, n: usize) -> Array1<f64> {
    let n_f = n as f64;
    counts.mapv(|c| c as f64 / n_f)
}
