// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1};
use std::collections::BTreeMap;

use crate::error::{Result, SourceError};

/// Number of symbols in the byte alphabet.
pub const ALPHABET_SIZE: usize = 256;

/// Maximum allowed deviation of `sum(p)` from 1.
///
/// Loose enough to accept distributions written with six significant digits.
pub const SUM_TOLERANCE: f64 = 1e-4;

/// Immutable probability vector over the 256-symbol byte alphabet.
///
/// Every constructor validates the vector: exactly 256 entries, each finite and
/// in `[0, 1]`, summing to 1 within [`SUM_TOLERANCE`]. The vector is never
/// renormalised; an off-sum input is rejected rather than corrected.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    probs: Array1<f64>,
}

impl Distribution {
    /// Validate and wrap a probability vector.
    pub fn from_probabilities(probs: Array1<f64>) -> Result<Self> {
        validate(probs.view())?;
        Ok(Self { probs })
    }

    /// Build from a sparse `symbol -> probability` mapping; absent symbols get 0.
    pub fn from_symbol_map(map: &BTreeMap<u8, f64>) -> Result<Self> {
        let mut probs = Array1::zeros(ALPHABET_SIZE);
        for (&symbol, &p) in map {
            probs[symbol as usize] = p;
        }
        Self::from_probabilities(probs)
    }

    /// Equiprobable source, `p[i] = 1/256`.
    pub fn uniform() -> Self {
        Self {
            probs: Array1::from_elem(ALPHABET_SIZE, 1.0 / ALPHABET_SIZE as f64),
        }
    }

    /// All mass on a single symbol.
    pub fn degenerate(symbol: u8) -> Self {
        let mut probs = Array1::zeros(ALPHABET_SIZE);
        probs[symbol as usize] = 1.0;
        Self { probs }
    }

    /// Wrap a vector produced by a trusted internal builder (counts / n).
    pub(crate) fn from_trusted(probs: Array1<f64>) -> Self {
        debug_assert_eq!(probs.len(), ALPHABET_SIZE);
        Self { probs }
    }

    pub fn probabilities(&self) -> ArrayView1<'_, f64> {
        self.probs.view()
    }

    pub fn into_inner(self) -> Array1<f64> {
        self.probs
    }

    /// Probability of one symbol.
    pub fn p(&self, symbol: u8) -> f64 {
        self.probs[symbol as usize]
    }

    /// Number of symbols with non-zero probability.
    pub fn support(&self) -> usize {
        self.probs.iter().filter(|&&p| p > 0.0).count()
    }

    /// Per-symbol self-information in bits, 0 for zero-probability symbols.
    pub fn self_information(&self) -> Array1<f64> {
        crate::estimators::entropy::self_information(&self.probs)
    }

    /// Shannon entropy in bits per symbol.
    pub fn entropy(&self) -> f64 {
        crate::estimators::entropy::entropy(&self.probs)
    }
}

fn validate(probs: ArrayView1<'_, f64>) -> Result<()> {
    if probs.len() != ALPHABET_SIZE {
        return Err(SourceError::InvalidDistribution(format!(
            "expected {ALPHABET_SIZE} probabilities, got {}",
            probs.len()
        )));
    }
    if let Some((symbol, p)) = probs
        .iter()
        .enumerate()
        .find(|&(_, p)| !p.is_finite() || !(0.0..=1.0).contains(p))
    {
        return Err(SourceError::InvalidDistribution(format!(
            "probability of symbol {symbol} is {p}, outside [0, 1]"
        )));
    }
    let total = probs.sum();
    if (total - 1.0).abs() > SUM_TOLERANCE {
        return Err(SourceError::InvalidDistribution(format!(
            "probabilities sum to {total}, expected 1"
        )));
    }
    Ok(())
}
