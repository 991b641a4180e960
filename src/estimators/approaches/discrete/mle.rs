// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;

use crate::error::Result;
use crate::estimators::approaches::discrete::discrete_utils::SymbolDataset;
use crate::estimators::entropy::entropy;
use crate::estimators::traits::{GlobalValue, LocalValues};
use crate::source::distribution::Distribution;

/// Plug-in Shannon entropy estimator for byte streams (base 2).
///
/// Computes H = -Σ p_i log2 p_i from empirical probabilities p_i = n_i/N over the
/// fixed 256-symbol alphabet. Local values are the self-information of each
/// observed sample, -log2 p(x).
///
/// Used both for real files and to validate the synthetic byte source.
pub struct ByteEntropy {
    dataset: SymbolDataset,
}

impl ByteEntropy {
    pub fn new(data: Array1<u8>) -> Result<Self> {
        let dataset = SymbolDataset::from_data(data)?;
        Ok(Self { dataset })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::new(Array1::from(bytes.to_vec()))
    }

    /// Empirical distribution of the observed stream.
    pub fn distribution(&self) -> &Distribution {
        &self.dataset.dist
    }

    pub fn counts(&self) -> &Array1<usize> {
        &self.dataset.counts
    }

    pub fn len(&self) -> usize {
        self.dataset.n
    }

    /// Always false: construction rejects an empty stream with `EmptyInput`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn observed_support(&self) -> usize {
        self.dataset.observed_support()
    }
}

impl GlobalValue for ByteEntropy {
    /// Entropy of the empirical distribution, zero-probability bins contributing 0.
    fn global_value(&self) -> f64 {
        entropy(&self.dataset.dist.probabilities())
    }
}

impl LocalValues for ByteEntropy {
    fn local_values(&self) -> Array1<f64> {
        // Every observed symbol has p > 0, so no guard is needed here.
        let p_local = self.dataset.map_probs();
        -p_local.mapv(f64::log2)
    }
}
