// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayBase, Data, Ix1, Zip};

use crate::error::Result;
use crate::estimators::approaches::discrete;
pub use crate::estimators::traits::{GlobalValue, LocalValues};

/// Entropy estimation for byte streams
///
/// This struct provides static methods for creating entropy estimators.
pub struct Entropy;

impl Entropy {
    /// Creates a new plug-in entropy estimator for a byte stream
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional array of observed symbols
    ///
    /// # Errors
    ///
    /// `SourceError::EmptyInput` if `data` is empty.
    pub fn new_discrete(data: Array1<u8>) -> Result<discrete::mle::ByteEntropy> {
        discrete::mle::ByteEntropy::new(data)
    }

    /// Same as [`Entropy::new_discrete`] for a raw byte buffer, e.g. a file's contents.
    pub fn from_bytes(bytes: &[u8]) -> Result<discrete::mle::ByteEntropy> {
        discrete::mle::ByteEntropy::from_bytes(bytes)
    }
}

/// Elementwise self-information `-log2 p`, with 0 for zero-probability entries.
pub fn self_information<S>(probs: &ArrayBase<S, Ix1>) -> Array1<f64>
where
    S: Data<Elem = f64>,
{
    self_information_with(probs, 0.0)
}

/// Elementwise self-information with an explicit placeholder for `p == 0`.
///
/// The mask is applied before the logarithm, so the result never holds `inf` or `NaN`
/// for a zero entry.
pub fn self_information_with<S>(probs: &ArrayBase<S, Ix1>, placeholder: f64) -> Array1<f64>
where
    S: Data<Elem = f64>,
{
    probs.mapv(|p| if p > 0.0 { -p.log2() } else { placeholder })
}

/// Shannon entropy in bits, `Σ p_i * I(p_i)`.
///
/// Zero-probability entries contribute exactly 0. Works on any length, not only
/// the 256-symbol alphabet.
pub fn entropy<S>(probs: &ArrayBase<S, Ix1>) -> f64
where
    S: Data<Elem = f64>,
{
    let info = self_information(probs);
    let mut h = 0.0_f64;
    Zip::from(probs).and(&info).for_each(|&p, &i| {
        if p > 0.0 {
            h += p * i;
        }
    });
    h
}

pub use discrete::discrete_utils::{empirical_distribution, probability};
