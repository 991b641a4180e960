// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayBase, Data, Ix1};
use tracing::debug;

use crate::error::{Result, SourceError};
use crate::source::distribution::{ALPHABET_SIZE, Distribution};

/// Bits packed into one extended-source symbol.
pub const BITS_PER_SYMBOL: u32 = 8;

/// 8-fold extension of a binary memoryless source packed into bytes.
///
/// Symbol `i` gets `p_true^k * (1 - p_true)^(8 - k)` where `k` is the number of
/// set bits in `i`. `powi` keeps `0^0 = 1`, so `p_true = 0` and `p_true = 1`
/// put exactly all mass on `0x00` and `0xFF`.
///
/// The result is checked against the distribution invariants but never
/// renormalised.
pub fn binary_extension(p_true: f64) -> Result<Distribution> {
    if !(0.0..=1.0).contains(&p_true) {
        return Err(SourceError::InvalidRange(p_true));
    }
    let p_false = 1.0 - p_true;
    let probs = Array1::from_shape_fn(ALPHABET_SIZE, |symbol| {
        let ones = (symbol as u32).count_ones();
        p_true.powi(ones as i32) * p_false.powi((BITS_PER_SYMBOL - ones) as i32)
    });
    debug!(p_true, "Built binary extension source");
    Distribution::from_probabilities(probs)
}

/// Recover the binary source `[P(0), P(1)]` from a 256-bin symbol histogram.
///
/// Each byte contributes its bit count to the ones and the rest to the zeros,
/// so `P(1) = Σ counts[i] * popcount(i) / (8 n)`. Inverse of
/// [`binary_extension`] up to sampling error.
///
/// # Errors
///
/// `SourceError::InvalidDistribution` if the histogram does not have 256 bins,
/// `SourceError::EmptyInput` if it holds no observations.
pub fn bit_probabilities<S>(counts: &ArrayBase<S, Ix1>) -> Result<[f64; 2]>
where
    S: Data<Elem = usize>,
{
    if counts.len() != ALPHABET_SIZE {
        return Err(SourceError::InvalidDistribution(format!(
            "expected {ALPHABET_SIZE} histogram bins, got {}",
            counts.len()
        )));
    }
    let n: usize = counts.sum();
    if n == 0 {
        return Err(SourceError::EmptyInput);
    }
    let ones: usize = counts
        .iter()
        .enumerate()
        .map(|(symbol, &c)| c * symbol.count_ones() as usize)
        .sum();
    let bits = n * BITS_PER_SYMBOL as usize;
    let zeros = bits - ones;
    debug!(bits, ones, "Recovered binary source from histogram");
    Ok([zeros as f64 / bits as f64, ones as f64 / bits as f64])
}
