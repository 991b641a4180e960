// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1};

use crate::source::distribution::Distribution;

/// Cumulative distribution `F[i] = p[0] + ... + p[i]` over the byte alphabet.
///
/// Non-decreasing by construction; `F[255]` is 1 up to floating error.
#[derive(Debug, Clone, PartialEq)]
pub struct Cdf {
    values: Vec<f64>,
}

impl Cdf {
    pub fn from_distribution(dist: &Distribution) -> Self {
        Self {
            values: cumulative_sum(dist.probabilities()).to_vec(),
        }
    }

    pub fn values(&self) -> ArrayView1<'_, f64> {
        ArrayView1::from(self.values.as_slice())
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Last cumulative value, ideally 1.
    pub fn total(&self) -> f64 {
        self.values.last().copied().unwrap_or(0.0)
    }
}

/// Prefix sums of any probability vector. No validation is performed.
pub fn cumulative_sum(probs: ArrayView1<'_, f64>) -> Array1<f64> {
    let mut out = probs.to_owned();
    out.accumulate_axis_inplace(ndarray::Axis(0), |&prev, curr| *curr += prev);
    out
}
