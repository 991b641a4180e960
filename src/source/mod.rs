// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Generation side: distributions, CDF, uniform draws and the inverse-CDF mapper.

pub mod cdf;
pub mod distribution;
pub mod extended;
pub mod mapper;
pub mod sampler;

pub use cdf::{Cdf, cumulative_sum};
pub use distribution::{ALPHABET_SIZE, Distribution, SUM_TOLERANCE};
pub use extended::{binary_extension, bit_probabilities};
pub use mapper::{ByteSource, Generated, inverse_cdf};
pub use sampler::UniformSampler;
