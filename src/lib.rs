// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # infosource
//!
//! Simulation and measurement of a discrete memoryless source (DMS) over the
//! 256-symbol byte alphabet.
//!
//! ## Quick Start
//!
//! ```rust
//! use infosource::estimators::entropy::{Entropy, GlobalValue};
//! use infosource::source::{binary_extension, ByteSource, UniformSampler};
//!
//! // 8-fold extension of a binary source with P(1) = 0.5 is uniform over bytes
//! let dist = binary_extension(0.5).unwrap();
//! assert!((dist.entropy() - 8.0).abs() < 1e-12);
//!
//! // Draw a reproducible stream and measure it
//! let mut source = ByteSource::new(&dist, UniformSampler::seeded(7));
//! let symbols = source.generate(10_000);
//! let h = Entropy::new_discrete(symbols).unwrap().global_value();
//! assert!(h > 7.9 && h <= 8.0);
//! ```
//!
//! ## Architecture
//!
//! 1. **Generation** ([`source`]): a validated [`source::Distribution`] is turned into a
//!    cumulative distribution, uniform draws from an injectable generator are mapped
//!    through it by inverse-transform sampling.
//! 2. **Measurement** ([`estimators`]): a symbol stream is histogrammed into the
//!    empirical distribution, from which self-information and entropy (bits) follow.
//!    Zero-probability symbols contribute exactly 0.
//! 3. **Collaborators** ([`io`]): CSV distribution tables, vector dumps, raw byte
//!    sources and the results table used by the `infosource` binary.
//!
//! Validation happens once, at load or construction time; see [`error::SourceError`].

pub mod error;
pub mod estimators;
pub mod io;
pub mod selftest;
pub mod source;

pub use error::{Result, SourceError};
