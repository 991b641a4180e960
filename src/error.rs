// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Errors raised at the boundary of the byte source (load and construct time).
///
/// The sampling and estimation algorithms assume validated inputs and never
/// produce these mid-computation.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Wrong length, negative or non-finite entries, or a sum away from 1.
    #[error("invalid distribution: {0}")]
    InvalidDistribution(String),

    /// `p_true` outside `[0, 1]` for the binary extension.
    #[error("p_true must be in [0, 1], got {0}")]
    InvalidRange(f64),

    #[error("empty symbol stream")]
    EmptyInput,

    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, SourceError>;
