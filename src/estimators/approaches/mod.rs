// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod discrete;

// Re-exported so callers can import infosource::estimators::approaches::* ergonomically.
pub use discrete::mle::ByteEntropy;
