// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod entropy;
pub mod traits;
pub mod approaches;

pub use traits::{GlobalValue, LocalValues};
