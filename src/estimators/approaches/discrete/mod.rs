// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Discrete (histogram-based) estimation over the fixed byte alphabet.

pub mod discrete_utils;
pub mod mle;
