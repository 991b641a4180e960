// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in sanity checks behind `infosource self-test`.
//!
//! Each check exercises the library end to end and reports a short detail
//! string; the sampling checks use a fixed seed so results are reproducible.

use ndarray::{Array1, ArrayView1, array};
use tracing::{debug, info, warn};

use crate::estimators::approaches::discrete::discrete_utils::count_symbols;
use crate::estimators::entropy::{empirical_distribution, entropy, self_information};
use crate::source::{
    ALPHABET_SIZE, ByteSource, Distribution, UniformSampler, binary_extension,
    bit_probabilities, inverse_cdf,
};

const SEED: u64 = 20_240_601;

#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

impl CheckOutcome {
    fn new(name: &'static str, passed: bool, detail: String) -> Self {
        Self { name, passed, detail }
    }
}

/// Run every check and log one line per result.
pub fn run_all() -> Vec<CheckOutcome> {
    let checks: [fn() -> CheckOutcome; 8] = [
        uniform_entropy,
        degenerate_entropy,
        zero_guard,
        mapper_boundary,
        binary_extension_edges,
        uniform_round_trip,
        two_symbol_round_trip,
        binary_source_recovery,
    ];
    checks
        .iter()
        .map(|check| {
            let outcome = check();
            if outcome.passed {
                info!(check = outcome.name, detail = %outcome.detail, "ok");
            } else {
                warn!(check = outcome.name, detail = %outcome.detail, "FAILED");
            }
            outcome
        })
        .collect()
}

fn uniform_entropy() -> CheckOutcome {
    let dist = Distribution::uniform();
    let h = dist.entropy();
    let info_ok = dist
        .self_information()
        .iter()
        .all(|&i| (i - 8.0).abs() < 1e-9);
    CheckOutcome::new(
        "uniform_entropy",
        (h - 8.0).abs() < 1e-9 && info_ok,
        format!("H = {h}"),
    )
}

fn degenerate_entropy() -> CheckOutcome {
    let dist = Distribution::degenerate(0);
    let mut source = ByteSource::new(&dist, UniformSampler::seeded(SEED));
    let symbols = source.generate(1024);
    let all_zero = symbols.iter().all(|&s| s == 0);
    let h = dist.entropy();
    CheckOutcome::new(
        "degenerate_entropy",
        h == 0.0 && dist.self_information()[0] == 0.0 && all_zero,
        format!("H = {h}, all symbols 0: {all_zero}"),
    )
}

fn zero_guard() -> CheckOutcome {
    let p = array![0.0, 0.1, 0.2, 0.7];
    let expected = array![0.0, 3.32192809, 2.32192809, 0.51457317];
    let info = self_information(&p);
    let info_ok = info
        .iter()
        .zip(expected.iter())
        .all(|(a, b)| (a - b).abs() < 1e-7);
    let h = entropy(&p);
    CheckOutcome::new(
        "zero_guard",
        info_ok && (h - 1.1567796494470395).abs() < 1e-12,
        format!("I = {info}, H = {h}"),
    )
}

fn mapper_boundary() -> CheckOutcome {
    let cdf = [0.3, 0.3, 1.0];
    let draws = array![0.3, 0.3 + 1e-12, 0.0, 1.0];
    let symbols = inverse_cdf(&cdf, &draws);
    CheckOutcome::new(
        "mapper_boundary",
        symbols == array![0u8, 2, 0, 2],
        format!("symbols = {symbols}"),
    )
}

fn binary_extension_edges() -> CheckOutcome {
    let extensions = binary_extension(0.0).and_then(|zero| {
        Ok((zero, binary_extension(0.5)?, binary_extension(1.0)?))
    });
    match extensions {
        Ok((zero, half, one)) => {
            let half_ok = half
                .probabilities()
                .iter()
                .all(|&p| (p - 1.0 / ALPHABET_SIZE as f64).abs() < 1e-15);
            let passed = zero == Distribution::degenerate(0)
                && one == Distribution::degenerate(255)
                && half_ok
                && zero.entropy() == 0.0
                && one.entropy() == 0.0;
            CheckOutcome::new(
                "binary_extension_edges",
                passed,
                format!("H(0.5) = {}", half.entropy()),
            )
        }
        Err(e) => CheckOutcome::new("binary_extension_edges", false, e.to_string()),
    }
}

fn uniform_round_trip() -> CheckOutcome {
    round_trip("uniform_round_trip", Distribution::uniform(), 102_400, 0.25, 0.01)
}

fn two_symbol_round_trip() -> CheckOutcome {
    let mut probs = Array1::zeros(ALPHABET_SIZE);
    probs[0] = 0.5;
    probs[1] = 0.5;
    match Distribution::from_probabilities(probs) {
        Ok(dist) => round_trip("two_symbol_round_trip", dist, 1_024_000, 0.01, 1e-4),
        Err(e) => CheckOutcome::new("two_symbol_round_trip", false, e.to_string()),
    }
}

/// Sample the extension of a fair binary source and recover the bit probabilities.
fn binary_source_recovery() -> CheckOutcome {
    let name = "binary_source_recovery";
    let dist = match binary_extension(0.5) {
        Ok(dist) => dist,
        Err(e) => return CheckOutcome::new(name, false, e.to_string()),
    };
    let symbols = ByteSource::new(&dist, UniformSampler::seeded(SEED)).generate(102_400);
    let bits = match bit_probabilities(&count_symbols(symbols.iter().copied())) {
        Ok(bits) => bits,
        Err(e) => return CheckOutcome::new(name, false, e.to_string()),
    };
    let expected = array![0.5, 0.5];
    let recovered = Array1::from(bits.to_vec());
    let prob_error = max_relative_error(expected.view(), recovered.view());
    let entropy_error = relative_error(entropy(&expected), entropy(&recovered));
    CheckOutcome::new(
        name,
        prob_error < 0.25 && entropy_error < 0.25,
        format!("P(1) = {}, entropy error {entropy_error:.4e}", bits[1]),
    )
}

/// Sample `n` symbols, re-estimate, and bound the relative errors.
fn round_trip(
    name: &'static str,
    dist: Distribution,
    n: usize,
    max_prob_error: f64,
    max_entropy_error: f64,
) -> CheckOutcome {
    let mut source = ByteSource::new(&dist, UniformSampler::seeded(SEED));
    let symbols = source.generate(n);
    let estimated = match symbols.as_slice().map(empirical_distribution) {
        Some(Ok(d)) => d,
        Some(Err(e)) => return CheckOutcome::new(name, false, e.to_string()),
        None => return CheckOutcome::new(name, false, "non-contiguous symbols".into()),
    };
    let prob_error = max_relative_error(dist.probabilities(), estimated.probabilities());
    let entropy_error = relative_error(dist.entropy(), estimated.entropy());
    debug!(name, prob_error, entropy_error, "Round trip errors");
    CheckOutcome::new(
        name,
        prob_error < max_prob_error && entropy_error < max_entropy_error,
        format!("max prob error {prob_error:.4e}, entropy error {entropy_error:.4e}"),
    )
}

/// Largest relative error over the support of `expected`; zero entries must stay zero.
pub fn max_relative_error(expected: ArrayView1<'_, f64>, actual: ArrayView1<'_, f64>) -> f64 {
    expected
        .iter()
        .zip(actual.iter())
        .map(|(&e, &a)| {
            if e == 0.0 {
                if a == 0.0 { 0.0 } else { f64::INFINITY }
            } else {
                ((a - e) / e).abs()
            }
        })
        .fold(0.0, f64::max)
}

fn relative_error(expected: f64, actual: f64) -> f64 {
    if expected == 0.0 {
        actual.abs()
    } else {
        ((actual - expected) / expected).abs()
    }
}
