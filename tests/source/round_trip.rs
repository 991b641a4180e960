// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sample from a known distribution and recover it with the frequency estimator.

use infosource::estimators::approaches::discrete::discrete_utils::count_symbols;
use infosource::estimators::entropy::{empirical_distribution, entropy};
use infosource::source::{
    ByteSource, Distribution, UniformSampler, binary_extension, bit_probabilities,
};
use ndarray::array;
use rstest::*;

use crate::test_helpers::{max_relative_error, random_distribution, sparse_distribution};

/// Returns (max relative probability error, relative entropy error).
fn sample_errors(dist: &Distribution, n: usize, seed: u64) -> (f64, f64) {
    let symbols = ByteSource::new(dist, UniformSampler::seeded(seed)).generate(n);
    let estimated = empirical_distribution(symbols.as_slice().unwrap()).unwrap();
    let prob_error = max_relative_error(dist.probabilities(), estimated.probabilities());
    (prob_error, relative_error(dist.entropy(), estimated.entropy()))
}

fn relative_error(expected: f64, actual: f64) -> f64 {
    if expected == 0.0 {
        actual.abs()
    } else {
        ((actual - expected) / expected).abs()
    }
}

#[test]
fn uniform_source_102400() {
    let (p_err, h_err) = sample_errors(&Distribution::uniform(), 102_400, 2024);
    assert!(p_err < 0.25, "probability error {p_err}");
    assert!(h_err < 0.01, "entropy error {h_err}");
}

#[test]
fn uniform_source_1024000() {
    let (p_err, h_err) = sample_errors(&Distribution::uniform(), 1_024_000, 2024);
    assert!(p_err < 0.1, "probability error {p_err}");
    assert!(h_err < 1e-4, "entropy error {h_err}");
}

#[test]
fn two_symbol_source() {
    let dist = sparse_distribution(&[(0, 0.5), (1, 0.5)]);
    let (p_err, h_err) = sample_errors(&dist, 102_400, 17);
    assert!(p_err < 0.01, "probability error {p_err}");
    assert!(h_err < 1e-4, "entropy error {h_err}");
}

#[test]
fn degenerate_source_is_exact() {
    let (p_err, h_err) = sample_errors(&Distribution::degenerate(0), 1_024, 3);
    assert_eq!(p_err, 0.0);
    assert_eq!(h_err, 0.0);
}

#[test]
fn error_shrinks_with_stream_length() {
    let dist = random_distribution(31);
    let (p_small, h_small) = sample_errors(&dist, 10_000, 8);
    let (p_large, h_large) = sample_errors(&dist, 1_000_000, 8);
    assert!(p_large < p_small, "{p_large} >= {p_small}");
    assert!(h_large < h_small, "{h_large} >= {h_small}");
}

#[rstest]
#[case(0.5, 102_400, 0.25, 0.01)]
#[case(0.0, 1_024, 0.0, 0.0)]
#[case(1.0, 1_024, 0.0, 0.0)]
fn binary_extension_source(
    #[case] p_true: f64,
    #[case] n: usize,
    #[case] max_prob_error: f64,
    #[case] max_entropy_error: f64,
) {
    let dist = binary_extension(p_true).unwrap();
    let (p_err, h_err) = sample_errors(&dist, n, 2024);
    assert!(p_err <= max_prob_error, "probability error {p_err}");
    assert!(h_err <= max_entropy_error, "entropy error {h_err}");

    // The bit-level source survives sampling
    let symbols = ByteSource::new(&dist, UniformSampler::seeded(2024)).generate(n);
    let bits = bit_probabilities(&count_symbols(symbols.iter().copied())).unwrap();
    let expected = array![1.0 - p_true, p_true];
    let recovered = array![bits[0], bits[1]];
    let bit_error = max_relative_error(expected.view(), recovered.view());
    assert!(bit_error <= max_prob_error, "bit probability error {bit_error}");
    let bit_h_error = relative_error(entropy(&expected), entropy(&recovered));
    assert!(bit_h_error <= max_prob_error, "bit entropy error {bit_h_error}");
}

#[test]
fn zero_extension_stream_is_all_zero_bytes() {
    let dist = binary_extension(0.0).unwrap();
    let symbols = ByteSource::new(&dist, UniformSampler::seeded(5)).generate(1_024);
    assert!(symbols.iter().all(|&s| s == 0));
    let estimated = empirical_distribution(symbols.as_slice().unwrap()).unwrap();
    assert_eq!(estimated.entropy(), 0.0);
    assert_eq!(bit_probabilities(&count_symbols(symbols.iter().copied())).unwrap(), [1.0, 0.0]);
}
