// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use infosource::SourceError;
use infosource::estimators::approaches::discrete::discrete_utils::{
    SymbolDataset, count_symbols, empirical_distribution, probability,
};
use ndarray::Array1;
use rstest::*;

#[rstest]
#[case(vec![], vec![])]
#[case(vec![0, 0, 0], vec![(0, 3)])]
#[case(vec![255, 0, 255, 7], vec![(0, 1), (7, 1), (255, 2)])]
fn test_count_symbols(#[case] symbols: Vec<u8>, #[case] expected: Vec<(usize, usize)>) {
    let counts = count_symbols(symbols.iter().copied());
    assert_eq!(counts.len(), 256);
    let nonzero: Vec<(usize, usize)> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c != 0)
        .map(|(i, &c)| (i, c))
        .collect();
    assert_eq!(nonzero, expected);
}

#[test]
fn probability_of_every_byte_once() {
    let symbols: Vec<u8> = (0..=255u8).collect();
    let p = probability(&symbols).unwrap();
    assert_eq!(p.len(), 256);
    for &v in p.iter() {
        assert_eq!(v, 0.00390625);
    }
}

#[test]
fn probability_keeps_all_256_bins() {
    let p = probability(b"aab").unwrap();
    assert_eq!(p.len(), 256);
    assert_abs_diff_eq!(p[b'a' as usize], 2.0 / 3.0, epsilon = 1e-15);
    assert_abs_diff_eq!(p[b'b' as usize], 1.0 / 3.0, epsilon = 1e-15);
    assert_eq!(p.iter().filter(|&&v| v == 0.0).count(), 254);
}

#[test]
fn empty_stream_is_rejected() {
    assert!(matches!(probability(&[]), Err(SourceError::EmptyInput)));
    assert!(matches!(empirical_distribution(&[]), Err(SourceError::EmptyInput)));
    assert!(matches!(
        SymbolDataset::from_data(Array1::from(Vec::<u8>::new())),
        Err(SourceError::EmptyInput)
    ));
}

#[test]
fn dataset_maps_samples_to_probabilities() {
    let ds = SymbolDataset::from_data(Array1::from(vec![9u8, 9, 9, 4])).unwrap();
    assert_eq!(ds.n, 4);
    assert_eq!(ds.observed_support(), 2);
    assert_eq!(ds.map_probs(), Array1::from(vec![0.75, 0.75, 0.75, 0.25]));
}
