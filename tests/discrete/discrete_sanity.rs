// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use ndarray::Array1;
use infosource::SourceError;
use infosource::estimators::approaches::discrete::mle::ByteEntropy; // direct
use infosource::estimators::entropy::Entropy; // facade
use infosource::estimators::{GlobalValue, LocalValues};

#[test]
fn byte_entropy_known_example() {
    let data = Array1::from(vec![1u8, 1, 2, 3, 3, 4, 5]);
    let est = ByteEntropy::new(data.clone()).unwrap();

    // Expected global entropy in bits: H = log2(7) - (4/7) log2(2)
    let expected_h = 7f64.log2() - 4.0 / 7.0;
    assert_abs_diff_eq!(est.global_value(), expected_h, epsilon = 1e-12);

    // Local values: -log2 p(x)
    let l2 = -(2.0f64 / 7.0).log2();
    let l1 = -(1.0f64 / 7.0).log2();
    let expected_locals = [l2, l2, l1, l2, l2, l1, l1];
    let locals = est.local_values();
    assert_eq!(locals.len(), data.len());
    for (i, &val) in locals.iter().enumerate() {
        assert_abs_diff_eq!(val, expected_locals[i], epsilon = 1e-12);
    }

    // Global equals the mean of local values for the plug-in estimator
    assert_abs_diff_eq!(est.global_from_local(), expected_h, epsilon = 1e-12);

    assert_eq!(est.len(), 7);
    assert!(!est.is_empty());
    assert_eq!(est.observed_support(), 5);
    assert_eq!(est.counts()[1], 2);
    assert_eq!(est.counts()[0], 0);
}

#[test]
fn byte_entropy_all_symbols_once() {
    let data: Array1<u8> = (0..=255u8).collect();
    let est = Entropy::new_discrete(data).unwrap();
    assert_abs_diff_eq!(est.global_value(), 8.0, epsilon = 1e-12);
    for &v in est.local_values().iter() {
        assert_abs_diff_eq!(v, 8.0, epsilon = 1e-12);
    }
}

#[test]
fn byte_entropy_single_value() {
    let est = Entropy::from_bytes(&[5u8; 10]).unwrap();
    assert_eq!(est.global_value(), 0.0);
    assert_eq!(est.distribution().p(5), 1.0);
    assert_eq!(est.distribution().support(), 1);
}

#[test]
fn byte_entropy_empty_is_rejected() {
    assert!(matches!(
        ByteEntropy::new(Array1::from(Vec::<u8>::new())),
        Err(SourceError::EmptyInput)
    ));
    assert!(matches!(Entropy::from_bytes(&[]), Err(SourceError::EmptyInput)));
}

#[test]
fn byte_entropy_ignores_order() {
    let a = Entropy::from_bytes(b"abracadabra").unwrap();
    let b = Entropy::from_bytes(b"aaaaabbrrcd").unwrap();
    assert_eq!(a.global_value(), b.global_value());
    assert_eq!(a.distribution(), b.distribution());
}

#[test]
fn byte_entropy_single_byte_is_not_empty() {
    let est = Entropy::from_bytes(&[9u8]).unwrap();
    assert_eq!(est.len(), 1);
    assert!(!est.is_empty());
}
