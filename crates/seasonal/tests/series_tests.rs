//! Tests for series construction.
//!
//! ## Test Organization
//!
//! 1. **Construction** - Values, start offsets, explicit pairs
//! 2. **Validation** - Empty input, non-finite values, index gaps, index range

use seasonal::prelude::*;

// ============================================================================
// Construction
// ============================================================================

/// Series built from values are indexed from zero.
#[test]
fn test_new_indexes_from_zero() {
    let s = Series::new(vec![1.0, 2.0, 3.0]).unwrap();
    assert_eq!(s.len(), 3);
    assert_eq!(s.start(), 0);
    assert_eq!(s.index(2), 2);
    assert_eq!(s.values(), &[1.0, 2.0, 3.0]);
}

/// Explicit pairs keep their first index.
#[test]
fn test_from_pairs() {
    let s = Series::from_pairs(&[(1990, 4.0), (1991, 5.0), (1992, 6.0)]).unwrap();
    assert_eq!(s.start(), 1990);
    let pairs: Vec<(i64, f64)> = s.iter().collect();
    assert_eq!(pairs, vec![(1990, 4.0), (1991, 5.0), (1992, 6.0)]);
}

/// Negative start indices are allowed.
#[test]
fn test_negative_start() {
    let s = Series::with_start(-3, vec![1.0, 2.0]).unwrap();
    assert_eq!(s.index(1), -2);
}

// ============================================================================
// Validation
// ============================================================================

/// Empty input is rejected.
#[test]
fn test_empty_rejected() {
    assert_eq!(
        Series::<f64>::new(Vec::new()).unwrap_err(),
        SeasonalError::EmptyInput
    );
    assert_eq!(
        Series::<f64>::from_pairs(&[]).unwrap_err(),
        SeasonalError::EmptyInput
    );
}

/// Non-finite values are rejected as config errors.
#[test]
fn test_non_finite_rejected() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = Series::new(vec![1.0, bad, 3.0]).unwrap_err();
        assert!(matches!(err, SeasonalError::InvalidNumericValue(_)));
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}

/// Gaps and reversals in explicit indices are rejected.
#[test]
fn test_non_contiguous_rejected() {
    let err = Series::from_pairs(&[(3, 1.0), (4, 2.0), (6, 3.0)]).unwrap_err();
    assert_eq!(
        err,
        SeasonalError::NonContiguousIndex {
            position: 2,
            expected: 5,
            got: 6
        }
    );

    assert!(Series::from_pairs(&[(3, 1.0), (3, 2.0)]).is_err());
}

/// Indices that run past the end of the i64 range are rejected, not wrapped.
#[test]
fn test_index_overflow_rejected() {
    let err = Series::from_pairs(&[(i64::MAX - 1, 1.0), (i64::MAX, 2.0), (0, 3.0)]).unwrap_err();
    assert_eq!(
        err,
        SeasonalError::IndexOverflow {
            start: i64::MAX - 1,
            len: 3
        }
    );
    assert_eq!(err.kind(), ErrorKind::Config);

    let err = Series::with_start(i64::MAX - 1, vec![1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(
        err,
        SeasonalError::IndexOverflow {
            start: i64::MAX - 1,
            len: 3
        }
    );
}

/// A series ending exactly at the largest index is accepted.
#[test]
fn test_index_at_upper_limit() {
    let s = Series::from_pairs(&[(i64::MAX - 1, 1.0), (i64::MAX, 2.0)]).unwrap();
    assert_eq!(s.index(1), i64::MAX);
    let last = s.iter().last().unwrap();
    assert_eq!(last, (i64::MAX, 2.0));

    let s = Series::with_start(i64::MIN, vec![1.0, 2.0]).unwrap();
    assert_eq!(s.index(0), i64::MIN);
}
