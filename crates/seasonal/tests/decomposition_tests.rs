//! Tests for classical seasonal decomposition.
//!
//! These tests verify the decomposition stage through the public pipeline:
//! - Constant and noiseless seasonal series
//! - Reconstruction in both modes
//! - Seasonal normalization
//! - Edge markers and insufficient data
//!
//! ## Test Organization
//!
//! 1. **Reference Scenarios** - Constant and exact seasonal inputs
//! 2. **Reconstruction** - Additive and multiplicative identities
//! 3. **Normalization** - Cycle sums and means
//! 4. **Edges & Errors** - Undefined markers, short series, zero values

use approx::{assert_abs_diff_eq, assert_relative_eq};

use seasonal::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn pipeline(period: usize, mode: Mode) -> Pipeline<f64> {
    Seasonal::new().period(period).mode(mode).build().unwrap()
}

fn scenario_b() -> Series<f64> {
    Series::new(vec![
        10.0, 12.0, 14.0, 16.0, 10.0, 12.0, 14.0, 16.0, 10.0, 12.0, 14.0, 16.0,
    ])
    .unwrap()
}

/// Trend plus season plus a deterministic wobble.
fn wobbly_additive(n: usize, period: usize) -> Series<f64> {
    let values = (0..n)
        .map(|t| {
            let t_f = t as f64;
            50.0 + 0.4 * t_f
                + 6.0 * (2.0 * std::f64::consts::PI * t_f / period as f64).sin()
                + 0.7 * (1.7 * t_f).sin()
        })
        .collect();
    Series::new(values).unwrap()
}

/// Positive trend scaled by fixed quarterly factors, with a small wobble.
fn wobbly_multiplicative(n: usize) -> Series<f64> {
    let factors = [0.8, 1.1, 1.2, 0.9];
    let values = (0..n)
        .map(|t| (20.0 + t as f64) * factors[t % 4] * (1.0 + 0.01 * (2.3 * t as f64).cos()))
        .collect();
    Series::new(values).unwrap()
}

// ============================================================================
// Reference Scenarios
// ============================================================================

/// Constant series decomposes into a flat trend and zero season.
#[test]
fn test_constant_series() {
    let series = Series::new(vec![5.0; 8]).unwrap();
    let d = pipeline(4, Additive).decompose(&series).unwrap();

    assert_eq!(d.len(), 8);
    for t in 0..8 {
        assert_abs_diff_eq!(d.seasonal[t], 0.0, epsilon = 1e-12);
        if let Some(trend) = d.trend[t] {
            assert_abs_diff_eq!(trend, 5.0, epsilon = 1e-12);
        }
        if let Some(residual) = d.residual[t] {
            assert_abs_diff_eq!(residual, 0.0, epsilon = 1e-12);
        }
    }
    assert_eq!(d.defined_count(), 4);
}

/// Noiseless seasonal series recovers the exact cycle around trend 13.
#[test]
fn test_noiseless_seasonal_series() {
    let d = pipeline(4, Additive).decompose(&scenario_b()).unwrap();

    let expected = [-3.0, -1.0, 1.0, 3.0];
    for (phase, &s) in d.cycle().iter().enumerate() {
        assert_abs_diff_eq!(s, expected[phase], epsilon = 1e-9);
    }

    for t in 0..d.len() {
        assert_abs_diff_eq!(d.seasonal[t], expected[t % 4], epsilon = 1e-9);
        if let Some(trend) = d.trend[t] {
            assert_abs_diff_eq!(trend, 13.0, epsilon = 1e-9);
        }
        if let Some(residual) = d.residual[t] {
            assert_abs_diff_eq!(residual, 0.0, epsilon = 1e-9);
        }
    }
}

/// Repeated calls produce identical output.
#[test]
fn test_decomposition_is_deterministic() {
    let p = pipeline(12, Additive);
    let series = wobbly_additive(60, 12);
    assert_eq!(p.decompose(&series).unwrap(), p.decompose(&series).unwrap());
}

// ============================================================================
// Reconstruction
// ============================================================================

/// trend + seasonal + residual reproduces every defined observation.
#[test]
fn test_additive_reconstruction() {
    let series = wobbly_additive(60, 12);
    let d = pipeline(12, Additive).decompose(&series).unwrap();

    for t in 0..d.len() {
        if let (Some(tr), Some(r)) = (d.trend[t], d.residual[t]) {
            assert_relative_eq!(
                tr + d.seasonal[t] + r,
                series.values()[t],
                max_relative = 1e-9
            );
            assert_relative_eq!(d.reconstruct(t).unwrap(), series.values()[t], max_relative = 1e-9);
        }
    }
}

/// trend × seasonal × residual reproduces every defined observation.
#[test]
fn test_multiplicative_reconstruction() {
    let series = wobbly_multiplicative(24);
    let d = pipeline(4, Multiplicative).decompose(&series).unwrap();

    for t in 0..d.len() {
        if let (Some(tr), Some(r)) = (d.trend[t], d.residual[t]) {
            let y = series.values()[t];
            assert_relative_eq!(r, y / (tr * d.seasonal[t]), max_relative = 1e-12);
            assert_relative_eq!(tr * d.seasonal[t] * r, y, max_relative = 1e-9);
        }
    }
}

/// Exact multiplicative data has unit residual ratios.
#[test]
fn test_multiplicative_exact_factors() {
    let factors = [0.8, 1.1, 1.2, 0.9];
    let values: Vec<f64> = (0..16).map(|t| 40.0 * factors[t % 4]).collect();
    let series = Series::new(values).unwrap();
    let d = pipeline(4, Multiplicative).decompose(&series).unwrap();

    for (phase, &s) in d.cycle().iter().enumerate() {
        assert_relative_eq!(s, factors[phase], max_relative = 1e-9);
    }
    for r in d.residual.iter().flatten() {
        assert_relative_eq!(*r, 1.0, max_relative = 1e-9);
    }
}

// ============================================================================
// Normalization
// ============================================================================

/// Additive cycle sums to zero.
#[test]
fn test_additive_cycle_sums_to_zero() {
    let d = pipeline(12, Additive)
        .decompose(&wobbly_additive(72, 12))
        .unwrap();
    let sum: f64 = d.seasonal[..12].iter().sum();
    assert_abs_diff_eq!(sum, 0.0, epsilon = 1e-9);
}

/// Multiplicative cycle averages to one.
#[test]
fn test_multiplicative_cycle_means_one() {
    let d = pipeline(4, Multiplicative)
        .decompose(&wobbly_multiplicative(32))
        .unwrap();
    let mean: f64 = d.seasonal[..4].iter().sum::<f64>() / 4.0;
    assert_abs_diff_eq!(mean, 1.0, epsilon = 1e-9);
}

/// Odd periods use a plain centered window.
#[test]
fn test_odd_period() {
    let values: Vec<f64> = (0..15).map(|t| [1.0, 4.0, 7.0][t % 3]).collect();
    let d = pipeline(3, Additive)
        .decompose(&Series::new(values).unwrap())
        .unwrap();

    assert!(d.trend[0].is_none());
    assert!(d.trend[14].is_none());
    assert_abs_diff_eq!(d.trend[1].unwrap(), 4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(d.cycle()[0], -3.0, epsilon = 1e-9);
    assert_abs_diff_eq!(d.cycle()[2], 3.0, epsilon = 1e-9);
}

/// Phases follow the series index, not the position.
#[test]
fn test_cycle_is_indexed_by_phase() {
    let values = vec![
        14.0, 16.0, 10.0, 12.0, 14.0, 16.0, 10.0, 12.0, 14.0, 16.0, 10.0, 12.0,
    ];
    let series = Series::with_start(-2, values).unwrap();
    let d = pipeline(4, Additive).decompose(&series).unwrap();

    // Index -2 has phase 2.
    assert_eq!(d.phase(0), 2);
    assert_abs_diff_eq!(d.cycle()[0], -3.0, epsilon = 1e-9);
    assert_abs_diff_eq!(d.cycle()[2], 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(d.seasonal[0], 1.0, epsilon = 1e-9);
}

// ============================================================================
// Edges & Errors
// ============================================================================

/// Edge trend and residual are explicitly undefined.
#[test]
fn test_edges_are_undefined() {
    let d = pipeline(4, Additive).decompose(&scenario_b()).unwrap();

    for t in [0, 1, 10, 11] {
        assert!(d.trend[t].is_none());
        assert!(d.residual[t].is_none());
        assert!(d.reconstruct(t).is_none());
    }
    for t in 2..10 {
        assert!(d.trend[t].is_some());
        assert!(d.residual[t].is_some());
    }
}

/// Fewer than two full cycles is rejected.
#[test]
fn test_insufficient_data() {
    let series = Series::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]).unwrap();
    let err = pipeline(4, Additive).decompose(&series).unwrap_err();

    assert_eq!(err, SeasonalError::InsufficientData { got: 7, min: 8 });
    assert_eq!(err.kind(), ErrorKind::InsufficientData);
}

/// Exactly two cycles is accepted.
#[test]
fn test_minimum_length() {
    let series = Series::new(vec![1.0, 2.0, 3.0, 4.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    assert!(pipeline(4, Additive).decompose(&series).is_ok());
}

/// Zero observations are rejected in multiplicative mode only.
#[test]
fn test_multiplicative_rejects_zero() {
    let mut values = vec![3.0; 12];
    values[5] = 0.0;
    let series = Series::new(values).unwrap();

    let err = pipeline(4, Multiplicative).decompose(&series).unwrap_err();
    assert_eq!(err, SeasonalError::ZeroValue { position: 5 });
    assert_eq!(err.kind(), ErrorKind::Numerical);

    assert!(pipeline(4, Additive).decompose(&series).is_ok());
}

/// Display output names the components.
#[test]
fn test_display() {
    let d = pipeline(4, Additive).decompose(&scenario_b()).unwrap();
    let text = format!("{}", d);
    assert!(text.contains("Decomposition:"));
    assert!(text.contains("Period:      4"));
    assert!(text.contains("Residual"));
}
