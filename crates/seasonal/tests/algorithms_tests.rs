#![cfg(feature = "dev")]
//! Tests for the decomposition, recurrence, and search algorithms.
//!
//! ## Test Organization
//!
//! 1. **Initialization** - Level, trend, and seasonal starting states
//! 2. **Recurrence** - One-step fitted values and degeneracy checks
//! 3. **Search** - Bounded minimization and multi-start behavior

use approx::{assert_abs_diff_eq, assert_relative_eq};

use seasonal::internals::algorithms::optimizer::{OptimizerConfig, minimize, nelder_mead};
use seasonal::internals::algorithms::recurrence::{InitialState, SeasonalInit, sse, trajectory};
use seasonal::internals::primitives::errors::SeasonalError;
use seasonal::internals::primitives::mode::Mode;
use seasonal::internals::primitives::params::SmoothingParameters;

// ============================================================================
// Helper Functions
// ============================================================================

fn scenario_b() -> Vec<f64> {
    vec![
        10.0, 12.0, 14.0, 16.0, 10.0, 12.0, 14.0, 16.0, 10.0, 12.0, 14.0, 16.0,
    ]
}

fn params(alpha: f64, beta: f64, gamma: f64) -> SmoothingParameters<f64> {
    SmoothingParameters::new(alpha, beta, gamma).unwrap()
}

// ============================================================================
// Initialization
// ============================================================================

/// Level is the first-cycle mean and trend the per-step change of cycle means.
#[test]
fn test_initial_level_and_trend() {
    let values: Vec<f64> = (0..8).map(|t| t as f64).collect();
    let init =
        InitialState::estimate(&values, 4, 0, Mode::Additive, SeasonalInit::FirstCycle).unwrap();

    assert_relative_eq!(init.level, 1.5);
    assert_relative_eq!(init.trend, 1.0);
    assert_eq!(init.seasonal.len(), 4);
}

/// Decomposition start reuses the normalized cycle.
#[test]
fn test_initial_seasonal_from_decomposition() {
    let init = InitialState::estimate(
        &scenario_b(),
        4,
        0,
        Mode::Additive,
        SeasonalInit::Decomposition,
    )
    .unwrap();

    let expected = [-3.0, -1.0, 1.0, 3.0];
    for (s, e) in init.seasonal.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*s, *e, epsilon = 1e-12);
    }
    assert_relative_eq!(init.level, 13.0);
    assert_abs_diff_eq!(init.trend, 0.0);
}

/// Multiplicative first-cycle ratios average to one.
#[test]
fn test_initial_seasonal_ratios() {
    let values = [8.0, 11.0, 12.0, 9.0, 8.0, 11.0, 12.0, 9.0];
    let init = InitialState::estimate(
        &values,
        4,
        0,
        Mode::Multiplicative,
        SeasonalInit::FirstCycle,
    )
    .unwrap();

    assert_relative_eq!(init.level, 10.0);
    assert_relative_eq!(init.seasonal[0], 0.8, max_relative = 1e-12);
    assert_relative_eq!(init.seasonal[2], 1.2, max_relative = 1e-12);
}

// ============================================================================
// Recurrence
// ============================================================================

/// Exact seasonal data has zero one-step error for any coefficients.
#[test]
fn test_exact_series_zero_error() {
    let values = scenario_b();
    let init =
        InitialState::estimate(&values, 4, 0, Mode::Additive, SeasonalInit::Decomposition)
            .unwrap();

    for p in [params(0.3, 0.1, 0.1), params(0.9, 0.9, 0.9), params(0.01, 0.5, 0.2)] {
        let total = sse(&values, 4, Mode::Additive, p, &init).unwrap();
        assert_abs_diff_eq!(total, 0.0, epsilon = 1e-20);
    }
}

/// The trajectory matches the error sum and hand-computed first step.
#[test]
fn test_trajectory() {
    let values = [1.0, 3.0, 2.0, 4.0, 2.0, 4.0, 3.0, 5.0];
    let p = params(0.5, 0.5, 0.5);
    let init =
        InitialState::estimate(&values, 2, 0, Mode::Additive, SeasonalInit::FirstCycle).unwrap();
    let path = trajectory(&values, 2, 0, Mode::Additive, p, &init).unwrap();

    // level 2, trend (3 - 2) / 2 = 0.5, seasonal [-1, 1]
    assert_relative_eq!(init.level, 2.0);
    assert_relative_eq!(init.trend, 0.5);
    assert_eq!(path.fitted[0], None);
    assert_eq!(path.fitted[1], None);
    assert_relative_eq!(path.fitted[2].unwrap(), 1.5);
    assert_eq!(path.level[1], Some(2.0));
    assert_eq!(path.errors.len(), 6);
    assert_relative_eq!(path.errors[0], 0.5);

    let total = sse(&values, 2, Mode::Additive, p, &init).unwrap();
    assert_relative_eq!(path.sse, total);
    assert_eq!(path.last.cycle.len(), 2);
}

/// A vanishing seasonal factor is a numerical error in multiplicative mode.
#[test]
fn test_multiplicative_degenerate_factor() {
    let values = [1.0, 2.0, 1.0, 2.0, 1.0, 2.0];
    let init = InitialState {
        level: 1.5,
        trend: 0.0,
        seasonal: vec![0.0, 2.0],
    };
    let err = sse(&values, 2, Mode::Multiplicative, params(0.5, 0.5, 0.5), &init).unwrap_err();
    assert_eq!(
        err,
        SeasonalError::NearZeroDivisor {
            position: 2,
            context: "seasonal factor"
        }
    );
}

// ============================================================================
// Search
// ============================================================================

/// A bowl with an interior minimum is found from the default seed.
#[test]
fn test_minimize_interior() {
    let bowl = |p: [f64; 3]| (p[0] - 0.6).powi(2) + (p[1] - 0.25).powi(2) + (p[2] - 0.8).powi(2);
    let out = minimize(&bowl, &OptimizerConfig::default());

    assert!(out.converged);
    assert_abs_diff_eq!(out.point[0], 0.6, epsilon = 1e-3);
    assert_abs_diff_eq!(out.point[1], 0.25, epsilon = 1e-3);
    assert_abs_diff_eq!(out.point[2], 0.8, epsilon = 1e-3);
    // 27 grid points plus three starts
    assert!(out.evaluations > 27);
}

/// Infinite regions are escaped rather than reported.
#[test]
fn test_minimize_with_infeasible_region() {
    let f = |p: [f64; 3]| {
        if p[0] < 0.2 {
            f64::INFINITY
        } else {
            (p[0] - 0.5).powi(2) + p[1] + p[2]
        }
    };
    let out = minimize(&f, &OptimizerConfig::default());
    assert!(out.value.is_finite());
    assert!(out.point[0] >= 0.2);
}

/// A single start from a corner stays inside the box.
#[test]
fn test_nelder_mead_from_corner() {
    let config = OptimizerConfig::default();
    let f = |p: [f64; 3]| -(p[0] + p[1] + p[2]);
    let out = nelder_mead(&f, [0.9999, 0.9999, 0.9999], &config);

    for x in out.point {
        assert!(x >= config.lower && x <= config.upper);
    }
    assert_abs_diff_eq!(out.value, -3.0 * config.upper, epsilon = 1e-9);
}
