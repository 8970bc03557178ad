#![cfg(feature = "synthetic")]
//! Tests for the synthetic series generator feeding the pipeline.

use approx::assert_abs_diff_eq;

use seasonal::prelude::*;
use seasonal::synthetic::{SeasonalShape, SyntheticSeries, TrendShape};

/// Default settings are reproducible.
#[test]
fn test_default_is_reproducible() {
    let a = SyntheticSeries::new().generate().unwrap();
    let b = SyntheticSeries::new().seed(42).generate().unwrap();
    let c = SyntheticSeries::new().seed(7).generate().unwrap();

    assert_eq!(a.len(), 200);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

/// Noiseless shapes follow their closed forms.
#[test]
fn test_noiseless_shapes() {
    let linear = SyntheticSeries::new()
        .length(30)
        .noise(0.0)
        .seasonality(SeasonalShape::None)
        .generate()
        .unwrap();
    assert_abs_diff_eq!(linear.values()[20], 2.0, epsilon = 1e-12);

    let exponential = SyntheticSeries::new()
        .length(30)
        .noise(0.0)
        .trend(TrendShape::Exponential)
        .seasonality(SeasonalShape::Multiplicative)
        .period(12)
        .generate()
        .unwrap();
    // sin(2π·3/12) = 1 → factor 1.1
    assert_abs_diff_eq!(exponential.values()[3], (0.03_f64).exp() * 1.1, epsilon = 1e-12);
}

/// The full pipeline runs on generated monthly data.
#[test]
fn test_pipeline_on_generated_series() {
    let series = SyntheticSeries::new()
        .length(120)
        .noise(0.5)
        .period(12)
        .generate()
        .unwrap();

    let out = Seasonal::new()
        .period(12)
        .horizon(24)
        .build()
        .unwrap()
        .run(&series)
        .unwrap();

    assert_eq!(out.forecast.len(), 24);

    // The recovered cycle peaks near phase 3 (sin maximum).
    let cycle = out.decomposition.cycle();
    let peak = cycle
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
        .unwrap()
        .0;
    assert!((2..=4).contains(&peak));

    // Residual spread is close to the injected noise.
    assert!(out.fit.residual_std_dev() < 1.5);
}

/// Negative or non-finite noise levels are rejected as configuration errors.
#[test]
fn test_invalid_noise_is_rejected() {
    for noise in [-1.0, -1e-9, f64::NAN, f64::INFINITY] {
        let err = SyntheticSeries::new().noise(noise).generate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}
