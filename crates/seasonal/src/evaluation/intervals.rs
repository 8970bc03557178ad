//! Prediction intervals for multi-step forecasts.
//!
//! ## Purpose
//!
//! This module turns the in-sample one-step error spread into prediction
//! intervals that widen with the forecast horizon.
//!
//! ## Design notes
//!
//! * **Scale**: Sample standard deviation (`n − 1`) of the one-step errors.
//! * **Widening**: Half-width `z · σ · √h` under independent errors.
//! * **Critical value**: Two-sided normal quantile via Acklam's approximation.
//!
//! ## Invariants
//!
//! * Confidence levels must satisfy 0 < level < 1 (checked by the validator).
//! * Half-widths are non-negative and non-decreasing in `h`.
//!
//! ## Non-goals
//!
//! * This module does not simulate forecast paths.
//! * This module does not model error autocorrelation or heteroscedasticity.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::normal::z_critical;
use crate::math::stats::sample_std_dev;

// ============================================================================
// Interval Configuration
// ============================================================================

/// Prediction interval generator at a fixed coverage level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionInterval<T> {
    /// Desired probability coverage (e.g., 0.95 for 95% intervals).
    pub level: T,

    /// Two-sided critical value for `level`.
    pub z: T,

    /// One-step error standard deviation.
    pub residual_sd: T,
}

impl<T: Float> PredictionInterval<T> {
    /// Create an interval generator from a coverage level and error scale.
    pub fn new(level: T, residual_sd: T) -> Self {
        Self {
            level,
            z: z_critical(level),
            residual_sd: residual_sd.max(T::zero()),
        }
    }

    /// Half-width `z · σ · √h` for `h` steps ahead.
    pub fn half_width(&self, steps_ahead: usize) -> T {
        let h = T::from(steps_ahead).unwrap_or_else(T::one);
        self.z * self.residual_sd * h.sqrt()
    }

    /// `(lower, upper)` bounds around `point`.
    pub fn bounds(&self, point: T, steps_ahead: usize) -> (T, T) {
        let w = self.half_width(steps_ahead);
        (point - w, point + w)
    }
}

/// Sample standard deviation of one-step errors; zero when undefined.
pub fn residual_std_dev<T: Float>(errors: &[T]) -> T {
    sample_std_dev(errors).unwrap_or_else(T::zero)
}
