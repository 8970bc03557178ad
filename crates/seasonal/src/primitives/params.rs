//! Holt-Winters smoothing coefficients.
//!
//! ## Purpose
//!
//! [`SmoothingParameters`] bundles the level (α), trend (β), and seasonal (γ)
//! smoothing coefficients. Searched coefficients always lie in the closed box
//! `[ε, 1 − ε]` with `ε = `[`PARAMETER_BOUND`], which keeps them strictly inside
//! the open unit interval.
//!
//! ## Invariants
//!
//! * `0 < alpha, beta, gamma < 1` for every value built through [`SmoothingParameters::new`].

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SeasonalError;

/// Distance kept between searched coefficients and the interval ends.
pub const PARAMETER_BOUND: f64 = 1e-4;

/// Level, trend, and seasonal smoothing coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingParameters<T> {
    /// Level smoothing coefficient (α).
    pub alpha: T,

    /// Trend smoothing coefficient (β).
    pub beta: T,

    /// Seasonal smoothing coefficient (γ).
    pub gamma: T,
}

impl<T: Float> SmoothingParameters<T> {
    /// Create coefficients, rejecting values outside the open interval (0, 1).
    pub fn new(alpha: T, beta: T, gamma: T) -> Result<Self, SeasonalError> {
        for (name, value) in [("alpha", alpha), ("beta", beta), ("gamma", gamma)] {
            if !value.is_finite() || value <= T::zero() || value >= T::one() {
                return Err(SeasonalError::InvalidSmoothingParameter {
                    name,
                    value: value.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(Self { alpha, beta, gamma })
    }

    /// Coefficients used to seed the optimizer: (0.3, 0.1, 0.1).
    pub fn default_seed() -> Self {
        Self {
            alpha: T::from(0.3).unwrap(),
            beta: T::from(0.1).unwrap(),
            gamma: T::from(0.1).unwrap(),
        }
    }

    /// Pack as `[alpha, beta, gamma]`.
    #[inline]
    pub fn to_array(self) -> [T; 3] {
        [self.alpha, self.beta, self.gamma]
    }

    /// Unpack from `[alpha, beta, gamma]` without validation.
    #[inline]
    pub fn from_array(p: [T; 3]) -> Self {
        Self {
            alpha: p[0],
            beta: p[1],
            gamma: p[2],
        }
    }

    /// Convert to `f64` for reporting.
    pub fn to_f64(self) -> SmoothingParameters<f64> {
        SmoothingParameters {
            alpha: self.alpha.to_f64().unwrap_or(f64::NAN),
            beta: self.beta.to_f64().unwrap_or(f64::NAN),
            gamma: self.gamma.to_f64().unwrap_or(f64::NAN),
        }
    }
}

impl<T: Float> Default for SmoothingParameters<T> {
    fn default() -> Self {
        Self::default_seed()
    }
}
