//! Seasonal composition mode.
//!
//! ## Purpose
//!
//! [`Mode`] selects how trend, seasonal, and residual components combine.
//! It is resolved once when a pipeline is built and then dispatched with
//! `match` at each arithmetic site.
//!
//! ## Key concepts
//!
//! * **Additive**: `value = trend + seasonal + residual`.
//! * **Multiplicative**: `value = trend × seasonal × residual`; every divisor must be non-zero.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

/// Magnitude below which a multiplicative divisor is treated as zero.
pub const DIVISOR_EPSILON: f64 = 1e-10;

/// How trend and seasonal effects combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Seasonal effect is added to the trend.
    #[default]
    Additive,

    /// Seasonal effect scales the trend.
    Multiplicative,
}

impl Mode {
    /// Remove a component from a value (subtract or divide).
    #[inline]
    pub fn remove<T: Float>(self, value: T, component: T) -> T {
        match self {
            Mode::Additive => value - component,
            Mode::Multiplicative => value / component,
        }
    }

    /// Apply a component to a value (add or multiply).
    #[inline]
    pub fn apply<T: Float>(self, value: T, component: T) -> T {
        match self {
            Mode::Additive => value + component,
            Mode::Multiplicative => value * component,
        }
    }

    /// Neutral seasonal effect (0 or 1).
    #[inline]
    pub fn identity<T: Float>(self) -> T {
        match self {
            Mode::Additive => T::zero(),
            Mode::Multiplicative => T::one(),
        }
    }

    /// Whether arithmetic in this mode divides by components.
    #[inline]
    pub fn divides(self) -> bool {
        matches!(self, Mode::Multiplicative)
    }

    /// Whether `divisor` is unusable as a divisor in this mode.
    #[inline]
    pub fn is_degenerate<T: Float>(self, divisor: T) -> bool {
        self.divides() && divisor.abs() < T::from(DIVISOR_EPSILON).unwrap()
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Mode::Additive => write!(f, "Additive"),
            Mode::Multiplicative => write!(f, "Multiplicative"),
        }
    }
}
