//! Classical seasonal decomposition.
//!
//! ## Purpose
//!
//! This module splits a series into trend, seasonal, and residual components
//! by moving-average detrending followed by per-phase seasonal averaging.
//!
//! ## Design notes
//!
//! * **Trend**: Centered moving average of window `P` (2×P for even `P`).
//! * **Seasonal**: Per-phase mean of the detrended values, normalized to sum
//!   to zero (additive) or average to one (multiplicative), then tiled.
//! * **Residual**: `value − trend − seasonal` or `value / (trend × seasonal)`.
//! * **Edges**: Positions without a full trend window stay `None`.
//!
//! ## Key concepts
//!
//! * **Phase**: `(offset + t) mod P` for series position `t`, where `offset`
//!   is the first index of the series reduced modulo `P`.
//! * **Cycle**: The `P` normalized seasonal indices, ordered by phase.
//!
//! ## Invariants
//!
//! * `trend` and `residual` are `None` at exactly the same positions.
//! * `seasonal[t] == cycle[phase(t)]` for every position.
//! * Where defined, components reconstruct the observation within rounding.
//!
//! ## Non-goals
//!
//! * This module does not validate period or length (see `engine::validator`).
//! * This module does not extrapolate the trend into the undefined edges.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::moving_average::centered_moving_average;
use crate::primitives::errors::SeasonalError;
use crate::primitives::mode::Mode;

// ============================================================================
// Components
// ============================================================================

/// Raw output of a classical decomposition.
#[derive(Debug, Clone, PartialEq)]
pub struct Components<T> {
    /// Centered moving-average trend; `None` at both edges.
    pub trend: Vec<Option<T>>,

    /// Seasonal component tiled over the full length.
    pub seasonal: Vec<T>,

    /// Residual component; `None` wherever the trend is undefined.
    pub residual: Vec<Option<T>>,

    /// Normalized seasonal cycle indexed by phase.
    pub cycle: Vec<T>,
}

// ============================================================================
// Decomposition
// ============================================================================

/// Decompose `values` with seasonal period `period`.
///
/// The caller guarantees `period >= 2` and `values.len() >= 2 * period`.
pub fn decompose<T: Float>(
    values: &[T],
    period: usize,
    offset: usize,
    mode: Mode,
) -> Result<Components<T>, SeasonalError> {
    let n = values.len();
    let trend = centered_moving_average(values, period);

    let cycle = seasonal_cycle(values, &trend, period, offset, mode)?;

    let seasonal: Vec<T> = (0..n).map(|t| cycle[(offset + t) % period]).collect();

    let mut residual = Vec::with_capacity(n);
    for (t, (&y, tr)) in values.iter().zip(trend.iter()).enumerate() {
        let r = match *tr {
            Some(tr) => {
                let fitted = mode.apply(tr, seasonal[t]);
                if mode.is_degenerate(fitted) {
                    return Err(SeasonalError::NearZeroDivisor {
                        position: t,
                        context: "trend x seasonal",
                    });
                }
                Some(mode.remove(y, fitted))
            }
            None => None,
        };
        residual.push(r);
    }

    Ok(Components {
        trend,
        seasonal,
        residual,
        cycle,
    })
}

/// Normalized seasonal cycle estimated from detrended values.
///
/// Averages the detrended values of each phase over the positions where the
/// trend is defined, then centers the indices on the mode's identity.
pub fn seasonal_cycle<T: Float>(
    values: &[T],
    trend: &[Option<T>],
    period: usize,
    offset: usize,
    mode: Mode,
) -> Result<Vec<T>, SeasonalError> {
    let mut sums = Vec::with_capacity(period);
    sums.resize(period, T::zero());
    let mut counts = Vec::with_capacity(period);
    counts.resize(period, 0usize);

    for (t, (&y, tr)) in values.iter().zip(trend.iter()).enumerate() {
        let Some(tr) = *tr else {
            continue;
        };
        if mode.is_degenerate(tr) {
            return Err(SeasonalError::NearZeroDivisor {
                position: t,
                context: "trend",
            });
        }
        let phase = (offset + t) % period;
        sums[phase] = sums[phase] + mode.remove(y, tr);
        counts[phase] += 1;
    }

    let mut cycle: Vec<T> = sums
        .iter()
        .zip(counts.iter())
        .map(|(&s, &c)| {
            if c == 0 {
                mode.identity()
            } else {
                s / T::from(c).unwrap()
            }
        })
        .collect();

    normalize_cycle(&mut cycle, mode)?;
    Ok(cycle)
}

/// Center a seasonal cycle: zero sum (additive) or unit mean (multiplicative).
pub fn normalize_cycle<T: Float>(cycle: &mut [T], mode: Mode) -> Result<(), SeasonalError> {
    if cycle.is_empty() {
        return Ok(());
    }

    let p = T::from(cycle.len()).unwrap();
    let mean = cycle.iter().fold(T::zero(), |acc, &s| acc + s) / p;

    match mode {
        Mode::Additive => {
            for s in cycle.iter_mut() {
                *s = *s - mean;
            }
        }
        Mode::Multiplicative => {
            if mode.is_degenerate(mean) {
                return Err(SeasonalError::NearZeroDivisor {
                    position: 0,
                    context: "seasonal mean",
                });
            }
            for s in cycle.iter_mut() {
                *s = *s / mean;
            }
        }
    }

    Ok(())
}
