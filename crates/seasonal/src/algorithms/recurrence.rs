//! Holt-Winters state initialization and recurrence.
//!
//! ## Purpose
//!
//! This module implements the triple exponential smoothing recurrence with an
//! additive trend and an additive or multiplicative seasonal component. It is
//! used both inside the optimizer objective (error sum only) and for the final
//! pass that records the whole state trajectory.
//!
//! ## Design notes
//!
//! * **Initialization**: Level is the mean of the first cycle, trend is the
//!   difference of the first two cycle means divided by `P`.
//! * **Seasonal start**: Taken from the decomposition cycle or from the first
//!   cycle's deviations (`value − level`) or ratios (`value / level`).
//! * **Ring buffer**: Seasonal states live in a length-`P` buffer so the
//!   objective runs without per-step allocation.
//!
//! ## Key concepts
//!
//! With `L`, `B`, `S` the level, trend, and seasonal states, for `t = P .. n-1`:
//!
//! ```text
//! Additive:       ŷ_t = L_{t-1} + B_{t-1} + S_{t-P}
//!                 L_t = α (y_t − S_{t-P}) + (1 − α)(L_{t-1} + B_{t-1})
//!                 S_t = γ (y_t − L_t)     + (1 − γ) S_{t-P}
//! Multiplicative: ŷ_t = (L_{t-1} + B_{t-1}) · S_{t-P}
//!                 L_t = α (y_t / S_{t-P}) + (1 − α)(L_{t-1} + B_{t-1})
//!                 S_t = γ (y_t / L_t)     + (1 − γ) S_{t-P}
//! Both:           B_t = β (L_t − L_{t-1}) + (1 − β) B_{t-1}
//! ```
//!
//! ## Invariants
//!
//! * The first `P` positions carry no one-step fitted value.
//! * Multiplicative divisors are checked before every division.
//!
//! ## Non-goals
//!
//! * This module does not choose the smoothing coefficients.
//! * This module does not support damped or multiplicative trends.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::decomposition::{normalize_cycle, seasonal_cycle};
use crate::math::moving_average::centered_moving_average;
use crate::math::stats::mean;
use crate::primitives::errors::SeasonalError;
use crate::primitives::mode::Mode;
use crate::primitives::params::SmoothingParameters;

// ============================================================================
// Initialization
// ============================================================================

/// Source of the initial seasonal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeasonalInit {
    /// Normalized cycle from a classical decomposition of the whole series.
    #[default]
    Decomposition,

    /// Deviations (additive) or ratios (multiplicative) of the first cycle
    /// against its mean, normalized.
    FirstCycle,
}

/// Smoother state at position `P − 1`, before the first update.
#[derive(Debug, Clone, PartialEq)]
pub struct InitialState<T> {
    /// Initial level (mean of the first cycle).
    pub level: T,

    /// Initial per-step trend.
    pub trend: T,

    /// Seasonal states for positions `0 .. P`.
    pub seasonal: Vec<T>,
}

impl<T: Float> InitialState<T> {
    /// Derive the initial state from the first two cycles.
    ///
    /// The caller guarantees `values.len() >= 2 * period`.
    pub fn estimate(
        values: &[T],
        period: usize,
        offset: usize,
        mode: Mode,
        init: SeasonalInit,
    ) -> Result<Self, SeasonalError> {
        let p = T::from(period).unwrap();
        let first = mean(&values[..period]).unwrap_or_else(T::zero);
        let second = mean(&values[period..2 * period]).unwrap_or_else(T::zero);
        let level = first;
        let trend = (second - first) / p;

        let seasonal = match init {
            SeasonalInit::Decomposition => {
                let ma = centered_moving_average(values, period);
                let cycle = seasonal_cycle(values, &ma, period, offset, mode)?;
                (0..period).map(|t| cycle[(offset + t) % period]).collect()
            }
            SeasonalInit::FirstCycle => {
                if mode.is_degenerate(level) {
                    return Err(SeasonalError::NearZeroDivisor {
                        position: period - 1,
                        context: "initial level",
                    });
                }
                let mut s: Vec<T> = values[..period]
                    .iter()
                    .map(|&y| mode.remove(y, level))
                    .collect();
                normalize_cycle(&mut s, mode)?;
                s
            }
        };

        Ok(Self {
            level,
            trend,
            seasonal,
        })
    }
}

// ============================================================================
// Recurrence
// ============================================================================

/// Final smoother state after the last observation.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalState<T> {
    /// Level at the last observation.
    pub level: T,

    /// Trend at the last observation.
    pub trend: T,

    /// Most recent seasonal state of each phase, indexed by phase.
    pub cycle: Vec<T>,
}

/// Full state trajectory of one smoothing pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<T> {
    /// Level path; defined from position `P − 1`.
    pub level: Vec<Option<T>>,

    /// Trend path; defined from position `P − 1`.
    pub trend: Vec<Option<T>>,

    /// Seasonal path; initial states for the first cycle.
    pub seasonal: Vec<T>,

    /// One-step-ahead fitted values; `None` for the first cycle.
    pub fitted: Vec<Option<T>>,

    /// One-step errors `y − ŷ` over positions `P .. n`.
    pub errors: Vec<T>,

    /// Sum of squared one-step errors.
    pub sse: T,

    /// State after the last observation.
    pub last: FinalState<T>,
}

/// Sum of squared one-step errors for the given coefficients.
pub fn sse<T: Float>(
    values: &[T],
    period: usize,
    mode: Mode,
    params: SmoothingParameters<T>,
    init: &InitialState<T>,
) -> Result<T, SeasonalError> {
    let mut total = T::zero();
    recur(values, period, mode, params, init, |t, fitted, _, _, _| {
        let e = values[t] - fitted;
        total = total + e * e;
    })?;
    Ok(total)
}

/// Run the recurrence and record every state.
pub fn trajectory<T: Float>(
    values: &[T],
    period: usize,
    offset: usize,
    mode: Mode,
    params: SmoothingParameters<T>,
    init: &InitialState<T>,
) -> Result<Trajectory<T>, SeasonalError> {
    let n = values.len();

    let mut level = Vec::with_capacity(n);
    let mut trend = Vec::with_capacity(n);
    let mut seasonal = Vec::with_capacity(n);
    let mut fitted = Vec::with_capacity(n);
    let mut errors = Vec::with_capacity(n - period);

    for t in 0..period {
        let defined = t + 1 == period;
        level.push(defined.then_some(init.level));
        trend.push(defined.then_some(init.trend));
        seasonal.push(init.seasonal[t]);
        fitted.push(None);
    }

    let mut sse = T::zero();
    let (last_level, last_trend, ring) =
        recur(values, period, mode, params, init, |t, yhat, l, b, s| {
            let e = values[t] - yhat;
            sse = sse + e * e;
            errors.push(e);
            fitted.push(Some(yhat));
            level.push(Some(l));
            trend.push(Some(b));
            seasonal.push(s);
        })?;

    let mut cycle = Vec::with_capacity(period);
    cycle.resize(period, T::zero());
    for t in n - period..n {
        cycle[(offset + t) % period] = ring[t % period];
    }

    Ok(Trajectory {
        level,
        trend,
        seasonal,
        fitted,
        errors,
        sse,
        last: FinalState {
            level: last_level,
            trend: last_trend,
            cycle,
        },
    })
}

/// Core recurrence loop.
///
/// Calls `visit(t, fitted, level, trend, seasonal)` after each update and
/// returns the final level, trend, and seasonal ring buffer (indexed by
/// `position mod P`).
fn recur<T, F>(
    values: &[T],
    period: usize,
    mode: Mode,
    params: SmoothingParameters<T>,
    init: &InitialState<T>,
    mut visit: F,
) -> Result<(T, T, Vec<T>), SeasonalError>
where
    T: Float,
    F: FnMut(usize, T, T, T, T),
{
    let SmoothingParameters { alpha, beta, gamma } = params;
    let one = T::one();

    let mut ring = init.seasonal.clone();
    let mut level = init.level;
    let mut trend = init.trend;

    for (t, &y) in values.iter().enumerate().skip(period) {
        let slot = t % period;
        let s_prev = ring[slot];
        let base = level + trend;

        if mode.is_degenerate(s_prev) {
            return Err(SeasonalError::NearZeroDivisor {
                position: t,
                context: "seasonal factor",
            });
        }
        if mode.is_degenerate(base) {
            return Err(SeasonalError::NearZeroDivisor {
                position: t,
                context: "level + trend",
            });
        }

        let fitted = mode.apply(base, s_prev);

        let new_level = alpha * mode.remove(y, s_prev) + (one - alpha) * base;
        if mode.is_degenerate(new_level) {
            return Err(SeasonalError::NearZeroDivisor {
                position: t,
                context: "level",
            });
        }
        let new_trend = beta * (new_level - level) + (one - beta) * trend;
        let new_season = gamma * mode.remove(y, new_level) + (one - gamma) * s_prev;

        level = new_level;
        trend = new_trend;
        ring[slot] = new_season;

        visit(t, fitted, level, trend, new_season);
    }

    Ok((level, trend, ring))
}
