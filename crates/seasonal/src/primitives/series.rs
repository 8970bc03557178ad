//! Evenly spaced, time-ordered observation sequences.
//!
//! ## Purpose
//!
//! This module defines [`Series`], the immutable data model shared by every
//! stage of the crate. A series is an ordered sequence of `(index, value)`
//! pairs whose indices increase by exactly one.
//!
//! ## Design notes
//!
//! * **Compact**: Only the first index is stored; the rest are implied.
//! * **Validated**: Construction rejects empty input, non-finite values, and gaps.
//! * **Immutable**: No mutating accessors are exposed after construction.
//!
//! ## Invariants
//!
//! * Length is at least 1.
//! * All values are finite.
//! * `index(t) == start + t` for every position `t`.
//!
//! ## Non-goals
//!
//! * This module does not handle missing or irregular timestamps.
//! * This module does not resample or interpolate.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SeasonalError;

/// An immutable, evenly spaced, time-ordered sequence of observations.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<T> {
    start: i64,
    values: Vec<T>,
}

impl<T: Float> Series<T> {
    /// Build a series indexed from zero.
    pub fn new(values: Vec<T>) -> Result<Self, SeasonalError> {
        Self::with_start(0, values)
    }

    /// Build a series whose first observation carries index `start`.
    pub fn with_start(start: i64, values: Vec<T>) -> Result<Self, SeasonalError> {
        if values.is_empty() {
            return Err(SeasonalError::EmptyInput);
        }

        if let Some((t, v)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(SeasonalError::InvalidNumericValue(format!(
                "value[{}]={}",
                t,
                v.to_f64().unwrap_or(f64::NAN)
            )));
        }

        // The last index must be representable.
        let overflow = SeasonalError::IndexOverflow {
            start,
            len: values.len(),
        };
        let span = i64::try_from(values.len() - 1).map_err(|_| overflow.clone())?;
        start.checked_add(span).ok_or(overflow)?;

        Ok(Self { start, values })
    }

    /// Build a series from explicit `(index, value)` pairs.
    ///
    /// Indices must increase by exactly one from pair to pair.
    pub fn from_pairs(pairs: &[(i64, T)]) -> Result<Self, SeasonalError> {
        let Some(&(start, _)) = pairs.first() else {
            return Err(SeasonalError::EmptyInput);
        };

        for (position, &(index, _)) in pairs.iter().enumerate() {
            let expected = i64::try_from(position)
                .ok()
                .and_then(|p| start.checked_add(p))
                .ok_or(SeasonalError::IndexOverflow {
                    start,
                    len: pairs.len(),
                })?;
            if index != expected {
                return Err(SeasonalError::NonContiguousIndex {
                    position,
                    expected,
                    got: index,
                });
            }
        }

        Self::with_start(start, pairs.iter().map(|&(_, v)| v).collect())
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Index of the first observation.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Index of the observation at `position`.
    pub fn index(&self, position: usize) -> i64 {
        self.start + position as i64
    }

    /// Observed values in time order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Iterate over `(index, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (i64, T)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(move |(t, &v)| (self.start + t as i64, v))
    }
}
