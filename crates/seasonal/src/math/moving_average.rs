//! Centered moving averages for trend extraction.
//!
//! ## Purpose
//!
//! This module computes the centered moving-average trend used by classical
//! decomposition. For an odd period `P` it is a plain length-`P` window; for an
//! even period it is the "2×P" filter, i.e. the mean of two adjacent length-`P`
//! windows, which is a length-`P + 1` window with half weight at both ends.
//!
//! ## Key concepts
//!
//! * **Half-width**: `⌊P/2⌋` positions at each end have no full window.
//! * **Undefined edges**: those positions are returned as `None`, never zero.
//!
//! ## Invariants
//!
//! * Output length equals input length.
//! * Exactly `⌊P/2⌋` leading and trailing entries are `None` when `n ≥ P + 1`.
//! * A constant input yields the same constant at every defined position.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Centered moving average of window `period`.
///
/// Returns `None` at the first and last `period / 2` positions. The caller
/// guarantees `period >= 2`.
pub fn centered_moving_average<T: Float>(values: &[T], period: usize) -> Vec<Option<T>> {
    let n = values.len();
    let half = period / 2;
    let mut out = Vec::with_capacity(n);
    out.resize(n, None);

    if n <= 2 * half {
        return out;
    }

    let p = T::from(period).unwrap();
    let two = T::from(2.0).unwrap();

    for (t, slot) in out.iter_mut().enumerate().take(n - half).skip(half) {
        let avg = if period % 2 == 1 {
            values[t - half..=t + half]
                .iter()
                .fold(T::zero(), |acc, &v| acc + v)
                / p
        } else {
            let inner = values[t - half + 1..t + half]
                .iter()
                .fold(T::zero(), |acc, &v| acc + v);
            let ends = (values[t - half] + values[t + half]) / two;
            (inner + ends) / p
        };
        *slot = Some(avg);
    }

    out
}
