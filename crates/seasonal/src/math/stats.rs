//! Descriptive statistics over slices.
//!
//! ## Purpose
//!
//! Small numerically plain helpers shared by the decomposition, the smoother,
//! and the diagnostics: mean, sample variance, and sample standard deviation.
//!
//! ## Invariants
//!
//! * Empty input yields `None` rather than NaN.
//! * Sample statistics use the `n − 1` denominator and need at least two values.

// External dependencies
use num_traits::Float;

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean<T: Float>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    Some(sum / T::from(values.len())?)
}

/// Sample variance with the `n − 1` denominator.
pub fn sample_variance<T: Float>(values: &[T]) -> Option<T> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let ss = values.iter().fold(T::zero(), |acc, &v| {
        let d = v - m;
        acc + d * d
    });
    Some(ss / T::from(values.len() - 1)?)
}

/// Sample standard deviation with the `n − 1` denominator.
pub fn sample_std_dev<T: Float>(values: &[T]) -> Option<T> {
    sample_variance(values).map(|v| v.max(T::zero()).sqrt())
}

/// Sum of squares.
pub fn sum_of_squares<T: Float>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &v| acc + v * v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean::<f64>(&[]), None);
    }

    #[test]
    fn sample_std_dev_matches_textbook() {
        let v = [2.0f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let sd = sample_std_dev(&v).unwrap();
        assert!((sd - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn single_value_has_no_sample_variance() {
        assert_eq!(sample_variance(&[1.0f64]), None);
    }
}
