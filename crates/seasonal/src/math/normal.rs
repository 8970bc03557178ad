//! Standard normal quantiles.
//!
//! ## Purpose
//!
//! This module provides the inverse standard normal CDF used to turn a
//! confidence level into a two-sided critical value for prediction intervals.
//!
//! ## Design notes
//!
//! * **Approximation**: Acklam's rational approximation, relative error below 1.2e-9.
//! * **Precision**: Evaluated in `f64` and converted to the caller's float type.
//!
//! ## Invariants
//!
//! * `inverse_cdf(0.5) == 0` and the function is odd around 0.5.
//! * `z_critical(c)` is strictly increasing in `c` on (0, 1).

// External dependencies
use num_traits::Float;

/// Two-sided critical value `z(1 − (1 − c) / 2)` for confidence level `c`.
///
/// The caller guarantees `0 < c < 1`.
pub fn z_critical<T: Float>(confidence_level: T) -> T {
    let c = confidence_level.to_f64().unwrap_or(0.95);
    let p = 1.0 - (1.0 - c) / 2.0;
    T::from(inverse_cdf(p)).unwrap_or_else(T::one)
}

/// Rational approximation of the inverse standard normal CDF.
///
/// Returns 0 outside the open interval (0, 1).
pub fn inverse_cdf(p: f64) -> f64 {
    if p <= 0.0 || p >= 1.0 {
        return 0.0;
    }

    // Coefficients for central region
    const A: [f64; 6] = [
        -3.969_683_028_665_376e1,
        2.209_460_984_245_205e2,
        -2.759_285_104_469_687e2,
        1.383_577_518_672_69e2,
        -3.066_479_806_614_716e1,
        2.506_628_277_459_239e0,
    ];
    const B: [f64; 5] = [
        -5.447_609_879_822_406e1,
        1.615_858_368_580_409e2,
        -1.556_989_798_598_866e2,
        6.680_131_188_771_972e1,
        -1.328_068_155_288_572e1,
    ];

    // Coefficients for tail regions
    const C: [f64; 6] = [
        -7.784_894_002_430_293e-3,
        -3.223_964_580_411_365e-1,
        -2.400_758_277_161_838e0,
        -2.549_732_539_343_734e0,
        4.374_664_141_464_968e0,
        2.938_163_982_698_783e0,
    ];
    const D: [f64; 4] = [
        7.784_695_709_041_462e-3,
        3.224_671_290_700_398e-1,
        2.445_134_137_142_996e0,
        3.754_408_661_907_416e0,
    ];

    const P_LOW: f64 = 0.02425;
    const P_HIGH: f64 = 1.0 - P_LOW;

    let tail = |q: f64| {
        let num = ((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5];
        let den = (((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0;
        num / den
    };

    if p < P_LOW {
        tail(Float::sqrt(-2.0 * Float::ln(p)))
    } else if p > P_HIGH {
        -tail(Float::sqrt(-2.0 * Float::ln(1.0 - p)))
    } else {
        let q = p - 0.5;
        let r = q * q;
        let num = (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q;
        let den = ((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0;
        num / den
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_levels() {
        assert!((z_critical(0.95f64) - 1.959_964).abs() < 1e-5);
        assert!((z_critical(0.99f64) - 2.575_829).abs() < 1e-5);
        assert!((z_critical(0.80f64) - 1.281_552).abs() < 1e-5);
    }

    #[test]
    fn symmetric_around_median() {
        assert_eq!(inverse_cdf(0.5), 0.0);
        assert!((inverse_cdf(0.01) + inverse_cdf(0.99)).abs() < 1e-9);
    }
}
