//! Goodness-of-fit metrics for a fitted smoothing model.
//!
//! ## Purpose
//!
//! This module summarizes how well the one-step-ahead fitted values track
//! the observations and provides information criteria for comparing models
//! (for example additive against multiplicative seasonality).
//!
//! ## Design notes
//!
//! * **Fitted range only**: Metrics use positions `P .. n`, where one-step
//!   fitted values exist.
//! * **Model size**: `k = 3 + 2 + P` (three coefficients, initial level and
//!   trend, `P` initial seasonal states).
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Error metrics**: SSE, MSE, RMSE, MAE.
//! * **Goodness-of-fit**: R² of the fitted values against the observations.
//! * **Model selection**: AIC, AICc, and BIC from the Gaussian likelihood.
//!
//! ## Invariants
//!
//! * Error metrics are non-negative.
//! * Information criteria are `None` when `SSE == 0` or the sample is too
//!   small for the correction term.
//!
//! ## Non-goals
//!
//! * This module does not perform the fitting.
//! * This module does not provide hypothesis tests on the residuals.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::math::stats::{mean, sample_std_dev, sum_of_squares};

// ============================================================================
// Diagnostics Structure
// ============================================================================

/// Fit quality metrics over the one-step-ahead fitted range.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics<T> {
    /// Number of fitted observations.
    pub observations: usize,

    /// Number of estimated quantities (`k`).
    pub parameters: usize,

    /// Sum of squared errors.
    pub sse: T,

    /// Mean squared error.
    pub mse: T,

    /// Root mean squared error.
    pub rmse: T,

    /// Mean absolute error.
    pub mae: T,

    /// Coefficient of determination (R²).
    pub r_squared: T,

    /// Sample standard deviation of the one-step errors.
    pub residual_sd: T,

    /// Akaike Information Criterion.
    pub aic: Option<T>,

    /// Small-sample corrected AIC.
    pub aicc: Option<T>,

    /// Bayesian Information Criterion.
    pub bic: Option<T>,
}

impl<T: Float> Diagnostics<T> {
    /// Compute diagnostics from aligned observations and one-step errors.
    ///
    /// `observed` holds the observations of the fitted range and `errors` the
    /// matching `y − ŷ` values; `period` sets the model size.
    pub fn compute(observed: &[T], errors: &[T], period: usize) -> Self {
        let n = errors.len();
        let parameters = 3 + 2 + period;
        let n_t = T::from(n.max(1)).unwrap();

        let sse = sum_of_squares(errors);
        let mse = sse / n_t;
        let rmse = mse.sqrt();
        let mae = errors.iter().fold(T::zero(), |acc, &e| acc + e.abs()) / n_t;
        let r_squared = Self::calculate_r_squared(observed, sse);
        let residual_sd = sample_std_dev(errors).unwrap_or_else(T::zero);

        let aic = Self::calculate_aic(sse, n, parameters);
        let aicc = aic.and_then(|aic| Self::calculate_aicc(aic, n, parameters));
        let bic = Self::calculate_bic(sse, n, parameters);

        Self {
            observations: n,
            parameters,
            sse,
            mse,
            rmse,
            mae,
            r_squared,
            residual_sd,
            aic,
            aicc,
            bic,
        }
    }

    // ========================================================================
    // Goodness-of-Fit
    // ========================================================================

    /// R² = 1 − SSE / SS_tot.
    pub fn calculate_r_squared(observed: &[T], sse: T) -> T {
        let Some(m) = mean(observed) else {
            return T::zero();
        };
        let ss_tot = observed.iter().fold(T::zero(), |acc, &y| {
            let d = y - m;
            acc + d * d
        });

        if ss_tot == T::zero() {
            if sse == T::zero() { T::one() } else { T::zero() }
        } else {
            T::one() - sse / ss_tot
        }
    }

    // ========================================================================
    // Model Selection Criteria
    // ========================================================================

    /// AIC = n · ln(SSE / n) + 2k.
    pub fn calculate_aic(sse: T, n: usize, k: usize) -> Option<T> {
        let log_lik = Self::log_term(sse, n)?;
        Some(log_lik + T::from(2 * k).unwrap())
    }

    /// AICc = AIC + 2k(k + 1) / (n − k − 1).
    pub fn calculate_aicc(aic: T, n: usize, k: usize) -> Option<T> {
        if n <= k + 1 {
            return None;
        }
        let k_t = T::from(k).unwrap();
        let denom = T::from(n - k - 1).unwrap();
        Some(aic + T::from(2.0).unwrap() * k_t * (k_t + T::one()) / denom)
    }

    /// BIC = n · ln(SSE / n) + k · ln(n).
    pub fn calculate_bic(sse: T, n: usize, k: usize) -> Option<T> {
        let log_lik = Self::log_term(sse, n)?;
        let n_t = T::from(n).unwrap();
        Some(log_lik + T::from(k).unwrap() * n_t.ln())
    }

    fn log_term(sse: T, n: usize) -> Option<T> {
        if n == 0 || sse <= T::zero() {
            return None;
        }
        let n_t = T::from(n).unwrap();
        Some(n_t * (sse / n_t).ln())
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Diagnostics:")?;
        writeln!(f, "  Observations: {}", self.observations)?;
        writeln!(f, "  Parameters:   {}", self.parameters)?;
        writeln!(f, "  SSE:          {:.6}", self.sse)?;
        writeln!(f, "  RMSE:         {:.6}", self.rmse)?;
        writeln!(f, "  MAE:          {:.6}", self.mae)?;
        writeln!(f, "  R²:           {:.6}", self.r_squared)?;
        writeln!(f, "  Residual SD:  {:.6}", self.residual_sd)?;

        if let Some(aic) = self.aic {
            writeln!(f, "  AIC:          {:.2}", aic)?;
        }
        if let Some(aicc) = self.aicc {
            writeln!(f, "  AICc:         {:.2}", aicc)?;
        }
        if let Some(bic) = self.bic {
            writeln!(f, "  BIC:          {:.2}", bic)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_fit_has_no_information_criteria() {
        let d = Diagnostics::compute(&[1.0, 2.0, 3.0, 4.0], &[0.0; 4], 2);
        assert_eq!(d.sse, 0.0);
        assert_eq!(d.r_squared, 1.0);
        assert!(d.aic.is_none());
        assert!(d.bic.is_none());
    }

    #[test]
    fn error_metrics() {
        let d = Diagnostics::compute(&[1.0, 2.0, 3.0, 4.0], &[1.0, -1.0, 1.0, -1.0], 2);
        assert_eq!(d.sse, 4.0);
        assert_eq!(d.mse, 1.0);
        assert_eq!(d.mae, 1.0);
        assert_eq!(d.parameters, 7);
        // n = 4 <= k + 1
        assert!(d.aicc.is_none());
        let aic = d.aic.unwrap();
        assert!((aic - 14.0).abs() < 1e-12);
    }
}
