//! Statistics primitives: mean, percentile bootstrap, rounding
//!
//! The bootstrap routines come in pairs. The plain form draws from
//! `rand::thread_rng()`; the `_with` form takes any [`Rng`] so callers can
//! inject a seeded generator.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Default number of bootstrap resamples
pub const DEFAULT_ITERATIONS: usize = 1000;

/// Lower tail of the two-sided 95% interval
const LOWER_PERCENTILE: f64 = 0.025;

/// Upper tail of the two-sided 95% interval
const UPPER_PERCENTILE: f64 = 0.975;

/// Confidence interval produced by the bootstrap routines
///
/// Bounds are read from sorted resample statistics, so `lower <= upper`
/// always holds. Nothing requires the point estimate to fall inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound (2.5th percentile)
    pub lower: f64,
    /// Upper bound (97.5th percentile)
    pub upper: f64,
}

impl ConfidenceInterval {
    /// Create a new confidence interval
    ///
    /// # Panics
    /// Panics if `lower > upper`
    pub fn new(lower: f64, upper: f64) -> Self {
        assert!(lower <= upper, "Lower bound must be <= upper bound");

        Self { lower, upper }
    }

    /// Interval collapsed onto a single value
    pub fn point(value: f64) -> Self {
        Self {
            lower: value,
            upper: value,
        }
    }

    /// Check if the interval contains a value
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Both bounds rounded to one decimal place
    pub fn rounded(&self) -> Self {
        Self {
            lower: round_to_tenth(self.lower),
            upper: round_to_tenth(self.upper),
        }
    }
}

/// Arithmetic mean; `0.0` for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    values.iter().sum::<f64>() / values.len() as f64
}

/// 95% percentile-bootstrap interval for the mean of `values`
///
/// Uses the thread-local generator. See [`bootstrap_ci_with`].
pub fn bootstrap_ci(values: &[f64], iterations: usize) -> ConfidenceInterval {
    bootstrap_ci_with(values, iterations, &mut rand::thread_rng())
}

/// 95% percentile-bootstrap interval for the mean of `values`
///
/// - no values: `[0, 0]`
/// - one value: `[v, v]`, no resampling
/// - otherwise: `iterations` resample means, sorted, read at the 2.5% and
///   97.5% positions
pub fn bootstrap_ci_with<R: Rng + ?Sized>(
    values: &[f64],
    iterations: usize,
    rng: &mut R,
) -> ConfidenceInterval {
    match values {
        [] => ConfidenceInterval::point(0.0),
        [only] => ConfidenceInterval::point(*only),
        _ => {
            let means: Vec<f64> = (0..iterations)
                .map(|_| resample_mean(values, rng))
                .collect();
            percentile_interval(means)
        }
    }
}

/// 95% percentile-bootstrap interval for `mean(treatment) - mean(control)`
///
/// Each side is resampled independently at its own size. An empty side
/// contributes a mean of 0 without drawing from the generator.
pub fn bootstrap_mean_difference_with<R: Rng + ?Sized>(
    control: &[f64],
    treatment: &[f64],
    iterations: usize,
    rng: &mut R,
) -> ConfidenceInterval {
    let diffs: Vec<f64> = (0..iterations)
        .map(|_| {
            let control_mean = resample_mean(control, rng);
            let treatment_mean = resample_mean(treatment, rng);
            treatment_mean - control_mean
        })
        .collect();

    percentile_interval(diffs)
}

/// Round half up to one decimal place (`floor(x * 10 + 0.5) / 10`)
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Round half up to the nearest integer percentage of a fraction
pub fn to_percentage(fraction: f64) -> u32 {
    (fraction * 100.0 + 0.5).floor().max(0.0) as u32
}

/// Mean of a same-size sample drawn uniformly with replacement
fn resample_mean<R: Rng + ?Sized>(values: &[f64], rng: &mut R) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let total: f64 = (0..values.len())
        .map(|_| values[rng.gen_range(0..values.len())])
        .sum();
    total / values.len() as f64
}

/// Sort statistics ascending and read the 2.5% / 97.5% positions
fn percentile_interval(mut stats: Vec<f64>) -> ConfidenceInterval {
    if stats.is_empty() {
        return ConfidenceInterval::point(0.0);
    }

    stats.sort_by(f64::total_cmp);

    let n = stats.len();
    let lower_idx = ((n as f64 * LOWER_PERCENTILE).floor() as usize).min(n - 1);
    let upper_idx = ((n as f64 * UPPER_PERCENTILE).floor() as usize).min(n - 1);

    // Sorted, so the bounds are already ordered; NaN statistics sort last
    ConfidenceInterval {
        lower: stats[lower_idx],
        upper: stats[upper_idx],
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    proptest! {
        /// Property: mean does not depend on input order
        #[test]
        fn test_mean_order_invariant(mut values in prop::collection::vec(0.0f64..50.0, 0..40)) {
            let forward = mean(&values);
            values.reverse();
            let reversed = mean(&values);
            prop_assert!((forward - reversed).abs() < 1e-9);
        }

        /// Property: bootstrap interval always has lower <= upper
        #[test]
        fn test_bootstrap_bounds_ordered(
            values in prop::collection::vec(0.0f64..20.0, 0..30),
            seed in any::<u64>(),
        ) {
            let ci = bootstrap_ci_with(&values, 200, &mut StdRng::seed_from_u64(seed));
            prop_assert!(ci.lower <= ci.upper,
                "Lower {} must be <= upper {}", ci.lower, ci.upper);
        }

        /// Property: difference interval always has lower <= upper
        #[test]
        fn test_difference_bounds_ordered(
            control in prop::collection::vec(0.0f64..10.0, 0..10),
            treatment in prop::collection::vec(0.0f64..10.0, 0..20),
            seed in any::<u64>(),
        ) {
            let ci = bootstrap_mean_difference_with(
                &control, &treatment, 200, &mut StdRng::seed_from_u64(seed),
            );
            prop_assert!(ci.lower <= ci.upper);
        }

        /// Property: rounding moves a value by at most half a tenth
        #[test]
        fn test_rounding_error_bounded(value in -100.0f64..100.0) {
            prop_assert!((round_to_tenth(value) - value).abs() <= 0.05 + 1e-9);
        }
    }
}
