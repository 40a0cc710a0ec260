//! Experiment analyzer
//!
//! Combines the statistics primitives, the adherence and day-of-week
//! aggregators and the decision rule into one [`ExperimentAnalysis`].
//!
//! 1. Baseline and experiment means, lift = experiment - baseline
//! 2. Percentile-bootstrap interval on the difference of means
//! 3. Adherence rate from check-ins
//! 4. Day-of-week pattern over baseline and experiment metrics together
//! 5. Decision from the unrounded statistics
//! 6. Rounding for presentation

use crate::adherence::{adherence_rate, DailyCheckin};
use crate::decision::{Decision, DecisionThresholds};
use crate::metric::{focus_values, DailyMetric};
use crate::stats::{
    bootstrap_mean_difference_with, mean, round_to_tenth, to_percentage, DEFAULT_ITERATIONS,
};
use crate::weekday::{day_of_week_pattern, DayOfWeekPattern};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Result of analyzing one experiment
///
/// Immutable once produced; re-running an analysis yields a new record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentAnalysis {
    /// Baseline mean focus blocks/day (1 decimal)
    pub baseline_mean: f64,

    /// Experiment mean focus blocks/day (1 decimal)
    pub experiment_mean: f64,

    /// Experiment mean minus baseline mean (1 decimal)
    pub lift: f64,

    /// Lower bound of the 95% CI on the lift (1 decimal)
    pub ci_lower: f64,

    /// Upper bound of the 95% CI on the lift (1 decimal)
    pub ci_upper: f64,

    /// Adherent check-ins as an integer percentage, 0-100
    pub adherence_rate: u32,

    /// Verdict
    pub decision: Decision,

    /// Average focus blocks per weekday across both periods
    pub day_of_week_pattern: DayOfWeekPattern,
}

/// Configuration for experiment analysis
///
/// # Examples
///
/// ```
/// use focuslab_domain::AnalysisConfig;
///
/// let config = AnalysisConfig::default();
/// assert_eq!(config.iterations, 1000);
/// assert_eq!(config.thresholds.keep_min_lift, 0.3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Bootstrap resamples for the lift interval
    /// Default: 1000
    #[serde(default = "default_iterations")]
    pub iterations: usize,

    /// Decision rule thresholds
    #[serde(default)]
    pub thresholds: DecisionThresholds,
}

fn default_iterations() -> usize {
    DEFAULT_ITERATIONS
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            thresholds: DecisionThresholds::default(),
        }
    }
}

impl AnalysisConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.iterations == 0 {
            return Err("iterations must be greater than 0".to_string());
        }
        let t = &self.thresholds;
        if !(0.0..=1.0).contains(&t.keep_min_adherence) {
            return Err("keep_min_adherence must be within [0.0, 1.0]".to_string());
        }
        if !t.keep_min_lift.is_finite() || !t.drop_max_ci_upper.is_finite() {
            return Err("thresholds must be finite numbers".to_string());
        }
        Ok(())
    }
}

/// The experiment analyzer
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    /// Create a new analyzer with the given configuration
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Create an analyzer with default configuration
    pub fn default_config() -> Self {
        Self::new(AnalysisConfig::default())
    }

    /// The analyzer's configuration
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze an experiment, resampling from the thread-local generator
    ///
    /// # Arguments
    ///
    /// * `baseline` - Metrics from the 7 days before the experiment
    /// * `experiment` - Metrics from the experiment period
    /// * `checkins` - All check-ins for the experiment
    pub fn analyze(
        &self,
        baseline: &[DailyMetric],
        experiment: &[DailyMetric],
        checkins: &[DailyCheckin],
    ) -> ExperimentAnalysis {
        self.analyze_with_rng(baseline, experiment, checkins, &mut rand::thread_rng())
    }

    /// Analyze an experiment with a caller-supplied random source
    pub fn analyze_with_rng<R: Rng + ?Sized>(
        &self,
        baseline: &[DailyMetric],
        experiment: &[DailyMetric],
        checkins: &[DailyCheckin],
        rng: &mut R,
    ) -> ExperimentAnalysis {
        let pattern = day_of_week_pattern(baseline.iter().chain(experiment));

        self.analyze_samples_with_rng(
            &focus_values(baseline),
            &focus_values(experiment),
            adherence_rate(checkins),
            pattern,
            rng,
        )
    }

    /// Analyze raw sample values
    ///
    /// `adherence` is a fraction in `[0, 1]`; `pattern` is passed through
    /// unchanged.
    pub fn analyze_samples_with_rng<R: Rng + ?Sized>(
        &self,
        baseline: &[f64],
        experiment: &[f64],
        adherence: f64,
        pattern: DayOfWeekPattern,
        rng: &mut R,
    ) -> ExperimentAnalysis {
        let baseline_mean = mean(baseline);
        let experiment_mean = mean(experiment);
        let lift = experiment_mean - baseline_mean;

        let ci = bootstrap_mean_difference_with(baseline, experiment, self.config.iterations, rng);
        let decision = self.config.thresholds.decide(lift, ci, adherence);

        tracing::debug!(
            baseline_days = baseline.len(),
            experiment_days = experiment.len(),
            lift,
            ci_lower = ci.lower,
            ci_upper = ci.upper,
            adherence,
            decision = decision.as_str(),
            "Experiment analyzed"
        );

        let ci = ci.rounded();
        ExperimentAnalysis {
            baseline_mean: round_to_tenth(baseline_mean),
            experiment_mean: round_to_tenth(experiment_mean),
            lift: round_to_tenth(lift),
            ci_lower: ci.lower,
            ci_upper: ci.upper,
            adherence_rate: to_percentage(adherence),
            decision,
            day_of_week_pattern: pattern,
        }
    }
}

/// Analyze an experiment with the default configuration
pub fn analyze_experiment(
    baseline: &[DailyMetric],
    experiment: &[DailyMetric],
    checkins: &[DailyCheckin],
) -> ExperimentAnalysis {
    Analyzer::default_config().analyze(baseline, experiment, checkins)
}
