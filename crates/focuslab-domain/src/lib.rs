//! Focuslab Domain Layer
//!
//! This crate contains the experiment analysis engine for Focuslab: the
//! statistics, aggregations and decision rule that turn two weeks of
//! self-reported focus data into a keep / drop / retest verdict.
//!
//! ## Key Concepts
//!
//! - **Baseline period**: the 7 days before an experiment starts
//! - **Experiment period**: the 14 days during which a constraint is applied
//! - **Lift**: experiment mean minus baseline mean
//! - **Percentile bootstrap**: resampling-based 95% confidence interval
//! - **Decision**: keep, drop or retest, from lift, interval and adherence
//!
//! ## Architecture
//!
//! - Pure computation over in-memory slices; no I/O, no shared state
//! - The only non-determinism is resampling, and every resampling routine
//!   accepts a caller-supplied [`rand::Rng`]
//! - Loading and persisting data is left to the caller (see `focuslab-cli`)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adherence;
pub mod analysis;
pub mod decision;
pub mod explanation;
pub mod metric;
pub mod playbook;
pub mod sample;
pub mod stats;
pub mod weekday;
pub mod window;

// Re-exports for convenience
pub use adherence::{adherence_rate, Adherence, DailyCheckin};
pub use analysis::{analyze_experiment, AnalysisConfig, Analyzer, ExperimentAnalysis};
pub use decision::{Decision, DecisionThresholds};
pub use explanation::{day_of_week_insight, decision_explanation};
pub use metric::{DailyMetric, MetricSource};
pub use playbook::{find_playbook, Playbook, PLAYBOOKS};
pub use stats::{bootstrap_ci, mean, ConfidenceInterval};
pub use weekday::{day_of_week_pattern, DayOfWeekPattern, WEEKDAY_NAMES};
pub use window::ExperimentWindow;
