//! Experiment windows - which metrics count as baseline and which as experiment

use crate::metric::DailyMetric;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::ops::{Range, RangeInclusive};

/// Length of the baseline period in days
pub const BASELINE_DAYS: i64 = 7;

/// Length of the experiment period in days
pub const EXPERIMENT_DAYS: i64 = 14;

/// Date span of one experiment
///
/// - baseline: `[start - 7, start)`
/// - experiment: `[start, end]`, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentWindow {
    /// First day of the experiment
    pub start: NaiveDate,

    /// Last day of the experiment
    pub end: NaiveDate,
}

impl ExperimentWindow {
    /// Create a window from explicit dates
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Window for an experiment starting on `start`
    ///
    /// `end` is set `EXPERIMENT_DAYS` after `start`.
    pub fn starting(start: NaiveDate) -> Self {
        Self {
            start,
            end: start + Duration::days(EXPERIMENT_DAYS),
        }
    }

    /// The baseline date range, `[start - 7, start)`
    pub fn baseline_range(&self) -> Range<NaiveDate> {
        (self.start - Duration::days(BASELINE_DAYS))..self.start
    }

    /// The experiment date range, `[start, end]`
    pub fn experiment_range(&self) -> RangeInclusive<NaiveDate> {
        self.start..=self.end
    }

    /// Metrics that fall in the baseline range
    pub fn baseline_metrics(&self, metrics: &[DailyMetric]) -> Vec<DailyMetric> {
        let range = self.baseline_range();
        metrics
            .iter()
            .filter(|m| range.contains(&m.date))
            .cloned()
            .collect()
    }

    /// Metrics that fall in the experiment range
    pub fn experiment_metrics(&self, metrics: &[DailyMetric]) -> Vec<DailyMetric> {
        let range = self.experiment_range();
        metrics
            .iter()
            .filter(|m| range.contains(&m.date))
            .cloned()
            .collect()
    }

    /// 1-based day of the experiment for `today`, clamped to `1..=14`
    pub fn day_number(&self, today: NaiveDate) -> i64 {
        let elapsed = (today - self.start).num_days() + 1;
        elapsed.clamp(1, EXPERIMENT_DAYS)
    }

    /// Whether `today` has reached the final experiment day
    pub fn is_last_day(&self, today: NaiveDate) -> bool {
        self.day_number(today) >= EXPERIMENT_DAYS
    }
}
