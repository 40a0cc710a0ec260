//! Daily focus metric - the single quantity tracked by an experiment

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Where a metric came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricSource {
    /// Logged by the user
    Manual,

    /// Generated sample data
    Sample,
}

impl MetricSource {
    /// Get the source name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricSource::Manual => "manual",
            MetricSource::Sample => "sample",
        }
    }
}

impl std::str::FromStr for MetricSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "manual" => Ok(MetricSource::Manual),
            "sample" => Ok(MetricSource::Sample),
            _ => Err(format!("Invalid metric source: {}", s)),
        }
    }
}

/// Count of uninterrupted focus blocks logged for one calendar day
///
/// One metric per date is expected; [`upsert_metric`] enforces that for
/// callers that keep metrics in a `Vec`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMetric {
    /// Unique identifier
    pub id: String,

    /// Calendar day the metric belongs to
    pub date: NaiveDate,

    /// Focus blocks (25+ minutes each) completed that day
    pub focus_blocks: u32,

    /// Manual entry or generated sample
    pub source: MetricSource,

    /// When the metric was recorded
    pub created_at: DateTime<Utc>,
}

impl DailyMetric {
    /// Create a new metric with a UUIDv7 identifier and the current timestamp
    pub fn new(date: NaiveDate, focus_blocks: u32, source: MetricSource) -> Self {
        Self {
            id: uuid::Uuid::now_v7().to_string(),
            date,
            focus_blocks,
            source,
            created_at: Utc::now(),
        }
    }

    /// Focus blocks as a sample value for the statistics routines
    pub fn value(&self) -> f64 {
        f64::from(self.focus_blocks)
    }
}

/// Focus block counts of `metrics`, in order
pub fn focus_values(metrics: &[DailyMetric]) -> Vec<f64> {
    metrics.iter().map(DailyMetric::value).collect()
}

/// Insert `metric`, replacing any existing metric for the same date
pub fn upsert_metric(metrics: &mut Vec<DailyMetric>, metric: DailyMetric) {
    metrics.retain(|m| m.date != metric.date);
    metrics.push(metric);
}
