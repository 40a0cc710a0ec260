//! Loading exported experiment data.
//!
//! The data file is the JSON export of the web app's local store:
//!
//! ```json
//! {
//!   "version": "1",
//!   "experiments": [{ "id": "…", "playbookId": "morning-block", "status": "running",
//!                     "startDate": "2024-03-11", "endDate": "2024-03-25" }],
//!   "dailyCheckins": [{ "id": "…", "experimentId": "…", "date": "2024-03-11",
//!                       "adherence": "yes", "energy": 4, "createdAt": "…" }],
//!   "dailyMetrics": [{ "id": "…", "date": "2024-03-11", "focusBlocks": 3,
//!                      "source": "manual", "createdAt": "…" }],
//!   "currentExperimentId": "…"
//! }
//! ```

use crate::error::{CliError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use focuslab_domain::adherence::{checkins_for, upsert_checkin};
use focuslab_domain::metric::upsert_metric;
use focuslab_domain::{DailyCheckin, DailyMetric, ExperimentAnalysis, ExperimentWindow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Lifecycle status of an experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperimentStatus {
    /// Not started
    Draft,
    /// In progress
    Running,
    /// Finished
    Completed,
}

/// Hypothesis recorded before the experiment started.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preregistration {
    /// Hypothesis being tested
    pub hypothesis: String,
    /// Metric description
    pub metric: String,
    /// Constraint applied
    pub constraint: String,
    /// Playbook the experiment came from
    pub playbook_id: String,
}

/// An experiment as stored in the export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experiment {
    /// Unique identifier
    pub id: String,

    /// Playbook the experiment follows
    pub playbook_id: String,

    /// Lifecycle status
    pub status: ExperimentStatus,

    /// First experiment day
    pub start_date: NaiveDate,

    /// Last experiment day
    pub end_date: NaiveDate,

    /// Pre-registered hypothesis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preregistration: Option<Preregistration>,

    /// Analysis stored when the experiment was completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<ExperimentAnalysis>,

    /// When the experiment was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Experiment {
    /// The experiment's date window.
    pub fn window(&self) -> ExperimentWindow {
        ExperimentWindow::new(self.start_date, self.end_date)
    }
}

/// The full data export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataExport {
    /// Export format version
    #[serde(default)]
    pub version: String,

    /// All experiments
    #[serde(default)]
    pub experiments: Vec<Experiment>,

    /// All check-ins
    #[serde(default)]
    pub daily_checkins: Vec<DailyCheckin>,

    /// All daily metrics
    #[serde(default)]
    pub daily_metrics: Vec<DailyMetric>,

    /// Experiment the app had open
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_experiment_id: Option<String>,
}

/// Inputs for one analysis run, selected from an export.
#[derive(Debug, Clone)]
pub struct ExperimentData {
    /// The selected experiment
    pub experiment: Experiment,
    /// Metrics from the 7 days before the start date
    pub baseline: Vec<DailyMetric>,
    /// Metrics within the experiment dates
    pub metrics: Vec<DailyMetric>,
    /// Check-ins for the experiment
    pub checkins: Vec<DailyCheckin>,
}

impl DataExport {
    /// Load and parse an export file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let mut export: DataExport = serde_json::from_str(&contents)?;
        export.dedupe();
        export.clamp_energy();

        tracing::info!(
            experiments = export.experiments.len(),
            metrics = export.daily_metrics.len(),
            checkins = export.daily_checkins.len(),
            "Loaded {}",
            path.display()
        );
        Ok(export)
    }

    /// Bring check-in energy into the accepted 1-5 range.
    fn clamp_energy(&mut self) {
        for checkin in &mut self.daily_checkins {
            let clamped = checkin
                .energy
                .clamp(DailyCheckin::MIN_ENERGY, DailyCheckin::MAX_ENERGY);
            if clamped != checkin.energy {
                tracing::warn!(
                    checkin = %checkin.id,
                    "Energy {} out of range on {}, using {}",
                    checkin.energy,
                    checkin.date,
                    clamped
                );
                checkin.energy = clamped;
            }
        }
    }

    /// Keep one metric per date and one check-in per experiment and date.
    ///
    /// Later entries win.
    fn dedupe(&mut self) {
        let metric_count = self.daily_metrics.len();
        let mut metrics = Vec::with_capacity(metric_count);
        for metric in self.daily_metrics.drain(..) {
            upsert_metric(&mut metrics, metric);
        }
        if metrics.len() != metric_count {
            tracing::warn!(
                "Dropped {} duplicate metric(s) with repeated dates",
                metric_count - metrics.len()
            );
        }
        metrics.sort_by_key(|m| m.date);
        self.daily_metrics = metrics;

        let checkin_count = self.daily_checkins.len();
        let mut checkins = Vec::with_capacity(checkin_count);
        for checkin in self.daily_checkins.drain(..) {
            upsert_checkin(&mut checkins, checkin);
        }
        if checkins.len() != checkin_count {
            tracing::warn!(
                "Dropped {} duplicate check-in(s) for the same experiment and date",
                checkin_count - checkins.len()
            );
        }
        checkins.sort_by_key(|c| c.date);
        self.daily_checkins = checkins;
    }

    /// Pick an experiment by id, else the current one, else the latest started.
    pub fn select_experiment(&self, id: Option<&str>) -> Result<&Experiment> {
        if let Some(id) = id {
            return self
                .experiments
                .iter()
                .find(|e| e.id == id)
                .ok_or_else(|| CliError::ExperimentNotFound(id.to_string()));
        }

        if let Some(current) = &self.current_experiment_id {
            if let Some(experiment) = self.experiments.iter().find(|e| &e.id == current) {
                return Ok(experiment);
            }
            tracing::warn!("Current experiment '{}' not found, using latest", current);
        }

        self.experiments
            .iter()
            .max_by_key(|e| e.start_date)
            .ok_or(CliError::NoExperiment)
    }

    /// Select the experiment and split the data into analysis inputs.
    pub fn experiment_data(&self, id: Option<&str>) -> Result<ExperimentData> {
        let experiment = self.select_experiment(id)?;
        let window = experiment.window();

        if window.end < window.start {
            return Err(CliError::InvalidInput(format!(
                "Experiment '{}' ends ({}) before it starts ({})",
                experiment.id, window.end, window.start
            )));
        }

        let baseline = window.baseline_metrics(&self.daily_metrics);
        let metrics = window.experiment_metrics(&self.daily_metrics);
        let checkins: Vec<DailyCheckin> = checkins_for(&experiment.id, &self.daily_checkins)
            .into_iter()
            .cloned()
            .collect();

        tracing::debug!(
            experiment = %experiment.id,
            baseline_days = baseline.len(),
            experiment_days = metrics.len(),
            checkins = checkins.len(),
            "Selected experiment window {} to {}",
            window.start,
            window.end
        );
        if baseline.is_empty() {
            tracing::warn!("No baseline metrics in the 7 days before {}", window.start);
        }

        Ok(ExperimentData {
            experiment: experiment.clone(),
            baseline,
            metrics,
            checkins,
        })
    }
}
