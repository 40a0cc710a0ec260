//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use focuslab_domain::{DailyMetric, Decision, ExperimentAnalysis, Playbook};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

const BAR_WIDTH: f64 = 20.0;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an analysis with its explanation and day-of-week insight.
    pub fn format_report(
        &self,
        analysis: &ExperimentAnalysis,
        explanation: &str,
        insight: &str,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let report = serde_json::json!({
                    "analysis": analysis,
                    "explanation": explanation,
                    "insight": insight,
                });
                Ok(serde_json::to_string_pretty(&report)?)
            }
            OutputFormat::Table => Ok(self.format_report_table(analysis, explanation, insight)),
            OutputFormat::Quiet => Ok(analysis.decision.as_str().to_string()),
        }
    }

    fn format_report_table(
        &self,
        analysis: &ExperimentAnalysis,
        explanation: &str,
        insight: &str,
    ) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Metric", "Value"]);
        builder.push_record([
            "Baseline mean".to_string(),
            format!("{:.1}", analysis.baseline_mean),
        ]);
        builder.push_record([
            "Experiment mean".to_string(),
            format!("{:.1}", analysis.experiment_mean),
        ]);
        builder.push_record(["Lift".to_string(), signed(analysis.lift)]);
        builder.push_record([
            "95% CI".to_string(),
            format!("[{:.1}, {:.1}]", analysis.ci_lower, analysis.ci_upper),
        ]);
        builder.push_record(["Adherence".to_string(), format!("{}%", analysis.adherence_rate)]);
        builder.push_record(["Decision".to_string(), self.decision_label(analysis.decision)]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut pattern = Builder::default();
        pattern.push_record(["Day", "Avg blocks", ""]);
        let max = analysis.day_of_week_pattern.max_average();
        for (day, average) in analysis.day_of_week_pattern.iter() {
            let bar = if max > 0.0 {
                "█".repeat((average / max * BAR_WIDTH).round() as usize)
            } else {
                String::new()
            };
            pattern.push_record([day.to_string(), format!("{:.1}", average), bar]);
        }

        let mut pattern = pattern.build();
        pattern
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut output = format!("{}\n\n{}\n\n{}", table, explanation, pattern);
        if !insight.is_empty() {
            output.push('\n');
            output.push_str(&self.info(insight));
        }
        output
    }

    /// Format daily metrics.
    pub fn format_metrics(&self, metrics: &[DailyMetric]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(metrics)?),
            OutputFormat::Quiet => {
                let values: Vec<String> =
                    metrics.iter().map(|m| m.focus_blocks.to_string()).collect();
                Ok(values.join("\n"))
            }
            OutputFormat::Table => {
                if metrics.is_empty() {
                    return Ok(self.colorize("No metrics.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Date", "Day", "Focus blocks", "Source"]);
                for metric in metrics {
                    builder.push_record([
                        metric.date.to_string(),
                        focuslab_domain::weekday::weekday_name(metric.date).to_string(),
                        metric.focus_blocks.to_string(),
                        metric.source.as_str().to_string(),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format the playbook catalog.
    pub fn format_playbooks(&self, playbooks: &[Playbook]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(playbooks)?),
            OutputFormat::Quiet => {
                let ids: Vec<&str> = playbooks.iter().map(|p| p.id).collect();
                Ok(ids.join("\n"))
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["ID", "Title", "Category", "Description"]);
                for playbook in playbooks {
                    builder.push_record([
                        playbook.id,
                        playbook.title,
                        playbook.category,
                        playbook.description,
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format a single playbook with its hypothesis and constraint.
    pub fn format_playbook(&self, playbook: &Playbook) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(playbook)?),
            OutputFormat::Quiet => Ok(playbook.id.to_string()),
            OutputFormat::Table => Ok(format!(
                "{} ({})\n\n{}\n\n  Hypothesis: {}\n  Metric:     {}\n  Constraint: {}",
                self.colorize(playbook.title, "cyan"),
                playbook.category,
                playbook.description,
                playbook.hypothesis,
                playbook.metric,
                playbook.default_constraint
            )),
        }
    }

    /// Decision word, colored by outcome.
    pub fn decision_label(&self, decision: Decision) -> String {
        let label = decision.as_str().to_uppercase();
        match decision {
            Decision::Keep => self.colorize(&label, "green"),
            Decision::Drop => self.colorize(&label, "red"),
            Decision::Retest => self.colorize(&label, "yellow"),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Format a value with an explicit sign when positive.
fn signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.1}", value)
    } else {
        format!("{:.1}", value)
    }
}
