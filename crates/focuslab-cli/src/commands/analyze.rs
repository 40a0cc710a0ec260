//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::input::DataExport;
use crate::output::Formatter;
use focuslab_domain::{day_of_week_insight, decision_explanation, Analyzer, ExperimentAnalysis};
use rand::Rng;

/// Execute the analyze command.
pub fn execute_analyze(args: AnalyzeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let analysis = run_analysis(&args, config, &mut rand::thread_rng())?;

    let explanation = decision_explanation(&analysis);
    let insight = day_of_week_insight(&analysis.day_of_week_pattern);

    println!("{}", formatter.format_report(&analysis, &explanation, &insight)?);
    Ok(())
}

/// Load the data file, select the experiment and analyze it.
fn run_analysis<R: Rng + ?Sized>(
    args: &AnalyzeArgs,
    config: &Config,
    rng: &mut R,
) -> Result<ExperimentAnalysis> {
    let mut analysis_config = config.analysis.clone();
    if let Some(iterations) = args.iterations {
        analysis_config.iterations = iterations;
    }
    analysis_config.validate().map_err(CliError::InvalidInput)?;

    let export = DataExport::load(&args.data)?;
    let data = export.experiment_data(args.experiment.as_deref())?;

    if data.metrics.is_empty() {
        tracing::warn!("Experiment '{}' has no metrics logged yet", data.experiment.id);
    }

    let analyzer = Analyzer::new(analysis_config);
    let analysis = analyzer.analyze_with_rng(&data.baseline, &data.metrics, &data.checkins, rng);

    tracing::info!(
        experiment = %data.experiment.id,
        decision = analysis.decision.as_str(),
        "Analysis complete"
    );
    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use focuslab_domain::Decision;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn metric(date: &str, blocks: u32) -> String {
        format!(
            r#"{{"id": "m-{date}", "date": "{date}", "focusBlocks": {blocks},
                "source": "manual", "createdAt": "{date}T18:00:00Z"}}"#
        )
    }

    fn checkin(date: &str, adherence: &str) -> String {
        format!(
            r#"{{"id": "c-{date}", "experimentId": "exp-1", "date": "{date}",
                "adherence": "{adherence}", "energy": 3, "createdAt": "{date}T18:00:00Z"}}"#
        )
    }

    /// Baseline of 2 blocks/day, then a flat experiment at `blocks`.
    fn write_export(blocks: u32, adherence: &str) -> NamedTempFile {
        let mut metrics = Vec::new();
        let mut checkins = Vec::new();
        for day in 4..=10 {
            metrics.push(metric(&format!("2024-03-{:02}", day), 2));
        }
        for day in 11..=24 {
            let date = format!("2024-03-{:02}", day);
            metrics.push(metric(&date, blocks));
            checkins.push(checkin(&date, adherence));
        }

        let json = format!(
            r#"{{"version": "1",
                "experiments": [{{"id": "exp-1", "playbookId": "morning-block", "status": "running",
                                  "startDate": "2024-03-11", "endDate": "2024-03-25"}}],
                "dailyCheckins": [{}],
                "dailyMetrics": [{}]}}"#,
            checkins.join(","),
            metrics.join(",")
        );

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    fn args(data: PathBuf) -> AnalyzeArgs {
        AnalyzeArgs {
            data,
            experiment: None,
            iterations: Some(200),
        }
    }

    #[test]
    fn test_keep_from_file() {
        let file = write_export(4, "yes");
        let analysis = run_analysis(
            &args(file.path().to_path_buf()),
            &Config::default(),
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap();

        assert_eq!(analysis.baseline_mean, 2.0);
        assert_eq!(analysis.experiment_mean, 4.0);
        assert_eq!(analysis.lift, 2.0);
        assert_eq!(analysis.adherence_rate, 100);
        assert_eq!(analysis.decision, Decision::Keep);
    }

    #[test]
    fn test_low_adherence_retests() {
        let file = write_export(4, "no");
        let analysis = run_analysis(
            &args(file.path().to_path_buf()),
            &Config::default(),
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap();

        assert_eq!(analysis.adherence_rate, 0);
        assert_eq!(analysis.decision, Decision::Retest);
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let file = write_export(4, "yes");
        let mut args = args(file.path().to_path_buf());
        args.iterations = Some(0);

        let result = run_analysis(&args, &Config::default(), &mut StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_missing_data_file() {
        let result = run_analysis(
            &args(PathBuf::from("/nonexistent/focuslab-export.json")),
            &Config::default(),
            &mut StdRng::seed_from_u64(1),
        );
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
