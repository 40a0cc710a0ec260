//! Sample command implementation.

use crate::cli::SampleArgs;
use crate::error::Result;
use crate::output::Formatter;
use focuslab_domain::sample::generate_sample_baseline;

/// Execute the sample command.
pub fn execute_sample(args: SampleArgs, formatter: &Formatter) -> Result<()> {
    let today = args
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let metrics = generate_sample_baseline(today, &mut rand::thread_rng());
    tracing::info!("Generated {} sample day(s) before {}", metrics.len(), today);

    println!("{}", formatter.format_metrics(&metrics)?);
    Ok(())
}
