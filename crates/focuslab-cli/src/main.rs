//! Focuslab CLI - Analyze 14-day focus experiments from exported data.

use clap::Parser;
use focuslab_cli::commands;
use focuslab_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> focuslab_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Load config, falling back to defaults when the file is absent
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        // Config management must still work with a broken file
        Err(e) if matches!(cli.command, Command::Config(_)) => {
            tracing::warn!("Ignoring unreadable config: {}", e);
            Config::default()
        }
        Err(e) => return Err(e),
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Analyze(args) => commands::execute_analyze(args, &config, &formatter)?,
        Command::Sample(args) => commands::execute_sample(args, &formatter)?,
        Command::Playbooks(args) => commands::execute_playbooks(args, &formatter)?,
        Command::Config(args) => commands::execute_config(args, &config, &config_path, &formatter)?,
    }

    Ok(())
}

/// Initialize logging to stderr. `RUST_LOG` overrides the verbosity flags.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
