use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "focuslog", version, about = "Hourly focus log and forecasts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record, clear, or show hourly entries
    Log {
        #[command(subcommand)]
        action: commands::log::LogAction,
    },
    /// Per-hour focus forecast for a day
    Forecast(commands::forecast::ForecastArgs),
    /// Statistics for a single day (default: yesterday)
    Analyze(commands::analyze::AnalyzeArgs),
    /// Estimate how well a task will go at a given hour
    Estimate(commands::estimate::EstimateArgs),
    /// Write a JSON backup of the whole history
    Export(commands::backup::ExportArgs),
    /// Replace the history with a JSON backup
    Import(commands::backup::ImportArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("FOCUSLOG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Log { action } => commands::log::run(action),
        Commands::Forecast(args) => commands::forecast::run(args),
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Estimate(args) => commands::estimate::run(args),
        Commands::Export(args) => commands::backup::export(args),
        Commands::Import(args) => commands::backup::import(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
