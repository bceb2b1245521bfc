//! Task estimate command.

use clap::Args;
use focuslog_core::{predict_task, Config, Database, HistoryStore, ProposedTask};

use super::parse_hour;

#[derive(Args)]
pub struct EstimateArgs {
    /// Hour the task would start (0-23)
    #[arg(long, value_parser = parse_hour)]
    hour: u8,
    /// Task length in minutes (default: from config)
    #[arg(long)]
    duration: Option<u32>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: EstimateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let tracked = config.tracked_hours()?;
    let history = Database::open()?.load()?;

    let task = ProposedTask {
        hour: args.hour,
        duration_minutes: args
            .duration
            .unwrap_or(config.estimate.default_duration_minutes),
    };
    let estimate = predict_task(task, &history, tracked);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
        return Ok(());
    }

    println!(
        "{} min at {:02}:00: {:.0}% chance of success",
        task.duration_minutes,
        task.hour,
        estimate.probability * 100.0
    );
    if !estimate.suggestion.is_empty() {
        println!("  {}", estimate.suggestion);
    }
    Ok(())
}
