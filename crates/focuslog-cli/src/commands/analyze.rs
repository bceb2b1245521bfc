//! Daily analysis command.

use clap::Args;
use focuslog_core::history::date_key;
use focuslog_core::{analyze_day, Database, HistoryStore};

use super::resolve_date;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Day to analyze (YYYY-MM-DD, default: yesterday)
    #[arg(long)]
    date: Option<String>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let date = match args.date.as_deref() {
        Some(d) => resolve_date(Some(d))?,
        None => resolve_date(None)?
            .pred_opt()
            .ok_or("no day before today")?,
    };
    let history = Database::open()?.load()?;
    let analysis = history.day_on(date).and_then(analyze_day);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!("\n{} Analysis:", date_key(date));
    println!("{}", "─".repeat(50));
    match analysis {
        Some(a) => {
            for line in a.summary_lines() {
                println!("  {line}");
            }
        }
        None => println!("  No data for this day."),
    }
    Ok(())
}
