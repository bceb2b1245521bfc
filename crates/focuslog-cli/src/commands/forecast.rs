//! Day forecast command.

use clap::Args;
use focuslog_core::prediction::render_forecast_chart;
use focuslog_core::{forecast_day, Config, Database, HistoryStore};

use super::{parse_hour, resolve_date, resolve_hour};

#[derive(Args)]
pub struct ForecastArgs {
    /// Day to forecast (YYYY-MM-DD, default: today)
    #[arg(long)]
    date: Option<String>,
    /// Current hour used for the same-day fallback (default: now)
    #[arg(long, value_parser = parse_hour)]
    hour: Option<u8>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: ForecastArgs) -> Result<(), Box<dyn std::error::Error>> {
    let tracked = Config::load()?.tracked_hours()?;
    let history = Database::open()?.load()?;
    let today = resolve_date(args.date.as_deref())?;
    let now_hour = resolve_hour(args.hour);

    let forecast = forecast_day(&history, today, now_hour, tracked);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&forecast)?);
        return Ok(());
    }

    println!("{}", render_forecast_chart(&forecast));

    let peak = forecast.iter().max_by_key(|r| (r.predicted_percent, std::cmp::Reverse(r.hour)));
    if let Some(peak) = peak {
        println!("Peak focus expected at {:02}:00 ({}%)", peak.hour, peak.predicted_percent);
    }
    Ok(())
}
