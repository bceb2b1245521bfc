//! Backup export/import commands.

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;
use focuslog_core::backup;
use focuslog_core::{Config, Database, HistoryStore};

#[derive(Args)]
pub struct ExportArgs {
    /// Write to this file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args)]
pub struct ImportArgs {
    /// Backup file to restore
    file: PathBuf,
}

pub fn export(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let history = Database::open()?.load()?;
    let payload = backup::export(&history, &config.profile.user, Utc::now());

    match args.out {
        Some(path) => {
            backup::write_backup(&path, &payload)?;
            println!(
                "exported {} entries to {}",
                history.entry_count(),
                path.display()
            );
        }
        None => println!("{}", payload.to_json_pretty()?),
    }
    Ok(())
}

pub fn import(args: ImportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let history = backup::read_backup(&args.file)?;
    let mut db = Database::open()?;
    db.replace_all(&history)?;
    println!(
        "imported {} entries across {} days",
        history.entry_count(),
        history.days().count()
    );
    Ok(())
}
