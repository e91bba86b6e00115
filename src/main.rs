use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use budget_tracker::config::paths::AppPaths;
use budget_tracker::storage::Database;

#[derive(Parser)]
#[command(
    name = "budget-tracker",
    version,
    about = "Interactive personal finance ledger",
    long_about = "Budget Tracker is an interactive terminal application for \
                  recording expenses and income, setting per-category budget \
                  limits, and tracking savings goals. All data lives in a \
                  local SQLite database."
)]
struct Cli {
    /// Directory for the database file (overrides the platform default)
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    budget_tracker::init_tracing();

    // Initialize paths and storage
    let paths = match cli.data_dir {
        Some(dir) => AppPaths::with_base_dir(dir),
        None => AppPaths::new()?,
    };
    paths.ensure_directories()?;

    let db = Database::open(&paths.db_file())?;

    budget_tracker::cli::run_menu(&db)?;

    Ok(())
}
