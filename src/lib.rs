//! Budget Tracker - Interactive personal finance ledger
//!
//! This library provides the core functionality for the budget-tracker
//! application. It keeps a running ledger of expenses and income grouped
//! into categories, with per-category budget limits and savings goals,
//! backed by a local SQLite database.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (records, categories, budgets, goals)
//! - `storage`: SQLite storage layer
//! - `services`: Business logic layer
//! - `display`: Text formatting for terminal output
//! - `cli`: Interactive menu and prompts
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::config::paths::AppPaths;
//! use budget_tracker::storage::Database;
//!
//! let paths = AppPaths::new()?;
//! let db = Database::open(&paths.db_file())?;
//! budget_tracker::cli::run_menu(&db)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("budget_tracker=warn".parse().unwrap());

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
