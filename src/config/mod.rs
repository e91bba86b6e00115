//! Configuration module for the budget tracker
//!
//! This module provides platform-aware resolution of the directory that
//! holds the ledger database.

pub mod paths;

pub use paths::AppPaths;
