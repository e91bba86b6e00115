//! Core data models for the budget tracker
//!
//! This module contains the data structures that represent the ledger
//! domain: records, categories, budget limits, and financial goals.

pub mod budget;
pub mod category;
pub mod goal;
pub mod kind;
pub mod record;

pub use budget::BudgetStatus;
pub use category::Category;
pub use goal::{Goal, GoalProgress};
pub use kind::RecordKind;
pub use record::{RecordEntry, RecordListing, RecordPatch};
