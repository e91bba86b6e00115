//! Display formatting for terminal output
//!
//! Provides utilities for formatting listings and overviews for terminal
//! display. All functions return strings; printing stays in the cli layer.

pub mod budget;
pub mod category;
pub mod goal;
pub mod record;

pub use budget::format_budget_overview;
pub use category::format_category_list;
pub use goal::{format_goal_block, format_goal_report};
pub use record::{format_category_records, format_record_listing, format_record_row};
