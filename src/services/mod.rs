//! Business logic layer
//!
//! Services implement the ledger operations on top of the storage layer.
//! Each service borrows the open database, validates input before writing,
//! and maps absent rows to not-found errors.

pub mod budget;
pub mod category;
pub mod goal;
pub mod record;

pub use budget::{BudgetService, CategoryBudget};
pub use category::CategoryService;
pub use goal::GoalService;
pub use record::RecordService;

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};

/// Parse a `YYYY-MM-DD` date string, mapping failure to a validation error
pub(crate) fn parse_date(value: &str) -> LedgerResult<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        LedgerError::Validation(format!("invalid date '{}', expected YYYY-MM-DD", value))
    })
}
