//! Budget service
//!
//! Provides business logic for budget limits on expense categories:
//! setting a limit and reporting spending against it.

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{BudgetStatus, Category, RecordKind};
use crate::storage::Database;

/// Service for budget limit management
pub struct BudgetService<'a> {
    storage: &'a Database,
}

/// An expense category with its budget status
#[derive(Debug, Clone)]
pub struct CategoryBudget {
    pub category: Category,
    pub status: BudgetStatus,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Database) -> Self {
        Self { storage }
    }

    /// Set the budget limit for an expense category.
    ///
    /// The limit must be positive; a non-positive value is rejected without
    /// touching the stored limit.
    pub fn set_limit(&self, category_id: i64, limit: f64) -> LedgerResult<Category> {
        if limit <= 0.0 {
            return Err(LedgerError::Validation(
                "Budget limit must be a positive number".into(),
            ));
        }

        let mut category = self
            .storage
            .categories()
            .find_by_id(RecordKind::Expense, category_id)?
            .ok_or_else(|| LedgerError::category_not_found(category_id.to_string()))?;

        self.storage.categories().set_budget_limit(category_id, limit)?;
        category.budget_limit = Some(limit);

        debug!(name = %category.name, limit, "budget limit set");
        Ok(category)
    }

    /// Budget status for one expense category: the configured limit, the
    /// total spent against it, and what remains.
    ///
    /// Fails with a validation error when no limit has been set yet.
    pub fn status(&self, category_id: i64) -> LedgerResult<CategoryBudget> {
        let category = self
            .storage
            .categories()
            .find_by_id(RecordKind::Expense, category_id)?
            .ok_or_else(|| LedgerError::category_not_found(category_id.to_string()))?;

        let limit = category.budget_limit.ok_or_else(|| {
            LedgerError::Validation(format!(
                "No budget limit set for category '{}'",
                category.name
            ))
        })?;

        let spent = self
            .storage
            .records()
            .sum_by_category(RecordKind::Expense, category_id)?;

        Ok(CategoryBudget {
            category,
            status: BudgetStatus { limit, spent },
        })
    }
}
