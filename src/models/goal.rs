//! Financial goal models
//!
//! A goal is a target amount to save by a target date. A goal may be scoped
//! to one expense category by name, or left unscoped ("General"), in which
//! case progress is measured against all income and expenses.

use chrono::NaiveDate;

/// A savings goal as stored
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    /// Database identifier
    pub id: i64,

    /// Target amount to save, always positive
    pub amount: f64,

    /// Date by which the goal should be reached
    pub target_date: NaiveDate,

    /// Name of the expense category the goal is scoped to; `None` means
    /// the goal is "General" and tracks the whole ledger
    pub category: Option<String>,
}

impl Goal {
    /// Category name shown to the user ("General" when unscoped)
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("General")
    }
}

/// Progress toward one goal, derived from the ledger
///
/// Progress is income minus expenses within the goal's scope. A scoped goal
/// matches records by category name in both the expense and income
/// namespaces, so income recorded under the same category name counts
/// toward it.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    /// The goal being tracked
    pub goal: Goal,

    /// Income minus expenses within the goal's scope
    pub progress: f64,
}

impl GoalProgress {
    /// Amount still needed; negative once the goal is exceeded
    pub fn remaining(&self) -> f64 {
        self.goal.amount - self.progress
    }

    /// Progress as a percentage of the goal amount (0 for a zero amount)
    pub fn percentage(&self) -> f64 {
        if self.goal.amount == 0.0 {
            0.0
        } else {
            self.progress / self.goal.amount * 100.0
        }
    }

    /// True once saved progress exceeds the goal amount
    pub fn is_achieved(&self) -> bool {
        self.remaining() < 0.0
    }
}
