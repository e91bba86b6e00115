//! Goal service
//!
//! Provides business logic for savings goals: setting a goal and computing
//! progress from the ledger. Progress is income minus expenses within the
//! goal's scope; an unscoped ("General") goal measures the whole ledger.

use tracing::{debug, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Goal, GoalProgress, RecordKind};
use crate::services::parse_date;
use crate::storage::Database;

/// Service for financial goal management
pub struct GoalService<'a> {
    storage: &'a Database,
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(storage: &'a Database) -> Self {
        Self { storage }
    }

    /// Set a financial goal.
    ///
    /// The amount must be positive and the target date a valid calendar
    /// date. A category id that does not name an existing expense category
    /// is dropped, leaving the goal unscoped ("General").
    pub fn set(
        &self,
        amount: f64,
        target_date: &str,
        category_id: Option<i64>,
    ) -> LedgerResult<Goal> {
        if amount <= 0.0 {
            return Err(LedgerError::Validation(
                "Goal amount must be a positive number".into(),
            ));
        }
        let target_date = parse_date(target_date)?;

        let category = match category_id {
            Some(id) => {
                let found = self
                    .storage
                    .categories()
                    .find_by_id(RecordKind::Expense, id)?;
                if found.is_none() {
                    warn!(category_id = id, "goal category not found, storing as General");
                }
                found
            }
            None => None,
        };

        let id = self.storage.goals().insert(
            amount,
            target_date,
            category.as_ref().map(|c| c.id),
        )?;
        debug!(id, amount, "goal set");

        Ok(Goal {
            id,
            amount,
            target_date,
            category: category.map(|c| c.name),
        })
    }

    /// Progress toward every goal, in goal id order.
    ///
    /// A scoped goal matches categories by name in both the expense and the
    /// income namespace, so income recorded under the same category name
    /// counts toward it.
    pub fn progress(&self) -> LedgerResult<Vec<GoalProgress>> {
        let records = self.storage.records();
        let mut report = Vec::new();

        for goal in self.storage.goals().list()? {
            let progress = match &goal.category {
                Some(name) => {
                    records.sum_by_category_name(RecordKind::Income, name)?
                        - records.sum_by_category_name(RecordKind::Expense, name)?
                }
                None => {
                    records.sum_all(RecordKind::Income)?
                        - records.sum_all(RecordKind::Expense)?
                }
            };
            report.push(GoalProgress { goal, progress });
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{CategoryService, RecordService};

    fn create_test_db() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn test_set_goal() {
        let db = create_test_db();
        let goal = GoalService::new(&db).set(1000.0, "2025-12-31", None).unwrap();

        assert_eq!(goal.amount, 1000.0);
        assert_eq!(goal.category, None);
        assert_eq!(goal.category_label(), "General");
    }

    #[test]
    fn test_set_goal_rejects_non_positive_amount() {
        let db = create_test_db();
        let service = GoalService::new(&db);

        assert!(service.set(0.0, "2025-12-31", None).unwrap_err().is_validation());
        assert!(service.set(-10.0, "2025-12-31", None).unwrap_err().is_validation());
        assert!(service.progress().unwrap().is_empty());
    }

    #[test]
    fn test_set_goal_rejects_invalid_date() {
        let db = create_test_db();
        let err = GoalService::new(&db).set(500.0, "soon", None).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_unknown_category_falls_back_to_general() {
        let db = create_test_db();
        let goal = GoalService::new(&db).set(500.0, "2025-06-30", Some(42)).unwrap();
        assert_eq!(goal.category, None);
    }

    #[test]
    fn test_general_goal_progress() {
        let db = create_test_db();
        let records = RecordService::new(&db);
        let service = GoalService::new(&db);

        records
            .add(RecordKind::Income, "2024-01-31", "salary", "january", 1500.0)
            .unwrap();
        records
            .add(RecordKind::Expense, "2024-02-01", "rent", "february", 400.0)
            .unwrap();
        service.set(1000.0, "2024-12-31", None).unwrap();

        let report = service.progress().unwrap();
        assert_eq!(report.len(), 1);
        let entry = &report[0];
        assert_eq!(entry.progress, 1100.0);
        assert_eq!(entry.remaining(), -100.0);
        assert_eq!(entry.percentage(), 110.0);
        assert!(entry.is_achieved());
    }

    #[test]
    fn test_scoped_goal_matches_category_name_in_both_kinds() {
        let db = create_test_db();
        let records = RecordService::new(&db);
        let service = GoalService::new(&db);

        records
            .add(RecordKind::Income, "2024-03-01", "vacation", "fund deposit", 300.0)
            .unwrap();
        records
            .add(RecordKind::Expense, "2024-03-15", "vacation", "flights", 100.0)
            .unwrap();
        // An unrelated record that must not count
        records
            .add(RecordKind::Income, "2024-03-01", "salary", "march", 2500.0)
            .unwrap();

        let category = CategoryService::new(&db)
            .resolve_or_create(RecordKind::Expense, "vacation")
            .unwrap();
        service.set(1000.0, "2024-12-31", Some(category.id)).unwrap();

        let report = service.progress().unwrap();
        let entry = &report[0];
        assert_eq!(entry.goal.category.as_deref(), Some("vacation"));
        assert_eq!(entry.progress, 200.0);
        assert!(!entry.is_achieved());
    }
}
