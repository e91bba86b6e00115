//! Goal repository
//!
//! SQL for the financial_goals table. A goal may point at an expense
//! category; the left join resolves the name and leaves `None` for
//! general goals or goals whose category has since been deleted.

use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};

use crate::error::LedgerResult;
use crate::models::Goal;

/// Repository for savings goals
pub struct GoalRepository<'a> {
    conn: &'a Connection,
}

impl<'a> GoalRepository<'a> {
    pub(crate) fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn row_to_goal(row: &Row<'_>) -> rusqlite::Result<Goal> {
        Ok(Goal {
            id: row.get(0)?,
            amount: row.get(1)?,
            target_date: row.get(2)?,
            category: row.get(3)?,
        })
    }

    /// Insert a goal and return its generated id
    pub fn insert(
        &self,
        amount: f64,
        target_date: NaiveDate,
        category_id: Option<i64>,
    ) -> LedgerResult<i64> {
        self.conn.execute(
            "INSERT INTO financial_goals (goal_amount, target_date, category_id)
             VALUES (?1, ?2, ?3)",
            params![amount, target_date, category_id],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All goals in id order, with category names resolved where present
    pub fn list(&self) -> LedgerResult<Vec<Goal>> {
        let mut stmt = self.conn.prepare(
            "SELECT g.id, g.goal_amount, g.target_date, c.name
             FROM financial_goals g
             LEFT JOIN expense_categories c ON g.category_id = c.id
             ORDER BY g.id",
        )?;
        let goals = stmt
            .query_map([], Self::row_to_goal)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(goals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::categories::CategoryRepository;
    use crate::storage::init::create_schema;
    use crate::models::RecordKind;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.pragma_update(None, "foreign_keys", true).unwrap();
        create_schema(&conn).unwrap();
        conn
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_insert_and_list() {
        let conn = test_conn();
        let categories = CategoryRepository::new(&conn);
        let goals = GoalRepository::new(&conn);

        let vacation = categories.insert(RecordKind::Expense, "vacation").unwrap();
        goals.insert(1000.0, date("2024-12-31"), None).unwrap();
        goals.insert(500.0, date("2024-06-30"), Some(vacation)).unwrap();

        let all = goals.list().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].category, None);
        assert_eq!(all[0].amount, 1000.0);
        assert_eq!(all[1].category.as_deref(), Some("vacation"));
        assert_eq!(all[1].target_date, date("2024-06-30"));
    }

    #[test]
    fn test_deleted_category_becomes_general() {
        let conn = test_conn();
        let categories = CategoryRepository::new(&conn);
        let goals = GoalRepository::new(&conn);

        let vacation = categories.insert(RecordKind::Expense, "vacation").unwrap();
        goals.insert(500.0, date("2024-06-30"), Some(vacation)).unwrap();
        categories.delete(RecordKind::Expense, vacation).unwrap();

        let all = goals.list().unwrap();
        assert_eq!(all[0].category, None);
        assert_eq!(all[0].category_label(), "General");
    }
}
