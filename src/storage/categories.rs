//! Category repository
//!
//! Holds all SQL for the two category tables. Expense and income categories
//! live in separate tables, so every operation takes the kind and targets
//! the matching table. Only expense categories carry a budget limit column.

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::LedgerResult;
use crate::models::{Category, RecordKind};

/// Repository for category rows of either kind
pub struct CategoryRepository<'a> {
    conn: &'a Connection,
}

impl<'a> CategoryRepository<'a> {
    pub(crate) fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Column list for SELECTs; income categories have no budget limit,
    /// so NULL stands in to keep one row mapping for both tables.
    fn columns(kind: RecordKind) -> &'static str {
        match kind {
            RecordKind::Expense => "id, name, budget_limit",
            RecordKind::Income => "id, name, NULL",
        }
    }

    fn row_to_category(row: &Row<'_>) -> rusqlite::Result<Category> {
        Ok(Category {
            id: row.get(0)?,
            name: row.get(1)?,
            budget_limit: row.get(2)?,
        })
    }

    /// Fetch a category by id
    pub fn find_by_id(&self, kind: RecordKind, id: i64) -> LedgerResult<Option<Category>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?1",
            Self::columns(kind),
            kind.category_table()
        );
        let category = self
            .conn
            .query_row(&sql, params![id], Self::row_to_category)
            .optional()?;
        Ok(category)
    }

    /// Fetch a category by its normalized name
    pub fn find_by_name(&self, kind: RecordKind, name: &str) -> LedgerResult<Option<Category>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE name = ?1",
            Self::columns(kind),
            kind.category_table()
        );
        let category = self
            .conn
            .query_row(&sql, params![name], Self::row_to_category)
            .optional()?;
        Ok(category)
    }

    /// Insert a category and return its generated id
    pub fn insert(&self, kind: RecordKind, name: &str) -> LedgerResult<i64> {
        let sql = format!("INSERT INTO {} (name) VALUES (?1)", kind.category_table());
        self.conn.execute(&sql, params![name])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All categories of a kind in id order
    pub fn list(&self, kind: RecordKind) -> LedgerResult<Vec<Category>> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY id",
            Self::columns(kind),
            kind.category_table()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let categories = stmt
            .query_map([], Self::row_to_category)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(categories)
    }

    /// Rename a category; returns the number of rows changed
    pub fn rename(&self, kind: RecordKind, id: i64, name: &str) -> LedgerResult<usize> {
        let sql = format!("UPDATE {} SET name = ?1 WHERE id = ?2", kind.category_table());
        Ok(self.conn.execute(&sql, params![name, id])?)
    }

    /// Delete a category row; returns the number of rows removed
    pub fn delete(&self, kind: RecordKind, id: i64) -> LedgerResult<usize> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", kind.category_table());
        Ok(self.conn.execute(&sql, params![id])?)
    }

    /// Delete every category of a kind that no record references
    pub fn delete_orphans(&self, kind: RecordKind) -> LedgerResult<usize> {
        let sql = format!(
            "DELETE FROM {} WHERE id NOT IN (SELECT DISTINCT category_id FROM {})",
            kind.category_table(),
            kind.record_table()
        );
        Ok(self.conn.execute(&sql, [])?)
    }

    /// Set the budget limit on an expense category; returns rows changed
    pub fn set_budget_limit(&self, id: i64, limit: f64) -> LedgerResult<usize> {
        Ok(self.conn.execute(
            "UPDATE expense_categories SET budget_limit = ?1 WHERE id = ?2",
            params![limit, id],
        )?)
    }
}
