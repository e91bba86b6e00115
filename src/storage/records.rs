//! Record repository
//!
//! SQL for the expense and income record tables. Listings join the matching
//! category table so callers see category names, not ids. Updates are
//! per-column, which lets the service layer apply partial edits without
//! touching the other fields.

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::LedgerResult;
use crate::models::{RecordEntry, RecordKind};

/// Repository for expense and income records
pub struct RecordRepository<'a> {
    conn: &'a Connection,
}

impl<'a> RecordRepository<'a> {
    pub(crate) fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn row_to_entry(row: &Row<'_>) -> rusqlite::Result<RecordEntry> {
        Ok(RecordEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            category: row.get(2)?,
            description: row.get(3)?,
            amount: row.get(4)?,
        })
    }

    /// Insert a record and return its generated id
    pub fn insert(
        &self,
        kind: RecordKind,
        date: NaiveDate,
        category_id: i64,
        description: &str,
        amount: f64,
    ) -> LedgerResult<i64> {
        let sql = format!(
            "INSERT INTO {} (date, category_id, description, amount)
             VALUES (?1, ?2, ?3, ?4)",
            kind.record_table()
        );
        self.conn
            .execute(&sql, params![date, category_id, description, amount])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Whether a record with this id exists
    pub fn exists(&self, kind: RecordKind, id: i64) -> LedgerResult<bool> {
        let sql = format!("SELECT 1 FROM {} WHERE id = ?1", kind.record_table());
        let found = self
            .conn
            .query_row(&sql, params![id], |_| Ok(()))
            .optional()?;
        Ok(found.is_some())
    }

    /// All records of a kind in id order, with category names resolved
    pub fn list(&self, kind: RecordKind) -> LedgerResult<Vec<RecordEntry>> {
        let sql = format!(
            "SELECT r.id, r.date, c.name, r.description, r.amount
             FROM {} r JOIN {} c ON r.category_id = c.id
             ORDER BY r.id",
            kind.record_table(),
            kind.category_table()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let entries = stmt
            .query_map([], Self::row_to_entry)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    /// Records belonging to one category, in id order
    pub fn list_by_category(
        &self,
        kind: RecordKind,
        category_id: i64,
    ) -> LedgerResult<Vec<RecordEntry>> {
        let sql = format!(
            "SELECT r.id, r.date, c.name, r.description, r.amount
             FROM {} r JOIN {} c ON r.category_id = c.id
             WHERE r.category_id = ?1
             ORDER BY r.id",
            kind.record_table(),
            kind.category_table()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let entries = stmt
            .query_map(params![category_id], Self::row_to_entry)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    /// Overwrite the date of one record
    pub fn update_date(&self, kind: RecordKind, id: i64, date: NaiveDate) -> LedgerResult<usize> {
        let sql = format!("UPDATE {} SET date = ?1 WHERE id = ?2", kind.record_table());
        Ok(self.conn.execute(&sql, params![date, id])?)
    }

    /// Move one record to another category
    pub fn update_category(
        &self,
        kind: RecordKind,
        id: i64,
        category_id: i64,
    ) -> LedgerResult<usize> {
        let sql = format!(
            "UPDATE {} SET category_id = ?1 WHERE id = ?2",
            kind.record_table()
        );
        Ok(self.conn.execute(&sql, params![category_id, id])?)
    }

    /// Overwrite the description of one record
    pub fn update_description(
        &self,
        kind: RecordKind,
        id: i64,
        description: &str,
    ) -> LedgerResult<usize> {
        let sql = format!(
            "UPDATE {} SET description = ?1 WHERE id = ?2",
            kind.record_table()
        );
        Ok(self.conn.execute(&sql, params![description, id])?)
    }

    /// Overwrite the amount of one record
    pub fn update_amount(&self, kind: RecordKind, id: i64, amount: f64) -> LedgerResult<usize> {
        let sql = format!(
            "UPDATE {} SET amount = ?1 WHERE id = ?2",
            kind.record_table()
        );
        Ok(self.conn.execute(&sql, params![amount, id])?)
    }

    /// Delete one record; returns the number of rows removed
    pub fn delete(&self, kind: RecordKind, id: i64) -> LedgerResult<usize> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", kind.record_table());
        Ok(self.conn.execute(&sql, params![id])?)
    }

    /// Delete every record in a category; returns the number removed
    pub fn delete_by_category(&self, kind: RecordKind, category_id: i64) -> LedgerResult<usize> {
        let sql = format!("DELETE FROM {} WHERE category_id = ?1", kind.record_table());
        Ok(self.conn.execute(&sql, params![category_id])?)
    }

    /// Sum of all record amounts of a kind
    pub fn sum_all(&self, kind: RecordKind) -> LedgerResult<f64> {
        let sql = format!(
            "SELECT IFNULL(SUM(amount), 0) FROM {}",
            kind.record_table()
        );
        Ok(self.conn.query_row(&sql, [], |row| row.get(0))?)
    }

    /// Sum of record amounts within one category
    pub fn sum_by_category(&self, kind: RecordKind, category_id: i64) -> LedgerResult<f64> {
        let sql = format!(
            "SELECT IFNULL(SUM(amount), 0) FROM {} WHERE category_id = ?1",
            kind.record_table()
        );
        Ok(self
            .conn
            .query_row(&sql, params![category_id], |row| row.get(0))?)
    }

    /// Sum of record amounts whose category carries this name. Goal progress
    /// matches categories by name, so the same name in either kind's table
    /// counts toward the same goal.
    pub fn sum_by_category_name(&self, kind: RecordKind, name: &str) -> LedgerResult<f64> {
        let sql = format!(
            "SELECT IFNULL(SUM(r.amount), 0)
             FROM {} r JOIN {} c ON r.category_id = c.id
             WHERE c.name = ?1",
            kind.record_table(),
            kind.category_table()
        );
        Ok(self.conn.query_row(&sql, params![name], |row| row.get(0))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::categories::CategoryRepository;
    use crate::storage::init::create_schema;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
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
        let records = RecordRepository::new(&conn);

        let food = categories.insert(RecordKind::Expense, "food").unwrap();
        let id = records
            .insert(RecordKind::Expense, date("2024-02-12"), food, "lunch", 9.5)
            .unwrap();

        let listing = records.list(RecordKind::Expense).unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].id, id);
        assert_eq!(listing[0].date, date("2024-02-12"));
        assert_eq!(listing[0].category, "food");
        assert_eq!(listing[0].description, "lunch");
        assert_eq!(listing[0].amount, 9.5);
    }

    #[test]
    fn test_list_by_category() {
        let conn = test_conn();
        let categories = CategoryRepository::new(&conn);
        let records = RecordRepository::new(&conn);

        let food = categories.insert(RecordKind::Expense, "food").unwrap();
        let rent = categories.insert(RecordKind::Expense, "rent").unwrap();
        records
            .insert(RecordKind::Expense, date("2024-02-12"), food, "lunch", 9.5)
            .unwrap();
        records
            .insert(RecordKind::Expense, date("2024-02-01"), rent, "february", 800.0)
            .unwrap();

        let only_rent = records.list_by_category(RecordKind::Expense, rent).unwrap();
        assert_eq!(only_rent.len(), 1);
        assert_eq!(only_rent[0].description, "february");
    }

    #[test]
    fn test_partial_updates_leave_other_fields() {
        let conn = test_conn();
        let categories = CategoryRepository::new(&conn);
        let records = RecordRepository::new(&conn);

        let food = categories.insert(RecordKind::Expense, "food").unwrap();
        let id = records
            .insert(RecordKind::Expense, date("2024-02-12"), food, "lunch", 9.5)
            .unwrap();

        assert_eq!(
            records
                .update_description(RecordKind::Expense, id, "team lunch")
                .unwrap(),
            1
        );

        let entry = &records.list(RecordKind::Expense).unwrap()[0];
        assert_eq!(entry.description, "team lunch");
        assert_eq!(entry.date, date("2024-02-12"));
        assert_eq!(entry.category, "food");
        assert_eq!(entry.amount, 9.5);
    }

    #[test]
    fn test_exists_and_delete() {
        let conn = test_conn();
        let categories = CategoryRepository::new(&conn);
        let records = RecordRepository::new(&conn);

        let salary = categories.insert(RecordKind::Income, "salary").unwrap();
        let id = records
            .insert(RecordKind::Income, date("2024-02-01"), salary, "paycheck", 2500.0)
            .unwrap();

        assert!(records.exists(RecordKind::Income, id).unwrap());
        assert_eq!(records.delete(RecordKind::Income, id).unwrap(), 1);
        assert!(!records.exists(RecordKind::Income, id).unwrap());
        assert_eq!(records.delete(RecordKind::Income, id).unwrap(), 0);
    }

    #[test]
    fn test_delete_by_category() {
        let conn = test_conn();
        let categories = CategoryRepository::new(&conn);
        let records = RecordRepository::new(&conn);

        let food = categories.insert(RecordKind::Expense, "food").unwrap();
        records
            .insert(RecordKind::Expense, date("2024-02-12"), food, "lunch", 9.5)
            .unwrap();
        records
            .insert(RecordKind::Expense, date("2024-02-13"), food, "dinner", 21.0)
            .unwrap();

        assert_eq!(records.delete_by_category(RecordKind::Expense, food).unwrap(), 2);
        assert!(records.list(RecordKind::Expense).unwrap().is_empty());
    }

    #[test]
    fn test_sums() {
        let conn = test_conn();
        let categories = CategoryRepository::new(&conn);
        let records = RecordRepository::new(&conn);

        assert_eq!(records.sum_all(RecordKind::Expense).unwrap(), 0.0);

        let food = categories.insert(RecordKind::Expense, "food").unwrap();
        let rent = categories.insert(RecordKind::Expense, "rent").unwrap();
        records
            .insert(RecordKind::Expense, date("2024-02-12"), food, "lunch", 10.0)
            .unwrap();
        records
            .insert(RecordKind::Expense, date("2024-02-13"), food, "dinner", 20.0)
            .unwrap();
        records
            .insert(RecordKind::Expense, date("2024-02-01"), rent, "february", 800.0)
            .unwrap();

        assert_eq!(records.sum_all(RecordKind::Expense).unwrap(), 830.0);
        assert_eq!(
            records.sum_by_category(RecordKind::Expense, food).unwrap(),
            30.0
        );
        assert_eq!(
            records
                .sum_by_category_name(RecordKind::Expense, "food")
                .unwrap(),
            30.0
        );
        assert_eq!(
            records
                .sum_by_category_name(RecordKind::Expense, "travel")
                .unwrap(),
            0.0
        );
    }
}
