//! Storage layer for the budget tracker
//!
//! Provides SQLite persistence with an idempotent schema, enforced
//! foreign keys, and repository types scoped to one concern each.

pub mod categories;
pub mod goals;
pub mod init;
pub mod records;

pub use categories::CategoryRepository;
pub use goals::GoalRepository;
pub use init::create_schema;
pub use records::RecordRepository;

use std::path::Path;

use rusqlite::{Connection, Transaction};

use crate::error::LedgerResult;

/// Main storage coordinator that provides access to all repositories
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database file and prepare the schema
    pub fn open(path: &Path) -> LedgerResult<Self> {
        let conn = Connection::open(path)?;
        Self::configure(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database, used by tests
    pub fn open_in_memory() -> LedgerResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::configure(&conn)?;
        Ok(Self { conn })
    }

    fn configure(conn: &Connection) -> LedgerResult<()> {
        conn.pragma_update(None, "foreign_keys", true)?;
        create_schema(conn)?;
        Ok(())
    }

    /// Repository for expense and income categories
    pub fn categories(&self) -> CategoryRepository<'_> {
        CategoryRepository::new(&self.conn)
    }

    /// Repository for expense and income records
    pub fn records(&self) -> RecordRepository<'_> {
        RecordRepository::new(&self.conn)
    }

    /// Repository for savings goals
    pub fn goals(&self) -> GoalRepository<'_> {
        GoalRepository::new(&self.conn)
    }

    /// Begin a transaction; dropping it without commit rolls back
    pub fn transaction(&self) -> LedgerResult<Transaction<'_>> {
        Ok(self.conn.unchecked_transaction()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordKind;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_file_and_schema() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.db");

        let db = Database::open(&path).unwrap();
        assert!(path.exists());
        assert!(db.categories().list(RecordKind::Expense).unwrap().is_empty());
    }

    #[test]
    fn test_data_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.db");

        {
            let db = Database::open(&path).unwrap();
            db.categories()
                .insert(RecordKind::Expense, "groceries")
                .unwrap();
        }

        let db = Database::open(&path).unwrap();
        let listing = db.categories().list(RecordKind::Expense).unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].name, "groceries");
    }

    #[test]
    fn test_dropped_transaction_rolls_back() {
        let db = Database::open_in_memory().unwrap();

        {
            let tx = db.transaction().unwrap();
            db.categories().insert(RecordKind::Expense, "food").unwrap();
            drop(tx);
        }

        assert!(db.categories().list(RecordKind::Expense).unwrap().is_empty());
    }
}
