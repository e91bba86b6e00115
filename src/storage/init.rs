//! Database schema initialization
//!
//! Creates the ledger tables on first open. All statements are idempotent,
//! so running them against an existing database is a no-op.

use rusqlite::Connection;

use crate::error::LedgerResult;

/// The two record kinds keep disjoint namespaces: each has its own record
/// table and its own category table. Budget limits live as a nullable
/// column on expense categories. Goals reference an expense category and
/// fall back to "General" (NULL) when that category is deleted.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS expense_categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    budget_limit REAL
);

CREATE TABLE IF NOT EXISTS income_categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS expenses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    category_id INTEGER NOT NULL,
    description TEXT,
    amount REAL NOT NULL,
    FOREIGN KEY (category_id) REFERENCES expense_categories (id)
);

CREATE TABLE IF NOT EXISTS income (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    category_id INTEGER NOT NULL,
    description TEXT,
    amount REAL NOT NULL,
    FOREIGN KEY (category_id) REFERENCES income_categories (id)
);

CREATE TABLE IF NOT EXISTS financial_goals (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    goal_amount REAL NOT NULL,
    target_date TEXT NOT NULL,
    category_id INTEGER,
    FOREIGN KEY (category_id) REFERENCES expense_categories (id) ON DELETE SET NULL
);
"#;

/// Create all ledger tables if they do not exist yet
pub fn create_schema(conn: &Connection) -> LedgerResult<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}
