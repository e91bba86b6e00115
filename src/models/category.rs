//! Category model
//!
//! Categories partition records within a kind. They are created on demand
//! the first time a record names them and are addressed by name in input
//! and by id in listings.

use std::fmt;

/// A record category within one kind's namespace
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// Database identifier, unique within the category's kind
    pub id: i64,

    /// Normalized name, unique within the category's kind
    pub name: String,

    /// Spending cap; only ever set on expense categories
    pub budget_limit: Option<f64>,
}

impl Category {
    /// Normalize a user-typed category name.
    ///
    /// Trims surrounding whitespace and lowercases, so "Food", " food "
    /// and "FOOD" all address the same category.
    pub fn normalize_name(raw: &str) -> String {
        raw.trim().to_lowercase()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
