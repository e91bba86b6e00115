//! Record kinds
//!
//! Expenses and income live in disjoint namespaces: each kind has its own
//! record table and its own category table, and ids are only meaningful
//! within a kind.

use std::fmt;

/// The two kinds of ledger records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Money going out
    Expense,
    /// Money coming in
    Income,
}

impl RecordKind {
    /// Lowercase noun for user-facing messages ("expense" / "income")
    pub fn label(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }

    /// Capitalized noun for error messages ("Expense" / "Income")
    pub fn entity_type(&self) -> &'static str {
        match self {
            Self::Expense => "Expense",
            Self::Income => "Income",
        }
    }

    /// Plural noun for headings ("Expenses" / "Incomes")
    pub fn plural_label(&self) -> &'static str {
        match self {
            Self::Expense => "Expenses",
            Self::Income => "Incomes",
        }
    }

    /// Name of the table holding records of this kind
    pub fn record_table(&self) -> &'static str {
        match self {
            Self::Expense => "expenses",
            Self::Income => "income",
        }
    }

    /// Name of the table holding categories of this kind
    pub fn category_table(&self) -> &'static str {
        match self {
            Self::Expense => "expense_categories",
            Self::Income => "income_categories",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(RecordKind::Expense.label(), "expense");
        assert_eq!(RecordKind::Income.label(), "income");
        assert_eq!(RecordKind::Expense.entity_type(), "Expense");
        assert_eq!(RecordKind::Income.plural_label(), "Incomes");
    }

    #[test]
    fn test_table_names() {
        assert_eq!(RecordKind::Expense.record_table(), "expenses");
        assert_eq!(RecordKind::Expense.category_table(), "expense_categories");
        assert_eq!(RecordKind::Income.record_table(), "income");
        assert_eq!(RecordKind::Income.category_table(), "income_categories");
    }

    #[test]
    fn test_display() {
        assert_eq!(RecordKind::Expense.to_string(), "expense");
    }
}
