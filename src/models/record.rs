//! Ledger record models
//!
//! A record is a single dated expense or income entry. Records always
//! reference a category of the same kind.

use chrono::NaiveDate;

/// A record joined with its category name, as shown in listings
#[derive(Debug, Clone, PartialEq)]
pub struct RecordEntry {
    /// Database identifier
    pub id: i64,

    /// Calendar date the record applies to
    pub date: NaiveDate,

    /// Name of the record's category
    pub category: String,

    /// Free-text description, may be empty
    pub description: String,

    /// Monetary amount
    pub amount: f64,
}

/// An ordered set of record entries produced by a listing query
#[derive(Debug, Clone, Default)]
pub struct RecordListing {
    /// Entries in ascending id order
    pub entries: Vec<RecordEntry>,
}

impl RecordListing {
    /// Sum of all entry amounts
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// True when the listing has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// A partial update to a record; `None` fields keep their current value
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    /// New date as typed by the user, validated before it is applied
    pub date: Option<String>,

    /// New category name; resolved or auto-created within the record's kind
    pub category: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New amount
    pub amount: Option<f64>,
}

impl RecordPatch {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.amount.is_none()
    }
}
