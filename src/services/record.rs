//! Record service
//!
//! Provides business logic for expense and income records: adding with
//! category auto-creation, listing with totals, partial updates, and
//! deletion. The same service handles both kinds; callers pick the
//! namespace with [`RecordKind`].

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{RecordEntry, RecordKind, RecordListing, RecordPatch};
use crate::services::{parse_date, CategoryService};
use crate::storage::Database;

/// Service for ledger record management
pub struct RecordService<'a> {
    storage: &'a Database,
}

impl<'a> RecordService<'a> {
    /// Create a new record service
    pub fn new(storage: &'a Database) -> Self {
        Self { storage }
    }

    /// Add a record, creating its category on first reference.
    ///
    /// The category resolution and the insert run in one transaction, so a
    /// failed insert does not leave a fresh category behind. The date must
    /// be a valid `YYYY-MM-DD` calendar date; the amount is unconstrained.
    pub fn add(
        &self,
        kind: RecordKind,
        date: &str,
        category_name: &str,
        description: &str,
        amount: f64,
    ) -> LedgerResult<RecordEntry> {
        let date = parse_date(date)?;
        let description = description.trim();

        let tx = self.storage.transaction()?;
        let category = CategoryService::new(self.storage).resolve_or_create(kind, category_name)?;
        let id = self
            .storage
            .records()
            .insert(kind, date, category.id, description, amount)?;
        tx.commit()?;

        debug!(%kind, id, category = %category.name, amount, "record added");

        Ok(RecordEntry {
            id,
            date,
            category: category.name,
            description: description.to_string(),
            amount,
        })
    }

    /// All records of a kind, with the sum of their amounts
    pub fn list(&self, kind: RecordKind) -> LedgerResult<RecordListing> {
        let entries = self.storage.records().list(kind)?;
        Ok(RecordListing { entries })
    }

    /// Records of one category; fails if the category does not exist
    pub fn list_by_category(
        &self,
        kind: RecordKind,
        category_id: i64,
    ) -> LedgerResult<RecordListing> {
        CategoryService::new(self.storage).get(kind, category_id)?;
        let entries = self.storage.records().list_by_category(kind, category_id)?;
        Ok(RecordListing { entries })
    }

    /// Apply a partial update to a record.
    ///
    /// Only the fields set in the patch change; the rest keep their current
    /// value. A new category name is resolved or created the same way as on
    /// add. An empty patch is a no-op.
    pub fn update(&self, kind: RecordKind, id: i64, patch: &RecordPatch) -> LedgerResult<()> {
        if !self.storage.records().exists(kind, id)? {
            return Err(LedgerError::record_not_found(
                kind.entity_type(),
                id.to_string(),
            ));
        }
        if patch.is_empty() {
            return Ok(());
        }

        // Validate the date up front so a bad value writes nothing
        let new_date = patch.date.as_deref().map(parse_date).transpose()?;

        let tx = self.storage.transaction()?;
        if let Some(date) = new_date {
            self.storage.records().update_date(kind, id, date)?;
        }
        if let Some(name) = &patch.category {
            let category = CategoryService::new(self.storage).resolve_or_create(kind, name)?;
            self.storage.records().update_category(kind, id, category.id)?;
        }
        if let Some(description) = &patch.description {
            self.storage
                .records()
                .update_description(kind, id, description.trim())?;
        }
        if let Some(amount) = patch.amount {
            self.storage.records().update_amount(kind, id, amount)?;
        }
        tx.commit()?;

        debug!(%kind, id, "record updated");
        Ok(())
    }

    /// Delete a record by id
    pub fn delete(&self, kind: RecordKind, id: i64) -> LedgerResult<()> {
        let removed = self.storage.records().delete(kind, id)?;
        if removed == 0 {
            return Err(LedgerError::record_not_found(
                kind.entity_type(),
                id.to_string(),
            ));
        }
        debug!(%kind, id, "record deleted");
        Ok(())
    }

    /// Whether a record with this id exists
    pub fn exists(&self, kind: RecordKind, id: i64) -> LedgerResult<bool> {
        self.storage.records().exists(kind, id)
    }
}
