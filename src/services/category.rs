//! Category service
//!
//! Provides business logic for category management: name resolution with
//! auto-creation, listing, renaming, cascading deletion, and pruning of
//! categories no record references.

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, RecordKind};
use crate::storage::Database;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Database,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Database) -> Self {
        Self { storage }
    }

    /// Resolve a category by name, creating it if it does not exist yet.
    ///
    /// Names are normalized (trimmed, lowercased) before lookup, so the
    /// same category is returned no matter how the user typed it.
    pub fn resolve_or_create(&self, kind: RecordKind, name: &str) -> LedgerResult<Category> {
        let name = Category::normalize_name(name);
        if name.is_empty() {
            return Err(LedgerError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        if let Some(existing) = self.storage.categories().find_by_name(kind, &name)? {
            return Ok(existing);
        }

        let id = self.storage.categories().insert(kind, &name)?;
        debug!(%kind, %name, id, "category auto-created");

        Ok(Category {
            id,
            name,
            budget_limit: None,
        })
    }

    /// Get a category by id, failing if it does not exist
    pub fn get(&self, kind: RecordKind, id: i64) -> LedgerResult<Category> {
        self.storage
            .categories()
            .find_by_id(kind, id)?
            .ok_or_else(|| LedgerError::category_not_found(id.to_string()))
    }

    /// List all categories of a kind
    pub fn list(&self, kind: RecordKind) -> LedgerResult<Vec<Category>> {
        self.storage.categories().list(kind)
    }

    /// Rename a category
    pub fn rename(&self, kind: RecordKind, id: i64, new_name: &str) -> LedgerResult<Category> {
        let mut category = self.get(kind, id)?;

        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(LedgerError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        self.storage.categories().rename(kind, id, new_name)?;
        category.name = new_name.to_string();
        Ok(category)
    }

    /// Delete a category together with every record that references it.
    ///
    /// Both deletes run in one transaction. Returns the number of records
    /// removed.
    pub fn delete_cascade(&self, kind: RecordKind, id: i64) -> LedgerResult<usize> {
        let category = self.get(kind, id)?;

        let tx = self.storage.transaction()?;
        let removed = self.storage.records().delete_by_category(kind, id)?;
        self.storage.categories().delete(kind, id)?;
        tx.commit()?;

        debug!(%kind, name = %category.name, removed, "category deleted with records");
        Ok(removed)
    }

    /// Delete every category of a kind that no record references.
    ///
    /// Invoked when the user leaves a category browsing view. Returns the
    /// number of categories removed.
    pub fn prune_unused(&self, kind: RecordKind) -> LedgerResult<usize> {
        let pruned = self.storage.categories().delete_orphans(kind)?;
        if pruned > 0 {
            debug!(%kind, pruned, "pruned unused categories");
        }
        Ok(pruned)
    }
}
