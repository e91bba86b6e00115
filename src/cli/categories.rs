//! Category browsing flows
//!
//! Implements the view-by-category menu choices (3 and 6): list the
//! categories of a kind, inspect one category's records, rename it, or
//! delete it together with its records. Leaving the view with `back`
//! prunes categories no record references.

use crate::cli::prompt::{self, Prompt};
use crate::display::{format_category_list, format_category_records};
use crate::error::LedgerResult;
use crate::models::RecordKind;
use crate::services::{CategoryService, RecordService};
use crate::storage::Database;

/// Category browsing flow (menu 3 and 6)
pub fn browse_categories_flow(storage: &Database, kind: RecordKind) -> LedgerResult<()> {
    let categories = CategoryService::new(storage);
    let records = RecordService::new(storage);

    let listing = categories.list(kind)?;
    if listing.is_empty() {
        println!("No {} categories found.\n", kind.label());
        return Ok(());
    }
    print!(
        "{}",
        format_category_list(&format!("{} Categories:", kind.entity_type()), &listing)
    );

    loop {
        let id = match prompt::read_id_or_back(
            "Enter the ID of the category to view/update/delete, or 'back' to return to the main menu: ",
            "category",
        )? {
            Prompt::Value(id) => id,
            Prompt::Back => {
                categories.prune_unused(kind)?;
                return Ok(());
            }
            Prompt::Eof => return Ok(()),
        };

        match categories.get(kind, id) {
            Ok(_) => {}
            Err(err) if err.is_not_found() => {
                println!("Category ID not found. Please enter a valid category ID.\n");
                continue;
            }
            Err(err) => return Err(err),
        }

        let category_records = records.list_by_category(kind, id)?;
        print!("{}", format_category_records(kind, id, &category_records));

        let Some(action) = prompt::read_lower(
            "Would you like to update or delete this category? (update/delete/back): ",
        )?
        else {
            return Ok(());
        };

        match action.as_str() {
            "delete" => {
                categories.delete_cascade(kind, id)?;
                println!(
                    "Category and all associated {} deleted successfully.\n",
                    kind.plural_label().to_lowercase()
                );
                return Ok(());
            }
            "update" => {
                let Some(new_name) = prompt::read_line(
                    "Enter the new name for the category, or press enter to keep the current name: ",
                )?
                else {
                    return Ok(());
                };
                if !new_name.is_empty() {
                    categories.rename(kind, id, &new_name)?;
                    println!("Category name updated successfully.\n");
                    return Ok(());
                }
                // Name kept; fall through to pick another category
            }
            "back" => {}
            _ => println!("Invalid choice. Please enter 'update' or 'delete'.\n"),
        }
    }
}
