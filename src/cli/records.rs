//! Record menu flows
//!
//! Implements the add and view flows for ledger records. Wording follows
//! the record kind, so the same implementation serves the expense choices
//! (1 and 2) and the income choices (4 and 5).

use crate::cli::prompt::{self, Prompt};
use crate::display::format_record_listing;
use crate::error::LedgerResult;
use crate::models::{RecordKind, RecordPatch};
use crate::services::RecordService;
use crate::storage::Database;

/// Add flow with confirm/undo (menu 1 and 4)
pub fn add_record_flow(storage: &Database, kind: RecordKind) -> LedgerResult<()> {
    let label = kind.label();

    let date = match prompt::read_date(&format!(
        "Enter the date of the {} (YYYY-MM-DD): ",
        label
    ))? {
        Prompt::Value(date) => date,
        _ => return Ok(()),
    };

    let category = loop {
        let Some(input) = prompt::read_line(&format!(
            "Enter the category name of the {}: ",
            label
        ))?
        else {
            return Ok(());
        };
        if !input.is_empty() {
            break input;
        }
        println!("Category name cannot be empty.");
    };

    let Some(description) = prompt::read_line(&format!(
        "Enter a description of the {}: ",
        label
    ))?
    else {
        return Ok(());
    };

    let amount = match prompt::read_amount(&format!("Enter the amount of the {}: ", label))? {
        Prompt::Value(amount) => amount,
        _ => return Ok(()),
    };

    let service = RecordService::new(storage);
    let added = service.add(kind, &date, &category, &description, amount)?;

    // The row is already committed; declining the confirmation undoes it
    match prompt::read_yes_no(&format!(
        "Do you confirm to add this {}? (yes/no): ",
        label
    ))? {
        Prompt::Value(true) => println!("\n{} added successfully.\n", kind.entity_type()),
        Prompt::Value(false) => {
            service.delete(kind, added.id)?;
            println!("{} not added.\n", kind.entity_type());
        }
        // Stdin closed before an answer; the record stays
        _ => {}
    }
    Ok(())
}

/// Listing flow with update/delete selection (menu 2 and 5)
pub fn view_records_flow(storage: &Database, kind: RecordKind) -> LedgerResult<()> {
    let service = RecordService::new(storage);
    let listing = service.list(kind)?;
    print!("{}", format_record_listing(kind, &listing));
    if listing.is_empty() {
        return Ok(());
    }

    let label = kind.label();
    loop {
        let id = match prompt::read_id_or_back(
            &format!(
                "Enter the ID of the {} to update/delete, or 'back' to return to the main menu: ",
                label
            ),
            label,
        )? {
            Prompt::Value(id) => id,
            _ => return Ok(()),
        };

        if !service.exists(kind, id)? {
            println!(
                "{} ID not found. Please enter a valid {} ID.\n",
                kind.entity_type(),
                label
            );
            continue;
        }

        let Some(action) = prompt::read_lower(&format!(
            "Would you like to update or delete this {}? (update/delete): ",
            label
        ))?
        else {
            return Ok(());
        };

        match action.as_str() {
            "delete" => {
                service.delete(kind, id)?;
                println!("\n{} deleted successfully.\n", kind.entity_type());
                return Ok(());
            }
            "update" => {
                let Some(patch) = read_record_patch(kind)? else {
                    return Ok(());
                };
                service.update(kind, id, &patch)?;
                println!("{} updated successfully.\n", kind.entity_type());
                return Ok(());
            }
            _ => println!("Invalid choice. Please enter 'update' or 'delete'.\n"),
        }
    }
}

/// Prompt for the update fields; empty input keeps the current value.
/// `None` when stdin closes mid-way.
fn read_record_patch(kind: RecordKind) -> LedgerResult<Option<RecordPatch>> {
    let label = kind.label();

    let date = match prompt::read_optional_date(&format!(
        "Enter the new date of the {} (YYYY-MM-DD), or press enter to keep the current date: ",
        label
    ))? {
        Prompt::Value(date) => date,
        _ => return Ok(None),
    };

    let category = match prompt::read_line(&format!(
        "Enter the new category of the {}, or press enter to keep the current category: ",
        label
    ))? {
        Some(input) if !input.is_empty() => Some(input),
        Some(_) => None,
        None => return Ok(None),
    };

    let description = match prompt::read_line(&format!(
        "Enter the new description of the {}, or press enter to keep the current description: ",
        label
    ))? {
        Some(input) if !input.is_empty() => Some(input),
        Some(_) => None,
        None => return Ok(None),
    };

    let amount = match prompt::read_optional_amount(&format!(
        "Enter the new amount of the {}, or press enter to keep the current amount: ",
        label
    ))? {
        Prompt::Value(amount) => amount,
        _ => return Ok(None),
    };

    Ok(Some(RecordPatch {
        date,
        category,
        description,
        amount,
    }))
}
