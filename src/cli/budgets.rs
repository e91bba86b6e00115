//! Budget menu flows
//!
//! Implements setting a budget limit on an expense category (menu 7) and
//! viewing a category's budget status (menu 8).

use crate::cli::prompt::{self, Prompt};
use crate::display::{format_budget_overview, format_category_list};
use crate::error::{LedgerError, LedgerResult};
use crate::models::RecordKind;
use crate::services::{BudgetService, CategoryService};
use crate::storage::Database;

/// Set a budget limit for an expense category (menu 7)
pub fn set_budget_flow(storage: &Database) -> LedgerResult<()> {
    let categories = CategoryService::new(storage).list(RecordKind::Expense)?;
    if categories.is_empty() {
        println!("No expense categories found.\n");
        return Ok(());
    }
    print!(
        "{}",
        format_category_list("Available Expense Categories:", &categories)
    );

    let category_id = loop {
        let Some(input) =
            prompt::read_line("\nEnter the ID of the category to set the budget for: ")?
        else {
            return Ok(());
        };
        match input.parse::<i64>() {
            Ok(id) => break id,
            Err(_) => println!("Invalid input. Please enter a valid category ID.\n"),
        }
    };

    // An id outside the listed categories returns to the menu
    let Some(category) = categories.iter().find(|c| c.id == category_id) else {
        println!("Invalid category ID. Please select a valid category.\n");
        return Ok(());
    };

    let service = BudgetService::new(storage);
    loop {
        let limit = match prompt::read_amount(&format!(
            "Enter the budget limit for '{}': ",
            category.name
        ))? {
            Prompt::Value(limit) => limit,
            _ => return Ok(()),
        };

        match service.set_limit(category.id, limit) {
            Ok(_) => {
                println!("Budget limit for '{}' set successfully.\n", category.name);
                return Ok(());
            }
            Err(LedgerError::Validation(message)) => println!("Invalid input: {}.\n", message),
            Err(err) => return Err(err),
        }
    }
}

/// View the budget status of an expense category (menu 8)
pub fn view_budget_flow(storage: &Database) -> LedgerResult<()> {
    let categories = CategoryService::new(storage).list(RecordKind::Expense)?;
    if categories.is_empty() {
        println!("No expense categories found.\n");
        return Ok(());
    }
    print!("{}", format_category_list("Expense Categories:", &categories));

    let service = BudgetService::new(storage);
    loop {
        let id = match prompt::read_id_or_back(
            "\nEnter the ID of the category to view the budget, or 'back' to return to the main menu: ",
            "category",
        )? {
            Prompt::Value(id) => id,
            _ => return Ok(()),
        };

        match service.status(id) {
            Ok(budget) => {
                print!("{}", format_budget_overview(&budget));
                return Ok(());
            }
            Err(err) if err.is_not_found() => {
                println!("Category ID not found. Please enter a valid category ID.\n");
            }
            Err(LedgerError::Validation(message)) => {
                println!("{}.\n", message);
                return Ok(());
            }
            Err(err) => return Err(err),
        }
    }
}
