//! Goal menu flows
//!
//! Implements setting a financial goal (menu 9) and viewing progress
//! toward every goal (menu 10).

use crate::cli::prompt::{self, Prompt};
use crate::display::{format_category_list, format_goal_report};
use crate::error::LedgerResult;
use crate::models::RecordKind;
use crate::services::{CategoryService, GoalService};
use crate::storage::Database;

/// Set a financial goal (menu 9)
pub fn set_goal_flow(storage: &Database) -> LedgerResult<()> {
    let amount = match prompt::read_positive_amount("Enter the goal amount: ")? {
        Prompt::Value(amount) => amount,
        _ => return Ok(()),
    };

    let target_date = match prompt::read_date("Enter the target date (YYYY-MM-DD): ")? {
        Prompt::Value(date) => date,
        _ => return Ok(()),
    };

    // The category is optional; bad input skips it rather than retrying
    let categories = CategoryService::new(storage).list(RecordKind::Expense)?;
    let mut category_id = None;
    if !categories.is_empty() {
        print!("{}", format_category_list("Expense Categories:", &categories));

        let Some(input) = prompt::read_line(
            "Enter the ID of the category related to this goal, or press enter to skip: ",
        )?
        else {
            return Ok(());
        };
        if !input.is_empty() {
            match input.parse::<i64>() {
                Ok(id) if categories.iter().any(|c| c.id == id) => category_id = Some(id),
                Ok(_) => println!("Category ID not found. Skipping category selection."),
                Err(_) => println!("Invalid ID. Skipping category selection."),
            }
        }
    }

    GoalService::new(storage).set(amount, &target_date, category_id)?;
    println!("Financial goal set successfully.");
    Ok(())
}

/// View progress toward every goal (menu 10)
pub fn view_goals_flow(storage: &Database) -> LedgerResult<()> {
    let report = GoalService::new(storage).progress()?;
    print!("{}", format_goal_report(&report));
    Ok(())
}
