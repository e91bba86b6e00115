//! Interactive menu layer
//!
//! Bridges the blocking numbered menu with the service layer. Every flow
//! returns a result; the dispatch loop reports errors and keeps the
//! session alive, so no operation can take the process down.

pub mod budgets;
pub mod categories;
pub mod goals;
pub mod menu;
pub mod prompt;
pub mod records;

pub use menu::MenuChoice;

use tracing::warn;

use crate::error::LedgerResult;
use crate::models::RecordKind;
use crate::storage::Database;

/// Run the main menu until the user quits or stdin closes
pub fn run_menu(storage: &Database) -> LedgerResult<()> {
    loop {
        println!("{}", menu::menu_text());
        let Some(choice) = prompt::read_line("\nEnter your choice: ")? else {
            return Ok(());
        };

        let result = match MenuChoice::parse(&choice) {
            Some(MenuChoice::AddExpense) => {
                records::add_record_flow(storage, RecordKind::Expense)
            }
            Some(MenuChoice::ViewExpenses) => {
                records::view_records_flow(storage, RecordKind::Expense)
            }
            Some(MenuChoice::ViewExpensesByCategory) => {
                categories::browse_categories_flow(storage, RecordKind::Expense)
            }
            Some(MenuChoice::AddIncome) => records::add_record_flow(storage, RecordKind::Income),
            Some(MenuChoice::ViewIncome) => {
                records::view_records_flow(storage, RecordKind::Income)
            }
            Some(MenuChoice::ViewIncomeByCategory) => {
                categories::browse_categories_flow(storage, RecordKind::Income)
            }
            Some(MenuChoice::SetBudget) => budgets::set_budget_flow(storage),
            Some(MenuChoice::ViewBudget) => budgets::view_budget_flow(storage),
            Some(MenuChoice::SetGoals) => goals::set_goal_flow(storage),
            Some(MenuChoice::ViewGoalsProgress) => goals::view_goals_flow(storage),
            Some(MenuChoice::Quit) => {
                println!("\nGoodbye!\n");
                return Ok(());
            }
            None => {
                println!("Invalid choice. Please try again.");
                continue;
            }
        };

        // Operation errors end the flow, never the session
        if let Err(err) = result {
            warn!(%err, "menu operation failed");
            println!("Error: {}\n", err);
        }
    }
}
