//! Budget display formatting

use crate::services::CategoryBudget;

/// Format the budget overview block for one expense category
pub fn format_budget_overview(budget: &CategoryBudget) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\nBudget Overview for Category ID {} ({}):\n",
        budget.category.id, budget.category.name
    ));
    output.push_str(&format!("Set Budget: {:.2}\n", budget.status.limit));
    output.push_str(&format!("Total Expenses: {:.2}\n", budget.status.spent));
    output.push_str(&format!("Remaining Budget: {:.2}\n", budget.status.remaining()));

    if budget.status.is_over_budget() {
        output.push_str("Warning: this category is over budget.\n");
    }

    output
}
