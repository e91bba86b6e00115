//! Goal display formatting
//!
//! Renders the goal progress report: one field-per-line block per goal,
//! with a congratulation line once a goal has been achieved.

use crate::models::GoalProgress;

/// Format the progress block for one goal
pub fn format_goal_block(entry: &GoalProgress) -> String {
    let mut output = String::new();
    output.push_str(&format!("Goal ID: {}\n", entry.goal.id));
    output.push_str(&format!("Goal Amount: {:.2}\n", entry.goal.amount));
    output.push_str(&format!(
        "Target Date: {}\n",
        entry.goal.target_date.format("%Y-%m-%d")
    ));
    output.push_str(&format!("Category: {}\n", entry.goal.category_label()));
    output.push_str(&format!(
        "Progress: {:.2} ({:.2}%)\n",
        entry.progress,
        entry.percentage()
    ));
    output.push_str(&format!("Remaining Amount: {:.2}\n", entry.remaining()));

    if entry.is_achieved() {
        output.push_str(&format!(
            "\nCongratulations, you have achieved the {} financial goal!\n",
            entry.goal.category_label()
        ));
    }

    output
}

/// Format the full goal progress report
pub fn format_goal_report(report: &[GoalProgress]) -> String {
    if report.is_empty() {
        return "No financial goals found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Financial Goals:\n\n");
    for (i, entry) in report.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format_goal_block(entry));
    }
    output
}
