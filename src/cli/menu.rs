//! Main menu definition

use std::fmt;

/// One selectable entry of the numbered main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ViewExpenses,
    ViewExpensesByCategory,
    AddIncome,
    ViewIncome,
    ViewIncomeByCategory,
    SetBudget,
    ViewBudget,
    SetGoals,
    ViewGoalsProgress,
    Quit,
}

/// Menu entries in display order; the shown number is the index plus one
const CHOICES: [MenuChoice; 11] = [
    MenuChoice::AddExpense,
    MenuChoice::ViewExpenses,
    MenuChoice::ViewExpensesByCategory,
    MenuChoice::AddIncome,
    MenuChoice::ViewIncome,
    MenuChoice::ViewIncomeByCategory,
    MenuChoice::SetBudget,
    MenuChoice::ViewBudget,
    MenuChoice::SetGoals,
    MenuChoice::ViewGoalsProgress,
    MenuChoice::Quit,
];

impl MenuChoice {
    /// Parse the user's menu input; `None` for anything unrecognized
    pub fn parse(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        CHOICES.get(number.checked_sub(1)?).copied()
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::AddExpense => "Add expense",
            Self::ViewExpenses => "View expenses",
            Self::ViewExpensesByCategory => "View expenses by category",
            Self::AddIncome => "Add income",
            Self::ViewIncome => "View income",
            Self::ViewIncomeByCategory => "View income by category",
            Self::SetBudget => "Set budget for a category",
            Self::ViewBudget => "View budget for a category",
            Self::SetGoals => "Set financial goals",
            Self::ViewGoalsProgress => "View progress towards financial goals",
            Self::Quit => "Quit",
        };
        write!(f, "{}", label)
    }
}

/// The numbered option list shown before every choice prompt
pub fn menu_text() -> String {
    CHOICES
        .iter()
        .enumerate()
        .map(|(i, choice)| format!("{}. {}", i + 1, choice))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddExpense));
        assert_eq!(MenuChoice::parse(" 7 "), Some(MenuChoice::SetBudget));
        assert_eq!(MenuChoice::parse("10"), Some(MenuChoice::ViewGoalsProgress));
        assert_eq!(MenuChoice::parse("11"), Some(MenuChoice::Quit));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("12"), None);
        assert_eq!(MenuChoice::parse("-1"), None);
        assert_eq!(MenuChoice::parse("quit"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_menu_text_numbers_every_choice() {
        let text = menu_text();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "1. Add expense");
        assert_eq!(lines[10], "11. Quit");
    }
}
