//! Budget status model

/// Spending of an expense category measured against its budget limit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetStatus {
    /// The configured budget limit
    pub limit: f64,

    /// Sum of all expense amounts recorded against the category
    pub spent: f64,
}

impl BudgetStatus {
    /// Limit minus spending; negative when the category is over budget
    pub fn remaining(&self) -> f64 {
        self.limit - self.spent
    }

    /// True when spending exceeds the limit
    pub fn is_over_budget(&self) -> bool {
        self.remaining() < 0.0
    }
}
