/// Aggregate income/expense figures over a transaction list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FinancialSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    /// Expense totals per category, in order of first appearance.
    pub expense_by_category: Vec<(String, f64)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemberStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub management: usize,
}
