use crate::entities::{FinancialSummary, Member, MemberStats, Transaction, TransactionType};

pub(crate) fn summarize_transactions(transactions: &[Transaction]) -> FinancialSummary {
    let mut summary = FinancialSummary::default();
    for tx in transactions {
        match tx.transaction_type {
            TransactionType::Income => summary.total_income += tx.amount,
            TransactionType::Expense => {
                summary.total_expense += tx.amount;
                match summary
                    .expense_by_category
                    .iter_mut()
                    .find(|(category, _)| *category == tx.category)
                {
                    Some((_, total)) => *total += tx.amount,
                    None => summary
                        .expense_by_category
                        .push((tx.category.clone(), tx.amount)),
                }
            }
        }
    }
    summary.balance = summary.total_income - summary.total_expense;
    summary
}

pub(crate) fn member_stats(members: &[Member]) -> MemberStats {
    let active = members.iter().filter(|m| m.is_active()).count();
    MemberStats {
        total: members.len(),
        active,
        inactive: members.len() - active,
        management: members.iter().filter(|m| m.role.is_officer()).count(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::entities::TransactionId;

    fn tx(id: u64, transaction_type: TransactionType, category: &str, amount: f64) -> Transaction {
        Transaction {
            id: TransactionId::new(id),
            transaction_type,
            category: category.to_string(),
            amount,
            date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            description: String::new(),
            member_id: None,
        }
    }

    #[test]
    fn totals_income_expense_and_categories_in_first_seen_order() {
        let summary = summarize_transactions(&[
            tx(1, TransactionType::Income, "Aidat", 1000.0),
            tx(2, TransactionType::Expense, "Kira", 400.0),
            tx(3, TransactionType::Expense, "Fatura", 150.0),
            tx(4, TransactionType::Expense, "Kira", 400.0),
            tx(5, TransactionType::Income, "Bağış", 250.0),
        ]);
        assert_eq!(summary.total_income, 1250.0);
        assert_eq!(summary.total_expense, 950.0);
        assert_eq!(summary.balance, 300.0);
        assert_eq!(
            summary.expense_by_category,
            vec![("Kira".to_string(), 800.0), ("Fatura".to_string(), 150.0)]
        );
    }
}
