use crate::entities::{LedgerDrift, Member, Transaction};

/// Treats the transaction log as the source of truth for how much each member
/// has paid, and finds members whose running `total_paid` has wandered off.
pub(crate) struct DriftDetector<'a> {
    dues_category: &'a str,
}

/// Amounts are derived from rates divided by 12, so compare with a tolerance
/// of half a kuruş.
const TOLERANCE: f64 = 0.005;

impl<'a> DriftDetector<'a> {
    pub(crate) fn new(dues_category: &'a str) -> Self {
        Self { dues_category }
    }

    pub(crate) fn detect(&self, members: &[Member], transactions: &[Transaction]) -> Vec<LedgerDrift> {
        members
            .iter()
            .filter_map(|m| {
                let (transaction_total, dues_transactions) = self.paid_per_log(m, transactions);
                let drift = LedgerDrift {
                    member_id: m.id.clone(),
                    recorded_total_paid: m.total_paid,
                    transaction_total,
                    paid_slots: m.payments.paid_count(),
                    dues_transactions,
                };
                (drift.difference().abs() > TOLERANCE).then_some(drift)
            })
            .collect()
    }

    /// Recomputes `total_paid` from the log.
    pub(crate) fn repair(&self, member: &Member, transactions: &[Transaction]) -> Member {
        let (transaction_total, _) = self.paid_per_log(member, transactions);
        Member {
            total_paid: transaction_total,
            ..member.clone()
        }
    }

    fn paid_per_log(&self, member: &Member, transactions: &[Transaction]) -> (f64, usize) {
        transactions
            .iter()
            .filter(|tx| {
                tx.is_income()
                    && tx.category == self.dues_category
                    && tx.is_attributed_to(&member.id)
            })
            .fold((0.0, 0), |(sum, count), tx| (sum + tx.amount, count + 1))
    }
}
