use chrono::NaiveDate;

use crate::entities::{
    DuesRules, EngineConfig, Member, MemberStatus, MonthIndex, NewTransaction, PaymentToggle,
    ReversalPolicy, ToggleDirection, Transaction, TransactionSideEffect, TransactionType,
};

use super::dues_calculator::DuesCalculator;

pub(crate) struct PaymentReconciler<'a> {
    rules: &'a DuesRules,
    config: &'a EngineConfig,
}

impl<'a> PaymentReconciler<'a> {
    pub(crate) fn new(rules: &'a DuesRules, config: &'a EngineConfig) -> Self {
        Self { rules, config }
    }

    /// Flips one ledger slot and derives the paired transaction mutation.
    /// Nothing is persisted here.
    ///
    /// `transactions` is only consulted when reversing a payment under
    /// `ReversalPolicy::VoidIncome`, to find the income record to void.
    pub(crate) fn toggle(
        &self,
        member: &Member,
        month: MonthIndex,
        today: NaiveDate,
        transactions: &[Transaction],
    ) -> PaymentToggle {
        if member.status == MemberStatus::Inactive {
            return PaymentToggle {
                member: member.clone(),
                month,
                direction: ToggleDirection::Frozen,
                side_effect: TransactionSideEffect::None,
            };
        }

        let was_paid = member.payments.is_paid(month);
        let rate = DuesCalculator::monthly_rate(member.role, self.rules);
        let mut updated = member.clone();
        updated.payments.set(month, !was_paid);

        if !was_paid {
            updated.total_paid = (member.total_paid + rate).max(0.0);
            updated.last_payment_date = Some(today);
            PaymentToggle {
                member: updated,
                month,
                direction: ToggleDirection::MarkedPaid,
                side_effect: TransactionSideEffect::Insert(NewTransaction {
                    transaction_type: TransactionType::Income,
                    category: self.config.dues_category.clone(),
                    amount: rate,
                    date: today,
                    description: self.dues_description(member, month),
                    member_id: Some(member.id.clone()),
                }),
            }
        } else {
            updated.total_paid = (member.total_paid - rate).max(0.0);
            let side_effect = match self.config.reversal_policy {
                ReversalPolicy::KeepIncome => TransactionSideEffect::None,
                ReversalPolicy::VoidIncome => self
                    .matching_income(member, month, transactions)
                    .map(|tx| TransactionSideEffect::Void(tx.id))
                    .unwrap_or(TransactionSideEffect::None),
            };
            PaymentToggle {
                member: updated,
                month,
                direction: ToggleDirection::MarkedUnpaid,
                side_effect,
            }
        }
    }

    /// Flips the lifecycle flag only. The ledger is untouched.
    pub(crate) fn toggle_status(member: &Member) -> Member {
        Member {
            status: member.status.toggled(),
            ..member.clone()
        }
    }

    pub(crate) fn dues_description(&self, member: &Member, month: MonthIndex) -> String {
        format!("{} - {}. Ay Aidat Ödemesi", member.name, month.number())
    }

    /// Most recent dues income recorded for this member and month.
    fn matching_income<'t>(
        &self,
        member: &Member,
        month: MonthIndex,
        transactions: &'t [Transaction],
    ) -> Option<&'t Transaction> {
        let description = self.dues_description(member, month);
        transactions
            .iter()
            .filter(|tx| {
                tx.is_income()
                    && tx.is_attributed_to(&member.id)
                    && tx.category == self.config.dues_category
                    && tx.description == description
            })
            .max_by_key(|tx| (tx.date, tx.id))
    }
}
