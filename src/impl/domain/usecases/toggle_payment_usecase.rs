use async_trait::async_trait;
use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{
    domain::{
        logic::{member_intake::MemberIntake, payment_reconciler::PaymentReconciler},
        repositories::{
            member_repository::MemberRepository, transaction_repository::TransactionRepository,
        },
    },
    entities::{
        DuesRules, EngineConfig, Member, MonthIndex, ReconciliationStatus, ToggleDirection,
        ToggleReport, Transaction, TransactionSideEffect,
    },
};

#[async_trait]
pub trait TogglePaymentUsecase: Send + Sync {
    /// Flips one ledger slot and issues the member update and the paired
    /// transaction mutation. The two writes are independent: either may fail
    /// without the other being rolled back, which the report surfaces.
    async fn toggle_payment(
        &self,
        member: &Member,
        month: MonthIndex,
        today: NaiveDate,
        rules: &DuesRules,
        config: &EngineConfig,
        transactions: &[Transaction],
    ) -> ToggleReport;

    async fn toggle_status(&self, member: &Member) -> Result<Member, ServerError>;

    /// Persists an edited member record with its name title-cased.
    async fn update_member(
        &self,
        member: &Member,
        config: &EngineConfig,
    ) -> Result<Member, ServerError>;
}

pub(crate) struct TogglePaymentUsecaseImpl<M, T>
where
    M: MemberRepository,
    T: TransactionRepository,
{
    member_repository: M,
    transaction_repository: T,
}

#[async_trait]
impl<M, T> TogglePaymentUsecase for TogglePaymentUsecaseImpl<M, T>
where
    M: MemberRepository,
    T: TransactionRepository,
{
    async fn toggle_payment(
        &self,
        member: &Member,
        month: MonthIndex,
        today: NaiveDate,
        rules: &DuesRules,
        config: &EngineConfig,
        transactions: &[Transaction],
    ) -> ToggleReport {
        let toggle = PaymentReconciler::new(rules, config).toggle(member, month, today, transactions);

        if toggle.direction == ToggleDirection::Frozen {
            tracing::debug!(member = %member.id, month = month.index(), "ledger frozen, toggle ignored");
            return ToggleReport {
                toggle,
                status: ReconciliationStatus::Frozen,
                inserted_transaction: None,
                errors: Vec::new(),
            };
        }

        let member_write = self.member_repository.update_member(&toggle.member);
        let transaction_write = async {
            match &toggle.side_effect {
                TransactionSideEffect::None => Ok(None),
                TransactionSideEffect::Insert(new) => self
                    .transaction_repository
                    .insert_transaction(new.clone())
                    .await
                    .map(Some),
                TransactionSideEffect::Void(id) => self
                    .transaction_repository
                    .delete_transaction(*id)
                    .await
                    .map(|_| None),
            }
        };
        let (member_result, transaction_result) = futures::join!(member_write, transaction_write);

        let has_transaction_write = toggle.side_effect != TransactionSideEffect::None;
        let member_persisted = member_result.is_ok();
        let transaction_persisted = transaction_result.is_ok();
        let mut errors = Vec::new();
        if let Err(e) = member_result {
            errors.push(e);
        }
        let inserted_transaction = match transaction_result {
            Ok(inserted) => inserted,
            Err(e) => {
                errors.push(e);
                None
            }
        };

        let status = match (member_persisted, transaction_persisted) {
            (true, true) => ReconciliationStatus::Applied,
            (false, _) if !has_transaction_write => ReconciliationStatus::Failed,
            (false, false) => ReconciliationStatus::Failed,
            _ => ReconciliationStatus::PartiallyApplied {
                member_persisted,
                transaction_persisted,
            },
        };

        match status {
            ReconciliationStatus::PartiallyApplied { .. } => tracing::warn!(
                member = %member.id,
                month = month.index(),
                member_persisted,
                transaction_persisted,
                "payment toggle partially applied, ledger and transaction log need reconciliation"
            ),
            ReconciliationStatus::Failed => tracing::warn!(
                member = %member.id,
                month = month.index(),
                "payment toggle failed"
            ),
            _ => tracing::debug!(
                member = %member.id,
                month = month.index(),
                direction = ?toggle.direction,
                "payment toggle applied"
            ),
        }

        ToggleReport {
            toggle,
            status,
            inserted_transaction,
            errors,
        }
    }

    async fn toggle_status(&self, member: &Member) -> Result<Member, ServerError> {
        let toggled = PaymentReconciler::toggle_status(member);
        self.member_repository.update_member(&toggled).await?;
        tracing::info!(member = %member.id, status = ?toggled.status, "member status changed");
        Ok(toggled)
    }

    async fn update_member(
        &self,
        member: &Member,
        config: &EngineConfig,
    ) -> Result<Member, ServerError> {
        let revised = MemberIntake::new(config).revise(member);
        self.member_repository.update_member(&revised).await?;
        tracing::info!(member = %revised.id, role = ?revised.role, "member updated");
        Ok(revised)
    }
}

impl<M, T> TogglePaymentUsecaseImpl<M, T>
where
    M: MemberRepository,
    T: TransactionRepository,
{
    pub(crate) fn new(member_repository: M, transaction_repository: T) -> Self {
        Self {
            member_repository,
            transaction_repository,
        }
    }
}
