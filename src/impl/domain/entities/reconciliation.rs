use fractic_server_error::ServerError;

use super::{
    member::{Member, MemberId},
    month::MonthIndex,
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// Transaction-log mutation paired with a ledger flip.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionSideEffect {
    None,
    Insert(NewTransaction),
    Void(TransactionId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleDirection {
    MarkedPaid,
    MarkedUnpaid,
    /// The member is inactive; nothing changed.
    Frozen,
}

/// Result of flipping one ledger slot, before anything has been persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentToggle {
    pub member: Member,
    pub month: MonthIndex,
    pub direction: ToggleDirection,
    pub side_effect: TransactionSideEffect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconciliationStatus {
    Applied,
    Frozen,
    /// Exactly one of the two writes went through. Needs manual
    /// reconciliation (see drift detection).
    PartiallyApplied {
        member_persisted: bool,
        transaction_persisted: bool,
    },
    Failed,
}

#[derive(Debug)]
pub struct ToggleReport {
    pub toggle: PaymentToggle,
    pub status: ReconciliationStatus,
    pub inserted_transaction: Option<Transaction>,
    /// Errors from whichever writes failed, member write first.
    pub errors: Vec<ServerError>,
}

/// A member whose recorded `total_paid` disagrees with the dues income
/// attributed to them in the transaction log.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerDrift {
    pub member_id: MemberId,
    pub recorded_total_paid: f64,
    pub transaction_total: f64,
    pub paid_slots: usize,
    pub dues_transactions: usize,
}

impl LedgerDrift {
    pub fn difference(&self) -> f64 {
        self.recorded_total_paid - self.transaction_total
    }
}
