use chrono::NaiveDate;

use super::member::MemberId;

pub const INCOME_CATEGORIES: [&str; 4] = ["Aidat", "Bağış", "Etkinlik Geliri", "Diğer"];
pub const EXPENSE_CATEGORIES: [&str; 6] = [
    "Kira",
    "Fatura",
    "Mutfak",
    "Etkinlik Gideri",
    "Ofis Malzemeleri",
    "Diğer",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransactionId(pub(crate) u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Income,
    Expense,
}

/// A transaction as handed to the store, before it has been assigned an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub transaction_type: TransactionType,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub description: String,
    pub member_id: Option<MemberId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub transaction_type: TransactionType,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub description: String,
    pub member_id: Option<MemberId>,
}

// --

impl TransactionId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl NewTransaction {
    pub fn with_id(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            transaction_type: self.transaction_type,
            category: self.category,
            amount: self.amount,
            date: self.date,
            description: self.description,
            member_id: self.member_id,
        }
    }
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub fn is_attributed_to(&self, member_id: &MemberId) -> bool {
        self.member_id.as_ref() == Some(member_id)
    }
}
