use async_trait::async_trait;
use fractic_server_error::ServerError;
use tokio::sync::Mutex;

use crate::{
    domain::repositories::{
        member_repository::MemberRepository, transaction_repository::TransactionRepository,
    },
    entities::{Member, MemberId, NewTransaction, Transaction, TransactionId},
    errors::{MemberNotFound, TransactionNotFound},
};

/// Process-local member and transaction collections.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    members: Mutex<Vec<Member>>,
    transactions: Mutex<TransactionLog>,
}

#[derive(Debug, Default)]
struct TransactionLog {
    next_id: u64,
    entries: Vec<Transaction>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_members(members: Vec<Member>) -> Self {
        Self {
            members: Mutex::new(members),
            transactions: Mutex::default(),
        }
    }

    pub async fn members(&self) -> Vec<Member> {
        self.members.lock().await.clone()
    }

    pub async fn transactions(&self) -> Vec<Transaction> {
        self.transactions.lock().await.entries.clone()
    }

    pub async fn add_members(&self, new_members: Vec<Member>) {
        self.members.lock().await.extend(new_members);
    }

    /// Removes a member. Their transactions stay in the log, still pointing
    /// at the removed id.
    pub async fn remove_member(&self, id: &MemberId) -> Result<Member, ServerError> {
        let mut members = self.members.lock().await;
        let position = members
            .iter()
            .position(|m| &m.id == id)
            .ok_or_else(|| MemberNotFound::new(id.as_str()))?;
        Ok(members.remove(position))
    }
}

#[async_trait]
impl MemberRepository for InMemoryStore {
    async fn update_member(&self, member: &Member) -> Result<(), ServerError> {
        let mut members = self.members.lock().await;
        let existing = members
            .iter_mut()
            .find(|m| m.id == member.id)
            .ok_or_else(|| MemberNotFound::new(member.id.as_str()))?;
        *existing = member.clone();
        Ok(())
    }
}

#[async_trait]
impl TransactionRepository for InMemoryStore {
    async fn insert_transaction(
        &self,
        transaction: NewTransaction,
    ) -> Result<Transaction, ServerError> {
        let mut log = self.transactions.lock().await;
        log.next_id += 1;
        let inserted = transaction.with_id(TransactionId(log.next_id));
        log.entries.push(inserted.clone());
        Ok(inserted)
    }

    async fn delete_transaction(&self, id: TransactionId) -> Result<(), ServerError> {
        let mut log = self.transactions.lock().await;
        let position = log
            .entries
            .iter()
            .position(|tx| tx.id == id)
            .ok_or_else(|| TransactionNotFound::new(&id.to_string()))?;
        log.entries.remove(position);
        Ok(())
    }
}
