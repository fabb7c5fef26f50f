use std::sync::Arc;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{NewTransaction, Transaction, TransactionId};

#[async_trait]
pub trait TransactionRepository: Send + Sync {
    async fn insert_transaction(
        &self,
        transaction: NewTransaction,
    ) -> Result<Transaction, ServerError>;

    async fn delete_transaction(&self, id: TransactionId) -> Result<(), ServerError>;
}

#[async_trait]
impl<T: TransactionRepository + ?Sized> TransactionRepository for Arc<T> {
    async fn insert_transaction(
        &self,
        transaction: NewTransaction,
    ) -> Result<Transaction, ServerError> {
        (**self).insert_transaction(transaction).await
    }

    async fn delete_transaction(&self, id: TransactionId) -> Result<(), ServerError> {
        (**self).delete_transaction(id).await
    }
}
