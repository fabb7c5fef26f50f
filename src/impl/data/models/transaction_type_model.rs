use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::{entities::TransactionType, errors::UnknownTransactionType};

#[derive(Debug)]
pub(crate) struct TransactionTypeModel(TransactionType);
impl FromStr for TransactionTypeModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionTypeModel(TransactionType::Income)),
            "expense" => Ok(TransactionTypeModel(TransactionType::Expense)),
            _ => Err(UnknownTransactionType::new(s)),
        }
    }
}

impl Into<TransactionType> for TransactionTypeModel {
    fn into(self) -> TransactionType {
        self.0
    }
}
