use std::{fs, str::FromStr as _};

use fractic_server_error::ServerError;

use crate::{
    data::models::{
        amount_model::AmountModel, iso_date_model::ISODateModel,
        transaction_type_model::TransactionTypeModel,
    },
    entities::{MemberId, NewTransaction},
    errors::{InvalidCsv, ReadError},
};

pub(crate) trait TransactionsCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<NewTransaction>, ServerError>;

    fn from_file<P>(&self, path: P) -> Result<Vec<NewTransaction>, ServerError>
    where
        P: AsRef<std::path::Path>;
}

/// Columns: date, type, category, amount, description, member_id. The first
/// row is a header.
pub(crate) struct TransactionsCsvDatasourceImpl;

impl TransactionsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl TransactionsCsvDatasource for TransactionsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<NewTransaction>, ServerError> {
        csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_date = r.get(0).unwrap_or("");
                    let raw_type = r.get(1).unwrap_or("");
                    let raw_category = r.get(2).unwrap_or("");
                    let raw_amount = r.get(3).unwrap_or("");
                    let raw_description = r.get(4).unwrap_or("");
                    let raw_member_id = match r.get(5).map(str::trim) {
                        Some(s) if !s.is_empty() => Some(s),
                        _ => None,
                    };

                    // Parse.
                    let date: ISODateModel = ISODateModel::from_str(raw_date)?;
                    let transaction_type: TransactionTypeModel =
                        TransactionTypeModel::from_str(raw_type)?;
                    let amount: AmountModel = AmountModel::from_str(raw_amount)?;

                    // Build.
                    Ok(NewTransaction {
                        transaction_type: transaction_type.into(),
                        category: raw_category.trim().to_string(),
                        amount: amount.into(),
                        date: date.into(),
                        description: raw_description.trim().to_string(),
                        member_id: raw_member_id.map(MemberId::new),
                    })
                })
            })
            .collect()
    }

    fn from_file<P>(&self, path: P) -> Result<Vec<NewTransaction>, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.from_string(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::entities::TransactionType;

    #[test]
    fn parses_income_and_expense_rows() {
        let csv = "date,type,category,amount,description,member_id\n\
                   2026-01-15,income,Aidat,\"2,500\",Yıllık aidat,4\n\
                   2026-01-20,expense,Kira,1200,Ocak kirası,\n";
        let rows = TransactionsCsvDatasourceImpl::new().from_string(csv).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].transaction_type, TransactionType::Income);
        assert_eq!(rows[0].amount, 2500.0);
        assert_eq!(rows[0].member_id, Some(MemberId::new("4")));
        assert_eq!(rows[1].date, NaiveDate::from_ymd_opt(2026, 1, 20).unwrap());
        assert_eq!(rows[1].member_id, None);
    }

    #[test]
    fn rejects_unknown_type_and_non_positive_amount() {
        let datasource = TransactionsCsvDatasourceImpl::new();
        assert!(datasource
            .from_string("h\n2026-01-15,transfer,Aidat,10,x,\n")
            .is_err());
        assert!(datasource
            .from_string("h\n2026-01-15,income,Aidat,0,x,\n")
            .is_err());
    }
}
