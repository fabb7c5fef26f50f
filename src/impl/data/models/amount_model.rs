use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::{InvalidAmount, NonPositiveAmount};

/// A strictly positive amount. Thousands separators (',') are accepted.
#[derive(Debug)]
pub(crate) struct AmountModel(pub f64);
impl FromStr for AmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().replace(",", "");
        let amount = raw
            .parse::<f64>()
            .map_err(|_| InvalidAmount::new(s.trim()))?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(NonPositiveAmount::new(amount));
        }
        Ok(AmountModel(amount))
    }
}

impl Into<f64> for AmountModel {
    fn into(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_thousands_separators() {
        let amount: f64 = AmountModel::from_str(" 1,250.50 ").unwrap().into();
        assert_eq!(amount, 1250.5);
    }

    #[test]
    fn rejects_zero_negative_and_garbage() {
        assert!(AmountModel::from_str("0").is_err());
        assert!(AmountModel::from_str("-5").is_err());
        assert!(AmountModel::from_str("abc").is_err());
    }
}
