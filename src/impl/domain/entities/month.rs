use chrono::{Datelike as _, NaiveDate};
use fractic_server_error::ServerError;

use crate::errors::InvalidMonthIndex;

pub const MONTHS_IN_YEAR: usize = 12;

const MONTH_NAMES: [&str; MONTHS_IN_YEAR] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

/// Zero-based calendar month (0 = January, 11 = December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthIndex(usize);

impl MonthIndex {
    pub const JANUARY: MonthIndex = MonthIndex(0);
    pub const DECEMBER: MonthIndex = MonthIndex(MONTHS_IN_YEAR - 1);

    pub fn new(index: usize) -> Result<Self, ServerError> {
        if index < MONTHS_IN_YEAR {
            Ok(Self(index))
        } else {
            Err(InvalidMonthIndex::new(index))
        }
    }

    /// Month cursor for the given evaluation date.
    pub fn of(date: NaiveDate) -> Self {
        Self(date.month0() as usize)
    }

    pub fn index(&self) -> usize {
        self.0
    }

    /// 1-based month number, as used in human-facing descriptions.
    pub fn number(&self) -> usize {
        self.0 + 1
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.0]
    }

    /// All months from January through this one, inclusive.
    pub fn through(self) -> impl Iterator<Item = MonthIndex> {
        (0..=self.0).map(MonthIndex)
    }

    pub fn all() -> impl Iterator<Item = MonthIndex> {
        (0..MONTHS_IN_YEAR).map(MonthIndex)
    }
}

impl std::fmt::Display for MonthIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
