use super::{member::Member, month::MonthIndex};

/// An active member with a positive year-to-date debt, as of the evaluation
/// month the list was built for.
#[derive(Debug, Clone, PartialEq)]
pub struct Debtor {
    pub member: Member,
    pub debt: f64,
    pub owed_months: Vec<MonthIndex>,
}
