use crate::entities::{DuesRules, Member, MonthIndex, Role, MONTHS_IN_YEAR};

/// Pure dues arithmetic. The evaluation month is always passed in; nothing
/// here reads the clock.
pub(crate) struct DuesCalculator;

impl DuesCalculator {
    pub(crate) fn monthly_rate(role: Role, rules: &DuesRules) -> f64 {
        rules.annual_rate(role) / MONTHS_IN_YEAR as f64
    }

    /// Unpaid months from January through `current_month`, inclusive.
    pub(crate) fn owed_months(member: &Member, current_month: MonthIndex) -> Vec<MonthIndex> {
        current_month
            .through()
            .filter(|m| !member.payments.is_paid(*m))
            .collect()
    }

    pub(crate) fn year_to_date_debt(
        member: &Member,
        rules: &DuesRules,
        current_month: MonthIndex,
    ) -> f64 {
        let rate = Self::monthly_rate(member.role, rules);
        current_month
            .through()
            .filter(|m| !member.payments.is_paid(*m))
            .map(|_| rate)
            .sum()
    }
}
