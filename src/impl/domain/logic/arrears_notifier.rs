use regex::Regex;

use crate::{
    entities::{Debtor, DispatchAction, DuesRules, EngineConfig, Member, MonthIndex},
    presentation::{reminder_template::ReminderTemplate, utils::encode_uri_component},
};

use super::{dues_calculator::DuesCalculator, utils::tr_lowercase};

pub(crate) struct ArrearsNotifier<'a> {
    rules: &'a DuesRules,
    config: &'a EngineConfig,
}

impl<'a> ArrearsNotifier<'a> {
    pub(crate) fn new(rules: &'a DuesRules, config: &'a EngineConfig) -> Self {
        Self { rules, config }
    }

    /// Active members with positive debt, in input order, optionally narrowed
    /// by a case-insensitive name/phone substring.
    pub(crate) fn build_debtors(
        &self,
        members: &[Member],
        current_month: MonthIndex,
        search_filter: Option<&str>,
    ) -> Vec<Debtor> {
        let needle = search_filter
            .map(|s| tr_lowercase(s.trim()))
            .filter(|s| !s.is_empty());
        members
            .iter()
            .filter(|m| m.is_active())
            .filter(|m| match &needle {
                Some(needle) => {
                    tr_lowercase(&m.name).contains(needle.as_str())
                        || tr_lowercase(&m.phone).contains(needle.as_str())
                }
                None => true,
            })
            .filter_map(|m| {
                let debt = DuesCalculator::year_to_date_debt(m, self.rules, current_month);
                (debt > 0.0).then(|| Debtor {
                    member: m.clone(),
                    debt,
                    owed_months: DuesCalculator::owed_months(m, current_month),
                })
            })
            .collect()
    }

    pub(crate) fn render_reminder(&self, member: &Member, owed_months: &[MonthIndex]) -> String {
        let rate = DuesCalculator::monthly_rate(member.role, self.rules);
        ReminderTemplate::new(&self.config.association_name).render(member, owed_months, rate)
    }

    /// One pending action per debtor, same order.
    pub(crate) fn plan_dispatch(&self, debtors: &[Debtor]) -> Vec<DispatchAction> {
        debtors
            .iter()
            .map(|d| {
                let message = self.render_reminder(&d.member, &d.owed_months);
                DispatchAction {
                    member_id: d.member.id.clone(),
                    member_name: d.member.name.clone(),
                    url: whatsapp_link(&d.member.phone, &message),
                    message,
                }
            })
            .collect()
    }
}

/// Deep link that opens a chat with `phone` prefilled with `message`.
pub(crate) fn whatsapp_link(phone: &str, message: &str) -> String {
    let non_digits = Regex::new(r"[^0-9]").expect("hardcoded regex should be valid");
    format!(
        "https://wa.me/{}?text={}",
        non_digits.replace_all(phone, ""),
        encode_uri_component(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{MemberId, MemberStatus, PaymentLedger, Role};

    fn member(id: &str, name: &str, phone: &str, status: MemberStatus) -> Member {
        Member {
            id: MemberId::new(id),
            name: name.to_string(),
            phone: phone.to_string(),
            role: Role::Member,
            status,
            join_date: None,
            payments: PaymentLedger::default(),
            total_paid: 0.0,
            last_payment_date: None,
        }
    }

    fn month(i: usize) -> MonthIndex {
        MonthIndex::new(i).unwrap()
    }

    #[test]
    fn excludes_inactive_and_settled_members_and_keeps_order() {
        let rules = DuesRules::default();
        let config = EngineConfig::default();
        let mut settled = member("2", "Mehmet Kaya", "0555 222 3344", MemberStatus::Active);
        settled.payments = PaymentLedger::all_paid();
        let members = vec![
            member("3", "Zeynep Acar", "0555 333 4455", MemberStatus::Active),
            settled,
            member("4", "Ali Veli", "0555 444 5566", MemberStatus::Inactive),
            member("1", "Burak Şen", "0555 111 2233", MemberStatus::Active),
        ];

        let debtors = ArrearsNotifier::new(&rules, &config).build_debtors(&members, month(1), None);
        let ids: Vec<&str> = debtors.iter().map(|d| d.member.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
        assert_eq!(debtors[0].owed_months, vec![month(0), month(1)]);
    }

    #[test]
    fn search_filter_matches_name_or_phone_case_insensitively() {
        let rules = DuesRules::default();
        let config = EngineConfig::default();
        let members = vec![
            member("1", "İlker Işık", "0555 111 2233", MemberStatus::Active),
            member("2", "Deniz Arslan", "0532 987 6543", MemberStatus::Active),
        ];
        let notifier = ArrearsNotifier::new(&rules, &config);

        let by_name = notifier.build_debtors(&members, month(0), Some("ilker"));
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].member.id.as_str(), "1");

        let by_phone = notifier.build_debtors(&members, month(0), Some("987"));
        assert_eq!(by_phone.len(), 1);
        assert_eq!(by_phone[0].member.id.as_str(), "2");

        assert_eq!(notifier.build_debtors(&members, month(0), Some("  ")).len(), 2);
    }

    #[test]
    fn link_strips_non_digits_and_encodes_text() {
        let url = whatsapp_link("+90 (555) 123-45 67", "Ocak ve Mart & çay");
        assert_eq!(
            url,
            "https://wa.me/905551234567?text=Ocak%20ve%20Mart%20%26%20%C3%A7ay"
        );
    }

    #[test]
    fn link_drops_non_ascii_digits_from_phone() {
        let url = whatsapp_link("+90 ٥٥٥ 123", "x");
        assert_eq!(url, "https://wa.me/90123?text=x");
    }

    #[test]
    fn plans_one_action_per_debtor() {
        let rules = DuesRules::default();
        let config = EngineConfig::default();
        let notifier = ArrearsNotifier::new(&rules, &config);
        let members = vec![
            member("1", "Burak Şen", "0555 111 2233", MemberStatus::Active),
            member("2", "Zeynep Acar", "0555 333 4455", MemberStatus::Active),
        ];
        let debtors = notifier.build_debtors(&members, month(2), None);
        let actions = notifier.plan_dispatch(&debtors);

        assert_eq!(actions.len(), 2);
        assert_eq!(actions[1].member_id.as_str(), "2");
        assert!(actions[0].url.starts_with("https://wa.me/05551112233?text="));
        assert!(actions[0].message.contains("Ocak, Şubat ve Mart"));
    }
}
