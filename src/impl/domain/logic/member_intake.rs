use chrono::NaiveDate;

use crate::entities::{
    BulkMemberInput, EngineConfig, Member, MemberId, MemberStatus, PaymentLedger, Role,
};

use super::utils::tr_title_case;

pub(crate) struct MemberIntake<'a> {
    config: &'a EngineConfig,
}

impl<'a> MemberIntake<'a> {
    pub(crate) fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Fills in placeholders for blank fields of a raw row.
    pub(crate) fn normalize(&self, name: &str, phone: &str) -> BulkMemberInput {
        let name = name.trim();
        let phone = phone.trim();
        BulkMemberInput {
            name: if name.is_empty() {
                self.config.placeholder_name.clone()
            } else {
                name.to_string()
            },
            phone: if phone.is_empty() {
                self.config.placeholder_phone.clone()
            } else {
                phone.to_string()
            },
        }
    }

    /// Applies the same name and phone clean-up to an edited member. Role,
    /// status and ledger are taken as given.
    pub(crate) fn revise(&self, member: &Member) -> Member {
        let input = self.normalize(&member.name, &member.phone);
        Member {
            name: tr_title_case(&input.name),
            phone: input.phone,
            ..member.clone()
        }
    }

    /// New members start active, as ordinary members, with nothing paid. Ids
    /// continue on from `existing_count`.
    pub(crate) fn admit(
        &self,
        inputs: &[BulkMemberInput],
        existing_count: usize,
        today: NaiveDate,
    ) -> Vec<Member> {
        inputs
            .iter()
            .enumerate()
            .map(|(i, input)| Member {
                id: MemberId::new((existing_count + i + 1).to_string()),
                name: tr_title_case(&input.name),
                phone: input.phone.clone(),
                role: Role::Member,
                status: MemberStatus::Active,
                join_date: Some(today),
                payments: PaymentLedger::default(),
                total_paid: 0.0,
                last_payment_date: None,
            })
            .collect()
    }
}
