use std::collections::HashMap;

use regex::Regex;

use crate::{
    domain::logic::utils::join_month_names,
    entities::{Member, MonthIndex, Role},
};

use super::utils::format_lira;

const TEMPLATE: &str = "{{Greeting}} {{Name}},\n\
{{Association}} aidat kayıtlarımızda {{Months}} {{MonthNoun}} ait ödemeniz görünmemektedir.\n\
{{Breakdown}}\n\
Toplam borcunuz: {{Total}} TL.\n\
Müsait olduğunuzda ödemenizi rica ederiz.";

pub(crate) struct ReminderTemplate<'a> {
    association_name: &'a str,
}

impl<'a> ReminderTemplate<'a> {
    pub(crate) fn new(association_name: &'a str) -> Self {
        Self { association_name }
    }

    /// Deterministic for the same inputs.
    pub(crate) fn render(&self, member: &Member, owed_months: &[MonthIndex], rate: f64) -> String {
        let breakdown = owed_months
            .iter()
            .map(|m| format!("- {}: {} TL", m.name(), format_lira(rate)))
            .collect::<Vec<_>>()
            .join("\n");
        let total = rate * owed_months.len() as f64;

        let placeholders: HashMap<&str, String> = [
            ("Greeting", greeting(member.role).to_string()),
            ("Name", member.name.clone()),
            ("Association", self.association_name.to_string()),
            ("Months", join_month_names(owed_months)),
            (
                "MonthNoun",
                if owed_months.len() == 1 {
                    "ayına"
                } else {
                    "aylarına"
                }
                .to_string(),
            ),
            ("Breakdown", breakdown),
            ("Total", format_lira(total)),
        ]
        .into_iter()
        .collect();

        replace_placeholders(TEMPLATE, &placeholders)
    }
}

fn greeting(role: Role) -> &'static str {
    match role {
        Role::President => "Sayın Başkanım",
        Role::VicePresident => "Sayın Başkan Yardımcımız",
        Role::Management => "Sayın Yönetim Kurulu Üyemiz",
        Role::Member => "Sayın Üyemiz",
    }
}

fn replace_placeholders(content: &str, placeholders: &HashMap<&str, String>) -> String {
    // Placeholders are of the form {{Key}}. Unknown keys are left in place.
    let placeholder_pattern =
        Regex::new(r"\{\{(\w+)\}\}").expect("hardcoded regex should be valid");
    placeholder_pattern
        .replace_all(content, |caps: &regex::Captures| {
            placeholders
                .get(&caps[1])
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
