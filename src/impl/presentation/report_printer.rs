use crate::entities::{Debtor, FinancialSummary, MemberStats};

use super::utils::format_amount;

pub(crate) struct ReportPrinter;

impl ReportPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print_report(
        &self,
        summary: &FinancialSummary,
        stats: &MemberStats,
        debtors: &[Debtor],
    ) -> String {
        let mut output = String::new();

        output.push_str(
            "; --- Members ------------------------------------------------------------------\n\n",
        );
        self.print_member_stats(&mut output, stats);
        output.push_str("\n\n");

        output.push_str(
            "; --- Income & Expenses --------------------------------------------------------\n\n",
        );
        self.print_summary(&mut output, summary);
        output.push_str("\n\n");

        output.push_str(
            "; --- Arrears ------------------------------------------------------------------\n\n",
        );
        self.print_debtors(&mut output, debtors);

        output
    }

    fn print_member_stats(&self, output: &mut String, stats: &MemberStats) {
        output.push_str(&format!("{:60} {:>17}\n", "total", stats.total));
        output.push_str(&format!("{:60} {:>17}\n", "active", stats.active));
        output.push_str(&format!("{:60} {:>17}\n", "inactive", stats.inactive));
        output.push_str(&format!("{:60} {:>17}\n", "management", stats.management));
    }

    fn print_summary(&self, output: &mut String, summary: &FinancialSummary) {
        output.push_str(&format!(
            "{:55} {:>22}\n",
            "income",
            format_amount(summary.total_income)
        ));
        output.push_str(&format!(
            "{:55} {:>22}\n",
            "expense",
            format_amount(summary.total_expense)
        ));
        for (category, total) in &summary.expense_by_category {
            output.push_str(&format!(
                "    {:51} {:>22}\n",
                category,
                format_amount(*total)
            ));
        }
        output.push_str(&format!(
            "{:55} {:>22}\n",
            "balance",
            format_amount(summary.balance)
        ));
    }

    fn print_debtors(&self, output: &mut String, debtors: &[Debtor]) {
        if debtors.is_empty() {
            output.push_str("(none)\n");
            return;
        }
        for debtor in debtors {
            output.push_str(&format!(
                "{:55} {:>22}\n",
                format!("{} ({})", debtor.member.name, debtor.member.role.label()),
                format_amount(debtor.debt)
            ));
            let months = debtor
                .owed_months
                .iter()
                .map(|m| m.name())
                .collect::<Vec<_>>()
                .join(", ");
            let prefix = "    ;";
            for line in textwrap::wrap(&months, 74) {
                output.push_str(&format!("{} {}\n", prefix, line));
            }
        }
    }
}
