use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::{
        members_csv_datasource::{MembersCsvDatasource as _, MembersCsvDatasourceImpl, MemberRow},
        settings_ron_datasource::{SettingsRonDatasource as _, SettingsRonDatasourceImpl},
        transactions_csv_datasource::{
            TransactionsCsvDatasource as _, TransactionsCsvDatasourceImpl,
        },
    },
    dispatch::DispatchCancellation,
    domain::{
        logic::{
            arrears_notifier::ArrearsNotifier,
            drift_detector::DriftDetector,
            dues_calculator::DuesCalculator,
            financial_summary::{member_stats, summarize_transactions},
            member_intake::MemberIntake,
        },
        usecases::{
            notify_arrears_usecase::NotifyArrearsUsecase,
            toggle_payment_usecase::{TogglePaymentUsecase as _, TogglePaymentUsecaseImpl},
        },
    },
    entities::{
        Debtor, DispatchAction, DispatchReport, DuesRules, EngineConfig, EngineSettings,
        FinancialSummary, LedgerDrift, Member, MemberStats, MonthIndex, NewTransaction, Role,
        ToggleReport, Transaction,
    },
    presentation::report_printer::ReportPrinter,
    repositories::{MemberRepository, MessagingGateway, TransactionRepository},
};

/// Entry point of the dues engine. Holds the current rule table and
/// configuration; the member and transaction collections stay with the
/// caller and are written through the two repositories.
pub struct DuesEngine<M, T>
where
    M: MemberRepository,
    T: TransactionRepository,
{
    rules: DuesRules,
    config: EngineConfig,
    toggle_usecase: TogglePaymentUsecaseImpl<M, T>,
    printer: ReportPrinter,
}

impl<M, T> DuesEngine<M, T>
where
    M: MemberRepository,
    T: TransactionRepository,
{
    pub fn new(
        member_repository: M,
        transaction_repository: T,
        settings: EngineSettings,
    ) -> Result<Self, ServerError> {
        Ok(Self {
            rules: settings.rules.validate()?,
            config: settings.config,
            toggle_usecase: TogglePaymentUsecaseImpl::new(
                member_repository,
                transaction_repository,
            ),
            printer: ReportPrinter::new(),
        })
    }

    /// Builds the engine from a RON settings document.
    pub fn from_settings_string(
        member_repository: M,
        transaction_repository: T,
        settings_ron: &str,
    ) -> Result<Self, ServerError> {
        let settings = SettingsRonDatasourceImpl::new().from_string(settings_ron)?;
        Self::new(member_repository, transaction_repository, settings)
    }

    pub fn from_settings_file<P>(
        member_repository: M,
        transaction_repository: T,
        settings_ron: P,
    ) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        let settings = SettingsRonDatasourceImpl::new().from_file(settings_ron)?;
        Self::new(member_repository, transaction_repository, settings)
    }

    pub fn rules(&self) -> &DuesRules {
        &self.rules
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replaces the rule table. Applies retroactively to every month.
    pub fn update_rules(&mut self, rules: DuesRules) -> Result<(), ServerError> {
        self.rules = rules.validate()?;
        tracing::info!(rules = ?self.rules, "dues rules updated");
        Ok(())
    }

    // Dues.
    // ---

    pub fn monthly_rate(&self, role: Role) -> f64 {
        DuesCalculator::monthly_rate(role, &self.rules)
    }

    pub fn year_to_date_debt(&self, member: &Member, current_month: MonthIndex) -> f64 {
        DuesCalculator::year_to_date_debt(member, &self.rules, current_month)
    }

    /// Flips one month of a member's ledger and persists the result. See
    /// `ToggleReport::status` for whether both writes went through.
    pub async fn toggle_payment(
        &self,
        member: &Member,
        month: MonthIndex,
        today: NaiveDate,
        transactions: &[Transaction],
    ) -> ToggleReport {
        self.toggle_usecase
            .toggle_payment(member, month, today, &self.rules, &self.config, transactions)
            .await
    }

    pub async fn toggle_status(&self, member: &Member) -> Result<Member, ServerError> {
        self.toggle_usecase.toggle_status(member).await
    }

    /// Saves an edited member. A role change is picked up by every later
    /// debt calculation, including for months already past.
    pub async fn update_member(&self, member: &Member) -> Result<Member, ServerError> {
        self.toggle_usecase.update_member(member, &self.config).await
    }

    // Arrears.
    // ---

    pub fn build_debtors(
        &self,
        members: &[Member],
        current_month: MonthIndex,
        search_filter: Option<&str>,
    ) -> Vec<Debtor> {
        ArrearsNotifier::new(&self.rules, &self.config).build_debtors(
            members,
            current_month,
            search_filter,
        )
    }

    pub fn render_reminder(&self, member: &Member, owed_months: &[MonthIndex]) -> String {
        ArrearsNotifier::new(&self.rules, &self.config).render_reminder(member, owed_months)
    }

    pub fn plan_dispatch(&self, debtors: &[Debtor]) -> Vec<DispatchAction> {
        ArrearsNotifier::new(&self.rules, &self.config).plan_dispatch(debtors)
    }

    /// Sends one reminder per debtor, throttled by the configured interval.
    pub async fn dispatch_all<G>(
        &self,
        debtors: &[Debtor],
        gateway: &G,
        cancellation: DispatchCancellation,
    ) -> DispatchReport
    where
        G: MessagingGateway + ?Sized,
    {
        let actions = self.plan_dispatch(debtors);
        NotifyArrearsUsecase::new(self.config.dispatch_interval)
            .dispatch_all(actions, gateway, cancellation)
            .await
    }

    // Intake & import.
    // ---

    /// Turns "name, phone[, role]" lines into new members. Ids continue on
    /// from `existing_count`.
    pub fn admit_members_from_string(
        &self,
        text: &str,
        existing_count: usize,
        today: NaiveDate,
    ) -> Result<Vec<Member>, ServerError> {
        let rows = MembersCsvDatasourceImpl::new(&self.config).from_string(text)?;
        Ok(self.admit_rows(rows, existing_count, today))
    }

    pub fn admit_members_from_file<P>(
        &self,
        path: P,
        existing_count: usize,
        today: NaiveDate,
    ) -> Result<Vec<Member>, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        let rows = MembersCsvDatasourceImpl::new(&self.config).from_file(path)?;
        Ok(self.admit_rows(rows, existing_count, today))
    }

    pub fn transactions_from_string(&self, csv: &str) -> Result<Vec<NewTransaction>, ServerError> {
        TransactionsCsvDatasourceImpl::new().from_string(csv)
    }

    pub fn transactions_from_file<P>(&self, path: P) -> Result<Vec<NewTransaction>, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        TransactionsCsvDatasourceImpl::new().from_file(path)
    }

    fn admit_rows(&self, rows: Vec<MemberRow>, existing_count: usize, today: NaiveDate) -> Vec<Member> {
        let (inputs, roles): (Vec<_>, Vec<_>) =
            rows.into_iter().map(|row| (row.input, row.role)).unzip();
        MemberIntake::new(&self.config)
            .admit(&inputs, existing_count, today)
            .into_iter()
            .zip(roles)
            .map(|(member, role)| Member { role, ..member })
            .collect()
    }

    // Reconciliation & reporting.
    // ---

    pub fn detect_drift(&self, members: &[Member], transactions: &[Transaction]) -> Vec<LedgerDrift> {
        let drifts = DriftDetector::new(&self.config.dues_category).detect(members, transactions);
        for drift in &drifts {
            tracing::warn!(
                member = %drift.member_id,
                recorded = drift.recorded_total_paid,
                per_log = drift.transaction_total,
                "member total_paid disagrees with transaction log"
            );
        }
        drifts
    }

    /// Returns the member with `total_paid` recomputed from the transaction
    /// log. Persisting it is up to the caller.
    pub fn repair_member(&self, member: &Member, transactions: &[Transaction]) -> Member {
        DriftDetector::new(&self.config.dues_category).repair(member, transactions)
    }

    pub fn summarize(&self, transactions: &[Transaction]) -> FinancialSummary {
        summarize_transactions(transactions)
    }

    pub fn member_stats(&self, members: &[Member]) -> MemberStats {
        member_stats(members)
    }

    pub fn print_report(
        &self,
        members: &[Member],
        transactions: &[Transaction],
        current_month: MonthIndex,
    ) -> String {
        self.printer.print_report(
            &self.summarize(transactions),
            &self.member_stats(members),
            &self.build_debtors(members, current_month, None),
        )
    }
}
