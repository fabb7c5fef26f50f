use super::member::MemberId;

/// One pending outbound reminder: the composed message and the deep link that
/// hands it to the messaging client.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchAction {
    pub member_id: MemberId,
    pub member_name: String,
    pub message: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    HandedOff,
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DispatchRecord {
    pub action: DispatchAction,
    pub outcome: DispatchOutcome,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DispatchReport {
    /// Actions that were attempted, in order.
    pub records: Vec<DispatchRecord>,
    /// Actions never attempted because the run was cancelled.
    pub skipped: Vec<DispatchAction>,
    pub cancelled: bool,
}

// --

impl DispatchReport {
    pub fn handed_off(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.outcome == DispatchOutcome::HandedOff)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.records.len() - self.handed_off()
    }
}
