use std::time::Duration;

use super::dues_rules::DuesRules;

/// What happens to the originally recorded dues income when a paid month is
/// marked unpaid again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReversalPolicy {
    /// Leave the income transaction in place. The income report and the
    /// member ledger diverge until someone reconciles them by hand.
    #[default]
    KeepIncome,
    /// Delete the matching dues income transaction for that member and month.
    VoidIncome,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub association_name: String,
    pub dues_category: String,
    /// Pause between consecutive reminder hand-offs.
    pub dispatch_interval: Duration,
    pub reversal_policy: ReversalPolicy,
    pub placeholder_phone: String,
    pub placeholder_name: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            association_name: "Patnoslular Derneği".to_string(),
            dues_category: "Aidat".to_string(),
            dispatch_interval: Duration::from_millis(1500),
            reversal_policy: ReversalPolicy::default(),
            placeholder_phone: "0555 000 0000".to_string(),
            placeholder_name: "İsimsiz Üye".to_string(),
        }
    }
}

/// Everything loaded from a settings document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EngineSettings {
    pub rules: DuesRules,
    pub config: EngineConfig,
}
