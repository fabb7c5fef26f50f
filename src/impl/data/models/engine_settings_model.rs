use std::time::Duration;

use crate::entities::{DuesRules, EngineConfig, EngineSettings, ReversalPolicy};

#[derive(Debug, serde_derive::Deserialize)]
#[serde(default)]
pub(crate) struct DuesRulesModel {
    president: f64,
    vice_president: f64,
    management: f64,
    member: f64,
}

#[derive(Debug, serde_derive::Deserialize)]
pub(crate) enum ReversalPolicyModel {
    KeepIncome,
    VoidIncome,
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(default)]
pub(crate) struct EngineSettingsModel {
    rules: DuesRulesModel,
    association_name: String,
    dues_category: String,
    dispatch_interval_ms: u64,
    reversal_policy: ReversalPolicyModel,
    placeholder_phone: String,
    placeholder_name: String,
}

impl Default for DuesRulesModel {
    fn default() -> Self {
        let rules = DuesRules::default();
        Self {
            president: rules.president,
            vice_president: rules.vice_president,
            management: rules.management,
            member: rules.member,
        }
    }
}

impl Default for EngineSettingsModel {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            rules: DuesRulesModel::default(),
            association_name: config.association_name,
            dues_category: config.dues_category,
            dispatch_interval_ms: config.dispatch_interval.as_millis() as u64,
            reversal_policy: ReversalPolicyModel::KeepIncome,
            placeholder_phone: config.placeholder_phone,
            placeholder_name: config.placeholder_name,
        }
    }
}

impl Into<DuesRules> for DuesRulesModel {
    fn into(self) -> DuesRules {
        DuesRules {
            president: self.president,
            vice_president: self.vice_president,
            management: self.management,
            member: self.member,
        }
    }
}

impl Into<ReversalPolicy> for ReversalPolicyModel {
    fn into(self) -> ReversalPolicy {
        match self {
            ReversalPolicyModel::KeepIncome => ReversalPolicy::KeepIncome,
            ReversalPolicyModel::VoidIncome => ReversalPolicy::VoidIncome,
        }
    }
}

impl Into<EngineSettings> for EngineSettingsModel {
    fn into(self) -> EngineSettings {
        EngineSettings {
            rules: self.rules.into(),
            config: EngineConfig {
                association_name: self.association_name,
                dues_category: self.dues_category,
                dispatch_interval: Duration::from_millis(self.dispatch_interval_ms),
                reversal_policy: self.reversal_policy.into(),
                placeholder_phone: self.placeholder_phone,
                placeholder_name: self.placeholder_name,
            },
        }
    }
}
