use std::fs;

use fractic_server_error::ServerError;
use ron::from_str;

use crate::{
    data::models::engine_settings_model::EngineSettingsModel,
    entities::EngineSettings,
    errors::{InvalidRon, ReadError},
};

pub(crate) trait SettingsRonDatasource {
    fn from_string(&self, s: &str) -> Result<EngineSettings, ServerError>;

    fn from_file<P>(&self, path: P) -> Result<EngineSettings, ServerError>
    where
        P: AsRef<std::path::Path>;
}

pub(crate) struct SettingsRonDatasourceImpl;

impl SettingsRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl SettingsRonDatasource for SettingsRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<EngineSettings, ServerError> {
        let model: EngineSettingsModel =
            from_str(s).map_err(|e| InvalidRon::with_debug("EngineSettings", &e))?;
        let settings: EngineSettings = model.into();
        settings.rules.validate()?;
        Ok(settings)
    }

    fn from_file<P>(&self, path: P) -> Result<EngineSettings, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.from_string(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::entities::{DuesRules, ReversalPolicy};

    #[test]
    fn missing_fields_take_defaults() {
        let settings = SettingsRonDatasourceImpl::new()
            .from_string("(rules: (member: 3000.0), reversal_policy: VoidIncome)")
            .unwrap();
        assert_eq!(settings.rules.member, 3000.0);
        assert_eq!(settings.rules.president, DuesRules::default().president);
        assert_eq!(settings.config.reversal_policy, ReversalPolicy::VoidIncome);
        assert_eq!(settings.config.dispatch_interval, Duration::from_millis(1500));
        assert_eq!(settings.config.dues_category, "Aidat");
    }

    #[test]
    fn rejects_negative_rates_and_bad_syntax() {
        let datasource = SettingsRonDatasourceImpl::new();
        assert!(datasource.from_string("(rules: (management: -1.0))").is_err());
        assert!(datasource.from_string("(rules: ").is_err());
    }
}
