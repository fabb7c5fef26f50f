use std::{fs, str::FromStr as _};

use fractic_server_error::ServerError;

use crate::{
    data::models::role_model::RoleModel,
    domain::logic::member_intake::MemberIntake,
    entities::{BulkMemberInput, EngineConfig, Role},
    errors::{InvalidCsv, ReadError},
};

/// A bulk-import row together with the role it was listed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MemberRow {
    pub input: BulkMemberInput,
    pub role: Role,
}

pub(crate) trait MembersCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<MemberRow>, ServerError>;

    fn from_file<P>(&self, path: P) -> Result<Vec<MemberRow>, ServerError>
    where
        P: AsRef<std::path::Path>;
}

/// Reads "name, phone[, role]" lines, one member per line. There is no header
/// row and quotes are not special; blank lines are skipped and blank fields
/// replaced by placeholders.
pub(crate) struct MembersCsvDatasourceImpl<'a> {
    config: &'a EngineConfig,
}

impl<'a> MembersCsvDatasourceImpl<'a> {
    pub(crate) fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }
}

impl<'a> MembersCsvDatasource for MembersCsvDatasourceImpl<'a> {
    fn from_string(&self, s: &str) -> Result<Vec<MemberRow>, ServerError> {
        let intake = MemberIntake::new(self.config);
        csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(csv::Trim::All)
            .from_reader(s.as_bytes())
            .records()
            .filter(|r| match r {
                Ok(r) => r.iter().any(|field| !field.is_empty()),
                Err(_) => true,
            })
            .map(|r| {
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_name = r.get(0).unwrap_or("");
                    let raw_phone = r.get(1).unwrap_or("");
                    let raw_role = r.get(2).unwrap_or("");

                    // Parse.
                    let role: RoleModel = RoleModel::from_str(raw_role)?;

                    // Build.
                    Ok(MemberRow {
                        input: intake.normalize(raw_name, raw_phone),
                        role: role.into(),
                    })
                })
            })
            .collect()
    }

    fn from_file<P>(&self, path: P) -> Result<Vec<MemberRow>, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        self.from_string(&fs::read_to_string(path).map_err(|e| ReadError::with_debug(&e))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_with_placeholders_and_roles() {
        let config = EngineConfig::default();
        let rows = MembersCsvDatasourceImpl::new(&config)
            .from_string("ali yılmaz, 0555 111 2233\n\n   \nveli demir\n, 0532 000 1122, Yönetim\n")
            .unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].input.name, "ali yılmaz");
        assert_eq!(rows[0].input.phone, "0555 111 2233");
        assert_eq!(rows[0].role, Role::Member);
        assert_eq!(rows[1].input.phone, "0555 000 0000");
        assert_eq!(rows[2].input.name, "İsimsiz Üye");
        assert_eq!(rows[2].role, Role::Management);
    }

    #[test]
    fn stray_quote_does_not_merge_lines() {
        let config = EngineConfig::default();
        let rows = MembersCsvDatasourceImpl::new(&config)
            .from_string(
                "\"Ali Kaya, 0555 111 2233\nVeli Demir, 0532 222 3344\nAyşe Can, 0533 333 4455\n",
            )
            .unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].input.name, "\"Ali Kaya");
        assert_eq!(rows[0].input.phone, "0555 111 2233");
        assert_eq!(rows[1].input.name, "Veli Demir");
        assert_eq!(rows[2].input.phone, "0533 333 4455");
    }
}
