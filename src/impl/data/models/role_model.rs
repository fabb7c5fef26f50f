use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::{domain::logic::utils::tr_lowercase, entities::Role};

/// Role as written in imported rows. Accepts the display labels and the
/// English keys; anything else falls back to an ordinary member rather than
/// failing the row.
#[derive(Debug)]
pub(crate) struct RoleModel(Role);
impl FromStr for RoleModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let role = match tr_lowercase(s.trim()).as_str() {
            "başkan" | "president" => Role::President,
            "başkan yardımcısı" | "vice_president" => Role::VicePresident,
            "yönetim" | "management" => Role::Management,
            "üye" | "member" | "" => Role::Member,
            unknown => {
                tracing::warn!(role = unknown, "unrecognized role, using ordinary member");
                Role::Member
            }
        };
        Ok(RoleModel(role))
    }
}

impl Into<Role> for RoleModel {
    fn into(self) -> Role {
        self.0
    }
}
