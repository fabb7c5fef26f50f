use fractic_server_error::ServerError;

use crate::errors::InvalidDuesRate;

use super::{member::Role, month::MONTHS_IN_YEAR};

/// Annual dues per role tier. There is no history: whatever value is current
/// applies to every month, past and future.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuesRules {
    pub president: f64,
    pub vice_president: f64,
    pub management: f64,
    pub member: f64,
}

impl Default for DuesRules {
    fn default() -> Self {
        Self {
            president: 30000.0,
            vice_president: 30000.0,
            management: 18000.0,
            member: 2500.0,
        }
    }
}

impl DuesRules {
    pub fn annual_rate(&self, role: Role) -> f64 {
        match role {
            Role::President => self.president,
            Role::VicePresident => self.vice_president,
            Role::Management => self.management,
            Role::Member => self.member,
        }
    }

    /// Sets the president and vice president rates together, which is how
    /// the association edits them.
    pub fn with_officer_rate(self, rate: f64) -> Self {
        Self {
            president: rate,
            vice_president: rate,
            ..self
        }
    }

    pub fn monthly_rates(&self) -> [(Role, f64); 4] {
        [
            Role::President,
            Role::VicePresident,
            Role::Management,
            Role::Member,
        ]
        .map(|role| (role, self.annual_rate(role) / MONTHS_IN_YEAR as f64))
    }

    pub fn validate(self) -> Result<Self, ServerError> {
        for (role, rate) in [
            (Role::President, self.president),
            (Role::VicePresident, self.vice_president),
            (Role::Management, self.management),
            (Role::Member, self.member),
        ] {
            if !rate.is_finite() || rate < 0.0 {
                return Err(InvalidDuesRate::new(role.label(), rate));
            }
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn officer_rate_updates_both_senior_tiers() {
        let rules = DuesRules::default().with_officer_rate(24000.0);
        assert_eq!(rules.president, 24000.0);
        assert_eq!(rules.vice_president, 24000.0);
        assert_eq!(rules.management, 18000.0);
    }

    #[test]
    fn rejects_negative_rates() {
        let rules = DuesRules {
            member: -1.0,
            ..Default::default()
        };
        assert!(rules.validate().is_err());
        assert!(DuesRules::default().validate().is_ok());
    }
}
