use chrono::NaiveDate;

use super::month::{MonthIndex, MONTHS_IN_YEAR};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberId(pub(crate) String);

/// The four ranked tiers, most senior first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    President,
    VicePresident,
    Management,
    Member,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberStatus {
    Active,
    Inactive,
}

/// One paid/unpaid slot per calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaymentLedger([bool; MONTHS_IN_YEAR]);

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub phone: String,
    pub role: Role,
    pub status: MemberStatus,
    pub join_date: Option<NaiveDate>,
    pub payments: PaymentLedger,
    pub total_paid: f64,
    pub last_payment_date: Option<NaiveDate>,
}

// --

impl MemberId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::President => "Başkan",
            Role::VicePresident => "Başkan Yardımcısı",
            Role::Management => "Yönetim",
            Role::Member => "Üye",
        }
    }

    /// Officers are the three board-level tiers.
    pub fn is_officer(&self) -> bool {
        !matches!(self, Role::Member)
    }
}

impl MemberStatus {
    pub fn toggled(self) -> Self {
        match self {
            MemberStatus::Active => MemberStatus::Inactive,
            MemberStatus::Inactive => MemberStatus::Active,
        }
    }
}

impl PaymentLedger {
    pub fn new(slots: [bool; MONTHS_IN_YEAR]) -> Self {
        Self(slots)
    }

    pub fn all_paid() -> Self {
        Self([true; MONTHS_IN_YEAR])
    }

    pub fn is_paid(&self, month: MonthIndex) -> bool {
        self.0[month.index()]
    }

    pub(crate) fn set(&mut self, month: MonthIndex, paid: bool) {
        self.0[month.index()] = paid;
    }

    pub fn paid_count(&self) -> usize {
        self.0.iter().filter(|paid| **paid).count()
    }

    pub fn slots(&self) -> &[bool; MONTHS_IN_YEAR] {
        &self.0
    }
}

impl Member {
    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }
}
