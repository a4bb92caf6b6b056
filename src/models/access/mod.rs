//! Role-based access for CRM users.
//!
//! Roles form a three-level hierarchy: a user may open anything that requires
//! their own level or below. Office scoping is separate: super admins see
//! every office, everyone else only their own.

use serde::{Deserialize, Serialize};

/// User role, ordered by privilege.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Employee,
    Admin,
    SuperAdmin,
}

impl Role {
    /// Numeric level used for hierarchy comparisons.
    pub fn level(&self) -> u8 {
        match self {
            Self::Employee => 1,
            Self::Admin => 2,
            Self::SuperAdmin => 3,
        }
    }

    /// Role assigned by the demo login: addresses containing "super" get
    /// super admin, "admin" gets admin, anything else is an employee.
    pub fn from_email(email: &str) -> Self {
        if email.contains("super") {
            Self::SuperAdmin
        } else if email.contains("admin") {
            Self::Admin
        } else {
            Self::Employee
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Admin => "admin",
            Self::SuperAdmin => "super admin",
        }
    }
}

/// Signed-in CRM user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub office_id: String,
}

impl User {
    /// Demo login: role derived from the email, assigned to office "1".
    pub fn demo_login(email: impl Into<String>) -> Self {
        let email = email.into();
        Self {
            id: "1".to_string(),
            name: "Test User".to_string(),
            role: Role::from_email(&email),
            email,
            office_id: "1".to_string(),
        }
    }

    pub fn can_access(&self, required: Role) -> bool {
        self.role.level() >= required.level()
    }

    pub fn can_access_office(&self, office_id: &str) -> bool {
        self.role == Role::SuperAdmin || self.office_id == office_id
    }
}

/// Access check for an optional session; nobody signed in means no access.
pub fn can_access(user: Option<&User>, required: Role) -> bool {
    user.is_some_and(|u| u.can_access(required))
}

/// Office check for an optional session; nobody signed in means no access.
pub fn can_access_office(user: Option<&User>, office_id: &str) -> bool {
    user.is_some_and(|u| u.can_access_office(office_id))
}
