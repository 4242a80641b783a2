use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Access-control category of an authenticated user.
///
/// Wire names match the backend exactly (`ARA`, `SARA`, `DepartmentHead`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Student,
    Lecturer,
    #[serde(rename = "ARA")]
    Ara,
    #[serde(rename = "SARA")]
    Sara,
    DepartmentHead,
    StoreManager,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Student,
        Role::Lecturer,
        Role::Ara,
        Role::Sara,
        Role::DepartmentHead,
        Role::StoreManager,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Lecturer => "Lecturer",
            Role::Ara => "ARA",
            Role::Sara => "SARA",
            Role::DepartmentHead => "DepartmentHead",
            Role::StoreManager => "StoreManager",
        }
    }

    /// Human readable name shown under the sidebar brand.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Lecturer => "Lecturer",
            Role::Ara => "ARA",
            Role::Sara => "SARA",
            Role::DepartmentHead => "Head of Department",
            Role::StoreManager => "Store Manager",
        }
    }

    /// Parses a wire name. Matching is exact: `ara` is not `ARA`.
    pub fn parse(value: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.as_str() == value)
    }

    /// Roles whose requests go through the store manager's staff queue.
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Lecturer | Role::Ara | Role::Sara)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s).ok_or_else(|| format!("Unknown role: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip_through_serde() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
            let back: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(back, role);
        }
    }

    #[test]
    fn parse_is_exact() {
        assert_eq!(Role::parse("ARA"), Some(Role::Ara));
        assert_eq!(Role::parse("DepartmentHead"), Some(Role::DepartmentHead));
        assert_eq!(Role::parse("ara"), None);
        assert_eq!(Role::parse("Admin"), None);
        assert!("Janitor".parse::<Role>().is_err());
    }

    #[test]
    fn staff_roles() {
        assert!(Role::Lecturer.is_staff());
        assert!(Role::Sara.is_staff());
        assert!(!Role::Student.is_staff());
        assert!(!Role::StoreManager.is_staff());
    }
}
