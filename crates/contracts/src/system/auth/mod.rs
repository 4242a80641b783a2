use serde::{Deserialize, Serialize};

use super::roles::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Error body returned by the backend on 4xx/5xx.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Authenticated user as returned by login and kept in session storage.
///
/// `role` stays a raw string so that an unrecognised value does not make the
/// whole object unreadable; callers resolve it through [`UserInfo::role`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub role: String,
}

impl UserInfo {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }

    /// Single letter for the avatar bubble.
    pub fn initial(&self) -> String {
        self.display_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "U".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_accepts_mongo_id_and_unknown_role() {
        let user: UserInfo =
            serde_json::from_str(r#"{"_id":"42","username":"abebe","role":"Janitor"}"#).unwrap();
        assert_eq!(user.id, "42");
        assert_eq!(user.role(), None);
        assert_eq!(user.display_name(), "abebe");
    }

    #[test]
    fn display_name_prefers_non_blank_name() {
        let mut user = UserInfo {
            id: "1".into(),
            username: "hod".into(),
            name: Some("  ".into()),
            email: None,
            role: "DepartmentHead".into(),
        };
        assert_eq!(user.display_name(), "hod");
        user.name = Some("Dr. Hana".into());
        assert_eq!(user.display_name(), "Dr. Hana");
        assert_eq!(user.initial(), "D");
        assert_eq!(user.role(), Some(Role::DepartmentHead));
    }

    #[test]
    fn register_request_serialises_role_wire_name() {
        let req = RegisterRequest {
            username: "sm".into(),
            email: "sm@astu.edu.et".into(),
            password: "secret".into(),
            role: Role::StoreManager,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["role"], "StoreManager");
    }
}
