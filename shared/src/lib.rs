use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const STORAGE_ACCESS_TOKEN: &str = "accessToken";
pub const STORAGE_REFRESH_TOKEN: &str = "refreshToken";
pub const STORAGE_SESSION: &str = "auth-storage";
pub const HEADER_AUTHORIZATION: &str = "Authorization";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "STUDENT",
            Role::Teacher => "TEACHER",
            Role::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Approval state of a teacher account. Only `Approved` unlocks teacher pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrationStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_status: Option<RegistrationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expertise: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_profile: Option<TeacherProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl User {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn registration_status(&self) -> Option<RegistrationStatus> {
        self.teacher_profile
            .as_ref()
            .and_then(|p| p.registration_status)
    }

    /// Overlays a partial user returned by the server onto this one.
    ///
    /// Only the top-level keys present in `patch` are replaced; everything
    /// else (including `id` and `createdAt`) is carried over.
    pub fn merge(&self, patch: &Value) -> Result<User, serde_json::Error> {
        let Value::Object(patch) = patch else {
            return Err(<serde_json::Error as serde::de::Error>::custom(
                "profile update response is not an object",
            ));
        };

        let mut merged: Map<String, Value> = match serde_json::to_value(self)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        for (key, value) in patch {
            merged.insert(key.clone(), value.clone());
        }

        serde_json::from_value(Value::Object(merged))
    }
}

// =========================================================
// 会话模型 (Session)
// =========================================================

/// In-memory view of the signed-in user and their tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user: Option<User>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub is_authenticated: bool,
    #[serde(skip)]
    pub is_loading: bool,
}

impl Session {
    /// `is_authenticated` implies both a user and an access token.
    pub fn is_consistent(&self) -> bool {
        !self.is_authenticated || (self.user.is_some() && self.access_token.is_some())
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn persisted(&self) -> PersistedSession {
        PersistedSession {
            user: self.user.clone(),
            access_token: self.access_token.clone(),
            refresh_token: self.refresh_token.clone(),
            is_authenticated: self.is_authenticated,
        }
    }
}

/// The slice of [`Session`] that survives a page reload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub is_authenticated: bool,
}

impl From<PersistedSession> for Session {
    fn from(p: PersistedSession) -> Self {
        Session {
            user: p.user,
            access_token: p.access_token,
            refresh_token: p.refresh_token,
            is_authenticated: p.is_authenticated,
            is_loading: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user() -> User {
        serde_json::from_value(json!({
            "id": "u-1",
            "email": "old@example.com",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "role": "TEACHER",
            "isActive": true,
            "teacherProfile": { "registrationStatus": "PENDING" },
            "createdAt": "2024-01-02T03:04:05Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_value(Role::Admin).unwrap(), json!("ADMIN"));
        let role: Role = serde_json::from_value(json!("STUDENT")).unwrap();
        assert_eq!(role, Role::Student);
    }

    #[test]
    fn test_merge_keeps_fields_missing_from_patch() {
        let existing = user();
        let merged = existing.merge(&json!({ "email": "new" })).unwrap();

        assert_eq!(merged.email, "new");
        assert_eq!(merged.id, existing.id);
        assert_eq!(merged.created_at, existing.created_at);
        assert_eq!(
            merged.registration_status(),
            Some(RegistrationStatus::Pending)
        );
    }

    #[test]
    fn test_merge_rejects_non_object() {
        assert!(user().merge(&json!("nope")).is_err());
    }

    #[test]
    fn test_is_loading_not_persisted() {
        let session = Session {
            is_loading: true,
            ..Session::default()
        };
        let json = serde_json::to_value(&session).unwrap();
        assert!(json.get("isLoading").is_none());

        let restored: Session = serde_json::from_value(json).unwrap();
        assert!(!restored.is_loading);
    }

    #[test]
    fn test_consistency() {
        let mut session = Session {
            is_authenticated: true,
            ..Session::default()
        };
        assert!(!session.is_consistent());

        session.user = Some(user());
        session.access_token = Some("t".to_string());
        assert!(session.is_consistent());
        assert_eq!(session.role(), Some(Role::Teacher));
    }
}
