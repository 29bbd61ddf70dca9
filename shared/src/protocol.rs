use crate::{Role, User};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether requests with this method carry a JSON body.
    pub fn has_body(&self) -> bool {
        !matches!(self, HttpMethod::Get)
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize + DeserializeOwned {
    /// The response type returned by this request.
    type Response: Serialize + DeserializeOwned;
    /// The URL path, relative to the API base URL.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
}

// =========================================================
// Responses
// =========================================================

/// Body returned by both login and register.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

/// Error body shape used by the backend. Either field may carry the text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    pub fn text(&self) -> Option<&str> {
        let non_blank = |s: &&str| !s.trim().is_empty();
        self.message
            .as_deref()
            .filter(non_blank)
            .or_else(|| self.error.as_deref().filter(non_blank))
    }
}

// =========================================================
// Request Definitions
// =========================================================

/// Sign in with email and password
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for LoginRequest {
    type Response = AuthResponse;
    const PATH: &'static str = "/auth/login";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Create an account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

impl ApiRequest for RegisterRequest {
    type Response = AuthResponse;
    const PATH: &'static str = "/auth/register";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Invalidate the refresh token server-side
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl ApiRequest for LogoutRequest {
    type Response = ();
    const PATH: &'static str = "/auth/logout";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// Fetch the full record of the current user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRequest;

impl ApiRequest for ProfileRequest {
    type Response = User;
    const PATH: &'static str = "/auth/profile";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// Update the current user's profile.
///
/// The server answers with a partial user, which is merged into the
/// existing one rather than replacing it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl ApiRequest for UpdateProfileRequest {
    type Response = Value;
    const PATH: &'static str = "/users/profile";
    const METHOD: HttpMethod = HttpMethod::Put;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_profile_skips_unset_fields() {
        let req = UpdateProfileRequest {
            first_name: Some("Grace".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({ "firstName": "Grace" }));
    }

    #[test]
    fn test_error_body_prefers_message() {
        let body: ApiErrorBody =
            serde_json::from_value(json!({ "message": "Bad password", "error": "x" })).unwrap();
        assert_eq!(body.text(), Some("Bad password"));

        let body: ApiErrorBody = serde_json::from_value(json!({ "error": "Nope" })).unwrap();
        assert_eq!(body.text(), Some("Nope"));

        let body: ApiErrorBody = serde_json::from_value(json!({ "message": "  " })).unwrap();
        assert_eq!(body.text(), None);

        let body: ApiErrorBody =
            serde_json::from_value(json!({ "message": "", "error": "Token expired" })).unwrap();
        assert_eq!(body.text(), Some("Token expired"));
    }
}
