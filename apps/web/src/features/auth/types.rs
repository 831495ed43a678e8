//! Request and response types for auth-related API calls. These payloads
//! carry credentials and verification/reset tokens, so they must never be
//! logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyEmailRequest {
    pub token: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub name: Option<String>,
    pub password: String,
}

/// Session summary returned by the API to hydrate auth state.
/// This mirrors cookie-backed session state and contains no secrets.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSession {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: String,
    pub is_verified: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_session_round_trips_through_json() {
        let session = UserSession {
            id: 7,
            username: "ada".to_string(),
            email: Some("ada@example.com".to_string()),
            name: Some("Ada".to_string()),
            role: "admin".to_string(),
            is_verified: true,
        };

        let json = serde_json::to_string(&session).expect("Failed to serialize");
        assert!(json.contains("ada@example.com"));

        let deserialized: UserSession =
            serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(deserialized, session);
    }

    #[test]
    fn user_session_tolerates_missing_optional_fields() {
        let json = r#"{"id":1,"username":"sam","email":null,"name":null,"role":"user","is_verified":false}"#;
        let session: UserSession = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(session.role, "user");
        assert!(!session.is_verified);
    }
}
