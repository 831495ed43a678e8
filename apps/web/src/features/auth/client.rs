//! Client wrappers for the AirWatch auth API endpoints. These helpers keep
//! endpoint paths and request shapes in one place so route code never builds
//! requests by hand, and they must never log token or password material.

use crate::{
    app_lib::{
        AppError, get_optional_json_with_credentials, post_empty_with_credentials, post_json,
        post_json_with_credentials_response,
    },
    features::auth::types::{
        ForgotPasswordRequest, LoginRequest, RegisterRequest, ResetPasswordRequest, UserSession,
        VerifyEmailRequest,
    },
};

/// Verifies an email token after the user follows the link.
pub async fn verify_email(request: &VerifyEmailRequest) -> Result<(), AppError> {
    post_json("/auth/verify-email", request).await
}

/// Submits a new password for the account tied to the reset token.
pub async fn reset_password(request: &ResetPasswordRequest) -> Result<(), AppError> {
    post_json("/auth/reset-password", request).await
}

/// Requests a password reset email without leaking account existence.
pub async fn forgot_password(request: &ForgotPasswordRequest) -> Result<(), AppError> {
    post_json("/auth/forgot-password", request).await
}

/// Logs in and allows the server to set the session cookie.
pub async fn login(request: &LoginRequest) -> Result<UserSession, AppError> {
    post_json_with_credentials_response("/auth/login", request).await
}

/// Registers a new account; the server sends the verification email.
pub async fn register(request: &RegisterRequest) -> Result<(), AppError> {
    post_json("/auth/register", request).await
}

/// Fetches the current session using cookie-based auth.
/// Returns `None` when the session is missing or expired.
pub async fn fetch_session() -> Result<Option<UserSession>, AppError> {
    get_optional_json_with_credentials("/auth/me").await
}

/// Clears the current session on the server.
pub async fn logout() -> Result<(), AppError> {
    post_empty_with_credentials("/auth/logout").await
}
