//! Capability interface for the auth backend. Routes and guards receive this
//! through `AuthContext` instead of calling the HTTP client directly, so
//! tests can substitute a stub service and no component depends on ambient
//! network access.

use std::future::Future;
use std::pin::Pin;

use crate::app_lib::AppError;
use crate::features::auth::types::{RegisterRequest, UserSession};

/// Boxed single-threaded future returned by `AuthApi` methods.
pub type ApiFuture<T> = Pin<Box<dyn Future<Output = Result<T, AppError>>>>;

/// The auth operations the frontend consumes. Token and password arguments
/// are owned so implementations can move them into their futures.
pub trait AuthApi {
    fn verify_email(&self, token: String) -> ApiFuture<()>;
    fn reset_password(
        &self,
        token: String,
        password: String,
        confirm_password: String,
    ) -> ApiFuture<()>;
    fn forgot_password(&self, email: String) -> ApiFuture<()>;
    fn login(&self, username: String, password: String) -> ApiFuture<UserSession>;
    fn register(&self, request: RegisterRequest) -> ApiFuture<()>;
    fn fetch_session(&self) -> ApiFuture<Option<UserSession>>;
    fn logout(&self) -> ApiFuture<()>;
}

/// Production implementation backed by the HTTP client wrappers.
#[cfg(target_arch = "wasm32")]
pub struct HttpAuthApi;

#[cfg(target_arch = "wasm32")]
impl AuthApi for HttpAuthApi {
    fn verify_email(&self, token: String) -> ApiFuture<()> {
        use crate::features::auth::{client, types::VerifyEmailRequest};
        Box::pin(async move { client::verify_email(&VerifyEmailRequest { token }).await })
    }

    fn reset_password(
        &self,
        token: String,
        password: String,
        confirm_password: String,
    ) -> ApiFuture<()> {
        use crate::features::auth::{client, types::ResetPasswordRequest};
        Box::pin(async move {
            client::reset_password(&ResetPasswordRequest {
                token,
                password,
                confirm_password,
            })
            .await
        })
    }

    fn forgot_password(&self, email: String) -> ApiFuture<()> {
        use crate::features::auth::{client, types::ForgotPasswordRequest};
        Box::pin(async move { client::forgot_password(&ForgotPasswordRequest { email }).await })
    }

    fn login(&self, username: String, password: String) -> ApiFuture<UserSession> {
        use crate::features::auth::{client, types::LoginRequest};
        Box::pin(async move { client::login(&LoginRequest { username, password }).await })
    }

    fn register(&self, request: RegisterRequest) -> ApiFuture<()> {
        use crate::features::auth::client;
        Box::pin(async move { client::register(&request).await })
    }

    fn fetch_session(&self) -> ApiFuture<Option<UserSession>> {
        use crate::features::auth::client;
        Box::pin(async move { client::fetch_session().await })
    }

    fn logout(&self) -> ApiFuture<()> {
        use crate::features::auth::client;
        Box::pin(async move { client::logout().await })
    }
}
