//! Auth feature module covering email verification, password reset, session
//! hydration, and route guarding. It keeps authentication logic out of the
//! UI and must avoid logging secrets or token material.
//!
//! Flow Overview: registration triggers a verification email; the user
//! follows the link to `/verify-email/:token`. Password resets follow the
//! same shape via `/reset-password/:token`. Login hydrates the cookie-backed
//! session, which guards consult on every render.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod decision;
#[cfg(target_arch = "wasm32")]
mod guards;
pub(crate) mod service;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod types;
pub(crate) mod validate;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::ProtectedRoute;
