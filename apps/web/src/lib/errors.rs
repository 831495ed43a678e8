//! Frontend error type and the user-facing message policy. API failures with
//! a response body are surfaced to the user; transport and decoding failures
//! are replaced with a caller-provided fallback so raw diagnostics never
//! reach the screen.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// Maps the error to a message safe to render inline.
    ///
    /// Explicit HTTP failures carry the server's sanitized body (or the
    /// fallback when the body is empty). Every other variant is considered a
    /// diagnostic: it is logged and the fallback is shown instead.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Http { message, .. } => {
                if message.trim().is_empty() {
                    fallback.to_string()
                } else {
                    message.clone()
                }
            }
            AppError::Config(message) => message.clone(),
            other => {
                log::error!("request failed: {other}");
                fallback.to_string()
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    const FALLBACK: &str = "Something went wrong. Please try again.";

    #[test]
    fn http_errors_surface_the_server_message() {
        let err = AppError::Http {
            status: 400,
            message: "Verification token has expired".to_string(),
        };
        assert_eq!(err.user_message(FALLBACK), "Verification token has expired");
    }

    #[test]
    fn empty_http_bodies_fall_back() {
        let err = AppError::Http {
            status: 500,
            message: "   ".to_string(),
        };
        assert_eq!(err.user_message(FALLBACK), FALLBACK);
    }

    #[test]
    fn transport_errors_are_replaced_with_the_fallback() {
        for err in [
            AppError::Network("connection refused".to_string()),
            AppError::Timeout("request timed out".to_string()),
            AppError::Parse("unexpected token".to_string()),
            AppError::Serialization("bad payload".to_string()),
        ] {
            assert_eq!(err.user_message(FALLBACK), FALLBACK);
        }
    }

    #[test]
    fn config_errors_are_shown_verbatim() {
        let err = AppError::Config("Failed to initialize request timeout.".to_string());
        assert_eq!(
            err.user_message(FALLBACK),
            "Failed to initialize request timeout."
        );
    }
}
