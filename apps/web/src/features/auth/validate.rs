//! Client-side validation for the password reset and registration forms.
//! These checks exist for early UX feedback only; the API re-validates
//! everything, including the reset token itself.

/// Minimum password length enforced by the client.
const MIN_PASSWORD_LENGTH: usize = 8;
/// Reset tokens shorter than this cannot be real; the backend issues much
/// longer opaque values, so anything below the floor is rejected up front.
const MIN_TOKEN_LENGTH: usize = 16;

/// Inline field errors produced by form validation. `None` means the field
/// passed. Only the first failing password rule is ever reported.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.password.is_none() && self.confirm_password.is_none()
    }
}

/// Checks the password policy rules in a fixed order and returns the first
/// failure: required, length, uppercase, lowercase, number, special.
pub fn check_password_policy(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        return Some("Password is required");
    }
    if password.len() < MIN_PASSWORD_LENGTH {
        return Some("Password must be at least 8 characters");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain at least one number");
    }
    if password.chars().all(|c| c.is_alphanumeric()) {
        return Some("Password must contain at least one special character");
    }
    None
}

/// Validates the password pair for reset and registration forms. The policy
/// error (if any) lands on the password field; a mismatch lands on the
/// confirmation field independently.
pub fn validate_password_pair(password: &str, confirm_password: &str) -> FormErrors {
    FormErrors {
        password: check_password_policy(password),
        confirm_password: (password != confirm_password).then_some("Passwords do not match"),
    }
}

/// Shallow plausibility check for reset tokens. This is not validation; the
/// backend decides whether the token is real, unexpired, and unused.
pub fn token_looks_valid(token: &str) -> bool {
    !token.trim().is_empty() && token.len() >= MIN_TOKEN_LENGTH
}

/// Extracts a dispatchable verification token from a route parameter.
/// `None` means the link is missing its token and the caller must show the
/// missing-token error without touching the network.
pub fn usable_token(param: Option<String>) -> Option<String> {
    param.filter(|token| !token.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::{check_password_policy, token_looks_valid, usable_token, validate_password_pair};

    #[test]
    fn policy_reports_first_failing_rule_only() {
        assert_eq!(
            check_password_policy("abc"),
            Some("Password must be at least 8 characters")
        );
        assert_eq!(
            check_password_policy("abcdefgh"),
            Some("Password must contain at least one uppercase letter")
        );
        assert_eq!(
            check_password_policy("ABCDEFGH"),
            Some("Password must contain at least one lowercase letter")
        );
        assert_eq!(
            check_password_policy("Abcdefgh"),
            Some("Password must contain at least one number")
        );
        assert_eq!(
            check_password_policy("Abcdefg1"),
            Some("Password must contain at least one special character")
        );
        assert_eq!(check_password_policy("Abcdefg1!"), None);
    }

    #[test]
    fn empty_password_is_required_before_any_other_rule() {
        assert_eq!(check_password_policy(""), Some("Password is required"));
    }

    #[test]
    fn matching_valid_pair_passes() {
        let errors = validate_password_pair("Abcdefg1!", "Abcdefg1!");
        assert!(errors.is_empty());
    }

    #[test]
    fn mismatch_flags_confirmation_but_accepts_password() {
        let errors = validate_password_pair("Abcdefg1!", "Abcdefg2!");
        assert_eq!(errors.password, None);
        assert_eq!(errors.confirm_password, Some("Passwords do not match"));
    }

    #[test]
    fn policy_and_mismatch_errors_are_independent() {
        let errors = validate_password_pair("abc", "def");
        assert_eq!(
            errors.password,
            Some("Password must be at least 8 characters")
        );
        assert_eq!(errors.confirm_password, Some("Passwords do not match"));
    }

    #[test]
    fn missing_or_blank_route_tokens_never_dispatch() {
        assert_eq!(usable_token(None), None);
        assert_eq!(usable_token(Some(String::new())), None);
        assert_eq!(usable_token(Some("   ".to_string())), None);
    }

    #[test]
    fn present_route_tokens_are_passed_through() {
        assert_eq!(
            usable_token(Some("0123456789abcdef".to_string())),
            Some("0123456789abcdef".to_string())
        );
    }

    #[test]
    fn short_or_blank_tokens_are_implausible() {
        assert!(!token_looks_valid("short"));
        assert!(!token_looks_valid(""));
        assert!(!token_looks_valid("                    "));
        assert!(token_looks_valid("0123456789abcdef"));
        assert!(token_looks_valid("QL1u7nN6mD0qWZrX9pT4sVbK"));
    }
}
