//! Route guard decision logic. The decision is derived from the current auth
//! state on every render and never stored; navigation is a UX affordance
//! only, real access control lives on the API.

/// Outcome of evaluating a protected route against the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthDecision {
    /// Session hydration has not settled yet; render a placeholder.
    Loading,
    /// No session; send the user to login, remembering where they were.
    RedirectToLogin,
    /// Authenticated but missing the required role.
    RedirectToUnauthorized,
    /// Render the protected content unchanged.
    Allow,
}

/// Evaluates the guard in a fixed order: loading, authentication, role.
pub fn decide(
    loading: bool,
    authenticated: bool,
    required_role: Option<&str>,
    user_role: Option<&str>,
) -> AuthDecision {
    if loading {
        return AuthDecision::Loading;
    }
    if !authenticated {
        return AuthDecision::RedirectToLogin;
    }
    if let Some(required) = required_role {
        if !role_satisfies(user_role, required) {
            return AuthDecision::RedirectToUnauthorized;
        }
    }
    AuthDecision::Allow
}

/// Role check with the backend's escalation rule: `superuser` satisfies any
/// required role, everything else must match exactly.
pub fn role_satisfies(user_role: Option<&str>, required: &str) -> bool {
    match user_role {
        Some("superuser") => true,
        Some(role) => role == required,
        None => false,
    }
}

/// Builds the in-app path a login redirect should return to. `search` is
/// expected without its leading `?`, as the router exposes it; it is
/// re-attached here so the query string survives the round-trip.
pub fn return_target(pathname: &str, search: &str) -> String {
    if search.is_empty() {
        pathname.to_string()
    } else {
        format!("{pathname}?{search}")
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthDecision, decide, return_target, role_satisfies};

    #[test]
    fn loading_always_wins() {
        assert_eq!(
            decide(true, false, None, None),
            AuthDecision::Loading
        );
        assert_eq!(
            decide(true, true, Some("admin"), Some("user")),
            AuthDecision::Loading
        );
    }

    #[test]
    fn unauthenticated_users_go_to_login() {
        assert_eq!(
            decide(false, false, None, None),
            AuthDecision::RedirectToLogin
        );
        assert_eq!(
            decide(false, false, Some("admin"), None),
            AuthDecision::RedirectToLogin
        );
    }

    #[test]
    fn missing_role_goes_to_unauthorized() {
        assert_eq!(
            decide(false, true, Some("admin"), Some("user")),
            AuthDecision::RedirectToUnauthorized
        );
    }

    #[test]
    fn authenticated_without_role_requirement_is_allowed() {
        assert_eq!(decide(false, true, None, Some("user")), AuthDecision::Allow);
    }

    #[test]
    fn matching_role_is_allowed() {
        assert_eq!(
            decide(false, true, Some("admin"), Some("admin")),
            AuthDecision::Allow
        );
    }

    #[test]
    fn return_target_reattaches_the_query_separator() {
        assert_eq!(return_target("/admin", "tab=users"), "/admin?tab=users");
        assert_eq!(return_target("/", "tab=users&page=2"), "/?tab=users&page=2");
    }

    #[test]
    fn return_target_without_query_is_the_bare_path() {
        assert_eq!(return_target("/admin", ""), "/admin");
    }

    #[test]
    fn superuser_satisfies_any_role() {
        assert!(role_satisfies(Some("superuser"), "admin"));
        assert!(role_satisfies(Some("superuser"), "user"));
        assert!(!role_satisfies(Some("user"), "admin"));
        assert!(!role_satisfies(None, "admin"));
    }
}
