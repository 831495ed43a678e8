//! Auth session state and context for the frontend. The provider hydrates
//! the session once on mount using cookie-based API calls and exposes
//! derived auth signals for guards and routes. Only non-sensitive metadata
//! is stored in memory; cookies remain `HttpOnly`.

use std::rc::Rc;

use crate::features::auth::decision::{self, AuthDecision};
use crate::features::auth::service::{AuthApi, HttpAuthApi};
use crate::features::auth::types::UserSession;
use leptos::{prelude::*, task::spawn_local};

/// Auth session context shared through Leptos. Carries the backend
/// capability set so routes never reach for the HTTP client directly.
#[derive(Clone)]
pub struct AuthContext {
    api: Rc<dyn AuthApi>,
    session: RwSignal<Option<UserSession>>,
    loading: RwSignal<bool>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    /// Builds a context around the provided service implementation.
    pub fn new(api: Rc<dyn AuthApi>) -> Self {
        let session = RwSignal::new(None::<UserSession>);
        let loading = RwSignal::new(true);
        let is_authenticated = Signal::derive(move || session.get().is_some());
        Self {
            api,
            session,
            loading,
            is_authenticated,
        }
    }

    /// The injected auth service.
    pub fn api(&self) -> Rc<dyn AuthApi> {
        Rc::clone(&self.api)
    }

    /// Evaluates the guard decision from the current signals. Reads are
    /// tracked, so callers re-render when the auth state changes.
    pub fn decide(&self, required_role: Option<&str>) -> AuthDecision {
        let loading = self.loading.get();
        let (authenticated, role) = self.session.with(|session| {
            (
                session.is_some(),
                session.as_ref().map(|s| s.role.clone()),
            )
        });
        decision::decide(loading, authenticated, required_role, role.as_deref())
    }

    /// Updates the in-memory session after login.
    pub fn set_session(&self, session: UserSession) {
        self.session.set(Some(session));
    }

    /// Clears the in-memory session, typically on logout.
    pub fn clear_session(&self) {
        self.session.set(None);
    }

    fn finish_hydration(&self, session: Option<UserSession>) {
        self.session.set(session);
        self.loading.set(false);
    }
}

/// Provides auth context and hydrates the session once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth = AuthContext::new(Rc::new(HttpAuthApi));
    provide_context(auth.clone());

    let auth_for_fetch = auth.clone();
    spawn_local(async move {
        let session = match auth_for_fetch.api().fetch_session().await {
            Ok(session) => session,
            Err(err) => {
                log::error!("session hydration failed: {err}");
                None
            }
        };
        auth_for_fetch.finish_hydration(session);
    });

    view! { {children()} }
}

/// Returns the current auth context or a fallback detached context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| AuthContext::new(Rc::new(HttpAuthApi)))
}
