//! Email verification route. The page consumes the token from the link path,
//! verifies it once against the API, and redirects to login shortly after a
//! successful verification. The token must never be logged.

use std::rc::Rc;

use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::auth::state::use_auth;
use crate::features::auth::validate::usable_token;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

/// Delay before the post-verification redirect to login.
const REDIRECT_DELAY_MS: u32 = 3_000;
const MISSING_TOKEN_MESSAGE: &str =
    "Verification token is missing. Please use the link from your email.";
const VERIFY_FALLBACK: &str =
    "Email verification failed. Please try again or request a new link.";

#[derive(Clone, Debug, PartialEq)]
enum VerificationStatus {
    Verifying,
    Success,
    Error(String),
}

/// Drives the verify-on-mount flow. The verify call is dispatched exactly
/// once per token identity; a missing token short-circuits to the error
/// state without touching the network.
#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let auth = use_auth();
    let params = use_params_map();
    let navigate = use_navigate();
    let (status, set_status) = signal(VerificationStatus::Verifying);

    let api = auth.api();
    let verify_action = Action::new_local(move |token: &String| {
        let api = Rc::clone(&api);
        let token = token.clone();
        async move { api.verify_email(token).await }
    });

    Effect::new(move |_| {
        match usable_token(params.with(|map| map.get("token"))) {
            Some(token) => {
                set_status.set(VerificationStatus::Verifying);
                verify_action.dispatch(token);
            }
            None => set_status.set(VerificationStatus::Error(MISSING_TOKEN_MESSAGE.to_string())),
        }
    });

    // One-shot redirect armed on success; dropping the handle on cleanup
    // cancels it so an unmounted page can never navigate.
    let redirect_timer = StoredValue::new_local(None::<Timeout>);
    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            match result {
                Ok(()) => {
                    set_status.set(VerificationStatus::Success);
                    let navigate = navigate.clone();
                    let handle = Timeout::new(REDIRECT_DELAY_MS, move || {
                        navigate("/login", Default::default());
                    });
                    redirect_timer.set_value(Some(handle));
                }
                Err(err) => {
                    set_status.set(VerificationStatus::Error(err.user_message(VERIFY_FALLBACK)));
                }
            }
        }
    });

    on_cleanup(move || {
        redirect_timer.update_value(|timer| {
            timer.take();
        });
    });

    view! {
        <AppShell>
            <div class="max-w-lg mx-auto">
                <h1 class="text-2xl font-semibold text-gray-900">"Verify your email"</h1>
                {move || match status.get() {
                    VerificationStatus::Verifying => view! {
                        <div class="mt-4 flex items-center gap-3">
                            <Spinner />
                            <p class="text-sm text-gray-600">"Verifying your email address..."</p>
                        </div>
                    }
                    .into_any(),
                    VerificationStatus::Success => view! {
                        <div class="mt-4 space-y-4">
                            <Alert
                                kind=AlertKind::Success
                                message="Email verified successfully. Redirecting you to sign in..."
                                    .to_string()
                            />
                            <A href="/login" {..} class="text-sm font-medium text-sky-700 hover:underline">
                                "Go to sign in now"
                            </A>
                        </div>
                    }
                    .into_any(),
                    VerificationStatus::Error(message) => view! {
                        <div class="mt-4 space-y-4">
                            <Alert kind=AlertKind::Error message=message />
                            <div class="flex gap-4">
                                <A
                                    href="/register"
                                    {..}
                                    class="text-sm font-medium text-sky-700 hover:underline"
                                >
                                    "Create a new account"
                                </A>
                                <A
                                    href="/login"
                                    {..}
                                    class="text-sm font-medium text-sky-700 hover:underline"
                                >
                                    "Back to sign in"
                                </A>
                            </div>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </AppShell>
    }
}
