//! Password reset route. Three mutually exclusive branches checked in order:
//! implausible token, completed reset, and the form itself. Field-level
//! validation runs before any network call; the API owns real token
//! validation. Tokens and passwords must never be logged.

use std::rc::Rc;

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner, TextField};
use crate::features::auth::state::use_auth;
use crate::features::auth::validate::{FormErrors, token_looks_valid, validate_password_pair};
use gloo_timers::callback::Timeout;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

/// Delay before the post-reset redirect to login.
const REDIRECT_DELAY_MS: u32 = 3_000;
const RESET_FALLBACK: &str = "Unable to reset password. Please try again.";

/// Captures form input for the async action without borrowing signals.
#[derive(Clone)]
struct ResetInput {
    token: String,
    password: String,
    confirm_password: String,
}

/// Renders the reset form and drives the submission flow.
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let auth = use_auth();
    let params = use_params_map();
    let navigate = use_navigate();

    let token = Memo::new(move |_| {
        params
            .with(|map| map.get("token"))
            .unwrap_or_default()
    });

    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (form_errors, set_form_errors) = signal(FormErrors::default());
    let (api_error, set_api_error) = signal(None::<String>);
    let (success, set_success) = signal(false);

    let api = auth.api();
    let reset_action = Action::new_local(move |input: &ResetInput| {
        let api = Rc::clone(&api);
        let input = input.clone();
        async move {
            api.reset_password(input.token, input.password, input.confirm_password)
                .await
        }
    });

    let redirect_timer = StoredValue::new_local(None::<Timeout>);
    Effect::new(move |_| {
        if let Some(result) = reset_action.value().get() {
            match result {
                Ok(()) => {
                    set_success.set(true);
                    let navigate = navigate.clone();
                    let handle = Timeout::new(REDIRECT_DELAY_MS, move || {
                        navigate("/login", Default::default());
                    });
                    redirect_timer.set_value(Some(handle));
                }
                Err(err) => set_api_error.set(Some(err.user_message(RESET_FALLBACK))),
            }
        }
    });

    on_cleanup(move || {
        redirect_timer.update_value(|timer| {
            timer.take();
        });
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_api_error.set(None);

        let password_value = password.get_untracked();
        let confirm_value = confirm_password.get_untracked();
        let errors = validate_password_pair(&password_value, &confirm_value);
        let valid = errors.is_empty();
        set_form_errors.set(errors);
        if !valid {
            return;
        }

        reset_action.dispatch(ResetInput {
            token: token.get_untracked(),
            password: password_value,
            confirm_password: confirm_value,
        });
    };

    let password_error =
        Signal::derive(move || form_errors.get().password.map(str::to_string));
    let confirm_error =
        Signal::derive(move || form_errors.get().confirm_password.map(str::to_string));

    view! {
        <AppShell>
            <div class="max-w-lg mx-auto">
                <h1 class="text-2xl font-semibold text-gray-900">"Reset your password"</h1>
                {move || {
                    if !token_looks_valid(&token.get()) {
                        view! {
                            <div class="mt-4 space-y-4">
                                <Alert
                                    kind=AlertKind::Error
                                    message="This password reset link is invalid or incomplete."
                                        .to_string()
                                />
                                <A
                                    href="/forgot-password"
                                    {..}
                                    class="text-sm font-medium text-sky-700 hover:underline"
                                >
                                    "Request a new reset link"
                                </A>
                            </div>
                        }
                        .into_any()
                    } else if success.get() {
                        view! {
                            <div class="mt-4 space-y-4">
                                <Alert
                                    kind=AlertKind::Success
                                    message="Password updated. Redirecting you to sign in..."
                                        .to_string()
                                />
                                <A
                                    href="/login"
                                    {..}
                                    class="text-sm font-medium text-sky-700 hover:underline"
                                >
                                    "Go to sign in now"
                                </A>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <form class="mt-6" on:submit=on_submit>
                                <TextField
                                    id="password"
                                    label="New password"
                                    input_type="password"
                                    autocomplete="new-password"
                                    error=password_error
                                    set=set_password
                                />
                                <TextField
                                    id="confirm_password"
                                    label="Confirm new password"
                                    input_type="password"
                                    autocomplete="new-password"
                                    error=confirm_error
                                    set=set_confirm_password
                                />
                                <Button button_type="submit" disabled=reset_action.pending()>
                                    "Reset password"
                                </Button>
                                {move || {
                                    reset_action
                                        .pending()
                                        .get()
                                        .then_some(view! { <div class="mt-4"><Spinner small=true /></div> })
                                }}
                                {move || {
                                    api_error.get().map(|message| view! {
                                        <div class="mt-4">
                                            <Alert kind=AlertKind::Error message=message />
                                        </div>
                                    })
                                }}
                            </form>
                        }
                        .into_any()
                    }
                }}
            </div>
        </AppShell>
    }
}
