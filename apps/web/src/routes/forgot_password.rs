//! Forgot-password route. Submits the email and always shows the same
//! neutral confirmation so the page never leaks whether an account exists.

use std::rc::Rc;

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner, TextField};
use crate::features::auth::state::use_auth;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

const FORGOT_FALLBACK: &str = "Unable to send the reset email. Please try again.";
const NEUTRAL_CONFIRMATION: &str =
    "If that email is registered, a password reset link is on the way.";

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let auth = use_auth();
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (sent, set_sent) = signal(false);

    let api = auth.api();
    let forgot_action = Action::new_local(move |email: &String| {
        let api = Rc::clone(&api);
        let email = email.clone();
        async move { api.forgot_password(email).await }
    });

    Effect::new(move |_| {
        if let Some(result) = forgot_action.value().get() {
            match result {
                Ok(()) => set_sent.set(true),
                Err(err) => set_error.set(Some(err.user_message(FORGOT_FALLBACK))),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        if email_value.is_empty() {
            set_error.set(Some("Email is required.".to_string()));
            return;
        }
        if !email_value.contains('@') {
            set_error.set(Some("Email address looks invalid.".to_string()));
            return;
        }

        forgot_action.dispatch(email_value);
    };

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto">
                <h1 class="text-2xl font-semibold text-gray-900 mb-2">"Forgot password"</h1>
                <p class="text-sm text-gray-600 mb-6">
                    "Enter your email and we will send you a reset link."
                </p>
                {move || {
                    if sent.get() {
                        view! {
                            <Alert
                                kind=AlertKind::Success
                                message=NEUTRAL_CONFIRMATION.to_string()
                            />
                        }
                        .into_any()
                    } else {
                        view! {
                            <form on:submit=on_submit>
                                <TextField
                                    id="email"
                                    label="Email"
                                    input_type="email"
                                    autocomplete="email"
                                    placeholder="name@example.com"
                                    set=set_email
                                />
                                <Button button_type="submit" disabled=forgot_action.pending()>
                                    "Send reset link"
                                </Button>
                                {move || {
                                    forgot_action
                                        .pending()
                                        .get()
                                        .then_some(view! { <div class="mt-4"><Spinner small=true /></div> })
                                }}
                                {move || {
                                    error.get().map(|message| view! {
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
