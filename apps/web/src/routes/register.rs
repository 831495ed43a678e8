//! Registration route. Reuses the shared password policy for early feedback
//! and prompts the user to verify their email after a successful signup.

use std::rc::Rc;

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner, TextField};
use crate::features::auth::state::use_auth;
use crate::features::auth::types::RegisterRequest;
use crate::features::auth::validate::validate_password_pair;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

const REGISTER_FALLBACK: &str = "Unable to create the account. Please try again.";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (password_error, set_password_error) = signal(None::<String>);
    let (confirm_error, set_confirm_error) = signal(None::<String>);
    let (error, set_error) = signal(None::<String>);
    let (success, set_success) = signal(false);

    let api = auth.api();
    let register_action = Action::new_local(move |request: &RegisterRequest| {
        let api = Rc::clone(&api);
        let request = request.clone();
        async move { api.register(request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(()) => set_success.set(true),
                Err(err) => set_error.set(Some(err.user_message(REGISTER_FALLBACK))),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_password_error.set(None);
        set_confirm_error.set(None);

        let username_value = username.get_untracked().trim().to_string();
        let email_value = email.get_untracked().trim().to_string();
        if username_value.is_empty() || email_value.is_empty() {
            set_error.set(Some("Username and email are required.".to_string()));
            return;
        }
        if !email_value.contains('@') {
            set_error.set(Some("Email address looks invalid.".to_string()));
            return;
        }

        let password_value = password.get_untracked();
        let confirm_value = confirm_password.get_untracked();
        let errors = validate_password_pair(&password_value, &confirm_value);
        if !errors.is_empty() {
            set_password_error.set(errors.password.map(str::to_string));
            set_confirm_error.set(errors.confirm_password.map(str::to_string));
            return;
        }

        let name_value = name.get_untracked().trim().to_string();
        register_action.dispatch(RegisterRequest {
            username: username_value,
            email: email_value,
            name: (!name_value.is_empty()).then_some(name_value),
            password: password_value,
        });
    };

    view! {
        <AppShell>
            <div class="max-w-sm mx-auto">
                <h1 class="text-2xl font-semibold text-gray-900 mb-6">"Create account"</h1>
                {move || {
                    if success.get() {
                        view! {
                            <Alert
                                kind=AlertKind::Success
                                message="Account created. Check your email to verify your address."
                                    .to_string()
                            />
                        }
                        .into_any()
                    } else {
                        view! {
                            <form on:submit=on_submit>
                                <TextField
                                    id="username"
                                    label="Username"
                                    autocomplete="username"
                                    set=set_username
                                />
                                <TextField
                                    id="email"
                                    label="Email"
                                    input_type="email"
                                    autocomplete="email"
                                    placeholder="name@example.com"
                                    set=set_email
                                />
                                <TextField
                                    id="name"
                                    label="Name (optional)"
                                    autocomplete="name"
                                    set=set_name
                                />
                                <TextField
                                    id="password"
                                    label="Password"
                                    input_type="password"
                                    autocomplete="new-password"
                                    error=password_error
                                    set=set_password
                                />
                                <TextField
                                    id="confirm_password"
                                    label="Confirm password"
                                    input_type="password"
                                    autocomplete="new-password"
                                    error=confirm_error
                                    set=set_confirm_password
                                />
                                <Button button_type="submit" disabled=register_action.pending()>
                                    "Create account"
                                </Button>
                                {move || {
                                    register_action
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
