//! Login route. On success it hydrates the in-memory session and returns the
//! user to the path a guard recorded in the `next` query parameter, falling
//! back to the dashboard.

use std::rc::Rc;

use crate::components::{Alert, AlertKind, AppShell, Button, Spinner, TextField};
use crate::features::auth::state::use_auth;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

const LOGIN_FALLBACK: &str = "Unable to sign in. Please try again.";

#[derive(Clone)]
struct LoginInput {
    username: String,
    password: String,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let query = use_query_map();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let api = auth.api();
    let login_action = Action::new_local(move |input: &LoginInput| {
        let api = Rc::clone(&api);
        let input = input.clone();
        async move { api.login(input.username, input.password).await }
    });

    let auth_for_result = auth.clone();
    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(session) => {
                    auth_for_result.set_session(session);
                    let target = query
                        .with_untracked(|map| map.get("next"))
                        .and_then(|next| {
                            js_sys::decode_uri_component(&next)
                                .ok()
                                .map(String::from)
                        })
                        // Only ever return to an in-app path.
                        .filter(|next| next.starts_with('/'))
                        .unwrap_or_else(|| "/".to_string());
                    navigate(&target, Default::default());
                }
                Err(err) => set_error.set(Some(err.user_message(LOGIN_FALLBACK))),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let username_value = username.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if username_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some("Username and password are required.".to_string()));
            return;
        }

        login_action.dispatch(LoginInput {
            username: username_value,
            password: password_value,
        });
    };

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="text-2xl font-semibold text-gray-900 mb-6">"Sign in"</h1>
                <TextField
                    id="username"
                    label="Username"
                    autocomplete="username"
                    set=set_username
                />
                <TextField
                    id="password"
                    label="Password"
                    input_type="password"
                    autocomplete="current-password"
                    set=set_password
                />
                <Button button_type="submit" disabled=login_action.pending()>
                    "Sign in"
                </Button>
                {move || {
                    login_action
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
                <p class="mt-6 text-sm text-gray-600">
                    "Forgot your password? "
                    <A
                        href="/forgot-password"
                        {..}
                        class="font-medium text-sky-700 hover:underline"
                    >
                        "Request a reset link"
                    </A>
                </p>
            </form>
        </AppShell>
    }
}
