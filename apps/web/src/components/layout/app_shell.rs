//! Shared layout wrapper with navigation and content container. It
//! centralizes header markup so routes can focus on content. Navigation
//! remains client-side; backend routes must enforce access control.

use crate::features::auth::state::use_auth;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::{components::A, hooks::use_location};

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;
    let location = use_location();
    let on_login = move || location.pathname.get() == "/login";
    let auth_for_logout = auth.clone();

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href="/" {..} class="flex items-center space-x-3">
                        <span class="font-semibold whitespace-nowrap text-sky-800">
                            "AirWatch"
                        </span>
                    </A>
                    <ul class="font-medium flex flex-row space-x-8">
                        <li>
                            <Show
                                when=move || is_authenticated.get()
                                fallback=move || {
                                    view! {
                                        <Show
                                            when=on_login
                                            fallback=move || {
                                                view! {
                                                    <A
                                                        href="/login"
                                                        {..}
                                                        class="block py-2 px-3 text-gray-900 rounded hover:text-sky-700"
                                                    >
                                                        "Sign In"
                                                    </A>
                                                }
                                            }
                                        >
                                            <A
                                                href="/register"
                                                {..}
                                                class="block py-2 px-3 text-gray-900 rounded hover:text-sky-700"
                                            >
                                                "Sign Up"
                                            </A>
                                        </Show>
                                    }
                                }
                            >
                                <button
                                    type="button"
                                    class="block py-2 px-3 text-gray-900 rounded hover:text-sky-700"
                                    on:click=move |_| {
                                        let auth = auth_for_logout.clone();
                                        spawn_local(async move {
                                            if let Err(err) = auth.api().logout().await {
                                                log::error!("logout failed: {err}");
                                            }
                                            auth.clear_session();
                                        });
                                    }
                                >
                                    "Sign Out"
                                </button>
                            </Show>
                        </li>
                    </ul>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
        </div>
    }
}
