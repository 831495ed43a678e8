//! Target of role-denied guard redirects.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
                <h1 class="text-2xl font-semibold text-gray-900">"Access denied"</h1>
                <p class="mt-2 text-gray-500 max-w-sm mx-auto">
                    "Your account does not have permission to view this page."
                </p>
                <A
                    href="/"
                    {..}
                    class="mt-6 inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-sky-700 rounded-lg hover:bg-sky-800"
                >
                    "Go Home"
                </A>
            </div>
        </AppShell>
    }
}
