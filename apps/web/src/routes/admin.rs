//! Admin landing page, reachable only through the admin-guarded route.

use crate::components::AppShell;
use leptos::prelude::*;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <AppShell>
            <h1 class="text-2xl font-semibold text-gray-900">"Administration"</h1>
            <p class="mt-2 text-sm text-gray-600">
                "User management and alert broadcasting tools live here."
            </p>
        </AppShell>
    }
}
