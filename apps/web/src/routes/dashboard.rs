//! Default landing page for signed-in users. It is intentionally minimal;
//! alert and air-quality views hang off this shell as they land.

use crate::components::AppShell;
use leptos::prelude::*;

/// Renders the dashboard page shell.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <h1 class="text-2xl font-semibold text-gray-900">"Dashboard"</h1>
            <p class="mt-2 text-sm text-gray-600">
                "Air quality alerts for your saved locations will appear here."
            </p>
        </AppShell>
    }
}
