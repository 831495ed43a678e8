use leptos::prelude::*;

/// Inline loading indicator. The default size suits page-level placeholders;
/// `small` fits next to form controls.
#[component]
pub fn Spinner(#[prop(optional)] small: bool) -> impl IntoView {
    let size = if small {
        "h-4 w-4 border-2"
    } else {
        "h-7 w-7 border-4"
    };

    view! {
        <div
            class=format!(
                "inline-block animate-spin rounded-full border-sky-200 border-t-sky-600 {size}"
            )
            role="status"
            aria-live="polite"
            aria-label="Loading"
        ></div>
    }
}
