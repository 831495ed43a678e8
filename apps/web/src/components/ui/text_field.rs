//! Labeled input with an optional inline error line, used by the auth forms
//! so field-level validation errors render next to the field they concern.

use leptos::prelude::*;

#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    set: WriteSignal<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(None::<String>))] error: Signal<Option<String>>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or("text");
    let base_class = "bg-gray-50 border text-gray-900 text-sm rounded-lg focus:ring-sky-500 focus:border-sky-500 block w-full p-2.5";

    view! {
        <div class="mb-5">
            <label class="block mb-2 text-sm font-medium text-gray-900" for=id>
                {label}
            </label>
            <input
                id=id
                type=input_type
                class=base_class
                class:border-gray-300=move || error.get().is_none()
                class:border-red-400=move || error.get().is_some()
                autocomplete=autocomplete.unwrap_or("off")
                placeholder=placeholder.unwrap_or("")
                on:input=move |event| set.set(event_target_value(&event))
            />
            {move || {
                error
                    .get()
                    .map(|message| view! { <p class="mt-2 text-sm text-red-600">{message}</p> })
            }}
        </div>
    }
}
