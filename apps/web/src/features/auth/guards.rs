//! Guard component for protected routes. The decision is recomputed on every
//! render from the auth context; nothing is cached. Navigation here is a UX
//! affordance only, real access control must live on the API.

use crate::components::Spinner;
use crate::features::auth::decision::{self, AuthDecision};
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

/// Wraps protected content. While the session is hydrating it renders a
/// placeholder; unauthenticated visitors are redirected to login with the
/// current location attached so they can be sent back afterwards; visitors
/// missing `required_role` land on the unauthorized page.
#[component]
pub fn ProtectedRoute(
    #[prop(optional)] required_role: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let children = StoredValue::new_local(children);

    view! {
        {move || match auth.decide(required_role) {
            AuthDecision::Loading => view! {
                <div class="flex items-center justify-center min-h-[50vh]">
                    <Spinner />
                </div>
            }
            .into_any(),
            AuthDecision::RedirectToLogin => {
                let target =
                    decision::return_target(&location.pathname.get(), &location.search.get());
                let next = String::from(js_sys::encode_uri_component(&target));
                view! { <Redirect path=format!("/login?next={next}") /> }.into_any()
            }
            AuthDecision::RedirectToUnauthorized => {
                view! { <Redirect path="/unauthorized" /> }.into_any()
            }
            AuthDecision::Allow => children.with_value(|children| children()).into_any(),
        }}
    }
}
