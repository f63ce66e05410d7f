//! Route guard
//!
//! Every navigation is classified into a [`RouteArea`] and checked against the
//! current session before the page renders. Disallowed pages are replaced in
//! history by the redirect target so "back" does not bounce.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::core::{RouteArea, RouteDecision};
use crate::ui::common::LoadingSpinner;
use crate::ui::session::use_session_context;

/// Renders `children` only when the current location is allowed.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let session = use_session_context();
    let location = use_location();

    let area = Memo::new(move |_| RouteArea::classify(&location.pathname.get()));
    let decision = Memo::new(move |_| session.decision(area.get()));

    move || match decision.get() {
        None => view! { <LoadingSpinner/> }.into_any(),
        Some(RouteDecision::Allow) => children().into_any(),
        Some(RouteDecision::Redirect(redirect)) => {
            leptos::logging::log!("{} redirected to {}", area.get_untracked(), redirect.path());
            view! {
                <Redirect
                    path=redirect.path()
                    options=NavigateOptions {
                        replace: redirect.replace,
                        ..Default::default()
                    }
                />
            }
            .into_any()
        }
    }
}
