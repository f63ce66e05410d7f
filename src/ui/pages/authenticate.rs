//! Sign-in / registration page
//!
//! A successful sign-in updates the session; the route guard then moves the
//! user to onboarding or the dashboard.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::auth::{GoogleSignIn, RegisterForm, SignInForm};
use crate::ui::layout::CardLayout;

#[component]
pub fn AuthenticatePage() -> impl IntoView {
    let registering = RwSignal::new(false);

    let show_register = Callback::new(move |_| registering.set(true));
    let show_sign_in = Callback::new(move |_| registering.set(false));

    let title = move || {
        if registering.get() {
            "Create Account - Vendoo"
        } else {
            "Sign In - Vendoo"
        }
    };

    view! {
        <Title text=title/>
        <CardLayout>
            <Show
                when=move || registering.get()
                fallback=move || view! { <SignInForm on_register_click=show_register/> }
            >
                <RegisterForm on_sign_in_click=show_sign_in/>
            </Show>

            <div class="mt-6">
                <GoogleSignIn/>
            </div>
        </CardLayout>
    }
}
