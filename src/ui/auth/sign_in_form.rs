//! Email and password sign-in form

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::core::api::{self, ApiError};
use crate::core::routing::FORGOT_PASSWORD_ROUTE;
use crate::core::validation::validate_sign_in;
use crate::ui::common::{ErrorMessage, FormField, PasswordField, SubmitButton};
use crate::ui::session::use_session_context;

#[component]
pub fn SignInForm(
    /// Switch to the registration form
    on_register_click: Callback<()>,
) -> impl IntoView {
    let session = use_session_context();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();

        if let Err(e) = validate_sign_in(&email_val, &password_val) {
            error.set(Some(e.to_string()));
            return;
        }

        loading.set(true);
        spawn_local(async move {
            let result = api::sign_in(&email_val, &password_val).await;
            loading.set(false);
            match result {
                Ok(user) => {
                    if let Err(e) = session.sign_in(user) {
                        leptos::logging::warn!("Failed to store session: {}", e);
                        error.set(Some("Could not save your session in this browser".to_string()));
                    }
                }
                Err(ApiError::EmailNotVerified) => {
                    error.set(Some(ApiError::EmailNotVerified.to_string()));
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-6">
            <div class="text-center">
                <h2 class="text-2xl font-bold text-theme-primary">"Welcome Back"</h2>
                <p class="mt-2 text-sm text-theme-secondary">
                    "Sign in to manage your shop"
                </p>
            </div>

            <ErrorMessage error=error/>

            <FormField
                label="Email"
                id="email"
                input_type="email"
                autocomplete="email"
                placeholder="you@example.com"
                value=email
                on_input=Callback::new(move |v| email.set(v))
            />

            <PasswordField
                label="Password"
                id="password"
                value=password
                on_input=Callback::new(move |v| password.set(v))
            />

            <div class="flex justify-end text-sm">
                <A href=FORGOT_PASSWORD_ROUTE attr:class="text-accent-primary hover:text-accent-primary-hover">
                    "Forgot password?"
                </A>
            </div>

            <SubmitButton loading=loading loading_text="Signing in...">
                "Sign In"
            </SubmitButton>

            <div class="text-center text-sm text-theme-secondary">
                "Don't have an account? "
                <button
                    type="button"
                    class="text-accent-primary hover:text-accent-primary-hover font-medium"
                    on:click=move |_| on_register_click.run(())
                >
                    "Sign up"
                </button>
            </div>
        </form>
    }
}
