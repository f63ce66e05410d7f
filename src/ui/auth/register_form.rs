//! Registration form
//!
//! Registration does not sign the user in; the account has to be verified
//! from the emailed link first.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::api;
use crate::core::validation::validate_registration;
use crate::ui::common::{ErrorMessage, FormField, PasswordField, SubmitButton, SuccessMessage};

#[component]
pub fn RegisterForm(
    /// Switch to the sign-in form
    on_sign_in_click: Callback<()>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        success.set(None);

        let name_val = name.get_untracked().trim().to_string();
        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();

        if let Err(e) = validate_registration(
            &name_val,
            &email_val,
            &password_val,
            &confirm_password.get_untracked(),
        ) {
            error.set(Some(e.to_string()));
            return;
        }

        loading.set(true);
        spawn_local(async move {
            let result = api::register(&name_val, &email_val, &password_val).await;
            loading.set(false);
            match result {
                Ok(()) => {
                    password.set(String::new());
                    confirm_password.set(String::new());
                    success.set(Some(format!(
                        "Account created. We sent a verification link to {}.",
                        email_val
                    )));
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-5">
            <div class="text-center">
                <h2 class="text-2xl font-bold text-theme-primary">"Create your account"</h2>
                <p class="mt-2 text-sm text-theme-secondary">
                    "Start selling on Vendoo in minutes"
                </p>
            </div>

            <ErrorMessage error=error/>
            <SuccessMessage message=success/>

            <FormField
                label="Full name"
                id="name"
                autocomplete="name"
                placeholder="Ama Mensah"
                value=name
                on_input=Callback::new(move |v| name.set(v))
            />
            <FormField
                label="Email"
                id="register-email"
                input_type="email"
                autocomplete="email"
                placeholder="you@example.com"
                value=email
                on_input=Callback::new(move |v| email.set(v))
            />
            <PasswordField
                label="Password"
                id="register-password"
                autocomplete="new-password"
                placeholder="Choose a password"
                value=password
                on_input=Callback::new(move |v| password.set(v))
            />
            <PasswordField
                label="Confirm password"
                id="register-confirm-password"
                autocomplete="new-password"
                placeholder="Repeat the password"
                value=confirm_password
                on_input=Callback::new(move |v| confirm_password.set(v))
            />

            <SubmitButton loading=loading loading_text="Creating account...">
                "Create Account"
            </SubmitButton>

            <div class="text-center text-sm text-theme-secondary">
                "Already have an account? "
                <button
                    type="button"
                    class="text-accent-primary hover:text-accent-primary-hover font-medium"
                    on:click=move |_| on_sign_in_click.run(())
                >
                    "Sign in"
                </button>
            </div>
        </form>
    }
}
