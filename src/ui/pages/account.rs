//! Account recovery pages reached from emailed links: email verification,
//! forgot password and reset password. These are open to every visitor.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::components::{A, Redirect};
use leptos_router::hooks::use_query_map;

use crate::core::api;
use crate::core::routing::{AUTHENTICATE_ROUTE, FORGOT_PASSWORD_ROUTE, NOT_FOUND_ROUTE};
use crate::core::validation::{is_valid_email, validate_new_password};
use crate::ui::common::{
    ErrorMessage, FormField, PasswordField, Spinner, SpinnerSize, SubmitButton, SuccessMessage,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::CardLayout;

/// `?token=` from the current URL
fn use_token_query() -> Memo<Option<String>> {
    let query = use_query_map();
    Memo::new(move |_| {
        query
            .read()
            .get("token")
            .filter(|token| !token.trim().is_empty())
    })
}

#[derive(Clone, PartialEq)]
enum VerifyState {
    Pending,
    Verified,
    Failed(String),
}

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let token = use_token_query();
    let state = RwSignal::new(VerifyState::Pending);

    // Runs once the token is known; the API call only happens in the browser.
    Effect::new(move |_| {
        let Some(token) = token.get() else {
            state.set(VerifyState::Failed("This verification link is invalid".to_string()));
            return;
        };
        state.set(VerifyState::Pending);
        spawn_local(async move {
            match api::verify_email(&token).await {
                Ok(()) => state.set(VerifyState::Verified),
                Err(e) => state.set(VerifyState::Failed(e.to_string())),
            }
        });
    });

    view! {
        <Title text="Verify Email - Vendoo"/>
        <CardLayout>
            <div class="text-center space-y-4">
                {move || match state.get() {
                    VerifyState::Pending => view! {
                        <Spinner size=SpinnerSize::Large label="Verifying your email..." centered=true/>
                    }.into_any(),
                    VerifyState::Verified => view! {
                        <div class="w-16 h-16 mx-auto rounded-full bg-green-500/10 flex items-center justify-center text-green-500">
                            <Icon name=icons::CHECK class="w-8 h-8"/>
                        </div>
                        <h2 class="text-2xl font-bold text-theme-primary">"Email verified"</h2>
                        <p class="text-theme-secondary">"Your account is ready. You can now sign in."</p>
                    }.into_any(),
                    VerifyState::Failed(message) => view! {
                        <h2 class="text-2xl font-bold text-theme-primary">"Verification failed"</h2>
                        <ErrorMessage error=Signal::stored(Some(message))/>
                    }.into_any(),
                }}
                <A href=AUTHENTICATE_ROUTE attr:class="inline-block text-accent-primary hover:text-accent-primary-hover font-medium">
                    "Go to sign in"
                </A>
            </div>
        </CardLayout>
    }
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        success.set(None);

        let email_val = email.get_untracked().trim().to_string();
        if !is_valid_email(&email_val) {
            error.set(Some("Please input a valid email".to_string()));
            return;
        }

        loading.set(true);
        spawn_local(async move {
            let result = api::request_password_reset(&email_val).await;
            loading.set(false);
            match result {
                Ok(()) => success.set(Some(format!(
                    "If an account exists for {}, a reset link is on its way.",
                    email_val
                ))),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <Title text="Forgot Password - Vendoo"/>
        <CardLayout>
            <form on:submit=on_submit class="space-y-6">
                <div class="text-center">
                    <h2 class="text-2xl font-bold text-theme-primary">"Forgot your password?"</h2>
                    <p class="mt-2 text-sm text-theme-secondary">
                        "Enter your email and we'll send you a reset link"
                    </p>
                </div>

                <ErrorMessage error=error/>
                <SuccessMessage message=success/>

                <FormField
                    label="Email"
                    id="email"
                    input_type="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    value=email
                    on_input=Callback::new(move |v| email.set(v))
                />

                <SubmitButton loading=loading loading_text="Sending...">
                    "Send Reset Link"
                </SubmitButton>

                <p class="text-center text-sm text-theme-secondary">
                    <A href=AUTHENTICATE_ROUTE attr:class="text-accent-primary hover:text-accent-primary-hover font-medium">
                        "Back to sign in"
                    </A>
                </p>
            </form>
        </CardLayout>
    }
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let token = use_token_query();

    view! {
        <Title text="Reset Password - Vendoo"/>
        {move || match token.get() {
            Some(token) => view! { <ResetPasswordForm token=token/> }.into_any(),
            None => view! {
                <Redirect
                    path=NOT_FOUND_ROUTE
                    options=NavigateOptions {
                        replace: true,
                        ..Default::default()
                    }
                />
            }
            .into_any(),
        }}
    }
}

/// Link under the reset form: sign in once the reset worked, otherwise a new link
fn follow_up_link(reset_done: bool) -> (&'static str, &'static str) {
    if reset_done {
        (AUTHENTICATE_ROUTE, "Sign in")
    } else {
        (FORGOT_PASSWORD_ROUTE, "Request a new link")
    }
}

#[component]
fn ResetPasswordForm(token: String) -> impl IntoView {
    let token = StoredValue::new(token);
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let password_val = password.get_untracked();
        if let Err(e) = validate_new_password(&password_val, &confirm_password.get_untracked()) {
            error.set(Some(e.to_string()));
            return;
        }

        loading.set(true);
        spawn_local(async move {
            let result = api::reset_password(&token.get_value(), &password_val).await;
            loading.set(false);
            match result {
                Ok(message) => {
                    password.set(String::new());
                    confirm_password.set(String::new());
                    success.set(Some(message));
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <CardLayout>
            <form on:submit=on_submit class="space-y-6">
                <div class="text-center">
                    <h2 class="text-2xl font-bold text-theme-primary">"Choose a new password"</h2>
                </div>

                <ErrorMessage error=error/>
                <SuccessMessage message=success/>

                <PasswordField
                    label="New password"
                    id="new-password"
                    autocomplete="new-password"
                    value=password
                    on_input=Callback::new(move |v| password.set(v))
                />
                <PasswordField
                    label="Confirm password"
                    id="confirm-password"
                    autocomplete="new-password"
                    placeholder="Repeat your password"
                    value=confirm_password
                    on_input=Callback::new(move |v| confirm_password.set(v))
                />

                <SubmitButton loading=loading loading_text="Saving...">
                    "Reset Password"
                </SubmitButton>

                <p class="text-center text-sm text-theme-secondary">
                    <A
                        href=move || follow_up_link(success.get().is_some()).0.to_string()
                        attr:class="text-accent-primary hover:text-accent-primary-hover font-medium"
                    >
                        {move || follow_up_link(success.get().is_some()).1}
                    </A>
                </p>
            </form>
        </CardLayout>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_up_link_after_reset() {
        assert_eq!(follow_up_link(false), ("/forgot-password", "Request a new link"));
        assert_eq!(follow_up_link(true), ("/authenticate", "Sign in"));
    }
}
