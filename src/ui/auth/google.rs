//! Google sign-in
//!
//! Renders the Google Identity Services button when `GOOGLE_CLIENT_ID` was set
//! at build time. The ID token it hands back is exchanged for a Vendoo session.

use leptos::prelude::*;

use crate::ui::common::ErrorMessage;
#[cfg(feature = "hydrate")]
use crate::ui::session::use_session_context;

const GOOGLE_CLIENT_ID: Option<&str> = option_env!("GOOGLE_CLIENT_ID");
#[cfg(feature = "hydrate")]
const GSI_SCRIPT: &str = "https://accounts.google.com/gsi/client";
#[cfg(feature = "hydrate")]
const GSI_SCRIPT_ID: &str = "google-gsi-client";
/// Global the GSI script calls with the credential response
#[cfg(feature = "hydrate")]
const CALLBACK_NAME: &str = "vendooGoogleCredential";

#[cfg(any(feature = "hydrate", test))]
thread_local! {
    /// Error slot of the button currently mounted
    static ERROR_SINK: std::cell::Cell<Option<RwSignal<Option<String>>>> =
        const { std::cell::Cell::new(None) };
}

/// Route credential errors to `error` from now on.
#[cfg(any(feature = "hydrate", test))]
fn attach_error_sink(error: RwSignal<Option<String>>) {
    ERROR_SINK.with(|sink| sink.set(Some(error)));
}

/// Show `message` on the mounted button; dropped if it has been unmounted.
#[cfg(any(feature = "hydrate", test))]
fn report_error(message: String) {
    if let Some(error) = ERROR_SINK.with(std::cell::Cell::get) {
        let _ = error.try_set(Some(message));
    }
}

#[component]
pub fn GoogleSignIn() -> impl IntoView {
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        use leptos::task::spawn_local;
        use wasm_bindgen::JsValue;
        use wasm_bindgen::closure::Closure;

        let session = use_session_context();

        Effect::new(move |_| {
            let Some(window) = leptos::web_sys::window() else {
                return;
            };
            attach_error_sink(error);

            // The global outlives this component; install it only once per page.
            let name = JsValue::from_str(CALLBACK_NAME);
            if !js_sys::Reflect::has(&window, &name).unwrap_or(false) {
                let handler = Closure::<dyn Fn(JsValue)>::new(move |response: JsValue| {
                    let credential =
                        js_sys::Reflect::get(&response, &JsValue::from_str("credential"))
                            .ok()
                            .and_then(|c| c.as_string());
                    let Some(credential) = credential else {
                        report_error("Google did not return a credential".to_string());
                        return;
                    };
                    spawn_local(async move {
                        match crate::core::api::google_sign_in(&credential).await {
                            Ok(user) => {
                                if let Err(e) = session.sign_in(user) {
                                    report_error(e.to_string());
                                }
                            }
                            Err(e) => report_error(e.to_string()),
                        }
                    });
                });
                let _ = js_sys::Reflect::set(&window, &name, handler.as_ref());
                handler.forget();
            }

            if GOOGLE_CLIENT_ID.is_some()
                && let Some(document) = window.document()
                && document.get_element_by_id(GSI_SCRIPT_ID).is_none()
                && let Ok(script) = document.create_element("script")
            {
                let _ = script.set_attribute("id", GSI_SCRIPT_ID);
                let _ = script.set_attribute("src", GSI_SCRIPT);
                let _ = script.set_attribute("async", "");
                if let Some(body) = document.body() {
                    let _ = body.append_child(&script);
                }
            }
        });
    }

    GOOGLE_CLIENT_ID.map(|client_id| {
        view! {
            <div class="space-y-3">
                <div class="flex items-center gap-3 text-xs text-theme-tertiary">
                    <div class="flex-1 border-t border-theme"></div>
                    "or"
                    <div class="flex-1 border-t border-theme"></div>
                </div>
                <ErrorMessage error=error/>
                <div
                    id="g_id_onload"
                    data-client_id=client_id
                    data-callback="vendooGoogleCredential"
                    data-auto_prompt="false"
                ></div>
                <div
                    class="g_id_signin flex justify-center"
                    data-type="standard"
                    data-text="continue_with"
                    data-shape="pill"
                ></div>
            </div>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_reach_the_latest_button() {
        let owner = Owner::new();
        owner.set();
        let first = RwSignal::new(None::<String>);
        let second = RwSignal::new(None::<String>);

        attach_error_sink(first);
        attach_error_sink(second);
        report_error("Google did not return a credential".to_string());

        assert_eq!(first.get_untracked(), None);
        assert_eq!(
            second.get_untracked().as_deref(),
            Some("Google did not return a credential")
        );
    }

    #[test]
    fn test_errors_after_unmount_are_dropped() {
        let owner = Owner::new();
        owner.set();
        let error = RwSignal::new(None::<String>);
        attach_error_sink(error);
        error.dispose();

        report_error("Invalid token".to_string());
        assert_eq!(error.try_get_untracked(), None);
    }
}
