//! Seller onboarding: create the shop
//!
//! Reached by signed-in users without a shop. When the profile does not say
//! yet whether a shop exists, the page asks the API first; an existing shop
//! moves the user straight on to the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::core::api;
use crate::core::validation::{
    DEFAULT_CATEGORY_ID, DESCRIPTION_MAX_LENGTH, ShopFormErrors, validate_shop_form,
};
use crate::core::ShopStatus;
use crate::ui::common::{
    Button, ButtonVariant, ErrorMessage, FormField, SelectField, SubmitButton, TextAreaField,
};
use crate::ui::icon::icons;
use crate::ui::layout::Logo;
use crate::ui::session::{SessionContext, use_session_context};
use crate::ui::theme::ThemeToggle;

/// Resolve an unknown shop status against the API.
fn check_existing_shop(session: SessionContext) {
    let Some(identity) = session.identity.get_untracked() else {
        return;
    };
    if identity.shop_status != ShopStatus::Unknown {
        return;
    }
    let (Some(token), Some(user_id)) = (session.token(), identity.user_id) else {
        return;
    };

    spawn_local(async move {
        match api::fetch_shop_for_user(&token, &user_id).await {
            Ok(Some(shop)) => session.shop_loaded(shop),
            Ok(None) => session.shop_missing(),
            Err(e) => {
                // Status stays unknown; the form is still usable.
                leptos::logging::warn!("Shop check failed: {}", session.handle_api_error(&e));
            }
        }
    });
}

#[component]
pub fn CreateStorePage() -> impl IntoView {
    let session = use_session_context();

    let shop_name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category_id = RwSignal::new(DEFAULT_CATEGORY_ID.to_string());
    let categories = RwSignal::new(Vec::<(String, String)>::new());
    let categories_loading = RwSignal::new(true);
    let field_errors = RwSignal::new(ShopFormErrors::default());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    Effect::new(move |_| {
        check_existing_shop(session);

        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::fetch_categories(&token).await {
                Ok(list) => categories.set(
                    list.into_iter()
                        .map(|category| (category.id.to_string(), category.name))
                        .collect(),
                ),
                Err(e) => error.set(Some(session.handle_api_error(&e))),
            }
            categories_loading.set(false);
        });
    });

    let name_error = Signal::derive(move || {
        field_errors.with(|errors| errors.shop_name.as_ref().map(ToString::to_string))
    });
    let description_error = Signal::derive(move || {
        field_errors.with(|errors| errors.description.as_ref().map(ToString::to_string))
    });
    let category_error = Signal::derive(move || {
        field_errors.with(|errors| errors.category.as_ref().map(ToString::to_string))
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let draft = match validate_shop_form(
            &shop_name.get_untracked(),
            &description.get_untracked(),
            &category_id.get_untracked(),
        ) {
            Ok(draft) => {
                field_errors.set(ShopFormErrors::default());
                draft
            }
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };

        let user_id = session
            .identity
            .with_untracked(|identity| identity.as_ref().and_then(|i| i.user_id.clone()));
        let (Some(token), Some(user_id)) = (session.token(), user_id) else {
            error.set(Some(api::ApiError::Unauthorized.to_string()));
            session.sign_out();
            return;
        };

        loading.set(true);
        spawn_local(async move {
            let result = api::create_shop(&token, &user_id, &draft).await;
            loading.set(false);
            match result {
                Ok(shop) => {
                    leptos::logging::log!("Created shop {}", shop.shop_name);
                    if let Err(e) = session.shop_created(shop) {
                        leptos::logging::warn!("Failed to store shop: {}", e);
                        error.set(Some("Could not save your shop in this browser".to_string()));
                    }
                }
                Err(e) => error.set(Some(session.handle_api_error(&e))),
            }
        });
    };

    let greeting = move || {
        session.identity.with(|identity| {
            let name = identity.as_ref().map(|i| i.display_name().to_string());
            format!("Welcome, {}", name.as_deref().unwrap_or("Seller"))
        })
    };

    view! {
        <Title text="Create Your Store - Vendoo"/>
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <header class="border-b border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center justify-between h-16">
                        <Logo/>
                        <div class="flex items-center gap-3">
                            <ThemeToggle/>
                            <Button
                                variant=ButtonVariant::Ghost
                                icon=icons::LOGOUT
                                on_click=Callback::new(move |_| session.sign_out())
                            >
                                "Sign out"
                            </Button>
                        </div>
                    </div>
                </div>
            </header>

            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-lg bg-theme-primary rounded-xl shadow-lg p-8 border border-theme">
                    <form on:submit=on_submit class="space-y-6">
                        <div class="text-center">
                            <p class="text-sm text-theme-tertiary">{greeting}</p>
                            <h1 class="text-2xl font-bold text-theme-primary mt-1">"Create your store"</h1>
                            <p class="mt-2 text-sm text-theme-secondary">
                                "Tell buyers who you are. You can change this later."
                            </p>
                        </div>

                        <ErrorMessage error=error/>

                        <FormField
                            label="Store name"
                            id="shop-name"
                            required=true
                            placeholder="e.g. Cedar Crafts"
                            value=shop_name
                            on_input=Callback::new(move |v| shop_name.set(v))
                            error=name_error
                        />

                        <TextAreaField
                            label="Description"
                            id="shop-description"
                            required=true
                            placeholder="What do you sell?"
                            rows=4
                            max_length=DESCRIPTION_MAX_LENGTH
                            value=description
                            on_input=Callback::new(move |v| description.set(v))
                            error=description_error
                        />

                        <SelectField
                            label="Category"
                            id="shop-category"
                            required=true
                            value=category_id
                            on_change=Callback::new(move |v| category_id.set(v))
                            options=categories
                            disabled=categories_loading
                            error=category_error
                        />

                        <SubmitButton loading=loading loading_text="Creating store...">
                            "Create Store"
                        </SubmitButton>
                    </form>
                </div>
            </main>
        </div>
    }
}
