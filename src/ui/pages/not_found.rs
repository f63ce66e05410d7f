//! 404 page
//!
//! Unknown addresses are often mistyped shop links, so besides the way back
//! the page offers a shop finder that turns a shop name into its storefront
//! address.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::AccessLevel;
use crate::core::routing::{RedirectTarget, shop_slug};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::SiteLayout;
use crate::ui::session::use_session_context;

/// Where "back" goes and what the link says
fn way_back(access: AccessLevel) -> (&'static str, &'static str) {
    let target = RedirectTarget::home_for(access);
    let label = match target {
        RedirectTarget::Landing => "Back to Vendoo",
        RedirectTarget::Onboarding => "Finish setting up your store",
        RedirectTarget::Dashboard => "Back to your dashboard",
    };
    (target.path(), label)
}

/// Storefront address for a typed shop name
fn storefront_path(query: &str) -> Option<String> {
    shop_slug(query).map(|slug| format!("/{}", slug))
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();
    let query = RwSignal::new(String::new());
    let invalid = RwSignal::new(false);

    let back = move || way_back(session.access_level());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match storefront_path(&query.get_untracked()) {
            Some(path) => {
                invalid.set(false);
                navigate(&path, Default::default());
            }
            None => invalid.set(true),
        }
    };

    view! {
        <Title text="Page Not Found - Vendoo"/>
        <SiteLayout>
            <section class="max-w-xl mx-auto px-4 py-24 text-center">
                <p class="text-sm font-semibold tracking-wide uppercase text-accent-primary">"404"</p>
                <h1 class="mt-2 text-4xl font-bold text-theme-primary">"This shelf is empty"</h1>
                <p class="mt-4 text-theme-secondary">
                    "There is no page or shop at this address. If you were looking for a store, try its name."
                </p>

                <form on:submit=on_submit class="mt-8 flex gap-2">
                    <label for="shop-finder" class="sr-only">"Shop name"</label>
                    <input
                        id="shop-finder"
                        type="search"
                        class="input-base flex-1"
                        placeholder="e.g. Fashion Boutique"
                        prop:value=move || query.get()
                        on:input=move |ev| {
                            invalid.set(false);
                            query.set(event_target_value(&ev));
                        }
                    />
                    <button type="submit" class="btn-primary inline-flex items-center gap-2">
                        <Icon name=icons::SEARCH class="w-4 h-4"/>
                        "Find shop"
                    </button>
                </form>
                <Show when=move || invalid.get()>
                    <p class="mt-2 text-sm text-red-500">"That name can't be a shop address. Try the name shown on the storefront."</p>
                </Show>

                <div class="mt-10">
                    <A
                        href=move || back().0.to_string()
                        attr:class="inline-flex items-center gap-2 text-accent-primary hover:text-accent-primary-hover font-medium"
                    >
                        <Icon name=icons::STORE class="w-5 h-5"/>
                        {move || back().1}
                    </A>
                </div>
            </section>
        </SiteLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_way_back_follows_access_level() {
        assert_eq!(way_back(AccessLevel::Anonymous).0, "/home");
        assert_eq!(way_back(AccessLevel::Onboarding).0, "/create-store");
        assert_eq!(way_back(AccessLevel::Seller).0, "/dashboard");
    }

    #[test]
    fn test_storefront_path_from_shop_name() {
        assert_eq!(storefront_path("Fashion Boutique").as_deref(), Some("/fashion-boutique"));
        assert_eq!(storefront_path("  kente corner ").as_deref(), Some("/kente-corner"));
        assert_eq!(storefront_path("???"), None);
        assert_eq!(storefront_path("Pricing"), None);
    }
}
