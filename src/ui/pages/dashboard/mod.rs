//! Seller dashboard
//!
//! [`DashboardLayout`] owns the sidebar and loads the shop summary the first
//! time a seller lands here without one cached. Sub-pages render into its
//! `<Outlet/>`.

mod overview;
mod profile;
mod sections;
mod settings;

pub use overview::DashboardOverviewPage;
pub use profile::DashboardProfilePage;
pub use sections::{CategoriesPage, CustomersPage, DashboardNotFoundPage, OrdersPage, ProductsPage};
pub use settings::DashboardSettingsPage;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_location;

use crate::core::api;
use crate::core::routing::{DASHBOARD_ROUTE, dashboard};
use crate::ui::common::{Button, ButtonSize, ButtonVariant, ErrorMessageStatic, Spinner, SpinnerSize};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::Logo;
use crate::ui::session::{SessionContext, use_session_context};
use crate::ui::theme::ThemeToggle;

const NAV_ITEMS: [(&str, &str, &str); 7] = [
    ("", "Dashboard", icons::HOME),
    (dashboard::ORDERS, "Orders", icons::ORDERS),
    (dashboard::PRODUCTS, "Products", icons::PRODUCTS),
    (dashboard::CATEGORIES, "Categories", icons::CATEGORIES),
    (dashboard::CUSTOMERS, "Customers", icons::CUSTOMERS),
    (dashboard::PROFILE, "Profile", icons::USER),
    (dashboard::SETTINGS, "Settings", icons::SETTINGS),
];

fn nav_href(page: &str) -> String {
    if page.is_empty() {
        DASHBOARD_ROUTE.to_string()
    } else {
        dashboard::path(page)
    }
}

/// Shop summary loading state, shared with the sub-pages
#[derive(Clone, Copy)]
pub struct ShopLoader {
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl ShopLoader {
    fn new() -> Self {
        Self {
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Fetch the shop unless it is already cached.
    pub fn load(self, session: SessionContext) {
        if session.shop.get_untracked().is_some() || self.loading.get_untracked() {
            return;
        }
        let user_id = session
            .identity
            .with_untracked(|identity| identity.as_ref().and_then(|i| i.user_id.clone()));
        let (Some(token), Some(user_id)) = (session.token(), user_id) else {
            self.error.set(Some("Your account has no user id. Please sign in again.".to_string()));
            return;
        };

        self.loading.set(true);
        self.error.set(None);
        spawn_local(async move {
            let result = api::fetch_shop_for_user(&token, &user_id).await;
            self.loading.set(false);
            match result {
                Ok(Some(shop)) => session.shop_loaded(shop),
                // The guard sends the user back to onboarding.
                Ok(None) => session.shop_missing(),
                Err(e) => {
                    let message = session.handle_api_error(&e);
                    leptos::logging::warn!("Failed to load shop: {}", message);
                    self.error.set(Some(message));
                }
            }
        });
    }
}

pub fn use_shop_loader() -> ShopLoader {
    use_context::<ShopLoader>().expect("ShopLoader should be provided by DashboardLayout")
}

#[component]
fn SidebarLink(page: &'static str, label: &'static str, icon: &'static str) -> impl IntoView {
    let location = use_location();
    let href = nav_href(page);
    let target = href.clone();
    let active = move || location.pathname.with(|path| path.trim_end_matches('/') == target);

    view! {
        <A
            href=href
            attr:class=move || {
                if active() {
                    "flex items-center gap-3 px-3 py-2 rounded-lg bg-accent-primary/10 text-accent-primary font-medium"
                } else {
                    "flex items-center gap-3 px-3 py-2 rounded-lg text-theme-secondary hover:bg-theme-secondary hover:text-theme-primary"
                }
            }
        >
            <Icon name=icon class="w-5 h-5"/>
            <span>{label}</span>
        </A>
    }
}

#[component]
pub fn DashboardLayout() -> impl IntoView {
    let session = use_session_context();
    let loader = ShopLoader::new();
    provide_context(loader);

    Effect::new(move |_| loader.load(session));

    let shop_name = move || {
        session
            .shop
            .with(|shop| shop.as_ref().map(|s| s.shop_name.clone()))
            .unwrap_or_else(|| "Your shop".to_string())
    };
    let seller_name = move || {
        session.identity.with(|identity| {
            identity
                .as_ref()
                .map(|i| i.display_name().to_string())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="min-h-screen bg-theme-primary flex">
            <aside class="w-64 flex-shrink-0 border-r border-theme flex flex-col">
                <div class="h-16 px-4 flex items-center border-b border-theme">
                    <Logo/>
                </div>
                <div class="px-4 py-4 border-b border-theme">
                    <div class="text-xs uppercase tracking-wide text-theme-tertiary">"Store"</div>
                    <div class="font-semibold text-theme-primary truncate">{shop_name}</div>
                </div>
                <nav class="flex-1 p-3 space-y-1">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(page, label, icon)| view! { <SidebarLink page=page label=label icon=icon/> })
                        .collect_view()}
                </nav>
                <div class="p-3 border-t border-theme space-y-2">
                    <div class="flex items-center justify-between px-2">
                        <span class="text-sm text-theme-secondary truncate">{seller_name}</span>
                        <ThemeToggle/>
                    </div>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Small
                        icon=icons::LOGOUT
                        class="w-full justify-start".to_string()
                        on_click=Callback::new(move |_| session.sign_out())
                    >
                        "Sign out"
                    </Button>
                </div>
            </aside>

            <main class="flex-1 min-w-0">
                {move || loader.error.get().map(|message| view! {
                    <div class="m-6 space-y-3">
                        <ErrorMessageStatic message=message/>
                        <Button
                            variant=ButtonVariant::Secondary
                            size=ButtonSize::Small
                            on_click=Callback::new(move |_| loader.load(session))
                        >
                            "Try again"
                        </Button>
                    </div>
                })}
                <Show when=move || loader.loading.get()>
                    <div class="m-6">
                        <Spinner size=SpinnerSize::Small label="Loading your shop..."/>
                    </div>
                </Show>
                <Outlet/>
            </main>
        </div>
    }
}

/// Heading shared by dashboard sub-pages
#[component]
fn PageHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="mb-8">
            <h1 class="text-3xl font-bold text-theme-primary">{title}</h1>
            <p class="mt-1 text-sm text-theme-secondary">{subtitle}</p>
        </div>
    }
}

/// Centered placeholder for sections with nothing to show yet
#[component]
fn EmptyState(icon: &'static str, title: &'static str, message: &'static str) -> impl IntoView {
    view! {
        <div class="rounded-xl border border-theme px-8 py-12 text-center">
            <div class="mx-auto mb-4 w-14 h-14 rounded-full bg-theme-secondary flex items-center justify-center text-theme-tertiary">
                <Icon name=icon class="w-7 h-7"/>
            </div>
            <h2 class="text-lg font-semibold text-theme-primary">{title}</h2>
            <p class="mt-2 text-sm text-theme-secondary max-w-md mx-auto">{message}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_hrefs_stay_under_dashboard() {
        for (page, _, _) in NAV_ITEMS {
            let href = nav_href(page);
            assert!(href.starts_with(DASHBOARD_ROUTE), "{href}");
        }
        assert_eq!(nav_href(""), "/dashboard");
        assert_eq!(nav_href(dashboard::ORDERS), "/dashboard/orders");
    }
}
