//! Page chrome shared by the public site: header, footer and the centered
//! card layout used by the auth and account pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::routing::{
    ABOUT_ROUTE, AUTHENTICATE_ROUTE, CONTACT_ROUTE, FEATURES_ROUTE, HOME_ROUTE, PRICING_ROUTE,
    PRIVACY_POLICY_ROUTE, TERMS_OF_SERVICE_ROUTE,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::ThemeToggle;

const NAV_LINKS: [(&str, &str); 4] = [
    (FEATURES_ROUTE, "Features"),
    (PRICING_ROUTE, "Pricing"),
    (ABOUT_ROUTE, "About"),
    (CONTACT_ROUTE, "Contact"),
];

/// Vendoo wordmark linking to the landing page
#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <A href=HOME_ROUTE attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
            <div class="w-8 h-8 bg-accent-primary rounded-lg flex items-center justify-center text-white">
                <Icon name=icons::STORE class="w-5 h-5"/>
            </div>
            <span class="text-xl font-bold text-theme-primary">"Vendoo"</span>
        </A>
    }
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="border-b border-theme">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <Logo/>
                    <nav class="hidden md:flex items-center gap-6 text-sm">
                        {NAV_LINKS
                            .into_iter()
                            .map(|(href, label)| view! {
                                <A href=href attr:class="text-theme-secondary hover:text-theme-primary">
                                    {label}
                                </A>
                            })
                            .collect_view()}
                    </nav>
                    <div class="flex items-center gap-3">
                        <ThemeToggle/>
                        <A
                            href=AUTHENTICATE_ROUTE
                            attr:class="px-4 py-2 bg-accent-primary hover:bg-accent-primary-hover text-white text-sm font-medium rounded-lg transition-colors"
                        >
                            "Sign In"
                        </A>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="py-6 border-t border-theme">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex flex-col sm:flex-row items-center justify-between gap-3">
                <p class="text-sm text-theme-tertiary">"© 2025 Vendoo. All rights reserved."</p>
                <div class="flex items-center gap-4 text-sm">
                    <A href=TERMS_OF_SERVICE_ROUTE attr:class="text-theme-tertiary hover:text-theme-secondary">
                        "Terms of Service"
                    </A>
                    <A href=PRIVACY_POLICY_ROUTE attr:class="text-theme-tertiary hover:text-theme-secondary">
                        "Privacy Policy"
                    </A>
                </div>
            </div>
        </footer>
    }
}

/// Header, content, footer
#[component]
pub fn SiteLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <SiteHeader/>
            <main class="flex-1">{children()}</main>
            <SiteFooter/>
        </div>
    }
}

/// Single centered card, used for auth and account flows
#[component]
pub fn CardLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <header class="border-b border-theme">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center justify-between h-16">
                        <Logo/>
                        <ThemeToggle/>
                    </div>
                </div>
            </header>
            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md bg-theme-primary rounded-xl shadow-lg p-6 border border-theme">
                    {children()}
                </div>
            </main>
            <SiteFooter/>
        </div>
    }
}
