use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::ui::pages::dashboard::{
    CategoriesPage, CustomersPage, DashboardNotFoundPage, DashboardOverviewPage,
    DashboardProfilePage, DashboardSettingsPage, OrdersPage, ProductsPage,
};
use crate::ui::pages::{
    AboutPage, AuthenticatePage, ContactPage, CreateStorePage, DashboardLayout, FeaturesPage,
    ForgotPasswordPage, HomePage, NotFoundPage, PricingPage, PrivacyPolicyPage, PublicShopPage,
    ResetPasswordPage, TermsOfServicePage, VerifyEmailPage,
};
use crate::ui::{RouteGuard, provide_session_context, provide_theme_context};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme_context();
    provide_session_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/vendoo.css"/>
        <Title text="Vendoo"/>

        <Router>
            <RouteGuard>
                // Fixed paths first; anything left with one segment is a shop slug.
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/home") view=HomePage/>
                    <Route path=path!("/about") view=AboutPage/>
                    <Route path=path!("/pricing") view=PricingPage/>
                    <Route path=path!("/features") view=FeaturesPage/>
                    <Route path=path!("/contact") view=ContactPage/>
                    <Route path=path!("/authenticate") view=AuthenticatePage/>
                    <Route path=path!("/create-store") view=CreateStorePage/>
                    <ParentRoute path=path!("/dashboard") view=DashboardLayout>
                        <Route path=path!("") view=DashboardOverviewPage/>
                        <Route path=path!("orders") view=OrdersPage/>
                        <Route path=path!("products") view=ProductsPage/>
                        <Route path=path!("categories") view=CategoriesPage/>
                        <Route path=path!("customers") view=CustomersPage/>
                        <Route path=path!("profile") view=DashboardProfilePage/>
                        <Route path=path!("settings") view=DashboardSettingsPage/>
                        <Route path=path!("*any") view=DashboardNotFoundPage/>
                    </ParentRoute>
                    <Route path=path!("/terms-of-service") view=TermsOfServicePage/>
                    <Route path=path!("/privacy-policy") view=PrivacyPolicyPage/>
                    <Route path=path!("/verify-email") view=VerifyEmailPage/>
                    <Route path=path!("/reset-password") view=ResetPasswordPage/>
                    <Route path=path!("/forgot-password") view=ForgotPasswordPage/>
                    <Route path=path!("/not-found") view=NotFoundPage/>
                    <Route path=path!("/:shop_slug") view=PublicShopPage/>
                </Routes>
            </RouteGuard>
        </Router>
    }
}
