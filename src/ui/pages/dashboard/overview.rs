use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::{EmptyState, PageHeader};
use crate::core::routing::{dashboard, shop_slug};
use crate::ui::icon::{Icon, icons};
use crate::ui::session::use_session_context;

const STATS: [(&str, &str); 4] = [
    (icons::ORDERS, "Orders"),
    (icons::PRODUCTS, "Products"),
    (icons::CUSTOMERS, "Customers"),
    (icons::CATEGORIES, "Categories"),
];

#[component]
pub fn DashboardOverviewPage() -> impl IntoView {
    let session = use_session_context();

    let greeting = move || {
        session.shop.with(|shop| match shop {
            Some(shop) => format!("Hi, {}", shop.shop_name),
            None => "Hi there".to_string(),
        })
    };
    let public_link = move || {
        session.shop.with(|shop| {
            shop.as_ref()
                .and_then(|s| shop_slug(&s.shop_name))
                .map(|slug| format!("/{}", slug))
        })
    };

    view! {
        <Title text="Dashboard - Vendoo"/>
        <div class="p-8 max-w-6xl">
            <p class="text-sm text-accent-primary font-medium mb-1">{greeting}</p>
            <PageHeader title="Dashboard" subtitle="Overview of your business performance"/>

            <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-4 mb-10">
                {STATS.into_iter().map(|(icon, label)| view! {
                    <div class="rounded-xl border border-theme p-5">
                        <div class="flex items-center justify-between text-theme-tertiary">
                            <span class="text-sm">{label}</span>
                            <Icon name=icon class="w-5 h-5"/>
                        </div>
                        <div class="mt-3 text-3xl font-bold text-theme-primary">"0"</div>
                    </div>
                }).collect_view()}
            </div>

            {move || public_link().map(|href| view! {
                <div class="mb-10 flex items-center gap-3 text-sm text-theme-secondary">
                    <Icon name=icons::STORE class="w-4 h-4"/>
                    <span>"Your public page:"</span>
                    <A href=href.clone() attr:class="text-accent-primary hover:text-accent-primary-hover font-medium">
                        {href.clone()}
                    </A>
                </div>
            })}

            <EmptyState
                icon=icons::PRODUCTS
                title="Add your first product"
                message="Sales figures show up here once customers start ordering."
            />
            <p class="mt-4 text-sm text-theme-tertiary">
                "Manage your catalog from "
                <A href=dashboard::path(dashboard::PRODUCTS) attr:class="text-accent-primary">"Products"</A>
                "."
            </p>
        </div>
    }
}
