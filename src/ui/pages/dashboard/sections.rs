//! Dashboard sections that have no data behind them yet

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::{EmptyState, PageHeader};
use crate::core::routing::DASHBOARD_ROUTE;
use crate::ui::icon::icons;

#[component]
pub fn OrdersPage() -> impl IntoView {
    view! {
        <Title text="Orders - Vendoo"/>
        <div class="p-8 max-w-6xl">
            <PageHeader title="Orders" subtitle="Track and fulfill customer orders"/>
            <EmptyState
                icon=icons::ORDERS
                title="No orders yet"
                message="When customers place orders, they'll appear here. Promote your products to get your first one."
            />
        </div>
    }
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <Title text="Products - Vendoo"/>
        <div class="p-8 max-w-6xl">
            <PageHeader title="Products" subtitle="Manage your product catalog"/>
            <EmptyState
                icon=icons::PRODUCTS
                title="Coming soon"
                message="Product management is under development."
            />
        </div>
    }
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    view! {
        <Title text="Categories - Vendoo"/>
        <div class="p-8 max-w-6xl">
            <PageHeader title="Categories" subtitle="Group your products for buyers"/>
            <EmptyState
                icon=icons::CATEGORIES
                title="Coming soon"
                message="Category management is under development."
            />
        </div>
    }
}

#[component]
pub fn CustomersPage() -> impl IntoView {
    view! {
        <Title text="Customers - Vendoo"/>
        <div class="p-8 max-w-6xl">
            <PageHeader title="Customers" subtitle="See who buys from you"/>
            <EmptyState
                icon=icons::CUSTOMERS
                title="No customers yet"
                message="Customers who order from your shop will be listed here."
            />
        </div>
    }
}

/// Unknown `/dashboard/*` path
#[component]
pub fn DashboardNotFoundPage() -> impl IntoView {
    view! {
        <div class="p-8 max-w-6xl">
            <EmptyState
                icon=icons::SEARCH
                title="Page not found"
                message="This dashboard page doesn't exist."
            />
            <div class="mt-6 text-center">
                <A href=DASHBOARD_ROUTE attr:class="text-accent-primary hover:text-accent-primary-hover font-medium">
                    "Back to dashboard"
                </A>
            </div>
        </div>
    }
}
