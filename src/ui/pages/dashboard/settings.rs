use leptos::prelude::*;
use leptos_meta::Title;

use super::{PageHeader, use_shop_loader};
use crate::ui::common::{Button, ButtonVariant, Spinner, SpinnerSize};
use crate::ui::icon::icons;
use crate::ui::session::use_session_context;
use crate::ui::theme::{ThemeMode, use_theme_context};

const THEME_MODES: [ThemeMode; 3] = [ThemeMode::Auto, ThemeMode::Light, ThemeMode::Dark];

#[component]
fn StoreDetails() -> impl IntoView {
    let session = use_session_context();
    let loader = use_shop_loader();

    move || match session.shop.get() {
        Some(shop) => {
            let rows = [
                ("Name", Some(shop.shop_name)),
                ("Description", shop.shop_description),
                ("Category", shop.category_name),
                ("Email", shop.email),
                ("Phone", shop.phone_number),
                ("Location", shop.location),
            ];
            view! {
                <dl class="divide-y divide-theme">
                    {rows.into_iter().map(|(label, value)| view! {
                        <div class="py-3 grid grid-cols-3 gap-4">
                            <dt class="text-sm text-theme-tertiary">{label}</dt>
                            <dd class="col-span-2 text-theme-primary">
                                {value.filter(|v| !v.is_empty()).unwrap_or_else(|| "Not set".to_string())}
                            </dd>
                        </div>
                    }).collect_view()}
                    <div class="py-3 grid grid-cols-3 gap-4">
                        <dt class="text-sm text-theme-tertiary">"Status"</dt>
                        <dd class="col-span-2 text-theme-primary">
                            {if shop.status { "Open" } else { "Closed" }}
                        </dd>
                    </div>
                </dl>
            }
            .into_any()
        }
        None if loader.loading.get() => view! { <Spinner size=SpinnerSize::Small/> }.into_any(),
        None => view! {
            <p class="text-sm text-theme-secondary">"Store details are not available right now."</p>
        }
        .into_any(),
    }
}

#[component]
pub fn DashboardSettingsPage() -> impl IntoView {
    let session = use_session_context();
    let theme = use_theme_context();

    view! {
        <Title text="Settings - Vendoo"/>
        <div class="p-8 max-w-3xl space-y-8">
            <PageHeader title="Settings" subtitle="Your store and preferences"/>

            <section class="rounded-xl border border-theme p-6">
                <h2 class="text-lg font-semibold text-theme-primary mb-4">"Store"</h2>
                <StoreDetails/>
            </section>

            <section class="rounded-xl border border-theme p-6">
                <h2 class="text-lg font-semibold text-theme-primary mb-4">"Interface theme"</h2>
                <div class="flex gap-2">
                    {THEME_MODES.into_iter().map(|mode| view! {
                        <button
                            type="button"
                            class="px-4 py-2 rounded-lg border text-sm transition-colors"
                            class:border-accent-primary=move || theme.mode.get() == mode
                            class:text-accent-primary=move || theme.mode.get() == mode
                            class:border-theme=move || theme.mode.get() != mode
                            on:click=move |_| theme.set_mode(mode)
                        >
                            {mode.display_name()}
                        </button>
                    }).collect_view()}
                </div>
            </section>

            <section class="rounded-xl border border-theme p-6">
                <h2 class="text-lg font-semibold text-theme-primary mb-2">"Session"</h2>
                <p class="text-sm text-theme-secondary mb-4">
                    "Signing out clears your profile and shop from this browser."
                </p>
                <Button
                    variant=ButtonVariant::Danger
                    icon=icons::LOGOUT
                    on_click=Callback::new(move |_| session.sign_out())
                >
                    "Sign out"
                </Button>
            </section>
        </div>
    }
}
