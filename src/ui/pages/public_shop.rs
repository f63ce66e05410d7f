//! Public shop page, `/:shop_slug`

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{Meta, Title};
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_params_map;

use crate::core::ShopSummary;
use crate::core::api;
use crate::core::routing::{NOT_FOUND_ROUTE, is_shop_slug};
use crate::ui::common::{ErrorMessageStatic, LoadingSpinner};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::SiteLayout;

#[derive(Clone, PartialEq)]
enum ShopLookup {
    Loading,
    Found(ShopSummary),
    Missing,
    Failed(String),
}

#[component]
pub fn PublicShopPage() -> impl IntoView {
    let params = use_params_map();
    let slug = Memo::new(move |_| params.read().get("shop_slug").unwrap_or_default());
    let lookup = RwSignal::new(ShopLookup::Loading);

    Effect::new(move |_| {
        let slug = slug.get();
        // Reserved names in the wrong case land here too.
        if !is_shop_slug(&slug) {
            lookup.set(ShopLookup::Missing);
            return;
        }
        lookup.set(ShopLookup::Loading);
        spawn_local(async move {
            let result = match api::fetch_shop_by_slug(&slug).await {
                Ok(Some(shop)) => ShopLookup::Found(shop),
                Ok(None) => ShopLookup::Missing,
                Err(e) => {
                    leptos::logging::warn!("Shop lookup for {} failed: {}", slug, e);
                    ShopLookup::Failed(e.to_string())
                }
            };
            lookup.set(result);
        });
    });

    move || match lookup.get() {
        ShopLookup::Loading => view! { <LoadingSpinner/> }.into_any(),
        ShopLookup::Missing => view! {
            <Redirect
                path=NOT_FOUND_ROUTE
                options=NavigateOptions {
                    replace: true,
                    ..Default::default()
                }
            />
        }
        .into_any(),
        ShopLookup::Failed(message) => view! {
            <SiteLayout>
                <div class="max-w-xl mx-auto py-20 px-4">
                    <ErrorMessageStatic message=message/>
                </div>
            </SiteLayout>
        }
        .into_any(),
        ShopLookup::Found(shop) => view! { <ShopProfile shop=shop/> }.into_any(),
    }
}

#[component]
fn ShopProfile(shop: ShopSummary) -> impl IntoView {
    let title = format!("{} - Vendoo", shop.shop_name);
    let description = shop.shop_description.clone().unwrap_or_default();

    let contact = [
        (icons::MAIL, shop.email.clone()),
        (icons::PHONE, shop.phone_number.clone()),
        (icons::LOCATION, shop.location.clone()),
    ];

    view! {
        <Title text=title/>
        <Meta name="description" content=description/>
        <SiteLayout>
            <section class="py-16 px-4">
                <div class="max-w-4xl mx-auto">
                    <div class="flex items-center gap-5 mb-8">
                        <div class="w-20 h-20 rounded-2xl bg-accent-primary/10 flex items-center justify-center text-accent-primary">
                            <Icon name=icons::STORE class="w-10 h-10"/>
                        </div>
                        <div>
                            <h1 class="text-4xl font-bold text-theme-primary">{shop.shop_name.clone()}</h1>
                            {shop.category_name.clone().map(|category| view! {
                                <span class="inline-block mt-2 px-3 py-1 text-xs font-medium rounded-full bg-theme-secondary text-theme-secondary">
                                    {category}
                                </span>
                            })}
                        </div>
                        {(!shop.status).then(|| view! {
                            <span class="ml-auto text-sm text-theme-tertiary">"Currently closed"</span>
                        })}
                    </div>

                    {shop.shop_description.clone().map(|text| view! {
                        <p class="text-lg text-theme-secondary leading-relaxed mb-10">{text}</p>
                    })}

                    <div class="grid sm:grid-cols-3 gap-4">
                        {contact
                            .into_iter()
                            .filter_map(|(icon, value)| value.filter(|v| !v.is_empty()).map(|v| (icon, v)))
                            .map(|(icon, value)| view! {
                                <div class="flex items-center gap-3 p-4 rounded-xl border border-theme">
                                    <Icon name=icon class="w-5 h-5 text-accent-primary"/>
                                    <span class="text-theme-primary text-sm break-all">{value}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>

                    <div class="mt-12 rounded-xl border border-theme p-10 text-center">
                        <Icon name=icons::PRODUCTS class="w-10 h-10 mx-auto mb-3 text-theme-tertiary"/>
                        <p class="text-theme-secondary">"This shop hasn't listed any products yet."</p>
                    </div>
                </div>
            </section>
        </SiteLayout>
    }
}
