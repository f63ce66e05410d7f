//! Public marketing pages: landing, features, pricing, about and contact.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

use crate::core::routing::{AUTHENTICATE_ROUTE, FEATURES_ROUTE, PRICING_ROUTE};
use crate::core::validation::is_valid_email;
use crate::ui::common::{ErrorMessage, FormField, SubmitButton, SuccessMessage, TextAreaField};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::SiteLayout;

const FEATURES: [(&str, &str, &str); 9] = [
    (
        icons::STORE,
        "Your Own Storefront",
        "Every shop gets a public page at its own address, ready to share with customers.",
    ),
    (
        icons::PRODUCTS,
        "Product Catalog",
        "List products with photos, prices and stock, and organize them into categories.",
    ),
    (
        icons::ORDERS,
        "Order Tracking",
        "Follow every order from checkout to delivery with clear status updates.",
    ),
    (
        icons::CUSTOMERS,
        "Customer Insights",
        "See who buys from you and what they come back for.",
    ),
    (
        icons::SEARCH,
        "Smart Product Search",
        "Buyers find items quickly with filters and keyword matching.",
    ),
    (
        icons::USER,
        "Secure Accounts",
        "Email verification, password reset and Google sign-in keep seller accounts safe.",
    ),
    (
        icons::LOCATION,
        "Location-Based Listings",
        "Show shoppers nearby what is available in their area.",
    ),
    (
        icons::MAIL,
        "Direct Contact",
        "Buyers reach sellers by email or phone straight from the shop page.",
    ),
    (
        icons::SETTINGS,
        "Seller Dashboard",
        "Manage your profile, shop and preferences from one place.",
    ),
];

const STEPS: [(&str, &str, &str); 3] = [
    (
        icons::STORE,
        "Set Up Your Store",
        "Create your storefront in a few clicks.",
    ),
    (
        icons::PRODUCTS,
        "Add Your Products",
        "Upload images and descriptions with an easy editor.",
    ),
    (
        icons::ORDERS,
        "Start Selling",
        "Go live and watch the orders roll in.",
    ),
];

struct Plan {
    name: &'static str,
    price: &'static str,
    period: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    highlighted: bool,
}

static PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        price: "Free",
        period: "",
        description: "Perfect for trying Vendoo.",
        features: &[
            "List up to 5 items per month",
            "Basic seller dashboard",
            "Limited analytics",
        ],
        highlighted: false,
    },
    Plan {
        name: "Pro",
        price: "$9.99",
        period: "/mo",
        description: "Best for active sellers growing their shop.",
        features: &[
            "Unlimited listings",
            "Advanced analytics",
            "Priority support",
            "Access to seller tools",
        ],
        highlighted: true,
    },
    Plan {
        name: "Business",
        price: "$19.99",
        period: "/mo",
        description: "For small stores and power sellers.",
        features: &[
            "Everything in Pro",
            "Multi-store management",
            "Team collaboration",
            "API access",
        ],
        highlighted: false,
    },
];

#[component]
fn PageHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h1 class="text-4xl sm:text-5xl font-bold text-theme-primary mb-4">{title}</h1>
            <p class="text-lg text-theme-secondary max-w-2xl mx-auto">{subtitle}</p>
        </div>
    }
}

#[component]
fn FeatureCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="bg-theme-primary p-6 rounded-xl border border-theme hover:border-accent-primary/50
                    transition-all duration-300 hover:shadow-lg hover:-translate-y-1">
            <div class="w-12 h-12 rounded-lg bg-accent-primary/10 flex items-center justify-center mb-4 text-accent-primary">
                <Icon name=icon class="w-6 h-6"/>
            </div>
            <h3 class="text-lg font-semibold text-theme-primary mb-2">{title}</h3>
            <p class="text-theme-secondary text-sm leading-relaxed">{description}</p>
        </div>
    }
}

#[component]
fn PricingCard(plan: &'static Plan) -> impl IntoView {
    let card_class = if plan.highlighted {
        "relative bg-theme-primary p-8 rounded-2xl border-2 border-accent-primary shadow-xl md:scale-105"
    } else {
        "bg-theme-primary p-8 rounded-2xl border border-theme hover:border-theme-secondary transition-colors"
    };
    let cta_class = if plan.highlighted {
        "block w-full text-center py-3 px-6 bg-accent-primary hover:bg-accent-primary-hover text-white font-semibold rounded-xl transition-colors"
    } else {
        "block w-full text-center py-3 px-6 border-2 border-theme hover:border-accent-primary text-theme-primary font-semibold rounded-xl transition-colors"
    };

    view! {
        <div class=card_class>
            {plan.highlighted.then(|| view! {
                <div class="absolute -top-4 left-1/2 -translate-x-1/2 px-4 py-1 bg-accent-primary text-white text-sm font-medium rounded-full">
                    "Most Popular"
                </div>
            })}

            <div class="text-center mb-6">
                <h3 class="text-xl font-bold text-theme-primary mb-2">{plan.name}</h3>
                <div class="flex items-baseline justify-center gap-1">
                    <span class="text-4xl font-bold text-theme-primary">{plan.price}</span>
                    <span class="text-theme-secondary">{plan.period}</span>
                </div>
                <p class="text-sm text-theme-secondary mt-2">{plan.description}</p>
            </div>

            <ul class="space-y-3 mb-8">
                {plan.features.iter().map(|feature| view! {
                    <li class="flex items-center gap-3">
                        <Icon name=icons::CHECK class="w-5 h-5 text-green-500 flex-shrink-0"/>
                        <span class="text-theme-primary">{*feature}</span>
                    </li>
                }).collect_view()}
            </ul>

            <A href=AUTHENTICATE_ROUTE attr:class=cta_class>"Get Started"</A>
        </div>
    }
}

/// Landing page, served at `/` and `/home`
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Vendoo - Sell Online With Your Own Storefront"/>
        <Meta name="description" content="Create your shop, list your products and start selling in minutes with Vendoo."/>

        <SiteLayout>
            <section class="py-24 px-4">
                <div class="text-center max-w-4xl mx-auto">
                    <h1 class="text-5xl sm:text-6xl font-bold text-theme-primary mb-6 tracking-tight">
                        "Your shop, online in minutes"
                    </h1>
                    <p class="text-xl text-theme-secondary max-w-2xl mx-auto mb-10 leading-relaxed">
                        "Vendoo gives every seller a storefront, a dashboard and the tools to grow."
                    </p>
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <A
                            href=AUTHENTICATE_ROUTE
                            attr:class="px-8 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white font-semibold rounded-xl transition-colors"
                        >
                            "Start Selling"
                        </A>
                        <A
                            href=FEATURES_ROUTE
                            attr:class="px-8 py-3 border-2 border-theme hover:border-accent-primary text-theme-primary font-semibold rounded-xl transition-colors"
                        >
                            "See Features"
                        </A>
                    </div>
                </div>
            </section>

            <section class="py-20 px-4 bg-theme-secondary/10">
                <div class="max-w-5xl mx-auto">
                    <h2 class="text-3xl font-bold text-theme-primary text-center mb-12">"How it works"</h2>
                    <div class="grid md:grid-cols-3 gap-8">
                        {STEPS.into_iter().map(|(icon, title, description)| view! {
                            <FeatureCard icon=icon title=title description=description/>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            <section class="py-20 px-4 text-center">
                <h2 class="text-3xl font-bold text-theme-primary mb-4">"Simple pricing"</h2>
                <p class="text-theme-secondary mb-8">"Start free. Upgrade when your shop grows."</p>
                <A href=PRICING_ROUTE attr:class="text-accent-primary hover:text-accent-primary-hover font-semibold">
                    "Compare plans"
                </A>
            </section>
        </SiteLayout>
    }
}

#[component]
pub fn FeaturesPage() -> impl IntoView {
    view! {
        <Title text="Features - Vendoo"/>
        <SiteLayout>
            <section class="py-20 px-4">
                <div class="max-w-6xl mx-auto">
                    <PageHeading
                        title="Everything you need to sell"
                        subtitle="From your first listing to your thousandth order."
                    />
                    <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                        {FEATURES.into_iter().map(|(icon, title, description)| view! {
                            <FeatureCard icon=icon title=title description=description/>
                        }).collect_view()}
                    </div>
                </div>
            </section>
        </SiteLayout>
    }
}

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <Title text="Pricing - Vendoo"/>
        <SiteLayout>
            <section class="py-20 px-4">
                <div class="max-w-6xl mx-auto">
                    <PageHeading
                        title="Simple, Transparent Pricing"
                        subtitle="Start for free. Upgrade when you need more."
                    />
                    <div class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                        {PLANS.iter().map(|plan| view! { <PricingCard plan=plan/> }).collect_view()}
                    </div>
                </div>
            </section>
        </SiteLayout>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About - Vendoo"/>
        <SiteLayout>
            <section class="py-20 px-4">
                <div class="max-w-3xl mx-auto space-y-6 text-theme-secondary leading-relaxed">
                    <PageHeading
                        title="About Vendoo"
                        subtitle="A marketplace built for independent sellers."
                    />
                    <p>
                        "Vendoo started with a simple idea: opening an online shop should take minutes, not weeks. "
                        "Sellers create a store, add their products and share a link. We handle the rest."
                    </p>
                    <p>
                        "Every shop gets its own public page, a dashboard for orders and products, and tools "
                        "to understand its customers. Whether you sell vintage clothing, handmade crafts or "
                        "electronics, Vendoo grows with you."
                    </p>
                </div>
            </section>
        </SiteLayout>
    }
}

const CONTACT_METHODS: [(&str, &str, &str, &str); 3] = [
    (icons::MAIL, "Email Us", "support@vendoo.com", "mailto:support@vendoo.com"),
    (icons::PHONE, "Call Us", "+961 71 330 986", "tel:+96171330986"),
    (icons::LOCATION, "Visit Us", "Baabda, Mount Lebanon", "#"),
];

/// How long the thank-you note stays before the form resets
#[cfg(feature = "hydrate")]
const CONTACT_RESET_MS: u32 = 3_000;

#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitted = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if name.get_untracked().trim().is_empty() || message.get_untracked().trim().is_empty() {
            error.set(Some("Please fill in every field".to_string()));
            return;
        }
        if !is_valid_email(email.get_untracked().trim()) {
            error.set(Some("Please input a valid email".to_string()));
            return;
        }
        error.set(None);
        submitted.set(Some("Thanks! We'll get back to you shortly.".to_string()));

        spawn_local(async move {
            #[cfg(feature = "hydrate")]
            gloo_timers::future::TimeoutFuture::new(CONTACT_RESET_MS).await;
            submitted.set(None);
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
        });
    };

    view! {
        <Title text="Contact - Vendoo"/>
        <SiteLayout>
            <section class="py-20 px-4">
                <div class="max-w-5xl mx-auto">
                    <PageHeading
                        title="Get in touch"
                        subtitle="Questions about selling on Vendoo? We're here to help."
                    />
                    <div class="grid md:grid-cols-2 gap-10">
                        <div class="space-y-4">
                            {CONTACT_METHODS.into_iter().map(|(icon, title, detail, href)| view! {
                                <a href=href class="flex items-center gap-4 p-4 rounded-xl border border-theme hover:border-accent-primary/50">
                                    <div class="w-10 h-10 rounded-lg bg-accent-primary/10 flex items-center justify-center text-accent-primary">
                                        <Icon name=icon class="w-5 h-5"/>
                                    </div>
                                    <div>
                                        <div class="font-semibold text-theme-primary">{title}</div>
                                        <div class="text-sm text-theme-secondary">{detail}</div>
                                    </div>
                                </a>
                            }).collect_view()}
                        </div>

                        <form on:submit=on_submit class="space-y-5">
                            <ErrorMessage error=error/>
                            <SuccessMessage message=submitted/>
                            <FormField
                                label="Name"
                                id="contact-name"
                                autocomplete="name"
                                value=name
                                on_input=Callback::new(move |v| name.set(v))
                            />
                            <FormField
                                label="Email"
                                id="contact-email"
                                input_type="email"
                                autocomplete="email"
                                value=email
                                on_input=Callback::new(move |v| email.set(v))
                            />
                            <TextAreaField
                                label="Message"
                                id="contact-message"
                                rows=5
                                value=message
                                on_input=Callback::new(move |v| message.set(v))
                            />
                            <SubmitButton
                                loading=Signal::stored(false)
                                disabled=Signal::derive(move || submitted.get().is_some())
                            >
                                "Send Message"
                            </SubmitButton>
                        </form>
                    </div>
                </div>
            </section>
        </SiteLayout>
    }
}
