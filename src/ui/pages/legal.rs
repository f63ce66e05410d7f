//! Terms of service and privacy policy

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::layout::SiteLayout;

const LAST_UPDATED: &str = "Last updated: October 2025";

const TERMS_SECTIONS: [(&str, &str); 7] = [
    (
        "1. Acceptance of Terms",
        "By accessing or using Vendoo you agree to these Terms of Service and our Privacy Policy. \
         If you do not agree, please do not use the platform.",
    ),
    (
        "2. Account Registration",
        "Some features require an account. You are responsible for keeping your sign-in details \
         secure and for all activity under your account.",
    ),
    (
        "3. Seller Responsibilities",
        "Sellers must describe their products accurately, honor the prices they list and fulfill \
         the orders they accept.",
    ),
    (
        "4. Prohibited Items",
        "Illegal, counterfeit or dangerous goods may not be listed. We may remove any listing that \
         breaks these rules.",
    ),
    (
        "5. Fees and Payments",
        "Paid plans are billed monthly. Plan prices are shown on the pricing page and may change \
         with notice.",
    ),
    (
        "6. Termination",
        "We may suspend or close accounts that violate these Terms or engage in harmful activity.",
    ),
    (
        "7. Changes to These Terms",
        "Vendoo may update these Terms from time to time. Continued use of the platform means you \
         accept the updated Terms.",
    ),
];

const PRIVACY_SECTIONS: [(&str, &str); 6] = [
    (
        "1. Information We Collect",
        "We collect the information you give us when you create an account, open a shop or contact \
         support, such as your name, email and phone number. We also collect usage data like your \
         device type and the pages you visit.",
    ),
    (
        "2. How We Use Your Information",
        "We use your information to run your account and shop, to process orders and to improve \
         Vendoo.",
    ),
    (
        "3. Data Security",
        "We use secure servers, encryption and access controls to protect your data. No method of \
         transmission over the internet is completely secure.",
    ),
    (
        "4. Sharing Your Information",
        "We do not sell or rent your personal information. We share data only with service \
         providers that help us operate the platform.",
    ),
    (
        "5. Your Rights & Choices",
        "You can view and update your profile at any time from your dashboard, and you may ask us \
         to delete your account.",
    ),
    (
        "6. Cookies",
        "We use cookies and local storage to keep you signed in and to remember your preferences.",
    ),
];

#[component]
fn LegalDocument(title: &'static str, sections: &'static [(&'static str, &'static str)]) -> impl IntoView {
    view! {
        <section class="py-16 px-4">
            <article class="max-w-3xl mx-auto">
                <h1 class="text-4xl font-bold text-theme-primary mb-2">{title}</h1>
                <p class="text-sm text-theme-tertiary mb-10">{LAST_UPDATED}</p>
                <div class="space-y-8">
                    {sections.iter().map(|(heading, body)| view! {
                        <div>
                            <h2 class="text-xl font-semibold text-theme-primary mb-2">{*heading}</h2>
                            <p class="text-theme-secondary leading-relaxed">{*body}</p>
                        </div>
                    }).collect_view()}
                </div>
            </article>
        </section>
    }
}

#[component]
pub fn TermsOfServicePage() -> impl IntoView {
    view! {
        <Title text="Terms of Service - Vendoo"/>
        <SiteLayout>
            <LegalDocument title="Terms of Service" sections=&TERMS_SECTIONS/>
        </SiteLayout>
    }
}

#[component]
pub fn PrivacyPolicyPage() -> impl IntoView {
    view! {
        <Title text="Privacy Policy - Vendoo"/>
        <SiteLayout>
            <LegalDocument title="Privacy Policy" sections=&PRIVACY_SECTIONS/>
        </SiteLayout>
    }
}
