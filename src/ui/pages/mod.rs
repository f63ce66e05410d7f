//! Application pages
//!
//! - Marketing: home, features, pricing, about, contact
//! - Legal: terms of service, privacy policy
//! - Authentication and account recovery
//! - Seller onboarding and dashboard
//! - Public shop pages and the 404 page

mod account;
mod authenticate;
mod create_store;
pub mod dashboard;
mod legal;
mod marketing;
mod not_found;
mod public_shop;

pub use account::{ForgotPasswordPage, ResetPasswordPage, VerifyEmailPage};
pub use authenticate::AuthenticatePage;
pub use create_store::CreateStorePage;
pub use dashboard::DashboardLayout;
pub use legal::{PrivacyPolicyPage, TermsOfServicePage};
pub use marketing::{AboutPage, ContactPage, FeaturesPage, HomePage, PricingPage};
pub use not_found::NotFoundPage;
pub use public_shop::PublicShopPage;
