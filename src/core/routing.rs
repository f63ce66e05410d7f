//! Session-aware route resolution
//!
//! Every navigation is classified into a [`RouteArea`] and checked against the
//! current [`AccessLevel`]. The result is either "render it" or a single
//! replace-redirect to the landing page, the shop-creation page or the
//! dashboard. Evaluation is pure: same identity and path, same answer.

use derive_more::Display;

use crate::core::identity::{AccessLevel, Identity};

pub const ROOT_ROUTE: &str = "/";
pub const HOME_ROUTE: &str = "/home";
pub const ABOUT_ROUTE: &str = "/about";
pub const CONTACT_ROUTE: &str = "/contact";
pub const PRICING_ROUTE: &str = "/pricing";
pub const FEATURES_ROUTE: &str = "/features";
pub const AUTHENTICATE_ROUTE: &str = "/authenticate";
pub const TERMS_OF_SERVICE_ROUTE: &str = "/terms-of-service";
pub const PRIVACY_POLICY_ROUTE: &str = "/privacy-policy";
pub const VERIFY_EMAIL_ROUTE: &str = "/verify-email";
pub const RESET_PASSWORD_ROUTE: &str = "/reset-password";
pub const FORGOT_PASSWORD_ROUTE: &str = "/forgot-password";
pub const CREATE_STORE_ROUTE: &str = "/create-store";
pub const DASHBOARD_ROUTE: &str = "/dashboard";
pub const NOT_FOUND_ROUTE: &str = "/not-found";

/// Dashboard sub-pages, relative to [`DASHBOARD_ROUTE`]
pub mod dashboard {
    pub const ORDERS: &str = "orders";
    pub const PRODUCTS: &str = "products";
    pub const CATEGORIES: &str = "categories";
    pub const CUSTOMERS: &str = "customers";
    pub const PROFILE: &str = "profile";
    pub const SETTINGS: &str = "settings";

    /// Absolute path of a dashboard sub-page
    pub fn path(page: &str) -> String {
        format!("{}/{}", super::DASHBOARD_ROUTE, page)
    }
}

const MARKETING_SEGMENTS: [&str; 5] = ["home", "about", "pricing", "features", "contact"];

const UNGUARDED_SEGMENTS: [&str; 5] = [
    "terms-of-service",
    "privacy-policy",
    "verify-email",
    "reset-password",
    "forgot-password",
];

/// Single segments that can never be a shop slug
const RESERVED_SEGMENTS: [&str; 5] = ["authenticate", "create-store", "dashboard", "not-found", "pkg"];

/// Which part of the site a path belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RouteArea {
    /// Landing, about, pricing, features, contact
    #[display("marketing")]
    Marketing,
    #[display("authentication")]
    Authentication,
    /// Shop creation
    #[display("onboarding")]
    Onboarding,
    #[display("dashboard")]
    Dashboard,
    /// Legal pages, email verification, password reset
    #[display("unguarded")]
    Unguarded,
    /// Public shop page addressed by slug
    #[display("storefront")]
    Storefront,
    #[display("not found")]
    NotFound,
}

impl RouteArea {
    /// Classify a requested path.
    ///
    /// Query strings, fragments and trailing slashes are ignored. Reserved
    /// names match exactly, as the router does; a reserved name in any other
    /// case is neither a page nor a slug.
    pub fn classify(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let mut segments = path.split('/').filter(|s| !s.is_empty());

        let Some(first) = segments.next() else {
            return RouteArea::Marketing;
        };
        let rest: Vec<&str> = segments.collect();

        if first == "dashboard" {
            return RouteArea::Dashboard;
        }
        if !rest.is_empty() {
            return RouteArea::NotFound;
        }

        match first {
            "authenticate" => RouteArea::Authentication,
            "create-store" => RouteArea::Onboarding,
            s if MARKETING_SEGMENTS.contains(&s) => RouteArea::Marketing,
            s if UNGUARDED_SEGMENTS.contains(&s) => RouteArea::Unguarded,
            s if is_shop_slug(s) => RouteArea::Storefront,
            _ => RouteArea::NotFound,
        }
    }
}

/// Whether a single path segment can address a public shop
pub fn is_shop_slug(segment: &str) -> bool {
    let segment = segment.to_ascii_lowercase();
    !segment.is_empty()
        && !segment.starts_with('-')
        && !segment.ends_with('-')
        && segment
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !RESERVED_SEGMENTS.contains(&segment.as_str())
        && !MARKETING_SEGMENTS.contains(&segment.as_str())
        && !UNGUARDED_SEGMENTS.contains(&segment.as_str())
}

/// Slug a shop name would be reached under, if it makes a valid one
pub fn shop_slug(shop_name: &str) -> Option<String> {
    let mut slug = String::with_capacity(shop_name.len());
    for c in shop_name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_matches('-').to_string();
    is_shop_slug(&slug).then_some(slug)
}

/// Where a redirect sends the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RedirectTarget {
    #[display("/home")]
    Landing,
    #[display("/create-store")]
    Onboarding,
    #[display("/dashboard")]
    Dashboard,
}

impl RedirectTarget {
    pub fn path(&self) -> &'static str {
        match self {
            RedirectTarget::Landing => HOME_ROUTE,
            RedirectTarget::Onboarding => CREATE_STORE_ROUTE,
            RedirectTarget::Dashboard => DASHBOARD_ROUTE,
        }
    }

    /// The page a signed-in user lands on for an access level
    pub fn home_for(access: AccessLevel) -> Self {
        match access {
            AccessLevel::Anonymous => RedirectTarget::Landing,
            AccessLevel::Onboarding => RedirectTarget::Onboarding,
            AccessLevel::Seller => RedirectTarget::Dashboard,
        }
    }
}

/// A redirect instruction. The redirected-from entry never stays in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub target: RedirectTarget,
    pub replace: bool,
}

impl Redirect {
    fn to(target: RedirectTarget) -> Self {
        Self {
            target,
            replace: true,
        }
    }

    pub fn path(&self) -> &'static str {
        self.target.path()
    }
}

/// Outcome of evaluating a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(Redirect),
}

impl RouteDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RouteDecision::Allow)
    }

    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            RouteDecision::Allow => None,
            RouteDecision::Redirect(r) => Some(r.path()),
        }
    }
}

/// The decision table.
pub fn decide(access: AccessLevel, area: RouteArea) -> RouteDecision {
    match (area, access) {
        (RouteArea::Marketing | RouteArea::Authentication, AccessLevel::Anonymous) => {
            RouteDecision::Allow
        }
        (RouteArea::Marketing | RouteArea::Authentication, AccessLevel::Onboarding) => {
            redirect(RedirectTarget::Onboarding)
        }
        (RouteArea::Marketing | RouteArea::Authentication, AccessLevel::Seller) => {
            redirect(RedirectTarget::Dashboard)
        }

        (RouteArea::Onboarding, AccessLevel::Anonymous) => redirect(RedirectTarget::Landing),
        (RouteArea::Onboarding, AccessLevel::Onboarding) => RouteDecision::Allow,
        (RouteArea::Onboarding, AccessLevel::Seller) => redirect(RedirectTarget::Dashboard),

        (RouteArea::Dashboard, AccessLevel::Anonymous) => redirect(RedirectTarget::Landing),
        (RouteArea::Dashboard, AccessLevel::Onboarding) => redirect(RedirectTarget::Onboarding),
        (RouteArea::Dashboard, AccessLevel::Seller) => RouteDecision::Allow,

        (RouteArea::Unguarded | RouteArea::Storefront | RouteArea::NotFound, _) => {
            RouteDecision::Allow
        }
    }
}

fn redirect(target: RedirectTarget) -> RouteDecision {
    RouteDecision::Redirect(Redirect::to(target))
}

/// Classify `path` and decide for `identity`.
pub fn resolve(identity: Option<&Identity>, path: &str) -> RouteDecision {
    decide(AccessLevel::of(identity), RouteArea::classify(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_marketing_pages() {
        for path in ["/", "", "/home", "/about", "/pricing", "/features", "/contact", "/home/"] {
            assert_eq!(RouteArea::classify(path), RouteArea::Marketing, "{path}");
        }
    }

    #[test]
    fn test_classify_guarded_pages() {
        assert_eq!(RouteArea::classify("/authenticate"), RouteArea::Authentication);
        assert_eq!(RouteArea::classify("/create-store"), RouteArea::Onboarding);
        assert_eq!(RouteArea::classify("/dashboard"), RouteArea::Dashboard);
        assert_eq!(RouteArea::classify("/dashboard/orders"), RouteArea::Dashboard);
        assert_eq!(RouteArea::classify("/dashboard/products/"), RouteArea::Dashboard);
    }

    #[test]
    fn test_reserved_names_match_case_sensitively() {
        for path in ["/Dashboard", "/DASHBOARD/orders", "/Create-Store", "/Authenticate", "/Home"] {
            assert_eq!(RouteArea::classify(path), RouteArea::NotFound, "{path}");
        }
        assert_eq!(RouteArea::classify("/Fashion-Boutique"), RouteArea::Storefront);
    }

    #[test]
    fn test_classify_ignores_query_and_fragment() {
        assert_eq!(
            RouteArea::classify("/verify-email?token=abc"),
            RouteArea::Unguarded
        );
        assert_eq!(RouteArea::classify("/pricing#plans"), RouteArea::Marketing);
        assert_eq!(
            RouteArea::classify("/reset-password?token=x/y"),
            RouteArea::Unguarded
        );
    }

    #[test]
    fn test_classify_storefront_and_not_found() {
        assert_eq!(RouteArea::classify("/fashion-boutique"), RouteArea::Storefront);
        assert_eq!(RouteArea::classify("/shop42"), RouteArea::Storefront);
        assert_eq!(RouteArea::classify("/not-found"), RouteArea::NotFound);
        assert_eq!(RouteArea::classify("/fashion-boutique/extra"), RouteArea::NotFound);
        assert_eq!(RouteArea::classify("/bad_slug!"), RouteArea::NotFound);
        assert_eq!(RouteArea::classify("/-leading"), RouteArea::NotFound);
    }

    #[test]
    fn test_reserved_names_are_not_slugs() {
        assert!(!is_shop_slug("dashboard"));
        assert!(!is_shop_slug("home"));
        assert!(!is_shop_slug("privacy-policy"));
        assert!(!is_shop_slug(""));
        assert!(is_shop_slug("Fashion-Boutique"));
    }

    #[test]
    fn test_redirects_always_replace_history() {
        let decision = decide(AccessLevel::Anonymous, RouteArea::Dashboard);
        match decision {
            RouteDecision::Redirect(r) => {
                assert!(r.replace);
                assert_eq!(r.path(), HOME_ROUTE);
            }
            RouteDecision::Allow => panic!("dashboard must not be open to anonymous users"),
        }
    }

    #[test]
    fn test_redirect_target_display_matches_path() {
        assert_eq!(RedirectTarget::Landing.to_string(), "/home");
        assert_eq!(RedirectTarget::Onboarding.to_string(), "/create-store");
        assert_eq!(RedirectTarget::Dashboard.to_string(), "/dashboard");
    }

    #[test]
    fn test_dashboard_sub_page_paths() {
        assert_eq!(dashboard::path(dashboard::ORDERS), "/dashboard/orders");
        assert_eq!(RouteArea::classify(&dashboard::path(dashboard::SETTINGS)), RouteArea::Dashboard);
    }

    #[test]
    fn test_shop_slug_from_name() {
        assert_eq!(shop_slug("Fashion Boutique").as_deref(), Some("fashion-boutique"));
        assert_eq!(shop_slug("  Ali's  Shoes!! ").as_deref(), Some("ali-s-shoes"));
        assert_eq!(shop_slug("Dashboard"), None);
        assert_eq!(shop_slug("***"), None);
    }
}
