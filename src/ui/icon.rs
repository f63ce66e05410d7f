use leptos::prelude::*;

/// Inline outline icon (24x24 viewBox, stroked with `currentColor`)
#[component]
pub fn Icon(
    /// Icon name, one of [`icons`]
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            stroke-width="2"
            aria-hidden="true"
        >
            {icons::paths(name)
                .iter()
                .copied()
                .map(|d| view! { <path stroke-linecap="round" stroke-linejoin="round" d=d /> })
                .collect_view()}
        </svg>
    }
}

/// Named icons
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const CHECK: &str = "check";
    pub const EYE: &str = "eye";
    pub const EYE_CLOSED: &str = "eye-closed";
    pub const HOME: &str = "home";
    pub const ORDERS: &str = "orders";
    pub const PRODUCTS: &str = "products";
    pub const CATEGORIES: &str = "categories";
    pub const CUSTOMERS: &str = "customers";
    pub const USER: &str = "user";
    pub const SETTINGS: &str = "settings";
    pub const LOGOUT: &str = "logout";
    pub const STORE: &str = "store";
    pub const MAIL: &str = "mail";
    pub const PHONE: &str = "phone";
    pub const LOCATION: &str = "location";
    pub const SEARCH: &str = "search";
    pub const SPINNER: &str = "spinner";

    /// SVG path data for `name`; unknown names render an empty icon.
    pub fn paths(name: &str) -> &'static [&'static str] {
        match name {
            ALERT_CIRCLE => &["M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z"],
            CHECK => &["M5 13l4 4L19 7"],
            EYE => &[
                "M15 12a3 3 0 11-6 0 3 3 0 016 0z",
                "M2.458 12C3.732 7.943 7.523 5 12 5c4.478 0 8.268 2.943 9.542 7-1.274 4.057-5.064 7-9.542 7-4.477 0-8.268-2.943-9.542-7z",
            ],
            EYE_CLOSED => &[
                "M13.875 18.825A10.05 10.05 0 0112 19c-4.478 0-8.268-2.943-9.543-7a9.97 9.97 0 011.563-3.029M6.228 6.228A9.956 9.956 0 0112 5c4.478 0 8.268 2.943 9.543 7a10.025 10.025 0 01-4.132 5.411M3 3l18 18",
            ],
            HOME => &["M3 12l2-2m0 0l7-7 7 7M5 10v10a1 1 0 001 1h3m10-11l2 2m-2-2v10a1 1 0 01-1 1h-3m-6 0a1 1 0 001-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 001 1m-6 0h6"],
            ORDERS => &["M16 11V7a4 4 0 00-8 0v4M5 9h14l1 12H4L5 9z"],
            PRODUCTS => &["M20 7l-8-4-8 4m16 0l-8 4m8-4v10l-8 4m0-10L4 7m8 4v10M4 7v10l8 4"],
            CATEGORIES => &["M4 6h16M4 12h16M4 18h7"],
            CUSTOMERS => &["M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0z"],
            USER => &["M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z"],
            SETTINGS => &[
                "M10.325 4.317c.426-1.756 2.924-1.756 3.35 0a1.724 1.724 0 002.573 1.066c1.543-.94 3.31.826 2.37 2.37a1.724 1.724 0 001.065 2.572c1.756.426 1.756 2.924 0 3.35a1.724 1.724 0 00-1.066 2.573c.94 1.543-.826 3.31-2.37 2.37a1.724 1.724 0 00-2.572 1.065c-.426 1.756-2.924 1.756-3.35 0a1.724 1.724 0 00-2.573-1.066c-1.543.94-3.31-.826-2.37-2.37a1.724 1.724 0 00-1.065-2.572c-1.756-.426-1.756-2.924 0-3.35a1.724 1.724 0 001.066-2.573c-.94-1.543.826-3.31 2.37-2.37.996.608 2.296.07 2.572-1.065z",
                "M15 12a3 3 0 11-6 0 3 3 0 016 0z",
            ],
            LOGOUT => &["M17 16l4-4m0 0l-4-4m4 4H7m6 4v1a3 3 0 01-3 3H6a3 3 0 01-3-3V7a3 3 0 013-3h4a3 3 0 013 3v1"],
            STORE => &["M3 9l1.5-5h15L21 9M3 9h18M3 9v11h18V9M9 20v-6h6v6"],
            MAIL => &["M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"],
            PHONE => &["M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z"],
            LOCATION => &[
                "M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z",
                "M15 11a3 3 0 11-6 0 3 3 0 016 0z",
            ],
            SEARCH => &["M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z"],
            SPINNER => &["M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15"],
            _ => &[],
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_every_named_icon_has_paths() {
            for name in [
                ALERT_CIRCLE, CHECK, EYE, EYE_CLOSED, HOME, ORDERS, PRODUCTS, CATEGORIES,
                CUSTOMERS, USER, SETTINGS, LOGOUT, STORE, MAIL, PHONE, LOCATION, SEARCH, SPINNER,
            ] {
                assert!(!paths(name).is_empty(), "{name}");
            }
            assert!(paths("unknown").is_empty());
        }
    }
}
