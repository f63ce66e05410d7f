#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::core::{
        AccessLevel, AuthenticatedUser, Identity, IdentityStore, KeyValueStorage, MemoryStorage,
        RedirectTarget, RouteArea, RouteDecision, Session, SessionRouter, ShopStatus, ShopSummary,
        StorageError, decide, resolve,
    };

    const ACCESS_LEVELS: [AccessLevel; 3] = [
        AccessLevel::Anonymous,
        AccessLevel::Onboarding,
        AccessLevel::Seller,
    ];

    const AREAS: [RouteArea; 7] = [
        RouteArea::Marketing,
        RouteArea::Authentication,
        RouteArea::Onboarding,
        RouteArea::Dashboard,
        RouteArea::Unguarded,
        RouteArea::Storefront,
        RouteArea::NotFound,
    ];

    fn identity(status: ShopStatus) -> Identity {
        Identity::new("user-1", status)
    }

    fn redirect_to(target: RedirectTarget) -> Option<&'static str> {
        Some(target.path())
    }

    /// Backend whose reads always fail
    struct UnreadableStorage;

    impl KeyValueStorage for UnreadableStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }
        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
        fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    // ========================================================================
    // Decision table
    // ========================================================================

    #[test]
    fn test_table_matches_expected_outcomes() {
        use AccessLevel as A;
        use RedirectTarget as T;

        let expected: [(RouteArea, [Option<&str>; 3]); 7] = [
            (RouteArea::Marketing, [None, redirect_to(T::Onboarding), redirect_to(T::Dashboard)]),
            (
                RouteArea::Authentication,
                [None, redirect_to(T::Onboarding), redirect_to(T::Dashboard)],
            ),
            (RouteArea::Onboarding, [redirect_to(T::Landing), None, redirect_to(T::Dashboard)]),
            (RouteArea::Dashboard, [redirect_to(T::Landing), redirect_to(T::Onboarding), None]),
            (RouteArea::Unguarded, [None, None, None]),
            (RouteArea::Storefront, [None, None, None]),
            (RouteArea::NotFound, [None, None, None]),
        ];

        for (area, outcomes) in expected {
            for (access, outcome) in [A::Anonymous, A::Onboarding, A::Seller].into_iter().zip(outcomes) {
                assert_eq!(
                    decide(access, area).redirect_path(),
                    outcome,
                    "{access} requesting {area}"
                );
            }
        }
    }

    #[test]
    fn test_every_combination_has_exactly_one_allowed_outcome() {
        let allowed = [
            None,
            Some("/home"),
            Some("/create-store"),
            Some("/dashboard"),
        ];
        for access in ACCESS_LEVELS {
            for area in AREAS {
                let outcome = decide(access, area).redirect_path();
                assert!(allowed.contains(&outcome), "{access} requesting {area}");
            }
        }
    }

    #[test]
    fn test_redirect_targets_are_never_themselves_redirected() {
        // Following a redirect must land on a page the same user may see.
        for access in ACCESS_LEVELS {
            for area in AREAS {
                if let RouteDecision::Redirect(r) = decide(access, area) {
                    let landing = decide(access, RouteArea::classify(r.path()));
                    assert!(
                        landing.is_allowed(),
                        "{access} bounced from {area} to {} which redirects again",
                        r.path()
                    );
                }
            }
        }
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let paths = ["/", "/home", "/authenticate", "/create-store", "/dashboard/orders", "/shop-1"];
        let identities = [
            None,
            Some(identity(ShopStatus::Unknown)),
            Some(identity(ShopStatus::NoShop)),
            Some(identity(ShopStatus::HasShop)),
        ];
        for identity in &identities {
            for path in paths {
                let first = resolve(identity.as_ref(), path);
                let second = resolve(identity.as_ref(), path);
                assert_eq!(first, second, "{path}");
            }
        }
    }

    #[test]
    fn test_unknown_shop_status_routes_like_no_shop() {
        let unknown = identity(ShopStatus::Unknown);
        let no_shop = identity(ShopStatus::NoShop);
        for path in ["/home", "/authenticate", "/create-store", "/dashboard", "/dashboard/profile"] {
            assert_eq!(resolve(Some(&unknown), path), resolve(Some(&no_shop), path), "{path}");
        }
    }

    // ========================================================================
    // Session-level properties
    // ========================================================================

    #[test]
    fn test_onboarding_redirects_to_dashboard_once_shop_exists() {
        let session = Session::new(Arc::new(MemoryStorage::new()));
        let router = session.router();
        session
            .sign_in(AuthenticatedUser {
                identity: identity(ShopStatus::NoShop),
                token: "t".to_string(),
            })
            .unwrap();
        assert!(router.evaluate("/create-store").is_allowed());

        session
            .shop_created(ShopSummary {
                shop_name: "Kente Corner".to_string(),
                ..Default::default()
            })
            .unwrap();

        for _ in 0..3 {
            assert_eq!(router.evaluate("/create-store").redirect_path(), Some("/dashboard"));
        }
        session.refresh_profile(identity(ShopStatus::HasShop)).unwrap();
        assert_eq!(router.evaluate("/create-store").redirect_path(), Some("/dashboard"));
    }

    #[test]
    fn test_profile_refresh_never_sends_seller_back_to_onboarding() {
        for refreshed in [ShopStatus::Unknown, ShopStatus::NoShop] {
            let session = Session::new(Arc::new(MemoryStorage::new()));
            let router = session.router();
            session
                .sign_in(AuthenticatedUser {
                    identity: identity(ShopStatus::NoShop),
                    token: "t".to_string(),
                })
                .unwrap();
            session.shop_created(ShopSummary::default()).unwrap();

            session.refresh_profile(identity(refreshed)).unwrap();

            assert_eq!(
                router.evaluate("/create-store").redirect_path(),
                Some("/dashboard"),
                "refreshed with {refreshed:?}"
            );
            assert!(router.evaluate("/dashboard/profile").is_allowed(), "refreshed with {refreshed:?}");
        }
    }

    #[test]
    fn test_unreadable_identity_store_routes_as_anonymous() {
        let router = SessionRouter::new(IdentityStore::new(Arc::new(UnreadableStorage)));
        assert_eq!(router.access_level(), AccessLevel::Anonymous);
        assert_eq!(router.evaluate("/dashboard").redirect_path(), Some("/home"));
        assert!(router.evaluate("/home").is_allowed());
    }

    #[test]
    fn test_malformed_identity_routes_as_anonymous() {
        let storage = MemoryStorage::new();
        storage
            .set_item(
                crate::core::PROFILE_STORAGE_KEY,
                r#"{"state":{"has_shop":"yes please"},"version":0}"#,
            )
            .unwrap();
        let router = Session::new(Arc::new(storage)).router();
        assert_eq!(router.access_level(), AccessLevel::Anonymous);
        assert_eq!(router.evaluate("/create-store").redirect_path(), Some("/home"));
    }

    // ========================================================================
    // Concrete scenarios
    // ========================================================================

    #[test]
    fn test_anonymous_dashboard_goes_to_landing() {
        assert_eq!(resolve(None, "/dashboard").redirect_path(), Some("/home"));
    }

    #[test]
    fn test_no_shop_dashboard_goes_to_onboarding() {
        let id = identity(ShopStatus::NoShop);
        assert_eq!(resolve(Some(&id), "/dashboard").redirect_path(), Some("/create-store"));
    }

    #[test]
    fn test_seller_onboarding_goes_to_dashboard() {
        let id = identity(ShopStatus::HasShop);
        assert_eq!(resolve(Some(&id), "/create-store").redirect_path(), Some("/dashboard"));
    }

    #[test]
    fn test_seller_landing_goes_to_dashboard() {
        let id = identity(ShopStatus::HasShop);
        assert_eq!(resolve(Some(&id), "/home").redirect_path(), Some("/dashboard"));
    }

    #[test]
    fn test_public_shop_ignores_identity() {
        assert_eq!(resolve(None, "/fashion-boutique"), RouteDecision::Allow);
        let id = identity(ShopStatus::HasShop);
        assert_eq!(resolve(Some(&id), "/fashion-boutique"), RouteDecision::Allow);
    }

    #[test]
    fn test_sign_out_then_dashboard_goes_to_landing() {
        let session = Session::new(Arc::new(MemoryStorage::new()));
        session
            .sign_in(AuthenticatedUser {
                identity: identity(ShopStatus::HasShop),
                token: "t".to_string(),
            })
            .unwrap();
        assert!(session.router().evaluate("/dashboard").is_allowed());

        session.sign_out().unwrap();
        assert_eq!(session.router().evaluate("/dashboard").redirect_path(), Some("/home"));
    }

    #[test]
    fn test_unguarded_pages_ignore_identity() {
        let seller = identity(ShopStatus::HasShop);
        for path in [
            "/terms-of-service",
            "/privacy-policy",
            "/verify-email?token=abc",
            "/reset-password?token=abc",
            "/forgot-password",
            "/not-found",
            "/a/b/c",
        ] {
            assert!(resolve(None, path).is_allowed(), "{path}");
            assert!(resolve(Some(&seller), path).is_allowed(), "{path}");
        }
    }
}
