//! Session state and the route policy host
//!
//! [`Session`] owns the identity store and the shop store and exposes the
//! lifecycle writes the pages perform (sign in, shop created, sign out, ...).
//! [`SessionRouter`] evaluates the route policy against whatever the identity
//! store holds at call time.

use std::sync::Arc;

use crate::core::identity::{AccessLevel, Identity, ShopStatus, ShopSummary};
use crate::core::routing::{RouteArea, RouteDecision, decide};
use crate::core::store::{KeyValueStorage, PersistedStore, StoreError, SubscriptionId};

pub const PROFILE_STORAGE_KEY: &str = "vendoo-user-profile";
pub const TOKEN_STORAGE_KEY: &str = "vendoo-auth-token";
pub const SHOP_STORAGE_KEY: &str = "vendoo-user-shop";

/// Result of a successful sign-in (credentials or Google)
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub identity: Identity,
    pub token: String,
}

/// Signed-in identity plus its bearer token
#[derive(Debug, Clone)]
pub struct IdentityStore {
    profile: PersistedStore<Identity>,
    token: PersistedStore<String>,
}

impl IdentityStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            profile: PersistedStore::new(PROFILE_STORAGE_KEY, Arc::clone(&storage)),
            token: PersistedStore::new(TOKEN_STORAGE_KEY, storage),
        }
    }

    pub fn get(&self) -> Result<Option<Identity>, StoreError> {
        self.profile.get()
    }

    pub fn set(&self, identity: Option<Identity>) -> Result<(), StoreError> {
        self.profile.set(identity)
    }

    /// Change only the shop status. Does nothing when nobody is signed in.
    pub fn update_shop_status(&self, status: ShopStatus) -> Result<(), StoreError> {
        self.profile.update(|identity| identity.with_shop_status(status))
    }

    pub fn token(&self) -> Result<Option<String>, StoreError> {
        self.token.get()
    }

    pub fn set_token(&self, token: Option<String>) -> Result<(), StoreError> {
        self.token.set(token)
    }

    /// Remove profile and token. Both removals are attempted; the first
    /// failure is returned.
    pub fn clear(&self) -> Result<(), StoreError> {
        let profile = self.profile.clear();
        let token = self.token.clear();
        profile.and(token)
    }

    pub fn subscribe(
        &self,
        listener: impl Fn(Option<&Identity>) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.profile.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.profile.unsubscribe(id);
    }
}

/// The current identity's shop summary
#[derive(Debug, Clone)]
pub struct ShopStore {
    shop: PersistedStore<ShopSummary>,
}

impl ShopStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            shop: PersistedStore::new(SHOP_STORAGE_KEY, storage),
        }
    }

    pub fn get(&self) -> Result<Option<ShopSummary>, StoreError> {
        self.shop.get()
    }

    pub fn set(&self, shop: Option<ShopSummary>) -> Result<(), StoreError> {
        self.shop.set(shop)
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.shop.clear()
    }

    pub fn subscribe(
        &self,
        listener: impl Fn(Option<&ShopSummary>) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.shop.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.shop.unsubscribe(id);
    }
}

/// Read-only route policy bound to an identity store.
#[derive(Debug, Clone)]
pub struct SessionRouter {
    identities: IdentityStore,
}

impl SessionRouter {
    pub fn new(identities: IdentityStore) -> Self {
        Self { identities }
    }

    /// Current identity; unreadable or malformed state counts as signed out.
    pub fn identity(&self) -> Option<Identity> {
        match self.identities.get() {
            Ok(identity) => identity,
            Err(e) => {
                leptos::logging::warn!("Identity store unreadable, routing as anonymous: {}", e);
                None
            }
        }
    }

    pub fn access_level(&self) -> AccessLevel {
        AccessLevel::of(self.identity().as_ref())
    }

    pub fn evaluate(&self, path: &str) -> RouteDecision {
        self.evaluate_area(RouteArea::classify(path))
    }

    pub fn evaluate_area(&self, area: RouteArea) -> RouteDecision {
        decide(self.access_level(), area)
    }
}

/// Both client-side stores and the writes that keep them consistent.
#[derive(Debug, Clone)]
pub struct Session {
    identities: IdentityStore,
    shops: ShopStore,
}

/// Subscriptions created by [`Session::subscribe`]
#[derive(Debug, Clone, Copy)]
pub struct SessionSubscription {
    identity: SubscriptionId,
    shop: SubscriptionId,
}

impl Session {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            identities: IdentityStore::new(Arc::clone(&storage)),
            shops: ShopStore::new(storage),
        }
    }

    pub fn from_stores(identities: IdentityStore, shops: ShopStore) -> Self {
        Self { identities, shops }
    }

    pub fn identities(&self) -> &IdentityStore {
        &self.identities
    }

    pub fn shops(&self) -> &ShopStore {
        &self.shops
    }

    pub fn router(&self) -> SessionRouter {
        SessionRouter::new(self.identities.clone())
    }

    pub fn identity(&self) -> Option<Identity> {
        self.router().identity()
    }

    pub fn access_level(&self) -> AccessLevel {
        self.router().access_level()
    }

    /// Cached shop summary; unreadable state counts as not loaded.
    pub fn shop(&self) -> Option<ShopSummary> {
        self.shops.get().ok().flatten()
    }

    pub fn token(&self) -> Option<String> {
        self.identities.token().ok().flatten()
    }

    /// Store a fresh sign-in. Any shop cached for a previous user is dropped.
    ///
    /// On failure whatever was written is removed again, so a partial
    /// sign-in never grants access.
    pub fn sign_in(&self, user: AuthenticatedUser) -> Result<(), StoreError> {
        let result = self
            .shops
            .clear()
            .and_then(|()| self.identities.set(Some(user.identity)))
            .and_then(|()| self.identities.set_token(Some(user.token)));
        if result.is_err() {
            let _ = self.identities.clear();
        }
        result
    }

    /// Replace the profile with one fetched from the server.
    ///
    /// A seller stays a seller: profile responses may omit `has_shop` or
    /// report it stale, and only sign-out ends `HasShop`.
    pub fn refresh_profile(&self, identity: Identity) -> Result<(), StoreError> {
        let identity = if self.shop_status() == Some(ShopStatus::HasShop) {
            identity.with_shop_status(ShopStatus::HasShop)
        } else {
            identity
        };
        self.identities.set(Some(identity))
    }

    /// Shop creation succeeded.
    pub fn shop_created(&self, shop: ShopSummary) -> Result<(), StoreError> {
        self.shops.set(Some(shop))?;
        self.identities.update_shop_status(ShopStatus::HasShop)
    }

    /// The shop lookup returned a shop. Settles an unknown status.
    pub fn shop_loaded(&self, shop: ShopSummary) -> Result<(), StoreError> {
        self.shops.set(Some(shop))?;
        if self.shop_status() == Some(ShopStatus::Unknown) {
            self.identities.update_shop_status(ShopStatus::HasShop)?;
        }
        Ok(())
    }

    /// The shop lookup confirmed there is no shop. Never demotes `HasShop`.
    pub fn shop_missing(&self) -> Result<(), StoreError> {
        if self.shop_status() == Some(ShopStatus::Unknown) {
            self.identities.update_shop_status(ShopStatus::NoShop)?;
        }
        Ok(())
    }

    /// Clear the session and everything derived from it.
    ///
    /// The identity goes first and every removal is attempted even when an
    /// earlier one fails; the first failure is returned.
    pub fn sign_out(&self) -> Result<(), StoreError> {
        let identity = self.identities.clear();
        let shop = self.shops.clear();
        identity.and(shop)
    }

    /// Call `listener` whenever either store changes.
    ///
    /// Hosts re-run the route policy from this callback; each call must be
    /// treated as a fresh evaluation.
    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) -> SessionSubscription {
        let listener = Arc::new(listener);
        let on_identity = Arc::clone(&listener);
        let identity = self.identities.subscribe(move |_| on_identity());
        let shop = self.shops.subscribe(move |_| listener());
        SessionSubscription { identity, shop }
    }

    pub fn unsubscribe(&self, subscription: SessionSubscription) {
        self.identities.unsubscribe(subscription.identity);
        self.shops.unsubscribe(subscription.shop);
    }

    fn shop_status(&self) -> Option<ShopStatus> {
        self.identity().map(|i| i.shop_status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::{MemoryStorage, StorageError};
    use std::sync::Mutex;

    fn session() -> (MemoryStorage, Session) {
        let storage = MemoryStorage::new();
        (storage.clone(), Session::new(Arc::new(storage)))
    }

    fn user(status: ShopStatus) -> AuthenticatedUser {
        let mut identity = Identity::new("u-1", status);
        identity.name = Some("Esi".to_string());
        AuthenticatedUser {
            identity,
            token: "tok-1".to_string(),
        }
    }

    fn shop() -> ShopSummary {
        ShopSummary {
            shop_name: "Fashion Boutique".to_string(),
            status: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_sign_in_persists_identity_and_token() {
        let (storage, session) = session();
        session.sign_in(user(ShopStatus::NoShop)).unwrap();

        assert_eq!(session.token().as_deref(), Some("tok-1"));
        assert_eq!(session.access_level(), AccessLevel::Onboarding);
        assert!(storage.raw(PROFILE_STORAGE_KEY).is_some());

        // A second handle over the same storage sees the same session.
        let reloaded = Session::new(Arc::new(storage));
        assert_eq!(reloaded.identity().unwrap().name.as_deref(), Some("Esi"));
    }

    #[test]
    fn test_sign_in_drops_previous_users_shop() {
        let (_, session) = session();
        session.sign_in(user(ShopStatus::HasShop)).unwrap();
        session.shop_loaded(shop()).unwrap();

        session.sign_in(user(ShopStatus::NoShop)).unwrap();
        assert!(session.shop().is_none());
    }

    #[test]
    fn test_shop_created_promotes_identity() {
        let (_, session) = session();
        session.sign_in(user(ShopStatus::NoShop)).unwrap();
        session.shop_created(shop()).unwrap();

        assert_eq!(session.access_level(), AccessLevel::Seller);
        assert_eq!(session.shop().unwrap().shop_name, "Fashion Boutique");
    }

    #[test]
    fn test_shop_loaded_settles_unknown_status() {
        let (_, session) = session();
        session.sign_in(user(ShopStatus::Unknown)).unwrap();
        session.shop_loaded(shop()).unwrap();
        assert_eq!(session.identity().unwrap().shop_status, ShopStatus::HasShop);
    }

    #[test]
    fn test_shop_missing_never_demotes_seller() {
        let (_, session) = session();
        session.sign_in(user(ShopStatus::HasShop)).unwrap();
        session.shop_missing().unwrap();
        assert_eq!(session.identity().unwrap().shop_status, ShopStatus::HasShop);

        session.sign_in(user(ShopStatus::Unknown)).unwrap();
        session.shop_missing().unwrap();
        assert_eq!(session.identity().unwrap().shop_status, ShopStatus::NoShop);
    }

    #[test]
    fn test_update_shop_status_without_identity_is_noop() {
        let (_, session) = session();
        session
            .identities()
            .update_shop_status(ShopStatus::HasShop)
            .unwrap();
        assert!(session.identity().is_none());
    }

    #[test]
    fn test_sign_out_clears_everything() {
        let (storage, session) = session();
        session.sign_in(user(ShopStatus::HasShop)).unwrap();
        session.shop_loaded(shop()).unwrap();

        session.sign_out().unwrap();

        assert!(session.identity().is_none());
        assert!(session.token().is_none());
        assert!(session.shop().is_none());
        assert!(storage.raw(PROFILE_STORAGE_KEY).is_none());
        assert!(storage.raw(TOKEN_STORAGE_KEY).is_none());
        assert!(storage.raw(SHOP_STORAGE_KEY).is_none());
    }

    /// Memory storage that refuses to remove one key
    struct StickyKey {
        inner: MemoryStorage,
        key: &'static str,
    }

    impl KeyValueStorage for StickyKey {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get_item(key)
        }
        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.inner.set_item(key, value)
        }
        fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            if key == self.key {
                return Err(StorageError::WriteRejected(key.to_string()));
            }
            self.inner.remove_item(key)
        }
    }

    /// Storage that refuses writes to one key
    struct ReadOnlyKey {
        inner: MemoryStorage,
        key: &'static str,
    }

    impl KeyValueStorage for ReadOnlyKey {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get_item(key)
        }
        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == self.key {
                return Err(StorageError::WriteRejected(key.to_string()));
            }
            self.inner.set_item(key, value)
        }
        fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove_item(key)
        }
    }

    #[test]
    fn test_sign_out_clears_identity_when_shop_removal_fails() {
        let inner = MemoryStorage::new();
        let session = Session::new(Arc::new(StickyKey {
            inner: inner.clone(),
            key: SHOP_STORAGE_KEY,
        }));
        session.sign_in(user(ShopStatus::HasShop)).unwrap();
        session.shop_loaded(shop()).unwrap();

        let result = session.sign_out();

        assert_eq!(
            result,
            Err(StoreError::Storage(StorageError::WriteRejected(
                SHOP_STORAGE_KEY.to_string()
            )))
        );
        assert!(session.identity().is_none());
        assert!(session.token().is_none());
        assert_eq!(session.access_level(), AccessLevel::Anonymous);
        assert!(inner.raw(PROFILE_STORAGE_KEY).is_none());
        assert!(inner.raw(TOKEN_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_sign_out_still_clears_token_when_profile_removal_fails() {
        let inner = MemoryStorage::new();
        let session = Session::new(Arc::new(StickyKey {
            inner: inner.clone(),
            key: PROFILE_STORAGE_KEY,
        }));
        session.sign_in(user(ShopStatus::HasShop)).unwrap();
        session.shop_loaded(shop()).unwrap();

        assert!(session.sign_out().is_err());
        assert!(inner.raw(TOKEN_STORAGE_KEY).is_none());
        assert!(inner.raw(SHOP_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_failed_sign_in_leaves_nobody_signed_in() {
        let inner = MemoryStorage::new();
        let session = Session::new(Arc::new(ReadOnlyKey {
            inner: inner.clone(),
            key: TOKEN_STORAGE_KEY,
        }));

        assert!(session.sign_in(user(ShopStatus::HasShop)).is_err());
        assert!(session.identity().is_none());
        assert_eq!(session.access_level(), AccessLevel::Anonymous);
        assert!(inner.raw(PROFILE_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_refresh_profile_keeps_seller_status() {
        let (_, session) = session();
        session.sign_in(user(ShopStatus::NoShop)).unwrap();
        session.shop_created(shop()).unwrap();

        let mut refreshed = Identity::new("u-1", ShopStatus::Unknown);
        refreshed.phone_number = "+233 20 000 0000".to_string();
        session.refresh_profile(refreshed).unwrap();

        let identity = session.identity().unwrap();
        assert_eq!(identity.shop_status, ShopStatus::HasShop);
        assert_eq!(identity.phone_number, "+233 20 000 0000");
    }

    #[test]
    fn test_refresh_profile_can_promote() {
        let (_, session) = session();
        session.sign_in(user(ShopStatus::Unknown)).unwrap();
        session
            .refresh_profile(Identity::new("u-1", ShopStatus::HasShop))
            .unwrap();
        assert_eq!(session.access_level(), AccessLevel::Seller);
    }

    #[test]
    fn test_subscribe_fires_for_both_stores() {
        let (_, session) = session();
        let calls = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&calls);
        let subscription = session.subscribe(move || *sink.lock().unwrap() += 1);

        session.refresh_profile(Identity::new("u-1", ShopStatus::NoShop)).unwrap();
        session.shops().set(Some(shop())).unwrap();
        assert_eq!(*calls.lock().unwrap(), 2);

        session.unsubscribe(subscription);
        session.sign_out().unwrap();
        assert_eq!(*calls.lock().unwrap(), 2);
    }

    #[test]
    fn test_router_reads_latest_committed_identity() {
        let (_, session) = session();
        let router = session.router();
        assert_eq!(router.access_level(), AccessLevel::Anonymous);

        session.sign_in(user(ShopStatus::HasShop)).unwrap();
        assert_eq!(router.access_level(), AccessLevel::Seller);
    }
}
