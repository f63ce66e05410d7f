//! Session context for the component tree
//!
//! Wraps the persisted [`Session`] in reactive signals. The stores are read
//! after hydration, so server and client render the same markup; until then
//! `ready` is false and guarded routes render a spinner.

use std::sync::Arc;

use leptos::logging::warn;
use leptos::prelude::*;

use crate::core::api::ApiError;
use crate::core::{
    AccessLevel, AuthenticatedUser, BrowserStorage, Identity, RouteArea, RouteDecision, Session,
    ShopSummary, StoreError, decide,
};

/// Reactive view of the signed-in seller
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: StoredValue<Session>,
    /// Current identity, `None` when signed out
    pub identity: RwSignal<Option<Identity>>,
    /// The seller's shop once loaded or created
    pub shop: RwSignal<Option<ShopSummary>>,
    /// Whether the persisted stores have been read
    pub ready: RwSignal<bool>,
}

impl SessionContext {
    fn new(session: Session) -> Self {
        Self {
            session: StoredValue::new(session),
            identity: RwSignal::new(None),
            shop: RwSignal::new(None),
            ready: RwSignal::new(false),
        }
    }

    fn sync(&self) {
        let (identity, shop) = self
            .session
            .with_value(|session| (session.identity(), session.shop()));
        self.identity.set(identity);
        self.shop.set(shop);
    }

    pub fn access_level(&self) -> AccessLevel {
        self.identity.with(|identity| AccessLevel::of(identity.as_ref()))
    }

    /// Route decision for `area`, or `None` while it depends on a session
    /// that has not been read yet.
    pub fn decision(&self, area: RouteArea) -> Option<RouteDecision> {
        if self.ready.get() {
            Some(decide(self.access_level(), area))
        } else {
            is_open(area).then_some(RouteDecision::Allow)
        }
    }

    pub fn token(&self) -> Option<String> {
        self.session.with_value(Session::token)
    }

    pub fn sign_in(&self, user: AuthenticatedUser) -> Result<(), StoreError> {
        self.session.with_value(|session| session.sign_in(user))
    }

    pub fn refresh_profile(&self, identity: Identity) -> Result<(), StoreError> {
        self.session
            .with_value(|session| session.refresh_profile(identity))
    }

    pub fn shop_created(&self, shop: ShopSummary) -> Result<(), StoreError> {
        self.session.with_value(|session| session.shop_created(shop))
    }

    pub fn shop_loaded(&self, shop: ShopSummary) {
        if let Err(e) = self.session.with_value(|session| session.shop_loaded(shop)) {
            warn!("Failed to store shop: {}", e);
        }
    }

    pub fn shop_missing(&self) {
        if let Err(e) = self.session.with_value(Session::shop_missing) {
            warn!("Failed to store shop status: {}", e);
        }
    }

    /// Clear the session. Guarded pages redirect on their own.
    pub fn sign_out(&self) {
        if let Err(e) = self.session.with_value(Session::sign_out) {
            warn!("Failed to clear session: {}", e);
            // Every removal was attempted; the UI is signed out regardless.
            self.identity.set(None);
            self.shop.set(None);
        }
    }

    /// User-facing message for an API error; an expired session signs out.
    pub fn handle_api_error(&self, error: &ApiError) -> String {
        if error.is_unauthorized() {
            self.sign_out();
        }
        error.to_string()
    }
}

/// Whether every access level may see `area`
fn is_open(area: RouteArea) -> bool {
    [
        AccessLevel::Anonymous,
        AccessLevel::Onboarding,
        AccessLevel::Seller,
    ]
    .into_iter()
    .all(|access| decide(access, area).is_allowed())
}

/// Provide session context to the component tree
pub fn provide_session_context() -> SessionContext {
    let ctx = SessionContext::new(Session::new(Arc::new(BrowserStorage)));

    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            ctx.sync();
            ctx.ready.set(true);

            let subscription = ctx
                .session
                .with_value(|session| session.subscribe(move || ctx.sync()));
            on_cleanup(move || {
                ctx.session
                    .with_value(|session| session.unsubscribe(subscription));
            });
        });
    }

    provide_context(ctx);

    ctx
}

/// Use session context from anywhere in the component tree
pub fn use_session_context() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_areas_need_no_session() {
        assert!(is_open(RouteArea::Storefront));
        assert!(is_open(RouteArea::Unguarded));
        assert!(is_open(RouteArea::NotFound));
        assert!(!is_open(RouteArea::Marketing));
        assert!(!is_open(RouteArea::Authentication));
        assert!(!is_open(RouteArea::Onboarding));
        assert!(!is_open(RouteArea::Dashboard));
    }
}
