//! Identity and shop models
//!
//! `Identity` is the client-side view of the signed-in seller. It only exists
//! while a session exists; "signed out" is `None`, never an empty struct.
//! `ShopSummary` is the cached description of the shop that seller owns.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Whether the signed-in user owns a shop.
///
/// Persisted as the JSON tri-state `null | false | true` so that stored
/// profiles stay readable by older builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum ShopStatus {
    /// Not known yet (profile loaded, shop lookup still pending)
    #[default]
    #[display("unknown")]
    Unknown,
    /// Confirmed: the user has not created a shop
    #[display("no shop")]
    NoShop,
    /// Confirmed: the user owns a shop
    #[display("has shop")]
    HasShop,
}

impl From<Option<bool>> for ShopStatus {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => ShopStatus::Unknown,
            Some(false) => ShopStatus::NoShop,
            Some(true) => ShopStatus::HasShop,
        }
    }
}

impl From<ShopStatus> for Option<bool> {
    fn from(status: ShopStatus) -> Self {
        match status {
            ShopStatus::Unknown => None,
            ShopStatus::NoShop => Some(false),
            ShopStatus::HasShop => Some(true),
        }
    }
}

/// The currently authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: Option<String>,
    #[serde(rename = "has_shop", default)]
    pub shop_status: ShopStatus,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub phone_number: String,
    pub member_since: Option<String>,
}

impl Identity {
    pub fn new(user_id: impl Into<String>, shop_status: ShopStatus) -> Self {
        Self {
            user_id: Some(user_id.into()),
            shop_status,
            ..Default::default()
        }
    }

    pub fn has_shop(&self) -> bool {
        self.shop_status == ShopStatus::HasShop
    }

    /// Name shown in headers and the dashboard sidebar
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.email.as_deref())
            .unwrap_or("Seller")
    }

    /// Copy with a different shop status; everything else unchanged.
    pub fn with_shop_status(&self, shop_status: ShopStatus) -> Self {
        Self {
            shop_status,
            ..self.clone()
        }
    }
}

/// Cached details of the shop owned by the current identity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShopSummary {
    pub shop_name: String,
    pub shop_description: Option<String>,
    pub category_name: Option<String>,
    pub location: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub status: bool,
}

/// What the current identity is allowed to see, derived from `Identity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AccessLevel {
    #[display("anonymous")]
    Anonymous,
    /// Signed in, shop not created (or not known yet)
    #[display("onboarding")]
    Onboarding,
    #[display("seller")]
    Seller,
}

impl AccessLevel {
    pub fn of(identity: Option<&Identity>) -> Self {
        match identity.map(|i| i.shop_status) {
            None => AccessLevel::Anonymous,
            Some(ShopStatus::Unknown | ShopStatus::NoShop) => AccessLevel::Onboarding,
            Some(ShopStatus::HasShop) => AccessLevel::Seller,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_status_round_trips_as_nullable_bool() {
        let mut identity = Identity::new("42", ShopStatus::Unknown);
        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json["has_shop"], serde_json::Value::Null);

        identity.shop_status = ShopStatus::NoShop;
        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json["has_shop"], serde_json::Value::Bool(false));

        identity.shop_status = ShopStatus::HasShop;
        let json = serde_json::to_string(&identity).unwrap();
        let back: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(back.shop_status, ShopStatus::HasShop);
    }

    #[test]
    fn test_missing_has_shop_reads_as_unknown() {
        let identity: Identity =
            serde_json::from_str(r#"{"user_id":"7","name":"Ama","email":null,"image":null,"member_since":null}"#)
                .unwrap();
        assert_eq!(identity.shop_status, ShopStatus::Unknown);
        assert_eq!(identity.location, "");
    }

    #[test]
    fn test_access_level_treats_unknown_as_onboarding() {
        assert_eq!(AccessLevel::of(None), AccessLevel::Anonymous);

        let unknown = Identity::new("1", ShopStatus::Unknown);
        let no_shop = Identity::new("1", ShopStatus::NoShop);
        let seller = Identity::new("1", ShopStatus::HasShop);

        assert_eq!(AccessLevel::of(Some(&unknown)), AccessLevel::Onboarding);
        assert_eq!(AccessLevel::of(Some(&no_shop)), AccessLevel::Onboarding);
        assert_eq!(AccessLevel::of(Some(&seller)), AccessLevel::Seller);
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut identity = Identity::new("1", ShopStatus::NoShop);
        assert_eq!(identity.display_name(), "Seller");

        identity.email = Some("kofi@vendoo.app".to_string());
        assert_eq!(identity.display_name(), "kofi@vendoo.app");

        identity.name = Some("Kofi".to_string());
        assert_eq!(identity.display_name(), "Kofi");
    }
}
