//! Request and response bodies of the remote API

use serde::{Deserialize, Serialize};

use crate::core::identity::{Identity, ShopStatus, ShopSummary};
use crate::core::session::AuthenticatedUser;

/// User ids arrive as numbers from some endpoints and strings from others.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Number(i64),
    Text(String),
}

impl WireId {
    pub fn into_string(self) -> String {
        match self {
            WireId::Number(n) => n.to_string(),
            WireId::Text(s) => s,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct TokenRequest<'a> {
    pub token: &'a str,
}

#[derive(Debug, Serialize)]
pub struct EmailRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ResetPasswordRequest<'a> {
    pub token: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CreateShopRequest<'a> {
    pub user_id: &'a str,
    pub category_id: &'a str,
    pub shop_name: &'a str,
    pub shop_description: &'a str,
}

/// Editable profile fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub location: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ProfileUpdate {
    pub fn from_identity(identity: &Identity) -> Self {
        Self {
            name: identity.name.clone().unwrap_or_default(),
            email: identity.email.clone().unwrap_or_default(),
            location: identity.location.clone(),
            phone_number: identity.phone_number.clone(),
            image: identity.image.clone(),
        }
    }
}

/// `user` object returned by login, Google login and profile update
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub user_id: Option<WireId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub has_shop: Option<bool>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub member_since: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl From<UserPayload> for Identity {
    fn from(u: UserPayload) -> Self {
        Identity {
            user_id: u.user_id.map(WireId::into_string),
            shop_status: ShopStatus::from(u.has_shop),
            name: u.name,
            email: u.email,
            image: u.image.filter(|i| !i.is_empty()),
            role: u.role,
            location: u.location.unwrap_or_default(),
            phone_number: u.phone_number.unwrap_or_default(),
            member_since: u.member_since,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AuthPayload {
    pub user: UserPayload,
    pub token: String,
}

impl From<AuthPayload> for AuthenticatedUser {
    fn from(payload: AuthPayload) -> Self {
        AuthenticatedUser {
            identity: payload.user.into(),
            token: payload.token,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProfilePayload {
    pub user: UserPayload,
}

#[derive(Debug, Deserialize)]
pub struct MessagePayload {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A shop category offered during onboarding
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    #[serde(rename = "category_id")]
    pub id: WireIdString,
    #[serde(rename = "category")]
    pub name: String,
}

/// Category ids are forwarded verbatim, whatever JSON type they arrive as.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "WireId")]
pub struct WireIdString(pub String);

impl From<WireId> for WireIdString {
    fn from(id: WireId) -> Self {
        WireIdString(id.into_string())
    }
}

impl std::fmt::Display for WireIdString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoriesPayload {
    #[serde(default)]
    pub shop_categories: Vec<Category>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShopPayload {
    #[serde(default)]
    pub shop_name: Option<String>,
    #[serde(default)]
    pub shop_description: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: Option<bool>,
}

impl From<ShopPayload> for ShopSummary {
    fn from(s: ShopPayload) -> Self {
        ShopSummary {
            shop_name: s.shop_name.unwrap_or_default(),
            shop_description: s.shop_description,
            category_name: s.category_name,
            location: s.location,
            phone_number: s.phone,
            email: s.email,
            status: s.status.unwrap_or(false),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ShopDetailsPayload {
    #[serde(default)]
    pub shop_details: Option<ShopPayload>,
    #[serde(default)]
    pub err: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_payload_maps_to_identity() {
        let json = r#"{
            "user": {
                "user_id": 17,
                "name": "Ama Mensah",
                "email": "ama@vendoo.app",
                "image": "",
                "has_shop": false,
                "location": "Accra",
                "phone_number": "+233 20 000 0000",
                "member_since": "2025-01-04"
            },
            "token": "jwt-token"
        }"#;
        let user: AuthenticatedUser = serde_json::from_str::<AuthPayload>(json).unwrap().into();

        assert_eq!(user.token, "jwt-token");
        assert_eq!(user.identity.user_id.as_deref(), Some("17"));
        assert_eq!(user.identity.shop_status, ShopStatus::NoShop);
        assert_eq!(user.identity.image, None);
        assert_eq!(user.identity.location, "Accra");
    }

    #[test]
    fn test_missing_has_shop_is_unknown() {
        let json = r#"{"user": {"user_id": "abc"}, "token": "t"}"#;
        let user: AuthenticatedUser = serde_json::from_str::<AuthPayload>(json).unwrap().into();
        assert_eq!(user.identity.shop_status, ShopStatus::Unknown);
        assert_eq!(user.identity.user_id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_categories_accept_numeric_ids() {
        let json = r#"{"shop_categories": [
            {"category_id": 10, "category": "Fashion"},
            {"category_id": "11", "category": "Food"}
        ]}"#;
        let payload: CategoriesPayload = serde_json::from_str(json).unwrap();
        let ids: Vec<String> = payload.shop_categories.iter().map(|c| c.id.to_string()).collect();
        assert_eq!(ids, vec!["10", "11"]);
        assert_eq!(payload.shop_categories[0].name, "Fashion");
    }

    #[test]
    fn test_shop_details_map_phone_field() {
        let json = r#"{"shop_details": {
            "shop_name": "Kente Corner",
            "shop_description": "Handwoven cloth",
            "location": "Kumasi",
            "phone": "0244",
            "email": "shop@vendoo.app",
            "category_name": "Fashion",
            "status": true
        }}"#;
        let payload: ShopDetailsPayload = serde_json::from_str(json).unwrap();
        let shop: ShopSummary = payload.shop_details.unwrap().into();
        assert_eq!(shop.phone_number.as_deref(), Some("0244"));
        assert!(shop.status);
    }
}
