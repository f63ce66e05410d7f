//! API operations
//!
//! Requests go to `VENDOO_API_URL` when it is set at build time, otherwise to
//! the same origin, where the server proxies `/auth` and `/api` upstream.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::ApiError;
use super::wire::{
    AuthPayload, CategoriesPayload, Category, CreateShopRequest, EmailRequest, LoginRequest,
    MessagePayload, ProfilePayload, ProfileUpdate, RegisterRequest, ResetPasswordRequest,
    ShopDetailsPayload, TokenRequest,
};
use crate::core::identity::{Identity, ShopSummary};
use crate::core::session::AuthenticatedUser;
use crate::core::validation::ShopDraft;

const AUTH_LOGIN: &str = "/auth/login";
const AUTH_REGISTER: &str = "/auth/register";
const AUTH_VERIFY_EMAIL: &str = "/auth/verify_email";
const AUTH_CHECK_EMAIL: &str = "/auth/check-email";
const AUTH_RESET_PASSWORD: &str = "/auth/reset-password";
const AUTH_GOOGLE_LOGIN: &str = "/auth/google/login";
const AUTH_UPDATE_PROFILE: &str = "/auth/update-profile";
const SHOP_CATEGORIES: &str = "/api/categories";
const CREATE_SHOP: &str = "/api/create-shop";
const SHOPS: &str = "/api/shops";

#[derive(Debug, Clone, Copy)]
enum Method {
    Post,
    Put,
}

fn api_url(path: &str) -> String {
    let base = option_env!("VENDOO_API_URL").unwrap_or_default();
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    err: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Turn an HTTP status and body into a typed result.
pub fn interpret_response<R: DeserializeOwned>(status: u16, body: &str) -> Result<R, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };

    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()));
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error.or(b.err).or(b.message))
        .filter(|m| !m.is_empty());

    match (status, message) {
        (401, _) => Err(ApiError::Unauthorized),
        (404, None) => Err(ApiError::NotFound),
        (_, Some(message)) => Err(ApiError::from_message(message)),
        (status, None) => Err(ApiError::Rejected(format!(
            "Request failed with status {}",
            status
        ))),
    }
}

#[cfg(not(feature = "ssr"))]
async fn send<B, R>(method: Method, path: &str, token: Option<&str>, body: &B) -> Result<R, ApiError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    use gloo_net::http::Request;

    let url = api_url(path);
    let mut builder = match method {
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
    }
    .header("Content-Type", "application/json");

    if let Some(token) = token {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    let request = builder
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let response = request.send().await.map_err(|_| ApiError::Unreachable)?;
    let status = response.status();
    let text = response.text().await.map_err(|_| ApiError::Unreachable)?;

    interpret_response(status, &text)
}

#[cfg(feature = "ssr")]
async fn send<B, R>(method: Method, path: &str, _token: Option<&str>, _body: &B) -> Result<R, ApiError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    tracing::debug!("Skipping {:?} {} during server rendering", method, api_url(path));
    Err(ApiError::Unavailable)
}

const EMPTY: serde_json::Value = serde_json::Value::Null;

/// Sign in with email and password.
pub async fn sign_in(email: &str, password: &str) -> Result<AuthenticatedUser, ApiError> {
    let payload: AuthPayload =
        send(Method::Post, AUTH_LOGIN, None, &LoginRequest { email, password }).await?;
    Ok(payload.into())
}

/// Sign in with a Google ID token.
pub async fn google_sign_in(id_token: &str) -> Result<AuthenticatedUser, ApiError> {
    let payload: AuthPayload =
        send(Method::Post, AUTH_GOOGLE_LOGIN, None, &TokenRequest { token: id_token }).await?;
    Ok(payload.into())
}

/// Create an account. The user must verify their email before signing in.
pub async fn register(name: &str, email: &str, password: &str) -> Result<(), ApiError> {
    let _: serde_json::Value = send(
        Method::Post,
        AUTH_REGISTER,
        None,
        &RegisterRequest {
            name,
            email,
            password,
        },
    )
    .await?;
    Ok(())
}

pub async fn verify_email(token: &str) -> Result<(), ApiError> {
    let _: serde_json::Value =
        send(Method::Post, AUTH_VERIFY_EMAIL, None, &TokenRequest { token }).await?;
    Ok(())
}

/// Ask for a password reset link. Succeeds whether or not the account exists.
pub async fn request_password_reset(email: &str) -> Result<(), ApiError> {
    let payload: Option<MessagePayload> =
        send(Method::Post, AUTH_CHECK_EMAIL, None, &EmailRequest { email }).await?;
    match payload.and_then(|p| p.error) {
        Some(error) => Err(ApiError::from_message(error)),
        None => Ok(()),
    }
}

/// Set a new password using the token from the reset email. Returns the
/// server's confirmation message.
pub async fn reset_password(token: &str, password: &str) -> Result<String, ApiError> {
    let payload: Option<MessagePayload> = send(
        Method::Post,
        AUTH_RESET_PASSWORD,
        None,
        &ResetPasswordRequest { token, password },
    )
    .await?;
    Ok(payload
        .and_then(|p| p.message)
        .unwrap_or_else(|| "Password updated".to_string()))
}

/// Save profile edits. The returned identity keeps the current user id.
pub async fn update_profile(
    token: &str,
    current: &Identity,
    update: &ProfileUpdate,
) -> Result<Identity, ApiError> {
    let payload: ProfilePayload = send(Method::Put, AUTH_UPDATE_PROFILE, Some(token), update).await?;
    let mut identity: Identity = payload.user.into();
    if identity.user_id.is_none() {
        identity.user_id = current.user_id.clone();
    }
    Ok(identity)
}

pub async fn fetch_categories(token: &str) -> Result<Vec<Category>, ApiError> {
    let payload: CategoriesPayload = send(Method::Post, SHOP_CATEGORIES, Some(token), &EMPTY).await?;
    Ok(payload.shop_categories)
}

/// Create the shop for `user_id`.
///
/// When the server does not echo the created shop, the summary is built from
/// the submitted draft.
pub async fn create_shop(
    token: &str,
    user_id: &str,
    draft: &ShopDraft,
) -> Result<ShopSummary, ApiError> {
    let payload: Option<ShopDetailsPayload> = send(
        Method::Post,
        CREATE_SHOP,
        Some(token),
        &CreateShopRequest {
            user_id,
            category_id: &draft.category_id,
            shop_name: &draft.shop_name,
            shop_description: &draft.description,
        },
    )
    .await?;

    Ok(payload
        .and_then(|p| p.shop_details)
        .map(ShopSummary::from)
        .unwrap_or_else(|| ShopSummary {
            shop_name: draft.shop_name.clone(),
            shop_description: Some(draft.description.clone()),
            status: true,
            ..Default::default()
        }))
}

/// The shop owned by `user_id`, or `None` if the user has none.
pub async fn fetch_shop_for_user(token: &str, user_id: &str) -> Result<Option<ShopSummary>, ApiError> {
    let path = format!("{}/user/{}", SHOPS, user_id);
    shop_lookup(send(Method::Post, &path, Some(token), &EMPTY).await)
}

/// The public shop addressed by `slug`, or `None` if there is no such shop.
pub async fn fetch_shop_by_slug(slug: &str) -> Result<Option<ShopSummary>, ApiError> {
    let path = format!("{}/{}", SHOPS, slug.to_ascii_lowercase());
    shop_lookup(send(Method::Post, &path, None, &EMPTY).await)
}

fn shop_lookup(
    result: Result<ShopDetailsPayload, ApiError>,
) -> Result<Option<ShopSummary>, ApiError> {
    match result {
        Ok(payload) if payload.err.is_some() => Ok(None),
        Ok(payload) => Ok(payload.shop_details.map(ShopSummary::from)),
        Err(ApiError::NotFound) => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::UNREACHABLE_MESSAGE;

    #[test]
    fn test_success_body_is_decoded() {
        let payload: CategoriesPayload = interpret_response(
            200,
            r#"{"shop_categories":[{"category_id":1,"category":"Art"}]}"#,
        )
        .unwrap();
        assert_eq!(payload.shop_categories.len(), 1);
    }

    #[test]
    fn test_empty_success_body_decodes_as_null() {
        let payload: Option<MessagePayload> = interpret_response(201, "").unwrap();
        assert!(payload.is_none());
        let _: () = interpret_response(204, "  ").unwrap();
    }

    #[test]
    fn test_error_body_message_is_surfaced() {
        let err = interpret_response::<serde_json::Value>(400, r#"{"error":"Email already registered"}"#)
            .unwrap_err();
        assert_eq!(err, ApiError::Rejected("Email already registered".to_string()));
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[test]
    fn test_unverified_email_is_recognised() {
        let err = interpret_response::<serde_json::Value>(
            403,
            r#"{"error":"Please verify your email before logging in"}"#,
        )
        .unwrap_err();
        assert_eq!(err, ApiError::EmailNotVerified);
    }

    #[test]
    fn test_status_only_errors() {
        assert_eq!(
            interpret_response::<serde_json::Value>(401, r#"{"error":"bad token"}"#),
            Err(ApiError::Unauthorized)
        );
        assert_eq!(
            interpret_response::<serde_json::Value>(404, ""),
            Err(ApiError::NotFound)
        );
        assert_eq!(
            interpret_response::<serde_json::Value>(500, "<html>oops</html>"),
            Err(ApiError::Rejected("Request failed with status 500".to_string()))
        );
    }

    #[test]
    fn test_malformed_success_body_is_decode_error() {
        let err = interpret_response::<CategoriesPayload>(200, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_shop_lookup_treats_missing_shop_as_none() {
        assert_eq!(shop_lookup(Err(ApiError::NotFound)), Ok(None));

        let payload: ShopDetailsPayload =
            serde_json::from_str(r#"{"err":"shop not found"}"#).unwrap();
        assert_eq!(shop_lookup(Ok(payload)), Ok(None));

        assert_eq!(shop_lookup(Err(ApiError::Unreachable)), Err(ApiError::Unreachable));
    }

    #[test]
    fn test_unreachable_message_matches_display() {
        assert_eq!(ApiError::Unreachable.to_string(), UNREACHABLE_MESSAGE);
    }

    #[test]
    fn test_api_url_joins_base_and_path() {
        assert!(api_url("/auth/login").ends_with("/auth/login"));
    }
}
