//! Remote API client
//!
//! Thin async wrappers over the Vendoo HTTP API. Results are returned to the
//! caller, which decides what to write into the session stores.

mod client;
pub mod wire;

pub use client::{
    create_shop, fetch_categories, fetch_shop_by_slug, fetch_shop_for_user, google_sign_in,
    interpret_response, register, request_password_reset, reset_password, sign_in,
    update_profile, verify_email,
};
pub use wire::{Category, ProfileUpdate};

/// Message shown when the API cannot be reached
pub const UNREACHABLE_MESSAGE: &str = "Unable to reach Vendoo Server";

/// API error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Unable to reach Vendoo Server")]
    Unreachable,

    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,

    #[error("Your account is not verified. Please verify your email.")]
    EmailNotVerified,

    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Rejected(String),

    #[error("Unexpected response from server: {0}")]
    Decode(String),

    #[error("Not available while rendering on the server")]
    Unavailable,
}

impl ApiError {
    /// Map a server-provided error message to an error variant.
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_lowercase();
        if lower.contains("email") && lower.contains("verif") {
            ApiError::EmailNotVerified
        } else {
            ApiError::Rejected(message)
        }
    }

    /// Whether the stored session should be dropped
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}
