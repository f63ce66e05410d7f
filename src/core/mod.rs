//! Core domain models and business logic for the Vendoo storefront
//!
//! Everything here is independent of the view layer: identities, route
//! classification and the redirect table, persisted session stores, form
//! validation and the remote API client.

pub mod api;
#[cfg(feature = "ssr")]
pub mod config;
mod identity;
#[cfg(feature = "ssr")]
pub mod proxy;
pub mod routing;
mod session;
mod store;
#[cfg(test)]
mod tests;
pub mod validation;

pub use identity::*;
pub use routing::{RedirectTarget, RouteArea, RouteDecision, decide, resolve};
pub use session::*;
pub use store::*;
