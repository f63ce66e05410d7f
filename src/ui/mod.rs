pub mod auth;
pub mod common;
pub mod guard;
pub mod icon;
pub mod layout;
pub mod pages;
pub mod session;
pub mod theme;

pub use guard::RouteGuard;
pub use icon::{Icon, icons};
pub use session::{SessionContext, provide_session_context, use_session_context};
pub use theme::{ThemeContext, ThemeMode, provide_theme_context, use_theme_context};
