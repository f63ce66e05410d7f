//! Authentication UI: sign-in and registration forms and Google sign-in.
//!
//! Successful sign-in only writes the session; the route guard then moves the
//! user to onboarding or the dashboard.

mod google;
mod register_form;
mod sign_in_form;

pub use google::GoogleSignIn;
pub use register_form::RegisterForm;
pub use sign_in_form::SignInForm;
