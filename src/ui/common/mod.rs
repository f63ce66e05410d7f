//! Common reusable UI components shared by the marketing site, the auth
//! pages, onboarding and the seller dashboard.

pub mod button;
pub mod form;
pub mod message;
pub mod spinner;

pub use button::{Button, ButtonSize, ButtonVariant, SubmitButton};
pub use form::{FormField, PasswordField, SelectField, TextAreaField};
pub use message::{ErrorMessage, ErrorMessageStatic, SuccessMessage};
pub use spinner::{LoadingSpinner, Spinner, SpinnerSize};
