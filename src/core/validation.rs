//! Form validation for authentication and shop creation
//!
//! All checks run on trimmed input except passwords, which are compared
//! verbatim.

use std::fmt;

/// Shop name length bounds (characters, trimmed)
pub const SHOP_NAME_MIN_LENGTH: usize = 3;
pub const SHOP_NAME_MAX_LENGTH: usize = 20;

/// Shop description length bounds (characters, trimmed)
pub const DESCRIPTION_MIN_LENGTH: usize = 10;
pub const DESCRIPTION_MAX_LENGTH: usize = 500;

/// Category preselected on the shop creation form
pub const DEFAULT_CATEGORY_ID: &str = "10";

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("{field} must not exceed {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("Please input a valid email")]
    InvalidEmail,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please select a category")]
    MissingCategory,
}

/// Per-field errors of the shop creation form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopFormErrors {
    pub shop_name: Option<ValidationError>,
    pub description: Option<ValidationError>,
    pub category: Option<ValidationError>,
}

impl ShopFormErrors {
    pub fn is_empty(&self) -> bool {
        self.shop_name.is_none() && self.description.is_none() && self.category.is_none()
    }
}

impl fmt::Display for ShopFormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = [&self.shop_name, &self.description, &self.category]
            .into_iter()
            .flatten()
            .map(ToString::to_string)
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Shop creation input after validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopDraft {
    pub shop_name: String,
    pub description: String,
    pub category_id: String,
}

/// Validate the shop creation form.
pub fn validate_shop_form(
    shop_name: &str,
    description: &str,
    category_id: &str,
) -> Result<ShopDraft, ShopFormErrors> {
    let shop_name = shop_name.trim();
    let description = description.trim();
    let category_id = category_id.trim();

    let errors = ShopFormErrors {
        shop_name: check_length(
            "Shop name",
            shop_name,
            SHOP_NAME_MIN_LENGTH,
            SHOP_NAME_MAX_LENGTH,
        )
        .err(),
        description: check_length(
            "Shop description",
            description,
            DESCRIPTION_MIN_LENGTH,
            DESCRIPTION_MAX_LENGTH,
        )
        .err(),
        category: category_id
            .is_empty()
            .then_some(ValidationError::MissingCategory),
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ShopDraft {
        shop_name: shop_name.to_string(),
        description: description.to_string(),
        category_id: category_id.to_string(),
    })
}

fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len == 0 {
        Err(ValidationError::Required { field })
    } else if len < min {
        Err(ValidationError::TooShort { field, min })
    } else if len > max {
        Err(ValidationError::TooLong { field, max })
    } else {
        Ok(())
    }
}

/// Loose email shape check: `something@something.something`, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required { field })
    } else {
        Ok(())
    }
}

/// Validate the sign-in form.
pub fn validate_sign_in(email: &str, password: &str) -> Result<(), ValidationError> {
    require("Email", email)?;
    require("Password", password)?;
    Ok(())
}

/// Validate the registration form.
pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), ValidationError> {
    require("Name", name)?;
    require("Email", email)?;
    require("Password", password)?;
    require("Password confirmation", confirm_password)?;
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if !is_valid_email(email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Validate a new password and its confirmation.
pub fn validate_new_password(password: &str, confirm_password: &str) -> Result<(), ValidationError> {
    require("Password", password)?;
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_shop_form_is_trimmed() {
        let draft = validate_shop_form("  Kente Corner ", " Handwoven cloth from Bonwire ", "10").unwrap();
        assert_eq!(draft.shop_name, "Kente Corner");
        assert_eq!(draft.description, "Handwoven cloth from Bonwire");
        assert_eq!(draft.category_id, "10");
    }

    #[test]
    fn test_shop_name_bounds() {
        let errors = validate_shop_form("ab", "long enough description", "1").unwrap_err();
        assert_eq!(
            errors.shop_name,
            Some(ValidationError::TooShort { field: "Shop name", min: 3 })
        );

        let errors = validate_shop_form(&"x".repeat(21), "long enough description", "1").unwrap_err();
        assert_eq!(
            errors.shop_name,
            Some(ValidationError::TooLong { field: "Shop name", max: 20 })
        );

        assert!(validate_shop_form(&"x".repeat(20), "long enough description", "1").is_ok());
    }

    #[test]
    fn test_description_and_category_errors_reported_together() {
        let errors = validate_shop_form("   ", "short", "").unwrap_err();
        assert_eq!(errors.shop_name, Some(ValidationError::Required { field: "Shop name" }));
        assert_eq!(
            errors.description,
            Some(ValidationError::TooShort { field: "Shop description", min: 10 })
        );
        assert_eq!(errors.category, Some(ValidationError::MissingCategory));
        assert!(errors.to_string().contains("Please select a category"));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 20 multi-byte characters are still within the limit.
        assert!(validate_shop_form(&"é".repeat(20), "long enough description", "1").is_ok());
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("ama@vendoo.app"));
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("ama@vendoo"));
        assert!(!is_valid_email("@vendoo.app"));
        assert!(!is_valid_email("ama@.app"));
        assert!(!is_valid_email("ama @vendoo.app"));
        assert!(!is_valid_email("ama@vendoo."));
    }

    #[test]
    fn test_registration_rules() {
        assert_eq!(
            validate_registration("", "a@b.co", "pw", "pw"),
            Err(ValidationError::Required { field: "Name" })
        );
        assert_eq!(
            validate_registration("Ama", "a@b.co", "pw", "other"),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            validate_registration("Ama", "not-an-email", "pw", "pw"),
            Err(ValidationError::InvalidEmail)
        );
        assert!(validate_registration("Ama", "a@b.co", "pw", "pw").is_ok());
    }

    #[test]
    fn test_sign_in_requires_both_fields() {
        assert_eq!(
            validate_sign_in("a@b.co", ""),
            Err(ValidationError::Required { field: "Password" })
        );
        assert!(validate_sign_in("a@b.co", "secret").is_ok());
    }

    #[test]
    fn test_new_password_must_match() {
        assert_eq!(validate_new_password("abc", "abd"), Err(ValidationError::PasswordMismatch));
        assert!(validate_new_password("abc", "abc").is_ok());
    }
}
