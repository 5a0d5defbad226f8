use super::error::UserError;
use super::types::UserFields;

/// Maximum length of an email address, in characters.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum length of a display name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Validates user fields before creation or update.
pub fn validate_user_fields(fields: &UserFields) -> Result<(), UserError> {
    let email = fields.email.as_str();
    if email.trim().is_empty() {
        return Err(UserError::EmptyEmail);
    }
    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(UserError::EmailTooLong);
    }
    // Surrounding whitespace is rejected rather than trimmed, so the stored
    // value is exactly the validated one.
    if !is_valid_email(email) {
        return Err(UserError::InvalidEmail(fields.email.clone()));
    }

    if fields.name.trim().is_empty() {
        return Err(UserError::EmptyName);
    }
    if fields.name.chars().count() > MAX_NAME_LENGTH {
        return Err(UserError::NameTooLong);
    }
    Ok(())
}

/// Checks for exactly one `@` with a non-empty local part and domain.
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !email.contains(char::is_whitespace)
        }
        _ => false,
    }
}
