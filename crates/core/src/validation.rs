//! Field validation for create/update requests.
//!
//! Length limits match the column sizes in the migrations.

use crate::error::CoreError;

pub const MAX_PLAYER_CODE_LENGTH: usize = 50;
pub const MAX_EMAIL_LENGTH: usize = 100;
pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_IMAGE_PATH_LENGTH: usize = 500;
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Player health and food are percentages.
pub const STAT_MIN: i32 = 0;
pub const STAT_MAX: i32 = 100;

/// Trim `value` and reject it when blank.
pub fn require_text<'a>(value: &'a str, field: &str) -> Result<&'a str, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(trimmed)
}

/// Reject strings longer than `max` characters.
pub fn validate_max_length(value: &str, max: usize, field: &str) -> Result<(), CoreError> {
    if value.chars().count() > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// Minimal structural email check: one `@`, non-empty local part, a dot in
/// the domain, no whitespace.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    let invalid = || CoreError::Validation(format!("'{email}' is not a valid email address"));

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    match domain.split_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() && !domain.ends_with('.') => {}
        _ => return Err(invalid()),
    }
    validate_max_length(email, MAX_EMAIL_LENGTH, "Email")
}

pub fn validate_stat(value: i32, field: &str) -> Result<(), CoreError> {
    if !(STAT_MIN..=STAT_MAX).contains(&value) {
        return Err(CoreError::Validation(format!(
            "{field} must be between {STAT_MIN} and {STAT_MAX}"
        )));
    }
    Ok(())
}

pub fn validate_non_negative(value: i64, field: &str) -> Result<(), CoreError> {
    if value < 0 {
        return Err(CoreError::Validation(format!("{field} must not be negative")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn require_text_trims_and_rejects_blank() {
        assert_eq!(require_text("  Steve  ", "Name").unwrap(), "Steve");
        let err = require_text("   ", "Name").unwrap_err();
        assert_eq!(err.to_string(), "Name is required");
    }

    #[test]
    fn email_shapes() {
        assert!(validate_email("player1@minecraft.com").is_ok());
        assert!(validate_email("a@b.co").is_ok());
        for bad in ["plain", "@minecraft.com", "a@minecraft", "a@@x.com", "a b@x.com", "a@x."] {
            assert_matches!(validate_email(bad), Err(CoreError::Validation(_)), "{bad}");
        }
    }

    #[test]
    fn stat_bounds_are_inclusive() {
        assert!(validate_stat(0, "Health").is_ok());
        assert!(validate_stat(100, "Health").is_ok());
        assert!(validate_stat(101, "Health").is_err());
        assert!(validate_stat(-1, "Food").is_err());
    }

    #[test]
    fn value_floor_is_zero() {
        assert!(validate_non_negative(0, "Value").is_ok());
        assert!(validate_non_negative(-5, "Value").is_err());
    }

    #[test]
    fn length_limit_counts_characters() {
        assert!(validate_max_length("kim cương", 9, "Name").is_ok());
        assert!(validate_max_length("kim cương!", 9, "Name").is_err());
    }
}
