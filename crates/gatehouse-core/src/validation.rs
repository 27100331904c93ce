//! Login field validation
//!
//! Both validators are pure functions of the current field value. They are
//! re-run on every keystroke by the login view and their messages become the
//! inline helper text under the offending field.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Email shape accepted by the login form: `localpart@domain.tld`.
///
/// `[[:word:]]` is the ASCII word class; separators are a single optional
/// `.` or `-` between word runs and the final segment is 2-3 characters.
pub const EMAIL_PATTERN: &str =
    r"^[[:word:]]+([.-]?[[:word:]]+)*@[[:word:]]+([.-]?[[:word:]]+)*(\.[[:word:]]{2,3})+$";

/// Minimum password length in UTF-16 code units
pub const MIN_PASSWORD_LEN: usize = 4;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// A recoverable, user-correctable input problem.
///
/// The `Display` text is exactly the helper text shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email entered is not valid")]
    InvalidEmail,

    #[error("Password must be at least {MIN_PASSWORD_LEN} characters long")]
    PasswordTooShort,
}

/// Returns true when `email` matches [`EMAIL_PATTERN`]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate an email address
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Validate a password.
///
/// Length is counted in UTF-16 code units, the way a browser input reports
/// it, so characters outside the BMP count twice.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.encode_utf16().count() >= MIN_PASSWORD_LEN {
        Ok(())
    } else {
        Err(ValidationError::PasswordTooShort)
    }
}
