//! Reusable format validators for form fields

use crate::field::{FieldError, FieldResult};
use regex::Regex;
use std::sync::LazyLock;

// Email pattern: one non-whitespace local part, an `@`, and a domain with at
// least one dot. Deliberately permissive; the mail server is the authority.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

/// Validates that a string value looks like an email address.
///
/// # Examples
///
/// ```
/// use dublab_forms::validators::EmailValidator;
///
/// let validator = EmailValidator::new();
/// assert!(validator.validate("name@example.com").is_ok());
/// assert!(validator.validate("not-an-email").is_err());
/// assert!(validator.validate("missing@tld").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct EmailValidator {
	/// Optional custom error message shown on validation failure
	message: Option<String>,
}

impl EmailValidator {
	pub fn new() -> Self {
		Self { message: None }
	}

	/// Sets a custom error message returned on validation failure.
	///
	/// # Examples
	///
	/// ```
	/// use dublab_forms::validators::EmailValidator;
	///
	/// let validator = EmailValidator::new().with_message("Enter a valid email address.");
	/// let err = validator.validate("bad").unwrap_err();
	/// assert_eq!(err.message(), "Enter a valid email address.");
	/// ```
	pub fn with_message(mut self, message: impl Into<String>) -> Self {
		self.message = Some(message.into());
		self
	}

	/// Validates the given string slice as an email address.
	///
	/// Returns `Ok(())` when the address is well-formed, or a
	/// [`FieldError::Invalid`] with an error message when it is not.
	pub fn validate(&self, value: &str) -> FieldResult<()> {
		if EMAIL_REGEX.is_match(value) {
			Ok(())
		} else {
			let msg = self
				.message
				.as_deref()
				.unwrap_or("Enter a valid email address");
			Err(FieldError::Invalid(msg.to_string()))
		}
	}
}

impl Default for EmailValidator {
	fn default() -> Self {
		Self::new()
	}
}
