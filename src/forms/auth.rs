//! Login and signup form schemas

use crate::field::Widget;
use crate::fields::{BooleanField, CharField, EmailField};
use crate::schema::{CrossFieldRule, FormSchema};
use serde::Deserialize;

/// Validated login payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginValues {
	pub email: String,
	pub password: String,
}

/// Validated signup payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupValues {
	pub user_name: String,
	pub email: String,
	pub password: String,
	pub confirm_password: String,
	pub agree_terms: bool,
}

/// Login form: email format plus a password of at least 8 characters.
///
/// # Examples
///
/// ```
/// use dublab_forms::forms::auth::login_schema;
/// use dublab_forms::{FormController, SubmitOutcome};
/// use serde_json::json;
///
/// let mut controller = FormController::new(login_schema());
/// controller.set_field("email", json!("not-an-email"));
/// controller.set_field("password", json!("short"));
///
/// assert!(matches!(controller.submit(), SubmitOutcome::Invalid));
/// assert_eq!(controller.error("email"), Some("Enter a valid email address."));
/// assert_eq!(
/// 	controller.error("password"),
/// 	Some("Password must be at least 8 characters."),
/// );
/// ```
pub fn login_schema() -> FormSchema {
	FormSchema::new()
		.with_field(
			EmailField::new("email".to_string())
				.with_label("Email")
				.with_required_message("Enter a valid email address.")
				.with_invalid_message("Enter a valid email address."),
		)
		.with_field(
			CharField::new("password".to_string())
				.required()
				.with_min_length(8)
				.with_label("Password")
				.with_widget(Widget::PasswordInput)
				.with_required_message("Password must be at least 8 characters.")
				.with_length_message("Password must be at least 8 characters."),
		)
}

/// Signup form: user name length bounds, email format, password with
/// confirmation equality, and a mandatory terms agreement.
///
/// The confirmation mismatch message attaches to `confirm_password` only.
pub fn signup_schema() -> FormSchema {
	FormSchema::new()
		.with_field(
			CharField::new("user_name".to_string())
				.required()
				.with_min_length(2)
				.with_max_length(32)
				.with_label("User name")
				.with_help_text("2 to 32 characters")
				.with_required_message("Enter a user name between 2 and 32 characters.")
				.with_length_message("Enter a user name between 2 and 32 characters."),
		)
		.with_field(
			EmailField::new("email".to_string())
				.with_label("Email")
				.with_required_message("Enter a valid email address.")
				.with_invalid_message("Enter a valid email address."),
		)
		.with_field(
			CharField::new("password".to_string())
				.required()
				.with_min_length(8)
				.with_label("Password")
				.with_help_text("At least 8 characters")
				.with_widget(Widget::PasswordInput)
				.with_required_message("Password must be at least 8 characters.")
				.with_length_message("Password must be at least 8 characters."),
		)
		.with_field(
			CharField::new("confirm_password".to_string())
				.with_label("Confirm password")
				.with_widget(Widget::PasswordInput),
		)
		.with_field(
			BooleanField::new("agree_terms".to_string())
				.with_label("I agree to the terms of service and privacy policy.")
				.must_be_true("You must agree to the terms to continue."),
		)
		.with_cross_rule(CrossFieldRule::fields_equal(
			"password",
			"confirm_password",
			"Passwords do not match.",
		))
}
