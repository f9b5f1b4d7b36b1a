//! Email field with format validation

use crate::field::{FieldError, FieldResult, FormField, Widget};
use crate::validators::EmailValidator;

/// Email field.
///
/// The value is stripped, checked for presence, then checked against the
/// shared email format validator.
#[derive(Debug, Clone)]
pub struct EmailField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub help_text: Option<String>,
	pub widget: Widget,
	pub initial: Option<serde_json::Value>,
	required_message: Option<String>,
	validator: EmailValidator,
}

impl EmailField {
	/// Create a new EmailField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use dublab_forms::fields::EmailField;
	///
	/// let field = EmailField::new("email".to_string());
	/// assert_eq!(field.name, "email");
	/// assert!(field.required);
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: true,
			help_text: None,
			widget: Widget::EmailInput,
			initial: None,
			required_message: None,
			validator: EmailValidator::new(),
		}
	}

	/// Make the field optional; an empty value cleans to an empty string
	pub fn optional(mut self) -> Self {
		self.required = false;
		self
	}

	/// Set a custom message for the required-field-empty error
	pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
		self.required_message = Some(message.into());
		self
	}

	/// Set a custom message for the invalid-format error
	///
	/// # Examples
	///
	/// ```
	/// use dublab_forms::FormField;
	/// use dublab_forms::fields::EmailField;
	/// use serde_json::json;
	///
	/// let field = EmailField::new("email".to_string())
	/// 	.with_invalid_message("Enter a valid email address.");
	///
	/// let err = field.clean(Some(&json!("not-an-email"))).unwrap_err();
	/// assert_eq!(err.message(), "Enter a valid email address.");
	/// ```
	pub fn with_invalid_message(mut self, message: impl Into<String>) -> Self {
		self.validator = EmailValidator::new().with_message(message);
		self
	}

	/// Set the label for the field
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Set the help text for the field
	pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
		self.help_text = Some(help_text.into());
		self
	}

	/// Set the initial value for the field
	pub fn with_initial(mut self, initial: impl Into<String>) -> Self {
		self.initial = Some(serde_json::json!(initial.into()));
		self
	}
}

impl FormField for EmailField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		self.required
	}

	fn help_text(&self) -> Option<&str> {
		self.help_text.as_deref()
	}

	fn widget(&self) -> &Widget {
		&self.widget
	}

	fn initial(&self) -> Option<&serde_json::Value> {
		self.initial.as_ref()
	}

	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value> {
		let str_value = match value {
			Some(v) if !v.is_null() => Some(
				v.as_str()
					.ok_or_else(|| FieldError::Invalid("Value must be a string".to_string()))?,
			),
			_ => None,
		};

		let trimmed = str_value.map(str::trim).unwrap_or("");
		if trimmed.is_empty() {
			if self.required {
				return Err(FieldError::required(self.required_message.clone()));
			}
			return Ok(serde_json::Value::String(String::new()));
		}

		self.validator.validate(trimmed)?;
		Ok(serde_json::Value::String(trimmed.to_string()))
	}
}
