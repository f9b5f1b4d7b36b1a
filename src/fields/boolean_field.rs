//! Boolean field for checkbox input

use crate::field::{FieldError, FieldResult, FormField, Widget};

/// Boolean field.
///
/// A missing or unchecked checkbox cleans to `false`. The `must_be_true`
/// constraint (terms agreement) is a validation rule, not a type constraint:
/// `false` is a structurally valid value that fails the rule.
#[derive(Debug, Clone)]
pub struct BooleanField {
	pub name: String,
	pub label: Option<String>,
	pub help_text: Option<String>,
	pub widget: Widget,
	pub initial: Option<serde_json::Value>,
	pub must_be_true: bool,
	must_be_true_message: Option<String>,
}

impl BooleanField {
	/// Create a new BooleanField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use dublab_forms::fields::BooleanField;
	/// use serde_json::json;
	///
	/// let field = BooleanField::new("agree_terms".to_string());
	/// assert_eq!(field.name, "agree_terms");
	/// assert!(!field.must_be_true);
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			help_text: None,
			widget: Widget::CheckboxInput,
			initial: None,
			must_be_true: false,
			must_be_true_message: None,
		}
	}

	/// Require the cleaned value to be `true`, with the given error message
	///
	/// # Examples
	///
	/// ```
	/// use dublab_forms::FormField;
	/// use dublab_forms::fields::BooleanField;
	/// use serde_json::json;
	///
	/// let field = BooleanField::new("agree_terms".to_string())
	/// 	.must_be_true("You must agree to the terms to continue.");
	///
	/// assert!(field.clean(Some(&json!(true))).is_ok());
	/// let err = field.clean(Some(&json!(false))).unwrap_err();
	/// assert_eq!(err.message(), "You must agree to the terms to continue.");
	/// ```
	pub fn must_be_true(mut self, message: impl Into<String>) -> Self {
		self.must_be_true = true;
		self.must_be_true_message = Some(message.into());
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
	pub fn with_initial(mut self, initial: bool) -> Self {
		self.initial = Some(serde_json::json!(initial));
		self
	}
}

impl FormField for BooleanField {
	fn name(&self) -> &str {
		&self.name
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn required(&self) -> bool {
		// Presence is never an error for a checkbox; absent means unchecked
		false
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
		let checked = match value {
			None | Some(serde_json::Value::Null) => false,
			Some(serde_json::Value::Bool(b)) => *b,
			Some(serde_json::Value::String(s)) => {
				// Checkbox inputs submit "on" when checked, nothing otherwise
				matches!(s.trim(), "on" | "true" | "1")
			}
			Some(_) => {
				return Err(FieldError::Invalid(
					"Expected boolean or string".to_string(),
				));
			}
		};

		if self.must_be_true && !checked {
			let msg = self
				.must_be_true_message
				.clone()
				.unwrap_or_else(|| "This field must be checked".to_string());
			return Err(FieldError::Validation(msg));
		}

		Ok(serde_json::Value::Bool(checked))
	}
}
