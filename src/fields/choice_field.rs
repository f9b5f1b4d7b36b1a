//! Choice field for select input

use crate::field::{FieldError, FieldResult, FormField, Widget};

/// Choice field with a fixed set of `(value, label)` options.
///
/// Submitted values outside the option set are rejected; the labels exist
/// only for the view layer.
#[derive(Debug, Clone)]
pub struct ChoiceField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub help_text: Option<String>,
	pub widget: Widget,
	pub initial: Option<serde_json::Value>,
	pub choices: Vec<(String, String)>,
	required_message: Option<String>,
	invalid_message: Option<String>,
}

impl ChoiceField {
	/// Create a new ChoiceField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use dublab_forms::fields::ChoiceField;
	///
	/// let field = ChoiceField::new("status".to_string());
	/// assert_eq!(field.name, "status");
	/// assert!(field.required);
	/// assert!(field.choices.is_empty());
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: true,
			help_text: None,
			widget: Widget::Select,
			initial: None,
			choices: vec![],
			required_message: None,
			invalid_message: None,
		}
	}

	/// Set the available choices as `(value, label)` pairs
	///
	/// # Examples
	///
	/// ```
	/// use dublab_forms::FormField;
	/// use dublab_forms::fields::ChoiceField;
	/// use serde_json::json;
	///
	/// let field = ChoiceField::new("status".to_string()).with_choices(vec![
	/// 	("draft".to_string(), "Draft".to_string()),
	/// 	("done".to_string(), "Done".to_string()),
	/// ]);
	///
	/// assert!(field.clean(Some(&json!("draft"))).is_ok());
	/// assert!(field.clean(Some(&json!("archived"))).is_err());
	/// ```
	pub fn with_choices(mut self, choices: Vec<(String, String)>) -> Self {
		self.choices = choices;
		self
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

	/// Set a custom message for the unknown-choice error
	pub fn with_invalid_message(mut self, message: impl Into<String>) -> Self {
		self.invalid_message = Some(message.into());
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

	fn is_valid_choice(&self, value: &str) -> bool {
		self.choices.iter().any(|(v, _)| v == value)
	}
}

impl FormField for ChoiceField {
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

		if !self.is_valid_choice(trimmed) {
			let msg = self.invalid_message.clone().unwrap_or_else(|| {
				format!(
					"Select a valid choice. {} is not one of the available choices",
					trimmed
				)
			});
			return Err(FieldError::Validation(msg));
		}

		Ok(serde_json::Value::String(trimmed.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn status_field() -> ChoiceField {
		ChoiceField::new("status".to_string()).with_choices(vec![
			("draft".to_string(), "Draft".to_string()),
			("in-progress".to_string(), "In progress".to_string()),
			("done".to_string(), "Done".to_string()),
		])
	}

	#[rstest]
	#[case("draft")]
	#[case("in-progress")]
	#[case("done")]
	fn test_choice_field_valid_choices(#[case] value: &str) {
		// Arrange
		let field = status_field();

		// Act & Assert
		assert_eq!(field.clean(Some(&json!(value))).unwrap(), json!(value));
	}

	#[rstest]
	#[case("archived")]
	#[case("DRAFT")]
	fn test_choice_field_unknown_choice(#[case] value: &str) {
		// Arrange
		let field = status_field();

		// Act & Assert
		assert!(matches!(
			field.clean(Some(&json!(value))),
			Err(FieldError::Validation(_))
		));
	}

	#[rstest]
	fn test_choice_field_required() {
		// Arrange
		let field = status_field();

		// Act & Assert
		assert!(matches!(field.clean(None), Err(FieldError::Required(_))));
		assert!(matches!(
			field.clean(Some(&json!(""))),
			Err(FieldError::Required(_))
		));
	}

	#[rstest]
	fn test_choice_field_optional_empty() {
		// Arrange
		let field = status_field().optional();

		// Act & Assert
		assert_eq!(field.clean(None).unwrap(), json!(""));
	}

	#[rstest]
	fn test_choice_field_initial_value() {
		// Arrange
		let field = status_field().with_initial("draft");

		// Act & Assert
		assert_eq!(field.initial(), Some(&json!("draft")));
	}
}
