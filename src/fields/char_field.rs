//! Character field for text input

use crate::field::{FieldError, FieldResult, FormField, Widget};

/// Character field with length validation.
///
/// Rules are checked in declaration order: required first, then minimum
/// length, then maximum length. The first failing rule produces the field's
/// single error.
#[derive(Debug, Clone)]
pub struct CharField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub help_text: Option<String>,
	pub widget: Widget,
	pub initial: Option<serde_json::Value>,
	pub max_length: Option<usize>,
	pub min_length: Option<usize>,
	pub strip: bool,
	required_message: Option<String>,
	length_message: Option<String>,
}

impl CharField {
	/// Create a new CharField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use dublab_forms::fields::CharField;
	///
	/// let field = CharField::new("user_name".to_string());
	/// assert_eq!(field.name, "user_name");
	/// assert!(!field.required);
	/// assert_eq!(field.max_length, None);
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: false,
			help_text: None,
			widget: Widget::TextInput,
			initial: None,
			max_length: None,
			min_length: None,
			strip: true,
			required_message: None,
			length_message: None,
		}
	}

	/// Set the field as required
	///
	/// # Examples
	///
	/// ```
	/// use dublab_forms::fields::CharField;
	///
	/// let field = CharField::new("user_name".to_string()).required();
	/// assert!(field.required);
	/// ```
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Set a custom message for the required-field-empty error
	pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
		self.required_message = Some(message.into());
		self
	}

	/// Set the maximum length for the field
	///
	/// # Examples
	///
	/// ```
	/// use dublab_forms::fields::CharField;
	///
	/// let field = CharField::new("user_name".to_string()).with_max_length(32);
	/// assert_eq!(field.max_length, Some(32));
	/// ```
	pub fn with_max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}

	/// Set the minimum length for the field
	///
	/// # Examples
	///
	/// ```
	/// use dublab_forms::fields::CharField;
	///
	/// let field = CharField::new("password".to_string()).with_min_length(8);
	/// assert_eq!(field.min_length, Some(8));
	/// ```
	pub fn with_min_length(mut self, min_length: usize) -> Self {
		self.min_length = Some(min_length);
		self
	}

	/// Set a custom message used when either length rule fails
	///
	/// # Examples
	///
	/// ```
	/// use dublab_forms::FormField;
	/// use dublab_forms::fields::CharField;
	/// use serde_json::json;
	///
	/// let field = CharField::new("password".to_string())
	/// 	.with_min_length(8)
	/// 	.with_length_message("Password must be at least 8 characters.");
	///
	/// let err = field.clean(Some(&json!("short"))).unwrap_err();
	/// assert_eq!(err.message(), "Password must be at least 8 characters.");
	/// ```
	pub fn with_length_message(mut self, message: impl Into<String>) -> Self {
		self.length_message = Some(message.into());
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

	/// Disable whitespace stripping for the field
	pub fn no_strip(mut self) -> Self {
		self.strip = false;
		self
	}

	/// Set the widget for the field
	///
	/// # Examples
	///
	/// ```
	/// use dublab_forms::fields::CharField;
	/// use dublab_forms::Widget;
	///
	/// let field = CharField::new("password".to_string()).with_widget(Widget::PasswordInput);
	/// assert_eq!(field.widget, Widget::PasswordInput);
	/// ```
	pub fn with_widget(mut self, widget: Widget) -> Self {
		self.widget = widget;
		self
	}
}

impl FormField for CharField {
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
			Some(v) => {
				if v.is_null() {
					None
				} else {
					Some(v.as_str().ok_or_else(|| {
						FieldError::Invalid("Value must be a string".to_string())
					})?)
				}
			}
			None => None,
		};

		let processed_value = match str_value {
			Some(v) => {
				let v = if self.strip { v.trim() } else { v };
				if v.is_empty() {
					if self.required {
						return Err(FieldError::required(self.required_message.clone()));
					}
					return Ok(serde_json::Value::String(String::new()));
				}
				v.to_string()
			}
			None => {
				if self.required {
					return Err(FieldError::required(self.required_message.clone()));
				}
				return Ok(serde_json::Value::String(String::new()));
			}
		};

		// Length rules use character count (not byte count) for correct
		// multi-byte handling (CJK, emoji, accented characters)
		let char_count = processed_value.chars().count();
		if let Some(min_length) = self.min_length
			&& char_count < min_length
		{
			let msg = self.length_message.clone().unwrap_or_else(|| {
				format!(
					"Ensure this value has at least {} characters (it has {})",
					min_length, char_count
				)
			});
			return Err(FieldError::Validation(msg));
		}

		if let Some(max_length) = self.max_length
			&& char_count > max_length
		{
			let msg = self.length_message.clone().unwrap_or_else(|| {
				format!(
					"Ensure this value has at most {} characters (it has {})",
					max_length, char_count
				)
			});
			return Err(FieldError::Validation(msg));
		}

		Ok(serde_json::Value::String(processed_value))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::field::ErrorKind;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_char_field_required() {
		// Arrange
		let field = CharField::new("test".to_string()).required();

		// Act & Assert
		assert!(field.clean(None).is_err());
		assert!(field.clean(Some(&json!(""))).is_err());
		assert!(field.clean(Some(&json!("  "))).is_err());
	}

	#[rstest]
	fn test_char_field_required_custom_message() {
		// Arrange
		let field = CharField::new("name".to_string())
			.required()
			.with_required_message("Enter a project name.");

		// Act
		let err = field.clean(Some(&json!(""))).unwrap_err();

		// Assert
		assert_eq!(err.message(), "Enter a project name.");
		assert_eq!(err.kind(), ErrorKind::Required);
	}

	#[rstest]
	fn test_char_field_optional_empty_cleans_to_empty_string() {
		// Arrange
		let field = CharField::new("bio".to_string());

		// Act & Assert
		assert_eq!(field.clean(None).unwrap(), json!(""));
		assert_eq!(field.clean(Some(&json!("  "))).unwrap(), json!(""));
	}

	#[rstest]
	fn test_char_field_max_length() {
		// Arrange
		let field = CharField::new("test".to_string()).with_max_length(5);

		// Act & Assert
		assert!(field.clean(Some(&json!("12345"))).is_ok());
		assert!(field.clean(Some(&json!("123456"))).is_err());
	}

	#[rstest]
	fn test_char_field_min_length() {
		// Arrange
		let field = CharField::new("test".to_string()).with_min_length(3);

		// Act & Assert
		assert!(field.clean(Some(&json!("123"))).is_ok());
		assert!(field.clean(Some(&json!("12"))).is_err());
	}

	#[rstest]
	fn test_char_field_min_wins_over_max_in_declaration_order() {
		// Arrange: a single length_message covers both rules, min is checked first
		let field = CharField::new("user_name".to_string())
			.with_min_length(2)
			.with_max_length(32)
			.with_length_message("Enter a user name between 2 and 32 characters.");

		// Act
		let short = field.clean(Some(&json!("a"))).unwrap_err();
		let long = field.clean(Some(&json!("x".repeat(33)))).unwrap_err();

		// Assert
		assert_eq!(short.message(), "Enter a user name between 2 and 32 characters.");
		assert_eq!(long.message(), "Enter a user name between 2 and 32 characters.");
	}

	#[rstest]
	fn test_char_field_length_uses_char_count_not_bytes() {
		// Arrange: max_length=10 should allow 10 characters regardless of byte size
		let field = CharField::new("test".to_string()).with_max_length(10);

		// Act & Assert: CJK characters (3 bytes each in UTF-8, 1 character each)
		assert!(field.clean(Some(&json!("안녕하세요"))).is_ok());
		assert!(field.clean(Some(&json!("안녕하세요안녕하세요"))).is_ok());
		assert!(field.clean(Some(&json!("안녕하세요안녕하세요X"))).is_err());
	}

	#[rstest]
	fn test_char_field_strips_by_default() {
		// Arrange
		let field = CharField::new("name".to_string());

		// Act & Assert
		assert_eq!(field.clean(Some(&json!("  Amy  "))).unwrap(), json!("Amy"));
	}

	#[rstest]
	fn test_char_field_no_strip() {
		// Arrange
		let field = CharField::new("name".to_string()).no_strip();

		// Act & Assert
		assert_eq!(
			field.clean(Some(&json!("  Amy  "))).unwrap(),
			json!("  Amy  ")
		);
	}

	#[rstest]
	fn test_char_field_rejects_non_string() {
		// Arrange
		let field = CharField::new("name".to_string());

		// Act
		let err = field.clean(Some(&json!(42))).unwrap_err();

		// Assert
		assert_eq!(err.kind(), ErrorKind::Invalid);
	}
}
