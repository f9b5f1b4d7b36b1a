//! Integer field with inclusive range validation

use crate::field::{FieldError, FieldResult, FormField, Widget};

/// Integer field.
///
/// Accepts numeric or string input (number inputs submit strings) and
/// enforces an inclusive minimum and maximum. Out-of-range input is a
/// validation error, never a clamp.
#[derive(Debug, Clone)]
pub struct IntegerField {
	pub name: String,
	pub label: Option<String>,
	pub required: bool,
	pub help_text: Option<String>,
	pub widget: Widget,
	pub initial: Option<serde_json::Value>,
	pub min_value: Option<i64>,
	pub max_value: Option<i64>,
	required_message: Option<String>,
	range_message: Option<String>,
}

impl IntegerField {
	/// Create a new IntegerField with the given name
	///
	/// # Examples
	///
	/// ```
	/// use dublab_forms::fields::IntegerField;
	///
	/// let field = IntegerField::new("speaker_count".to_string());
	/// assert_eq!(field.name, "speaker_count");
	/// assert!(field.required);
	/// assert_eq!(field.min_value, None);
	/// ```
	pub fn new(name: String) -> Self {
		Self {
			name,
			label: None,
			required: true,
			help_text: None,
			widget: Widget::NumberInput,
			initial: None,
			min_value: None,
			max_value: None,
			required_message: None,
			range_message: None,
		}
	}

	/// Make the field optional; an empty value cleans to null
	pub fn optional(mut self) -> Self {
		self.required = false;
		self
	}

	/// Set a custom message for the required-field-empty error
	pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
		self.required_message = Some(message.into());
		self
	}

	/// Set the inclusive minimum value
	pub fn with_min_value(mut self, min: i64) -> Self {
		self.min_value = Some(min);
		self
	}

	/// Set the inclusive maximum value
	pub fn with_max_value(mut self, max: i64) -> Self {
		self.max_value = Some(max);
		self
	}

	/// Set both inclusive bounds at once
	///
	/// # Examples
	///
	/// ```
	/// use dublab_forms::FormField;
	/// use dublab_forms::fields::IntegerField;
	/// use serde_json::json;
	///
	/// let field = IntegerField::new("speaker_count".to_string()).with_range(1, 10);
	///
	/// assert!(field.clean(Some(&json!(0))).is_err());
	/// assert!(field.clean(Some(&json!(5))).is_ok());
	/// assert!(field.clean(Some(&json!(11))).is_err());
	/// ```
	pub fn with_range(mut self, min: i64, max: i64) -> Self {
		self.min_value = Some(min);
		self.max_value = Some(max);
		self
	}

	/// Set a custom message used when either range rule fails
	pub fn with_range_message(mut self, message: impl Into<String>) -> Self {
		self.range_message = Some(message.into());
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
	pub fn with_initial(mut self, initial: i64) -> Self {
		self.initial = Some(serde_json::json!(initial));
		self
	}

	fn check_range(&self, num: i64) -> FieldResult<()> {
		if let Some(min) = self.min_value
			&& num < min
		{
			let msg = self.range_message.clone().unwrap_or_else(|| {
				format!("Ensure this value is greater than or equal to {}", min)
			});
			return Err(FieldError::Validation(msg));
		}

		if let Some(max) = self.max_value
			&& num > max
		{
			let msg = self
				.range_message
				.clone()
				.unwrap_or_else(|| format!("Ensure this value is less than or equal to {}", max));
			return Err(FieldError::Validation(msg));
		}

		Ok(())
	}
}

impl FormField for IntegerField {
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
		let num = match value {
			None | Some(serde_json::Value::Null) => {
				if self.required {
					return Err(FieldError::required(self.required_message.clone()));
				}
				return Ok(serde_json::Value::Null);
			}
			Some(v) => {
				if let Some(i) = v.as_i64() {
					i
				} else if let Some(f) = v.as_f64() {
					// i64::MAX is not exactly representable as f64; the
					// upper comparison against 2^63 must be exclusive
					if f.fract() != 0.0 || f < i64::MIN as f64 || f >= i64::MAX as f64 {
						return Err(FieldError::Invalid("Enter a whole number".to_string()));
					}
					f as i64
				} else if let Some(s) = v.as_str() {
					let s = s.trim();
					if s.is_empty() {
						if self.required {
							return Err(FieldError::required(self.required_message.clone()));
						}
						return Ok(serde_json::Value::Null);
					}
					s.parse::<i64>()
						.map_err(|_| FieldError::Invalid("Enter a whole number".to_string()))?
				} else {
					return Err(FieldError::Invalid(
						"Expected number or string".to_string(),
					));
				}
			}
		};

		self.check_range(num)?;
		Ok(serde_json::json!(num))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::field::ErrorKind;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!(1), 1)]
	#[case(json!(10), 10)]
	#[case(json!("5"), 5)]
	#[case(json!(" 7 "), 7)]
	#[case(json!(3.0), 3)]
	fn test_integer_field_in_range(#[case] input: serde_json::Value, #[case] expected: i64) {
		// Arrange
		let field = IntegerField::new("speaker_count".to_string()).with_range(1, 10);

		// Act
		let result = field.clean(Some(&input));

		// Assert
		assert_eq!(result.unwrap(), json!(expected));
	}

	#[rstest]
	#[case(json!(0))]
	#[case(json!(11))]
	#[case(json!("0"))]
	#[case(json!("11"))]
	fn test_integer_field_out_of_range_is_error_not_clamp(#[case] input: serde_json::Value) {
		// Arrange
		let field = IntegerField::new("speaker_count".to_string()).with_range(1, 10);

		// Act
		let result = field.clean(Some(&input));

		// Assert
		assert!(matches!(result, Err(FieldError::Validation(_))));
	}

	#[rstest]
	fn test_integer_field_range_custom_message() {
		// Arrange
		let field = IntegerField::new("speaker_count".to_string())
			.with_range(1, 10)
			.with_range_message("Enter a speaker count between 1 and 10.");

		// Act & Assert
		assert_eq!(
			field.clean(Some(&json!(0))).unwrap_err().message(),
			"Enter a speaker count between 1 and 10."
		);
		assert_eq!(
			field.clean(Some(&json!(11))).unwrap_err().message(),
			"Enter a speaker count between 1 and 10."
		);
	}

	#[rstest]
	fn test_integer_field_required() {
		// Arrange
		let field = IntegerField::new("count".to_string());

		// Act & Assert
		assert!(matches!(field.clean(None), Err(FieldError::Required(_))));
		assert!(matches!(
			field.clean(Some(&json!(""))),
			Err(FieldError::Required(_))
		));
		assert!(matches!(
			field.clean(Some(&serde_json::Value::Null)),
			Err(FieldError::Required(_))
		));
	}

	#[rstest]
	fn test_integer_field_optional_empty_cleans_to_null() {
		// Arrange
		let field = IntegerField::new("count".to_string()).optional();

		// Act & Assert
		assert!(field.clean(None).unwrap().is_null());
		assert!(field.clean(Some(&json!(""))).unwrap().is_null());
	}

	#[rstest]
	#[case(json!("abc"))]
	#[case(json!("1.5"))]
	#[case(json!(2.5))]
	#[case(json!(true))]
	#[case(json!(1e30))]
	#[case(json!(-1e30))]
	fn test_integer_field_invalid_input(#[case] input: serde_json::Value) {
		// Arrange
		let field = IntegerField::new("count".to_string());

		// Act
		let err = field.clean(Some(&input)).unwrap_err();

		// Assert
		assert_eq!(err.kind(), ErrorKind::Invalid);
	}

	#[rstest]
	fn test_integer_field_boundaries_inclusive() {
		// Arrange
		let field = IntegerField::new("count".to_string()).with_range(1, 10);

		// Act & Assert
		assert!(field.clean(Some(&json!(1))).is_ok());
		assert!(field.clean(Some(&json!(10))).is_ok());
	}
}
