//! Field contract shared by all form field types

use serde::{Deserialize, Serialize};

/// Rendering hint for the view layer.
///
/// The controller never renders widgets itself; it only reports which input
/// element a field expects so the embedding view can pick the right one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
	TextInput,
	EmailInput,
	PasswordInput,
	NumberInput,
	CheckboxInput,
	Select,
}

impl Widget {
	/// The value a field of this widget type starts with when no default
	/// and no initial value is supplied.
	///
	/// # Examples
	///
	/// ```
	/// use dublab_forms::Widget;
	/// use serde_json::json;
	///
	/// assert_eq!(Widget::TextInput.empty_value(), json!(""));
	/// assert_eq!(Widget::CheckboxInput.empty_value(), json!(false));
	/// assert!(Widget::NumberInput.empty_value().is_null());
	/// ```
	pub fn empty_value(&self) -> serde_json::Value {
		match self {
			Widget::TextInput | Widget::EmailInput | Widget::PasswordInput => {
				serde_json::Value::String(String::new())
			}
			Widget::NumberInput | Widget::Select => serde_json::Value::Null,
			Widget::CheckboxInput => serde_json::Value::Bool(false),
		}
	}
}

/// Broad classification of a field validation failure.
///
/// A required field left empty and a populated field failing a format or
/// rule check are distinct kinds, even though both render as a single
/// message per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// Required field was empty or missing
	Required,
	/// Value had the wrong shape or format (not a string, bad email, ...)
	Invalid,
	/// Value was well-formed but failed a validation rule (length, range, ...)
	Rule,
}

/// A single field validation failure.
///
/// All variants carry the user-facing message directly; validation failures
/// are reported, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	#[error("{0}")]
	Required(String),
	#[error("{0}")]
	Invalid(String),
	#[error("{0}")]
	Validation(String),
}

impl FieldError {
	/// Build a `Required` error with the given message, falling back to the
	/// default required-field message.
	///
	/// # Examples
	///
	/// ```
	/// use dublab_forms::FieldError;
	///
	/// let err = FieldError::required(None);
	/// assert_eq!(err.message(), "This field is required");
	///
	/// let err = FieldError::required(Some("Enter a name".to_string()));
	/// assert_eq!(err.message(), "Enter a name");
	/// ```
	pub fn required(message: Option<String>) -> Self {
		Self::Required(message.unwrap_or_else(|| "This field is required".to_string()))
	}

	/// The user-facing message for this failure.
	pub fn message(&self) -> &str {
		match self {
			Self::Required(m) | Self::Invalid(m) | Self::Validation(m) => m,
		}
	}

	/// The classification of this failure.
	///
	/// # Examples
	///
	/// ```
	/// use dublab_forms::{ErrorKind, FieldError};
	///
	/// assert_eq!(FieldError::required(None).kind(), ErrorKind::Required);
	/// assert_eq!(
	/// 	FieldError::Validation("too short".to_string()).kind(),
	/// 	ErrorKind::Rule
	/// );
	/// ```
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::Required(_) => ErrorKind::Required,
			Self::Invalid(_) => ErrorKind::Invalid,
			Self::Validation(_) => ErrorKind::Rule,
		}
	}
}

pub type FieldResult<T> = Result<T, FieldError>;

/// A single form field: identity, rendering metadata, and validation.
///
/// `clean` converts the raw submitted value into its cleaned form or returns
/// the first failing rule's error, in rule declaration order. At most one
/// error is ever produced per field per validation pass.
pub trait FormField: Send + Sync {
	fn name(&self) -> &str;

	fn label(&self) -> Option<&str> {
		None
	}

	fn required(&self) -> bool;

	fn help_text(&self) -> Option<&str> {
		None
	}

	fn widget(&self) -> &Widget;

	fn initial(&self) -> Option<&serde_json::Value> {
		None
	}

	fn clean(&self, value: Option<&serde_json::Value>) -> FieldResult<serde_json::Value>;
}

/// Escape a string for use inside HTML text or attribute content.
pub(crate) fn escape_html(value: &str) -> String {
	let mut out = String::with_capacity(value.len());
	for c in value.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#x27;"),
			_ => out.push(c),
		}
	}
	out
}
