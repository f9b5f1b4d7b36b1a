//! Runtime form state: values, errors, and the in-flight flag

use crate::schema::FormSchema;
use std::collections::HashMap;

/// Mutable runtime record for one form instance.
///
/// Values always contain an entry for every schema field. The error map
/// holds at most one message per field and is only ever replaced wholesale
/// by a submit attempt or cleared. The in-flight flag guards against
/// duplicate concurrent submissions.
#[derive(Debug, Clone, Default)]
pub struct FormState {
	values: HashMap<String, serde_json::Value>,
	errors: HashMap<String, String>,
	in_flight: bool,
}

impl FormState {
	/// Build initial state for a schema: caller-supplied default, else the
	/// field's declared initial value, else the widget's empty value.
	pub(crate) fn from_schema(
		schema: &FormSchema,
		defaults: Option<&HashMap<String, serde_json::Value>>,
	) -> Self {
		let mut values = HashMap::with_capacity(schema.field_count());
		for field in schema.fields() {
			let value = defaults
				.and_then(|d| d.get(field.name()).cloned())
				.or_else(|| field.initial().cloned())
				.unwrap_or_else(|| field.widget().empty_value());
			values.insert(field.name().to_string(), value);
		}
		Self {
			values,
			errors: HashMap::new(),
			in_flight: false,
		}
	}

	pub fn value(&self, name: &str) -> Option<&serde_json::Value> {
		self.values.get(name)
	}

	pub fn values(&self) -> &HashMap<String, serde_json::Value> {
		&self.values
	}

	pub fn error(&self, name: &str) -> Option<&str> {
		self.errors.get(name).map(String::as_str)
	}

	pub fn errors(&self) -> &HashMap<String, String> {
		&self.errors
	}

	pub fn has_errors(&self) -> bool {
		!self.errors.is_empty()
	}

	pub fn is_in_flight(&self) -> bool {
		self.in_flight
	}

	pub(crate) fn set_value(&mut self, name: &str, value: serde_json::Value) {
		self.values.insert(name.to_string(), value);
	}

	pub(crate) fn replace_errors(&mut self, errors: HashMap<String, String>) {
		self.errors = errors;
	}

	pub(crate) fn clear_errors(&mut self) {
		self.errors.clear();
	}

	pub(crate) fn set_in_flight(&mut self, in_flight: bool) {
		self.in_flight = in_flight;
	}
}
