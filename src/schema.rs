//! Form schema: ordered field declarations plus cross-field rules

use crate::field::FormField;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fmt;

type CrossFieldCheck = Box<dyn Fn(&serde_json::Map<String, serde_json::Value>) -> bool + Send + Sync>;

/// A rule spanning multiple fields, evaluated over cleaned values.
///
/// Its error message attaches to a single designated target field, never to
/// every involved field. The rule is skipped while any involved field still
/// has its own field-level error.
pub struct CrossFieldRule {
	fields: Vec<String>,
	target: String,
	message: String,
	check: CrossFieldCheck,
}

impl CrossFieldRule {
	/// Create a rule from an arbitrary predicate over the cleaned values.
	///
	/// The predicate returns `true` when the rule is satisfied.
	pub fn new(
		fields: Vec<String>,
		target: impl Into<String>,
		message: impl Into<String>,
		check: impl Fn(&serde_json::Map<String, serde_json::Value>) -> bool + Send + Sync + 'static,
	) -> Self {
		Self {
			fields,
			target: target.into(),
			message: message.into(),
			check: Box::new(check),
		}
	}

	/// Equality rule for confirmation inputs.
	///
	/// The error attaches to `confirmation` (the second field), matching the
	/// convention of blaming the confirmation input rather than the primary.
	///
	/// # Examples
	///
	/// ```
	/// use dublab_forms::CrossFieldRule;
	/// use serde_json::json;
	///
	/// let rule = CrossFieldRule::fields_equal(
	/// 	"password",
	/// 	"confirm_password",
	/// 	"Passwords do not match.",
	/// );
	/// assert_eq!(rule.target(), "confirm_password");
	///
	/// let mut values = serde_json::Map::new();
	/// values.insert("password".to_string(), json!("secret123"));
	/// values.insert("confirm_password".to_string(), json!("secret123"));
	/// assert!(rule.evaluate(&values));
	///
	/// values.insert("confirm_password".to_string(), json!("different"));
	/// assert!(!rule.evaluate(&values));
	/// ```
	pub fn fields_equal(
		primary: impl Into<String>,
		confirmation: impl Into<String>,
		message: impl Into<String>,
	) -> Self {
		let primary = primary.into();
		let confirmation = confirmation.into();
		let (a, b) = (primary.clone(), confirmation.clone());
		Self::new(
			vec![primary, confirmation.clone()],
			confirmation,
			message,
			move |values| values.get(&a) == values.get(&b),
		)
	}

	/// Names of the fields this rule reads
	pub fn fields(&self) -> &[String] {
		&self.fields
	}

	/// The field that receives this rule's error message
	pub fn target(&self) -> &str {
		&self.target
	}

	/// The message attached to the target field on failure
	pub fn message(&self) -> &str {
		&self.message
	}

	/// Run the predicate; `true` means the rule is satisfied
	pub fn evaluate(&self, values: &serde_json::Map<String, serde_json::Value>) -> bool {
		(self.check)(values)
	}
}

impl fmt::Debug for CrossFieldRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CrossFieldRule")
			.field("fields", &self.fields)
			.field("target", &self.target)
			.field("message", &self.message)
			.finish_non_exhaustive()
	}
}

/// The validated data handed to the external submission operation.
///
/// Contains exactly the schema's fields, in declaration order, with cleaned
/// values. Constructed fresh per successful validation pass and not retained
/// by the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionPayload(serde_json::Map<String, serde_json::Value>);

impl SubmissionPayload {
	pub(crate) fn new(values: serde_json::Map<String, serde_json::Value>) -> Self {
		Self(values)
	}

	pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
		self.0.get(name)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterate fields in schema declaration order
	pub fn iter(&self) -> impl Iterator<Item = (&String, &serde_json::Value)> {
		self.0.iter()
	}

	/// Consume the payload into a JSON object value
	pub fn into_value(self) -> serde_json::Value {
		serde_json::Value::Object(self.0)
	}

	/// Deserialize the payload into a typed values struct
	///
	/// # Examples
	///
	/// ```
	/// use dublab_forms::forms::auth::{LoginValues, login_schema};
	/// use dublab_forms::{FormController, SubmitOutcome};
	/// use serde_json::json;
	///
	/// let mut controller = FormController::new(login_schema());
	/// controller.set_field("email", json!("a@b.com"));
	/// controller.set_field("password", json!("longenough"));
	///
	/// let SubmitOutcome::Accepted(payload) = controller.submit() else {
	/// 	panic!("expected accepted submit");
	/// };
	/// let values: LoginValues = payload.deserialize().unwrap();
	/// assert_eq!(values.email, "a@b.com");
	/// ```
	pub fn deserialize<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
		serde_json::from_value(self.into_value())
	}
}

/// Result of running a schema against a full set of form values.
#[derive(Debug)]
pub enum Validated {
	/// Every rule passed; the cleaned payload is ready for submission
	Valid(SubmissionPayload),
	/// At least one rule failed: field name to its single error message
	Invalid(HashMap<String, String>),
}

/// Declarative description of a form: ordered fields and cross-field rules.
///
/// A schema is immutable for the lifetime of one form instance; construction
/// happens through the consuming `with_*` builders and nothing mutates it
/// afterwards.
///
/// # Examples
///
/// ```
/// use dublab_forms::fields::{CharField, EmailField};
/// use dublab_forms::{FormSchema, Validated};
/// use std::collections::HashMap;
/// use serde_json::json;
///
/// let schema = FormSchema::new()
/// 	.with_field(EmailField::new("email".to_string()))
/// 	.with_field(
/// 		CharField::new("password".to_string())
/// 			.required()
/// 			.with_min_length(8),
/// 	);
///
/// let mut values = HashMap::new();
/// values.insert("email".to_string(), json!("a@b.com"));
/// values.insert("password".to_string(), json!("longenough"));
///
/// assert!(matches!(schema.validate(&values), Validated::Valid(_)));
/// ```
#[derive(Default)]
pub struct FormSchema {
	fields: Vec<Box<dyn FormField>>,
	cross_rules: Vec<CrossFieldRule>,
}

impl fmt::Debug for FormSchema {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let names: Vec<&str> = self.fields.iter().map(|f| f.name()).collect();
		f.debug_struct("FormSchema")
			.field("fields", &names)
			.field("cross_rules", &self.cross_rules)
			.finish()
	}
}

impl FormSchema {
	/// Create an empty schema
	pub fn new() -> Self {
		Self {
			fields: vec![],
			cross_rules: vec![],
		}
	}

	/// Append a field; declaration order is validation and payload order
	pub fn with_field(mut self, field: impl FormField + 'static) -> Self {
		self.fields.push(Box::new(field));
		self
	}

	/// Append a cross-field rule, evaluated after all field-level rules
	pub fn with_cross_rule(mut self, rule: CrossFieldRule) -> Self {
		self.cross_rules.push(rule);
		self
	}

	pub fn fields(&self) -> &[Box<dyn FormField>] {
		&self.fields
	}

	pub fn field(&self, name: &str) -> Option<&dyn FormField> {
		self.fields
			.iter()
			.find(|f| f.name() == name)
			.map(|f| f.as_ref())
	}

	pub fn contains(&self, name: &str) -> bool {
		self.fields.iter().any(|f| f.name() == name)
	}

	pub fn field_count(&self) -> usize {
		self.fields.len()
	}

	pub fn cross_rules(&self) -> &[CrossFieldRule] {
		&self.cross_rules
	}

	/// Validate the full value set against every field and cross-field rule.
	///
	/// Field-level rules run first, in declaration order, producing at most
	/// one message per field. Cross-field rules run afterwards over the
	/// cleaned values; a rule is skipped when any involved field already
	/// failed, and its message fills only a still-empty target slot.
	pub fn validate(&self, values: &HashMap<String, serde_json::Value>) -> Validated {
		let mut cleaned = serde_json::Map::new();
		let mut errors: HashMap<String, String> = HashMap::new();

		for field in &self.fields {
			match field.clean(values.get(field.name())) {
				Ok(value) => {
					cleaned.insert(field.name().to_string(), value);
				}
				Err(e) => {
					errors.insert(field.name().to_string(), e.message().to_string());
				}
			}
		}

		for rule in &self.cross_rules {
			if rule.fields().iter().any(|f| errors.contains_key(f)) {
				continue;
			}
			if errors.contains_key(rule.target()) {
				continue;
			}
			if !rule.evaluate(&cleaned) {
				errors.insert(rule.target().to_string(), rule.message().to_string());
			}
		}

		if errors.is_empty() {
			Validated::Valid(SubmissionPayload::new(cleaned))
		} else {
			tracing::debug!(error_count = errors.len(), "form validation failed");
			Validated::Invalid(errors)
		}
	}
}
