//! Validated form controller: binds edits to state, validates on submit,
//! guards against duplicate submissions, and hands off validated payloads

use crate::field::{FormField, Widget};
use crate::message::ValidationMessage;
use crate::schema::{FormSchema, SubmissionPayload, Validated};
use crate::state::FormState;
use std::collections::HashMap;

/// Result of a single `submit()` call.
#[derive(Debug)]
pub enum SubmitOutcome {
	/// A previous submission has not resolved yet; this call was a no-op
	InFlight,
	/// Validation failed; the error map was replaced wholesale
	Invalid,
	/// Validation passed; the payload is ready for the external operation
	Accepted(SubmissionPayload),
}

/// Result of driving a full submit through an async callback.
#[derive(Debug)]
pub enum SubmitResult<T, E> {
	/// A previous submission has not resolved yet; the callback did not run
	InFlight,
	/// Validation failed; the callback did not run
	Invalid,
	/// The callback ran exactly once and resolved with this result
	Settled(Result<T, E>),
}

/// Notification emitted to subscribers when observable state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
	/// A field value was edited
	FieldChanged(String),
	/// A submit attempt failed validation and replaced the error map
	ValidationFailed,
	/// A submit attempt passed validation; the form is now in flight
	SubmissionStarted,
	/// The external operation resolved; the form is no longer in flight
	SubmissionSettled,
	/// Values, errors, and the in-flight flag were reset
	Reset,
}

type Subscriber = Box<dyn Fn(&FormEvent) + Send + Sync>;

/// A read-only view over one field for rendering: declaration metadata plus
/// the current value and error.
pub struct BoundField<'a> {
	field: &'a dyn FormField,
	value: Option<&'a serde_json::Value>,
	error: Option<&'a str>,
}

impl<'a> BoundField<'a> {
	pub fn name(&self) -> &str {
		self.field.name()
	}

	/// HTML id attribute for the input and its label's `for`
	pub fn id(&self) -> String {
		format!("id_{}", self.field.name())
	}

	pub fn label(&self) -> Option<&str> {
		self.field.label()
	}

	pub fn value(&self) -> Option<&serde_json::Value> {
		self.value.or_else(|| self.field.initial())
	}

	pub fn error(&self) -> Option<&str> {
		self.error
	}

	pub fn has_error(&self) -> bool {
		self.error.is_some()
	}

	pub fn help_text(&self) -> Option<&str> {
		self.field.help_text()
	}

	pub fn widget(&self) -> &Widget {
		self.field.widget()
	}

	pub fn is_required(&self) -> bool {
		self.field.required()
	}

	/// The validation-message view-model for this field's error slot
	pub fn message(&self) -> ValidationMessage {
		ValidationMessage::from_error(self.error)
	}
}

/// Owns form state for one form instance and orchestrates the
/// validate-then-submit flow.
///
/// All operations run on the UI thread in response to discrete events; the
/// controller never blocks. While a submission is in flight, repeated submit
/// triggers are rejected but field edits remain unaffected.
///
/// # Examples
///
/// ```
/// use dublab_forms::fields::EmailField;
/// use dublab_forms::{FormController, FormSchema, SubmitOutcome};
/// use serde_json::json;
///
/// let schema = FormSchema::new().with_field(EmailField::new("email".to_string()));
/// let mut controller = FormController::new(schema);
///
/// controller.set_field("email", json!("not-an-email"));
/// assert!(matches!(controller.submit(), SubmitOutcome::Invalid));
/// assert!(controller.error("email").is_some());
///
/// controller.set_field("email", json!("a@b.com"));
/// let SubmitOutcome::Accepted(payload) = controller.submit() else {
/// 	panic!("expected accepted submit");
/// };
/// assert_eq!(payload.get("email"), Some(&json!("a@b.com")));
/// assert!(controller.is_in_flight());
///
/// // The embedding context resolves the external operation, then settles.
/// controller.settle();
/// assert!(!controller.is_in_flight());
/// ```
pub struct FormController {
	schema: FormSchema,
	state: FormState,
	subscribers: Vec<Subscriber>,
}

impl FormController {
	/// Create a controller with empty/zero initial values
	pub fn new(schema: FormSchema) -> Self {
		let state = FormState::from_schema(&schema, None);
		Self {
			schema,
			state,
			subscribers: vec![],
		}
	}

	/// Create a controller with caller-supplied default values
	///
	/// # Examples
	///
	/// ```
	/// use dublab_forms::fields::CharField;
	/// use dublab_forms::{FormController, FormSchema};
	/// use std::collections::HashMap;
	/// use serde_json::json;
	///
	/// let schema = FormSchema::new().with_field(CharField::new("name".to_string()));
	/// let mut defaults = HashMap::new();
	/// defaults.insert("name".to_string(), json!("New dub campaign"));
	///
	/// let controller = FormController::with_defaults(schema, defaults);
	/// assert_eq!(controller.value("name"), Some(&json!("New dub campaign")));
	/// ```
	pub fn with_defaults(
		schema: FormSchema,
		defaults: HashMap<String, serde_json::Value>,
	) -> Self {
		let state = FormState::from_schema(&schema, Some(&defaults));
		Self {
			schema,
			state,
			subscribers: vec![],
		}
	}

	/// Register a change observer notified after every state mutation.
	///
	/// This is the view layer's re-render hook; subscribers receive the
	/// event and read current state back through the controller.
	pub fn subscribe(&mut self, subscriber: impl Fn(&FormEvent) + Send + Sync + 'static) {
		self.subscribers.push(Box::new(subscriber));
	}

	fn notify(&self, event: FormEvent) {
		for subscriber in &self.subscribers {
			subscriber(&event);
		}
	}

	/// Update one field's value. No validation is triggered; invalid
	/// intermediate states are allowed. Unknown field names are ignored.
	/// Permitted while a submission is in flight.
	pub fn set_field(&mut self, name: &str, value: serde_json::Value) {
		if !self.schema.contains(name) {
			tracing::debug!(field = name, "ignoring edit for unknown field");
			return;
		}
		self.state.set_value(name, value);
		self.notify(FormEvent::FieldChanged(name.to_string()));
	}

	/// Run validation and, if it passes, begin a submission.
	///
	/// A call while a previous submission is in flight is a no-op. On
	/// failure the error map is replaced wholesale and the form stays out
	/// of flight. On success errors are cleared, the in-flight flag is set,
	/// and the cleaned payload is handed back for the external operation.
	pub fn submit(&mut self) -> SubmitOutcome {
		if self.state.is_in_flight() {
			tracing::debug!("submit ignored: a submission is already in flight");
			return SubmitOutcome::InFlight;
		}

		match self.schema.validate(self.state.values()) {
			Validated::Invalid(errors) => {
				self.state.replace_errors(errors);
				self.notify(FormEvent::ValidationFailed);
				SubmitOutcome::Invalid
			}
			Validated::Valid(payload) => {
				self.state.clear_errors();
				self.state.set_in_flight(true);
				self.notify(FormEvent::SubmissionStarted);
				SubmitOutcome::Accepted(payload)
			}
		}
	}

	/// Mark the in-flight submission as resolved (success and failure
	/// alike). The controller never interprets the external result; no-op
	/// when nothing is in flight.
	pub fn settle(&mut self) {
		if !self.state.is_in_flight() {
			return;
		}
		self.state.set_in_flight(false);
		self.notify(FormEvent::SubmissionSettled);
	}

	/// Validate and drive the external operation in one step.
	///
	/// The callback is invoked with the payload exactly once per accepted
	/// submit, and the form settles after it resolves regardless of
	/// outcome. No timeout is enforced; a callback that never resolves
	/// leaves the form in flight.
	///
	/// # Examples
	///
	/// ```
	/// use dublab_forms::forms::auth::login_schema;
	/// use dublab_forms::{FormController, SubmitResult};
	/// use serde_json::json;
	///
	/// # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
	/// # rt.block_on(async {
	/// let mut controller = FormController::new(login_schema());
	/// controller.set_field("email", json!("a@b.com"));
	/// controller.set_field("password", json!("longenough"));
	///
	/// let result = controller
	/// 	.submit_with(|payload| async move { Ok::<_, String>(payload.len()) })
	/// 	.await;
	///
	/// assert!(matches!(result, SubmitResult::Settled(Ok(2))));
	/// assert!(!controller.is_in_flight());
	/// # });
	/// ```
	pub async fn submit_with<F, Fut, T, E>(&mut self, op: F) -> SubmitResult<T, E>
	where
		F: FnOnce(SubmissionPayload) -> Fut,
		Fut: Future<Output = Result<T, E>>,
	{
		match self.submit() {
			SubmitOutcome::InFlight => SubmitResult::InFlight,
			SubmitOutcome::Invalid => SubmitResult::Invalid,
			SubmitOutcome::Accepted(payload) => {
				let result = op(payload).await;
				self.settle();
				SubmitResult::Settled(result)
			}
		}
	}

	/// Replace all values with the given defaults (or empty/zero values),
	/// clear all errors, and clear the in-flight flag. Used when the bound
	/// entity changes, e.g. switching between create and edit mode.
	pub fn reset(&mut self, defaults: Option<HashMap<String, serde_json::Value>>) {
		self.state = FormState::from_schema(&self.schema, defaults.as_ref());
		self.notify(FormEvent::Reset);
	}

	pub fn value(&self, name: &str) -> Option<&serde_json::Value> {
		self.state.value(name)
	}

	pub fn error(&self, name: &str) -> Option<&str> {
		self.state.error(name)
	}

	pub fn errors(&self) -> &HashMap<String, String> {
		self.state.errors()
	}

	pub fn is_in_flight(&self) -> bool {
		self.state.is_in_flight()
	}

	pub fn state(&self) -> &FormState {
		&self.state
	}

	pub fn schema(&self) -> &FormSchema {
		&self.schema
	}

	/// Read-only view over one field for rendering
	pub fn field(&self, name: &str) -> Option<BoundField<'_>> {
		let field = self.schema.field(name)?;
		Some(BoundField {
			field,
			value: self.state.value(name),
			error: self.state.error(name),
		})
	}

	/// Iterate bound field views in schema declaration order
	pub fn fields(&self) -> impl Iterator<Item = BoundField<'_>> {
		self.schema.fields().iter().map(|field| BoundField {
			field: field.as_ref(),
			value: self.state.value(field.name()),
			error: self.state.error(field.name()),
		})
	}
}
