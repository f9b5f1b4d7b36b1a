//! CRUD form schema for the example entity

use crate::fields::{CharField, ChoiceField};
use crate::schema::FormSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Workflow status of an example entity.
///
/// Serialized values match the option values the select widget submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExampleStatus {
	Draft,
	InProgress,
	Done,
}

impl ExampleStatus {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Draft => "draft",
			Self::InProgress => "in-progress",
			Self::Done => "done",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Draft => "Draft",
			Self::InProgress => "In progress",
			Self::Done => "Done",
		}
	}

	/// `(value, label)` option pairs for the status select
	pub fn choices() -> Vec<(String, String)> {
		[Self::Draft, Self::InProgress, Self::Done]
			.iter()
			.map(|s| (s.as_str().to_string(), s.label().to_string()))
			.collect()
	}
}

/// An existing example entity, as loaded from the list the form edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleItem {
	pub id: String,
	pub name: String,
	pub owner: String,
	pub status: ExampleStatus,
}

/// Validated example form payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExampleValues {
	pub name: String,
	pub owner: String,
	pub status: ExampleStatus,
}

/// Example entity form: required name and owner, status select defaulting
/// to draft.
///
/// # Examples
///
/// ```
/// use dublab_forms::forms::example::example_schema;
/// use dublab_forms::{FormController, SubmitOutcome};
/// use serde_json::json;
///
/// let mut controller = FormController::new(example_schema());
/// assert_eq!(controller.value("status"), Some(&json!("draft")));
///
/// assert!(matches!(controller.submit(), SubmitOutcome::Invalid));
/// assert_eq!(controller.error("name"), Some("Enter a project name."));
/// assert_eq!(controller.error("owner"), Some("Enter an owner."));
/// ```
pub fn example_schema() -> FormSchema {
	FormSchema::new()
		.with_field(
			CharField::new("name".to_string())
				.required()
				.with_label("Project name")
				.with_required_message("Enter a project name."),
		)
		.with_field(
			CharField::new("owner".to_string())
				.required()
				.with_label("Owner")
				.with_required_message("Enter an owner."),
		)
		.with_field(
			ChoiceField::new("status".to_string())
				.with_label("Status")
				.with_choices(ExampleStatus::choices())
				.with_initial(ExampleStatus::Draft.as_str()),
		)
}

/// Default values for binding the form to an existing entity (edit mode).
///
/// Pass the result to [`crate::FormController::reset`] when the bound
/// entity changes; pass `None` to return to create mode.
///
/// # Examples
///
/// ```
/// use dublab_forms::forms::example::{
/// 	ExampleItem, ExampleStatus, example_defaults, example_schema,
/// };
/// use dublab_forms::FormController;
/// use serde_json::json;
///
/// let item = ExampleItem {
/// 	id: "ex-1".to_string(),
/// 	name: "New dub campaign".to_string(),
/// 	owner: "Amy".to_string(),
/// 	status: ExampleStatus::InProgress,
/// };
///
/// let mut controller = FormController::new(example_schema());
/// controller.reset(Some(example_defaults(&item)));
/// assert_eq!(controller.value("name"), Some(&json!("New dub campaign")));
/// assert_eq!(controller.value("status"), Some(&json!("in-progress")));
/// ```
pub fn example_defaults(item: &ExampleItem) -> HashMap<String, serde_json::Value> {
	let mut defaults = HashMap::new();
	defaults.insert("name".to_string(), serde_json::json!(item.name));
	defaults.insert("owner".to_string(), serde_json::json!(item.owner));
	defaults.insert(
		"status".to_string(),
		serde_json::json!(item.status.as_str()),
	);
	defaults
}
