//! Auto-dubbing project configuration sub-fields
//!
//! These fields are composed into the project creation wizard's
//! configuration step rather than forming a standalone page.

use crate::fields::{CharField, IntegerField};
use crate::schema::FormSchema;

/// Episode title field for the auto-dubbing step
pub fn title_field() -> CharField {
	CharField::new("title".to_string())
		.required()
		.with_label("Episode title")
		.with_required_message("Enter an episode title.")
}

/// Speaker count field: inclusive 1 to 10, recommended 1 to 5.
///
/// Out-of-range input is reported as an error, never clamped.
///
/// # Examples
///
/// ```
/// use dublab_forms::forms::auto_dubbing::speaker_count_field;
/// use dublab_forms::FormField;
/// use serde_json::json;
///
/// let field = speaker_count_field();
/// assert!(field.clean(Some(&json!(5))).is_ok());
/// assert!(field.clean(Some(&json!(0))).is_err());
/// assert!(field.clean(Some(&json!(11))).is_err());
/// ```
pub fn speaker_count_field() -> IntegerField {
	IntegerField::new("speaker_count".to_string())
		.with_range(1, 10)
		.with_label("Speaker count")
		.with_help_text("Recommended 1 to 5 speakers, up to 10.")
		.with_required_message("Enter a speaker count between 1 and 10.")
		.with_range_message("Enter a speaker count between 1 and 10.")
}

/// The auto-dubbing configuration step as a schema fragment
pub fn auto_dubbing_schema() -> FormSchema {
	FormSchema::new()
		.with_field(title_field())
		.with_field(speaker_count_field())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::controller::{FormController, SubmitOutcome};
	use crate::field::FormField;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!(0))]
	#[case(json!(11))]
	#[case(json!("0"))]
	fn test_speaker_count_out_of_range(#[case] input: serde_json::Value) {
		// Arrange
		let field = speaker_count_field();

		// Act
		let err = field.clean(Some(&input)).unwrap_err();

		// Assert
		assert_eq!(err.message(), "Enter a speaker count between 1 and 10.");
	}

	#[rstest]
	#[case(json!(1))]
	#[case(json!(5))]
	#[case(json!(10))]
	fn test_speaker_count_in_range(#[case] input: serde_json::Value) {
		// Arrange
		let field = speaker_count_field();

		// Act & Assert
		assert!(field.clean(Some(&input)).is_ok());
	}

	#[rstest]
	fn test_title_required() {
		// Arrange
		let field = title_field();

		// Act
		let err = field.clean(Some(&json!(""))).unwrap_err();

		// Assert
		assert_eq!(err.message(), "Enter an episode title.");
	}

	#[rstest]
	fn test_auto_dubbing_step_submit() {
		// Arrange
		let mut controller = FormController::new(auto_dubbing_schema());
		controller.set_field("title", json!("iPad launch live stream"));
		controller.set_field("speaker_count", json!("3"));

		// Act
		let SubmitOutcome::Accepted(payload) = controller.submit() else {
			panic!("expected accepted submit");
		};

		// Assert: number-input string parses to a number in the payload
		assert_eq!(payload.get("title"), Some(&json!("iPad launch live stream")));
		assert_eq!(payload.get("speaker_count"), Some(&json!(3)));
	}

	#[rstest]
	fn test_auto_dubbing_help_text_surfaces_to_view() {
		// Arrange
		let controller = FormController::new(auto_dubbing_schema());

		// Act
		let bound = controller.field("speaker_count").unwrap();

		// Assert
		assert_eq!(
			bound.help_text(),
			Some("Recommended 1 to 5 speakers, up to 10.")
		);
	}
}
