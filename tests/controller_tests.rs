//! End-to-end tests for the validated-form submission flow

use dublab_forms::forms::auth::{LoginValues, login_schema, signup_schema};
use dublab_forms::forms::auto_dubbing::auto_dubbing_schema;
use dublab_forms::{FormController, SubmitOutcome, SubmitResult};
use futures::channel::oneshot;
use rstest::rstest;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn filled_login() -> FormController {
	let mut controller = FormController::new(login_schema());
	controller.set_field("email", json!("a@b.com"));
	controller.set_field("password", json!("longenough"));
	controller
}

#[rstest]
fn test_valid_submit_payload_contains_exactly_schema_fields() {
	// Arrange
	let mut controller = filled_login();

	// Act
	let SubmitOutcome::Accepted(payload) = controller.submit() else {
		panic!("expected accepted submit");
	};

	// Assert
	let keys: Vec<&String> = payload.iter().map(|(k, _)| k).collect();
	assert_eq!(keys, ["email", "password"]);
	let values: LoginValues = payload.deserialize().unwrap();
	assert_eq!(values.email, "a@b.com");
	assert_eq!(values.password, "longenough");
}

#[rstest]
fn test_required_field_empty_blocks_submission() {
	// Arrange
	let mut controller = FormController::new(login_schema());
	controller.set_field("email", json!("a@b.com"));

	// Act
	let outcome = controller.submit();

	// Assert
	assert!(matches!(outcome, SubmitOutcome::Invalid));
	assert!(controller.error("password").is_some());
	assert!(!controller.is_in_flight());
}

#[rstest]
fn test_error_then_correction_scenario() {
	// Arrange: the canonical email/password scenario
	let mut controller = FormController::new(login_schema());
	controller.set_field("email", json!("not-an-email"));
	controller.set_field("password", json!("short"));

	// Act: submit with both fields failing
	assert!(matches!(controller.submit(), SubmitOutcome::Invalid));
	assert_eq!(controller.errors().len(), 2);
	assert!(controller.error("email").is_some());
	assert!(controller.error("password").is_some());

	// Correct the input and resubmit
	controller.set_field("email", json!("a@b.com"));
	controller.set_field("password", json!("longenough"));
	let outcome = controller.submit();

	// Assert
	let SubmitOutcome::Accepted(payload) = outcome else {
		panic!("expected accepted submit");
	};
	assert!(controller.errors().is_empty());
	assert_eq!(payload.get("email"), Some(&json!("a@b.com")));
	assert_eq!(payload.get("password"), Some(&json!("longenough")));
}

#[rstest]
fn test_double_submit_while_in_flight_accepts_once() {
	// Arrange
	let mut controller = filled_login();

	// Act: rapid repeated triggers before the external call resolves
	let first = controller.submit();
	let second = controller.submit();

	// Assert: only the first submit produced a payload
	assert!(matches!(first, SubmitOutcome::Accepted(_)));
	assert!(matches!(second, SubmitOutcome::InFlight));
}

#[rstest]
fn test_cross_field_rule_attaches_to_target_only() {
	// Arrange
	let mut controller = FormController::new(signup_schema());
	controller.set_field("user_name", json!("amy"));
	controller.set_field("email", json!("amy@example.com"));
	controller.set_field("password", json!("longenough"));
	controller.set_field("confirm_password", json!("different"));
	controller.set_field("agree_terms", json!(true));

	// Act
	controller.submit();

	// Assert
	assert_eq!(
		controller.error("confirm_password"),
		Some("Passwords do not match.")
	);
	assert!(controller.error("password").is_none());
}

#[rstest]
fn test_reset_with_new_defaults_regardless_of_prior_state() {
	// Arrange: leave the form mid-flight with stale values
	let mut controller = filled_login();
	assert!(matches!(controller.submit(), SubmitOutcome::Accepted(_)));
	assert!(controller.is_in_flight());

	// Act
	let mut defaults = HashMap::new();
	defaults.insert("email".to_string(), json!("next@b.com"));
	controller.reset(Some(defaults));

	// Assert
	assert_eq!(controller.value("email"), Some(&json!("next@b.com")));
	assert_eq!(controller.value("password"), Some(&json!("")));
	assert!(controller.errors().is_empty());
	assert!(!controller.is_in_flight());
}

#[rstest]
fn test_numeric_range_scenario() {
	// Arrange: speaker count min 1, max 10
	let mut controller = FormController::new(auto_dubbing_schema());
	controller.set_field("title", json!("Episode 1"));

	// Act & Assert: 0 and 11 error, 5 passes
	for out_of_range in [json!(0), json!(11)] {
		controller.set_field("speaker_count", out_of_range);
		assert!(matches!(controller.submit(), SubmitOutcome::Invalid));
		assert!(controller.error("speaker_count").is_some());
	}

	controller.set_field("speaker_count", json!(5));
	assert!(matches!(controller.submit(), SubmitOutcome::Accepted(_)));
}

#[tokio::test]
async fn test_async_driver_invokes_callback_exactly_once() {
	// Arrange
	let mut controller = filled_login();
	let calls = Arc::new(AtomicUsize::new(0));

	// Act
	let counter = Arc::clone(&calls);
	let result = controller
		.submit_with(move |payload| {
			counter.fetch_add(1, Ordering::SeqCst);
			async move {
				let values: LoginValues = payload.deserialize().map_err(|e| e.to_string())?;
				Ok::<_, String>(values.email)
			}
		})
		.await;

	// Assert
	let SubmitResult::Settled(Ok(email)) = result else {
		panic!("expected settled submission");
	};
	assert_eq!(email, "a@b.com");
	assert_eq!(calls.load(Ordering::SeqCst), 1);
	assert!(!controller.is_in_flight());
}

#[tokio::test]
async fn test_in_flight_window_spans_external_resolution() {
	// Arrange: hold the external operation open with a oneshot channel
	let mut controller = filled_login();
	let (tx, rx) = oneshot::channel::<Result<(), String>>();

	let SubmitOutcome::Accepted(_payload) = controller.submit() else {
		panic!("expected accepted submit");
	};

	// Assert: in flight while the external call is pending; edits permitted
	assert!(controller.is_in_flight());
	controller.set_field("email", json!("edited@b.com"));
	assert!(matches!(controller.submit(), SubmitOutcome::InFlight));

	// Act: external operation resolves (failure here), caller settles
	tx.send(Err("server rejected credentials".to_string()))
		.unwrap();
	let outcome = rx.await.unwrap();
	controller.settle();

	// Assert: flag cleared on failure too; the error presentation is the
	// embedding context's job, not the controller's
	assert!(outcome.is_err());
	assert!(!controller.is_in_flight());
	assert!(controller.errors().is_empty());
}

#[tokio::test]
async fn test_async_driver_skips_callback_on_invalid_form() {
	// Arrange
	let mut controller = FormController::new(login_schema());
	let calls = Arc::new(AtomicUsize::new(0));

	// Act
	let counter = Arc::clone(&calls);
	let result: SubmitResult<(), String> = controller
		.submit_with(move |_| {
			counter.fetch_add(1, Ordering::SeqCst);
			async move { Ok(()) }
		})
		.await;

	// Assert
	assert!(matches!(result, SubmitResult::Invalid));
	assert_eq!(calls.load(Ordering::SeqCst), 0);
}
