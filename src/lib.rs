//! Form state and validation for the Dublab web client
//!
//! This crate provides the client-side form layer:
//! - Declarative form schemas: ordered field definitions with validation
//!   rules plus cross-field rules with a designated error target
//! - A form controller owning field values, per-field error messages, and a
//!   submission-in-flight guard against duplicate submits
//! - A shared validation-message display primitive with live-region and
//!   alert semantics
//! - The application's concrete schemas: login, signup, the example entity
//!   form, and the auto-dubbing project configuration fields
//!
//! Validation failures are always reported as field-scoped messages, never
//! raised as errors; the external submission operation is an opaque async
//! callback supplied by the embedding context.

pub mod controller;
pub mod field;
pub mod fields;
pub mod forms;
pub mod message;
pub mod schema;
pub mod state;
pub mod validators;

pub use controller::{BoundField, FormController, FormEvent, SubmitOutcome, SubmitResult};
pub use field::{ErrorKind, FieldError, FieldResult, FormField, Widget};
pub use fields::{BooleanField, CharField, ChoiceField, EmailField, IntegerField};
pub use message::ValidationMessage;
pub use schema::{CrossFieldRule, FormSchema, SubmissionPayload, Validated};
pub use state::FormState;
pub use validators::EmailValidator;
