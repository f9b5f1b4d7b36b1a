//! Shared validation-message display primitive

use crate::field::escape_html;

/// View-model for the single message slot rendered under a field.
///
/// The slot is always rendered (it reserves layout space and stays a polite
/// live region) but only carries alert semantics while a message is present.
///
/// # Examples
///
/// ```
/// use dublab_forms::ValidationMessage;
///
/// let hidden = ValidationMessage::hidden();
/// assert!(!hidden.is_visible());
/// assert_eq!(hidden.role(), None);
///
/// let shown = ValidationMessage::visible("Enter a valid email address.");
/// assert!(shown.is_visible());
/// assert_eq!(shown.role(), Some("alert"));
/// assert_eq!(shown.text(), Some("Enter a valid email address."));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationMessage {
	message: Option<String>,
}

impl ValidationMessage {
	/// An empty slot with no message
	pub fn hidden() -> Self {
		Self { message: None }
	}

	/// A slot carrying a visible message
	pub fn visible(message: impl Into<String>) -> Self {
		Self {
			message: Some(message.into()),
		}
	}

	/// Build from an optional error message, e.g. a field's error slot
	pub fn from_error(error: Option<&str>) -> Self {
		Self {
			message: error.map(str::to_string),
		}
	}

	pub fn is_visible(&self) -> bool {
		self.message.is_some()
	}

	pub fn text(&self) -> Option<&str> {
		self.message.as_deref()
	}

	/// `alert` while a message is shown, nothing otherwise
	pub fn role(&self) -> Option<&'static str> {
		if self.is_visible() { Some("alert") } else { None }
	}

	/// Screen readers announce changes without interrupting
	pub fn live_region(&self) -> &'static str {
		"polite"
	}

	/// Render the slot as an HTML paragraph with escaped message text.
	///
	/// # Examples
	///
	/// ```
	/// use dublab_forms::ValidationMessage;
	///
	/// let html = ValidationMessage::visible("Enter a <valid> email").render();
	/// assert_eq!(
	/// 	html,
	/// 	"<p aria-live=\"polite\" role=\"alert\">Enter a &lt;valid&gt; email</p>"
	/// );
	///
	/// assert_eq!(
	/// 	ValidationMessage::hidden().render(),
	/// 	"<p aria-live=\"polite\"></p>"
	/// );
	/// ```
	pub fn render(&self) -> String {
		match &self.message {
			Some(message) => format!(
				"<p aria-live=\"{}\" role=\"alert\">{}</p>",
				self.live_region(),
				escape_html(message)
			),
			None => format!("<p aria-live=\"{}\"></p>", self.live_region()),
		}
	}
}
