//! Property records and the link table

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from a type identifier to the URL documenting it.
///
/// Keys are matched against whole word tokens, case-sensitively.
pub type LinkTable = HashMap<String, String>;

/// One documented property of an API surface.
///
/// Every field except `name` is optional. An empty string is treated the
/// same as a missing field everywhere in this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
	/// Property name, also the source of the row anchor
	pub name: String,
	/// Type signature, linkified on render
	#[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
	pub ty: Option<String>,
	/// Default value, linkified on render
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub default: Option<String>,
	/// Free-text description shown under the type
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Code example shown under the description
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub example: Option<String>,
}

impl PropertyRecord {
	/// Creates a record with only a name.
	///
	/// Without further fields this record renders as a section heading.
	///
	/// # Example
	///
	/// ```rust
	/// use reinhardt_props_table::PropertyRecord;
	///
	/// let record = PropertyRecord::new("width").ty("number").default_value("100");
	/// assert_eq!(record.type_text(), Some("number"));
	/// assert!(!record.is_heading());
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Self::default()
		}
	}

	/// Sets the type signature
	pub fn ty(mut self, ty: impl Into<String>) -> Self {
		self.ty = Some(ty.into());
		self
	}

	/// Sets the default value
	pub fn default_value(mut self, default: impl Into<String>) -> Self {
		self.default = Some(default.into());
		self
	}

	/// Sets the description
	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Sets the example
	pub fn example(mut self, example: impl Into<String>) -> Self {
		self.example = Some(example.into());
		self
	}

	/// Returns the type signature if present and non-empty
	pub fn type_text(&self) -> Option<&str> {
		non_empty(&self.ty)
	}

	/// Returns the default value if present and non-empty
	pub fn default_text(&self) -> Option<&str> {
		non_empty(&self.default)
	}

	/// Returns the description if present and non-empty
	pub fn description_text(&self) -> Option<&str> {
		non_empty(&self.description)
	}

	/// Returns the example if present and non-empty
	pub fn example_text(&self) -> Option<&str> {
		non_empty(&self.example)
	}

	/// Returns whether this record is a pure section heading.
	///
	/// See [`is_heading`].
	pub fn is_heading(&self) -> bool {
		is_heading(self)
	}
}

/// A record is a heading when it has no type, description, or default.
///
/// The name is not consulted here; a nameless heading simply renders
/// without a label.
pub fn is_heading(record: &PropertyRecord) -> bool {
	record.type_text().is_none()
		&& record.description_text().is_none()
		&& record.default_text().is_none()
}

fn non_empty(field: &Option<String>) -> Option<&str> {
	field.as_deref().filter(|s| !s.is_empty())
}
