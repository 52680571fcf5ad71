//! Table options and property document loading
//!
//! A property document bundles the records, the link table, and the
//! rendering options. It can be written in TOML:
//!
//! ```toml
//! [links]
//! Event = "/docs/event"
//!
//! [options]
//! deeplink_prefix = "props-"
//! anchor_policy = "suffix"
//!
//! [[properties]]
//! name = "onChange"
//! type = "(event: Event) => void"
//! ```
//!
//! or as the equivalent JSON object.

use crate::error::{PropsTableError, Result};
use crate::record::{LinkTable, PropertyRecord};
use crate::slug::AnchorPolicy;
use crate::table::PropsTable;
use crate::theme::TableTheme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rendering options for a props table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
	/// Prepended to every row anchor, e.g. to namespace several tables on one page
	#[serde(skip_serializing_if = "Option::is_none")]
	pub deeplink_prefix: Option<String>,
	/// Handling of duplicate anchors
	pub anchor_policy: AnchorPolicy,
	/// CSS classes
	pub theme: TableTheme,
}

impl TableOptions {
	/// Creates default options
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the anchor prefix
	pub fn deeplink_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.deeplink_prefix = Some(prefix.into());
		self
	}

	/// Sets the duplicate anchor policy
	pub fn anchor_policy(mut self, policy: AnchorPolicy) -> Self {
		self.anchor_policy = policy;
		self
	}

	/// Sets the theme
	pub fn theme(mut self, theme: TableTheme) -> Self {
		self.theme = theme;
		self
	}
}

/// A serialized props table: records, links, and options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropsDocument {
	/// Records in display order
	pub properties: Vec<PropertyRecord>,
	/// Type name to URL mapping
	pub links: LinkTable,
	/// Rendering options
	pub options: TableOptions,
}

impl PropsDocument {
	/// Parses a document from TOML text
	pub fn from_toml_str(content: &str) -> Result<Self> {
		Ok(toml::from_str(content)?)
	}

	/// Parses a document from JSON text
	pub fn from_json_str(content: &str) -> Result<Self> {
		Ok(serde_json::from_str(content)?)
	}

	/// Loads a document from a `.toml` or `.json` file
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let contents = std::fs::read_to_string(path).map_err(|source| PropsTableError::Io {
			path: path.to_path_buf(),
			source,
		})?;

		let document = match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => Self::from_toml_str(&contents)?,
			Some("json") => Self::from_json_str(&contents)?,
			_ => {
				return Err(PropsTableError::UnsupportedFormat(format!(
					"{} (supported formats: .toml, .json)",
					path.display()
				)));
			}
		};

		tracing::debug!(
			path = %path.display(),
			properties = document.properties.len(),
			links = document.links.len(),
			"loaded props document"
		);
		Ok(document)
	}

	/// Builds the table component for this document
	pub fn into_table(self) -> PropsTable {
		PropsTable::new(self.properties)
			.links(self.links)
			.options(self.options)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	const TOML_DOC: &str = r#"
[links]
Event = "/docs/event"

[options]
deeplink_prefix = "props-"
anchor_policy = "suffix"

[[properties]]
name = "onChange"
type = "(event: Event) => void"

[[properties]]
name = "width"
type = "number"
default = "100"
"#;

	#[rstest]
	fn test_from_toml_str() {
		let document = PropsDocument::from_toml_str(TOML_DOC).unwrap();

		assert_eq!(document.properties.len(), 2);
		assert_eq!(document.properties[1].default.as_deref(), Some("100"));
		assert_eq!(document.links.get("Event").map(String::as_str), Some("/docs/event"));
		assert_eq!(document.options.deeplink_prefix.as_deref(), Some("props-"));
		assert_eq!(document.options.anchor_policy, AnchorPolicy::Suffix);
		assert_eq!(document.options.theme, TableTheme::default());
	}

	#[rstest]
	fn test_empty_documents_use_defaults() {
		assert_eq!(PropsDocument::from_toml_str("").unwrap(), PropsDocument::default());
		assert_eq!(PropsDocument::from_json_str("{}").unwrap(), PropsDocument::default());
	}

	#[rstest]
	fn test_missing_name_is_rejected() {
		let result = PropsDocument::from_json_str(r#"{"properties":[{"type":"number"}]}"#);
		assert!(matches!(result, Err(PropsTableError::Json(_))));
	}

	#[rstest]
	fn test_unknown_anchor_policy_is_rejected() {
		let result = PropsDocument::from_toml_str("[options]\nanchor_policy = \"random\"\n");
		assert!(matches!(result, Err(PropsTableError::Toml(_))));
	}

	#[rstest]
	fn test_options_builder() {
		let options = TableOptions::new()
			.deeplink_prefix("api-")
			.anchor_policy(AnchorPolicy::Suffix)
			.theme(TableTheme::unstyled());

		assert_eq!(options.deeplink_prefix.as_deref(), Some("api-"));
		assert_eq!(options.anchor_policy, AnchorPolicy::Suffix);
		assert_eq!(options.theme, TableTheme::unstyled());
	}
}
