//! CSS class configuration for the props table
//!
//! The table only emits class names; styling lives in the host site.
//! [`TableTheme::default`] produces Tailwind classes for a responsive table
//! that collapses into stacked cards below the `lg` breakpoint.

use serde::{Deserialize, Serialize};

/// Class names applied to each part of the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableTheme {
	/// `<table>` element
	pub table: String,
	/// `<thead>` element
	pub head: String,
	/// Header `<tr>`
	pub head_row: String,
	/// Per-record `<tbody>`
	pub row_group: String,
	/// Per-record `<tr>`
	pub row: String,
	/// Name `<td>`
	pub name_cell: String,
	/// `#` deep-link anchor
	pub anchor_link: String,
	/// Name of a heading record
	pub heading_name: String,
	/// Name of a regular record
	pub code_name: String,
	/// `<code>` wrapping the type
	pub type_code: String,
	/// Description block
	pub description: String,
	/// Example block wrapper
	pub example: String,
	/// Default `<td>`
	pub default_cell: String,
	/// Extra classes for a default `<td>` whose record has no default
	pub default_cell_empty: String,
	/// `<pre>` inside the default cell
	pub default_pre: String,
	/// `<code>` inside the default cell
	pub default_code: String,
	/// Links produced from the link table
	pub link: String,
}

impl TableTheme {
	/// Create the default Tailwind theme
	pub fn default_theme() -> Self {
		Self {
			table: "w-full my-8 text-sm".into(),
			head: "hidden lg:table-header-group text-left border-b border-gray-200".into(),
			head_row: "[&>th]:p-1.5".into(),
			row_group: "group hover:bg-gray-50 max-lg:[&>tr]:block max-lg:block bg-gray-100 lg:bg-transparent rounded-xl border border-gray-200 lg:border-none mb-5".into(),
			row: "[&>td]:p-3 max-lg:[&>td]:block border-b border-gray-200".into(),
			name_cell: "lg:!pl-0".into(),
			anchor_link: "flex lg:w-[25px] items-center absolute right-0 text-lg font-black lg:right-auto lg:left-0 lg:top-1/2 lg:-translate-x-[22px] lg:-translate-y-1/2 group-hover:opacity-100 lg:opacity-0".into(),
			heading_name: "px-1.5 py-0.5 font-bold".into(),
			code_name: "bg-gray-50 px-1.5 py-0.5 border border-gray-200 rounded-sm".into(),
			type_code: "break-all".into(),
			description: "mt-2 max-w-md".into(),
			example: "bg-gray-50 border border-gray-200 rounded-lg mt-2".into(),
			default_cell: "!px-0".into(),
			default_cell_empty: "!hidden lg:table-cell".into(),
			default_pre: "inline-block bg-gray-50 !px-1.5 py-0.5 border border-gray-200 rounded-sm".into(),
			default_code: "text-xs".into(),
			link: "text-primary".into(),
		}
	}

	/// Create a theme with every class empty
	///
	/// Useful for hosts that style the table with element selectors.
	pub fn unstyled() -> Self {
		Self {
			table: String::new(),
			head: String::new(),
			head_row: String::new(),
			row_group: String::new(),
			row: String::new(),
			name_cell: String::new(),
			anchor_link: String::new(),
			heading_name: String::new(),
			code_name: String::new(),
			type_code: String::new(),
			description: String::new(),
			example: String::new(),
			default_cell: String::new(),
			default_cell_empty: String::new(),
			default_pre: String::new(),
			default_code: String::new(),
			link: String::new(),
		}
	}

	/// Classes for a default cell, hiding it on narrow layouts when empty
	pub fn default_cell_classes(&self, is_empty: bool) -> String {
		if is_empty {
			join_classes(&[&self.default_cell, &self.default_cell_empty])
		} else {
			self.default_cell.clone()
		}
	}

	/// Builder method for the table class
	pub fn table(mut self, classes: impl Into<String>) -> Self {
		self.table = classes.into();
		self
	}

	/// Builder method for the link class
	pub fn link(mut self, classes: impl Into<String>) -> Self {
		self.link = classes.into();
		self
	}
}

impl Default for TableTheme {
	fn default() -> Self {
		Self::default_theme()
	}
}

fn join_classes(parts: &[&str]) -> String {
	parts
		.iter()
		.filter(|part| !part.is_empty())
		.copied()
		.collect::<Vec<_>>()
		.join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_default_cell_classes() {
		let theme = TableTheme::default();

		assert_eq!(theme.default_cell_classes(false), "!px-0");
		assert_eq!(
			theme.default_cell_classes(true),
			"!px-0 !hidden lg:table-cell"
		);
	}

	#[rstest]
	fn test_unstyled_default_cell_classes() {
		let theme = TableTheme::unstyled();
		assert_eq!(theme.default_cell_classes(true), "");
	}

	#[rstest]
	fn test_builder_methods() {
		let theme = TableTheme::default().link("underline").table("props");

		assert_eq!(theme.link, "underline");
		assert_eq!(theme.table, "props");
		assert_eq!(theme.head_row, "[&>th]:p-1.5");
	}

	#[rstest]
	fn test_partial_deserialize_keeps_defaults() {
		let theme: TableTheme = serde_json::from_str(r#"{"link":"docs-link"}"#).unwrap();

		assert_eq!(theme.link, "docs-link");
		assert_eq!(theme.table, TableTheme::default().table);
	}
}
