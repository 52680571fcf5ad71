//! Type reference linking
//!
//! Type and default text is split into alternating runs of word and
//! non-word characters. Any run whose exact text is a key of the
//! [`LinkTable`] becomes a hyperlink; everything else passes through.
//!
//! ```rust
//! use reinhardt_props_table::linkify::{linkify, Segment};
//! use reinhardt_props_table::LinkTable;
//!
//! let mut links = LinkTable::new();
//! links.insert("Event".to_string(), "/docs/event".to_string());
//!
//! let segments = linkify(Some("(event: Event) => void"), &links);
//! assert_eq!(segments[0], Segment::text("("));
//! assert_eq!(segments[3], Segment::link("Event", "/docs/event"));
//! ```

use crate::record::LinkTable;

/// One piece of linkified text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
	/// Plain text, rendered as-is
	Text(String),
	/// A token that matched a link table key
	Link {
		/// Visible link text, always the matched token
		label: String,
		/// Target URL from the link table
		href: String,
	},
}

impl Segment {
	/// Creates a plain text segment
	pub fn text(text: impl Into<String>) -> Self {
		Self::Text(text.into())
	}

	/// Creates a link segment
	pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
		Self::Link {
			label: label.into(),
			href: href.into(),
		}
	}

	/// Returns the visible text of this segment
	pub fn as_str(&self) -> &str {
		match self {
			Self::Text(text) => text,
			Self::Link { label, .. } => label,
		}
	}

	/// Returns whether this segment is a link
	pub fn is_link(&self) -> bool {
		matches!(self, Self::Link { .. })
	}
}

/// Word characters are ASCII letters, digits, and underscore.
fn is_word_char(ch: char) -> bool {
	ch.is_ascii_alphanumeric() || ch == '_'
}

/// Splits text into maximal runs of word and non-word characters.
///
/// Joining the returned tokens yields the input unchanged.
///
/// # Examples
///
/// ```
/// use reinhardt_props_table::linkify::tokenize;
///
/// assert_eq!(tokenize("Array<Node>"), vec!["Array", "<", "Node", ">"]);
/// assert_eq!(tokenize("a, b"), vec!["a", ", ", "b"]);
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<&str> {
	let mut tokens = Vec::new();
	let mut start = 0;
	let mut current: Option<bool> = None;

	for (idx, ch) in text.char_indices() {
		let word = is_word_char(ch);
		match current {
			Some(kind) if kind != word => {
				tokens.push(&text[start..idx]);
				start = idx;
				current = Some(word);
			}
			Some(_) => {}
			None => current = Some(word),
		}
	}

	if start < text.len() {
		tokens.push(&text[start..]);
	}
	tokens
}

/// Converts text into segments, linking tokens found in `links`.
///
/// Missing or empty text produces no segments.
pub fn linkify(text: Option<&str>, links: &LinkTable) -> Vec<Segment> {
	let Some(text) = text else {
		return Vec::new();
	};

	tokenize(text)
		.into_iter()
		.map(|token| match links.get(token) {
			Some(href) => Segment::link(token, href.as_str()),
			None => Segment::text(token),
		})
		.collect()
}

/// Joins the visible text of all segments.
pub fn segments_text(segments: &[Segment]) -> String {
	segments.iter().map(Segment::as_str).collect()
}
