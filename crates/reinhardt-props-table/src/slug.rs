//! Slug generation and row anchor allocation

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

static ACRONYM_DIGITS: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"([A-Z]{2,})(\d+)").expect("valid regex"));
static LOWER_ACRONYM: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"([a-z\d]+)([A-Z]{2,})").expect("valid regex"));
static LOWER_UPPER: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"([a-z\d])([A-Z])").expect("valid regex"));
// `s` is excluded so plural acronyms such as "APIs" stay in one piece
static ACRONYM_WORD: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-rt-z\d]+)").expect("valid regex"));

/// Splits camelCase and acronym boundaries with spaces.
fn decamelize(text: &str) -> String {
	let text = ACRONYM_DIGITS.replace_all(text, "${1} ${2}");
	let text = LOWER_ACRONYM.replace_all(&text, "${1} ${2}");
	let text = LOWER_UPPER.replace_all(&text, "${1} ${2}");
	ACRONYM_WORD.replace_all(&text, "${1} ${2}").into_owned()
}

/// Replaces `&` with a word and folds Latin letters to ASCII.
///
/// German umlauts use their two-letter spelling. Any other non-ASCII
/// character becomes a space and ends up as a separator.
fn transliterate(text: &str) -> String {
	let mut output = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => output.push_str(" and "),
			'Ä' => output.push_str("Ae"),
			'Ö' => output.push_str("Oe"),
			'Ü' => output.push_str("Ue"),
			'ä' => output.push_str("ae"),
			'ö' => output.push_str("oe"),
			'ü' => output.push_str("ue"),
			'ß' => output.push_str("ss"),
			_ if ch.is_ascii() => output.push(ch),
			_ if is_latin_letter(ch) => {
				output.push_str(deunicode::deunicode_char(ch).unwrap_or(" "));
			}
			_ => output.push(' '),
		}
	}
	output
}

fn is_latin_letter(ch: char) -> bool {
	matches!(ch, '\u{00C0}'..='\u{024F}' | '\u{1E00}'..='\u{1EFF}') && ch.is_alphabetic()
}

/// Convert a property name to a URL fragment slug
///
/// Latin letters are folded to ASCII, `&` reads as "and", camelCase
/// boundaries become separators, and the result is lower-cased. Each run
/// of characters outside `[a-z0-9]` collapses into a single `-`, with
/// leading and trailing separators dropped.
///
/// # Examples
///
/// ```
/// use reinhardt_props_table::slug::slugify;
///
/// assert_eq!(slugify("Foo Bar"), "foo-bar");
/// assert_eq!(slugify("onChange"), "on-change");
/// assert_eq!(slugify("Drag & Drop"), "drag-and-drop");
/// assert_eq!(slugify("  --hello__world!! "), "hello-world");
/// assert_eq!(slugify(""), "");
/// ```
pub fn slugify(text: &str) -> String {
	let lowered = decamelize(&transliterate(text)).to_ascii_lowercase();
	let mut slug = String::with_capacity(lowered.len());
	let mut pending_separator = false;

	for ch in lowered.chars() {
		if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
			if pending_separator && !slug.is_empty() {
				slug.push('-');
			}
			pending_separator = false;
			slug.push(ch);
		} else {
			pending_separator = true;
		}
	}
	slug
}

/// Appends `slug` to an anchor prefix without leaving a dangling separator.
fn prefixed(prefix: &str, slug: &str) -> String {
	if slug.is_empty() {
		prefix.trim_end_matches('-').to_string()
	} else {
		format!("{}{}", prefix, slug)
	}
}

fn suffixed(base: &str, counter: usize) -> String {
	let stem = base.trim_end_matches('-');
	if stem.is_empty() {
		counter.to_string()
	} else {
		format!("{}-{}", stem, counter)
	}
}

/// How duplicate anchors within one table are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorPolicy {
	/// Duplicate names share one anchor; only a warning is logged
	#[default]
	Shared,
	/// Later duplicates receive a numeric suffix (`-1`, `-2`, ...)
	Suffix,
}

/// Hands out row anchors for a single render pass.
#[derive(Debug, Default)]
pub struct AnchorAllocator {
	policy: AnchorPolicy,
	prefix: Option<String>,
	taken: HashSet<String>,
	next_suffix: HashMap<String, usize>,
}

impl AnchorAllocator {
	/// Creates an allocator with the given policy and optional prefix
	pub fn new(policy: AnchorPolicy, prefix: Option<String>) -> Self {
		Self {
			policy,
			prefix,
			..Self::default()
		}
	}

	/// Returns the anchor for `name`, honoring the collision policy.
	pub fn allocate(&mut self, name: &str) -> String {
		let base = match &self.prefix {
			Some(prefix) => prefixed(prefix, &slugify(name)),
			None => slugify(name),
		};

		if self.taken.insert(base.clone()) {
			return base;
		}

		match self.policy {
			AnchorPolicy::Shared => {
				tracing::warn!(anchor = %base, property = name, "duplicate property anchor");
				base
			}
			AnchorPolicy::Suffix => {
				let counter = self.next_suffix.entry(base.clone()).or_insert(1);
				loop {
					let candidate = suffixed(&base, *counter);
					*counter += 1;
					if self.taken.insert(candidate.clone()) {
						return candidate;
					}
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("Foo Bar", "foo-bar")]
	#[case("width", "width")]
	#[case("onChange", "on-change")]
	#[case("onNodesChange", "on-nodes-change")]
	#[case("HTMLElement", "html-element")]
	#[case("fitViewOptions.padding", "fit-view-options-padding")]
	#[case("APIs", "apis")]
	#[case("Node2D", "node2-d")]
	#[case("h1", "h1")]
	#[case("(Section)", "section")]
	#[case("---", "")]
	#[case("Größe", "groesse")]
	#[case("Crème brûlée", "creme-brulee")]
	#[case("Drag & Drop", "drag-and-drop")]
	#[case("日本", "")]
	#[case("size (日本)", "size")]
	fn test_slugify(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(slugify(input), expected);
	}

	#[rstest]
	fn test_shared_policy_reuses_anchor() {
		let mut anchors = AnchorAllocator::new(AnchorPolicy::Shared, None);

		assert_eq!(anchors.allocate("Foo Bar"), "foo-bar");
		assert_eq!(anchors.allocate("Foo Bar"), "foo-bar");
	}

	#[rstest]
	fn test_suffix_policy_disambiguates() {
		let mut anchors = AnchorAllocator::new(AnchorPolicy::Suffix, None);

		assert_eq!(anchors.allocate("Foo Bar"), "foo-bar");
		assert_eq!(anchors.allocate("foo-bar"), "foo-bar-1");
		assert_eq!(anchors.allocate("FOO  BAR"), "foo-bar-2");
	}

	#[rstest]
	fn test_suffix_policy_skips_taken_suffix() {
		let mut anchors = AnchorAllocator::new(AnchorPolicy::Suffix, None);

		assert_eq!(anchors.allocate("item 1"), "item-1");
		assert_eq!(anchors.allocate("item"), "item");
		assert_eq!(anchors.allocate("item"), "item-2");
	}

	#[rstest]
	fn test_prefix_with_empty_slug_has_no_dangling_separator() {
		let mut anchors = AnchorAllocator::new(AnchorPolicy::Suffix, Some("node-".to_string()));

		assert_eq!(anchors.allocate(""), "node");
		assert_eq!(anchors.allocate("!!"), "node-1");
		assert_eq!(anchors.allocate(""), "node-2");
	}

	#[rstest]
	fn test_prefix_is_prepended() {
		let mut anchors = AnchorAllocator::new(AnchorPolicy::Shared, Some("node-".to_string()));

		assert_eq!(anchors.allocate("dragHandle"), "node-drag-handle");
	}
}
