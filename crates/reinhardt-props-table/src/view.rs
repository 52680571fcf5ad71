//! Server-side view tree for the props table.
//!
//! Only what the table needs: elements with attributes, text, fragments,
//! and nothing. [`View::render_to_string`] serializes to escaped HTML.

use std::borrow::Cow;

/// A node of renderable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
	/// An HTML element.
	Element(ElementView),
	/// A text node, escaped on output.
	Text(Cow<'static, str>),
	/// Several views without a wrapper element.
	Fragment(Vec<View>),
	/// Renders nothing.
	Empty,
}

/// An HTML element with attributes and children.
///
/// Every element is written with a closing tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementView {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	children: Vec<View>,
}

impl ElementView {
	/// Creates an element with the given tag.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		Self {
			tag: tag.into(),
			attrs: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Appends an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Appends a `class` attribute unless `classes` is empty.
	pub fn class(self, classes: &str) -> Self {
		if classes.is_empty() {
			self
		} else {
			self.attr("class", classes.to_string())
		}
	}

	/// Appends a child.
	pub fn child(mut self, child: impl IntoView) -> Self {
		self.children.push(child.into_view());
		self
	}

	/// Appends several children.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoView>) -> Self {
		self.children
			.extend(children.into_iter().map(IntoView::into_view));
		self
	}

	fn write_html(&self, output: &mut String) {
		output.push('<');
		output.push_str(&self.tag);
		for (name, value) in &self.attrs {
			output.push(' ');
			output.push_str(name);
			output.push_str("=\"");
			output.push_str(&html_escape::encode_double_quoted_attribute(value));
			output.push('"');
		}
		output.push('>');
		for child in &self.children {
			child.write_html(output);
		}
		output.push_str("</");
		output.push_str(&self.tag);
		output.push('>');
	}
}

impl View {
	/// Starts an element builder.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> ElementView {
		ElementView::new(tag)
	}

	/// Creates a text node.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoView>) -> Self {
		Self::Fragment(children.into_iter().map(IntoView::into_view).collect())
	}

	/// Creates an empty view.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Concatenated, unescaped text of this view and its descendants.
	pub fn text_content(&self) -> String {
		match self {
			View::Element(el) => el.children.iter().map(View::text_content).collect(),
			View::Text(text) => text.to_string(),
			View::Fragment(children) => children.iter().map(View::text_content).collect(),
			View::Empty => String::new(),
		}
	}

	/// Serializes the view to HTML.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.write_html(&mut output);
		output
	}

	fn write_html(&self, output: &mut String) {
		match self {
			View::Element(el) => el.write_html(output),
			View::Text(text) => output.push_str(&html_escape::encode_text(text)),
			View::Fragment(children) => {
				for child in children {
					child.write_html(output);
				}
			}
			View::Empty => {}
		}
	}
}

/// Conversion into a [`View`].
pub trait IntoView {
	/// Converts self into a View.
	fn into_view(self) -> View;
}

impl IntoView for View {
	fn into_view(self) -> View {
		self
	}
}

impl IntoView for ElementView {
	fn into_view(self) -> View {
		View::Element(self)
	}
}

impl IntoView for String {
	fn into_view(self) -> View {
		View::Text(Cow::Owned(self))
	}
}

impl IntoView for &'static str {
	fn into_view(self) -> View {
		View::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoView> IntoView for Option<T> {
	fn into_view(self) -> View {
		self.map_or(View::Empty, IntoView::into_view)
	}
}

impl<T: IntoView> IntoView for Vec<T> {
	fn into_view(self) -> View {
		View::fragment(self)
	}
}
