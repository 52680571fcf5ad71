//! The props table component
//!
//! Rendering happens in two steps. [`PropsTable::layout`] resolves every
//! decision (column visibility, anchors, heading rows, linkification) into a
//! [`TableLayout`]; [`TableLayout::view`] then turns that layout into markup.
//! Both steps are pure and order-preserving.

use crate::component::Component;
use crate::config::TableOptions;
use crate::linkify::{Segment, linkify};
use crate::record::{LinkTable, PropertyRecord};
use crate::slug::AnchorAllocator;
use crate::theme::TableTheme;
use crate::view::{ElementView, IntoView, View};

/// How the name cell of a row is displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameCell {
	/// Section heading: bold text, no code formatting
	Heading(String),
	/// Regular property: inline code token
	Code(String),
	/// Record without a name
	Empty,
}

/// Content of the default column for one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultCell {
	/// Linkified default value
	pub segments: Vec<Segment>,
	/// Set when the record has no default; the cell is hidden on narrow layouts
	pub is_empty: bool,
}

/// Resolved output for one property record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowGroup {
	/// Element id and `#` link target
	pub anchor: String,
	/// Name display
	pub name: NameCell,
	/// Linkified type
	pub type_segments: Vec<Segment>,
	/// Non-empty description
	pub description: Option<String>,
	/// Non-empty example
	pub example: Option<String>,
	/// Present on every row iff the default column is shown
	pub default_cell: Option<DefaultCell>,
}

/// Resolved output for a whole table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableLayout {
	/// Whether the default column is rendered
	pub show_default_column: bool,
	/// One entry per input record, in input order
	pub rows: Vec<RowGroup>,
}

/// Returns whether any record documents a default value.
pub fn show_default_column(properties: &[PropertyRecord]) -> bool {
	properties.iter().any(|prop| prop.default_text().is_some())
}

/// Computes the layout for `properties` with default options.
///
/// # Example
///
/// ```rust
/// use reinhardt_props_table::{render, LinkTable, PropertyRecord};
///
/// let layout = render(
///     &[PropertyRecord::new("width").ty("number").default_value("100")],
///     &LinkTable::new(),
/// );
/// assert!(layout.show_default_column);
/// assert_eq!(layout.rows[0].anchor, "width");
/// ```
pub fn render(properties: &[PropertyRecord], links: &LinkTable) -> TableLayout {
	build_layout(properties, links, &TableOptions::default())
}

fn build_layout(
	properties: &[PropertyRecord],
	links: &LinkTable,
	options: &TableOptions,
) -> TableLayout {
	let show_default = show_default_column(properties);
	let mut anchors = AnchorAllocator::new(options.anchor_policy, options.deeplink_prefix.clone());

	let rows = properties
		.iter()
		.map(|prop| {
			let name = if prop.name.is_empty() {
				NameCell::Empty
			} else if prop.is_heading() {
				NameCell::Heading(prop.name.clone())
			} else {
				NameCell::Code(prop.name.clone())
			};

			let default_cell = show_default.then(|| DefaultCell {
				segments: linkify(prop.default_text(), links),
				is_empty: prop.default_text().is_none(),
			});

			RowGroup {
				anchor: anchors.allocate(&prop.name),
				name,
				type_segments: linkify(prop.type_text(), links),
				description: prop.description_text().map(str::to_string),
				example: prop.example_text().map(str::to_string),
				default_cell,
			}
		})
		.collect::<Vec<_>>();

	tracing::debug!(
		rows = rows.len(),
		show_default_column = show_default,
		"computed props table layout"
	);

	TableLayout {
		show_default_column: show_default,
		rows,
	}
}

impl TableLayout {
	/// Builds the `<table>` view for this layout.
	pub fn view(&self, theme: &TableTheme) -> View {
		let mut head_row = View::element("tr")
			.class(&theme.head_row)
			.child(View::element("th").child("Name"))
			.child(View::element("th").child("Type"));
		if self.show_default_column {
			head_row = head_row.child(View::element("th").child("Default"));
		}

		View::element("table")
			.class(&theme.table)
			.child(View::element("thead").class(&theme.head).child(head_row))
			.children(self.rows.iter().map(|row| row.view(theme)))
			.into_view()
	}
}

impl RowGroup {
	/// Builds the `<tbody>` view for this row.
	pub fn view(&self, theme: &TableTheme) -> View {
		let name = match &self.name {
			NameCell::Heading(name) => View::element("span")
				.class(&theme.heading_name)
				.child(name.clone())
				.into_view(),
			NameCell::Code(name) => View::element("code")
				.class(&theme.code_name)
				.child(name.clone())
				.into_view(),
			NameCell::Empty => View::empty(),
		};

		let name_cell = View::element("td").class(&theme.name_cell).child(
			View::element("div")
				.attr("class", "relative")
				.child(
					View::element("a")
						.attr("href", format!("#{}", self.anchor))
						.class(&theme.anchor_link)
						.child("#"),
				)
				.child(name),
		);

		let description = self.description.as_ref().map(|description| {
			View::element("div")
				.class(&theme.description)
				.child(description.clone())
		});
		let example = self.example.as_ref().map(|example| {
			View::element("div").class(&theme.example).child(
				View::element("pre").child(View::element("code").child(example.clone())),
			)
		});

		let type_cell = View::element("td")
			.child(
				View::element("div").child(
					View::element("code")
						.class(&theme.type_code)
						.children(segment_views(&self.type_segments, theme)),
				),
			)
			.child(description)
			.child(example);

		let default_cell = self.default_cell.as_ref().map(|cell| {
			View::element("td")
				.class(&theme.default_cell_classes(cell.is_empty))
				.child(
					View::element("pre").class(&theme.default_pre).child(
						View::element("code")
							.class(&theme.default_code)
							.children(segment_views(&cell.segments, theme)),
					),
				)
		});

		View::element("tbody")
			.attr("id", self.anchor.clone())
			.class(&theme.row_group)
			.child(
				View::element("tr")
					.class(&theme.row)
					.child(name_cell)
					.child(type_cell)
					.child(default_cell),
			)
			.into_view()
	}
}

fn segment_views(segments: &[Segment], theme: &TableTheme) -> Vec<View> {
	segments
		.iter()
		.map(|segment| match segment {
			Segment::Text(text) => View::text(text.clone()),
			Segment::Link { label, href } => link_view(label, href, theme).into_view(),
		})
		.collect()
}

fn link_view(label: &str, href: &str, theme: &TableTheme) -> ElementView {
	View::element("a")
		.attr("href", href.to_string())
		.class(&theme.link)
		.child(label.to_string())
}

/// Documentation table for a list of properties.
///
/// # Example
///
/// ```rust
/// use reinhardt_props_table::{LinkTable, PropertyRecord, PropsTable};
///
/// let mut links = LinkTable::new();
/// links.insert("Event".to_string(), "/docs/event".to_string());
///
/// let html = PropsTable::new(vec![
///     PropertyRecord::new("onChange").ty("(event: Event) => void"),
/// ])
/// .links(links)
/// .render_to_string();
///
/// assert!(html.contains(r#"<tbody id="on-change""#));
/// assert!(html.contains(r#"<a href="/docs/event" class="text-primary">Event</a>"#));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropsTable {
	properties: Vec<PropertyRecord>,
	links: LinkTable,
	options: TableOptions,
}

impl PropsTable {
	/// Creates a table for the given records
	pub fn new(properties: Vec<PropertyRecord>) -> Self {
		Self {
			properties,
			..Self::default()
		}
	}

	/// Sets the link table
	pub fn links(mut self, links: LinkTable) -> Self {
		self.links = links;
		self
	}

	/// Sets the rendering options
	pub fn options(mut self, options: TableOptions) -> Self {
		self.options = options;
		self
	}

	/// Resolves the table layout
	pub fn layout(&self) -> TableLayout {
		build_layout(&self.properties, &self.links, &self.options)
	}

	/// Builds the view tree
	pub fn view(&self) -> View {
		self.layout().view(&self.options.theme)
	}

	/// Renders the table to HTML
	pub fn render_to_string(&self) -> String {
		self.view().render_to_string()
	}
}

impl Component for PropsTable {
	fn name(&self) -> &'static str {
		"PropsTable"
	}

	fn render(&self) -> String {
		self.render_to_string()
	}

	fn classes(&self) -> Vec<String> {
		self.options
			.theme
			.table
			.split_whitespace()
			.map(str::to_string)
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_show_default_column() {
		assert!(!show_default_column(&[]));
		assert!(!show_default_column(&[
			PropertyRecord::new("a").ty("string"),
			PropertyRecord::new("b").default_value(""),
		]));
		assert!(show_default_column(&[
			PropertyRecord::new("a").ty("string"),
			PropertyRecord::new("b").default_value("0"),
		]));
	}

	#[rstest]
	fn test_default_cell_on_every_row() {
		let layout = render(
			&[
				PropertyRecord::new("a").ty("string"),
				PropertyRecord::new("b").ty("number").default_value("0"),
			],
			&LinkTable::new(),
		);

		let first = layout.rows[0].default_cell.as_ref().unwrap();
		assert!(first.is_empty);
		assert!(first.segments.is_empty());

		let second = layout.rows[1].default_cell.as_ref().unwrap();
		assert!(!second.is_empty);
		assert_eq!(second.segments, vec![Segment::text("0")]);
	}

	#[rstest]
	fn test_name_cells() {
		let layout = render(
			&[
				PropertyRecord::new("Section"),
				PropertyRecord::new("width").ty("number"),
				PropertyRecord::new("").ty("number"),
			],
			&LinkTable::new(),
		);

		assert_eq!(layout.rows[0].name, NameCell::Heading("Section".to_string()));
		assert_eq!(layout.rows[1].name, NameCell::Code("width".to_string()));
		assert_eq!(layout.rows[2].name, NameCell::Empty);
	}

	#[rstest]
	fn test_empty_optional_fields_are_dropped() {
		let layout = render(
			&[PropertyRecord::new("a")
				.ty("string")
				.description("")
				.example("")],
			&LinkTable::new(),
		);

		assert_eq!(layout.rows[0].description, None);
		assert_eq!(layout.rows[0].example, None);
	}

	#[rstest]
	fn test_component_trait() {
		let table = PropsTable::new(vec![]);

		assert_eq!(Component::name(&table), "PropsTable");
		assert_eq!(table.classes(), vec!["w-full", "my-8", "text-sm"]);
		assert_eq!(Component::render(&table), table.render_to_string());
	}
}
