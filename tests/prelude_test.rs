use reinhardt_docs::prelude::*;
use rstest::*;

#[rstest]
fn test_prelude_renders_table() {
	let table = PropsTable::new(vec![
		PropertyRecord::new("Foo Bar").ty("string"),
		PropertyRecord::new("Foo Bar").ty("number"),
	])
	.options(TableOptions::new().anchor_policy(AnchorPolicy::Suffix));

	let html = Component::render(&table);
	assert!(html.contains(r#"id="foo-bar""#));
	assert!(html.contains(r#"id="foo-bar-1""#));
}

#[rstest]
fn test_document_from_prelude() {
	let document = PropsDocument::from_json_str(
		r#"{"properties":[{"name":"width","type":"number","default":"100"}]}"#,
	)
	.unwrap();
	let layout = document.into_table().layout();

	assert!(layout.show_default_column);
	assert_eq!(layout.rows.len(), 1);
	assert_eq!(TableTheme::default(), TableTheme::default_theme());
	assert!(LinkTable::new().is_empty());
}
