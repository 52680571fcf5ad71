//! Common test fixtures for reinhardt-props-table tests

use reinhardt_props_table::{LinkTable, PropertyRecord};
use rstest::*;

/// Fixture providing a link table for flow-style type names
#[fixture]
pub fn flow_links() -> LinkTable {
	let mut links = LinkTable::new();
	links.insert("Event".to_string(), "/docs/event".to_string());
	links.insert("Node".to_string(), "/api-reference/types/node".to_string());
	links.insert("Edge".to_string(), "/api-reference/types/edge".to_string());
	links
}

/// Fixture providing a mixed list of headings and properties
#[fixture]
pub fn flow_props() -> Vec<PropertyRecord> {
	vec![
		PropertyRecord::new("Common props"),
		PropertyRecord::new("nodes")
			.ty("Node[]")
			.default_value("[]")
			.description("An array of nodes to render in a controlled flow."),
		PropertyRecord::new("onNodesChange")
			.ty("(changes: NodeChange[]) => void")
			.example("onNodesChange={(changes) => setNodes(applyNodeChanges(changes, nodes))}"),
		PropertyRecord::new("Viewport props"),
		PropertyRecord::new("defaultEdges").ty("Edge[]"),
	]
}
