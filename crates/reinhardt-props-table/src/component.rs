//! Core component trait

/// Component trait - base interface for renderable documentation widgets
pub trait Component: Send + Sync {
	/// Returns the component's name (for debugging)
	fn name(&self) -> &'static str;

	/// Renders the component to an HTML string
	fn render(&self) -> String;

	/// Returns the CSS classes applied to the component's root element
	fn classes(&self) -> Vec<String> {
		vec![]
	}
}
