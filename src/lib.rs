//! # Reinhardt Docs
//!
//! Documentation building blocks for sites built with Reinhardt.
//!
//! ## Feature Flags
//!
//! - `props-table` (default) - Property tables for API reference pages
//! - `full` - All features enabled
//!
//! ## Quick Example
//!
//! ```rust
//! use reinhardt_docs::prelude::*;
//!
//! let mut links = LinkTable::new();
//! links.insert("Event".to_string(), "/docs/event".to_string());
//!
//! let table = PropsTable::new(vec![
//!     PropertyRecord::new("Events"),
//!     PropertyRecord::new("onChange").ty("(event: Event) => void"),
//! ])
//! .links(links);
//!
//! assert!(table.render_to_string().contains(r#"href="/docs/event""#));
//! ```

#[cfg(feature = "props-table")]
pub mod props_table;

/// Commonly used types
pub mod prelude {
	#[cfg(feature = "props-table")]
	pub use crate::props_table::{
		AnchorPolicy, Component, LinkTable, PropertyRecord, PropsDocument, PropsTable,
		TableOptions, TableTheme,
	};
}
