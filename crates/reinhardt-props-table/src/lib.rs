//! Property documentation tables for Reinhardt docs
//!
//! This crate renders the "props" tables found on API reference pages: one
//! row per documented property with its name, type, default value,
//! description, and example. Type names inside the type and default text
//! are turned into links through a caller-supplied [`LinkTable`], and every
//! row gets a stable `#<slug>` anchor for deep-linking.
//!
//! # Features
//!
//! - **Column visibility**: the default column only appears when at least one
//!   record documents a default value
//! - **Heading rows**: records with only a name render as section headings
//! - **Type linking**: whole-token, case-sensitive substitution of type names
//! - **Anchors**: slugified names, with a configurable duplicate policy
//! - **Documents**: records, links, and options loadable from TOML or JSON
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[PropsDocument] --> B[PropsTable]
//!     B --> C[TableLayout]
//!     C --> D[RowGroup]
//!     D --> E[linkify]
//!     D --> F[AnchorAllocator]
//!     C --> G[View]
//!     G --> H[HTML]
//! ```
//!
//! # Example
//!
//! ```rust
//! use reinhardt_props_table::{LinkTable, PropertyRecord, PropsTable};
//!
//! let mut links = LinkTable::new();
//! links.insert("Node".to_string(), "/api-reference/types/node".to_string());
//!
//! let table = PropsTable::new(vec![
//!     PropertyRecord::new("Common props"),
//!     PropertyRecord::new("nodes").ty("Node[]").default_value("[]"),
//! ])
//! .links(links);
//!
//! let layout = table.layout();
//! assert!(layout.show_default_column);
//! assert_eq!(layout.rows[1].anchor, "nodes");
//!
//! let html = table.render_to_string();
//! assert!(html.starts_with("<table"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod component;
pub mod config;
pub mod error;
pub mod linkify;
pub mod record;
pub mod slug;
pub mod table;
pub mod theme;
pub mod view;

// Re-exports for convenience
pub use component::Component;
pub use config::{PropsDocument, TableOptions};
pub use error::{PropsTableError, Result};
pub use linkify::Segment;
pub use record::{LinkTable, PropertyRecord, is_heading};
pub use slug::{AnchorPolicy, slugify};
pub use table::{DefaultCell, NameCell, PropsTable, RowGroup, TableLayout, render};
pub use theme::TableTheme;
pub use view::{ElementView, IntoView, View};
