//! Property documentation tables
//!
//! This module provides access to reinhardt-props-table, which renders the
//! "props" tables of API reference pages.
//!
//! ## Architecture
//!
//! - **Records**: one [`PropertyRecord`] per documented property
//! - **Linking**: type names become links through a [`LinkTable`]
//! - **Anchors**: every row is addressable as `#<slug>`
//! - **Documents**: records, links, and options load from TOML or JSON
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_docs::props_table::{LinkTable, PropertyRecord, PropsTable};
//!
//! let html = PropsTable::new(vec![PropertyRecord::new("width").ty("number")])
//!     .links(LinkTable::new())
//!     .render_to_string();
//!
//! assert!(html.contains(r#"id="width""#));
//! ```

// Re-export all reinhardt-props-table functionality
pub use reinhardt_props_table::*;
