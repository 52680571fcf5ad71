//! Error types for reinhardt-props-table
//!
//! Rendering itself never fails; only loading a property document from
//! disk or from serialized text can produce an error.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for property document loading
#[derive(Debug, Error)]
pub enum PropsTableError {
	/// The document file could not be read
	#[error("Failed to read {}: {source}", path.display())]
	Io {
		/// Path of the file that failed to load
		path: PathBuf,
		/// Underlying I/O error
		#[source]
		source: std::io::Error,
	},

	/// The document is not valid TOML for the expected shape
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// The document is not valid JSON for the expected shape
	#[error("JSON parse error: {0}")]
	Json(#[from] serde_json::Error),

	/// The file extension does not map to a known document format
	#[error("Unsupported format: {0}")]
	UnsupportedFormat(String),
}

/// Result type for property document operations
pub type Result<T> = std::result::Result<T, PropsTableError>;
