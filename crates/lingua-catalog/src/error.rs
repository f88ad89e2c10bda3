//! Error types for catalog readers.
//!
//! Every reader in this crate reports failures through [`CatalogError`].
//! An error is always fatal to the single catalog being read: readers never
//! hand back a partially decoded catalog.

use thiserror::Error;

/// Errors that can occur while reading a translation catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// The source could not be decoded: truncated read, out-of-range offset,
	/// invalid UTF-8, or a mapping source that is not a mapping.
	#[error("Invalid catalog format: {0}")]
	Format(String),

	/// The first four bytes match neither gettext magic sequence.
	#[error("Invalid magic number: {0:02X?}")]
	InvalidMagic([u8; 4]),

	/// The major revision of a binary catalog is neither 0 nor 1.
	#[error("Unsupported major revision: {0}")]
	UnsupportedRevision(u32),

	/// The catalog file could not be opened.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// JSON deserialization error.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// YAML deserialization error (when the `yaml` feature is enabled).
	#[cfg(feature = "yaml")]
	#[error("YAML error: {0}")]
	Yaml(#[from] serde_yaml::Error),

	/// No reader is registered for the file extension.
	#[error("Unsupported file extension: {0}")]
	UnsupportedExtension(String),
}

impl CatalogError {
	/// Returns true if the error describes malformed catalog content rather
	/// than a failure to reach the file.
	pub fn is_format_error(&self) -> bool {
		!matches!(self, Self::Io(_) | Self::UnsupportedExtension(_))
	}
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
