//! Error types for catalog loading.

use std::path::PathBuf;

use lingua_catalog::CatalogError;
use thiserror::Error;

/// Errors that abort loading a language into the registry.
///
/// Lookups never fail: an unknown key falls back to its input text. Only
/// [`Registry::load`](crate::Registry::load) reports errors.
#[derive(Debug, Error)]
pub enum RegistryError {
	/// The catalog source could not list the files of a language.
	#[error("Failed to discover catalogs for '{language}': {source}")]
	Discovery {
		/// Language being loaded
		language: String,
		/// Underlying I/O error
		#[source]
		source: std::io::Error,
	},

	/// A discovered catalog file could not be decoded.
	#[error("Failed to read catalog {}: {source}", .path.display())]
	Catalog {
		/// Path of the offending file
		path: PathBuf,
		/// Reader error
		#[source]
		source: CatalogError,
	},

	/// Settings could not be deserialized.
	#[error("Invalid i18n settings: {0}")]
	Settings(#[from] serde_json::Error),
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_catalog_error_display_names_path() {
		let error = RegistryError::Catalog {
			path: PathBuf::from("i18n/es_ES/messages.mo"),
			source: CatalogError::UnsupportedRevision(2),
		};

		let message = error.to_string();

		assert!(message.contains("i18n/es_ES/messages.mo"));
		assert!(message.contains("Unsupported major revision: 2"));
	}

	#[rstest]
	fn test_discovery_error_keeps_source() {
		use std::error::Error as _;

		let error = RegistryError::Discovery {
			language: "es_ES".to_string(),
			source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
		};

		assert!(error.to_string().contains("es_ES"));
		assert!(error.source().is_some());
	}
}
