//! # Lingua
//!
//! Translation catalogs and a translation registry for Rust.
//!
//! Lingua reads gettext binary catalogs (`.mo`) and key/value mapping
//! catalogs (JSON, optionally YAML), merges them per language and scope,
//! and resolves lookups with literal placeholder substitution and a
//! fallback to the untranslated text.
//!
//! ## Feature Flags
//!
//! - `yaml` - YAML mapping catalogs (via `serde_yaml`)
//! - `testing` - Binary catalog fixture builder for tests
//! - `full` - All features enabled
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! use lingua::prelude::*;
//!
//! // i18n/es_ES/messages.json, i18n/es_ES/messages.mo, ...
//! let settings = I18nSettings::new("i18n").with_default_language("es_ES");
//! let registry = Registry::from_settings(&settings);
//! registry.set_scope("messages");
//!
//! let text = registry.translate("Hello {name}", &[("{name}", "Ana")], None, None);
//! let files = registry.translate_plural("%d file", 1, &[("%d", "3")], None, None);
//! println!("{} / {}", text, files);
//! ```

// Module re-exports
pub mod catalog;
pub mod registry;

// Re-export catalog types
pub use lingua_catalog::{
	Catalog, CatalogError, CatalogFormat, CatalogResult, MappingReader, MoHeader, MoReader,
	Translation, scope_from_path,
};

// Re-export registry types
pub use lingua_registry::{
	CatalogLoader, CatalogSource, DiscoveredCatalogs, FilesystemSource, I18nSettings, Registry,
	RegistryError, RegistryResult, substitute,
};

/// Commonly used types.
pub mod prelude {
	pub use crate::{
		Catalog, CatalogError, CatalogSource, FilesystemSource, I18nSettings, Registry,
		RegistryError, Translation,
	};
}
