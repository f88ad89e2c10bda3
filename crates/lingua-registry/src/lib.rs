//! Translation registry for the Lingua localization toolkit.
//!
//! This crate keeps loaded catalogs in memory, indexed by language and
//! scope, and resolves lookups against them:
//!
//! - **Lazy loading**: the first lookup in a language loads its catalogs
//! - **Merging**: catalogs sharing a scope merge into one table, later
//!   files winning on collision
//! - **Fallback**: unknown texts are returned unchanged
//! - **Placeholders**: literal, ordered substitution after lookup
//!
//! # Quick Start
//!
//! ```no_run
//! use lingua_registry::{I18nSettings, Registry};
//!
//! let settings = I18nSettings::new("i18n").with_default_language("es_ES");
//! let registry = Registry::from_settings(&settings);
//!
//! // Loads i18n/es_ES/*.json (and *.yaml), then i18n/es_ES/*.mo
//! let greeting = registry.translate("Hello {name}", &[("{name}", "Ana")], None, None);
//! println!("{}", greeting);
//! ```
//!
//! # Architecture
//!
//! - [`Registry`] - Translation table and lookups
//! - [`CatalogLoader`] - Reads the files of a language through the catalog readers
//! - [`CatalogSource`] - Discovery seam; [`FilesystemSource`] lists `<root>/<language>/`
//! - [`I18nSettings`] - Locale directory and defaults

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod loader;
pub mod placeholder;
pub mod registry;
pub mod settings;
pub mod source;

// Re-export commonly used types at crate root
pub use error::{RegistryError, RegistryResult};
pub use loader::{CatalogLoader, LoadedCatalog};
pub use placeholder::substitute;
pub use registry::{DEFAULT_LANGUAGE, DEFAULT_SCOPE, Registry};
pub use settings::I18nSettings;
pub use source::{CatalogSource, DiscoveredCatalogs, FilesystemSource};
