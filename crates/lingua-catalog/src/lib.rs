//! Translation catalog readers for the Lingua localization toolkit.
//!
//! This crate decodes translation catalogs into an in-memory [`Catalog`]:
//!
//! - **Binary catalogs**: gettext `.mo` files in either byte order
//! - **Mapping catalogs**: flat JSON (and, with the `yaml` feature, YAML)
//!   documents mapping original strings to translations
//!
//! # Features
//!
//! - `yaml` - YAML mapping catalogs
//! - `testing` - [`testing::MoFixture`] for building binary catalogs in tests
//! - `full` - All features enabled
//!
//! # Quick Start
//!
//! ```ignore
//! use lingua_catalog::{MappingReader, MoReader};
//! use std::path::Path;
//!
//! let mut catalog = MappingReader::new().read_file(Path::new("i18n/es_ES/messages.json"))?;
//! catalog.merge(MoReader::new().read_file(Path::new("i18n/es_ES/messages.mo"))?);
//!
//! if let Some(translation) = catalog.get("Hello") {
//!     println!("{}", translation.text());
//! }
//! ```
//!
//! # Architecture
//!
//! - [`Translation`] - A scalar translation or an ordered list of plural forms
//! - [`Catalog`] - Original string to translation mapping
//! - [`CatalogFormat`] - Format detection by file extension
//! - [`MoReader`] - Binary catalog decoder
//! - [`MappingReader`] - Key/value catalog decoder

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod format;
pub mod mapping;
pub mod mo;
pub mod translation;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export commonly used types at crate root
pub use error::{CatalogError, CatalogResult};
pub use format::{CatalogFormat, scope_from_path};
pub use mapping::MappingReader;
pub use mo::{MoHeader, MoReader};
pub use translation::{Catalog, Translation};
