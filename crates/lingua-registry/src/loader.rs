//! Catalog loading orchestration.
//!
//! [`CatalogLoader`] turns the files a [`CatalogSource`] discovers into
//! `(scope, catalog)` pairs, ready to be merged by the registry.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use lingua_catalog::{
	Catalog, CatalogError, CatalogFormat, MappingReader, MoReader, scope_from_path,
};

use crate::error::{RegistryError, RegistryResult};
use crate::source::CatalogSource;

/// A decoded catalog together with the scope it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCatalog {
	/// Scope derived from the file name
	pub scope: String,
	/// Decoded entries
	pub catalog: Catalog,
}

/// Reads every catalog of a language.
///
/// Mapping catalogs are read before binary catalogs, each list in the order
/// the source reports it. Files that cannot be opened are skipped; any
/// decoding error aborts the whole load.
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogLoader {
	mo: MoReader,
	mapping: MappingReader,
}

impl CatalogLoader {
	/// Creates a loader with the default readers.
	pub fn new() -> Self {
		Self::default()
	}

	/// Loads all catalogs of `language` from `source`.
	///
	/// Empty catalogs are dropped from the result.
	///
	/// # Errors
	///
	/// - [`RegistryError::Discovery`] if the source cannot list the files
	/// - [`RegistryError::Catalog`] for the first file that fails to decode
	pub fn load(
		&self,
		source: &dyn CatalogSource,
		language: &str,
	) -> RegistryResult<Vec<LoadedCatalog>> {
		let discovered = source
			.discover(language)
			.map_err(|source| RegistryError::Discovery {
				language: language.to_string(),
				source,
			})?;

		let mut loaded = Vec::new();
		for path in &discovered.mapping {
			if let Some(catalog) = self.load_mapping(path)? {
				push_loaded(&mut loaded, path, catalog);
			}
		}
		for path in &discovered.binary {
			if let Some(catalog) = self.load_binary(path)? {
				push_loaded(&mut loaded, path, catalog);
			}
		}

		Ok(loaded)
	}

	/// Reads one mapping catalog, or `None` if the file cannot be opened.
	fn load_mapping(&self, path: &Path) -> RegistryResult<Option<Catalog>> {
		let format = CatalogFormat::from_path(path)
			.filter(|format| !format.is_binary())
			.ok_or_else(|| RegistryError::Catalog {
				path: path.to_path_buf(),
				source: CatalogError::UnsupportedExtension(
					path.extension()
						.and_then(|e| e.to_str())
						.unwrap_or("(none)")
						.to_string(),
				),
			})?;

		let Some(mut file) = open_or_skip(path) else {
			return Ok(None);
		};

		let mut content = String::new();
		file.read_to_string(&mut content)
			.map_err(|e| CatalogError::Format(format!("Failed to read mapping: {}", e)))
			.and_then(|_| self.mapping.read_str(&content, format))
			.map(Some)
			.map_err(|source| catalog_error(path, source))
	}

	/// Reads one binary catalog, or `None` if the file cannot be opened.
	fn load_binary(&self, path: &Path) -> RegistryResult<Option<Catalog>> {
		let Some(file) = open_or_skip(path) else {
			return Ok(None);
		};

		self.mo
			.read(BufReader::new(file))
			.map(Some)
			.map_err(|source| catalog_error(path, source))
	}
}

fn open_or_skip(path: &Path) -> Option<File> {
	match File::open(path) {
		Ok(file) => Some(file),
		Err(e) => {
			tracing::debug!(
				path = %path.display(),
				error = %e,
				"Skipping catalog that cannot be opened"
			);
			None
		}
	}
}

fn catalog_error(path: &Path, source: CatalogError) -> RegistryError {
	RegistryError::Catalog {
		path: path.to_path_buf(),
		source,
	}
}

fn push_loaded(loaded: &mut Vec<LoadedCatalog>, path: &Path, catalog: Catalog) {
	if catalog.is_empty() {
		tracing::debug!(path = %path.display(), "Catalog has no entries");
		return;
	}
	let Some(scope) = scope_from_path(path) else {
		tracing::debug!(path = %path.display(), "Skipping catalog without a usable scope name");
		return;
	};
	tracing::debug!(
		path = %path.display(),
		scope = %scope,
		entries = catalog.len(),
		"Loaded catalog"
	);
	loaded.push(LoadedCatalog { scope, catalog });
}
