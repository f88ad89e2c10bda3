//! Catalog discovery.
//!
//! A [`CatalogSource`] tells the loader which files make up a language.
//! The registry never touches the filesystem layout itself.

use std::io;
use std::path::{Path, PathBuf};

use lingua_catalog::CatalogFormat;

/// Files discovered for one language, in merge order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredCatalogs {
	/// Key/value mapping catalogs, merged first.
	pub mapping: Vec<PathBuf>,
	/// Binary gettext catalogs, merged after the mapping catalogs.
	pub binary: Vec<PathBuf>,
}

impl DiscoveredCatalogs {
	/// Creates an empty discovery result.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a mapping catalog path.
	pub fn with_mapping(mut self, path: impl Into<PathBuf>) -> Self {
		self.mapping.push(path.into());
		self
	}

	/// Adds a binary catalog path.
	pub fn with_binary(mut self, path: impl Into<PathBuf>) -> Self {
		self.binary.push(path.into());
		self
	}

	/// Returns true if no file was discovered.
	pub fn is_empty(&self) -> bool {
		self.mapping.is_empty() && self.binary.is_empty()
	}

	/// Iterates over every path in merge order.
	pub fn iter(&self) -> impl Iterator<Item = &Path> {
		self.mapping
			.iter()
			.chain(self.binary.iter())
			.map(PathBuf::as_path)
	}
}

/// Supplies the catalog files of a language.
pub trait CatalogSource: Send + Sync {
	/// Lists the catalog files for `language`.
	///
	/// Listed files that turn out to be missing when opened are skipped by
	/// the loader, so a source may report candidates without checking them.
	fn discover(&self, language: &str) -> io::Result<DiscoveredCatalogs>;
}

/// Catalog source that reads `<root>/<language>/`.
///
/// Files are classified by extension (see [`CatalogFormat`]); other files,
/// and catalogs in a format this build cannot read, are ignored. Symlinks
/// are followed. Each list is sorted by file name. A missing language
/// directory yields no files.
///
/// ```text
/// i18n/
/// ├── es_ES/
/// │   ├── admin.json
/// │   ├── messages.json
/// │   └── messages.mo
/// └── fr_FR/
///     └── messages.mo
/// ```
#[derive(Debug, Clone)]
pub struct FilesystemSource {
	root_dir: PathBuf,
}

impl FilesystemSource {
	/// Create a new FilesystemSource
	///
	/// # Example
	///
	/// ```rust,no_run
	/// use lingua_registry::FilesystemSource;
	/// let source = FilesystemSource::new("./i18n");
	/// ```
	pub fn new<P: AsRef<Path>>(root_dir: P) -> Self {
		Self {
			root_dir: root_dir.as_ref().to_path_buf(),
		}
	}

	/// Root directory holding one subdirectory per language.
	pub fn root_dir(&self) -> &Path {
		&self.root_dir
	}

	/// Directory scanned for `language`.
	pub fn language_dir(&self, language: &str) -> PathBuf {
		self.root_dir.join(language)
	}
}

impl CatalogSource for FilesystemSource {
	fn discover(&self, language: &str) -> io::Result<DiscoveredCatalogs> {
		let dir = self.language_dir(language);
		let entries = match std::fs::read_dir(&dir) {
			Ok(entries) => entries,
			Err(e) if e.kind() == io::ErrorKind::NotFound => {
				tracing::debug!(
					language,
					dir = %dir.display(),
					"No catalog directory for language"
				);
				return Ok(DiscoveredCatalogs::new());
			}
			Err(e) => return Err(e),
		};

		let mut discovered = DiscoveredCatalogs::new();
		for entry in entries {
			let path = entry?.path();
			// Follows symlinks; dangling links are not files.
			if !path.is_file() {
				continue;
			}
			match CatalogFormat::from_path(&path) {
				Some(format) if !format.is_readable() => {
					tracing::debug!(
						path = %path.display(),
						format = %format,
						"Skipping catalog in a format this build cannot read"
					);
				}
				Some(format) if format.is_binary() => discovered.binary.push(path),
				Some(_) => discovered.mapping.push(path),
				None => {}
			}
		}

		discovered.mapping.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
		discovered.binary.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

		tracing::debug!(
			language,
			mapping = discovered.mapping.len(),
			binary = discovered.binary.len(),
			"Discovered catalogs"
		);
		Ok(discovered)
	}
}
