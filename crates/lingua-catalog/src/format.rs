//! Catalog file formats and scope derivation.

use std::path::Path;

/// Supported catalog file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogFormat {
	/// Binary gettext catalog (`.mo`).
	Mo,

	/// JSON key/value mapping.
	Json,

	/// YAML key/value mapping (requires the `yaml` feature to read).
	Yaml,
}

impl CatalogFormat {
	/// Determines the catalog format from a file extension.
	///
	/// # Example
	///
	/// ```
	/// # use lingua_catalog::CatalogFormat;
	/// assert_eq!(CatalogFormat::from_extension("mo"), Some(CatalogFormat::Mo));
	/// assert_eq!(CatalogFormat::from_extension("JSON"), Some(CatalogFormat::Json));
	/// assert_eq!(CatalogFormat::from_extension("yml"), Some(CatalogFormat::Yaml));
	/// assert_eq!(CatalogFormat::from_extension("po"), None);
	/// ```
	pub fn from_extension(ext: &str) -> Option<Self> {
		match ext.to_lowercase().as_str() {
			"mo" => Some(Self::Mo),
			"json" => Some(Self::Json),
			"yaml" | "yml" => Some(Self::Yaml),
			_ => None,
		}
	}

	/// Determines the catalog format from a file path.
	pub fn from_path(path: &Path) -> Option<Self> {
		path.extension()
			.and_then(|ext| ext.to_str())
			.and_then(Self::from_extension)
	}

	/// Returns the canonical file extension for this format.
	pub fn extension(&self) -> &'static str {
		match self {
			Self::Mo => "mo",
			Self::Json => "json",
			Self::Yaml => "yaml",
		}
	}

	/// Returns true for the binary gettext format.
	pub fn is_binary(&self) -> bool {
		matches!(self, Self::Mo)
	}

	/// Returns true if this build can read the format.
	///
	/// YAML catalogs are only readable with the `yaml` feature.
	pub fn is_readable(&self) -> bool {
		match self {
			Self::Mo | Self::Json => true,
			Self::Yaml => cfg!(feature = "yaml"),
		}
	}
}

impl std::fmt::Display for CatalogFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Mo => write!(f, "MO"),
			Self::Json => write!(f, "JSON"),
			Self::Yaml => write!(f, "YAML"),
		}
	}
}

/// Derives the scope of a catalog file: its base name without extension.
///
/// `locale/es_ES/messages.mo` and `locale/es_ES/messages.json` share the
/// scope `messages`.
///
/// # Example
///
/// ```
/// # use lingua_catalog::scope_from_path;
/// # use std::path::Path;
/// assert_eq!(scope_from_path(Path::new("i18n/es_ES/messages.mo")), Some("messages".to_string()));
/// assert_eq!(scope_from_path(Path::new("admin.json")), Some("admin".to_string()));
/// ```
pub fn scope_from_path(path: &Path) -> Option<String> {
	path.file_stem()
		.and_then(|stem| stem.to_str())
		.map(str::to_string)
}
