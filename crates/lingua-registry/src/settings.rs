//! Registry configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::RegistryResult;

/// Settings for building a [`Registry`](crate::Registry) over a
/// [`FilesystemSource`](crate::FilesystemSource).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nSettings {
	/// Directory holding one subdirectory of catalogs per language
	pub locale_dir: PathBuf,

	/// Language used when a lookup does not name one
	pub default_language: String,

	/// Scope used when a lookup does not name one
	pub default_scope: String,
}

impl I18nSettings {
	/// Creates settings rooted at `locale_dir` with the default language and
	/// scope.
	pub fn new(locale_dir: impl Into<PathBuf>) -> Self {
		Self {
			locale_dir: locale_dir.into(),
			default_language: "en_US".to_string(),
			default_scope: "default".to_string(),
		}
	}

	/// Set the default language
	///
	/// # Examples
	///
	/// ```
	/// use lingua_registry::I18nSettings;
	///
	/// let settings = I18nSettings::new("i18n").with_default_language("es_ES");
	///
	/// assert_eq!(settings.default_language, "es_ES");
	/// ```
	pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
		self.default_language = language.into();
		self
	}

	/// Set the default scope
	pub fn with_default_scope(mut self, scope: impl Into<String>) -> Self {
		self.default_scope = scope.into();
		self
	}

	/// Set the locale directory
	pub fn with_locale_dir(mut self, locale_dir: impl Into<PathBuf>) -> Self {
		self.locale_dir = locale_dir.into();
		self
	}

	/// Parses settings from JSON; missing fields keep their defaults.
	///
	/// # Examples
	///
	/// ```
	/// use lingua_registry::I18nSettings;
	///
	/// let settings = I18nSettings::from_json_str(r#"{"default_language": "fr_FR"}"#).unwrap();
	///
	/// assert_eq!(settings.default_language, "fr_FR");
	/// assert_eq!(settings.default_scope, "default");
	/// ```
	pub fn from_json_str(content: &str) -> RegistryResult<Self> {
		Ok(serde_json::from_str(content)?)
	}
}

impl Default for I18nSettings {
	fn default() -> Self {
		Self::new("locale")
	}
}
