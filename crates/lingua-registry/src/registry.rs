//! Translation registry.
//!
//! The [`Registry`] owns every loaded catalog, indexed by language and
//! scope, and resolves lookups against them. Catalogs of a language are
//! loaded the first time a lookup names that language, or explicitly with
//! [`Registry::load`].

use std::collections::{HashMap, HashSet};
use std::io::{self, Write};
use std::sync::Arc;

use lingua_catalog::{Catalog, Translation};
use parking_lot::{Mutex, RwLock};

use crate::error::RegistryResult;
use crate::loader::{CatalogLoader, LoadedCatalog};
use crate::placeholder::substitute;
use crate::settings::I18nSettings;
use crate::source::{CatalogSource, FilesystemSource};

/// Default language of a new registry.
pub const DEFAULT_LANGUAGE: &str = "en_US";

/// Default scope of a new registry.
pub const DEFAULT_SCOPE: &str = "default";

#[derive(Debug)]
struct RegistryState {
	table: HashMap<String, HashMap<String, Catalog>>,
	language: String,
	scope: String,
	attempted: HashSet<String>,
}

impl RegistryState {
	/// A language counts as known once it has entries or a load was tried.
	fn is_known(&self, language: &str) -> bool {
		self.table.contains_key(language) || self.attempted.contains(language)
	}

	fn lookup(&self, language: &str, scope: &str, text: &str) -> Option<&Translation> {
		self.table.get(language)?.get(scope)?.get(text)
	}

	fn merge(&mut self, language: &str, scope: String, catalog: Catalog) {
		self.table
			.entry(language.to_string())
			.or_default()
			.entry(scope)
			.or_default()
			.merge(catalog);
	}
}

/// In-memory translation table with lazy per-language loading.
///
/// A registry is safe to share between threads; wrap it in an [`Arc`] to
/// do so.
///
/// # Example
///
/// ```
/// use lingua_registry::Registry;
///
/// let registry = Registry::new();
/// registry.add("es_ES", "default", [("Hello {name}", "Hola {name}")].into_iter().collect());
/// registry.set_language("es_ES");
///
/// assert_eq!(registry.translate("Hello {name}", &[("{name}", "Ana")], None, None), "Hola Ana");
/// assert_eq!(registry.tr("Goodbye"), "Goodbye");
/// ```
pub struct Registry {
	state: RwLock<RegistryState>,
	load_gate: Mutex<()>,
	source: Option<Arc<dyn CatalogSource>>,
	loader: CatalogLoader,
}

impl std::fmt::Debug for Registry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Registry")
			.field("state", &*self.state.read())
			.field("has_source", &self.source.is_some())
			.finish()
	}
}

impl Default for Registry {
	fn default() -> Self {
		Self::new()
	}
}

impl Registry {
	/// Creates a registry without a catalog source.
	///
	/// Only texts added with [`Registry::add`] are available; loading a
	/// language succeeds without reading anything.
	pub fn new() -> Self {
		Self {
			state: RwLock::new(RegistryState {
				table: HashMap::new(),
				language: DEFAULT_LANGUAGE.to_string(),
				scope: DEFAULT_SCOPE.to_string(),
				attempted: HashSet::new(),
			}),
			load_gate: Mutex::new(()),
			source: None,
			loader: CatalogLoader::new(),
		}
	}

	/// Creates a registry that loads languages from `source`.
	pub fn with_source(source: Arc<dyn CatalogSource>) -> Self {
		Self {
			source: Some(source),
			..Self::new()
		}
	}

	/// Creates a registry over the configured locale directory.
	///
	/// # Example
	///
	/// ```
	/// use lingua_registry::{I18nSettings, Registry};
	///
	/// let settings = I18nSettings::new("i18n").with_default_language("fr_FR");
	/// let registry = Registry::from_settings(&settings);
	///
	/// assert_eq!(registry.language(), "fr_FR");
	/// assert_eq!(registry.scope(), "default");
	/// ```
	pub fn from_settings(settings: &I18nSettings) -> Self {
		let registry = Self::with_source(Arc::new(FilesystemSource::new(&settings.locale_dir)));
		registry.set_language(settings.default_language.clone());
		registry.set_scope(settings.default_scope.clone());
		registry
	}

	/// Current default language.
	pub fn language(&self) -> String {
		self.state.read().language.clone()
	}

	/// Current default scope.
	pub fn scope(&self) -> String {
		self.state.read().scope.clone()
	}

	/// Sets the default language. The code is not validated.
	pub fn set_language(&self, code: impl Into<String>) {
		self.state.write().language = code.into();
	}

	/// Sets the default scope. The name is not validated.
	pub fn set_scope(&self, scope: impl Into<String>) {
		self.state.write().scope = scope.into();
	}

	/// Merges `texts` into the `language`/`scope` catalog.
	///
	/// Entries already present are overwritten by `texts`.
	pub fn add(&self, language: &str, scope: &str, texts: Catalog) {
		self.state.write().merge(language, scope.to_string(), texts);
	}

	/// Loads every catalog of `language`, or of the default language when
	/// `None`, and merges them into the table.
	///
	/// All files are read before the table is touched: if any file fails to
	/// decode, nothing from this load is merged. Returns the number of
	/// catalogs merged.
	///
	/// # Errors
	///
	/// Returns the discovery or decoding error that stopped the load.
	pub fn load(&self, language: Option<&str>) -> RegistryResult<usize> {
		let language = match language {
			Some(language) => language.to_string(),
			None => self.language(),
		};
		let _gate = self.load_gate.lock();
		self.load_locked(&language)
	}

	/// Returns true if the language has entries or a load was attempted.
	pub fn has_language(&self, language: &str) -> bool {
		self.state.read().is_known(language)
	}

	/// Returns a copy of the `language`/`scope` catalog.
	///
	/// Does not trigger a load.
	pub fn catalog(&self, language: &str, scope: &str) -> Option<Catalog> {
		self.state
			.read()
			.table
			.get(language)
			.and_then(|scopes| scopes.get(scope))
			.cloned()
	}

	/// Translates `text`, falling back to `text` itself when no entry
	/// exists.
	///
	/// `scope` and `language` default to the registry defaults. A language
	/// that has neither entries nor a prior load attempt is loaded first;
	/// a failure there is logged and the lookup falls back. Placeholders
	/// are then substituted in order (see [`substitute`]).
	///
	/// A plural entry yields its first form.
	pub fn translate(
		&self,
		text: &str,
		placeholders: &[(&str, &str)],
		scope: Option<&str>,
		language: Option<&str>,
	) -> String {
		self.resolve(text, placeholders, scope, language, |translation| {
			Some(translation.text())
		})
	}

	/// Translates `text` selecting the plural form at `index`.
	///
	/// The form index is chosen by the caller. A scalar entry answers every
	/// index; a missing entry or an out-of-range index falls back to `text`.
	pub fn translate_plural(
		&self,
		text: &str,
		index: usize,
		placeholders: &[(&str, &str)],
		scope: Option<&str>,
		language: Option<&str>,
	) -> String {
		self.resolve(text, placeholders, scope, language, |translation| {
			translation.form(index)
		})
	}

	/// Translates `text` with the default scope and language and no
	/// placeholders.
	pub fn tr(&self, text: &str) -> String {
		self.translate(text, &[], None, None)
	}

	/// Translates `text` and writes the result to `out`.
	pub fn write_translated<W: Write>(
		&self,
		out: &mut W,
		text: &str,
		placeholders: &[(&str, &str)],
		scope: Option<&str>,
		language: Option<&str>,
	) -> io::Result<()> {
		out.write_all(self.translate(text, placeholders, scope, language).as_bytes())
	}

	fn resolve<F>(
		&self,
		text: &str,
		placeholders: &[(&str, &str)],
		scope: Option<&str>,
		language: Option<&str>,
		select: F,
	) -> String
	where
		F: for<'a> FnOnce(&'a Translation) -> Option<&'a str>,
	{
		let (language, scope) = {
			let state = self.state.read();
			(
				language.map_or_else(|| state.language.clone(), str::to_string),
				scope.map_or_else(|| state.scope.clone(), str::to_string),
			)
		};

		self.ensure_loaded(&language);

		let translated = {
			let state = self.state.read();
			state
				.lookup(&language, &scope, text)
				.and_then(select)
				.map(str::to_string)
		};
		let translated = translated.unwrap_or_else(|| text.to_string());

		if placeholders.is_empty() {
			translated
		} else {
			substitute(&translated, placeholders)
		}
	}

	/// Loads `language` once, unless it already has entries or a load was
	/// already attempted.
	fn ensure_loaded(&self, language: &str) {
		if self.state.read().is_known(language) {
			return;
		}

		let _gate = self.load_gate.lock();
		// Another thread may have loaded it while we waited.
		if self.state.read().is_known(language) {
			return;
		}

		if let Err(error) = self.load_locked(language) {
			tracing::warn!(
				language,
				error = %error,
				"Failed to load translations, falling back to untranslated text"
			);
			self.state.write().attempted.insert(language.to_string());
		}
	}

	/// Reads and merges a language. Callers hold the load gate.
	fn load_locked(&self, language: &str) -> RegistryResult<usize> {
		let loaded = match &self.source {
			Some(source) => self.loader.load(source.as_ref(), language)?,
			None => Vec::new(),
		};
		let count = loaded.len();

		{
			let mut state = self.state.write();
			state.attempted.insert(language.to_string());
			for LoadedCatalog { scope, catalog } in loaded {
				state.merge(language, scope, catalog);
			}
		}

		tracing::info!(language, catalogs = count, "Loaded translations");
		Ok(count)
	}
}
