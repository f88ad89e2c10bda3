//! Translation values and the catalog that holds them.

use std::collections::HashMap;
use std::collections::hash_map;

/// A translated value for a single original string.
///
/// Binary catalogs store plural translations as a NUL-separated list of
/// forms; those become [`Translation::Plural`] with the forms in file order.
/// Which form applies to a given count is decided by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Translation {
	/// A single translated string.
	Scalar(String),
	/// Ordered plural forms, index 0 first.
	Plural(Vec<String>),
}

impl Translation {
	/// Returns the scalar text, or the first plural form.
	///
	/// # Example
	///
	/// ```
	/// use lingua_catalog::Translation;
	///
	/// let plural = Translation::from(vec!["archivo", "archivos"]);
	/// assert_eq!(plural.text(), "archivo");
	/// assert_eq!(Translation::from("hola").text(), "hola");
	/// ```
	pub fn text(&self) -> &str {
		match self {
			Self::Scalar(text) => text,
			Self::Plural(forms) => forms.first().map(String::as_str).unwrap_or(""),
		}
	}

	/// Selects a plural form by index.
	///
	/// A scalar translation answers every index with its only text. Returns
	/// `None` when a plural translation has no form at `index`.
	pub fn form(&self, index: usize) -> Option<&str> {
		match self {
			Self::Scalar(text) => Some(text),
			Self::Plural(forms) => forms.get(index).map(String::as_str),
		}
	}

	/// Returns the plural forms, if this is a plural translation.
	pub fn forms(&self) -> Option<&[String]> {
		match self {
			Self::Scalar(_) => None,
			Self::Plural(forms) => Some(forms),
		}
	}

	/// Returns true for [`Translation::Plural`].
	pub fn is_plural(&self) -> bool {
		matches!(self, Self::Plural(_))
	}
}

impl From<&str> for Translation {
	fn from(value: &str) -> Self {
		Self::Scalar(value.to_string())
	}
}

impl From<String> for Translation {
	fn from(value: String) -> Self {
		Self::Scalar(value)
	}
}

impl From<Vec<String>> for Translation {
	fn from(forms: Vec<String>) -> Self {
		Self::Plural(forms)
	}
}

impl From<Vec<&str>> for Translation {
	fn from(forms: Vec<&str>) -> Self {
		Self::Plural(forms.into_iter().map(str::to_string).collect())
	}
}

impl std::fmt::Display for Translation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.text())
	}
}

/// Mapping from original string to [`Translation`].
///
/// Keys are unique; inserting an existing key replaces its value.
///
/// # Example
///
/// ```
/// use lingua_catalog::{Catalog, Translation};
///
/// let mut catalog = Catalog::new();
/// catalog.insert("Hello", "Hola");
/// catalog.insert("file", vec!["archivo", "archivos"]);
///
/// assert_eq!(catalog.get("Hello"), Some(&Translation::from("Hola")));
/// assert_eq!(catalog.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
	entries: HashMap<String, Translation>,
}

impl Catalog {
	/// Creates an empty catalog.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts an entry, returning the value it replaced.
	pub fn insert(
		&mut self,
		original: impl Into<String>,
		translation: impl Into<Translation>,
	) -> Option<Translation> {
		self.entries.insert(original.into(), translation.into())
	}

	/// Inserts an entry only if the original is not present yet.
	///
	/// Returns true if the entry was inserted.
	pub fn insert_if_absent(
		&mut self,
		original: impl Into<String>,
		translation: impl Into<Translation>,
	) -> bool {
		match self.entries.entry(original.into()) {
			hash_map::Entry::Occupied(_) => false,
			hash_map::Entry::Vacant(slot) => {
				slot.insert(translation.into());
				true
			}
		}
	}

	/// Looks up the translation for an original string.
	pub fn get(&self, original: &str) -> Option<&Translation> {
		self.entries.get(original)
	}

	/// Returns true if the original string has an entry.
	pub fn contains_key(&self, original: &str) -> bool {
		self.entries.contains_key(original)
	}

	/// Removes an entry.
	pub fn remove(&mut self, original: &str) -> Option<Translation> {
		self.entries.remove(original)
	}

	/// Merges `other` into this catalog. Entries from `other` win on
	/// key collision.
	pub fn merge(&mut self, other: Catalog) {
		self.entries.extend(other.entries);
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if the catalog has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over the original strings.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	/// Iterates over all entries in arbitrary order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Translation)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v))
	}
}

impl<K, V> FromIterator<(K, V)> for Catalog
where
	K: Into<String>,
	V: Into<Translation>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			entries: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}

impl IntoIterator for Catalog {
	type Item = (String, Translation);
	type IntoIter = hash_map::IntoIter<String, Translation>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

impl From<HashMap<String, Translation>> for Catalog {
	fn from(entries: HashMap<String, Translation>) -> Self {
		Self { entries }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0, Some("archivo"))]
	#[case(1, Some("archivos"))]
	#[case(2, None)]
	fn test_plural_form_by_index(#[case] index: usize, #[case] expected: Option<&str>) {
		// Arrange
		let translation = Translation::from(vec!["archivo", "archivos"]);

		// Act
		let form = translation.form(index);

		// Assert
		assert_eq!(form, expected);
	}

	#[rstest]
	fn test_scalar_answers_every_index() {
		let translation = Translation::from("hola");
		assert_eq!(translation.form(0), Some("hola"));
		assert_eq!(translation.form(7), Some("hola"));
		assert!(translation.forms().is_none());
		assert!(!translation.is_plural());
		assert!(Translation::from(vec!["a", "b"]).is_plural());
	}

	#[rstest]
	fn test_empty_plural_text_is_empty() {
		let translation = Translation::Plural(Vec::new());
		assert_eq!(translation.text(), "");
	}

	#[rstest]
	fn test_merge_last_write_wins() {
		// Arrange
		let mut catalog: Catalog = [("a", "1")].into_iter().collect();
		let update: Catalog = [("a", "2"), ("b", "3")].into_iter().collect();

		// Act
		catalog.merge(update);

		// Assert
		let expected: Catalog = [("a", "2"), ("b", "3")].into_iter().collect();
		assert_eq!(catalog, expected);
	}

	#[rstest]
	fn test_insert_if_absent_keeps_first_writer() {
		let mut catalog = Catalog::new();
		assert!(catalog.insert_if_absent("files", ""));
		assert!(!catalog.insert_if_absent("files", "archivos"));
		assert_eq!(catalog.get("files"), Some(&Translation::from("")));
	}

	#[rstest]
	fn test_keys_lists_every_original() {
		// Arrange
		let catalog: Catalog = [("Save", "Guardar"), ("Cancel", "Cancelar")]
			.into_iter()
			.collect();

		// Act
		let mut keys: Vec<_> = catalog.keys().collect();
		keys.sort_unstable();

		// Assert
		assert_eq!(keys, vec!["Cancel", "Save"]);
	}
}
