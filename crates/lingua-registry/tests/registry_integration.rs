//! Registry integration tests
//!
//! Loads catalogs from a temporary locale directory through
//! `FilesystemSource` and resolves lookups against them.

use std::path::Path;
use std::sync::Arc;

use lingua_catalog::testing::MoFixture;
use lingua_catalog::{Catalog, Translation};
use lingua_registry::{FilesystemSource, I18nSettings, Registry, RegistryError};
use rstest::*;
use tempfile::TempDir;

/// Locale tree:
///
/// ```text
/// es_ES/messages.json   Hello, Save
/// es_ES/messages.mo     Hello (overrides), file/files plural
/// es_ES/admin.json      Save
/// ```
#[fixture]
fn locale_dir() -> TempDir {
	let root = TempDir::new().unwrap();
	let lang = root.path().join("es_ES");
	std::fs::create_dir(&lang).unwrap();

	std::fs::write(
		lang.join("messages.json"),
		r#"{"Hello {name}": "Hola {name} (json)", "Save": "Guardar"}"#,
	)
	.unwrap();
	MoFixture::new()
		.metadata("Content-Type: text/plain; charset=UTF-8\n")
		.entry("Hello {name}", "Hola {name}")
		.plural_entry(&["file", "files"], &["archivo", "archivos", "archivos"])
		.write_to(&lang.join("messages.mo"))
		.unwrap();
	std::fs::write(lang.join("admin.json"), r#"{"Save": "Guardar cambios"}"#).unwrap();

	root
}

fn registry_for(root: &Path) -> Registry {
	let settings = I18nSettings::new(root).with_default_language("es_ES");
	Registry::from_settings(&settings)
}

#[rstest]
fn test_lazy_load_merges_mapping_then_binary(locale_dir: TempDir) {
	// Arrange
	let registry = registry_for(locale_dir.path());

	// Act
	let greeting = registry.translate("Hello {name}", &[("{name}", "Ana")], Some("messages"), None);

	// Assert
	assert_eq!(greeting, "Hola Ana");
	assert_eq!(registry.translate("Save", &[], Some("messages"), None), "Guardar");
	assert_eq!(registry.translate("Save", &[], Some("admin"), None), "Guardar cambios");
}

#[rstest]
fn test_plural_entry_from_binary_catalog(locale_dir: TempDir) {
	let registry = registry_for(locale_dir.path());
	registry.load(None).unwrap();

	let messages = registry.catalog("es_ES", "messages").unwrap();

	assert_eq!(
		messages.get("file"),
		Some(&Translation::from(vec!["archivo", "archivos", "archivos"]))
	);
	assert_eq!(messages.get("files"), Some(&Translation::from("")));
	assert!(!messages.contains_key(""));
	assert_eq!(
		registry.translate_plural("file", 1, &[], Some("messages"), None),
		"archivos"
	);
}

#[rstest]
fn test_explicit_load_counts_catalogs(locale_dir: TempDir) {
	let registry = registry_for(locale_dir.path());

	let count = registry.load(Some("es_ES")).unwrap();

	assert_eq!(count, 3);
}

#[rstest]
fn test_repeated_load_keeps_table_stable(locale_dir: TempDir) {
	let registry = registry_for(locale_dir.path());
	registry.load(None).unwrap();
	let first = registry.catalog("es_ES", "messages");

	registry.load(None).unwrap();

	assert_eq!(registry.catalog("es_ES", "messages"), first);
}

#[rstest]
fn test_added_texts_survive_and_are_overwritten_by_load(locale_dir: TempDir) {
	let registry = registry_for(locale_dir.path());
	let texts: Catalog = [("Save", "Salvar"), ("Open", "Abrir")].into_iter().collect();
	registry.add("es_ES", "messages", texts);

	registry.load(None).unwrap();

	assert_eq!(registry.translate("Save", &[], Some("messages"), None), "Guardar");
	assert_eq!(registry.translate("Open", &[], Some("messages"), None), "Abrir");
}

#[rstest]
fn test_corrupt_catalog_aborts_and_leaves_table_unchanged(locale_dir: TempDir) {
	// Arrange
	let lang = locale_dir.path().join("es_ES");
	std::fs::write(lang.join("zz_broken.mo"), [0xAA, 0xBB, 0xCC, 0xDD]).unwrap();
	let registry = registry_for(locale_dir.path());
	registry.add("es_ES", "messages", [("Save", "Salvar")].into_iter().collect());

	// Act
	let result = registry.load(None);

	// Assert
	match result {
		Err(RegistryError::Catalog { path, .. }) => assert_eq!(path, lang.join("zz_broken.mo")),
		other => panic!("unexpected result: {:?}", other),
	}
	let expected: Catalog = [("Save", "Salvar")].into_iter().collect();
	assert_eq!(registry.catalog("es_ES", "messages"), Some(expected));
	assert!(registry.catalog("es_ES", "admin").is_none());
}

#[rstest]
fn test_corrupt_catalog_during_lookup_falls_back(locale_dir: TempDir) {
	let lang = locale_dir.path().join("es_ES");
	std::fs::write(lang.join("broken.json"), "[1, 2, 3]").unwrap();
	let registry = registry_for(locale_dir.path());

	let text = registry.translate("Save", &[], Some("admin"), None);

	assert_eq!(text, "Save");
	assert!(registry.has_language("es_ES"));
}

#[rstest]
fn test_missing_language_directory_falls_back(locale_dir: TempDir) {
	let registry = registry_for(locale_dir.path());

	let text = registry.translate("Save", &[], None, Some("fr_FR"));

	assert_eq!(text, "Save");
	assert!(registry.has_language("fr_FR"));
	assert!(registry.catalog("fr_FR", "default").is_none());
}

#[rstest]
fn test_with_source_uses_custom_root(locale_dir: TempDir) {
	let registry = Registry::with_source(Arc::new(FilesystemSource::new(locale_dir.path())));
	registry.set_scope("admin");

	let text = registry.translate("Save", &[], None, Some("es_ES"));

	assert_eq!(text, "Guardar cambios");
}

#[rstest]
fn test_yaml_catalog_never_blocks_binary_catalogs() {
	// Arrange
	let root = TempDir::new().unwrap();
	let lang = root.path().join("es_ES");
	std::fs::create_dir(&lang).unwrap();
	MoFixture::new()
		.entry("Hello", "Hola")
		.write_to(&lang.join("default.mo"))
		.unwrap();
	std::fs::write(lang.join("notes.yml"), "Goodbye: Adiós\n").unwrap();
	let registry = registry_for(root.path());

	// Act
	let result = registry.load(None);

	// Assert
	assert!(result.is_ok());
	assert_eq!(registry.tr("Hello"), "Hola");
}

#[rstest]
fn test_latin1_binary_catalog_is_decoded() {
	// Arrange
	let root = TempDir::new().unwrap();
	let lang = root.path().join("fr_FR");
	std::fs::create_dir(&lang).unwrap();
	MoFixture::new()
		.metadata("Content-Type: text/plain; charset=ISO-8859-1\n")
		.entry("Hello", "Bonjour")
		.raw_entry(b"Coffee".to_vec(), b"Caf\xe9".to_vec())
		.write_to(&lang.join("default.mo"))
		.unwrap();
	let registry = registry_for(root.path());

	// Act
	let coffee = registry.translate("Coffee", &[], None, Some("fr_FR"));

	// Assert
	assert_eq!(coffee, "Café");
	assert_eq!(registry.translate("Hello", &[], None, Some("fr_FR")), "Bonjour");
}
