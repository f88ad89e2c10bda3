//! Facade crate tests
//!
//! End-to-end lookups through the `lingua` re-exports.

use lingua::catalog::testing::MoFixture;
use lingua::catalog::mo::ByteOrder;
use lingua::prelude::*;
use rstest::*;
use tempfile::TempDir;

#[rstest]
fn test_end_to_end_lookup_through_prelude() {
	// Arrange
	let root = TempDir::new().unwrap();
	let lang = root.path().join("pt_BR");
	std::fs::create_dir(&lang).unwrap();
	MoFixture::new()
		.byte_order(ByteOrder::Big)
		.entry("Welcome, %user%", "Bem-vindo, %user%")
		.plural_entry(&["%n message", "%n messages"], &["%n mensagem", "%n mensagens"])
		.write_to(&lang.join("default.mo"))
		.unwrap();
	let registry = Registry::from_settings(&I18nSettings::new(root.path()).with_default_language("pt_BR"));

	// Act
	let welcome = registry.translate("Welcome, %user%", &[("%user%", "Rita")], None, None);
	let messages = registry.translate_plural("%n message", 1, &[("%n", "4")], None, None);

	// Assert
	assert_eq!(welcome, "Bem-vindo, Rita");
	assert_eq!(messages, "4 mensagens");
	assert_eq!(registry.tr("Logout"), "Logout");
}

#[rstest]
fn test_readers_are_reexported() {
	let bytes = MoFixture::new().entry("Yes", "Sim").build();

	let catalog = lingua::MoReader::new().read_bytes(&bytes).unwrap();
	let mapping = lingua::MappingReader::new()
		.read_str(r#"{"No": "Não"}"#, lingua::CatalogFormat::Json)
		.unwrap();

	assert_eq!(catalog.get("Yes"), Some(&Translation::from("Sim")));
	assert_eq!(mapping.get("No"), Some(&Translation::from("Não")));
}
