//! Key/value mapping catalog reader.
//!
//! A mapping catalog is a flat document whose keys are original strings and
//! whose values are translations:
//!
//! ```json
//! {
//!   "Hello": "Hola",
//!   "file": ["archivo", "archivos"]
//! }
//! ```
//!
//! JSON is always available; YAML requires the `yaml` feature.

use std::path::Path;

use serde_json::Value;

use crate::error::{CatalogError, CatalogResult};
use crate::format::CatalogFormat;
use crate::translation::{Catalog, Translation};

/// Reader for key/value mapping catalogs.
#[derive(Debug, Default, Clone, Copy)]
pub struct MappingReader;

impl MappingReader {
	/// Creates a new mapping reader.
	pub fn new() -> Self {
		Self
	}

	/// Reads a mapping catalog from a file.
	///
	/// The format is detected from the file extension.
	///
	/// # Errors
	///
	/// Returns an error if:
	/// - The extension is not a mapping format
	/// - The file cannot be opened or read
	/// - The content is not a valid mapping
	pub fn read_file(&self, path: &Path) -> CatalogResult<Catalog> {
		let format = CatalogFormat::from_path(path)
			.filter(|format| !format.is_binary())
			.ok_or_else(|| {
				CatalogError::UnsupportedExtension(
					path.extension()
						.and_then(|e| e.to_str())
						.unwrap_or("(none)")
						.to_string(),
				)
			})?;

		let content = std::fs::read_to_string(path).map_err(|e| {
			if e.kind() == std::io::ErrorKind::InvalidData {
				CatalogError::Format(format!("{} is not valid UTF-8", path.display()))
			} else {
				CatalogError::Io(e)
			}
		})?;

		self.read_str(&content, format)
	}

	/// Reads a mapping catalog from a string.
	pub fn read_str(&self, content: &str, format: CatalogFormat) -> CatalogResult<Catalog> {
		let value = match format {
			CatalogFormat::Json => serde_json::from_str::<Value>(content)?,
			CatalogFormat::Yaml => parse_yaml(content)?,
			CatalogFormat::Mo => {
				return Err(CatalogError::UnsupportedExtension(
					CatalogFormat::Mo.extension().to_string(),
				));
			}
		};
		self.read_value(value)
	}

	/// Converts an already deserialized value into a catalog.
	///
	/// # Errors
	///
	/// Returns [`CatalogError::Format`] if the value is not a mapping, or if
	/// a value is neither a string, a number, a boolean, nor a list of
	/// strings.
	pub fn read_value(&self, value: Value) -> CatalogResult<Catalog> {
		let entries = match value {
			Value::Object(entries) => entries,
			other => {
				return Err(CatalogError::Format(format!(
					"Expected a mapping, found {}",
					value_kind(&other)
				)));
			}
		};

		let mut catalog = Catalog::new();
		for (key, value) in entries {
			let translation = convert_value(&key, value)?;
			catalog.insert(key, translation);
		}
		Ok(catalog)
	}
}

/// Parses YAML content into a JSON value.
#[cfg(feature = "yaml")]
fn parse_yaml(content: &str) -> CatalogResult<Value> {
	Ok(serde_yaml::from_str(content)?)
}

/// Stub for YAML parsing when the feature is not enabled.
#[cfg(not(feature = "yaml"))]
fn parse_yaml(_content: &str) -> CatalogResult<Value> {
	Err(CatalogError::UnsupportedExtension(
		"YAML support requires the 'yaml' feature".to_string(),
	))
}

fn convert_value(key: &str, value: Value) -> CatalogResult<Translation> {
	match value {
		Value::String(text) => Ok(Translation::Scalar(text)),
		Value::Number(number) => Ok(Translation::Scalar(number.to_string())),
		Value::Bool(flag) => Ok(Translation::Scalar(flag.to_string())),
		Value::Array(items) => items
			.into_iter()
			.map(|item| match item {
				Value::String(form) => Ok(form),
				other => Err(CatalogError::Format(format!(
					"Plural forms for key '{}' must be strings, found {}",
					key,
					value_kind(&other)
				))),
			})
			.collect::<CatalogResult<Vec<_>>>()
			.map(Translation::Plural),
		other => Err(CatalogError::Format(format!(
			"Value for key '{}' must be a string or a list of strings, found {}",
			key,
			value_kind(&other)
		))),
	}
}

fn value_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "list",
		Value::Object(_) => "mapping",
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;
	use std::io::Write;
	use tempfile::NamedTempFile;

	#[rstest]
	fn test_read_json_mapping() {
		// Arrange
		let reader = MappingReader::new();
		let content = r#"{"Hello": "Hola", "file": ["archivo", "archivos"]}"#;

		// Act
		let catalog = reader.read_str(content, CatalogFormat::Json).unwrap();

		// Assert
		assert_eq!(catalog.len(), 2);
		assert_eq!(catalog.get("Hello"), Some(&Translation::from("Hola")));
		assert_eq!(
			catalog.get("file"),
			Some(&Translation::from(vec!["archivo", "archivos"]))
		);
	}

	#[rstest]
	fn test_values_are_kept_as_authored() {
		let reader = MappingReader::new();

		let catalog = reader
			.read_value(json!({"  padded  ": "  spaced  ", "": "metadata"}))
			.unwrap();

		assert_eq!(catalog.get("  padded  "), Some(&Translation::from("  spaced  ")));
		assert_eq!(catalog.get(""), Some(&Translation::from("metadata")));
	}

	#[rstest]
	#[case(json!(["Hello", "Hola"]), "list")]
	#[case(json!("Hello"), "string")]
	#[case(json!(42), "number")]
	#[case(json!(null), "null")]
	fn test_non_mapping_is_format_error(#[case] value: Value, #[case] kind: &str) {
		let result = MappingReader::new().read_value(value);

		assert!(
			matches!(&result, Err(CatalogError::Format(message)) if message.contains(kind)),
			"unexpected result: {:?}",
			result
		);
	}

	#[rstest]
	fn test_scalar_values_become_text() {
		let catalog = MappingReader::new()
			.read_value(json!({"count": 3, "enabled": true}))
			.unwrap();

		assert_eq!(catalog.get("count"), Some(&Translation::from("3")));
		assert_eq!(catalog.get("enabled"), Some(&Translation::from("true")));
	}

	#[rstest]
	#[case(json!({"nested": {"a": "b"}}))]
	#[case(json!({"empty": null}))]
	#[case(json!({"mixed": ["a", 1]}))]
	fn test_unsupported_values_are_rejected(#[case] value: Value) {
		let result = MappingReader::new().read_value(value);
		assert!(matches!(result, Err(CatalogError::Format(_))));
	}

	#[rstest]
	fn test_invalid_json_is_json_error() {
		let result = MappingReader::new().read_str("{\"Hello\": ", CatalogFormat::Json);
		assert!(matches!(result, Err(CatalogError::Json(_))));
	}

	#[rstest]
	fn test_read_file() {
		let mut file = NamedTempFile::with_suffix(".json").unwrap();
		writeln!(file, r#"{{"Save": "Guardar"}}"#).unwrap();

		let catalog = MappingReader::new().read_file(file.path()).unwrap();

		assert_eq!(catalog.get("Save"), Some(&Translation::from("Guardar")));
	}

	#[rstest]
	fn test_read_file_rejects_binary_extension() {
		let result = MappingReader::new().read_file(Path::new("messages.mo"));
		assert!(matches!(result, Err(CatalogError::UnsupportedExtension(_))));
	}

	#[rstest]
	fn test_read_file_not_found() {
		let result = MappingReader::new().read_file(Path::new("/nonexistent/messages.json"));
		assert!(matches!(result, Err(CatalogError::Io(_))));
	}

	#[cfg(feature = "yaml")]
	#[rstest]
	fn test_read_yaml_mapping() {
		let content = r#"
Hello: Hola
file:
  - archivo
  - archivos
"#;

		let catalog = MappingReader::new()
			.read_str(content, CatalogFormat::Yaml)
			.unwrap();

		assert_eq!(catalog.get("Hello"), Some(&Translation::from("Hola")));
		assert_eq!(
			catalog.get("file"),
			Some(&Translation::from(vec!["archivo", "archivos"]))
		);
	}

	#[cfg(not(feature = "yaml"))]
	#[rstest]
	fn test_yaml_requires_feature() {
		let result = MappingReader::new().read_str("Hello: Hola", CatalogFormat::Yaml);
		assert!(matches!(result, Err(CatalogError::UnsupportedExtension(_))));
	}
}
