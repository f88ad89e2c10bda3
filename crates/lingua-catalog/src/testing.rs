//! Binary catalog fixtures for tests.
//!
//! [`MoFixture`] lays out small `.mo` files byte by byte so that readers can
//! be exercised against both byte orders, arbitrary revisions, plural
//! entries and scattered string offsets. It is not a catalog compiler: it
//! writes entries in insertion order and leaves the hash table empty.
//!
//! Enabled with the `testing` feature.

use std::path::Path;

use crate::mo::{ByteOrder, HEADER_SIZE};

/// Builder for binary catalog test fixtures.
///
/// # Example
///
/// ```
/// use lingua_catalog::MoReader;
/// use lingua_catalog::mo::ByteOrder;
/// use lingua_catalog::testing::MoFixture;
///
/// let bytes = MoFixture::new()
///     .byte_order(ByteOrder::Big)
///     .entry("Hello", "Hola")
///     .plural_entry(&["file", "files"], &["archivo", "archivos"])
///     .build();
///
/// let catalog = MoReader::new().read_bytes(&bytes).unwrap();
/// assert_eq!(catalog.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct MoFixture {
	byte_order: ByteOrder,
	revision: u32,
	entries: Vec<(Vec<u8>, Vec<u8>)>,
	scattered: bool,
}

impl Default for MoFixture {
	fn default() -> Self {
		Self::new()
	}
}

impl MoFixture {
	/// Creates an empty little-endian revision 0 fixture.
	pub fn new() -> Self {
		Self {
			byte_order: ByteOrder::Little,
			revision: 0,
			entries: Vec::new(),
			scattered: false,
		}
	}

	/// Sets the byte order of every integer in the file.
	pub fn byte_order(mut self, byte_order: ByteOrder) -> Self {
		self.byte_order = byte_order;
		self
	}

	/// Sets the raw revision word (major revision in the high 16 bits).
	pub fn revision(mut self, revision: u32) -> Self {
		self.revision = revision;
		self
	}

	/// Adds a metadata entry (empty original) the way `msgfmt` does.
	pub fn metadata(self, header: &str) -> Self {
		self.raw_entry(Vec::new(), header.as_bytes().to_vec())
	}

	/// Adds a singular entry.
	pub fn entry(self, original: &str, translation: &str) -> Self {
		self.raw_entry(
			original.as_bytes().to_vec(),
			translation.as_bytes().to_vec(),
		)
	}

	/// Adds a plural entry; variants are joined with NUL on both sides.
	pub fn plural_entry(self, originals: &[&str], forms: &[&str]) -> Self {
		self.raw_entry(
			originals.join("\0").into_bytes(),
			forms.join("\0").into_bytes(),
		)
	}

	/// Adds an entry from raw bytes.
	pub fn raw_entry(mut self, original: Vec<u8>, translation: Vec<u8>) -> Self {
		self.entries.push((original, translation));
		self
	}

	/// Places strings in reverse order with filler bytes between them, so
	/// offsets are neither sequential nor adjacent to the tables.
	pub fn scattered(mut self) -> Self {
		self.scattered = true;
		self
	}

	/// Produces the catalog bytes.
	pub fn build(&self) -> Vec<u8> {
		let order = self.byte_order;
		let count = self.entries.len() as u32;
		let original_table = HEADER_SIZE as u32;
		let translation_table = original_table + 8 * count;
		let strings_start = translation_table + 8 * count;

		// Strings in storage order, tagged with (entry index, is_translation).
		let mut blobs: Vec<(usize, bool, &[u8])> = Vec::new();
		for (index, (original, _)) in self.entries.iter().enumerate() {
			blobs.push((index, false, original));
		}
		for (index, (_, translation)) in self.entries.iter().enumerate() {
			blobs.push((index, true, translation));
		}
		if self.scattered {
			blobs.reverse();
		}

		let mut original_pairs = vec![(0u32, 0u32); self.entries.len()];
		let mut translation_pairs = vec![(0u32, 0u32); self.entries.len()];
		let mut data = Vec::new();
		for (index, is_translation, bytes) in blobs {
			if self.scattered {
				data.extend_from_slice(b"\xAB\xCD\xEF");
			}
			let pair = (bytes.len() as u32, strings_start + data.len() as u32);
			if is_translation {
				translation_pairs[index] = pair;
			} else {
				original_pairs[index] = pair;
			}
			data.extend_from_slice(bytes);
			data.push(0);
		}

		let mut out = Vec::with_capacity(strings_start as usize + data.len());
		out.extend_from_slice(&order.magic());
		for word in [
			self.revision,
			count,
			original_table,
			translation_table,
			0,
			strings_start,
		] {
			out.extend_from_slice(&order.encode(word));
		}
		for (length, offset) in original_pairs.into_iter().chain(translation_pairs) {
			out.extend_from_slice(&order.encode(length));
			out.extend_from_slice(&order.encode(offset));
		}
		out.extend_from_slice(&data);
		out
	}

	/// Writes the catalog bytes to `path`.
	pub fn write_to(&self, path: &Path) -> std::io::Result<()> {
		std::fs::write(path, self.build())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::mo::MAGIC_BIG_ENDIAN;
	use rstest::rstest;

	#[rstest]
	fn test_fixture_header_layout() {
		let bytes = MoFixture::new()
			.byte_order(ByteOrder::Big)
			.entry("a", "b")
			.build();

		assert_eq!(bytes[..4], MAGIC_BIG_ENDIAN);
		// count
		assert_eq!(bytes[8..12], [0u8, 0, 0, 1]);
		// original table right after the header
		assert_eq!(bytes[12..16], [0u8, 0, 0, 28]);
	}

	#[rstest]
	fn test_scattered_fixture_moves_strings() {
		let plain = MoFixture::new().entry("a", "b").build();
		let scattered = MoFixture::new().entry("a", "b").scattered().build();

		assert_ne!(plain, scattered);
		assert!(scattered.len() > plain.len());
	}
}
