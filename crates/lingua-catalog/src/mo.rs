//! Binary gettext catalog (`.mo`) reader.
//!
//! A catalog starts with a 28-byte header of seven 32-bit words:
//!
//! | Offset | Word |
//! |--------|------|
//! | 0 | magic (`DE 12 04 95` little-endian, `95 04 12 DE` big-endian) |
//! | 4 | revision (major in the high 16 bits) |
//! | 8 | number of strings |
//! | 12 | offset of the original string table |
//! | 16 | offset of the translation string table |
//! | 20 | hash table size (not consulted) |
//! | 24 | hash table offset (not consulted) |
//!
//! Each string table holds one `(length, offset)` pair per string. The
//! string bytes live at arbitrary offsets; nothing about their placement
//! is assumed beyond the offsets recorded in the tables. Every integer in
//! the file uses the byte order selected by the magic.
//!
//! Plural entries store their variants NUL-separated: the original side
//! holds the singular and plural source strings, the translation side
//! holds every plural form.

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};

use crate::error::{CatalogError, CatalogResult};
use crate::translation::{Catalog, Translation};

/// Magic bytes of a little-endian catalog.
pub const MAGIC_LITTLE_ENDIAN: [u8; 4] = [0xDE, 0x12, 0x04, 0x95];

/// Magic bytes of a big-endian catalog.
pub const MAGIC_BIG_ENDIAN: [u8; 4] = [0x95, 0x04, 0x12, 0xDE];

/// Size of the fixed header in bytes.
pub const HEADER_SIZE: u64 = 28;

/// Major revisions this reader understands.
const SUPPORTED_MAJOR_REVISIONS: [u32; 2] = [0, 1];

/// Byte order of the integers in a binary catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
	/// Least significant byte first.
	Little,
	/// Most significant byte first.
	Big,
}

impl ByteOrder {
	/// Detects the byte order from the first four bytes of a catalog.
	///
	/// # Example
	///
	/// ```
	/// # use lingua_catalog::mo::ByteOrder;
	/// assert_eq!(ByteOrder::from_magic([0xDE, 0x12, 0x04, 0x95]), Some(ByteOrder::Little));
	/// assert_eq!(ByteOrder::from_magic([0x95, 0x04, 0x12, 0xDE]), Some(ByteOrder::Big));
	/// assert_eq!(ByteOrder::from_magic([0xAA, 0xBB, 0xCC, 0xDD]), None);
	/// ```
	pub fn from_magic(magic: [u8; 4]) -> Option<Self> {
		match magic {
			MAGIC_LITTLE_ENDIAN => Some(Self::Little),
			MAGIC_BIG_ENDIAN => Some(Self::Big),
			_ => None,
		}
	}

	/// Returns the magic bytes that announce this byte order.
	pub fn magic(&self) -> [u8; 4] {
		match self {
			Self::Little => MAGIC_LITTLE_ENDIAN,
			Self::Big => MAGIC_BIG_ENDIAN,
		}
	}

	/// Decodes a 32-bit word.
	pub fn decode(&self, bytes: [u8; 4]) -> u32 {
		match self {
			Self::Little => u32::from_le_bytes(bytes),
			Self::Big => u32::from_be_bytes(bytes),
		}
	}

	/// Encodes a 32-bit word.
	pub fn encode(&self, value: u32) -> [u8; 4] {
		match self {
			Self::Little => value.to_le_bytes(),
			Self::Big => value.to_be_bytes(),
		}
	}
}

/// Reads one 32-bit word in the given byte order.
pub fn read_u32<R: Read>(reader: &mut R, order: ByteOrder) -> std::io::Result<u32> {
	let mut buf = [0u8; 4];
	reader.read_exact(&mut buf)?;
	Ok(order.decode(buf))
}

/// Decoded fixed header of a binary catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoHeader {
	/// Byte order selected by the magic.
	pub byte_order: ByteOrder,
	/// High 16 bits of the revision word.
	pub major_revision: u32,
	/// Low 16 bits of the revision word.
	pub minor_revision: u32,
	/// Number of string pairs.
	pub num_strings: u32,
	/// Offset of the original string table.
	pub original_table_offset: u32,
	/// Offset of the translation string table.
	pub translation_table_offset: u32,
	/// Size of the hash table. Never consulted.
	pub hash_table_size: u32,
	/// Offset of the hash table. Never consulted.
	pub hash_table_offset: u32,
}

/// `(length, offset)` descriptor of one string in a string table.
#[derive(Debug, Clone, Copy)]
struct StringDescriptor {
	length: u32,
	offset: u32,
}

/// Reader for binary gettext catalogs.
///
/// # Example
///
/// ```no_run
/// use lingua_catalog::MoReader;
/// use std::path::Path;
///
/// let catalog = MoReader::new().read_file(Path::new("i18n/es_ES/messages.mo")).unwrap();
/// println!("{} entries", catalog.len());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct MoReader;

impl MoReader {
	/// Creates a new binary catalog reader.
	pub fn new() -> Self {
		Self
	}

	/// Reads a catalog from a file.
	///
	/// The file handle is released before this method returns, whether or
	/// not decoding succeeded.
	///
	/// # Errors
	///
	/// Returns [`CatalogError::Io`] if the file cannot be opened, and the
	/// errors of [`MoReader::read`] otherwise.
	pub fn read_file(&self, path: &Path) -> CatalogResult<Catalog> {
		let file = File::open(path)?;
		self.read(BufReader::new(file))
	}

	/// Reads a catalog from an in-memory buffer.
	pub fn read_bytes(&self, bytes: &[u8]) -> CatalogResult<Catalog> {
		self.read(std::io::Cursor::new(bytes))
	}

	/// Decodes only the fixed header.
	///
	/// # Errors
	///
	/// - [`CatalogError::InvalidMagic`] if the magic is unrecognized
	/// - [`CatalogError::UnsupportedRevision`] if the major revision is not 0 or 1
	/// - [`CatalogError::Format`] if the stream ends inside the header
	pub fn read_header<R: Read>(&self, reader: &mut R) -> CatalogResult<MoHeader> {
		let mut magic = [0u8; 4];
		reader
			.read_exact(&mut magic)
			.map_err(|e| CatalogError::Format(format!("Failed to read magic number: {}", e)))?;

		let byte_order = ByteOrder::from_magic(magic).ok_or(CatalogError::InvalidMagic(magic))?;

		let revision = read_header_word(reader, byte_order, "revision")?;
		let major_revision = revision >> 16;
		if !SUPPORTED_MAJOR_REVISIONS.contains(&major_revision) {
			return Err(CatalogError::UnsupportedRevision(major_revision));
		}

		Ok(MoHeader {
			byte_order,
			major_revision,
			minor_revision: revision & 0xFFFF,
			num_strings: read_header_word(reader, byte_order, "string count")?,
			original_table_offset: read_header_word(reader, byte_order, "original table offset")?,
			translation_table_offset: read_header_word(
				reader,
				byte_order,
				"translation table offset",
			)?,
			hash_table_size: read_header_word(reader, byte_order, "hash table size")?,
			hash_table_offset: read_header_word(reader, byte_order, "hash table offset")?,
		})
	}

	/// Decodes a whole catalog.
	///
	/// The metadata entry (empty original) is parsed like any other entry
	/// but never appears in the returned catalog.
	///
	/// # Errors
	///
	/// Header errors as in [`MoReader::read_header`]. Any read or seek
	/// failure in the tables or strings, an offset past the end of the
	/// stream, or a string that is not UTF-8 yields [`CatalogError::Format`].
	/// No partial catalog is returned.
	pub fn read<R: Read + Seek>(&self, mut reader: R) -> CatalogResult<Catalog> {
		let header = self.read_header(&mut reader)?;
		tracing::debug!(
			byte_order = ?header.byte_order,
			revision = header.major_revision,
			strings = header.num_strings,
			"Decoding binary catalog"
		);

		let stream_len = reader
			.seek(SeekFrom::End(0))
			.map_err(|e| CatalogError::Format(format!("Failed to determine stream length: {}", e)))?;

		let originals = read_table(
			&mut reader,
			&header,
			header.original_table_offset,
			stream_len,
			"original",
		)?;
		let translations = read_table(
			&mut reader,
			&header,
			header.translation_table_offset,
			stream_len,
			"translation",
		)?;

		let mut raw = Vec::new();
		for (index, (original, translation)) in originals.iter().zip(&translations).enumerate() {
			let original_bytes = if original.length > 0 {
				read_string(&mut reader, *original, stream_len, index, "original")?
			} else {
				Vec::new()
			};

			if translation.length == 0 {
				continue;
			}

			let translation_bytes =
				read_string(&mut reader, *translation, stream_len, index, "translation")?;
			raw.push((index, original_bytes, translation_bytes));
		}

		let encoding = catalog_encoding(&raw);
		tracing::debug!(encoding = encoding.name(), "Selected catalog encoding");

		let mut catalog = Catalog::new();
		for (index, original, translation) in raw {
			let original_variants = split_variants(&original, encoding, index, "original")?;
			let translation_variants = split_variants(&translation, encoding, index, "translation")?;
			insert_entry(&mut catalog, original_variants, translation_variants);
		}

		catalog.remove("");
		tracing::debug!(entries = catalog.len(), "Decoded binary catalog");
		Ok(catalog)
	}
}

/// Reads one header word, mapping a short read to a format error.
fn read_header_word<R: Read>(reader: &mut R, order: ByteOrder, name: &str) -> CatalogResult<u32> {
	read_u32(reader, order)
		.map_err(|e| CatalogError::Format(format!("Failed to read header {}: {}", name, e)))
}

/// Reads the `(length, offset)` table starting at `offset`.
fn read_table<R: Read + Seek>(
	reader: &mut R,
	header: &MoHeader,
	offset: u32,
	stream_len: u64,
	side: &str,
) -> CatalogResult<Vec<StringDescriptor>> {
	let table_len = u64::from(header.num_strings) * 8;
	let end = u64::from(offset) + table_len;
	if end > stream_len {
		return Err(CatalogError::Format(format!(
			"{} table at offset {} with {} entries extends past end of stream ({} bytes)",
			side, offset, header.num_strings, stream_len
		)));
	}

	reader
		.seek(SeekFrom::Start(u64::from(offset)))
		.map_err(|e| CatalogError::Format(format!("Failed to seek to {} table: {}", side, e)))?;

	let mut descriptors = Vec::with_capacity(header.num_strings as usize);
	for _ in 0..header.num_strings {
		let length = read_u32(reader, header.byte_order);
		let string_offset = read_u32(reader, header.byte_order);
		match (length, string_offset) {
			(Ok(length), Ok(offset)) => descriptors.push(StringDescriptor { length, offset }),
			(Err(e), _) | (_, Err(e)) => {
				return Err(CatalogError::Format(format!(
					"Failed to read {} table: {}",
					side, e
				)));
			}
		}
	}

	Ok(descriptors)
}

/// Reads exactly the bytes described by `descriptor`.
fn read_string<R: Read + Seek>(
	reader: &mut R,
	descriptor: StringDescriptor,
	stream_len: u64,
	index: usize,
	side: &str,
) -> CatalogResult<Vec<u8>> {
	let start = u64::from(descriptor.offset);
	if start + u64::from(descriptor.length) > stream_len {
		return Err(CatalogError::Format(format!(
			"{} string {} at offset {} with length {} extends past end of stream ({} bytes)",
			side, index, descriptor.offset, descriptor.length, stream_len
		)));
	}

	reader.seek(SeekFrom::Start(start)).map_err(|e| {
		CatalogError::Format(format!("Failed to seek to {} string {}: {}", side, index, e))
	})?;

	let mut bytes = vec![0u8; descriptor.length as usize];
	reader.read_exact(&mut bytes).map_err(|e| {
		CatalogError::Format(format!("Failed to read {} string {}: {}", side, index, e))
	})?;
	Ok(bytes)
}

/// Extracts the `charset` parameter of the `Content-Type` line of a
/// metadata entry.
///
/// # Example
///
/// ```
/// use lingua_catalog::mo::charset_label;
///
/// let header = b"Project-Id-Version: shop\nContent-Type: text/plain; charset=ISO-8859-1\n";
/// assert_eq!(charset_label(header), Some(&b"ISO-8859-1"[..]));
/// assert_eq!(charset_label(b"Language: fr\n"), None);
/// ```
pub fn charset_label(metadata: &[u8]) -> Option<&[u8]> {
	const CONTENT_TYPE: &[u8] = b"content-type:";
	const CHARSET: &[u8] = b"charset=";

	metadata
		.split(|byte| *byte == b'\n')
		.map(<[u8]>::trim_ascii)
		.filter(|line| {
			line.len() >= CONTENT_TYPE.len()
				&& line[..CONTENT_TYPE.len()].eq_ignore_ascii_case(CONTENT_TYPE)
		})
		.find_map(|line| {
			let start = line
				.windows(CHARSET.len())
				.position(|window| window.eq_ignore_ascii_case(CHARSET))?
				+ CHARSET.len();
			let value = &line[start..];
			let end = value
				.iter()
				.position(|byte| *byte == b';' || byte.is_ascii_whitespace())
				.unwrap_or(value.len());
			let label = value[..end].trim_ascii();
			let label = label
				.strip_prefix(b"\"")
				.and_then(|l| l.strip_suffix(b"\""))
				.unwrap_or(label);
			(!label.is_empty()).then_some(label)
		})
}

/// Picks the encoding named by the metadata entry, UTF-8 when it names none
/// or names one that is not recognized (such as the `CHARSET` template
/// placeholder).
fn catalog_encoding(raw: &[(usize, Vec<u8>, Vec<u8>)]) -> &'static Encoding {
	let Some(label) = raw
		.iter()
		.find(|(_, original, _)| original.is_empty())
		.and_then(|(_, _, metadata)| charset_label(metadata))
	else {
		return UTF_8;
	};

	match Encoding::for_label(label) {
		Some(encoding) => encoding,
		None => {
			tracing::debug!(
				charset = %String::from_utf8_lossy(label),
				"Unknown catalog charset, decoding as UTF-8"
			);
			UTF_8
		}
	}
}

/// Splits raw string bytes on NUL and decodes each variant.
fn split_variants(
	bytes: &[u8],
	encoding: &'static Encoding,
	index: usize,
	side: &str,
) -> CatalogResult<Vec<String>> {
	bytes
		.split(|byte| *byte == 0)
		.map(|variant| {
			encoding
				.decode_without_bom_handling_and_without_replacement(variant)
				.map(|text| text.into_owned())
				.ok_or_else(|| {
					CatalogError::Format(format!(
						"{} string {} is not valid {}",
						side,
						index,
						encoding.name()
					))
				})
		})
		.collect()
}

/// Records one decoded entry.
///
/// When both sides carry more than one variant, the singular original maps
/// to every plural form and the remaining originals are registered with an
/// empty translation unless an earlier entry already claimed them.
fn insert_entry(catalog: &mut Catalog, originals: Vec<String>, translations: Vec<String>) {
	if originals.len() > 1 && translations.len() > 1 {
		let mut variants = originals.into_iter();
		if let Some(singular) = variants.next() {
			catalog.insert(singular, Translation::Plural(translations));
		}
		for variant in variants {
			catalog.insert_if_absent(variant, "");
		}
		return;
	}

	if let (Some(original), Some(translation)) =
		(originals.into_iter().next(), translations.into_iter().next())
	{
		catalog.insert(original, translation);
	}
}
