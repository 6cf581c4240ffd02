//! Zip archive handling.
//!
//! Decodes the Base64 payload sent by the frontend, checks that it really
//! is a zip (magic bytes, not just the `.zip` name), reads its entries under
//! the configured limits and writes the trimmed entries back out.

use std::collections::HashSet;
use std::io::{Cursor, Read, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::config::ArchiveLimits;
use crate::error::{ArchiveError, ArchiveResult};

/// Local file header signature.
const LOCAL_HEADER_SIGNATURE: &[u8] = b"PK\x03\x04";

/// End-of-central-directory signature (an archive with no entries starts with it).
const EMPTY_ARCHIVE_SIGNATURE: &[u8] = b"PK\x05\x06";

/// Extensions treated as text or JSON documents.
pub const TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md", "csv", "log", "json", "jsonl"];

/// A regular file read from an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Path inside the archive
    pub name: String,
    /// Uncompressed contents
    pub contents: Vec<u8>,
}

impl ArchiveEntry {
    pub fn new(name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self { name: name.into(), contents: contents.into() }
    }

    pub fn is_text(&self) -> bool {
        is_text_name(&self.name)
    }
}

/// Whether a path names a text or JSON document (case-insensitive extension).
pub fn is_text_name(name: &str) -> bool {
    let file_name = name.rsplit('/').next().unwrap_or(name);
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            let ext = ext.to_ascii_lowercase();
            TEXT_EXTENSIONS.contains(&ext.as_str())
        }
        _ => false,
    }
}

/// Decode the Base64 payload, tolerating a leading `data:…;base64,` prefix.
pub fn decode_payload(encoded: &str) -> ArchiveResult<Vec<u8>> {
    let payload = match encoded.strip_prefix("data:") {
        Some(rest) => rest.split_once(',').map(|(_, data)| data).unwrap_or(rest),
        None => encoded,
    };
    Ok(STANDARD.decode(payload.trim())?)
}

/// Encode archive bytes as standard Base64 (no prefix).
pub fn encode_payload(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Magic-byte check for a zip archive.
pub fn has_zip_signature(bytes: &[u8]) -> bool {
    bytes.starts_with(LOCAL_HEADER_SIGNATURE) || bytes.starts_with(EMPTY_ARCHIVE_SIGNATURE)
}

/// Read every regular file of an archive, enforcing `limits`.
///
/// Directories are skipped. Contents are read through a bounded reader so
/// an entry lying about its size cannot expand past the limit.
pub fn read_entries(bytes: &[u8], limits: &ArchiveLimits) -> ArchiveResult<Vec<ArchiveEntry>> {
    let size = bytes.len() as u64;
    if size > limits.max_archive_bytes {
        return Err(ArchiveError::TooLarge { size, limit: limits.max_archive_bytes });
    }
    if !has_zip_signature(bytes) {
        return Err(ArchiveError::NotAnArchive);
    }

    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    if archive.len() > limits.max_entries {
        return Err(ArchiveError::TooManyEntries(limits.max_entries));
    }

    let mut entries = Vec::with_capacity(archive.len());
    let mut total: u64 = 0;

    for index in 0..archive.len() {
        let file = archive.by_index(index)?;
        if file.is_dir() {
            continue;
        }
        let name = file.name().to_string();

        let remaining = limits.max_uncompressed_bytes.saturating_sub(total);
        let mut contents = Vec::new();
        file.take(remaining + 1).read_to_end(&mut contents)?;

        total += contents.len() as u64;
        if total > limits.max_uncompressed_bytes {
            return Err(ArchiveError::TooMuchContent(limits.max_uncompressed_bytes));
        }
        entries.push(ArchiveEntry { name, contents });
    }

    Ok(dedup_entries(entries))
}

/// Drop entries whose name was already seen; the first one wins.
///
/// A zip may legally repeat a path, but a new archive cannot hold it twice.
pub fn dedup_entries(entries: Vec<ArchiveEntry>) -> Vec<ArchiveEntry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.name.clone()))
        .collect()
}

/// Write entries into a new Deflate-compressed archive.
///
/// Repeated names are written once, first occurrence kept.
pub fn write_archive(entries: &[ArchiveEntry]) -> ArchiveResult<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut seen = HashSet::new();

    for entry in entries {
        if !seen.insert(entry.name.as_str()) {
            continue;
        }
        writer.start_file(entry.name.as_str(), options)?;
        writer.write_all(&entry.contents)?;
    }

    Ok(writer.finish()?.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ArchiveEntry> {
        vec![
            ArchiveEntry::new("chats/alice.txt", "Alice met Bob in London"),
            ArchiveEntry::new("chats/meta.json", r#"{"people": ["Alice", "Bob"]}"#),
            ArchiveEntry::new("photo.png", vec![0x89, b'P', b'N', b'G']),
        ]
    }

    #[test]
    fn test_write_then_read() {
        let bytes = write_archive(&sample()).unwrap();
        assert!(has_zip_signature(&bytes));

        let entries = read_entries(&bytes, &ArchiveLimits::default()).unwrap();
        assert_eq!(entries, sample());
    }

    #[test]
    fn test_empty_archive() {
        let bytes = write_archive(&[]).unwrap();
        assert!(bytes.starts_with(EMPTY_ARCHIVE_SIGNATURE));
        assert!(read_entries(&bytes, &ArchiveLimits::default()).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_non_zip_payload() {
        let err = read_entries(b"just some text", &ArchiveLimits::default()).unwrap_err();
        assert!(matches!(err, ArchiveError::NotAnArchive));
    }

    #[test]
    fn test_rejects_truncated_zip() {
        let bytes = write_archive(&sample()).unwrap();
        let err = read_entries(&bytes[..bytes.len() / 2], &ArchiveLimits::default()).unwrap_err();
        assert!(matches!(err, ArchiveError::Zip(_)));
    }

    #[test]
    fn test_limits() {
        let bytes = write_archive(&sample()).unwrap();

        let small = ArchiveLimits { max_archive_bytes: 10, ..ArchiveLimits::default() };
        assert!(matches!(
            read_entries(&bytes, &small),
            Err(ArchiveError::TooLarge { limit: 10, .. })
        ));

        let few = ArchiveLimits { max_entries: 2, ..ArchiveLimits::default() };
        assert!(matches!(read_entries(&bytes, &few), Err(ArchiveError::TooManyEntries(2))));

        let tight = ArchiveLimits { max_uncompressed_bytes: 30, ..ArchiveLimits::default() };
        assert!(matches!(read_entries(&bytes, &tight), Err(ArchiveError::TooMuchContent(30))));
    }

    #[test]
    fn test_payload_codec() {
        let bytes = write_archive(&sample()).unwrap();
        let encoded = encode_payload(&bytes);

        assert_eq!(decode_payload(&encoded).unwrap(), bytes);
        let with_prefix = format!("data:application/zip;base64,{}", encoded);
        assert_eq!(decode_payload(&with_prefix).unwrap(), bytes);
        assert!(matches!(decode_payload("not base64!"), Err(ArchiveError::Decode(_))));
    }

    #[test]
    fn test_repeated_names_are_written_once() {
        let entries = vec![
            ArchiveEntry::new("a.txt", "first"),
            ArchiveEntry::new("b.txt", "other"),
            ArchiveEntry::new("a.txt", "second"),
        ];

        let bytes = write_archive(&entries).unwrap();
        let read = read_entries(&bytes, &ArchiveLimits::default()).unwrap();
        assert_eq!(
            read,
            vec![ArchiveEntry::new("a.txt", "first"), ArchiveEntry::new("b.txt", "other")]
        );
        assert_eq!(dedup_entries(entries), read);
    }

    #[test]
    fn test_text_names() {
        assert!(is_text_name("notes.txt"));
        assert!(is_text_name("dir/Export.JSON"));
        assert!(is_text_name("a/b/c.jsonl"));
        assert!(!is_text_name("photo.png"));
        assert!(!is_text_name("README"));
        assert!(!is_text_name("dir/.json"));
        assert!(!is_text_name("json/notes"));
    }
}
