//! Bookkeeping for the uploaded and returned archives.
//!
//! Nothing here looks inside an archive: sizes are derived from the
//! Base64 text and names from the browser-reported file name.

use crate::config::{ACCEPTED_EXTENSION, BYTES_PER_MEGABYTE, RESULT_MEDIA_TYPE};

/// Decoded byte length of a Base64 string, without decoding it.
///
/// `floor(len * 3 / 4) - padding`, where padding is the number of
/// trailing `=` characters (at most two are counted).
pub fn decoded_len(base64: &str) -> u64 {
    let trimmed = base64.trim_end_matches(['\r', '\n']);
    let padding = trimmed
        .bytes()
        .rev()
        .take(2)
        .take_while(|b| *b == b'=')
        .count() as u64;
    let len = trimmed.len() as u64;
    (len * 3 / 4).saturating_sub(padding)
}

/// Put the media-type header back in front of a bare Base64 payload.
pub fn to_data_url(base64: &str) -> String {
    format!("{}{}", RESULT_MEDIA_TYPE, base64)
}

/// Remove a `data:…;base64,` prefix if there is one.
pub fn strip_data_url_prefix(encoded: &str) -> &str {
    if encoded.starts_with("data:") {
        match encoded.find(',') {
            Some(idx) => &encoded[idx + 1..],
            None => encoded,
        }
    } else {
        encoded
    }
}

/// Whether the file name carries the archive extension (case-insensitive).
pub fn has_archive_extension(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(ACCEPTED_EXTENSION)
}

/// Name under which the processed archive is offered for download.
pub fn result_file_name(original: &str) -> String {
    let stem = if has_archive_extension(original) {
        &original[..original.len() - ACCEPTED_EXTENSION.len()]
    } else {
        original
    };
    let stem = if stem.is_empty() { "archive" } else { stem };
    format!("{}-trimmed{}", stem, ACCEPTED_EXTENSION)
}

/// Bytes as megabytes with two decimals, e.g. `"1.50 MB"`.
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / BYTES_PER_MEGABYTE)
}

/// `"1 file"` / `"3 files"`.
pub fn file_count_label(count: u64) -> String {
    if count == 1 {
        "1 file".to_string()
    } else {
        format!("{} files", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    #[test]
    fn test_decoded_len_matches_real_decoding() {
        // Covers all three padding cases several times over.
        for len in 0..64usize {
            let bytes: Vec<u8> = (0..len).map(|i| (i * 37 % 251) as u8).collect();
            let encoded = STANDARD.encode(&bytes);
            assert_eq!(
                decoded_len(&encoded),
                len as u64,
                "length mismatch for {} bytes ({:?})",
                len,
                encoded
            );
        }
    }

    #[test]
    fn test_decoded_len_padding_cases() {
        assert_eq!(decoded_len(""), 0);
        assert_eq!(decoded_len("QUJD"), 3);
        assert_eq!(decoded_len("QUI="), 2);
        assert_eq!(decoded_len("QQ=="), 1);
    }

    #[test]
    fn test_data_url_prefix() {
        let url = to_data_url("UEsFBg==");
        assert_eq!(url, "data:application/zip;base64,UEsFBg==");
        assert_eq!(strip_data_url_prefix(&url), "UEsFBg==");
        assert_eq!(strip_data_url_prefix("UEsFBg=="), "UEsFBg==");
        assert_eq!(
            strip_data_url_prefix("data:application/x-zip-compressed;base64,AAAA"),
            "AAAA"
        );
    }

    #[test]
    fn test_archive_extension() {
        assert!(has_archive_extension("messages.zip"));
        assert!(has_archive_extension("MESSAGES.ZIP"));
        assert!(!has_archive_extension("messages.tar.gz"));
        assert!(!has_archive_extension("zip"));
    }

    #[test]
    fn test_result_file_name() {
        assert_eq!(result_file_name("chats.zip"), "chats-trimmed.zip");
        assert_eq!(result_file_name("Chats.ZIP"), "Chats-trimmed.zip");
        assert_eq!(result_file_name(".zip"), "archive-trimmed.zip");
        assert_eq!(result_file_name("notes"), "notes-trimmed.zip");
    }

    #[test]
    fn test_format_megabytes() {
        assert_eq!(format_megabytes(0), "0.00 MB");
        assert_eq!(format_megabytes(1_500_000), "1.50 MB");
        assert_eq!(format_megabytes(50_000_000), "50.00 MB");
        assert_eq!(format_megabytes(1_234), "0.00 MB");
    }

    #[test]
    fn test_file_count_label() {
        assert_eq!(file_count_label(0), "0 files");
        assert_eq!(file_count_label(1), "1 file");
        assert_eq!(file_count_label(3), "3 files");
    }
}
