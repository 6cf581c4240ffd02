//! Browser file access for the picked archive.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use js_sys::Uint8Array;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

use crate::types::{AppError, AppResult, SelectedArchive};

/// Every file currently held by a native file input.
pub fn files_from_input(input: &HtmlInputElement) -> Vec<File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Metadata the form state needs about a browser file.
pub fn describe_file(file: &File) -> SelectedArchive {
    SelectedArchive::new(file.name(), file.size() as u64)
}

/// Read the whole file and encode it as standard Base64 (no `data:` prefix).
pub async fn read_base64(file: &File) -> AppResult<String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| AppError::Encoding(format!("{:?}", e)))?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    log::debug!("Read {} bytes from {}", bytes.len(), file.name());
    Ok(STANDARD.encode(bytes))
}
