//! WASM bindings for entity tag utilities.
//!
//! These bindings allow the crate to be used from JavaScript/TypeScript
//! in both browser and Deno environments.

use wasm_bindgen::prelude::*;

use crate::{FileStat, Options};

/// Generate a tag for a string.
#[wasm_bindgen]
pub fn etag_text(text: &str, weak: bool) -> String {
    crate::encode(text, weak)
}

/// Generate a tag for raw bytes (Uint8Array).
#[wasm_bindgen]
pub fn etag_bytes(data: &[u8], weak: bool) -> String {
    crate::encode(data, weak)
}

/// Generate a metadata tag.
///
/// # Arguments
/// * `size` - File size in bytes
/// * `mtime_ms` - Modification time in epoch milliseconds, or undefined for now
///
/// # Returns
/// Weak tag string, or an error if `mtime_ms` is not a representable time
#[wasm_bindgen]
pub fn etag_stat(size: f64, mtime_ms: Option<f64>) -> Result<String, JsValue> {
    let stat = FileStat::from_millis(size.max(0.0) as u64, mtime_ms.map(|ms| ms as i64))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(crate::encode(stat, Options::default()))
}

/// Decode a tag.
///
/// # Returns
/// JSON string of the decoded fields, or `null` if the tag cannot be read
#[wasm_bindgen]
pub fn decode_etag(etag: &str) -> Result<String, JsValue> {
    match crate::decode(etag) {
        Some(decoded) => serde_json::to_string(&decoded)
            .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e))),
        None => Ok("null".to_string()),
    }
}

/// Evaluate `If-Match` against a string entity.
#[wasm_bindgen]
pub fn if_match_text(header: &str, text: &str, weak: bool) -> bool {
    crate::if_match(header, text, weak)
}

/// Evaluate `If-None-Match` against a string entity.
#[wasm_bindgen]
pub fn if_none_match_text(header: &str, text: &str, weak: bool) -> bool {
    crate::if_none_match(header, text, weak)
}
