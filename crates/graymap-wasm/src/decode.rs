//! PGM decoding WASM bindings.
//!
//! This module exposes the graymap-core decoder to JavaScript.
//!
//! # Example
//!
//! ```typescript
//! import { decode_pgm, decode_pgm_bytes } from '@graymap/wasm';
//!
//! const image = decode_pgm(await file.text());
//! const same = decode_pgm_bytes(new Uint8Array(await file.arrayBuffer()));
//! console.log(`${image.height}x${image.width}, ${image.pixel_count} pixels`);
//! ```

use crate::types::{to_js_error, JsRasterImage};
use graymap_core::decode;
use wasm_bindgen::prelude::*;

/// Decode plain-text PGM content.
///
/// # Errors
///
/// Throws if the header is incomplete or a numeric field does not parse.
#[wasm_bindgen]
pub fn decode_pgm(text: &str) -> Result<JsRasterImage, JsValue> {
    decode::decode(text)
        .map(JsRasterImage::from_raster)
        .map_err(|e| to_js_error("Failed to decode PGM", e))
}

/// Decode plain-text PGM content from raw file bytes.
///
/// # Errors
///
/// Throws if the bytes are not UTF-8 or the content is malformed.
#[wasm_bindgen]
pub fn decode_pgm_bytes(bytes: &[u8]) -> Result<JsRasterImage, JsValue> {
    decode::decode_bytes(bytes)
        .map(JsRasterImage::from_raster)
        .map_err(|e| to_js_error("Failed to decode PGM", e))
}
