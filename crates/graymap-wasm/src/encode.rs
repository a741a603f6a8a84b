//! PGM encoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { encode_pgm } from '@graymap/wasm';
//!
//! // Byte-compatible with legacy PGM writers
//! const legacy = encode_pgm(image);
//!
//! // True width on the dimensions line, original comment kept
//! const fixed = encode_pgm(image, { dimensions: 'corrected', preserve_comment: true });
//! ```

use crate::types::{to_js_error, JsRasterImage};
use graymap_core::encode::{self, EncodeOptions};
use wasm_bindgen::prelude::*;

/// Encode an image to PGM text.
///
/// # Arguments
///
/// * `image` - The image to encode
/// * `options` - Optional plain object with `dimensions` (`"legacy"` or
///   `"corrected"`) and `preserve_comment` (boolean). Missing fields use
///   the legacy defaults.
///
/// # Errors
///
/// Throws if `options` cannot be read as encode options.
#[wasm_bindgen]
pub fn encode_pgm(image: &JsRasterImage, options: JsValue) -> Result<String, JsValue> {
    let options: EncodeOptions = if options.is_undefined() || options.is_null() {
        EncodeOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| to_js_error("Invalid encode options", e))?
    };
    Ok(encode::encode_with(image.raster(), &options))
}
