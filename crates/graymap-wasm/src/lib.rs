//! Graymap WASM - WebAssembly bindings for Graymap
//!
//! This crate provides WASM bindings to expose the graymap-core PGM pipeline
//! to JavaScript/TypeScript applications. The JavaScript side owns file
//! access; these bindings take text or bytes in and hand text back.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for the raster image, error reporting
//! - `decode` - PGM text and byte decoding
//! - `encode` - PGM text encoding with optional settings
//! - `histogram` - 256-bin intensity histogram
//! - `transform` - In-place thresholding
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_pgm, apply_threshold, encode_pgm } from '@graymap/wasm';
//!
//! await init();
//!
//! const image = decode_pgm(await file.text());
//! apply_threshold(image, 128);
//! const output = encode_pgm(image);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod histogram;
mod transform;
mod types;

pub use decode::{decode_pgm, decode_pgm_bytes};
pub use encode::encode_pgm;
pub use histogram::{compute_histogram, JsHistogram};
pub use transform::apply_threshold;
pub use types::JsRasterImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
