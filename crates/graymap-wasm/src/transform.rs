//! WASM bindings for pixel transforms.

use crate::types::JsRasterImage;
use graymap_core::transform::apply_threshold as core_threshold;
use wasm_bindgen::prelude::*;

/// Binarize an image in place.
///
/// Pixels below `cutoff` become 0, the rest become 255. The pixel lines are
/// re-flowed afterwards.
///
/// # Example (TypeScript)
///
/// ```typescript
/// apply_threshold(image, 128);
/// const text = encode_pgm(image);
/// ```
#[wasm_bindgen]
pub fn apply_threshold(image: &mut JsRasterImage, cutoff: i32) {
    core_threshold(image.raster_mut(), cutoff);
}
