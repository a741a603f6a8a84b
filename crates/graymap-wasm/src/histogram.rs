//! Histogram computation WASM bindings.

use crate::types::{to_js_error, JsRasterImage};
use graymap_core::histogram::compute_histogram as compute_histogram_core;
use graymap_core::GrayHistogram;
use wasm_bindgen::prelude::*;

/// Histogram result accessible from JavaScript.
///
/// Contains the 256-bin intensity histogram plus helpers for clipping
/// detection and normalization.
#[wasm_bindgen]
pub struct JsHistogram {
    bins: Vec<u32>,
    max_value: u32,
    total: u64,
    has_highlight_clipping: bool,
    has_shadow_clipping: bool,
}

#[wasm_bindgen]
impl JsHistogram {
    /// Get the histogram bins (256 entries).
    pub fn bins(&self) -> Vec<u32> {
        self.bins.clone()
    }

    /// Get the largest bin, for normalizing the display.
    #[wasm_bindgen(getter)]
    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    /// Get the number of counted pixels.
    #[wasm_bindgen(getter)]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Check if any pixel is at 255.
    #[wasm_bindgen(getter)]
    pub fn has_highlight_clipping(&self) -> bool {
        self.has_highlight_clipping
    }

    /// Check if any pixel is at 0.
    #[wasm_bindgen(getter)]
    pub fn has_shadow_clipping(&self) -> bool {
        self.has_shadow_clipping
    }
}

impl From<GrayHistogram> for JsHistogram {
    fn from(hist: GrayHistogram) -> Self {
        Self {
            bins: hist.bins.to_vec(),
            max_value: hist.max_value(),
            total: hist.total(),
            has_highlight_clipping: hist.has_highlight_clipping(),
            has_shadow_clipping: hist.has_shadow_clipping(),
        }
    }
}

/// Compute the intensity histogram of an image.
///
/// # Errors
///
/// Throws if a pixel value lies outside 0..=255.
///
/// # Example (TypeScript)
/// ```typescript
/// const hist = compute_histogram(image);
/// const bins = hist.bins();       // Uint32Array[256]
/// const max = hist.max_value;     // For normalization
/// hist.free();
/// ```
#[wasm_bindgen]
pub fn compute_histogram(image: &JsRasterImage) -> Result<JsHistogram, JsValue> {
    compute_histogram_core(image.raster())
        .map(JsHistogram::from)
        .map_err(|e| to_js_error("Failed to compute histogram", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_histogram_from_core() {
        let img = JsRasterImage::new(2, 2, 255, vec![0, 10, 10, 255]);
        let hist = JsHistogram::from(compute_histogram_core(img.raster()).unwrap());

        assert_eq!(hist.bins().len(), 256);
        assert_eq!(hist.bins()[10], 2);
        assert_eq!(hist.max_value, 2);
        assert_eq!(hist.total, 4);
        assert!(hist.has_highlight_clipping);
        assert!(hist.has_shadow_clipping);
    }

    #[test]
    fn test_js_histogram_empty() {
        let hist = JsHistogram::from(GrayHistogram::new());
        assert_eq!(hist.max_value, 0);
        assert_eq!(hist.total, 0);
        assert!(!hist.has_highlight_clipping);
        assert!(!hist.has_shadow_clipping);
    }
}
