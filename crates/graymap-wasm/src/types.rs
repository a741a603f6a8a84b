//! WASM-compatible wrapper types for PGM images.
//!
//! This module provides the JavaScript-facing image type and the conversion
//! of core errors into JavaScript exceptions.

use std::fmt::Display;

use graymap_core::RasterImage;
use wasm_bindgen::prelude::*;

/// A decoded PGM image wrapper for JavaScript.
///
/// Holds the core `RasterImage` in WASM memory. Transforms mutate it in
/// place; `pixels()` copies the values out to JavaScript.
#[wasm_bindgen]
pub struct JsRasterImage {
    inner: RasterImage,
}

#[wasm_bindgen]
impl JsRasterImage {
    /// Create a new image from dimensions and a flat pixel array.
    ///
    /// Pixels are laid out in lines of at most 70 characters.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, max_gray: u32, pixels: Vec<i32>) -> JsRasterImage {
        JsRasterImage {
            inner: RasterImage::from_pixels(width, height, max_gray, pixels),
        }
    }

    /// Get the format tag (normally "P2")
    #[wasm_bindgen(getter)]
    pub fn magic(&self) -> String {
        self.inner.magic.clone()
    }

    /// Get the image width
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the declared maximum gray value
    #[wasm_bindgen(getter)]
    pub fn max_gray(&self) -> u32 {
        self.inner.max_gray
    }

    /// Get the number of decoded pixel values
    #[wasm_bindgen(getter)]
    pub fn pixel_count(&self) -> usize {
        self.inner.pixel_count()
    }

    /// Get the number of pixel text lines
    #[wasm_bindgen(getter)]
    pub fn line_count(&self) -> usize {
        self.inner.line_count()
    }

    /// Returns the pixel values as Int32Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<i32> {
        self.inner.pixels.clone()
    }

    /// Short human-readable summary of the header.
    pub fn summary(&self) -> String {
        self.inner.to_string()
    }
}

impl JsRasterImage {
    /// Wrap a core image.
    pub(crate) fn from_raster(inner: RasterImage) -> Self {
        Self { inner }
    }

    pub(crate) fn raster(&self) -> &RasterImage {
        &self.inner
    }

    pub(crate) fn raster_mut(&mut self) -> &mut RasterImage {
        &mut self.inner
    }
}

/// Report a failure on the browser console and turn it into a JS exception.
///
/// Only callable on wasm32 targets.
pub(crate) fn to_js_error(context: &str, err: impl Display) -> JsValue {
    let message = format!("{context}: {err}");
    web_sys::console::error_1(&JsValue::from_str(&message));
    js_sys::Error::new(&message).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_raster_image_creation() {
        let img = JsRasterImage::new(2, 2, 255, vec![10, 20, 30, 40]);
        assert_eq!(img.magic(), "P2");
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.max_gray(), 255);
        assert_eq!(img.pixel_count(), 4);
        assert_eq!(img.line_count(), 1);
    }

    #[test]
    fn test_js_raster_image_pixels() {
        let pixels = vec![0, 128, 255];
        let img = JsRasterImage::new(3, 1, 255, pixels.clone());
        assert_eq!(img.pixels(), pixels);
    }

    #[test]
    fn test_from_raster() {
        let raster = RasterImage::from_pixels(4, 1, 15, vec![1, 2, 3, 4]);
        let img = JsRasterImage::from_raster(raster.clone());
        assert_eq!(img.raster(), &raster);
        assert_eq!(img.max_gray(), 15);
    }

    #[test]
    fn test_summary() {
        let img = JsRasterImage::new(7, 3, 255, vec![0; 21]);
        assert_eq!(
            img.summary(),
            "Format: P2\nDimensions: 3;7\nMax gray level: 255\nPixel lines: 1"
        );
    }
}
