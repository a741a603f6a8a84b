//! Histogram computation from grayscale pixel data.
//!
//! Each pixel value indexes one of 256 bins directly. Values outside 0..=255
//! have no bin and are reported as errors rather than clamped.

use thiserror::Error;

use crate::raster::RasterImage;
use crate::{GrayHistogram, BIN_COUNT};

/// Errors that can occur during histogram computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistogramError {
    /// A pixel value has no bin
    #[error("Pixel value {value} at index {index} is outside 0..=255")]
    OutOfRange { value: i32, index: usize },
}

/// Compute the intensity histogram of an image.
///
/// Read-only; the image is not modified.
///
/// # Errors
///
/// Returns [`HistogramError::OutOfRange`] for the first pixel that is
/// negative or above 255.
///
/// # Example
/// ```
/// use graymap_core::{decode, histogram::compute_histogram};
///
/// let image = decode("P2\n#\n2  2\n255\n10 20\n30 40").unwrap();
/// let hist = compute_histogram(&image).unwrap();
/// assert_eq!(hist.bins[10], 1);
/// assert_eq!(hist.total(), 4);
/// ```
pub fn compute_histogram(image: &RasterImage) -> Result<GrayHistogram, HistogramError> {
    let mut hist = GrayHistogram::new();

    for (index, &value) in image.pixels.iter().enumerate() {
        let bin = usize::try_from(value)
            .ok()
            .filter(|&bin| bin < BIN_COUNT)
            .ok_or(HistogramError::OutOfRange { value, index })?;
        hist.bins[bin] += 1;
    }

    Ok(hist)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
