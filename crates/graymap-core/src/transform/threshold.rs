//! Binary thresholding.
//!
//! Every pixel strictly below the cutoff becomes [`BLACK`], every other pixel
//! becomes [`WHITE`]. Dimensions and `max_gray` are left as they are, even
//! when `max_gray` no longer matches the 0/255 output range.

use log::debug;

use super::rewrap::wrap_layout;
use crate::raster::RasterImage;

/// Output value for pixels below the cutoff.
pub const BLACK: i32 = 0;

/// Output value for pixels at or above the cutoff.
pub const WHITE: i32 = 255;

/// Map a single intensity through the cutoff rule.
#[inline]
pub fn threshold_value(value: i32, cutoff: i32) -> i32 {
    if value < cutoff {
        BLACK
    } else {
        WHITE
    }
}

/// Binarize an image in place, then re-flow its pixel lines.
///
/// Pixels are rewritten by position, so identical text lines in the source
/// are each transformed independently. The line layout is always rebuilt,
/// whatever it was before.
///
/// # Example
///
/// ```
/// use graymap_core::{decode, transform::apply_threshold};
///
/// let mut image = decode("P2\n#\n2  2\n255\n10 20\n30 40").unwrap();
/// apply_threshold(&mut image, 25);
/// assert_eq!(image.pixels, vec![0, 0, 255, 255]);
/// ```
pub fn apply_threshold(image: &mut RasterImage, cutoff: i32) {
    for value in image.pixels.iter_mut() {
        *value = threshold_value(*value, cutoff);
    }
    image.layout = wrap_layout(&image.pixels);

    debug!(
        "thresholded {} pixels at cutoff {} into {} lines",
        image.pixels.len(),
        cutoff,
        image.layout.len()
    );
}


// ============================================================================
// Property-Based Tests
// ============================================================================
