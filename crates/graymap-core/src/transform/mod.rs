//! Pixel transforms: thresholding and line re-flow.
//!
//! Transforms operate on an already-decoded [`RasterImage`](crate::RasterImage)
//! and mutate it in place. Histogram computation is read-only and lives in
//! [`crate::histogram`].
//!
//! # Line Layout
//!
//! The text layout of the pixel block is not tied to image rows. Thresholding
//! always re-flows the whole pixel sequence into lines of bounded width, so
//! a transformed image never keeps the line boundaries it was decoded with.

mod rewrap;
mod threshold;

pub use rewrap::{rewrap, wrap_layout, MAX_LINE_WIDTH, SEPARATOR};
pub use threshold::{apply_threshold, threshold_value, BLACK, WHITE};
