//! Plain-text PGM encoding.
//!
//! This module serializes a [`RasterImage`](crate::RasterImage) back to the
//! "P2" text format:
//! - the format tag
//! - a comment line (`#` unless the stored comment is preserved)
//! - the dimensions line
//! - the max gray value
//! - the pixel lines, as laid out in the image
//!
//! By default the output is byte-compatible with legacy PGM writers, which
//! writes the stored height in both positions of the dimensions line. See
//! [`DimensionsMode`].
//!
//! # Examples
//!
//! ```ignore
//! use graymap_core::encode::{write_pgm, EncodeOptions};
//!
//! let file = std::fs::File::create("out.pgm").unwrap();
//! write_pgm(&image, &EncodeOptions::default(), file).unwrap();
//! ```

mod pgm;

pub use pgm::{encode, encode_with, write_pgm, DimensionsMode, EncodeError, EncodeOptions};
