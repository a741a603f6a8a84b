//! Plain-text PGM decoding.
//!
//! This module turns the text content of a "P2" file into a
//! [`RasterImage`](crate::RasterImage):
//! - line 0 is the format tag, kept verbatim
//! - line 1 is the comment, kept but never validated
//! - line 2 holds the dimensions (`height`, then `width`)
//! - line 3 holds the maximum gray value
//! - every following line holds pixel values
//!
//! # Leniency
//!
//! The decoder does not check the format tag, nor that the number of pixel
//! values matches `width * height`. Such mismatches are accepted and only
//! show up later, e.g. as out-of-range errors in the histogram.
//!
//! # Examples
//!
//! ```ignore
//! use graymap_core::decode::decode_bytes;
//!
//! let bytes = std::fs::read("image.pgm").unwrap();
//! let image = decode_bytes(&bytes).unwrap();
//! println!("{image}");
//! ```

mod pgm;
mod types;

pub use pgm::{decode, decode_bytes, HEADER_LINES};
pub use types::FormatError;
