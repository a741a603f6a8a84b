//! Graymap Core - plain-text PGM processing library
//!
//! This crate provides the core functionality for working with plain-text
//! grayscale PGM ("P2") images: decoding text into a [`RasterImage`],
//! encoding it back, and the histogram and threshold transforms.
//!
//! Data flows one way through the pipeline:
//!
//! ```text
//! text -> decode -> RasterImage -> transform(s) -> encode -> text
//! ```
//!
//! The crate never opens files itself. Callers hand in text (or bytes) and
//! receive text, or pass a `std::io::Write` sink to [`encode::write_pgm`].

pub mod decode;
pub mod encode;
pub mod histogram;
pub mod raster;
pub mod transform;

pub use decode::{decode, decode_bytes, FormatError};
pub use encode::{encode, encode_with, write_pgm, DimensionsMode, EncodeError, EncodeOptions};
pub use histogram::{compute_histogram, HistogramError};
pub use raster::RasterImage;
pub use transform::{apply_threshold, rewrap, wrap_layout};

/// Number of bins in a grayscale histogram (one per 8-bit intensity).
pub const BIN_COUNT: usize = 256;

/// Histogram data for a grayscale image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayHistogram {
    /// Intensity histogram (256 bins, indexed by pixel value)
    pub bins: [u32; BIN_COUNT],
}

impl Default for GrayHistogram {
    fn default() -> Self {
        Self {
            bins: [0; BIN_COUNT],
        }
    }
}

impl GrayHistogram {
    /// Create a new empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all bins, i.e. the number of counted pixels
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|&count| count as u64).sum()
    }

    /// Find the largest bin for normalization
    pub fn max_value(&self) -> u32 {
        *self.bins.iter().max().unwrap_or(&0)
    }

    /// Check for highlight clipping (values at 255)
    pub fn has_highlight_clipping(&self) -> bool {
        self.bins[BIN_COUNT - 1] > 0
    }

    /// Check for shadow clipping (values at 0)
    pub fn has_shadow_clipping(&self) -> bool {
        self.bins[0] > 0
    }

    /// Borrow the bins as a slice
    pub fn as_slice(&self) -> &[u32] {
        &self.bins
    }
}
