//! The in-memory grayscale raster model.
//!
//! A [`RasterImage`] stores its intensities as a flat, row-major sequence of
//! integers. The way those integers are grouped into text lines is kept
//! separately in `layout` and only matters when the image is encoded.

use std::borrow::Cow;
use std::fmt;

use image::GrayImage;

use crate::transform::{wrap_layout, SEPARATOR};

/// Format tag of plain-text grayscale PGM.
pub const PGM_MAGIC: &str = "P2";

/// Comment line written when the source comment is not preserved.
pub const DEFAULT_COMMENT: &str = "#";

/// Default maximum gray value.
pub const DEFAULT_MAX_GRAY: u32 = 255;

/// A decoded plain-text grayscale image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Format tag as read. Not validated; any trailing CR is kept.
    pub magic: String,
    /// Comment line as read (line 1 of the file).
    pub comment: String,
    /// Second token of the dimensions line.
    pub width: u32,
    /// First token of the dimensions line.
    pub height: u32,
    /// Declared maximum gray value. Transforms never adjust it.
    pub max_gray: u32,
    /// Pixel intensities in row-major order, as many as were decoded.
    pub pixels: Vec<i32>,
    /// Number of pixels on each text line. Sums to `pixels.len()`.
    pub layout: Vec<usize>,
}

impl Default for RasterImage {
    fn default() -> Self {
        Self {
            magic: PGM_MAGIC.to_string(),
            comment: DEFAULT_COMMENT.to_string(),
            width: 0,
            height: 0,
            max_gray: DEFAULT_MAX_GRAY,
            pixels: Vec::new(),
            layout: Vec::new(),
        }
    }
}

impl RasterImage {
    /// Create an empty image ("P2", 0x0, max gray 255, no pixels).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an image from a flat pixel sequence, wrapped at the standard line width.
    pub fn from_pixels(width: u32, height: u32, max_gray: u32, pixels: Vec<i32>) -> Self {
        let layout = wrap_layout(&pixels);
        Self {
            width,
            height,
            max_gray,
            pixels,
            layout,
            ..Self::default()
        }
    }

    /// Create an image from an `image::GrayImage`, with max gray 255.
    pub fn from_gray_image(img: &GrayImage) -> Self {
        let pixels = img.as_raw().iter().map(|&v| v as i32).collect();
        Self::from_pixels(img.width(), img.height(), DEFAULT_MAX_GRAY, pixels)
    }

    /// Convert to an `image::GrayImage`.
    ///
    /// Returns `None` unless the pixel count equals `width * height` and
    /// every value fits in a byte.
    pub fn to_gray_image(&self) -> Option<GrayImage> {
        if self.pixels.len() as u64 != self.expected_pixel_count() {
            return None;
        }
        let bytes = self
            .pixels
            .iter()
            .map(|&v| u8::try_from(v).ok())
            .collect::<Option<Vec<u8>>>()?;
        GrayImage::from_raw(self.width, self.height, bytes)
    }

    /// Number of decoded pixel values.
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Pixel count implied by the dimensions (`width * height`).
    pub fn expected_pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Number of pixel text lines the encoder will emit.
    pub fn line_count(&self) -> usize {
        self.effective_layout().len()
    }

    /// Check if the image holds no pixel data.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Render the pixel text lines, tokens joined by the two-space separator.
    pub fn pixel_lines(&self) -> Vec<String> {
        let mut rest = self.pixels.as_slice();
        self.effective_layout()
            .iter()
            .map(|&count| {
                let (line, tail) = rest.split_at(count);
                rest = tail;
                join_line(line)
            })
            .collect()
    }

    /// The stored layout, or a fresh wrap when it no longer matches the pixels.
    fn effective_layout(&self) -> Cow<'_, [usize]> {
        let covered: usize = self.layout.iter().sum();
        if covered == self.pixels.len() {
            Cow::Borrowed(self.layout.as_slice())
        } else {
            log::trace!(
                "layout covers {} of {} pixels, rewrapping",
                covered,
                self.pixels.len()
            );
            Cow::Owned(wrap_layout(&self.pixels))
        }
    }
}

fn join_line(values: &[i32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

impl fmt::Display for RasterImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Format: {}", self.magic)?;
        writeln!(f, "Dimensions: {};{}", self.height, self.width)?;
        writeln!(f, "Max gray level: {}", self.max_gray)?;
        write!(f, "Pixel lines: {}", self.line_count())
    }
}
