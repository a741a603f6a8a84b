//! "P2" text writer.

use std::io::Write;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::raster::{RasterImage, DEFAULT_COMMENT};

/// Errors that can occur while writing PGM output.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The destination writer failed
    #[error("Failed to write PGM output: {0}")]
    Io(#[from] std::io::Error),
}

/// How the dimensions line is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionsMode {
    /// Write `height  height`, as legacy PGM writers do.
    ///
    /// Files written this way only decode back to the same dimensions when
    /// the image is square.
    #[default]
    Legacy,
    /// Write `height  width`, the field order the decoder reads.
    Corrected,
}

/// Options controlling PGM output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// Dimensions line format
    pub dimensions: DimensionsMode,
    /// Write the stored comment line instead of a bare `#`
    pub preserve_comment: bool,
}

impl EncodeOptions {
    /// Options producing output byte-compatible with legacy PGM writers
    pub fn legacy() -> Self {
        Self::default()
    }

    /// Options writing the true width and keeping the comment
    pub fn corrected() -> Self {
        Self {
            dimensions: DimensionsMode::Corrected,
            preserve_comment: true,
        }
    }
}

/// Encode an image with the default (legacy) options.
///
/// # Example
///
/// ```
/// use graymap_core::{encode, RasterImage};
///
/// let image = RasterImage::from_pixels(7, 3, 255, vec![0, 255]);
/// assert_eq!(encode(&image), "P2\n#\n3  3\n255\n0  255\n");
/// ```
pub fn encode(image: &RasterImage) -> String {
    encode_with(image, &EncodeOptions::default())
}

/// Encode an image to PGM text.
///
/// Every line, including the last, ends with `\n`.
pub fn encode_with(image: &RasterImage, options: &EncodeOptions) -> String {
    let mut out = String::new();
    for line in output_lines(image, options) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Write an image as PGM text into `writer`.
///
/// # Errors
///
/// Returns [`EncodeError::Io`] if the writer fails. Nothing is retried.
pub fn write_pgm<W: Write>(
    image: &RasterImage,
    options: &EncodeOptions,
    mut writer: W,
) -> Result<(), EncodeError> {
    for line in output_lines(image, options) {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;

    log::debug!("wrote PGM with {} pixel lines", image.line_count());
    Ok(())
}

fn output_lines(image: &RasterImage, options: &EncodeOptions) -> impl Iterator<Item = String> {
    let comment = if options.preserve_comment {
        image.comment.clone()
    } else {
        DEFAULT_COMMENT.to_string()
    };

    let second = match options.dimensions {
        DimensionsMode::Legacy => image.height,
        DimensionsMode::Corrected => image.width,
    };

    let header = [
        image.magic.clone(),
        comment,
        format!("{}  {}", image.height, second),
        image.max_gray.to_string(),
    ];

    header.into_iter().chain(image.pixel_lines())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;

    fn sample_image() -> RasterImage {
        decode("P2\n# original comment\n2  2\n255\n10 20\n30 40\n").unwrap()
    }

    #[test]
    fn test_encode_sample() {
        assert_eq!(
            encode(&sample_image()),
            "P2\n#\n2  2\n255\n10  20\n30  40\n"
        );
    }

    #[test]
    fn test_encode_duplicates_height() {
        let img = RasterImage {
            height: 3,
            width: 7,
            ..RasterImage::default()
        };
        let text = encode(&img);
        assert_eq!(text.lines().nth(2), Some("3  3"));
    }

    #[test]
    fn test_encode_corrected_dimensions() {
        let img = RasterImage {
            height: 3,
            width: 7,
            ..RasterImage::default()
        };
        let options = EncodeOptions {
            dimensions: DimensionsMode::Corrected,
            ..EncodeOptions::default()
        };
        let text = encode_with(&img, &options);
        assert_eq!(text.lines().nth(2), Some("3  7"));
    }

    #[test]
    fn test_encode_discards_comment_by_default() {
        let text = encode(&sample_image());
        assert_eq!(text.lines().nth(1), Some("#"));
    }

    #[test]
    fn test_encode_preserve_comment() {
        let options = EncodeOptions {
            preserve_comment: true,
            ..EncodeOptions::default()
        };
        let text = encode_with(&sample_image(), &options);
        assert_eq!(text.lines().nth(1), Some("# original comment"));
    }

    #[test]
    fn test_encode_empty_image() {
        assert_eq!(encode(&RasterImage::new()), "P2\n#\n0  0\n255\n");
    }

    #[test]
    fn test_encode_keeps_magic_verbatim() {
        let img = RasterImage {
            magic: "P5".to_string(),
            ..RasterImage::default()
        };
        assert!(encode(&img).starts_with("P5\n"));
    }

    #[test]
    fn test_round_trip_square_image() {
        let original = sample_image();
        let decoded = decode(&encode(&original)).unwrap();
        assert_eq!(decoded.magic, original.magic);
        assert_eq!(decoded.max_gray, original.max_gray);
        assert_eq!(decoded.pixels, original.pixels);
        assert_eq!(decoded.layout, original.layout);
        assert_eq!(decoded.width, original.width);
    }

    #[test]
    fn test_round_trip_non_square_loses_width() {
        let original = RasterImage::from_pixels(7, 3, 255, vec![1; 21]);
        let decoded = decode(&encode(&original)).unwrap();
        assert_eq!(decoded.height, 3);
        assert_eq!(decoded.width, 3);
        assert_eq!(decoded.pixels, original.pixels);

        let decoded = decode(&encode_with(&original, &EncodeOptions::corrected())).unwrap();
        assert_eq!(decoded.width, 7);
    }

    #[test]
    fn test_write_pgm_matches_encode() {
        let img = sample_image();
        let mut buffer = Vec::new();
        write_pgm(&img, &EncodeOptions::default(), &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), encode(&img));
    }

    #[test]
    fn test_write_pgm_propagates_io_error() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk full"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let result = write_pgm(&sample_image(), &EncodeOptions::default(), FailingWriter);
        assert!(matches!(result, Err(EncodeError::Io(_))));
    }

    #[test]
    fn test_options_presets() {
        assert_eq!(
            EncodeOptions::legacy(),
            EncodeOptions {
                dimensions: DimensionsMode::Legacy,
                preserve_comment: false,
            }
        );
        assert_eq!(EncodeOptions::corrected().dimensions, DimensionsMode::Corrected);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
