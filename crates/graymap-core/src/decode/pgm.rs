//! Line-oriented "P2" parser.
//!
//! Input is split on `\n` only. A CR left on the end of a line stays attached:
//! the format tag keeps it verbatim, while the numeric fields are tokenised on
//! whitespace and therefore tolerate it.

use log::debug;

use super::types::FormatError;
use crate::raster::RasterImage;

/// Number of lines before the pixel block (tag, comment, dimensions, max gray).
pub const HEADER_LINES: usize = 4;

/// Decode plain-text PGM content.
///
/// # Errors
///
/// Returns an error if:
/// - there are fewer than [`HEADER_LINES`] lines
/// - the dimensions line is not exactly two non-negative integers
/// - the max gray line is not exactly one non-negative integer
/// - a pixel token is not an integer
///
/// # Example
///
/// ```
/// use graymap_core::decode::decode;
///
/// let image = decode("P2\n# demo\n2  2\n255\n10 20\n30 40\n").unwrap();
/// assert_eq!(image.pixels, vec![10, 20, 30, 40]);
/// assert_eq!(image.layout, vec![2, 2]);
/// ```
pub fn decode(text: &str) -> Result<RasterImage, FormatError> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    // A final newline does not introduce an extra pixel line.
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    if lines.len() < HEADER_LINES {
        return Err(FormatError::MissingHeader { found: lines.len() });
    }

    let (height, width) = parse_dimensions(lines[2])?;
    let max_gray = parse_max_gray(lines[3])?;

    let body = &lines[HEADER_LINES..];
    let mut pixels = Vec::new();
    let mut layout = Vec::with_capacity(body.len());
    for (offset, line) in body.iter().enumerate() {
        let before = pixels.len();
        for token in line.split_whitespace() {
            let value = token
                .parse::<i32>()
                .map_err(|_| FormatError::InvalidPixel {
                    line: HEADER_LINES + offset + 1,
                    token: token.to_string(),
                })?;
            pixels.push(value);
        }
        layout.push(pixels.len() - before);
    }

    debug!(
        "decoded {} {}x{} image: {} pixels on {} lines",
        lines[0],
        height,
        width,
        pixels.len(),
        layout.len()
    );

    Ok(RasterImage {
        magic: lines[0].to_string(),
        comment: lines[1].to_string(),
        width,
        height,
        max_gray,
        pixels,
        layout,
    })
}

/// Decode plain-text PGM content from raw bytes.
///
/// The bytes must be UTF-8 (plain ASCII in practice).
pub fn decode_bytes(bytes: &[u8]) -> Result<RasterImage, FormatError> {
    let text = std::str::from_utf8(bytes).map_err(|_| FormatError::InvalidEncoding)?;
    decode(text)
}

/// Parse the dimensions line. The first token is the height, the second the width.
fn parse_dimensions(line: &str) -> Result<(u32, u32), FormatError> {
    let invalid = || FormatError::InvalidDimensions(line.to_string());
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [first, second] => {
            let height = first.parse::<u32>().map_err(|_| invalid())?;
            let width = second.parse::<u32>().map_err(|_| invalid())?;
            Ok((height, width))
        }
        _ => Err(invalid()),
    }
}

fn parse_max_gray(line: &str) -> Result<u32, FormatError> {
    let invalid = || FormatError::InvalidMaxGray(line.to_string());
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [value] => value.parse::<u32>().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}
