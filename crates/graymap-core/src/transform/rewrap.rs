//! Greedy re-flow of pixel tokens into bounded-width text lines.
//!
//! # Algorithm
//!
//! All tokens are concatenated into one stream and packed greedily. A running
//! counter accumulates `token.len() + 2` for every token placed on the current
//! line. Before a token is placed, the line is flushed if the counter is
//! already past [`MAX_LINE_WIDTH`]:
//!
//! ```text
//! for token in stream:
//!     if counter > 70: flush line, counter = 0
//!     counter += len(token) + 2
//!     append token
//! ```
//!
//! The check runs before the token is added, so a rendered line can run past
//! 70 characters by up to one token. Output produced by legacy PGM writers
//! depends on this exact ordering.

/// Counter limit that triggers a line break.
pub const MAX_LINE_WIDTH: usize = 70;

/// Separator placed between tokens on a line.
pub const SEPARATOR: &str = "  ";

/// Re-flow whitespace-separated text lines into lines of bounded width.
///
/// Token order is preserved; the input line boundaries are discarded.
/// Output lines join their tokens with [`SEPARATOR`] and carry no trailing
/// separator. Lines holding no tokens disappear.
///
/// # Example
///
/// ```
/// use graymap_core::transform::rewrap;
///
/// let lines = rewrap(&["1 2", "3"]);
/// assert_eq!(lines, vec!["1  2  3"]);
/// ```
pub fn rewrap<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let tokens: Vec<&str> = lines
        .iter()
        .flat_map(|line| line.as_ref().split_whitespace())
        .collect();

    let mut rest = tokens.as_slice();
    pack(tokens.iter().map(|token| token.len()))
        .into_iter()
        .map(|count| {
            let (line, tail) = rest.split_at(count);
            rest = tail;
            line.join(SEPARATOR)
        })
        .collect()
}

/// Compute the line layout (pixels per line) for a flat pixel sequence.
///
/// Produces the same grouping [`rewrap`] would for the rendered values.
pub fn wrap_layout(pixels: &[i32]) -> Vec<usize> {
    pack(pixels.iter().map(|&v| rendered_len(v)))
}

/// Greedy packing over token lengths; returns the token count of each line.
fn pack<I: IntoIterator<Item = usize>>(lengths: I) -> Vec<usize> {
    let mut counts = Vec::new();
    let mut counter = 0usize;
    let mut on_line = 0usize;

    for len in lengths {
        if counter > MAX_LINE_WIDTH {
            counts.push(on_line);
            counter = 0;
            on_line = 0;
        }
        counter += len + SEPARATOR.len();
        on_line += 1;
    }

    if on_line > 0 {
        counts.push(on_line);
    }
    counts
}

/// Number of characters `value` takes when written in decimal.
#[inline]
fn rendered_len(value: i32) -> usize {
    let mut magnitude = value.unsigned_abs();
    let mut digits = 1;
    while magnitude >= 10 {
        magnitude /= 10;
        digits += 1;
    }
    digits + usize::from(value < 0)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating single-spaced pixel text lines, some empty.
    fn lines_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(
            prop::collection::vec(0i32..=255, 0..40).prop_map(|values| {
                values
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            }),
            0..20,
        )
    }

    proptest! {
        /// Property: Re-flowing already re-flowed lines is a fixed point.
        #[test]
        fn prop_rewrap_fixed_point(lines in lines_strategy()) {
            let once = rewrap(&lines);
            let twice = rewrap(&once);
            prop_assert_eq!(once, twice);
        }

        /// Property: Token order and content survive re-flow.
        #[test]
        fn prop_rewrap_preserves_tokens(lines in lines_strategy()) {
            let before: Vec<String> = lines
                .iter()
                .flat_map(|l| l.split_whitespace().map(str::to_string))
                .collect();
            let after: Vec<String> = rewrap(&lines)
                .iter()
                .flat_map(|l| l.split_whitespace().map(str::to_string))
                .collect();
            prop_assert_eq!(before, after);
        }

        /// Property: A line runs past the limit by at most one token.
        #[test]
        fn prop_line_width_bounded(lines in lines_strategy()) {
            for line in rewrap(&lines) {
                let tokens: Vec<&str> = line.split(SEPARATOR).collect();
                let without_last = tokens[..tokens.len() - 1]
                    .iter()
                    .map(|t| t.len() + SEPARATOR.len())
                    .sum::<usize>();
                prop_assert!(without_last <= MAX_LINE_WIDTH);
                prop_assert!(!line.ends_with(' '));
            }
        }

        /// Property: Layout covers every pixel exactly once.
        #[test]
        fn prop_layout_covers_pixels(pixels in prop::collection::vec(any::<i32>(), 0..500)) {
            let layout = wrap_layout(&pixels);
            prop_assert_eq!(layout.iter().sum::<usize>(), pixels.len());
            prop_assert!(layout.iter().all(|&count| count > 0));
        }
    }
}
