//! Text Measurement
//!
//! Clipping and justifying a content line to the content width.
//!
//! Widths are counted in `char`s. Outline glyphs and content are expected to
//! be single-column characters; wide or zero-width characters still count as
//! one cell here.

use super::fill::Anchor;
use crate::types::Edges;

/// Number of cells `s` occupies.
#[inline]
pub fn string_width(s: &str) -> usize {
    s.chars().count()
}

/// The first `width` characters of `text`.
///
/// Always keeps the head of the line, whatever the alignment.
pub fn truncate_text(text: &str, width: usize) -> &str {
    match text.char_indices().nth(width) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Clip `text` to `width` and pad it with spaces to exactly `width`
/// characters, placed according to the LEFT/RIGHT bits of `align`.
pub fn justify(text: &str, width: usize, align: Edges) -> String {
    let clipped = truncate_text(text, width);
    let space = width - string_width(clipped);
    let (before, after) = Anchor::horizontal(align).split(space);

    let mut out = String::with_capacity(clipped.len() + space);
    out.extend(std::iter::repeat_n(' ', before));
    out.push_str(clipped);
    out.extend(std::iter::repeat_n(' ', after));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_width() {
        assert_eq!(string_width(""), 0);
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width("╔═╗"), 3);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello", 5), "hello");
        assert_eq!(truncate_text("hello world", 5), "hello");
        assert_eq!(truncate_text("hello", 0), "");
        assert_eq!(truncate_text("", 3), "");
    }

    #[test]
    fn test_truncate_text_multibyte() {
        assert_eq!(truncate_text("äöüß", 2), "äö");
        assert_eq!(truncate_text("─┼─┼", 3), "─┼─");
    }

    #[test]
    fn test_justify_horizontal() {
        assert_eq!(justify("hi", 6, Edges::empty()), "  hi  ");
        assert_eq!(justify("hi", 6, Edges::LEFT), "hi    ");
        assert_eq!(justify("hi", 6, Edges::RIGHT), "    hi");
        assert_eq!(justify("hi", 6, Edges::HORIZONTAL), "  hi  ");
    }

    #[test]
    fn test_justify_odd_slack_goes_right() {
        assert_eq!(justify("ab", 5, Edges::empty()), " ab  ");
        assert_eq!(justify("abc", 4, Edges::empty()), "abc ");
    }

    #[test]
    fn test_justify_clips_head_regardless_of_alignment() {
        assert_eq!(justify("abcdefgh", 4, Edges::empty()), "abcd");
        assert_eq!(justify("abcdefgh", 4, Edges::RIGHT), "abcd");
        assert_eq!(justify("abcdefgh", 4, Edges::LEFT), "abcd");
    }

    #[test]
    fn test_justify_empty_line() {
        assert_eq!(justify("", 3, Edges::LEFT), "   ");
        assert_eq!(justify("", 0, Edges::empty()), "");
    }
}
