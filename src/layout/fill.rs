//! Filler split.
//!
//! Given the slack on one axis and the alignment mask, decide how many
//! filler cells go before and after the content.

use crate::types::Edges;

/// Where content sits on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    /// Hug the leading edge (top or left).
    Start,
    /// Hug the trailing edge (bottom or right).
    End,
    /// Center. Used for both edges set as well as neither.
    #[default]
    Center,
}

impl Anchor {
    fn from_bits(lead: bool, trail: bool) -> Self {
        match (lead, trail) {
            (true, false) => Self::Start,
            (false, true) => Self::End,
            _ => Self::Center,
        }
    }

    /// Vertical anchor from the TOP/BOTTOM bits.
    pub fn vertical(align: Edges) -> Self {
        Self::from_bits(align.contains(Edges::TOP), align.contains(Edges::BOTTOM))
    }

    /// Horizontal anchor from the LEFT/RIGHT bits.
    pub fn horizontal(align: Edges) -> Self {
        Self::from_bits(align.contains(Edges::LEFT), align.contains(Edges::RIGHT))
    }

    /// Split `space` filler cells into (before, after).
    ///
    /// Centering floors the leading half; the remainder goes after.
    pub fn split(self, space: usize) -> (usize, usize) {
        match self {
            Self::Start => (0, space),
            Self::End => (space, 0),
            Self::Center => {
                let before = space / 2;
                (before, space - before)
            }
        }
    }
}

/// Filler rows above and below `lines` content rows in a box `height` rows
/// tall.
///
/// Overflowing content gets no filler at all, whatever the anchor.
pub fn vertical_fill(height: usize, lines: usize, align: Edges) -> (usize, usize) {
    match height.checked_sub(lines) {
        Some(space) => Anchor::vertical(align).split(space),
        None => (0, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_from_edges() {
        assert_eq!(Anchor::vertical(Edges::TOP), Anchor::Start);
        assert_eq!(Anchor::vertical(Edges::BOTTOM), Anchor::End);
        assert_eq!(Anchor::vertical(Edges::VERTICAL), Anchor::Center);
        assert_eq!(Anchor::vertical(Edges::empty()), Anchor::Center);
        // horizontal bits don't affect the vertical axis
        assert_eq!(Anchor::vertical(Edges::LEFT | Edges::TOP), Anchor::Start);

        assert_eq!(Anchor::horizontal(Edges::LEFT), Anchor::Start);
        assert_eq!(Anchor::horizontal(Edges::RIGHT), Anchor::End);
        assert_eq!(Anchor::horizontal(Edges::ALL), Anchor::Center);
    }

    #[test]
    fn test_vertical_fill_centered() {
        assert_eq!(vertical_fill(5, 3, Edges::empty()), (1, 1));
        assert_eq!(vertical_fill(5, 2, Edges::empty()), (1, 2));
        assert_eq!(vertical_fill(5, 2, Edges::VERTICAL), (1, 2));
        assert_eq!(vertical_fill(4, 0, Edges::empty()), (2, 2));
    }

    #[test]
    fn test_vertical_fill_anchored() {
        assert_eq!(vertical_fill(5, 2, Edges::TOP), (0, 3));
        assert_eq!(vertical_fill(5, 2, Edges::BOTTOM), (3, 0));
    }

    #[test]
    fn test_vertical_fill_overflow() {
        assert_eq!(vertical_fill(3, 5, Edges::empty()), (0, 0));
        assert_eq!(vertical_fill(3, 5, Edges::BOTTOM), (0, 0));
        assert_eq!(vertical_fill(3, 3, Edges::TOP), (0, 0));
    }
}
