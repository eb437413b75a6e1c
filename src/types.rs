//! Core types for spark-rect.
//!
//! Geometry pairs and quads, the edge mask shared by borders and alignment,
//! and the outline glyph sets used to draw borders.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Vec2 / Vec4
// =============================================================================

/// Ordered pair. Used for positions (`x`, `y`) and content dimensions
/// (`x` = width, `y` = height).
///
/// Components are signed so that out-of-range input reaches the validating
/// mutators on [`Rect`](crate::Rect) instead of being unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Vec2 {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 2]> for Vec2 {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2> for [i32; 2] {
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

/// Spacing on four sides, ordered (top, bottom, left, right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec4 {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

impl Vec4 {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    pub const fn new(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        Self { top, bottom, left, right }
    }

    /// Same spacing on every side.
    pub const fn uniform(n: i32) -> Self {
        Self::new(n, n, n, n)
    }

    /// `left + right`, widened so two `i32::MAX` sides still add up.
    #[inline]
    pub const fn horizontal(&self) -> i64 {
        self.left as i64 + self.right as i64
    }

    /// `top + bottom`, widened like [`horizontal`](Self::horizontal).
    #[inline]
    pub const fn vertical(&self) -> i64 {
        self.top as i64 + self.bottom as i64
    }

    /// First negative component, in (top, bottom, left, right) order.
    pub(crate) fn first_negative(&self) -> Option<i32> {
        [self.top, self.bottom, self.left, self.right]
            .into_iter()
            .find(|v| *v < 0)
    }
}

impl From<(i32, i32, i32, i32)> for Vec4 {
    fn from((top, bottom, left, right): (i32, i32, i32, i32)) -> Self {
        Self::new(top, bottom, left, right)
    }
}

impl From<[i32; 4]> for Vec4 {
    fn from([top, bottom, left, right]: [i32; 4]) -> Self {
        Self::new(top, bottom, left, right)
    }
}

impl From<Vec4> for [i32; 4] {
    fn from(v: Vec4) -> Self {
        [v.top, v.bottom, v.left, v.right]
    }
}

// =============================================================================
// Edges (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// 4-bit edge mask.
    ///
    /// A rect carries two of these: one says which edges get a border, the
    /// other which edges content is anchored to. Anchoring to both edges of
    /// an axis, or to neither, centers on that axis.
    ///
    /// Combine with bitwise OR: `Edges::TOP | Edges::LEFT`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Edges: u8 {
        const TOP = 0b0001;
        const BOTTOM = 0b0010;
        const LEFT = 0b0100;
        const RIGHT = 0b1000;

        const VERTICAL = Self::TOP.bits() | Self::BOTTOM.bits();
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        const ALL = Self::VERTICAL.bits() | Self::HORIZONTAL.bits();
    }
}

impl Edges {
    /// Validate a raw mask. Anything outside `0..=15` is rejected.
    pub fn from_mask(field: &'static str, value: i32) -> Result<Self, ValidationError> {
        u8::try_from(value)
            .ok()
            .and_then(Self::from_bits)
            .ok_or(ValidationError::MaskOutOfRange {
                field,
                value: value.into(),
            })
    }

    /// 1 if `edge` is set, else 0. Handy for size arithmetic.
    #[inline]
    pub(crate) fn count(&self, edge: Edges) -> i64 {
        i64::from(self.contains(edge))
    }
}

impl From<Edges> for i32 {
    fn from(e: Edges) -> Self {
        i32::from(e.bits())
    }
}

// =============================================================================
// Outline
// =============================================================================

/// The six glyphs a border is drawn with.
///
/// Positional: top-left, top-right, bottom-left, bottom-right, vertical edge,
/// horizontal edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outline {
    glyphs: [char; 6],
}

impl Outline {
    pub const fn new(
        top_left: char,
        top_right: char,
        bottom_left: char,
        bottom_right: char,
        vertical: char,
        horizontal: char,
    ) -> Self {
        Self {
            glyphs: [top_left, top_right, bottom_left, bottom_right, vertical, horizontal],
        }
    }

    /// Parse a six-character outline definition such as `"╔╗╚╝║═"`.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let mut glyphs = [' '; 6];
        let mut len = 0;
        for c in s.chars() {
            if len < 6 {
                glyphs[len] = c;
            }
            len += 1;
        }
        if len != 6 {
            return Err(ValidationError::OutlineLength { len });
        }
        Ok(Self { glyphs })
    }

    #[inline]
    pub const fn top_left(&self) -> char {
        self.glyphs[0]
    }

    #[inline]
    pub const fn top_right(&self) -> char {
        self.glyphs[1]
    }

    #[inline]
    pub const fn bottom_left(&self) -> char {
        self.glyphs[2]
    }

    #[inline]
    pub const fn bottom_right(&self) -> char {
        self.glyphs[3]
    }

    #[inline]
    pub const fn vertical(&self) -> char {
        self.glyphs[4]
    }

    #[inline]
    pub const fn horizontal(&self) -> char {
        self.glyphs[5]
    }
}

impl Default for Outline {
    fn default() -> Self {
        BorderStyle::Double.into()
    }
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.glyphs.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl FromStr for Outline {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// =============================================================================
// Border Styles
// =============================================================================

/// Named outline presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// ─ │ ┌ ┐ └ ┘
    Single,
    /// ═ ║ ╔ ╗ ╚ ╝
    #[default]
    Double,
    /// ─ │ ╭ ╮ ╰ ╯
    Rounded,
    /// ━ ┃ ┏ ┓ ┗ ┛
    Bold,
    /// ┄ ┆ ┌ ┐ └ ┘
    Dashed,
    /// · · · · · ·
    Dotted,
    /// - | + + + +
    Ascii,
    /// █ █ █ █ █ █
    Block,
    /// ═ │ ╒ ╕ ╘ ╛ (double horizontal, single vertical)
    DoubleHorz,
    /// ─ ║ ╓ ╖ ╙ ╜ (single horizontal, double vertical)
    DoubleVert,
}

impl BorderStyle {
    /// Outline definition string for this style, in [`Outline`] order.
    pub const fn glyphs(&self) -> &'static str {
        match self {
            Self::Single => "┌┐└┘│─",
            Self::Double => "╔╗╚╝║═",
            Self::Rounded => "╭╮╰╯│─",
            Self::Bold => "┏┓┗┛┃━",
            Self::Dashed => "┌┐└┘┆┄",
            Self::Dotted => "······",
            Self::Ascii => "++++|-",
            Self::Block => "██████",
            Self::DoubleHorz => "╒╕╘╛│═",
            Self::DoubleVert => "╓╖╙╜║─",
        }
    }
}

impl From<BorderStyle> for Outline {
    fn from(style: BorderStyle) -> Self {
        let mut glyphs = [' '; 6];
        for (slot, c) in glyphs.iter_mut().zip(style.glyphs().chars()) {
            *slot = c;
        }
        Self { glyphs }
    }
}

// =============================================================================
// Tests
// =============================================================================
