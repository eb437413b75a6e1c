//! Rect - the box model.
//!
//! Holds the geometry and style of a single box: position, content
//! dimension, padding, margin, border mask, alignment mask and outline
//! glyphs. Every mutator validates before committing, so a `Rect` that
//! exists is always renderable.
//!
//! # Example
//!
//! ```
//! use spark_rect::{Edges, Rect};
//!
//! let mut rect = Rect::new();
//! rect.set_dim((4, 1))?;
//! rect.set_border(Edges::ALL)?;
//! rect.set_padding((0, 0, 1, 1))?;
//!
//! assert_eq!(rect.full_width(), 8);
//! assert_eq!(
//!     rect.render(&["ab"]),
//!     vec!["╔══════╗", "║  ab  ║", "╚══════╝"],
//! );
//! # Ok::<(), spark_rect::ValidationError>(())
//! ```

use crate::error::ValidationError;
use crate::renderer;
use crate::types::{BorderStyle, Edges, Outline, Vec2, Vec4};

/// A single box: content area plus padding, border and margin around it.
///
/// Accessors return copies; nothing handed out aliases the rect's state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rect {
    align: Edges,
    border: Edges,
    outline: Outline,

    pos: Vec2,
    dim: Vec2,

    padding: Vec4,
    margin: Vec4,
}

/// Log and hand back a rejected mutation.
fn rejected(err: ValidationError) -> ValidationError {
    log::debug!("rect mutation rejected: {err}");
    err
}

impl Rect {
    /// Create a rect with zero masks, the double-line outline and zero
    /// geometry.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Alignment / Border
    // =========================================================================

    /// Edges the content is anchored to.
    pub fn align(&self) -> Edges {
        self.align
    }

    /// Set the alignment mask. Accepts an [`Edges`] value or a raw integer.
    pub fn set_align(&mut self, align: impl Into<i32>) -> Result<(), ValidationError> {
        self.align = Edges::from_mask("align", align.into()).map_err(rejected)?;
        log::trace!("rect align = {:?}", self.align);
        Ok(())
    }

    /// Edges that carry a border.
    pub fn border(&self) -> Edges {
        self.border
    }

    /// Set the border mask. Accepts an [`Edges`] value or a raw integer.
    pub fn set_border(&mut self, border: impl Into<i32>) -> Result<(), ValidationError> {
        self.border = Edges::from_mask("border", border.into()).map_err(rejected)?;
        log::trace!("rect border = {:?}", self.border);
        Ok(())
    }

    // =========================================================================
    // Outline
    // =========================================================================

    pub fn outline(&self) -> Outline {
        self.outline
    }

    /// Set the outline from a six-character definition, e.g. `"┌┐└┘│─"`.
    pub fn set_outline(&mut self, outline: &str) -> Result<(), ValidationError> {
        self.outline = Outline::parse(outline).map_err(rejected)?;
        log::trace!("rect outline = {}", self.outline);
        Ok(())
    }

    /// Use one of the named outline presets.
    pub fn set_border_style(&mut self, style: BorderStyle) {
        self.outline = style.into();
        log::trace!("rect outline = {}", self.outline);
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Top-left corner of the box on screen. Only terminal output reads it.
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn set_pos(&mut self, pos: impl Into<Vec2>) -> Result<(), ValidationError> {
        let pos = pos.into();
        if let Some(value) = [pos.x, pos.y].into_iter().find(|v| *v < 0) {
            return Err(rejected(ValidationError::Negative { field: "position", value }));
        }
        self.pos = pos;
        log::trace!("rect pos = {:?}", self.pos);
        Ok(())
    }

    /// Content dimension, `x` = width and `y` = height.
    pub fn dim(&self) -> Vec2 {
        self.dim
    }

    pub fn set_dim(&mut self, dim: impl Into<Vec2>) -> Result<(), ValidationError> {
        let dim = dim.into();
        if dim.x <= 0 || dim.y <= 0 {
            return Err(rejected(ValidationError::NonPositiveDimension {
                width: dim.x,
                height: dim.y,
            }));
        }
        self.dim = dim;
        log::trace!("rect dim = {:?}", self.dim);
        Ok(())
    }

    pub fn padding(&self) -> Vec4 {
        self.padding
    }

    pub fn set_padding(&mut self, padding: impl Into<Vec4>) -> Result<(), ValidationError> {
        let padding = padding.into();
        if let Some(value) = padding.first_negative() {
            return Err(rejected(ValidationError::Negative { field: "padding", value }));
        }
        self.padding = padding;
        log::trace!("rect padding = {:?}", self.padding);
        Ok(())
    }

    pub fn margin(&self) -> Vec4 {
        self.margin
    }

    pub fn set_margin(&mut self, margin: impl Into<Vec4>) -> Result<(), ValidationError> {
        let margin = margin.into();
        if let Some(value) = margin.first_negative() {
            return Err(rejected(ValidationError::Negative { field: "margin", value }));
        }
        self.margin = margin;
        log::trace!("rect margin = {:?}", self.margin);
        Ok(())
    }

    // =========================================================================
    // Builder
    // =========================================================================

    pub fn with_align(mut self, align: impl Into<i32>) -> Result<Self, ValidationError> {
        self.set_align(align)?;
        Ok(self)
    }

    pub fn with_border(mut self, border: impl Into<i32>) -> Result<Self, ValidationError> {
        self.set_border(border)?;
        Ok(self)
    }

    pub fn with_outline(mut self, outline: &str) -> Result<Self, ValidationError> {
        self.set_outline(outline)?;
        Ok(self)
    }

    pub fn with_pos(mut self, pos: impl Into<Vec2>) -> Result<Self, ValidationError> {
        self.set_pos(pos)?;
        Ok(self)
    }

    pub fn with_dim(mut self, dim: impl Into<Vec2>) -> Result<Self, ValidationError> {
        self.set_dim(dim)?;
        Ok(self)
    }

    pub fn with_padding(mut self, padding: impl Into<Vec4>) -> Result<Self, ValidationError> {
        self.set_padding(padding)?;
        Ok(self)
    }

    pub fn with_margin(mut self, margin: impl Into<Vec4>) -> Result<Self, ValidationError> {
        self.set_margin(margin)?;
        Ok(self)
    }

    // =========================================================================
    // Derived sizes
    // =========================================================================

    /// Total columns occupied: content, padding, border and margin.
    pub fn full_width(&self) -> usize {
        let w = i64::from(self.dim.x)
            + self.margin.horizontal()
            + self.padding.horizontal()
            + self.border.count(Edges::LEFT)
            + self.border.count(Edges::RIGHT);
        total(w)
    }

    /// Total rows occupied: content, padding, border and margin.
    pub fn full_height(&self) -> usize {
        let h = i64::from(self.dim.y)
            + self.margin.vertical()
            + self.padding.vertical()
            + self.border.count(Edges::TOP)
            + self.border.count(Edges::BOTTOM);
        total(h)
    }

    /// Render the box around `lines`. See [`renderer::render`].
    pub fn render<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        renderer::render(self, lines)
    }
}

/// Validated geometry is never negative; this only converts.
#[inline]
pub(crate) fn cells(n: i32) -> usize {
    usize::try_from(n).unwrap_or(0)
}

/// Sum of validated components. Saturates only where `usize` is narrower
/// than the sum.
#[inline]
fn total(n: i64) -> usize {
    usize::try_from(n.max(0)).unwrap_or(usize::MAX)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let rect = Rect::new();
        assert_eq!(rect.align(), Edges::empty());
        assert_eq!(rect.border(), Edges::empty());
        assert_eq!(rect.outline().to_string(), "╔╗╚╝║═");
        assert_eq!(rect.pos(), Vec2::ZERO);
        assert_eq!(rect.dim(), Vec2::ZERO);
        assert_eq!(rect.padding(), Vec4::ZERO);
        assert_eq!(rect.margin(), Vec4::ZERO);
        assert_eq!(rect.full_width(), 0);
        assert_eq!(rect.full_height(), 0);
    }

    #[test]
    fn test_masks_accept_every_4bit_value() {
        let mut rect = Rect::new();
        for m in 0..=15 {
            rect.set_align(m).unwrap();
            rect.set_border(m).unwrap();
            assert_eq!(i32::from(rect.align()), m);
            assert_eq!(i32::from(rect.border()), m);
        }
    }

    #[rstest]
    #[case(-1)]
    #[case(16)]
    #[case(100)]
    fn test_masks_reject_out_of_range_and_keep_prior(#[case] m: i32) {
        let mut rect = Rect::new();
        rect.set_align(Edges::LEFT).unwrap();
        rect.set_border(Edges::ALL).unwrap();

        assert!(rect.set_align(m).is_err());
        assert!(rect.set_border(m).is_err());
        assert_eq!(rect.align(), Edges::LEFT);
        assert_eq!(rect.border(), Edges::ALL);
    }

    #[rstest]
    #[case((0, 5))]
    #[case((5, 0))]
    #[case((-1, 5))]
    #[case((5, -3))]
    fn test_dim_rejects_non_positive(#[case] dim: (i32, i32)) {
        let mut rect = Rect::new();
        rect.set_dim((2, 2)).unwrap();
        assert_eq!(
            rect.set_dim(dim),
            Err(ValidationError::NonPositiveDimension { width: dim.0, height: dim.1 })
        );
        assert_eq!(rect.dim(), Vec2::new(2, 2));
    }

    #[test]
    fn test_dim_accepts_unit() {
        let mut rect = Rect::new();
        rect.set_dim((1, 1)).unwrap();
        assert_eq!(rect.dim(), Vec2::new(1, 1));
    }

    #[test]
    fn test_outline_validation() {
        let mut rect = Rect::new();
        assert!(rect.set_outline("").is_err());
        assert!(rect.set_outline("+++++").is_err());
        assert!(rect.set_outline("+++++++").is_err());
        assert_eq!(rect.outline(), Outline::default());

        rect.set_outline("++++|-").unwrap();
        assert_eq!(rect.outline(), Outline::from(BorderStyle::Ascii));

        rect.set_border_style(BorderStyle::Rounded);
        assert_eq!(rect.outline().top_left(), '╭');
    }

    #[test]
    fn test_spacing_rejects_negative() {
        let mut rect = Rect::new();
        rect.set_padding((1, 1, 1, 1)).unwrap();
        rect.set_margin((2, 2, 2, 2)).unwrap();

        assert_eq!(
            rect.set_padding((0, 0, -1, 0)),
            Err(ValidationError::Negative { field: "padding", value: -1 })
        );
        assert_eq!(
            rect.set_margin((0, -4, 0, 0)),
            Err(ValidationError::Negative { field: "margin", value: -4 })
        );
        assert_eq!(rect.padding(), Vec4::uniform(1));
        assert_eq!(rect.margin(), Vec4::uniform(2));
    }

    #[test]
    fn test_pos_rejects_negative() {
        let mut rect = Rect::new();
        rect.set_pos((3, 7)).unwrap();
        assert!(rect.set_pos((-1, 0)).is_err());
        assert_eq!(rect.pos(), Vec2::new(3, 7));
    }

    #[test]
    fn test_accessors_return_copies() {
        let mut rect = Rect::new();
        rect.set_padding((1, 2, 3, 4)).unwrap();

        let mut padding = rect.padding();
        padding.top = 99;
        assert_eq!(rect.padding().top, 1);
    }

    #[test]
    fn test_full_size_formulas() {
        for border in 0..=15 {
            let rect = Rect::new()
                .with_dim((7, 3))
                .and_then(|r| r.with_padding((1, 2, 3, 4)))
                .and_then(|r| r.with_margin((5, 6, 7, 8)))
                .and_then(|r| r.with_border(border))
                .unwrap();

            let bt = (border & 1 != 0) as usize;
            let bb = (border & 2 != 0) as usize;
            let bl = (border & 4 != 0) as usize;
            let br = (border & 8 != 0) as usize;

            assert_eq!(rect.full_width(), 7 + 7 + 8 + 3 + 4 + bl + br);
            assert_eq!(rect.full_height(), 3 + 5 + 6 + 1 + 2 + bt + bb);
        }
    }

    #[test]
    fn test_full_size_near_i32_limit() {
        let rect = Rect::new()
            .with_dim((1, 1))
            .and_then(|r| r.with_margin((0, 0, i32::MAX, 1)))
            .unwrap();
        assert_eq!(rect.full_width(), i32::MAX as usize + 2);
        assert_eq!(rect.full_height(), 1);

        let rect = Rect::new()
            .with_dim((i32::MAX, i32::MAX))
            .and_then(|r| r.with_padding(Vec4::uniform(i32::MAX)))
            .and_then(|r| r.with_margin(Vec4::uniform(i32::MAX)))
            .and_then(|r| r.with_border(Edges::ALL))
            .unwrap();
        let expected = 5 * i32::MAX as usize + 2;
        assert_eq!(rect.full_width(), expected);
        assert_eq!(rect.full_height(), expected);
    }

    #[test]
    fn test_builder_stops_at_first_error() {
        let result = Rect::new()
            .with_dim((4, 4))
            .and_then(|r| r.with_align(20))
            .and_then(|r| r.with_border(Edges::ALL));
        assert_eq!(
            result,
            Err(ValidationError::MaskOutOfRange { field: "align", value: 20 })
        );
    }
}
