//! Row assembly.
//!
//! # Algorithm
//!
//! 1. Margin, border and padding rows are built once and repeated.
//! 2. Content rows: filler rows are split around the lines per the vertical
//!    anchor, lines past the content height are dropped.
//! 3. Each content line is clipped to the content width, justified per the
//!    horizontal anchor, then wrapped in padding, border and margin.
//!
//! Every row is exactly `full_width()` characters and there are always
//! `full_height()` rows.

use std::iter::repeat_n;

use crate::layout::{justify, vertical_fill};
use crate::rect::{cells, Rect};
use crate::types::Edges;

/// Left and right framing shared by every non-margin row.
struct Gutter {
    margin_left: usize,
    margin_right: usize,
    border_left: bool,
    border_right: bool,
}

impl Gutter {
    fn row(&self, left: char, body: &str, right: char) -> String {
        let mut row = String::with_capacity(self.margin_left + body.len() + self.margin_right);
        row.extend(repeat_n(' ', self.margin_left));
        if self.border_left {
            row.push(left);
        }
        row.push_str(body);
        if self.border_right {
            row.push(right);
        }
        row.extend(repeat_n(' ', self.margin_right));
        row
    }
}

/// Render `rect` around `lines`.
///
/// Total over every reachable `Rect` and any line sequence, including an
/// empty one. Lines beyond the content height and characters beyond the
/// content width are clipped, never reported.
///
/// The returned rows are freshly allocated; later changes to `rect` don't
/// affect them.
pub fn render<S: AsRef<str>>(rect: &Rect, lines: &[S]) -> Vec<String> {
    let border = rect.border();
    let align = rect.align();
    let outline = rect.outline();

    let dim = rect.dim();
    let (width, height) = (cells(dim.x), cells(dim.y));
    let padding = rect.padding();
    let (pad_left, pad_right) = (cells(padding.left), cells(padding.right));
    let margin = rect.margin();

    let inner = width + pad_left + pad_right;
    let full_width = rect.full_width();

    log::debug!(
        "render {}x{} rect: {} lines, {} clipped",
        width,
        height,
        lines.len(),
        lines.len().saturating_sub(height)
    );

    let gutter = Gutter {
        margin_left: cells(margin.left),
        margin_right: cells(margin.right),
        border_left: border.contains(Edges::LEFT),
        border_right: border.contains(Edges::RIGHT),
    };

    let vertical = outline.vertical();
    let edge: String = repeat_n(outline.horizontal(), inner).collect();
    let blank = gutter.row(vertical, &" ".repeat(inner), vertical);
    let margin_row = " ".repeat(full_width);

    let mut rows = Vec::with_capacity(rect.full_height());

    // Top
    rows.extend(repeat_n(margin_row.clone(), cells(margin.top)));
    if border.contains(Edges::TOP) {
        rows.push(gutter.row(outline.top_left(), &edge, outline.top_right()));
    }
    rows.extend(repeat_n(blank.clone(), cells(padding.top)));

    // Content
    let (top_fill, bottom_fill) = vertical_fill(height, lines.len(), align);
    let visible = &lines[..lines.len().min(height)];
    let content = repeat_n("", top_fill)
        .chain(visible.iter().map(|line| line.as_ref()))
        .chain(repeat_n("", bottom_fill));

    for line in content {
        let mut body = String::with_capacity(inner);
        body.extend(repeat_n(' ', pad_left));
        body.push_str(&justify(line, width, align));
        body.extend(repeat_n(' ', pad_right));
        rows.push(gutter.row(vertical, &body, vertical));
    }

    // Bottom
    rows.extend(repeat_n(blank, cells(padding.bottom)));
    if border.contains(Edges::BOTTOM) {
        rows.push(gutter.row(outline.bottom_left(), &edge, outline.bottom_right()));
    }
    rows.extend(repeat_n(margin_row, cells(margin.bottom)));

    rows
}
