//! Terminal output.
//!
//! Places rendered rows on screen at the rect's position using crossterm
//! cursor commands. Commands are queued and flushed once, so a box lands in
//! a single write.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;

use super::rows::render;
use crate::rect::Rect;

/// Render `rect` around `lines` and draw it into `out`, row `i` at
/// `(pos.x, pos.y + i)`.
///
/// Coordinates past the terminal's `u16` range are clamped.
pub fn draw<W, S>(rect: &Rect, lines: &[S], out: &mut W) -> io::Result<()>
where
    W: Write,
    S: AsRef<str>,
{
    let pos = rect.pos();
    let x = clamp(i64::from(pos.x));

    for (i, row) in render(rect, lines).iter().enumerate() {
        let y = clamp(i64::from(pos.y).saturating_add(i as i64));
        queue!(out, MoveTo(x, y), Print(row))?;
    }

    out.flush()
}

#[inline]
fn clamp(n: i64) -> u16 {
    u16::try_from(n.max(0)).unwrap_or(u16::MAX)
}
