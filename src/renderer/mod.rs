//! Renderer Module
//!
//! Turns a [`Rect`](crate::Rect) and its content lines into text rows.
//!
//! - [`render`] - pure row assembly, one `String` per output row
//! - [`draw`] - queue those rows onto a terminal at the rect's position
//!
//! # Row order
//!
//! ```text
//! top margin
//! top border          (if Edges::TOP)
//! top padding
//! content             (exactly dim.y rows)
//! bottom padding
//! bottom border       (if Edges::BOTTOM)
//! bottom margin
//! ```

mod rows;
mod terminal;

pub use rows::render;
pub use terminal::draw;
