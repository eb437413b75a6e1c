//! # spark-rect
//!
//! Character-grid box layout and rendering.
//!
//! Given a content area, spacing, a border mask, an alignment mask and an
//! outline glyph set, spark-rect produces the exact text rows of that box:
//! margins, border, padding and aligned, clipped content.
//!
//! ## Architecture
//!
//! ```text
//! Rect (validated attributes) + content lines → render → Vec<String>
//!                                                      ↘ draw → terminal
//! ```
//!
//! Attributes are validated when they are set, so rendering cannot fail.
//! Content that doesn't fit is clipped, never reported.
//!
//! ## Modules
//!
//! - [`types`] - Geometry (`Vec2`, `Vec4`), `Edges` mask, `Outline` glyphs
//! - [`rect`] - The box model
//! - [`layout`] - Filler split and line justification
//! - [`renderer`] - Row assembly and terminal output
//! - [`slot`] - Reactive single-value holder
//! - [`config`] - Serde description of a rect

pub mod config;
pub mod error;
pub mod layout;
pub mod rect;
pub mod renderer;
pub mod slot;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::RectConfig;
pub use error::{SlotError, ValidationError};
pub use layout::{justify, truncate_text, vertical_fill, Anchor};
pub use rect::Rect;
pub use renderer::{draw, render};
pub use slot::Slot;
