//! Layout Module
//!
//! Placement arithmetic for the content area of a rect:
//!
//! - [`fill`] - how slack rows/columns are split around content
//! - [`text_measure`] - clipping and justifying a single content line
//!
//! Both axes use the same tie-break: anchored to one edge hugs it, anchored
//! to both edges or neither centers, with the odd cell going after the
//! content.

mod fill;
mod text_measure;

pub use fill::*;
pub use text_measure::*;
