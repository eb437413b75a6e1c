//! Rect configuration.
//!
//! A plain, serde-friendly description of a rect. Masks are raw integers and
//! geometry uses arrays, so a config reads naturally in JSON or TOML:
//!
//! ```json
//! { "border": 15, "dim": [20, 3], "padding": [0, 0, 1, 1], "outline": "┌┐└┘│─" }
//! ```
//!
//! Converting into a [`Rect`] runs every field through the validating
//! mutators; the first invalid field is reported.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::rect::Rect;
use crate::types::Outline;

/// Serializable rect attributes. Missing fields take the rect defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectConfig {
    pub align: i32,
    pub border: i32,
    pub outline: String,
    pub pos: [i32; 2],
    /// `None` keeps the default zero-sized content area.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dim: Option<[i32; 2]>,
    pub padding: [i32; 4],
    pub margin: [i32; 4],
}

impl Default for RectConfig {
    fn default() -> Self {
        Rect::new().to_config()
    }
}

impl TryFrom<RectConfig> for Rect {
    type Error = ValidationError;

    fn try_from(config: RectConfig) -> Result<Self, Self::Error> {
        Rect::try_from(&config)
    }
}

impl TryFrom<&RectConfig> for Rect {
    type Error = ValidationError;

    fn try_from(config: &RectConfig) -> Result<Self, Self::Error> {
        let mut rect = Rect::new()
            .with_align(config.align)?
            .with_border(config.border)?
            .with_outline(&config.outline)?
            .with_pos(config.pos)?
            .with_padding(config.padding)?
            .with_margin(config.margin)?;
        if let Some(dim) = config.dim {
            rect.set_dim(dim)?;
        }
        Ok(rect)
    }
}

impl Rect {
    /// Snapshot this rect as a config.
    pub fn to_config(&self) -> RectConfig {
        let dim = self.dim();
        RectConfig {
            align: self.align().into(),
            border: self.border().into(),
            outline: self.outline().to_string(),
            pos: self.pos().into(),
            dim: (dim.x > 0 && dim.y > 0).then(|| dim.into()),
            padding: self.padding().into(),
            margin: self.margin().into(),
        }
    }
}

impl From<&Rect> for RectConfig {
    fn from(rect: &Rect) -> Self {
        rect.to_config()
    }
}

impl RectConfig {
    /// Outline as a typed value, if the string is well formed.
    pub fn outline(&self) -> Result<Outline, ValidationError> {
        Outline::parse(&self.outline)
    }
}
