use serde::{Deserialize, Serialize};

use super::Vec3;

pub const MIN_TEXT_HEIGHT: f64 = 0.1;
pub const MIN_TEXT_EXTRUSION: f64 = 0.01;

/// Engraving colours offered for text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    #[default]
    Gold,
    Black,
    White,
}

/// A block of extruded text placed on the stone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    pub id: String,
    pub text: String,
    #[serde(default = "default_font")]
    pub font: String,
    #[serde(default)]
    pub color: TextColor,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_extrusion")]
    pub extrusion: f64,
    pub position: Vec3,
    /// Wraps around a curved body instead of lying on a flat face. Fixed at
    /// creation from the object type.
    #[serde(default)]
    pub is_cylindrical: bool,
}

fn default_font() -> String {
    "helvetiker".to_string()
}

fn default_height() -> f64 {
    0.2
}

fn default_extrusion() -> f64 {
    0.02
}

/// Parameters for a new text element
#[derive(Debug, Clone, PartialEq)]
pub struct TextConfig {
    pub text: String,
    pub font: Option<String>,
    pub color: TextColor,
    pub height: f64,
    pub extrusion: f64,
}

impl TextConfig {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: None,
            color: TextColor::default(),
            height: default_height(),
            extrusion: default_extrusion(),
        }
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn with_color(mut self, color: TextColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }
}

impl TextElement {
    pub(crate) fn from_config(
        id: String,
        config: TextConfig,
        default_font: &str,
        position: Vec3,
        is_cylindrical: bool,
    ) -> Self {
        Self {
            id,
            text: config.text,
            font: config.font.unwrap_or_else(|| default_font.to_string()),
            color: config.color,
            height: config.height.max(MIN_TEXT_HEIGHT),
            extrusion: config.extrusion.max(MIN_TEXT_EXTRUSION),
            position,
            is_cylindrical,
        }
    }
}
