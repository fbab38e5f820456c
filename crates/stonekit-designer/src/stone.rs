//! Stone object types, their texture catalogues, and surface placement.

use serde::{Deserialize, Serialize};

/// The product being designed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectType {
    #[default]
    Gravestone,
    Base,
    Urn,
    TableSign,
}

const STONE_TEXTURES: &[&str] = &["marble", "granite", "black-granite", "sandstone"];
const URN_TEXTURES: &[&str] = &["marble", "ceramic", "bronze", "wood"];
const SIGN_TEXTURES: &[&str] = &["marble", "granite", "wood", "slate"];

impl ObjectType {
    pub const ALL: [ObjectType; 4] = [
        ObjectType::Gravestone,
        ObjectType::Base,
        ObjectType::Urn,
        ObjectType::TableSign,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ObjectType::Gravestone => "gravestone",
            ObjectType::Base => "base",
            ObjectType::Urn => "urn",
            ObjectType::TableSign => "table-sign",
        }
    }

    /// Textures offered for this object, default first.
    pub fn textures(&self) -> &'static [&'static str] {
        match self {
            ObjectType::Gravestone | ObjectType::Base => STONE_TEXTURES,
            ObjectType::Urn => URN_TEXTURES,
            ObjectType::TableSign => SIGN_TEXTURES,
        }
    }

    pub fn default_texture(&self) -> &'static str {
        self.textures()[0]
    }

    pub fn accepts_texture(&self, texture: &str) -> bool {
        self.textures().contains(&texture)
    }

    /// Curved front face: text wraps around the body instead of lying flat.
    pub fn is_cylindrical(&self) -> bool {
        matches!(self, ObjectType::Urn)
    }

    /// Depth at which new text is placed.
    pub fn text_depth(&self) -> f64 {
        match self {
            ObjectType::Gravestone => 0.31,
            _ => 0.11,
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ObjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObjectType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| format!("unknown object type '{}'", s))
    }
}

/// Depth that puts an image flush against the front face of `object`.
pub fn z_offset(object: ObjectType, thickness: f64) -> f64 {
    match object {
        ObjectType::Gravestone | ObjectType::TableSign => thickness / 2.0 + 0.01,
        ObjectType::Base => 0.21,
        ObjectType::Urn => 0.2,
    }
}
