//! Stone dimensions and the per-object bound tables.
//!
//! Explicit edits are clamped into the active object's bounds. Values that
//! are not finite positive numbers are rejected outright.

use serde::{Deserialize, Serialize};

use crate::error::{DesignerError, DesignerResult};
use crate::stone::ObjectType;

/// One of the three stone measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Width,
    Height,
    Thickness,
}

impl Dimension {
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Width => "width",
            Dimension::Height => "height",
            Dimension::Thickness => "thickness",
        }
    }
}

/// Width, height and thickness of the stone in scene units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoneDimensions {
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
}

impl Default for StoneDimensions {
    fn default() -> Self {
        Self {
            width: 2.0,
            height: 2.0,
            thickness: 0.5,
        }
    }
}

impl StoneDimensions {
    pub fn get(&self, field: Dimension) -> f64 {
        match field {
            Dimension::Width => self.width,
            Dimension::Height => self.height,
            Dimension::Thickness => self.thickness,
        }
    }

    fn slot(&mut self, field: Dimension) -> &mut f64 {
        match field {
            Dimension::Width => &mut self.width,
            Dimension::Height => &mut self.height,
            Dimension::Thickness => &mut self.thickness,
        }
    }

    /// Store `value` clamped into `bounds`. Returns the stored value.
    pub fn set(
        &mut self,
        field: Dimension,
        value: f64,
        bounds: &DimensionBounds,
    ) -> DesignerResult<f64> {
        if !value.is_finite() || value <= 0.0 {
            return Err(DesignerError::validation(
                field.name(),
                format!("{} is not a positive number", value),
            ));
        }
        let clamped = bounds.range(field).clamp(value);
        if clamped != value {
            tracing::debug!("{} {} clamped to {}", field.name(), value, clamped);
        }
        *self.slot(field) = clamped;
        Ok(clamped)
    }

    /// Pull every measurement into `bounds`.
    pub fn clamp_to(&mut self, bounds: &DimensionBounds) {
        for field in [Dimension::Width, Dimension::Height, Dimension::Thickness] {
            let value = self.get(field);
            *self.slot(field) = bounds.range(field).clamp(value);
        }
    }
}

/// Inclusive `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Allowed ranges for each measurement of one object type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionBounds {
    pub width: Range,
    pub height: Range,
    pub thickness: Range,
}

const GRAVESTONE_BOUNDS: DimensionBounds = DimensionBounds {
    width: Range::new(15.0, 90.0),
    height: Range::new(15.0, 120.0),
    thickness: Range::new(0.1, 2.0),
};

const URN_BOUNDS: DimensionBounds = DimensionBounds {
    width: Range::new(0.2, 1.0),
    height: Range::new(0.2, 1.5),
    thickness: Range::new(0.1, 1.0),
};

const TABLE_SIGN_BOUNDS: DimensionBounds = DimensionBounds {
    width: Range::new(0.5, 3.0),
    height: Range::new(0.3, 2.0),
    thickness: Range::new(0.05, 0.5),
};

const DEFAULT_BOUNDS: DimensionBounds = DimensionBounds {
    width: Range::new(0.5, 5.0),
    height: Range::new(0.1, 2.0),
    thickness: Range::new(0.1, 2.0),
};

impl DimensionBounds {
    pub fn for_object(object: ObjectType) -> &'static DimensionBounds {
        match object {
            ObjectType::Gravestone => &GRAVESTONE_BOUNDS,
            ObjectType::Urn => &URN_BOUNDS,
            ObjectType::TableSign => &TABLE_SIGN_BOUNDS,
            ObjectType::Base => &DEFAULT_BOUNDS,
        }
    }

    pub fn range(&self, field: Dimension) -> Range {
        match field {
            Dimension::Width => self.width,
            Dimension::Height => self.height,
            Dimension::Thickness => self.thickness,
        }
    }
}

/// Gravestone catalogue size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

const SMALL_SIZES: &[(f64, f64)] = &[(40.0, 60.0), (45.0, 65.0)];
const MEDIUM_SIZES: &[(f64, f64)] = &[(60.0, 80.0), (65.0, 90.0)];
const LARGE_SIZES: &[(f64, f64)] = &[(80.0, 100.0), (90.0, 120.0)];

impl SizeClass {
    /// Catalogue entries as `(width, height)`, preferred first.
    pub fn sizes(&self) -> &'static [(f64, f64)] {
        match self {
            SizeClass::Small => SMALL_SIZES,
            SizeClass::Medium => MEDIUM_SIZES,
            SizeClass::Large => LARGE_SIZES,
        }
    }

    pub fn preset(&self) -> (f64, f64) {
        self.sizes()[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_to_bounds() {
        let bounds = DimensionBounds::for_object(ObjectType::Gravestone);
        let mut dims = StoneDimensions::default();

        let stored = dims.set(Dimension::Width, 200.0, bounds).expect("set");
        assert_eq!(stored, 90.0);
        assert_eq!(dims.width, 90.0);

        dims.set(Dimension::Width, 3.0, bounds).expect("set");
        assert_eq!(dims.width, 15.0);
    }

    #[test]
    fn test_rejects_non_positive() {
        let bounds = DimensionBounds::for_object(ObjectType::Urn);
        let mut dims = StoneDimensions::default();

        assert!(dims.set(Dimension::Height, 0.0, bounds).is_err());
        assert!(dims.set(Dimension::Height, -1.0, bounds).is_err());
        assert!(dims.set(Dimension::Height, f64::NAN, bounds).is_err());
        assert_eq!(dims, StoneDimensions::default());
    }

    #[test]
    fn test_clamp_to_urn() {
        let mut dims = StoneDimensions::default();
        dims.clamp_to(DimensionBounds::for_object(ObjectType::Urn));
        assert_eq!(dims.width, 1.0);
        assert_eq!(dims.height, 1.5);
        assert_eq!(dims.thickness, 0.5);
    }

    #[test]
    fn test_presets_within_gravestone_bounds() {
        let bounds = DimensionBounds::for_object(ObjectType::Gravestone);
        for class in [SizeClass::Small, SizeClass::Medium, SizeClass::Large] {
            for &(w, h) in class.sizes() {
                assert!(bounds.width.contains(w));
                assert!(bounds.height.contains(h));
            }
        }
        assert_eq!(SizeClass::Medium.preset(), (60.0, 80.0));
    }
}
