//! Object type, texture and dimensions.
//!
//! Image depth is derived from the object and its thickness, so any change
//! here moves every image back onto the face.

use super::DesignerState;
use crate::dimensions::{Dimension, DimensionBounds, SizeClass};
use crate::error::{DesignerError, DesignerResult};
use crate::geometry::{surface_point, SurfacePlacement};
use crate::stone::{self, ObjectType};

impl DesignerState {
    /// Current surface depth for images.
    pub fn z_offset(&self) -> f64 {
        stone::z_offset(self.object_type, self.dimensions.thickness)
    }

    pub fn bounds(&self) -> &'static DimensionBounds {
        DimensionBounds::for_object(self.object_type)
    }

    /// Switch the product. An unavailable texture falls back to the new
    /// object's default and the dimensions are pulled into its bounds.
    pub fn set_object_type(&mut self, object_type: ObjectType) {
        if object_type == self.object_type {
            return;
        }
        self.object_type = object_type;
        if !object_type.accepts_texture(&self.texture) {
            tracing::debug!(
                "Texture {} not offered for {}, using {}",
                self.texture,
                object_type,
                object_type.default_texture()
            );
            self.texture = object_type.default_texture().to_string();
        }
        self.dimensions.clamp_to(self.bounds());
        self.recompute_image_depth();
        self.touch();
        tracing::debug!("Object type set to {}", object_type);
    }

    pub fn set_texture(&mut self, texture: &str) -> DesignerResult<()> {
        if !self.object_type.accepts_texture(texture) {
            return Err(self.reject(DesignerError::validation(
                "texture",
                format!("{} is not offered for {}", texture, self.object_type),
            )));
        }
        self.texture = texture.to_string();
        self.touch();
        Ok(())
    }

    /// Set one measurement, clamped into the object's bounds. Returns the
    /// value stored.
    pub fn set_dimension(&mut self, field: Dimension, value: f64) -> DesignerResult<f64> {
        let bounds = self.bounds();
        match self.dimensions.set(field, value, bounds) {
            Ok(stored) => {
                self.recompute_image_depth();
                self.touch();
                Ok(stored)
            }
            Err(e) => Err(self.reject(e)),
        }
    }

    /// Apply the first catalogue size of `class`. Gravestones only.
    pub fn apply_preset_size(&mut self, class: SizeClass) -> DesignerResult<()> {
        if self.object_type != ObjectType::Gravestone {
            return Err(self.reject(DesignerError::validation(
                "size",
                format!("presets are not available for {}", self.object_type),
            )));
        }
        let (width, height) = class.preset();
        let bounds = self.bounds();
        let mut dimensions = self.dimensions;
        dimensions.set(Dimension::Width, width, bounds)?;
        dimensions.set(Dimension::Height, height, bounds)?;
        self.dimensions = dimensions;
        self.recompute_image_depth();
        self.touch();
        Ok(())
    }

    /// Where text `index` sits on the stone, wrapping around the body of a
    /// cylindrical object.
    pub fn text_placement(&self, index: usize) -> Option<SurfacePlacement> {
        let text = self.texts.get(index)?;
        Some(surface_point(
            text.position,
            text.is_cylindrical,
            self.dimensions.width / 2.0,
        ))
    }

    pub fn image_placement(&self, index: usize) -> Option<SurfacePlacement> {
        let image = self.images.get(index)?;
        Some(surface_point(
            image.position,
            self.object_type.is_cylindrical(),
            self.dimensions.width / 2.0,
        ))
    }

    pub(super) fn recompute_image_depth(&mut self) {
        let z = self.z_offset();
        for image in &mut self.images {
            image.position[2] = z;
        }
    }
}
