//! Panel sprite object
//!
//! Owns a [`NineSliceLayout`] plus the object state around it (position,
//! angle, layer, z-order, texture) and re-slices whenever size, texture or
//! margins change.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::command::PanelCommand;
use super::error::PanelError;
use super::geometry::{Margins, PanelTransform};
use super::layout::{NineSliceLayout, Slice};
use super::texture::TextureProvider;

/// Serialized description of a panel sprite object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelSpriteData {
    pub texture: String,
    pub width: f32,
    pub height: f32,
    pub top_margin: f32,
    pub right_margin: f32,
    pub bottom_margin: f32,
    pub left_margin: f32,
}

impl PanelSpriteData {
    pub fn margins(&self) -> Margins {
        Margins::new(
            self.top_margin,
            self.right_margin,
            self.bottom_margin,
            self.left_margin,
        )
    }
}

/// Per-instance overrides from a scene's initial instances
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InitialInstanceData {
    pub custom_size: bool,
    pub width: f32,
    pub height: f32,
}

/// A resizable nine-slice sprite
#[derive(Debug, Clone)]
pub struct PanelSprite {
    texture: String,
    layout: NineSliceLayout,
    x: f32,
    y: f32,
    angle: f32,
    layer: String,
    z_order: i32,
}

impl PanelSprite {
    /// Creates a panel on the base layer from its object data
    pub fn new(data: &PanelSpriteData, textures: &dyn TextureProvider) -> Result<Self, PanelError> {
        let texture_size = textures.texture_size(&data.texture)?;
        let layout = NineSliceLayout::new(texture_size, data.margins(), [data.width, data.height])?;

        debug!(
            texture = %data.texture,
            width = data.width,
            height = data.height,
            "Created panel sprite"
        );

        Ok(Self {
            texture: data.texture.clone(),
            layout,
            x: 0.0,
            y: 0.0,
            angle: 0.0,
            layer: String::new(),
            z_order: 0,
        })
    }

    /// Applies the overrides of an initial instance (custom size only)
    pub fn apply_initial_instance(&mut self, instance: &InitialInstanceData) {
        if instance.custom_size {
            self.set_width(instance.width);
            self.set_height(instance.height);
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f32) {
        self.y = y;
    }

    pub fn width(&self) -> f32 {
        self.layout.target_size()[0]
    }

    pub fn height(&self) -> f32 {
        self.layout.target_size()[1]
    }

    pub fn set_width(&mut self, width: f32) {
        let height = self.height();
        self.layout.recompute(width, height);
    }

    pub fn set_height(&mut self, height: f32) {
        let width = self.width();
        self.layout.recompute(width, height);
    }

    /// Resizes both dimensions with a single re-slice
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.layout.recompute(width, height);
    }

    /// Angle in degrees
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn set_angle(&mut self, degrees: f32) {
        self.angle = degrees;
    }

    pub fn layer(&self) -> &str {
        &self.layer
    }

    pub fn set_layer(&mut self, layer: impl Into<String>) {
        self.layer = layer.into();
    }

    pub fn z_order(&self) -> i32 {
        self.z_order
    }

    pub fn set_z_order(&mut self, z_order: i32) {
        self.z_order = z_order;
    }

    pub fn texture(&self) -> &str {
        &self.texture
    }

    /// Swaps the texture and re-slices with the new dimensions.
    ///
    /// On error the sprite keeps its previous texture.
    pub fn set_texture(
        &mut self,
        name: &str,
        textures: &dyn TextureProvider,
    ) -> Result<(), PanelError> {
        let size = textures.texture_size(name)?;
        self.layout.set_texture_size(size)?;
        self.texture = name.to_string();
        debug!(texture = name, width = size[0], height = size[1], "Swapped panel texture");
        Ok(())
    }

    pub fn margins(&self) -> Margins {
        self.layout.margins()
    }

    pub fn set_margins(&mut self, margins: Margins) -> Result<(), PanelError> {
        self.layout.set_margins(margins)
    }

    pub fn layout(&self) -> &NineSliceLayout {
        &self.layout
    }

    pub fn slices(&self) -> &[Slice; 9] {
        self.layout.slices()
    }

    /// Placement of the panel's local space: rotation pivots on the panel center
    pub fn transform(&self) -> PanelTransform {
        let [width, height] = self.layout.target_size();
        PanelTransform {
            position: [self.x + width / 2.0, self.y + height / 2.0],
            pivot: [width / 2.0, height / 2.0],
            rotation: self.angle.to_radians(),
        }
    }

    /// Maps a panel-local point into world space
    pub fn local_to_world(&self, local: [f32; 2]) -> [f32; 2] {
        self.transform().local_to_world(local)
    }

    /// Builds the draw command for the current state
    pub fn draw_command(&self) -> PanelCommand {
        PanelCommand {
            texture: self.texture.clone(),
            transform: self.transform(),
            layer: self.layer.clone(),
            z_order: self.z_order,
            slices: *self.layout.slices(),
        }
    }
}
