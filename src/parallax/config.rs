use bevy::prelude::*;
use serde::Deserialize;

use super::engine::{DEFAULT_MIN_TILE_SPACING, ParallaxParams};

fn default_tile_count() -> usize {
    3
}

fn default_min_tile_spacing() -> f32 {
    DEFAULT_MIN_TILE_SPACING
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParallaxLayerDef {
    pub name: String,
    pub speed_x: f32,
    pub speed_y: f32,
    #[serde(default)]
    pub invert: bool,
    #[serde(default)]
    pub infinite_scroll: bool,
    pub z_order: f32,
    #[serde(default = "default_tile_count")]
    pub tile_count: usize,
    /// Width and height of one tile sprite; width is also the tile spacing.
    pub tile_size: (f32, f32),
    #[serde(default)]
    pub offset_y: f32,
    /// sRGB, 0..1
    pub color: (f32, f32, f32),
    /// Overrides `ParallaxConfig::min_tile_spacing` for this layer.
    #[serde(default)]
    pub min_tile_spacing: Option<f32>,
}

impl ParallaxLayerDef {
    pub fn params(&self, default_min_tile_spacing: f32) -> ParallaxParams {
        ParallaxParams {
            speed_x: self.speed_x,
            speed_y: self.speed_y,
            invert: self.invert,
            infinite_scroll: self.infinite_scroll,
            min_tile_spacing: self.min_tile_spacing.unwrap_or(default_min_tile_spacing),
        }
    }

    /// Local x of tile `index`, tiles laid edge to edge and centred on the layer.
    pub fn tile_x(&self, index: usize) -> f32 {
        let center = (self.tile_count as f32 - 1.0) / 2.0;
        (index as f32 - center) * self.tile_size.0
    }
}

#[derive(Resource, Debug, Clone, Deserialize)]
pub struct ParallaxConfig {
    #[serde(default = "default_min_tile_spacing")]
    pub min_tile_spacing: f32,
    pub layers: Vec<ParallaxLayerDef>,
}

impl ParallaxConfig {
    pub fn layer_params(&self, layer: &ParallaxLayerDef) -> ParallaxParams {
        layer.params(self.min_tile_spacing)
    }
}
