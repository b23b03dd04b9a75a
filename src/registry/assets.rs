use bevy::prelude::*;
use bevy::reflect::TypePath;
use serde::Deserialize;

use crate::parallax::config::ParallaxConfig;

/// Asset loaded from *.parallax.ron
#[derive(Asset, TypePath, Debug, Deserialize)]
#[serde(transparent)]
pub struct ParallaxConfigAsset {
    pub config: ParallaxConfig,
}
