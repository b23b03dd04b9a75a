use std::marker::PhantomData;

use bevy::asset::io::Reader;
use bevy::asset::{AssetLoader, LoadContext};
use bevy::prelude::*;
use bevy::reflect::TypePath;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RonLoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Decode a RON document into `T`.
pub fn parse_ron<T: for<'de> Deserialize<'de>>(bytes: &[u8]) -> Result<T, RonLoaderError> {
    Ok(ron::de::from_bytes::<T>(bytes)?)
}

/// Loads any deserializable asset from a RON file with one of `extensions`.
#[derive(TypePath)]
pub struct RonLoader<T: TypePath> {
    extensions: Vec<&'static str>,
    _phantom: PhantomData<T>,
}

impl<T: TypePath> RonLoader<T> {
    pub fn new(extensions: &[&'static str]) -> Self {
        Self {
            extensions: extensions.to_vec(),
            _phantom: PhantomData,
        }
    }
}

impl<T> AssetLoader for RonLoader<T>
where
    T: Asset + TypePath + for<'de> Deserialize<'de> + Send + Sync + 'static,
{
    type Asset = T;
    type Settings = ();
    type Error = RonLoaderError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        parse_ron(&bytes)
    }

    fn extensions(&self) -> &[&str] {
        &self.extensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::assets::ParallaxConfigAsset;

    #[test]
    fn parses_transparent_config_asset() {
        let asset: ParallaxConfigAsset = parse_ron(
            br#"(layers: [(name: "sky", speed_x: 1.0, speed_y: 1.0, z_order: -1.0,
                tile_size: (64.0, 64.0), color: (0.5, 0.5, 0.5))])"#,
        )
        .unwrap();
        assert_eq!(asset.config.layers.len(), 1);
        assert_eq!(asset.config.layers[0].name, "sky");
    }

    #[test]
    fn reports_parse_errors() {
        let err = parse_ron::<ParallaxConfigAsset>(b"(layers: [").unwrap_err();
        assert!(matches!(err, RonLoaderError::Ron(_)));
    }
}
