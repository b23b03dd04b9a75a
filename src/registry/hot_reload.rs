//! Hot-reload for the parallax config asset.

use bevy::asset::AssetEvent;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::RegistryHandles;
use super::assets::ParallaxConfigAsset;

use crate::parallax::config::ParallaxConfig;
use crate::parallax::spawn::{ParallaxLayer, despawn_parallax_layers, spawn_parallax_layers};

/// Rebuild every layer when the config file changes on disk.
pub(crate) fn hot_reload_parallax(
    mut commands: Commands,
    mut events: MessageReader<AssetEvent<ParallaxConfigAsset>>,
    handles: Res<RegistryHandles>,
    assets: Res<Assets<ParallaxConfigAsset>>,
    mut config: ResMut<ParallaxConfig>,
    layers: Query<Entity, With<ParallaxLayer>>,
) {
    for event in events.read() {
        if let AssetEvent::Modified { id } = event
            && *id == handles.parallax.id()
            && let Some(asset) = assets.get(&handles.parallax)
        {
            *config = asset.config.clone();
            despawn_parallax_layers(&mut commands, &layers);
            spawn_parallax_layers(&mut commands, &config);
            info!("Hot-reloaded ParallaxConfig ({} layers)", config.layers.len());
        }
    }
}
