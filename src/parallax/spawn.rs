use bevy::prelude::*;

use super::config::{ParallaxConfig, ParallaxLayerDef};
use super::engine::ScrollingParallaxEngine;

/// A parallax layer entity. Its `ParallaxTile` children are the scrolling elements.
#[derive(Component)]
pub struct ParallaxLayer {
    pub name: String,
    pub engine: ScrollingParallaxEngine<Entity>,
}

/// Marker for tile sprites within a parallax layer.
/// These are spawned as children of the `ParallaxLayer` entity.
#[derive(Component)]
pub struct ParallaxTile;

/// Spawn one layer entity per definition, with its tiles as children.
pub fn spawn_parallax_layers(commands: &mut Commands, config: &ParallaxConfig) {
    for layer_def in &config.layers {
        spawn_layer(commands, layer_def, config);
    }

    info!("Spawned {} parallax layers", config.layers.len());
}

fn spawn_layer(commands: &mut Commands, layer_def: &ParallaxLayerDef, config: &ParallaxConfig) {
    let layer = commands
        .spawn((
            ParallaxLayer {
                name: layer_def.name.clone(),
                engine: ScrollingParallaxEngine::new(config.layer_params(layer_def)),
            },
            Transform::from_xyz(0.0, layer_def.offset_y, layer_def.z_order),
            Visibility::default(),
        ))
        .id();

    let (r, g, b) = layer_def.color;
    let (width, height) = layer_def.tile_size;
    for index in 0..layer_def.tile_count {
        // Alternate shade so seams are visible while tuning.
        let shade = if index % 2 == 0 { 1.0 } else { 0.85 };
        commands.spawn((
            ParallaxTile,
            Sprite::from_color(
                Color::srgb(r * shade, g * shade, b * shade),
                Vec2::new(width, height),
            ),
            Transform::from_xyz(layer_def.tile_x(index), 0.0, 0.0),
            ChildOf(layer),
        ));
    }
}

/// Spawn layers from the loaded config on entering the game.
pub fn spawn_configured_layers(mut commands: Commands, config: Res<ParallaxConfig>) {
    spawn_parallax_layers(&mut commands, &config);
}

/// Remove every layer; tiles go with their parent.
pub fn despawn_parallax_layers(commands: &mut Commands, layers: &Query<Entity, With<ParallaxLayer>>) {
    for entity in layers {
        commands.entity(entity).despawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::fixtures;

    #[test]
    fn spawns_layers_with_child_tiles() {
        let mut app = fixtures::test_app();
        app.insert_resource(fixtures::test_parallax_config());
        app.add_systems(Startup, spawn_configured_layers);
        app.update();

        let mut layers = app.world_mut().query::<(Entity, &ParallaxLayer, &Transform)>();
        let found: Vec<(Entity, String, f32)> = layers
            .iter(app.world())
            .map(|(e, l, t)| (e, l.name.clone(), t.translation.z))
            .collect();
        assert_eq!(found.len(), 2);

        let (hills, _, z) = found.iter().find(|(_, name, _)| name == "hills").unwrap();
        assert_eq!(*z, -5.0);

        let mut tiles = app
            .world_mut()
            .query_filtered::<(&ChildOf, &Transform), With<ParallaxTile>>();
        let mut hill_xs: Vec<f32> = tiles
            .iter(app.world())
            .filter(|(child_of, _)| child_of.parent() == *hills)
            .map(|(_, t)| t.translation.x)
            .collect();
        hill_xs.sort_by(f32::total_cmp);
        assert_eq!(hill_xs, vec![-100.0, 0.0, 100.0]);
    }

    #[test]
    fn despawn_removes_tiles_too() {
        let mut app = fixtures::test_app();
        app.insert_resource(fixtures::test_parallax_config());
        app.add_systems(Startup, spawn_configured_layers);
        app.update();

        app.add_systems(
            Update,
            |mut commands: Commands, layers: Query<Entity, With<ParallaxLayer>>| {
                despawn_parallax_layers(&mut commands, &layers);
            },
        );
        app.update();

        let mut tiles = app.world_mut().query_filtered::<Entity, With<ParallaxTile>>();
        assert_eq!(tiles.iter(app.world()).count(), 0);
        let mut layers = app.world_mut().query_filtered::<Entity, With<ParallaxLayer>>();
        assert_eq!(layers.iter(app.world()).count(), 0);
    }
}
