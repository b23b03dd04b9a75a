use std::collections::HashMap;

use bevy::prelude::*;

use super::engine::{CameraSample, ScrollDirection};
use super::source::ParallaxSource;
use super::spawn::{ParallaxLayer, ParallaxTile};

/// Horizontal half-width of the visible area. Only orthographic projections
/// have one; other projections never trigger recycling on visibility.
fn half_width(projection: &Projection) -> f32 {
    match projection {
        Projection::Orthographic(ortho) => ortho.area.half_size().x,
        _ => 0.0,
    }
}

/// Move parallax layers with the source camera and recycle their tiles.
///
/// Per layer, each frame:
///   - re-run setup when the tile count changed,
///   - pull live tile positions into the engine,
///   - apply `layer_delta` to the layer, then apply the recycle command
///     (at most one) to the tile it names.
#[allow(clippy::type_complexity)]
pub fn parallax_scroll(
    source_query: Query<(&Transform, &Projection, &ParallaxSource), (Without<ParallaxLayer>, Without<ParallaxTile>)>,
    mut layer_query: Query<
        (Entity, &mut ParallaxLayer, &mut Transform),
        (Without<ParallaxSource>, Without<ParallaxTile>),
    >,
    mut tile_query: Query<
        (Entity, &ChildOf, &mut Transform),
        (With<ParallaxTile>, Without<ParallaxLayer>, Without<ParallaxSource>),
    >,
    mut tiles_by_layer: Local<HashMap<Entity, HashMap<Entity, Vec2>>>,
) {
    let Ok((source_tf, projection, source)) = source_query.single() else {
        return;
    };
    let camera = CameraSample::new(source_tf.translation.truncate(), half_width(projection));

    for tiles in tiles_by_layer.values_mut() {
        tiles.clear();
    }
    for (entity, child_of, transform) in &tile_query {
        tiles_by_layer
            .entry(child_of.parent())
            .or_default()
            .insert(entity, transform.translation.truncate());
    }

    let no_tiles = HashMap::new();
    for (entity, mut layer, mut transform) in &mut layer_query {
        let live = tiles_by_layer.get(&entity).unwrap_or(&no_tiles);

        if !layer.engine.sync_source(source.enabled, camera.position) {
            continue;
        }

        if layer.engine.needs_setup(live.len()) {
            let warnings = layer
                .engine
                .setup(live.iter().map(|(&tile, &pos)| (tile, pos)), None);
            for warning in warnings {
                warn!("Parallax layer '{}': {}", layer.name, warning);
            }
        } else {
            layer.engine.refresh_tiles(|tile| live.get(tile).copied());
        }

        let outcome = layer
            .engine
            .advance(Some(&camera), transform.translation.truncate());
        transform.translation += outcome.layer_delta.extend(0.0);

        let Some(cmd) = outcome.recycle else {
            continue;
        };
        if let Ok((_, _, mut tile_tf)) = tile_query.get_mut(cmd.tile) {
            tile_tf.translation.x += cmd.shift_x;
        }
        let state = layer.engine.state();
        debug!(
            "Parallax layer '{}' scrolled {}: left={}, right={}",
            layer.name,
            match cmd.direction {
                ScrollDirection::Left => "left",
                ScrollDirection::Right => "right",
            },
            state.left_index,
            state.right_index
        );
    }

    // Forget layers that no longer exist.
    tiles_by_layer.retain(|_, tiles| !tiles.is_empty());
}
