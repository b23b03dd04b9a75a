pub mod fixtures {
    use bevy::prelude::*;

    use crate::parallax::config::{ParallaxConfig, ParallaxLayerDef};
    use crate::parallax::engine::{DEFAULT_MIN_TILE_SPACING, ParallaxParams, ScrollingParallaxEngine};
    use crate::parallax::source::ParallaxSource;
    use crate::parallax::spawn::{ParallaxLayer, ParallaxTile};

    pub fn test_layer_def(name: &str, tile_width: f32, z_order: f32) -> ParallaxLayerDef {
        ParallaxLayerDef {
            name: name.into(),
            speed_x: 0.5,
            speed_y: 0.0,
            invert: false,
            infinite_scroll: true,
            z_order,
            tile_count: 3,
            tile_size: (tile_width, 50.0),
            offset_y: 0.0,
            color: (0.3, 0.6, 0.3),
            min_tile_spacing: None,
        }
    }

    pub fn test_parallax_config() -> ParallaxConfig {
        ParallaxConfig {
            min_tile_spacing: DEFAULT_MIN_TILE_SPACING,
            layers: vec![
                test_layer_def("hills", 100.0, -5.0),
                test_layer_def("clouds", 300.0, -8.0),
            ],
        }
    }

    /// Spawn a parallax source camera at `position` with a visible half-width.
    pub fn spawn_source(app: &mut App, position: Vec2, half_width: f32) -> Entity {
        app.world_mut()
            .spawn((
                ParallaxSource::default(),
                Transform::from_translation(position.extend(0.0)),
                Projection::Orthographic(OrthographicProjection {
                    area: Rect::new(-half_width, -half_width, half_width, half_width),
                    ..OrthographicProjection::default_2d()
                }),
            ))
            .id()
    }

    /// Spawn a layer at the origin with one tile per entry of `tile_xs`, in that order.
    pub fn spawn_layer(app: &mut App, params: ParallaxParams, tile_xs: &[f32]) -> (Entity, Vec<Entity>) {
        let layer = app
            .world_mut()
            .spawn((
                ParallaxLayer {
                    name: "test".into(),
                    engine: ScrollingParallaxEngine::new(params),
                },
                Transform::default(),
            ))
            .id();
        let tiles = tile_xs
            .iter()
            .map(|&x| {
                app.world_mut()
                    .spawn((ParallaxTile, Transform::from_xyz(x, 0.0, 0.0), ChildOf(layer)))
                    .id()
            })
            .collect();
        (layer, tiles)
    }

    /// Create a minimal Bevy App for system tests.
    pub fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app
    }
}
