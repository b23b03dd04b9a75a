pub mod pan;

use bevy::prelude::*;

use crate::parallax::source::ParallaxSource;
use crate::sets::GameSet;

const CAMERA_SCALE: f32 = 1.0;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<pan::CameraPan>()
            .add_systems(Startup, spawn_camera)
            .add_systems(Update, pan::toggle_auto_pan.in_set(GameSet::Input))
            .add_systems(Update, pan::camera_pan.in_set(GameSet::Camera));
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
        ParallaxSource::default(),
    ));
}
