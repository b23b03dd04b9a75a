use bevy::prelude::*;

use crate::parallax::source::ParallaxSource;

/// Cap on frame delta so a stall does not fling the camera.
pub const MAX_DELTA_SECS: f32 = 1.0 / 20.0;

#[derive(Resource, Debug, Clone)]
pub struct CameraPan {
    /// World units per second.
    pub speed: f32,
    /// Pan right continuously without input.
    pub auto: bool,
}

impl Default for CameraPan {
    fn default() -> Self {
        Self {
            speed: 240.0,
            auto: false,
        }
    }
}

impl CameraPan {
    /// Horizontal direction for this frame: -1, 0 or 1.
    pub fn direction(&self, keys: &ButtonInput<KeyCode>) -> f32 {
        let mut dir = if self.auto { 1.0 } else { 0.0 };
        if keys.pressed(KeyCode::KeyA) {
            dir -= 1.0;
        }
        if keys.pressed(KeyCode::KeyD) {
            dir += 1.0;
        }
        f32::clamp(dir, -1.0, 1.0)
    }
}

pub fn toggle_auto_pan(keys: Res<ButtonInput<KeyCode>>, mut pan: ResMut<CameraPan>) {
    if keys.just_pressed(KeyCode::KeyP) {
        pan.auto = !pan.auto;
        info!("Camera auto-pan: {}", pan.auto);
    }
}

pub fn camera_pan(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    pan: Res<CameraPan>,
    mut camera_query: Query<&mut Transform, With<ParallaxSource>>,
) {
    let dir = pan.direction(&keys);
    if dir == 0.0 {
        return;
    }
    let dt = time.delta_secs().min(MAX_DELTA_SECS);
    for mut transform in &mut camera_query {
        transform.translation.x += dir * pan.speed * dt;
    }
}
