use bevy::prelude::*;

/// Camera that drives parallax. Layers follow the movement of this entity.
#[derive(Component, Debug, Clone)]
pub struct ParallaxSource {
    /// While false, layers freeze and ignore camera movement.
    pub enabled: bool,
    /// Filled with the spawn position on the first frame unless already set.
    pub stored_position: Option<Vec3>,
    /// Numpad0 + arrow keys nudge the camera.
    pub nudge_enabled: bool,
    pub step_size: f32,
}

impl Default for ParallaxSource {
    fn default() -> Self {
        Self {
            enabled: true,
            stored_position: None,
            nudge_enabled: true,
            step_size: 0.5,
        }
    }
}

impl ParallaxSource {
    pub fn save_position(&mut self, transform: &Transform) {
        self.stored_position = Some(transform.translation);
    }

    /// Restores the saved position. Does nothing when no position is stored.
    pub fn restore_position(&self, transform: &mut Transform) {
        if let Some(position) = self.stored_position {
            transform.translation = position;
        }
    }
}

/// Remember where each new source started so restore has a target.
pub fn capture_start_position(
    mut query: Query<(&mut ParallaxSource, &Transform), Added<ParallaxSource>>,
) {
    for (mut source, transform) in &mut query {
        if source.stored_position.is_none() {
            source.save_position(transform);
        }
    }
}

fn nudge_direction(keys: &ButtonInput<KeyCode>) -> Vec2 {
    let mut dir = Vec2::ZERO;
    if keys.just_pressed(KeyCode::ArrowLeft) {
        dir.x -= 1.0;
    }
    if keys.just_pressed(KeyCode::ArrowRight) {
        dir.x += 1.0;
    }
    if keys.just_pressed(KeyCode::ArrowUp) {
        dir.y += 1.0;
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        dir.y -= 1.0;
    }
    dir
}

/// Step the source by `step_size` per arrow press while Numpad0 is held.
pub fn nudge_source(
    keys: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&ParallaxSource, &mut Transform)>,
) {
    if !keys.pressed(KeyCode::Numpad0) {
        return;
    }
    let dir = nudge_direction(&keys);
    if dir == Vec2::ZERO {
        return;
    }
    for (source, mut transform) in &mut query {
        if source.nudge_enabled {
            transform.translation += (dir * source.step_size).extend(0.0);
        }
    }
}

/// F5 saves the source position, F9 restores it.
pub fn source_position_hotkeys(
    keys: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&mut ParallaxSource, &mut Transform)>,
) {
    for (mut source, mut transform) in &mut query {
        if keys.just_pressed(KeyCode::F5) {
            source.save_position(&transform);
            info!("Saved parallax source position {}", transform.translation);
        } else if keys.just_pressed(KeyCode::F9) {
            source.restore_position(&mut transform);
            info!("Restored parallax source position {}", transform.translation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::fixtures;

    fn source_translation(app: &mut App) -> Vec3 {
        let mut query = app.world_mut().query::<(&ParallaxSource, &Transform)>();
        query.single(app.world()).unwrap().1.translation
    }

    #[test]
    fn restore_without_stored_position_stays_put() {
        let source = ParallaxSource::default();
        let mut transform = Transform::from_xyz(3.0, 4.0, 5.0);
        source.restore_position(&mut transform);
        assert_eq!(transform.translation, Vec3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn restore_before_any_save_returns_to_start() {
        let mut app = fixtures::test_app();
        app.init_resource::<ButtonInput<KeyCode>>();
        app.add_systems(Update, (capture_start_position, source_position_hotkeys).chain());
        let source = fixtures::spawn_source(&mut app, Vec2::new(12.0, -3.0), 100.0);
        app.update();
        assert_eq!(
            app.world().get::<ParallaxSource>(source).unwrap().stored_position,
            Some(Vec3::new(12.0, -3.0, 0.0))
        );

        app.world_mut().get_mut::<Transform>(source).unwrap().translation = Vec3::new(80.0, 5.0, 0.0);
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::F9);
        app.insert_resource(keys);
        app.update();
        assert_eq!(source_translation(&mut app), Vec3::new(12.0, -3.0, 0.0));
    }

    #[test]
    fn explicit_stored_position_is_not_overwritten() {
        let mut app = fixtures::test_app();
        app.add_systems(Update, capture_start_position);
        let source = app
            .world_mut()
            .spawn((
                ParallaxSource {
                    stored_position: Some(Vec3::new(1.0, 2.0, 0.0)),
                    ..Default::default()
                },
                Transform::from_xyz(9.0, 9.0, 0.0),
            ))
            .id();
        app.update();
        assert_eq!(
            app.world().get::<ParallaxSource>(source).unwrap().stored_position,
            Some(Vec3::new(1.0, 2.0, 0.0))
        );
    }

    #[test]
    fn save_then_restore_round_trips() {
        let mut source = ParallaxSource::default();
        let mut transform = Transform::from_xyz(3.0, 4.0, 5.0);
        source.save_position(&transform);
        transform.translation = Vec3::new(-10.0, 0.0, 5.0);
        source.restore_position(&mut transform);
        assert_eq!(transform.translation, Vec3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn nudge_requires_numpad0() {
        let mut app = fixtures::test_app();
        app.add_systems(Update, nudge_source);
        fixtures::spawn_source(&mut app, Vec2::ZERO, 100.0);

        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::ArrowRight);
        app.insert_resource(keys);
        app.update();
        assert_eq!(source_translation(&mut app), Vec3::ZERO);

        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::Numpad0);
        keys.press(KeyCode::ArrowRight);
        keys.press(KeyCode::ArrowUp);
        app.insert_resource(keys);
        app.update();
        assert_eq!(source_translation(&mut app), Vec3::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn hotkeys_save_and_restore() {
        let mut app = fixtures::test_app();
        app.add_systems(Update, source_position_hotkeys);
        let source = fixtures::spawn_source(&mut app, Vec2::new(7.0, 1.0), 100.0);

        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::F5);
        app.insert_resource(keys);
        app.update();
        assert_eq!(
            app.world().get::<ParallaxSource>(source).unwrap().stored_position,
            Some(Vec3::new(7.0, 1.0, 0.0))
        );

        app.world_mut().get_mut::<Transform>(source).unwrap().translation = Vec3::new(50.0, 0.0, 0.0);
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::F9);
        app.insert_resource(keys);
        app.update();
        assert_eq!(source_translation(&mut app), Vec3::new(7.0, 1.0, 0.0));
    }
}
