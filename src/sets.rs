use bevy::prelude::*;

/// Top-level system ordering sets for the frame.
///
/// Configured as a chain: Input → Camera → Parallax → Ui.
/// Parallax runs after the camera has moved for the frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    Input,
    Camera,
    Parallax,
    Ui,
}

pub fn configure_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            GameSet::Input,
            GameSet::Camera,
            GameSet::Parallax,
            GameSet::Ui,
        )
            .chain(),
    );
}
