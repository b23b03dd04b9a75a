use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use parallax_scroll::{camera, parallax, registry, sets, ui};

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Parallax Scroll".into(),
            resolution: (1280, 720).into(),
            ..default()
        }),
        ..default()
    }))
    .add_plugins(EguiPlugin::default())
    .add_plugins(registry::RegistryPlugin)
    .add_plugins(camera::CameraPlugin)
    .add_plugins(parallax::ParallaxPlugin)
    .add_plugins(ui::UiPlugin);

    sets::configure_sets(&mut app);
    app.run();
}
