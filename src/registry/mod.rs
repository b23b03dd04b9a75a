pub mod assets;
pub mod hot_reload;
pub mod loader;

use bevy::prelude::*;

use assets::ParallaxConfigAsset;
use loader::RonLoader;

pub const PARALLAX_CONFIG_PATH: &str = "data/demo.parallax.ron";

/// Application state: Loading waits for assets, InGame runs the scene.
#[derive(States, Default, Debug, Clone, Eq, PartialEq, Hash)]
pub enum AppState {
    #[default]
    Loading,
    InGame,
}

/// Keeps the config handle alive for hot-reload detection.
#[derive(Resource)]
pub(crate) struct RegistryHandles {
    pub(crate) parallax: Handle<ParallaxConfigAsset>,
}

pub struct RegistryPlugin;

impl Plugin for RegistryPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_asset::<ParallaxConfigAsset>()
            .register_asset_loader(RonLoader::<ParallaxConfigAsset>::new(&["parallax.ron"]))
            .add_systems(Startup, start_loading)
            .add_systems(Update, check_loading.run_if(in_state(AppState::Loading)))
            .add_systems(
                Update,
                hot_reload::hot_reload_parallax.run_if(in_state(AppState::InGame)),
            );
    }
}

fn start_loading(mut commands: Commands, asset_server: Res<AssetServer>) {
    let parallax = asset_server.load::<ParallaxConfigAsset>(PARALLAX_CONFIG_PATH);
    commands.insert_resource(RegistryHandles { parallax });
}

fn check_loading(
    mut commands: Commands,
    handles: Res<RegistryHandles>,
    parallax_assets: Res<Assets<ParallaxConfigAsset>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(parallax) = parallax_assets.get(&handles.parallax) else {
        return; // not loaded yet
    };

    commands.insert_resource(parallax.config.clone());
    next_state.set(AppState::InGame);
    info!(
        "Parallax config loaded ({} layers), entering InGame state",
        parallax.config.layers.len()
    );
}
