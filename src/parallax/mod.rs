pub mod config;
pub mod engine;
pub mod scroll;
pub mod source;
pub mod spawn;

use bevy::prelude::*;

use crate::registry::AppState;
use crate::sets::GameSet;

pub struct ParallaxPlugin;

impl Plugin for ParallaxPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::InGame), spawn::spawn_configured_layers)
            .add_systems(
                Update,
                (
                    source::capture_start_position,
                    source::nudge_source,
                    source::source_position_hotkeys,
                )
                    .chain()
                    .in_set(GameSet::Input),
            )
            .add_systems(Update, scroll::parallax_scroll.in_set(GameSet::Parallax));
    }
}
