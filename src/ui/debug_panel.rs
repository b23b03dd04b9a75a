use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::camera::pan::CameraPan;
use crate::parallax::source::ParallaxSource;
use crate::parallax::spawn::ParallaxLayer;

/// Tracks debug panel visibility.
#[derive(Resource, Default)]
pub struct DebugUiState {
    pub visible: bool,
}

/// Toggles debug panel visibility on F3 press.
pub fn toggle_debug_panel(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugUiState>) {
    if keyboard.just_pressed(KeyCode::F3) {
        state.visible = !state.visible;
    }
}

/// Draws the parallax inspector panel using egui.
pub fn draw_debug_panel(
    mut contexts: EguiContexts,
    state: Res<DebugUiState>,
    mut pan: ResMut<CameraPan>,
    mut source_query: Query<(&mut ParallaxSource, &mut Transform)>,
    layer_query: Query<&ParallaxLayer>,
) -> Result {
    if !state.visible {
        return Ok(());
    }

    let ctx = contexts.ctx_mut()?;

    let panel_frame = egui::Frame::NONE
        .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 30, 200))
        .inner_margin(egui::Margin::same(8))
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(60)));

    egui::SidePanel::right("debug_panel")
        .default_width(280.0)
        .resizable(false)
        .frame(panel_frame)
        .show(ctx, |ui| {
            ui.heading("Parallax");
            ui.separator();

            // --- Source ---
            egui::CollapsingHeader::new(egui::RichText::new("Source").strong())
                .default_open(true)
                .show(ui, |ui| {
                    let Ok((mut source, mut transform)) = source_query.single_mut() else {
                        ui.label("No parallax source");
                        return;
                    };

                    ui.checkbox(&mut source.enabled, "Parallax enabled");
                    ui.checkbox(&mut pan.auto, "Auto-pan (P)");

                    egui::Grid::new("source_grid")
                        .num_columns(2)
                        .spacing([20.0, 4.0])
                        .show(ui, |ui| {
                            ui.label("Position:");
                            ui.monospace(format!(
                                "{:.1}, {:.1}",
                                transform.translation.x, transform.translation.y
                            ));
                            ui.end_row();

                            ui.label("Stored:");
                            match source.stored_position {
                                Some(p) => ui.monospace(format!("{:.1}, {:.1}", p.x, p.y)),
                                None => ui.colored_label(egui::Color32::GRAY, "none"),
                            };
                            ui.end_row();
                        });

                    ui.horizontal(|ui| {
                        if ui.button("Save Position").clicked() {
                            source.save_position(&transform);
                        }
                        if ui.button("Restore Position").clicked() {
                            source.restore_position(&mut transform);
                        }
                    });
                });

            // --- Layers ---
            egui::CollapsingHeader::new(egui::RichText::new("Layers").strong())
                .default_open(true)
                .show(ui, |ui| {
                    let mut any = false;
                    for (i, layer) in layer_query.iter().enumerate() {
                        any = true;
                        let params = layer.engine.params();
                        let tiles = layer.engine.tiles();
                        let scroll = layer.engine.state();

                        ui.separator();
                        egui::Grid::new(format!("parallax_layer_{i}"))
                            .num_columns(2)
                            .spacing([20.0, 4.0])
                            .show(ui, |ui| {
                                ui.label("Name:");
                                ui.monospace(&layer.name);
                                ui.end_row();

                                ui.label("Speed:");
                                ui.monospace(format!("{:.2}, {:.2}", params.speed_x, params.speed_y));
                                ui.end_row();

                                ui.label("Invert:");
                                ui.label(params.invert.to_string());
                                ui.end_row();

                                ui.label("Infinite:");
                                ui.label(params.infinite_scroll.to_string());
                                ui.end_row();

                                if params.infinite_scroll {
                                    ui.label("Tiles:");
                                    ui.monospace(format!("{} × {:.1}", tiles.len(), tiles.spacing()));
                                    ui.end_row();

                                    ui.label("Left / right:");
                                    let color = if tiles.spacing() < params.min_tile_spacing {
                                        egui::Color32::LIGHT_RED
                                    } else {
                                        egui::Color32::LIGHT_GREEN
                                    };
                                    ui.colored_label(
                                        color,
                                        format!("{} / {}", scroll.left_index, scroll.right_index),
                                    );
                                    ui.end_row();
                                }
                            });
                    }
                    if !any {
                        ui.label("No parallax layers");
                    }
                });
        });

    Ok(())
}
