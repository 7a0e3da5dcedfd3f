/*
 * UI Module
 *
 * This module contains functions for creating and updating the user
 * interface using nannou_egui. Every named constant of the flocking rule
 * is adjustable at runtime; two preset buttons restore the stock
 * "flocking" and "swarming" tunings. Parameter change detection is
 * handled by the SimulationParams struct.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::{BoundaryPolicy, DrawStyle, SimulationParams};

/// What the UI pass asks the app to do this frame.
pub struct UiResponse {
    /// The "Scatter Flock" button was clicked: rebuild at random positions.
    pub scatter: bool,
    /// The boid-count slider moved.
    pub num_boids_changed: bool,
}

// Update the UI and report the requested actions
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
) -> UiResponse {
    let mut scatter = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Preset:");
                if ui.button("Flocking").clicked() {
                    params.apply_preset(SimulationParams::flocking());
                }
                if ui.button("Swarming").clicked() {
                    params.apply_preset(SimulationParams::swarming());
                }
            });

            ui.collapsing("Flock", |ui| {
                ui.add(
                    egui::Slider::new(&mut params.num_boids, SimulationParams::get_num_boids_range())
                        .text("Number of Boids"),
                );
                if ui.button("Scatter Flock").clicked() {
                    scatter = true;
                }
            });

            ui.collapsing("Behavior", |ui| {
                ui.add(
                    egui::Slider::new(
                        &mut params.influencing_radius,
                        SimulationParams::get_radius_range(),
                    )
                    .text("Influencing Radius"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.dispersion_radius,
                        SimulationParams::get_radius_range(),
                    )
                    .text("Dispersion Radius"),
                );
                ui.add(
                    egui::Slider::new(&mut params.friction, SimulationParams::get_friction_range())
                        .text("Friction"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.random_movement_size,
                        SimulationParams::get_jitter_range(),
                    )
                    .text("Random Movement"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.alignment_strength,
                        SimulationParams::get_strength_range(),
                    )
                    .text("Alignment Strength"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.non_aligned_decay,
                        SimulationParams::get_decay_range(),
                    )
                    .text("Non-Aligned Decay"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.cohesion_strength,
                        SimulationParams::get_strength_range(),
                    )
                    .text("Cohesion Strength"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.dispersion_strength,
                        SimulationParams::get_strength_range(),
                    )
                    .text("Dispersion Strength"),
                );
            });

            ui.collapsing("Display", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Boundary:");
                    ui.selectable_value(&mut params.boundary_policy, BoundaryPolicy::Clamp, "Clamp");
                    ui.selectable_value(&mut params.boundary_policy, BoundaryPolicy::Wrap, "Wrap");
                });
                ui.horizontal(|ui| {
                    ui.label("Draw as:");
                    ui.selectable_value(&mut params.draw_style, DrawStyle::Pixel, "Pixel");
                    ui.selectable_value(&mut params.draw_style, DrawStyle::Triangle, "Triangle");
                });

                ui.separator();

                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!(
                    "Frame time: {:.2} ms",
                    debug_info.frame_time.as_secs_f64() * 1000.0
                ));
                ui.label(format!("Boids: {}", debug_info.boid_count));
            });

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.paused, "Pause Simulation");
        });

    // Keep the rule invariants intact while sliders move independently
    if params.dispersion_radius > params.influencing_radius {
        params.dispersion_radius = params.influencing_radius;
    }

    let (num_boids_changed, _ui_changed) = params.detect_changes();

    UiResponse {
        scatter,
        num_boids_changed,
    }
}

// Draw frame statistics on the screen
pub fn draw_debug_info(draw: &nannou::Draw, debug_info: &DebugInfo, window_rect: nannou::geom::Rect) {
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 200.0;
    let panel_height = line_height * 3.0 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    // Draw the background panel
    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!(
            "Frame time: {:.2} ms",
            debug_info.frame_time.as_secs_f64() * 1000.0
        ),
        format!("Boids: {}", debug_info.boid_count),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);
        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
