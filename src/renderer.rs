/*
 * Renderer Module
 *
 * This module handles the rendering of the boid simulation: background
 * clear, the draw pass over the collection, and the optional debug
 * overlay (influence radii around the first boid, its velocity vector,
 * and frame statistics).
 *
 * World coordinates have the origin at the top-left corner with y
 * pointing down (pixel convention); nannou's screen space is centered
 * with y pointing up, so everything passes through world_to_screen.
 */

use nannou::prelude::*;

use crate::app::{Model, RunPhase};
use crate::ui;

const BG_COLOR: (u8, u8, u8) = (30, 30, 30);

/// Map a world position (top-left origin, y down) to nannou screen space
/// (centered origin, y up).
#[inline]
pub fn world_to_screen(position: Point2, bounds: Vec2) -> Point2 {
    pt2(position.x - bounds.x / 2.0, bounds.y / 2.0 - position.y)
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // A quitting driver abandons the in-flight draw
    if model.phase == RunPhase::Quitting {
        return;
    }

    // Begin drawing
    let draw = app.draw();

    // Clear the background
    let (r, g, b) = BG_COLOR;
    draw.background().color(rgb(r, g, b));

    // Draw pass: commits pending membership changes, then draws each boid
    let mut state = model.state.borrow_mut();
    state.draw(&draw, &model.params);

    // Draw debug visualization if enabled
    if model.params.show_debug {
        if let Some(first_boid) = state.boids().first() {
            let screen_pos = world_to_screen(first_boid.position, state.bounds);

            // Influencing radius
            draw.ellipse()
                .xy(screen_pos)
                .radius(model.params.influencing_radius)
                .no_fill()
                .stroke(GREEN)
                .stroke_weight(1.0);

            // Dispersion radius
            draw.ellipse()
                .xy(screen_pos)
                .radius(model.params.dispersion_radius)
                .no_fill()
                .stroke(RED)
                .stroke_weight(1.0);

            // Velocity vector (world y down, screen y up)
            let velocity = first_boid.velocity;
            draw.arrow()
                .start(screen_pos)
                .end(pt2(
                    screen_pos.x + velocity.x * 5.0,
                    screen_pos.y - velocity.y * 5.0,
                ))
                .color(YELLOW)
                .stroke_weight(2.0);
        }

        ui::draw_debug_info(&draw, &model.debug_info, app.window_rect());
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}
