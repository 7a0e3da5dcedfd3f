/*
 * Pixel Boids
 *
 * A flocking simulation rendered boid-per-pixel (or as small triangles),
 * with interactive sliders for every constant of the update rule.
 *
 * Run with RUST_LOG=debug for per-frame driver logging.
 */

use pixel_boids::app;

fn main() {
    env_logger::init();
    log::info!("starting pixel boids");

    nannou::app(app::model)
        .update(app::update)
        .exit(app::exit)
        .run();
}
