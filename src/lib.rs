/*
 * Pixel Boids - Module Definitions
 *
 * This file defines the module structure for the boid simulation.
 * The simulation core (params, rng, geometry, boid, collection, state)
 * has no windowing dependencies and is exercised directly by the tests;
 * app, renderer and ui wire it into nannou.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use collection::{BoidCollection, BoidId};
pub use params::{BoundaryPolicy, DrawStyle, SimulationParams};
pub use rng::SimRng;
pub use state::FlockState;

// Define modules
pub mod app;
pub mod boid;
pub mod collection;
pub mod debug;
pub mod geometry;
pub mod params;
pub mod renderer;
pub mod rng;
pub mod state;
pub mod ui;

// World extent in pixels, fixed at startup (width, height)
pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 1000.0;

// Edge length of the triangle used by the polygon draw style
pub const BOID_SIZE: f32 = 6.0;
