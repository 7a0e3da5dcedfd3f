/*
 * Application Module
 *
 * This module defines the main application model and the per-frame driver
 * logic. nannou owns the OS event loop and frame pacing; this module
 * layers the run-phase state machine on top of it:
 *
 *   NotStarted -> Running -> Quitting -> Stopped
 *
 * Each frame while running: the UI pass runs first (its change detection
 * may queue membership changes on the collection), then the flock update
 * pass unless paused, then the view draws. Escape or window close moves
 * the driver to Quitting and tears the window down.
 */

use std::cell::RefCell;

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::debug::DebugInfo;
use crate::params::SimulationParams;
use crate::renderer;
use crate::rng::SimRng;
use crate::state::FlockState;
use crate::ui;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Driver lifecycle. `Stopped` is only ever observed by the exit hook;
/// everything after `Quitting` happens during teardown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunPhase {
    NotStarted,
    Running,
    Quitting,
    Stopped,
}

impl RunPhase {
    /// First update promotes the driver to Running; later frames are no-ops.
    pub fn begin_frame(self) -> Self {
        match self {
            RunPhase::NotStarted => RunPhase::Running,
            other => other,
        }
    }

    /// A quit request is sticky: once Quitting, further requests and
    /// frames change nothing until teardown.
    pub fn request_quit(self) -> Self {
        match self {
            RunPhase::Stopped => RunPhase::Stopped,
            _ => RunPhase::Quitting,
        }
    }

    pub fn is_running(self) -> bool {
        self == RunPhase::Running
    }
}

// Main model for the application
pub struct Model {
    // RefCell because the draw pass commits pending membership changes
    // and nannou's view only hands out a shared Model reference
    pub state: RefCell<FlockState>,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub rng: SimRng,
    pub phase: RunPhase,
    pub frames: u64,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let window_id = app
        .new_window()
        .title("Pixel Boids")
        .size(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)
        .view(renderer::view)
        .key_pressed(key_pressed)
        .closed(window_closed)
        .raw_event(raw_window_event)
        .build()
        .expect("Failed to build the main window");

    let window = app.window(window_id).expect("Main window went missing");
    let egui = Egui::from_window(&window);

    let params = SimulationParams::default();
    params
        .validate()
        .expect("Default parameters violate an update-rule invariant");

    // Frame pacing: block until the target frame interval elapses
    app.set_loop_mode(LoopMode::rate_fps(params.target_fps));

    let mut rng = SimRng::from_entropy();
    let bounds = vec2(SCREEN_WIDTH, SCREEN_HEIGHT);
    let state = FlockState::new(&params, bounds, &mut rng);
    log::info!(
        "spawned {} boids in a {}x{} world",
        params.num_boids,
        SCREEN_WIDTH,
        SCREEN_HEIGHT
    );

    Model {
        state: RefCell::new(state),
        params,
        egui,
        debug_info: DebugInfo::default(),
        rng,
        phase: RunPhase::NotStarted,
        frames: 0,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    if model.phase == RunPhase::NotStarted {
        model.phase = model.phase.begin_frame();
        log::info!("simulation running");
    }
    if !model.phase.is_running() {
        return;
    }
    model.frames += 1;

    let state = model.state.get_mut();

    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.debug_info.boid_count = state.collection.len();

    // UI pass; may move sliders, click presets, request a scatter
    let response = ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    if response.scatter {
        *state = FlockState::new(&model.params, state.bounds, &mut model.rng);
        log::debug!("scattered flock to {} fresh boids", model.params.num_boids);
    } else if response.num_boids_changed
        && state.collection.target_len() != model.params.num_boids
    {
        // Population changes go through the deferred queues and land at
        // the next pass's commit point
        let bounds = state.bounds;
        state
            .collection
            .queue_resize(model.params.num_boids, bounds, &mut model.rng);
        log::debug!("queued resize to {} boids", model.params.num_boids);
    }

    if !model.params.paused {
        state.update(&model.params, &mut model.rng);
    }
}

// Keyboard event handler: quit keys are handled by the driver, everything
// else is forwarded to the simulation state
pub fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Escape => request_quit(app, model),
        Key::Space => model.params.paused = !model.params.paused,
        other => model.state.get_mut().process_key(other),
    }
}

fn request_quit(app: &App, model: &mut Model) {
    if model.phase != RunPhase::Quitting {
        model.phase = model.phase.request_quit();
        log::info!("quit requested, shutting down");
        app.quit();
    }
}

// Closing the window quits the same way Escape does
fn window_closed(app: &App, model: &mut Model) {
    request_quit(app, model);
}

// Called by nannou once the event loop winds down. Every quit path has
// already passed through Quitting by this point.
pub fn exit(_app: &App, mut model: Model) {
    model.phase = RunPhase::Stopped;
    log::info!("simulation stopped after {} frames", model.frames);
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
