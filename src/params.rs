/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * named constants for the flocking rule, the boundary policy, the draw
 * style and the frame rate. Parameters can be modified through the UI;
 * change detection is handled here via snapshots.
 *
 * Two presets are provided: "flocking" (classic aligned flocks) and
 * "swarming" (bonding and chaotic swarming), which is the default.
 */

use thiserror::Error;

/// What happens to a boid whose position leaves the screen bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Clamp the out-of-range component to the edge and zero that
    /// velocity component.
    Clamp,
    /// Reduce the out-of-range coordinate modulo the extent; velocity
    /// is left unchanged. Neighbor distances become toroidal.
    Wrap,
}

/// How each boid is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawStyle {
    /// A single pixel at the boid's (integer) position.
    Pixel,
    /// A small triangle oriented along the velocity.
    Triangle,
}

// Parameters for the simulation that can be adjusted via UI
pub struct SimulationParams {
    pub num_boids: usize,
    pub influencing_radius: f32,
    pub dispersion_radius: f32,
    pub friction: f32,
    pub random_movement_size: f32,
    pub alignment_strength: f32,
    pub non_aligned_decay: f32,
    pub cohesion_strength: f32,
    pub dispersion_strength: f32,
    pub target_fps: f64,
    pub boundary_policy: BoundaryPolicy,
    pub draw_style: DrawStyle,
    pub show_debug: bool,
    pub paused: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
struct ParamSnapshot {
    num_boids: usize,
    influencing_radius: f32,
    dispersion_radius: f32,
    friction: f32,
    random_movement_size: f32,
    alignment_strength: f32,
    non_aligned_decay: f32,
    cohesion_strength: f32,
    dispersion_strength: f32,
    boundary_policy: BoundaryPolicy,
    draw_style: DrawStyle,
    show_debug: bool,
    paused: bool,
}

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("num_boids must be at least 1")]
    NoBoids,
    #[error("friction must lie in (0, 1), got {0}")]
    FrictionOutOfRange(f32),
    #[error("radius must be non-negative, got {0}")]
    NegativeRadius(f32),
    #[error("dispersion_radius ({dispersion}) must not exceed influencing_radius ({influencing})")]
    DispersionExceedsInfluence { dispersion: f32, influencing: f32 },
    #[error("target_fps must be positive, got {0}")]
    NonPositiveFps(f64),
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self::swarming()
    }
}

impl SimulationParams {
    /// Classic flocking: gentle jitter, strong alignment, weak cohesion.
    pub fn flocking() -> Self {
        Self {
            num_boids: 50,
            influencing_radius: 36.0,
            dispersion_radius: 18.0,
            friction: 0.92,
            random_movement_size: 0.4,
            alignment_strength: 0.3,
            non_aligned_decay: 0.7,
            cohesion_strength: 0.03,
            dispersion_strength: 0.1,
            target_fps: 60.0,
            boundary_policy: BoundaryPolicy::Clamp,
            draw_style: DrawStyle::Pixel,
            show_debug: false,
            paused: false,
            previous_values: None,
        }
    }

    /// Bonding and chaotic swarming: strong cohesion against strong
    /// dispersion, slightly anti-aligned.
    pub fn swarming() -> Self {
        Self {
            num_boids: 50,
            influencing_radius: 60.0,
            dispersion_radius: 30.0,
            friction: 0.8,
            random_movement_size: 0.01,
            alignment_strength: -0.05,
            non_aligned_decay: 1.0,
            cohesion_strength: 0.3,
            dispersion_strength: 0.4,
            target_fps: 60.0,
            boundary_policy: BoundaryPolicy::Clamp,
            draw_style: DrawStyle::Pixel,
            show_debug: false,
            paused: false,
            previous_values: None,
        }
    }

    /// Apply a preset's flocking constants, keeping display settings
    /// (draw style, debug, pause) as they are.
    pub fn apply_preset(&mut self, preset: SimulationParams) {
        self.num_boids = preset.num_boids;
        self.influencing_radius = preset.influencing_radius;
        self.dispersion_radius = preset.dispersion_radius;
        self.friction = preset.friction;
        self.random_movement_size = preset.random_movement_size;
        self.alignment_strength = preset.alignment_strength;
        self.non_aligned_decay = preset.non_aligned_decay;
        self.cohesion_strength = preset.cohesion_strength;
        self.dispersion_strength = preset.dispersion_strength;
    }

    /// Check the invariants the update rule relies on. The rule divides
    /// by the neighbor count but never by any of these values, so this
    /// is a startup check rather than a per-frame one.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.num_boids == 0 {
            return Err(ParamsError::NoBoids);
        }
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(ParamsError::FrictionOutOfRange(self.friction));
        }
        for radius in [self.influencing_radius, self.dispersion_radius] {
            if radius < 0.0 {
                return Err(ParamsError::NegativeRadius(radius));
            }
        }
        if self.dispersion_radius > self.influencing_radius {
            return Err(ParamsError::DispersionExceedsInfluence {
                dispersion: self.dispersion_radius,
                influencing: self.influencing_radius,
            });
        }
        if self.target_fps <= 0.0 {
            return Err(ParamsError::NonPositiveFps(self.target_fps));
        }
        Ok(())
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            num_boids: self.num_boids,
            influencing_radius: self.influencing_radius,
            dispersion_radius: self.dispersion_radius,
            friction: self.friction,
            random_movement_size: self.random_movement_size,
            alignment_strength: self.alignment_strength,
            non_aligned_decay: self.non_aligned_decay,
            cohesion_strength: self.cohesion_strength,
            dispersion_strength: self.dispersion_strength,
            boundary_policy: self.boundary_policy,
            draw_style: self.draw_style,
            show_debug: self.show_debug,
            paused: self.paused,
        });
    }

    // Check if any parameters have changed since the last snapshot.
    // Returns (num_boids_changed, any_ui_changed).
    pub fn detect_changes(&self) -> (bool, bool) {
        let mut num_boids_changed = false;
        let mut ui_changed = false;

        if let Some(prev) = &self.previous_values {
            if self.num_boids != prev.num_boids {
                num_boids_changed = true;
                ui_changed = true;
            }

            if self.influencing_radius != prev.influencing_radius
                || self.dispersion_radius != prev.dispersion_radius
                || self.friction != prev.friction
                || self.random_movement_size != prev.random_movement_size
                || self.alignment_strength != prev.alignment_strength
                || self.non_aligned_decay != prev.non_aligned_decay
                || self.cohesion_strength != prev.cohesion_strength
                || self.dispersion_strength != prev.dispersion_strength
                || self.boundary_policy != prev.boundary_policy
                || self.draw_style != prev.draw_style
                || self.show_debug != prev.show_debug
                || self.paused != prev.paused
            {
                ui_changed = true;
            }
        }

        (num_boids_changed, ui_changed)
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_boids_range() -> std::ops::RangeInclusive<usize> {
        1..=500
    }

    pub fn get_radius_range() -> std::ops::RangeInclusive<f32> {
        0.0..=200.0
    }

    pub fn get_friction_range() -> std::ops::RangeInclusive<f32> {
        0.01..=0.99
    }

    pub fn get_jitter_range() -> std::ops::RangeInclusive<f32> {
        0.0..=2.0
    }

    pub fn get_strength_range() -> std::ops::RangeInclusive<f32> {
        -1.0..=1.0
    }

    pub fn get_decay_range() -> std::ops::RangeInclusive<f32> {
        0.0..=1.0
    }
}
