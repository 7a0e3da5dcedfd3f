/*
 * Boid Module
 *
 * This module defines the Boid struct and its velocity update rule.
 * Each frame a boid, in this order:
 * 1. Adds Gaussian jitter to its velocity
 * 2. Applies friction (exponential decay)
 * 3. Scans for neighbors within the influencing radius
 * 4. Alignment: decays, then blends in neighbor velocities
 * 5. Cohesion: steers toward the neighbor centroid
 * 6. Dispersion: steers away from neighbors inside the dispersion radius
 * 7. Integrates position and applies the boundary policy
 *
 * There is deliberately no maximum-speed clamp; badly tuned constants can
 * grow velocity without bound.
 */

use nannou::prelude::*;

use crate::collection::BoidId;
use crate::geometry;
use crate::params::{BoundaryPolicy, DrawStyle, SimulationParams};
use crate::renderer;
use crate::rng::SimRng;
use crate::BOID_SIZE;

#[derive(Clone)]
pub struct Boid {
    pub id: BoidId,
    pub position: Point2,
    pub velocity: Vec2,
    pub color: Rgb<u8>,
}

impl Boid {
    pub fn new(id: BoidId, position: Point2) -> Self {
        Self {
            id,
            position,
            velocity: Vec2::ZERO,
            color: rgb(255, 255, 255),
        }
    }

    /// Run one frame of the flocking rule and integrate.
    ///
    /// `updated` holds the boids earlier in this pass (already moved this
    /// frame); `pending` holds the ones not yet moved. Splitting them this
    /// way excludes the boid itself from its own neighbor scan while
    /// keeping the front-to-back, in-place update ordering.
    pub fn step(
        &mut self,
        updated: &[Boid],
        pending: &[Boid],
        params: &SimulationParams,
        bounds: Vec2,
        rng: &mut SimRng,
    ) {
        self.velocity += rng.gaussian_vec2() * params.random_movement_size;
        self.velocity *= params.friction;

        let neighbors: Vec<(f32, &Boid)> = updated
            .iter()
            .chain(pending.iter())
            .filter_map(|other| {
                let dist = geometry::policy_distance(
                    self.position,
                    other.position,
                    bounds,
                    params.boundary_policy,
                );
                (dist < params.influencing_radius).then_some((dist, other))
            })
            .collect();

        // Alignment
        if !neighbors.is_empty() {
            self.velocity *= params.non_aligned_decay;
            let count = neighbors.len() as f32;
            for (_, other) in &neighbors {
                self.velocity += params.alignment_strength * other.velocity / count;
            }
        }

        // Cohesion
        if !neighbors.is_empty() {
            let count = neighbors.len() as f32;
            let centroid = neighbors
                .iter()
                .fold(Vec2::ZERO, |sum, (_, other)| sum + other.position)
                / count;
            self.velocity += -params.cohesion_strength * (self.position - centroid);
        }

        // Dispersion
        for (dist, other) in &neighbors {
            if *dist < params.dispersion_radius {
                self.velocity += params.dispersion_strength * (self.position - other.position);
            }
        }

        self.position += self.velocity;
        self.apply_boundary(bounds, params.boundary_policy);
    }

    /// Keep the position inside `[0, bounds)` per the active policy.
    pub fn apply_boundary(&mut self, bounds: Vec2, policy: BoundaryPolicy) {
        match policy {
            BoundaryPolicy::Clamp => {
                if self.position.x < 0.0 {
                    self.position.x = 0.0;
                    self.velocity.x = 0.0;
                } else if self.position.x >= bounds.x {
                    self.position.x = bounds.x - 1.0;
                    self.velocity.x = 0.0;
                }
                if self.position.y < 0.0 {
                    self.position.y = 0.0;
                    self.velocity.y = 0.0;
                } else if self.position.y >= bounds.y {
                    self.position.y = bounds.y - 1.0;
                    self.velocity.y = 0.0;
                }
            }
            BoundaryPolicy::Wrap => {
                // f32 rem_euclid can round up to the modulus itself for
                // tiny negative inputs; the extra % folds that back to 0
                self.position.x = self.position.x.rem_euclid(bounds.x) % bounds.x;
                self.position.y = self.position.y.rem_euclid(bounds.y) % bounds.y;
            }
        }
    }

    // Draw the boid as a single pixel or a velocity-oriented triangle
    pub fn draw(&self, draw: &Draw, bounds: Vec2, style: DrawStyle) {
        let screen_pos = renderer::world_to_screen(self.position, bounds);

        match style {
            DrawStyle::Pixel => {
                draw.rect()
                    .x_y(screen_pos.x.floor(), screen_pos.y.floor())
                    .w_h(1.0, 1.0)
                    .color(self.color);
            }
            DrawStyle::Triangle => {
                // World y points down, screen y points up
                let angle = (-self.velocity.y).atan2(self.velocity.x);
                let points = [
                    pt2(BOID_SIZE, 0.0),
                    pt2(-BOID_SIZE, BOID_SIZE / 2.0),
                    pt2(-BOID_SIZE, -BOID_SIZE / 2.0),
                ];
                draw.polygon()
                    .color(self.color)
                    .points(points)
                    .xy(screen_pos)
                    .rotate(angle);
            }
        }
    }
}
