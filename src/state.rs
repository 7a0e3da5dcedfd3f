/*
 * Flock State Module
 *
 * Thin composition over one BoidCollection: forwards the per-frame update
 * and draw passes and exposes the world bounds and the full boid list so
 * the update rule can see its neighbors.
 */

use nannou::prelude::*;

use crate::boid::Boid;
use crate::collection::BoidCollection;
use crate::params::SimulationParams;
use crate::rng::SimRng;

pub struct FlockState {
    pub collection: BoidCollection,
    pub bounds: Vec2,
}

impl FlockState {
    pub fn new(params: &SimulationParams, bounds: Vec2, rng: &mut SimRng) -> Self {
        Self {
            collection: BoidCollection::new(params.num_boids, bounds, rng),
            bounds,
        }
    }

    /// Wrap an existing collection; used when the caller needs precise
    /// control over initial placement.
    pub fn from_parts(collection: BoidCollection, bounds: Vec2) -> Self {
        Self { collection, bounds }
    }

    pub fn update(&mut self, params: &SimulationParams, rng: &mut SimRng) {
        self.collection.update(params, self.bounds, rng);
    }

    pub fn draw(&mut self, draw: &Draw, params: &SimulationParams) {
        self.collection.draw(draw, params, self.bounds);
    }

    /// Non-quit key events end up here. The flocking demo has no key
    /// bindings of its own, so they are only logged.
    pub fn process_key(&mut self, key: Key) {
        log::debug!("unhandled key event: {:?}", key);
    }

    pub fn boids(&self) -> &[Boid] {
        self.collection.boids()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::BoundaryPolicy;

    fn bounds() -> Vec2 {
        vec2(800.0, 1000.0)
    }

    #[test]
    fn update_keeps_every_boid_inside_bounds() {
        let mut params = SimulationParams::swarming();
        params.num_boids = 30;
        let mut rng = SimRng::seeded(11);
        let mut state = FlockState::new(&params, bounds(), &mut rng);

        for policy in [BoundaryPolicy::Clamp, BoundaryPolicy::Wrap] {
            params.boundary_policy = policy;
            for _ in 0..50 {
                state.update(&params, &mut rng);
            }
            for boid in state.boids() {
                assert!(boid.position.x >= 0.0 && boid.position.x < bounds().x);
                assert!(boid.position.y >= 0.0 && boid.position.y < bounds().y);
            }
        }
    }

    #[test]
    fn two_boid_pair_converges_under_pure_cohesion() {
        let mut params = SimulationParams::swarming();
        params.num_boids = 2;
        params.random_movement_size = 0.0;
        params.influencing_radius = 100.0;
        params.dispersion_strength = 0.0;
        params.alignment_strength = 0.0;

        let mut rng = SimRng::seeded(12);
        let mut collection = BoidCollection::new(2, bounds(), &mut rng);
        // Place the pair 10 apart with zero velocity
        collection.boids_mut()[0].position = pt2(395.0, 500.0);
        collection.boids_mut()[1].position = pt2(405.0, 500.0);
        let mut state = FlockState::from_parts(collection, bounds());

        state.update(&params, &mut rng);
        let [a, b] = state.boids() else {
            panic!("expected exactly two boids");
        };
        assert!(a.velocity.x > 0.0, "left boid accelerates right");
        assert!(b.velocity.x < 0.0, "right boid accelerates left");

        for _ in 0..300 {
            state.update(&params, &mut rng);
        }
        let [a, b] = state.boids() else {
            panic!("expected exactly two boids");
        };
        // Converged to a shared point, velocities decayed away. The
        // front-to-back update order makes the meeting point drift from
        // the geometric midpoint; what matters is that they meet.
        assert!(a.position.distance(b.position) < 0.5);
        assert!(a.velocity.length() < 1e-3);
        assert!(b.velocity.length() < 1e-3);
    }
}
