/*
 * Boid Collection Module
 *
 * This module owns the ordered set of boids and the deferred membership
 * queues. Additions and removals are committed atomically at the start of
 * each update or draw pass, never while a pass is iterating.
 *
 * The update pass walks the boids front to back and moves them in place,
 * so a boid integrated earlier in the pass is seen at its new position by
 * the boids after it. That ordering is part of the simulation's observable
 * behavior and is covered by a test.
 */

use nannou::prelude::*;

use crate::boid::Boid;
use crate::params::SimulationParams;
use crate::rng::SimRng;

/// Stable handle for deferred removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoidId(pub u32);

pub struct BoidCollection {
    boids: Vec<Boid>,
    pending_adds: Vec<Boid>,
    pending_removes: Vec<BoidId>,
    next_id: u32,
}

impl BoidCollection {
    /// Populate with `count` boids at random positions and zero velocity.
    pub fn new(count: usize, bounds: Vec2, rng: &mut SimRng) -> Self {
        let mut collection = Self {
            boids: Vec::with_capacity(count),
            pending_adds: Vec::new(),
            pending_removes: Vec::new(),
            next_id: 0,
        };
        for _ in 0..count {
            let position = rng.point_in(bounds);
            let id = collection.fresh_id();
            collection.boids.push(Boid::new(id, position));
        }
        collection
    }

    fn fresh_id(&mut self) -> BoidId {
        let id = BoidId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Queue a boid for addition at the next commit point.
    pub fn queue_add(&mut self, position: Point2) -> BoidId {
        let id = self.fresh_id();
        self.pending_adds.push(Boid::new(id, position));
        id
    }

    /// Queue a boid for removal at the next commit point. Queueing the
    /// same id twice is a no-op.
    pub fn queue_remove(&mut self, id: BoidId) {
        if !self.pending_removes.contains(&id) {
            self.pending_removes.push(id);
        }
    }

    /// Queue whatever additions or removals bring the population to
    /// `target`, counted after any already-queued changes. Removals take
    /// the most recently added boids first, queued additions included.
    pub fn queue_resize(&mut self, target: usize, bounds: Vec2, rng: &mut SimRng) {
        let current = self.target_len();
        if target > current {
            for _ in 0..target - current {
                self.queue_add(rng.point_in(bounds));
            }
        } else {
            let surplus = current - target;
            let doomed: Vec<BoidId> = self
                .pending_adds
                .iter()
                .rev()
                .chain(self.boids.iter().rev())
                .filter(|boid| !self.pending_removes.contains(&boid.id))
                .take(surplus)
                .map(|boid| boid.id)
                .collect();
            for id in doomed {
                self.queue_remove(id);
            }
        }
    }

    // Commit point: additions land first, then removals, so a boid added
    // and removed in the same frame never becomes visible.
    fn commit_pending(&mut self) {
        self.boids.append(&mut self.pending_adds);
        for id in self.pending_removes.drain(..) {
            self.boids.retain(|boid| boid.id != id);
        }
    }

    /// One update pass: commit membership, then step every boid in order.
    pub fn update(&mut self, params: &SimulationParams, bounds: Vec2, rng: &mut SimRng) {
        self.commit_pending();
        for i in 0..self.boids.len() {
            let (updated, rest) = self.boids.split_at_mut(i);
            if let Some((boid, pending)) = rest.split_first_mut() {
                boid.step(updated, pending, params, bounds, rng);
            }
        }
    }

    /// One draw pass: commit membership, then draw every boid.
    pub fn draw(&mut self, draw: &Draw, params: &SimulationParams, bounds: Vec2) {
        self.commit_pending();
        for boid in &self.boids {
            boid.draw(draw, bounds, params.draw_style);
        }
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    #[cfg(test)]
    pub(crate) fn boids_mut(&mut self) -> &mut [Boid] {
        &mut self.boids
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    /// Population the collection will have after the next commit point:
    /// committed boids plus queued additions, minus queued removals that
    /// refer to either. Used by the UI to avoid re-queueing while changes
    /// are still pending.
    pub fn target_len(&self) -> usize {
        let removed = self
            .pending_removes
            .iter()
            .filter(|id| {
                self.boids
                    .iter()
                    .chain(self.pending_adds.iter())
                    .any(|boid| boid.id == **id)
            })
            .count();
        self.boids.len() + self.pending_adds.len() - removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Vec2 {
        vec2(800.0, 1000.0)
    }

    fn quiet_params() -> SimulationParams {
        let mut params = SimulationParams::swarming();
        params.random_movement_size = 0.0;
        params
    }

    #[test]
    fn membership_changes_land_only_at_the_commit_point() {
        let mut rng = SimRng::seeded(1);
        let params = quiet_params();
        let mut collection = BoidCollection::new(3, bounds(), &mut rng);

        let added = collection.queue_add(pt2(10.0, 10.0));
        collection.queue_remove(collection.boids()[0].id);
        assert_eq!(collection.len(), 3, "queues must not mutate mid-frame");

        collection.update(&params, bounds(), &mut rng);
        assert_eq!(collection.len(), 3, "one added, one removed");
        assert!(collection.boids().iter().any(|b| b.id == added));
    }

    #[test]
    fn add_and_remove_of_the_same_boid_cancel_out() {
        let mut rng = SimRng::seeded(2);
        let params = quiet_params();
        let mut collection = BoidCollection::new(2, bounds(), &mut rng);

        let id = collection.queue_add(pt2(10.0, 10.0));
        collection.queue_remove(id);
        collection.update(&params, bounds(), &mut rng);

        assert_eq!(collection.len(), 2);
        assert!(collection.boids().iter().all(|b| b.id != id));
    }

    #[test]
    fn queue_resize_grows_and_shrinks() {
        let mut rng = SimRng::seeded(3);
        let params = quiet_params();
        let mut collection = BoidCollection::new(5, bounds(), &mut rng);

        collection.queue_resize(8, bounds(), &mut rng);
        collection.update(&params, bounds(), &mut rng);
        assert_eq!(collection.len(), 8);

        collection.queue_resize(4, bounds(), &mut rng);
        collection.update(&params, bounds(), &mut rng);
        assert_eq!(collection.len(), 4);
    }

    #[test]
    fn resize_shrink_then_grow_between_commits_hits_the_last_target() {
        let mut rng = SimRng::seeded(8);
        let params = quiet_params();
        let mut collection = BoidCollection::new(5, bounds(), &mut rng);

        // Both resizes land before a commit; the second must see the
        // queued removal or it queues nothing and the flock ends short
        collection.queue_resize(4, bounds(), &mut rng);
        assert_eq!(collection.target_len(), 4);
        collection.queue_resize(5, bounds(), &mut rng);
        assert_eq!(collection.target_len(), 5);

        collection.update(&params, bounds(), &mut rng);
        assert_eq!(collection.len(), 5);
    }

    #[test]
    fn resize_shrink_cancels_queued_additions_first() {
        let mut rng = SimRng::seeded(9);
        let params = quiet_params();
        let mut collection = BoidCollection::new(5, bounds(), &mut rng);
        let original: Vec<BoidId> = collection.boids().iter().map(|b| b.id).collect();

        collection.queue_resize(7, bounds(), &mut rng);
        collection.queue_resize(5, bounds(), &mut rng);
        collection.update(&params, bounds(), &mut rng);

        assert_eq!(collection.len(), 5);
        let survivors: Vec<BoidId> = collection.boids().iter().map(|b| b.id).collect();
        assert_eq!(survivors, original, "committed boids outlive queued ones");
    }

    #[test]
    fn repeated_remove_of_one_id_counts_once() {
        let mut rng = SimRng::seeded(10);
        let params = quiet_params();
        let mut collection = BoidCollection::new(3, bounds(), &mut rng);

        let id = collection.boids()[0].id;
        collection.queue_remove(id);
        collection.queue_remove(id);
        assert_eq!(collection.target_len(), 2);

        collection.update(&params, bounds(), &mut rng);
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn later_boids_see_earlier_boids_at_their_new_positions() {
        let mut params = quiet_params();
        params.influencing_radius = 50.0;
        params.dispersion_strength = 0.0;
        params.alignment_strength = 0.0;
        params.cohesion_strength = 0.3;
        params.friction = 0.5;
        let mut rng = SimRng::seeded(4);

        // First boid moves from x=300 to x=320 during the pass; the second
        // boid at x=360 is 60 away from the old position but 40 from the
        // new one, so it only reacts if it sees the updated state.
        let mut collection = BoidCollection::new(2, bounds(), &mut rng);
        collection.boids[0].position = pt2(300.0, 500.0);
        collection.boids[0].velocity = vec2(40.0, 0.0);
        collection.boids[1].position = pt2(360.0, 500.0);

        collection.update(&params, bounds(), &mut rng);

        assert_eq!(collection.boids[0].position.x, 320.0);
        assert!(
            collection.boids[1].velocity.x < 0.0,
            "second boid should steer toward the first boid's new position"
        );
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let params = SimulationParams::swarming();
        let mut rng_a = SimRng::seeded(99);
        let mut rng_b = SimRng::seeded(99);
        let mut a = BoidCollection::new(20, bounds(), &mut rng_a);
        let mut b = BoidCollection::new(20, bounds(), &mut rng_b);

        for _ in 0..10 {
            a.update(&params, bounds(), &mut rng_a);
            b.update(&params, bounds(), &mut rng_b);
        }
        for (x, y) in a.boids().iter().zip(b.boids()) {
            assert_eq!(x.position, y.position);
            assert_eq!(x.velocity, y.velocity);
        }
    }
}
