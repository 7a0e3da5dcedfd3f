//! Distance helpers for the neighbor scan.
//!
//! Under the clamp boundary policy distances are plain Euclidean. Under
//! wrap-around the world is a torus, so the scan uses the per-axis minimum
//! of the direct and across-the-seam separations.

use nannou::prelude::*;

use crate::params::BoundaryPolicy;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point2, b: Point2) -> f32 {
    a.distance(b)
}

/// Shortest distance on a torus of extent `bounds`.
pub fn toroidal_distance(a: Point2, b: Point2, bounds: Vec2) -> f32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let dx = dx.min(bounds.x - dx);
    let dy = dy.min(bounds.y - dy);
    (dx * dx + dy * dy).sqrt()
}

/// Distance under the active boundary policy.
#[inline]
pub fn policy_distance(a: Point2, b: Point2, bounds: Vec2, policy: BoundaryPolicy) -> f32 {
    match policy {
        BoundaryPolicy::Clamp => distance(a, b),
        BoundaryPolicy::Wrap => toroidal_distance(a, b, bounds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Vec2 {
        vec2(800.0, 1000.0)
    }

    #[test]
    fn euclidean_distance_matches_pythagoras() {
        assert_eq!(distance(pt2(0.0, 0.0), pt2(3.0, 4.0)), 5.0);
    }

    #[test]
    fn toroidal_distance_is_shorter_across_the_seam() {
        let near_left = pt2(5.0, 500.0);
        let near_right = pt2(795.0, 500.0);
        assert_eq!(toroidal_distance(near_left, near_right, bounds()), 10.0);
        assert_eq!(distance(near_left, near_right), 790.0);
    }

    #[test]
    fn toroidal_distance_equals_euclidean_away_from_edges() {
        let a = pt2(400.0, 500.0);
        let b = pt2(410.0, 520.0);
        let expected = distance(a, b);
        assert!((toroidal_distance(a, b, bounds()) - expected).abs() < 1e-5);
    }

    #[test]
    fn policy_distance_dispatches_on_policy() {
        let a = pt2(5.0, 500.0);
        let b = pt2(795.0, 500.0);
        assert_eq!(
            policy_distance(a, b, bounds(), BoundaryPolicy::Clamp),
            790.0
        );
        assert_eq!(policy_distance(a, b, bounds(), BoundaryPolicy::Wrap), 10.0);
    }
}
