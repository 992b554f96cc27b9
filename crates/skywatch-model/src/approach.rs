//! Approach trajectory for the incoming asteroid.
//!
//! The path is a straight dive from deep space toward the (possibly
//! deflection-shifted) target point, eased so the body spends most of the
//! run far out and only closes on the surface late. Radii are expressed in
//! Earth-radius units on the render sphere.

use glam::DVec3;

use crate::core::constants::{
    APPROACH_EASE_EXPONENT, APPROACH_END_RADIUS_HIT, APPROACH_END_RADIUS_MISS,
    APPROACH_START_RADIUS, APPROACH_TARGET_RADIUS_HIT, APPROACH_TARGET_RADIUS_MISS,
    PATH_SEGMENTS,
};
use crate::core::types::GeoPoint;
use skywatch_geo::sphere::lat_lon_to_vec;

/// A sampled approach trajectory in scene space.
#[derive(Debug, Clone, PartialEq)]
pub struct ApproachPath {
    /// `segments + 1` samples from deep space down to the end radius.
    pub points: Vec<DVec3>,
    /// Whether the trajectory skims past the planet instead of striking it.
    pub should_miss: bool,
}

impl ApproachPath {
    /// Point at normalised progress `t` in `[0, 1]`, snapped to the nearest
    /// earlier sample.
    pub fn sample(&self, t: f64) -> DVec3 {
        let last = self.points.len() - 1;
        let idx = ((t.clamp(0.0, 1.0) * last as f64) as usize).min(last);
        self.points[idx]
    }
}

/// Builds the approach trajectory toward `target`.
///
/// A missing trajectory aims slightly above the surface and levels off at
/// 1.25 radii; a striking one bottoms out just above the crust at 1.02.
pub fn build_approach_path(target: GeoPoint, should_miss: bool) -> ApproachPath {
    let target_radius = if should_miss {
        APPROACH_TARGET_RADIUS_MISS
    } else {
        APPROACH_TARGET_RADIUS_HIT
    };
    let end_radius = if should_miss {
        APPROACH_END_RADIUS_MISS
    } else {
        APPROACH_END_RADIUS_HIT
    };

    let dir = lat_lon_to_vec(target.lat_deg, target.lon_deg, target_radius).normalize();

    let segments = PATH_SEGMENTS;
    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let f = i as f64 / segments as f64;
        let eased = f.powf(APPROACH_EASE_EXPONENT);
        let r = APPROACH_START_RADIUS + (end_radius - APPROACH_START_RADIUS) * eased;
        points.push(dir * r);
    }

    ApproachPath { points, should_miss }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn target() -> GeoPoint {
        GeoPoint { lat_deg: 12.0, lon_deg: -45.0 }
    }

    #[test]
    fn path_has_expected_sample_count() {
        let path = build_approach_path(target(), false);
        assert_eq!(path.points.len(), PATH_SEGMENTS + 1);
    }

    #[test]
    fn starts_far_out_and_ends_at_end_radius() {
        let hit = build_approach_path(target(), false);
        assert_relative_eq!(hit.points[0].length(), APPROACH_START_RADIUS, epsilon = 1e-9);
        assert_relative_eq!(
            hit.points.last().unwrap().length(),
            APPROACH_END_RADIUS_HIT,
            epsilon = 1e-9
        );

        let miss = build_approach_path(target(), true);
        assert_relative_eq!(
            miss.points.last().unwrap().length(),
            APPROACH_END_RADIUS_MISS,
            epsilon = 1e-9
        );
    }

    #[test]
    fn path_is_radial_toward_target() {
        let path = build_approach_path(target(), false);
        let dir = lat_lon_to_vec(12.0, -45.0, 1.0);
        for p in &path.points {
            assert_relative_eq!(p.normalize().dot(dir), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn radius_decreases_monotonically() {
        let path = build_approach_path(target(), true);
        for pair in path.points.windows(2) {
            assert!(pair[1].length() < pair[0].length());
        }
    }

    #[test]
    fn easing_keeps_early_samples_far_out() {
        // With a >1 exponent the first half of the run covers less than half
        // of the radial distance.
        let path = build_approach_path(target(), false);
        let mid = path.points[PATH_SEGMENTS / 2].length();
        let halfway = (APPROACH_START_RADIUS + APPROACH_END_RADIUS_HIT) / 2.0;
        assert!(mid > halfway);
    }

    #[test]
    fn sample_clamps_progress() {
        let path = build_approach_path(target(), false);
        assert_eq!(path.sample(-0.5), path.points[0]);
        assert_eq!(path.sample(2.0), *path.points.last().unwrap());
        assert_eq!(path.sample(0.0), path.points[0]);
    }
}
