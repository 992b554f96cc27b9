//! Ring and corridor polyline sampling on the unit sphere.
//!
//! Rings serve both damage-radius circles and expanding shock fronts;
//! corridors connect the original and deflected impact points.

use glam::DVec3;

use skywatch_core::constants::EARTH_RADIUS_KM;
use skywatch_core::types::GeoPoint;

/// Sample a circle of the given ground radius around a point by sweeping
/// the bearing through a full turn. Returns `segments + 1` unit vectors
/// (the loop is closed).
pub fn great_circle_ring(
    lat_deg: f64,
    lon_deg: f64,
    radius_km: f64,
    segments: usize,
) -> Vec<DVec3> {
    let d = radius_km / EARTH_RADIUS_KM; // angular radius
    let lat = lat_deg.to_radians();
    let lon = lon_deg.to_radians();

    let mut verts = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let brg = (i as f64 / segments as f64) * std::f64::consts::TAU;
        let lat2 = (lat.sin() * d.cos() + lat.cos() * d.sin() * brg.cos()).asin();
        let lon2 = lon
            + (brg.sin() * d.sin() * lat.cos()).atan2(d.cos() - lat.sin() * lat2.sin());
        verts.push(DVec3::new(
            lat2.cos() * lon2.cos(),
            lat2.sin(),
            lat2.cos() * lon2.sin(),
        ));
    }
    verts
}

/// Sample the great-circle arc between two points by spherical linear
/// interpolation. Returns `None` when the points coincide (zero angular
/// distance would divide by zero).
pub fn corridor_path(a: GeoPoint, b: GeoPoint, segments: usize) -> Option<Vec<DVec3>> {
    let phi1 = a.lat_rad();
    let lam1 = a.lon_rad();
    let phi2 = b.lat_rad();
    let lam2 = b.lon_rad();

    // Haversine angular distance.
    let half_dphi = (phi2 - phi1) / 2.0;
    let half_dlam = (lam2 - lam1) / 2.0;
    let delta = 2.0
        * (half_dphi.sin().powi(2) + phi1.cos() * phi2.cos() * half_dlam.sin().powi(2))
            .sqrt()
            .asin();

    if delta == 0.0 {
        return None;
    }

    let mut verts = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let f = i as f64 / segments as f64;
        let a_coef = ((1.0 - f) * delta).sin() / delta.sin();
        let b_coef = (f * delta).sin() / delta.sin();
        verts.push(DVec3::new(
            a_coef * phi1.cos() * lam1.cos() + b_coef * phi2.cos() * lam2.cos(),
            a_coef * phi1.sin() + b_coef * phi2.sin(),
            a_coef * phi1.cos() * lam1.sin() + b_coef * phi2.cos() * lam2.sin(),
        ));
    }
    Some(verts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ring_is_closed_and_on_sphere() {
        let ring = great_circle_ring(30.0, -45.0, 500.0, 64);
        assert_eq!(ring.len(), 65);

        let first = ring.first().unwrap();
        let last = ring.last().unwrap();
        assert_relative_eq!(first.x, last.x, epsilon = 1e-9);
        assert_relative_eq!(first.y, last.y, epsilon = 1e-9);
        assert_relative_eq!(first.z, last.z, epsilon = 1e-9);

        for v in &ring {
            assert_relative_eq!(v.length(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_ring_constant_ground_distance() {
        let center = crate::sphere::lat_lon_to_vec(30.0, -45.0, 1.0);
        let radius_km = 800.0;
        let expected_angle = radius_km / 6371.0;

        for v in great_circle_ring(30.0, -45.0, radius_km, 32) {
            let angle = center.dot(v).clamp(-1.0, 1.0).acos();
            assert_relative_eq!(angle, expected_angle, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_corridor_coincident_points_is_none() {
        let p = GeoPoint::new(10.0, 20.0);
        assert!(corridor_path(p, p, 64).is_none());
    }

    #[test]
    fn test_corridor_endpoints_match() {
        let a = GeoPoint::new(10.0, 20.0);
        let b = GeoPoint::new(-30.0, 120.0);
        let path = corridor_path(a, b, 128).unwrap();
        assert_eq!(path.len(), 129);

        let start = crate::sphere::vec_to_lat_lon(path[0]);
        let end = crate::sphere::vec_to_lat_lon(path[128]);
        assert_relative_eq!(start.lat_deg, a.lat_deg, epsilon = 1e-6);
        assert_relative_eq!(start.lon_deg, a.lon_deg, epsilon = 1e-6);
        assert_relative_eq!(end.lat_deg, b.lat_deg, epsilon = 1e-6);
        assert_relative_eq!(end.lon_deg, b.lon_deg, epsilon = 1e-6);
    }

    #[test]
    fn test_corridor_stays_on_unit_sphere() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 90.0);
        for v in corridor_path(a, b, 16).unwrap() {
            assert_relative_eq!(v.length(), 1.0, epsilon = 1e-9);
        }
    }
}
