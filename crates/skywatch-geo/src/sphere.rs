//! Coordinate conversion and forward geodesics on a spherical Earth.
//!
//! Latitude is the elevation angle (not colatitude): y points through the
//! north pole, x through (0°N, 0°E), z through (0°N, 90°E).

use glam::DVec3;

use skywatch_core::constants::EARTH_RADIUS_KM;
use skywatch_core::types::{normalize_lon_deg, GeoPoint};

/// Convert lat/lon (degrees) to a Cartesian point at the given radius.
pub fn lat_lon_to_vec(lat_deg: f64, lon_deg: f64, radius: f64) -> DVec3 {
    let lat = lat_deg.to_radians();
    let lon = lon_deg.to_radians();
    DVec3::new(
        radius * lat.cos() * lon.cos(),
        radius * lat.sin(),
        radius * lat.cos() * lon.sin(),
    )
}

/// Recover lat/lon (degrees) from a Cartesian point at any radius.
pub fn vec_to_lat_lon(v: DVec3) -> GeoPoint {
    let unit = v.normalize();
    GeoPoint::new(
        unit.y.asin().to_degrees(),
        unit.z.atan2(unit.x).to_degrees(),
    )
}

/// Forward geodesic: the point reached by travelling `distance_km` along
/// `bearing_deg` from the start point, on a sphere of radius 6371 km.
pub fn destination_point(
    lat_deg: f64,
    lon_deg: f64,
    bearing_deg: f64,
    distance_km: f64,
) -> GeoPoint {
    let brg = bearing_deg.to_radians();
    let d = distance_km / EARTH_RADIUS_KM;
    let lat1 = lat_deg.to_radians();
    let lon1 = lon_deg.to_radians();

    let lat2 = (lat1.sin() * d.cos() + lat1.cos() * d.sin() * brg.cos()).asin();
    let lon2 = lon1
        + (brg.sin() * d.sin() * lat1.cos()).atan2(d.cos() - lat1.sin() * lat2.sin());

    GeoPoint::new(
        lat2.to_degrees(),
        normalize_lon_deg(lon2.to_degrees()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lat_lon_roundtrip() {
        for &lat in &[-89.0, -45.5, 0.0, 12.34, 67.89] {
            for &lon in &[-179.0, -90.0, 0.0, 56.2, 179.9] {
                let v = lat_lon_to_vec(lat, lon, 1.0);
                let p = vec_to_lat_lon(v);
                assert_relative_eq!(p.lat_deg, lat, epsilon = 1e-6);
                assert_relative_eq!(p.lon_deg, lon, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_axes_orientation() {
        // North pole on +y, prime meridian equator on +x, 90°E on +z.
        let np = lat_lon_to_vec(90.0, 0.0, 1.0);
        assert_relative_eq!(np.y, 1.0, epsilon = 1e-12);

        let eq = lat_lon_to_vec(0.0, 0.0, 1.0);
        assert_relative_eq!(eq.x, 1.0, epsilon = 1e-12);

        let east = lat_lon_to_vec(0.0, 90.0, 1.0);
        assert_relative_eq!(east.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_destination_zero_distance_is_identity() {
        for &brg in &[0.0, 45.0, 180.0, 359.0] {
            let p = destination_point(26.5, 56.2, brg, 0.0);
            assert_relative_eq!(p.lat_deg, 26.5, epsilon = 1e-9);
            assert_relative_eq!(p.lon_deg, 56.2, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_destination_north_quarter_circumference() {
        // A quarter circumference due north from the equator lands on the pole.
        let quarter = std::f64::consts::FRAC_PI_2 * 6371.0;
        let p = destination_point(0.0, 0.0, 0.0, quarter);
        assert_relative_eq!(p.lat_deg, 90.0, epsilon = 1e-6);
    }

    #[test]
    fn test_destination_east_at_equator() {
        // 111.19 km east at the equator is very nearly one degree of longitude.
        let one_deg = std::f64::consts::PI / 180.0 * 6371.0;
        let p = destination_point(0.0, 10.0, 90.0, one_deg);
        assert_relative_eq!(p.lat_deg, 0.0, epsilon = 1e-9);
        assert_relative_eq!(p.lon_deg, 11.0, epsilon = 1e-9);
    }
}
