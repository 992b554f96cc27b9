//! Geographic wave model.
//!
//! For each of a fixed number of equally spaced bearings around the impact
//! point, walk outward in sub-segments classifying land/sea, then adjust
//! the direction's length, intensity, and category from what was crossed.
//! Fully deterministic: the same inputs always produce the same sequence.

use glam::DVec3;

use skywatch_core::constants::*;
use skywatch_core::enums::WaveCategory;
use skywatch_geo::landmask::SurfaceClassifier;
use skywatch_geo::sphere::{destination_point, lat_lon_to_vec};

/// Geographic effects accumulated along one wave path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoEffects {
    /// Land/sea boundary crossings along the path.
    pub transitions: u32,
    /// Refraction accumulator: positive entering shallow water near land.
    pub refraction: f64,
    /// Whether the impact point itself is on land.
    pub impact_on_land: bool,
    /// Whether the path's final point is on land.
    pub ends_on_land: bool,
}

/// One directional wave sample.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveDirection {
    /// Unit direction tangent to the surface at the impact point.
    pub direction: DVec3,
    /// Adjusted length, in the same unit as the base length passed in.
    pub length: f64,
    /// Intensity multiplier.
    pub intensity: f64,
    pub category: WaveCategory,
    pub effects: GeoEffects,
}

/// Walk one wave path and accumulate geographic effects.
fn walk_path(
    impact_lat: f64,
    impact_lon: f64,
    bearing_deg: f64,
    distance_km: f64,
    impact_on_land: bool,
    classifier: &dyn SurfaceClassifier,
) -> GeoEffects {
    let step_km = distance_km / WAVE_STEPS as f64;

    let mut lat = impact_lat;
    let mut lon = impact_lon;
    let mut transitions = 0u32;
    let mut refraction = 0.0;

    for _ in 0..WAVE_STEPS {
        let next = destination_point(lat, lon, bearing_deg, step_km);
        let was_land = classifier.is_land(lat, lon);
        let is_land = classifier.is_land(next.lat_deg, next.lon_deg);

        if was_land != is_land {
            transitions += 1;
            refraction += if is_land {
                WAVE_REFRACTION_ENTER_LAND
            } else {
                WAVE_REFRACTION_ENTER_SEA
            };
        }

        lat = next.lat_deg;
        lon = next.lon_deg;
    }

    GeoEffects {
        transitions,
        refraction,
        impact_on_land,
        ends_on_land: classifier.is_land(lat, lon),
    }
}

/// Compute the full set of wave directions for an impact. `base_length_km`
/// is both the walked path distance and the unit of the returned lengths.
pub fn wave_directions(
    impact_lat: f64,
    impact_lon: f64,
    impact_angle_deg: f64,
    count: usize,
    base_length_km: f64,
    classifier: &dyn SurfaceClassifier,
) -> Vec<WaveDirection> {
    let impact_on_land = classifier.is_land(impact_lat, impact_lon);
    let impact_normal = lat_lon_to_vec(impact_lat, impact_lon, 1.0);
    let impact_angle_rad = impact_angle_deg.to_radians();

    let mut waves = Vec::with_capacity(count);

    for i in 0..count {
        let angle = (i as f64 / count as f64) * std::f64::consts::TAU;

        // Radial direction in the equatorial plane, projected onto the
        // tangent plane at the impact point. Degenerates to zero when the
        // radial direction is parallel to the surface normal.
        let base = DVec3::new(angle.cos(), 0.0, angle.sin());
        let direction = (base - impact_normal * base.dot(impact_normal)).normalize_or_zero();

        let bearing_deg = direction.z.atan2(direction.x).to_degrees();
        let effects = walk_path(
            impact_lat,
            impact_lon,
            bearing_deg,
            base_length_km,
            impact_on_land,
            classifier,
        );

        let mut length = base_length_km;
        let mut intensity = 1.0;
        let mut category;

        if impact_on_land {
            // Land impacts: more focused, more intense.
            length *= WAVE_LAND_LENGTH_FACTOR;
            intensity *= WAVE_LAND_INTENSITY_FACTOR;
            category = WaveCategory::Land;
        } else {
            // Ocean impacts: more spread, tsunami-like.
            length *= WAVE_OCEAN_LENGTH_FACTOR;
            intensity *= WAVE_OCEAN_INTENSITY_FACTOR;
            category = WaveCategory::Ocean;
        }

        if effects.transitions > 0 {
            length *= 1.0 + effects.transitions as f64 * WAVE_TRANSITION_LENGTH_GAIN;
            category = WaveCategory::ComplexTerrain;
        }

        // Impact angle attenuation: steep impacts push waves further.
        length *= impact_angle_rad.sin() * 0.3 + 0.7;

        // Directional bias relative to the impact angle.
        length *= (angle - impact_angle_rad).cos() * 0.4 + 0.6;

        waves.push(WaveDirection {
            direction,
            length,
            intensity,
            category,
            effects,
        });
    }

    waves
}

#[cfg(test)]
mod tests {
    use super::*;
    use skywatch_core::enums::SurfaceKind;
    use skywatch_geo::landmask::ContinentBoxes;

    /// Classifier that splits the world at the prime meridian.
    struct EastLand;
    impl SurfaceClassifier for EastLand {
        fn classify(&self, _lat: f64, lon: f64) -> SurfaceKind {
            if lon >= 0.0 {
                SurfaceKind::Land
            } else {
                SurfaceKind::Ocean
            }
        }
    }

    #[test]
    fn test_wave_count_is_fixed() {
        let waves = wave_directions(40.0, -100.0, 45.0, 16, 500.0, &ContinentBoxes);
        assert_eq!(waves.len(), 16);

        let waves = wave_directions(-89.0, 10.0, 5.0, 16, 500.0, &ContinentBoxes);
        assert_eq!(waves.len(), 16);
    }

    #[test]
    fn test_deterministic_for_same_inputs() {
        let a = wave_directions(12.3, 45.6, 30.0, 16, 500.0, &ContinentBoxes);
        let b = wave_directions(12.3, 45.6, 30.0, 16, 500.0, &ContinentBoxes);
        assert_eq!(a, b);
    }

    #[test]
    fn test_directions_are_tangent_units() {
        let normal = lat_lon_to_vec(40.0, -100.0, 1.0);
        for w in wave_directions(40.0, -100.0, 45.0, 16, 500.0, &ContinentBoxes) {
            assert!((w.direction.length() - 1.0).abs() < 1e-9);
            assert!(w.direction.dot(normal).abs() < 1e-9, "not tangent");
        }
    }

    #[test]
    fn test_land_impact_shorter_than_ocean() {
        // Same latitude and angle so the per-direction bias matches; only
        // the surface kind differs.
        let land = wave_directions(40.0, -100.0, 45.0, 16, 500.0, &ContinentBoxes);
        let ocean = wave_directions(40.0, -40.0, 45.0, 16, 500.0, &ContinentBoxes);

        for (l, o) in land.iter().zip(ocean.iter()) {
            if l.effects.transitions == 0 && o.effects.transitions == 0 {
                assert!(l.length < o.length);
                assert!(l.intensity > o.intensity);
            }
        }
    }

    #[test]
    fn test_transitions_recolor_complex_terrain() {
        // Impact just west of the synthetic coastline: eastbound waves
        // cross into land.
        let waves = wave_directions(0.0, -0.5, 45.0, 16, 500.0, &EastLand);
        let complex = waves
            .iter()
            .filter(|w| w.category == WaveCategory::ComplexTerrain)
            .count();
        assert!(complex > 0, "no wave crossed the coastline");

        for w in &waves {
            if w.effects.transitions > 0 {
                assert_eq!(w.category, WaveCategory::ComplexTerrain);
                assert!(w.effects.refraction != 0.0);
            }
        }
    }

    #[test]
    fn test_steeper_impact_lengthens_waves() {
        let shallow = wave_directions(0.0, -150.0, 5.0, 16, 500.0, &ContinentBoxes);
        let steep = wave_directions(0.0, -150.0, 85.0, 16, 500.0, &ContinentBoxes);

        let sum_shallow: f64 = shallow.iter().map(|w| w.length).sum();
        let sum_steep: f64 = steep.iter().map(|w| w.length).sum();
        assert!(sum_steep > sum_shallow);
    }
}
