//! Coarse land/sea classification.
//!
//! Six axis-aligned lat/lon boxes approximate the major landmasses. This
//! is a deterministic proxy, not a coastline dataset: callers get category
//! stability for a given input, nothing more. The trait seam exists so a
//! real dataset can replace the boxes without touching the wave model.

use skywatch_core::enums::{SurfaceKind, TsunamiConcern};

/// Strategy interface for land/sea classification.
pub trait SurfaceClassifier {
    fn classify(&self, lat_deg: f64, lon_deg: f64) -> SurfaceKind;

    fn is_land(&self, lat_deg: f64, lon_deg: f64) -> bool {
        self.classify(lat_deg, lon_deg) == SurfaceKind::Land
    }
}

/// An axis-aligned lat/lon bounding box, inclusive on all edges.
struct LatLonBox {
    lat_min: f64,
    lat_max: f64,
    lon_min: f64,
    lon_max: f64,
}

impl LatLonBox {
    fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.lat_min && lat <= self.lat_max && lon >= self.lon_min && lon <= self.lon_max
    }
}

/// Very simplified continent outlines.
const CONTINENTS: [LatLonBox; 6] = [
    // North America
    LatLonBox { lat_min: 15.0, lat_max: 70.0, lon_min: -170.0, lon_max: -50.0 },
    // South America
    LatLonBox { lat_min: -55.0, lat_max: 15.0, lon_min: -85.0, lon_max: -30.0 },
    // Europe / Asia
    LatLonBox { lat_min: 35.0, lat_max: 75.0, lon_min: -25.0, lon_max: 180.0 },
    // Africa
    LatLonBox { lat_min: -35.0, lat_max: 35.0, lon_min: -20.0, lon_max: 55.0 },
    // Australia
    LatLonBox { lat_min: -45.0, lat_max: -10.0, lon_min: 110.0, lon_max: 155.0 },
    // Antarctica
    LatLonBox { lat_min: -90.0, lat_max: -60.0, lon_min: -180.0, lon_max: 180.0 },
];

/// The default bounding-box classifier. Stateless, O(1).
#[derive(Debug, Clone, Copy, Default)]
pub struct ContinentBoxes;

impl SurfaceClassifier for ContinentBoxes {
    fn classify(&self, lat_deg: f64, lon_deg: f64) -> SurfaceKind {
        if CONTINENTS.iter().any(|b| b.contains(lat_deg, lon_deg)) {
            SurfaceKind::Land
        } else {
            SurfaceKind::Ocean
        }
    }
}

/// Coastal tsunami concern from an elevation sample (meters above sea
/// level). `None` means the external elevation lookup did not answer.
pub fn tsunami_concern(elevation_m: Option<f64>) -> TsunamiConcern {
    match elevation_m {
        None => TsunamiConcern::Unknown,
        Some(e) if e < 10.0 => TsunamiConcern::High,
        Some(e) if e < 50.0 => TsunamiConcern::Moderate,
        Some(_) => TsunamiConcern::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_land_points() {
        let mask = ContinentBoxes;
        // Central North America, central Australia, Antarctica.
        assert!(mask.is_land(40.0, -100.0));
        assert!(mask.is_land(-25.0, 135.0));
        assert!(mask.is_land(-80.0, 0.0));
    }

    #[test]
    fn test_known_ocean_points() {
        let mask = ContinentBoxes;
        // Mid-Pacific, mid-Atlantic, southern Indian Ocean.
        assert!(!mask.is_land(0.0, -150.0));
        assert!(!mask.is_land(20.0, -40.0));
        assert!(!mask.is_land(-50.0, 80.0));
    }

    #[test]
    fn test_classification_is_stable() {
        let mask = ContinentBoxes;
        for _ in 0..3 {
            assert_eq!(mask.classify(40.0, -100.0), SurfaceKind::Land);
            assert_eq!(mask.classify(0.0, -150.0), SurfaceKind::Ocean);
        }
    }

    #[test]
    fn test_tsunami_concern_tiers() {
        assert_eq!(tsunami_concern(None), TsunamiConcern::Unknown);
        assert_eq!(tsunami_concern(Some(2.0)), TsunamiConcern::High);
        assert_eq!(tsunami_concern(Some(25.0)), TsunamiConcern::Moderate);
        assert_eq!(tsunami_concern(Some(300.0)), TsunamiConcern::Low);
    }
}
