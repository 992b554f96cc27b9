//! Fundamental simulation types: geographic points, asteroid profiles,
//! and the impact parameter set.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// A geographic point in degrees. Latitude in [-90, 90],
/// longitude normalized into (-180, 180].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

impl GeoPoint {
    pub fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }

    pub fn lat_rad(&self) -> f64 {
        self.lat_deg.to_radians()
    }

    pub fn lon_rad(&self) -> f64 {
        self.lon_deg.to_radians()
    }
}

/// Normalize a longitude in degrees into (-180, 180].
pub fn normalize_lon_deg(lon: f64) -> f64 {
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 {
        180.0
    } else {
        wrapped
    }
}

/// A named asteroid profile, either fetched from the NEO catalog or from
/// the builtin fallback table. Immutable once in the table; only the
/// `custom` entry tracks user edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsteroidProfile {
    pub name: String,
    pub diameter_km: f64,
    pub density_kg_m3: f64,
    pub velocity_km_s: f64,
    pub is_hazardous: bool,
    pub description: String,
}

impl AsteroidProfile {
    /// The default user-editable profile.
    pub fn custom() -> Self {
        Self {
            name: "Custom Meteor".to_string(),
            diameter_km: 0.3,
            density_kg_m3: DENSITY_STONY,
            velocity_km_s: 17.0,
            is_hazardous: false,
            description: "User-defined parameters".to_string(),
        }
    }
}

/// Current simulation inputs. Owned exclusively by the engine; every
/// setter clamps out-of-range values instead of rejecting them, and
/// non-finite input falls back to the lower bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactParameters {
    pub diameter_km: f64,
    pub density_kg_m3: f64,
    pub velocity_km_s: f64,
    pub impact_angle_deg: f64,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub delta_v_m_s: f64,
    pub lead_time_days: f64,
    pub bearing_deg: f64,
}

impl Default for ImpactParameters {
    fn default() -> Self {
        let custom = AsteroidProfile::custom();
        Self {
            diameter_km: custom.diameter_km,
            density_kg_m3: custom.density_kg_m3,
            velocity_km_s: custom.velocity_km_s,
            impact_angle_deg: 45.0,
            latitude_deg: 0.0,
            longitude_deg: 0.0,
            delta_v_m_s: 0.0,
            lead_time_days: 0.0,
            bearing_deg: 0.0,
        }
    }
}

/// Clamp a raw input into [min, max]; non-finite input recovers to min.
fn clamp_input(value: f64, min: f64, max: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        min
    }
}

impl ImpactParameters {
    pub fn set_diameter_km(&mut self, v: f64) {
        self.diameter_km = clamp_input(v, DIAMETER_MIN_KM, DIAMETER_MAX_KM);
    }

    pub fn set_density_kg_m3(&mut self, v: f64) {
        self.density_kg_m3 = clamp_input(v, DENSITY_MIN_KG_M3, DENSITY_MAX_KG_M3);
    }

    pub fn set_velocity_km_s(&mut self, v: f64) {
        self.velocity_km_s = clamp_input(v, VELOCITY_MIN_KM_S, VELOCITY_MAX_KM_S);
    }

    pub fn set_impact_angle_deg(&mut self, v: f64) {
        self.impact_angle_deg = clamp_input(v, IMPACT_ANGLE_MIN_DEG, IMPACT_ANGLE_MAX_DEG);
    }

    pub fn set_latitude_deg(&mut self, v: f64) {
        self.latitude_deg = clamp_input(v, LATITUDE_MIN_DEG, LATITUDE_MAX_DEG);
    }

    pub fn set_longitude_deg(&mut self, v: f64) {
        self.longitude_deg = normalize_lon_deg(clamp_input(v, LONGITUDE_MIN_DEG, LONGITUDE_MAX_DEG));
    }

    pub fn set_delta_v_m_s(&mut self, v: f64) {
        self.delta_v_m_s = clamp_input(v, DELTA_V_MIN_M_S, DELTA_V_MAX_M_S);
    }

    pub fn set_lead_time_days(&mut self, v: f64) {
        self.lead_time_days = clamp_input(v, LEAD_TIME_MIN_DAYS, LEAD_TIME_MAX_DAYS);
    }

    /// Bearing wraps into [0, 360).
    pub fn set_bearing_deg(&mut self, v: f64) {
        self.bearing_deg = if v.is_finite() {
            v.rem_euclid(360.0)
        } else {
            0.0
        };
    }

    /// Copy an asteroid profile into the physical parameters.
    /// Location and deflection inputs are untouched.
    pub fn apply_profile(&mut self, profile: &AsteroidProfile) {
        self.set_diameter_km(profile.diameter_km);
        self.set_density_kg_m3(profile.density_kg_m3);
        self.set_velocity_km_s(profile.velocity_km_s);
    }

    /// Impact point as a [`GeoPoint`].
    pub fn impact_point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude_deg, self.longitude_deg)
    }
}
