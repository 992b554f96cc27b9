//! Deflection model: shift distance, miss probability, outcome tier, and
//! the Δv required for a reference miss.

use skywatch_core::constants::*;
use skywatch_core::enums::DeflectionOutcome;
use skywatch_core::types::{GeoPoint, ImpactParameters};
use skywatch_geo::sphere::destination_point;

/// Solved deflection outcome for the current parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct DeflectionSolution {
    /// Ground shift of the impact point in km.
    pub shift_km: f64,
    /// Normalized shift against the reference miss distance, in [0, 1].
    pub miss_probability: f64,
    pub outcome: DeflectionOutcome,
    /// Δv needed to reach the reference miss distance at the given lead
    /// time. `None` when the lead time is zero: the requirement is
    /// undefined, not infinite.
    pub required_delta_v_m_s: Option<f64>,
    /// Impact point after the shift is applied along the bearing.
    pub deflected_point: GeoPoint,
}

/// Solve the deflection model. Assumes the impact angle has already been
/// clamped to at least 1°, so sin(angle) never reaches zero; near-zero
/// angles still produce very large required Δv, which is reported as-is.
pub fn solve(params: &ImpactParameters) -> DeflectionSolution {
    let seconds = params.lead_time_days.max(0.0) * SECONDS_PER_DAY;
    let angle_factor = params.impact_angle_deg.to_radians().sin();

    let shift_km = params.delta_v_m_s * seconds * angle_factor / 1000.0;
    let miss_probability = (shift_km / REQUIRED_MISS_KM).clamp(0.0, 1.0);

    let outcome = if miss_probability >= 1.0 {
        DeflectionOutcome::SuccessfulDeflection
    } else if miss_probability >= MISS_TIER_LIKELY {
        DeflectionOutcome::LikelyMiss
    } else if miss_probability >= MISS_TIER_PARTIAL {
        DeflectionOutcome::PartialDeflection
    } else {
        DeflectionOutcome::ImpactLikely
    };

    let required_delta_v_m_s = if seconds > 0.0 {
        Some(REQUIRED_MISS_KM * 1000.0 / (seconds * angle_factor))
    } else {
        None
    };

    let deflected_point = if shift_km > 0.0 {
        destination_point(
            params.latitude_deg,
            params.longitude_deg,
            params.bearing_deg,
            shift_km,
        )
    } else {
        params.impact_point()
    };

    DeflectionSolution {
        shift_km,
        miss_probability,
        outcome,
        required_delta_v_m_s,
        deflected_point,
    }
}

/// Shift used by the approach-path builder. The visual trajectory ignores
/// the impact-angle attenuation; the path is illustrative, not causal.
pub fn approach_shift_km(delta_v_m_s: f64, lead_time_days: f64) -> f64 {
    delta_v_m_s * lead_time_days.max(0.0) * SECONDS_PER_DAY / 1000.0
}
