//! Physical estimator: mass, kinetic energy, and crater scaling.
//!
//! These are deliberate first-order approximations. Correctness means
//! internal consistency and reproducibility, not geophysical accuracy.

use skywatch_core::constants::*;
use skywatch_core::enums::SizeClass;

/// Impactor mass in kg: a sphere of the given diameter at the given
/// bulk density.
pub fn mass_kg(diameter_km: f64, density_kg_m3: f64) -> f64 {
    let radius_m = diameter_km * 1000.0 / 2.0;
    let volume = (4.0 / 3.0) * std::f64::consts::PI * radius_m.powi(3);
    volume * density_kg_m3
}

/// Kinetic energy in joules. Velocity is given in km/s.
pub fn impact_energy_j(mass_kg: f64, velocity_km_s: f64) -> f64 {
    let v = velocity_km_s * 1000.0;
    0.5 * mass_kg * v * v
}

/// TNT equivalent in megatons.
pub fn joules_to_megatons(energy_j: f64) -> f64 {
    energy_j / JOULES_PER_MEGATON
}

/// Transient crater diameter in km: `1.8 * Mt^(1/3.4)` for a stony
/// impactor at a typical angle. Non-finite or non-positive megaton values
/// yield 0, never NaN or a negative diameter.
pub fn crater_diameter_km(energy_j: f64) -> f64 {
    let mt = joules_to_megatons(energy_j);
    if !mt.is_finite() || mt <= 0.0 {
        return 0.0;
    }
    CRATER_COEFFICIENT * mt.powf(CRATER_EXPONENT)
}

/// Crater depth in km. Simple craters run about a fifth of the diameter;
/// shallow impact angles make shallower craters. Floored at 0.1 km.
pub fn crater_depth_km(crater_diameter_km: f64, impact_angle_deg: f64) -> f64 {
    let base_depth = crater_diameter_km * CRATER_DEPTH_RATIO;
    let depth = base_depth * impact_angle_deg.to_radians().sin();
    depth.max(CRATER_MIN_DEPTH_KM)
}

/// Size bucket by diameter, shared with strategy scoring.
pub fn size_class(diameter_km: f64) -> SizeClass {
    if diameter_km < SIZE_SMALL_MAX_KM {
        SizeClass::Small
    } else if diameter_km < SIZE_MEDIUM_MAX_KM {
        SizeClass::Medium
    } else {
        SizeClass::Large
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mass_scales_cubically_with_diameter() {
        let m1 = mass_kg(1.0, 3000.0);
        let m2 = mass_kg(2.0, 3000.0);
        assert_relative_eq!(m2, 8.0 * m1, max_relative = 1e-12);
    }

    #[test]
    fn test_mass_scales_linearly_with_density() {
        let m1 = mass_kg(0.5, 1000.0);
        let m3 = mass_kg(0.5, 3000.0);
        assert_relative_eq!(m3, 3.0 * m1, max_relative = 1e-12);
    }

    #[test]
    fn test_energy_scales_with_velocity_squared() {
        let m = mass_kg(0.3, 3000.0);
        let e1 = impact_energy_j(m, 10.0);
        let e2 = impact_energy_j(m, 20.0);
        assert_relative_eq!(e2, 4.0 * e1, max_relative = 1e-12);
    }

    /// The documented Chicxulub-class scenario: d=10 km, ρ=3000, v=20 km/s.
    #[test]
    fn test_reference_scenario() {
        let m = mass_kg(10.0, 3000.0);
        assert_relative_eq!(m, 1.57e15, max_relative = 0.01);

        let e = impact_energy_j(m, 20.0);
        assert_relative_eq!(e, 3.14e23, max_relative = 0.01);

        // ~75 million megatons, crater well over 100 km by this scaling.
        let crater = crater_diameter_km(e);
        assert!(crater > 100.0, "crater {crater} km");
    }

    #[test]
    fn test_crater_zero_energy() {
        assert_eq!(crater_diameter_km(0.0), 0.0);
        assert_eq!(crater_diameter_km(-5.0), 0.0);
        assert_eq!(crater_diameter_km(f64::NAN), 0.0);
        assert_eq!(crater_diameter_km(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_crater_finite_and_nonnegative() {
        for exp in 0..20 {
            let e = 10f64.powi(exp);
            let d = crater_diameter_km(e);
            assert!(d.is_finite() && d >= 0.0, "energy {e}: crater {d}");
        }
    }

    #[test]
    fn test_crater_depth_floor() {
        // Tiny craters and shallow angles floor at 0.1 km.
        assert_eq!(crater_depth_km(0.01, 5.0), 0.1);
        assert_eq!(crater_depth_km(1.0, 1.0), 0.1);

        // A large steep crater exceeds the floor but not the base depth.
        let d = crater_depth_km(50.0, 89.0);
        assert!(d > 0.1);
        assert!(d <= 50.0 * 0.2);
    }

    #[test]
    fn test_size_classes() {
        assert_eq!(size_class(0.3), SizeClass::Small);
        assert_eq!(size_class(0.5), SizeClass::Medium);
        assert_eq!(size_class(1.9), SizeClass::Medium);
        assert_eq!(size_class(2.0), SizeClass::Large);
        assert_eq!(size_class(950.0), SizeClass::Large);
    }
}
