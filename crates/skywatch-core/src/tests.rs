#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::state::SceneSnapshot;
    use crate::types::{normalize_lon_deg, AsteroidProfile, ImpactParameters};

    /// Verify the core enums round-trip through serde_json.
    #[test]
    fn test_wave_category_serde() {
        let variants = vec![
            WaveCategory::Land,
            WaveCategory::Ocean,
            WaveCategory::ComplexTerrain,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: WaveCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_deflection_outcome_serde() {
        let variants = vec![
            DeflectionOutcome::SuccessfulDeflection,
            DeflectionOutcome::LikelyMiss,
            DeflectionOutcome::PartialDeflection,
            DeflectionOutcome::ImpactLikely,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: DeflectionOutcome = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_strategy_id_snake_case_serde() {
        let json = serde_json::to_string(&StrategyId::KineticImpactor).unwrap();
        assert_eq!(json, "\"kinetic_impactor\"");
        let back: StrategyId = serde_json::from_str("\"gravity_tractor\"").unwrap();
        assert_eq!(back, StrategyId::GravityTractor);
    }

    #[test]
    fn test_command_serde_tagged() {
        let cmd = PlayerCommand::SetDiameter { km: 0.5 };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"SetDiameter\""), "got {json}");
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, PlayerCommand::SetDiameter { km } if km == 0.5));
    }

    #[test]
    fn test_snapshot_default_serde() {
        let snap = SceneSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: SceneSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.events.len(), 0);
    }

    // ---- Parameter clamping ----

    #[test]
    fn test_diameter_clamped() {
        let mut params = ImpactParameters::default();
        params.set_diameter_km(0.0);
        assert_eq!(params.diameter_km, 0.001);
        params.set_diameter_km(1e6);
        assert_eq!(params.diameter_km, 100.0);
        params.set_diameter_km(f64::NAN);
        assert_eq!(params.diameter_km, 0.001);
    }

    #[test]
    fn test_impact_angle_never_zero() {
        let mut params = ImpactParameters::default();
        params.set_impact_angle_deg(0.0);
        assert_eq!(params.impact_angle_deg, 1.0);
        params.set_impact_angle_deg(90.0);
        assert_eq!(params.impact_angle_deg, 89.0);
    }

    #[test]
    fn test_bearing_wraps() {
        let mut params = ImpactParameters::default();
        params.set_bearing_deg(360.0);
        assert_eq!(params.bearing_deg, 0.0);
        params.set_bearing_deg(-90.0);
        assert_eq!(params.bearing_deg, 270.0);
        params.set_bearing_deg(725.0);
        assert_eq!(params.bearing_deg, 5.0);
    }

    #[test]
    fn test_lon_normalization() {
        assert_eq!(normalize_lon_deg(190.0), -170.0);
        assert_eq!(normalize_lon_deg(-180.0), 180.0);
        assert_eq!(normalize_lon_deg(540.0), 180.0);
        assert_eq!(normalize_lon_deg(0.0), 0.0);
    }

    #[test]
    fn test_apply_profile_leaves_location() {
        let mut params = ImpactParameters::default();
        params.set_latitude_deg(42.0);
        params.set_delta_v_m_s(100.0);

        let profile = AsteroidProfile {
            name: "Test".into(),
            diameter_km: 2.5,
            density_kg_m3: 2600.0,
            velocity_km_s: 12.6,
            is_hazardous: true,
            description: String::new(),
        };
        params.apply_profile(&profile);

        assert_eq!(params.diameter_km, 2.5);
        assert_eq!(params.latitude_deg, 42.0);
        assert_eq!(params.delta_v_m_s, 100.0);
    }
}
