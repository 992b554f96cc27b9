//! Snapshot construction.
//!
//! Pure functions from engine state to the [`SceneSnapshot`] handed to the
//! renderer. Everything derived is recomputed here every frame; the engine
//! persists inputs and scenario state only.

use skywatch_core::constants::*;
use skywatch_core::enums::{ScenarioPhase, SurfaceKind, WaveKind};
use skywatch_core::events::SimEvent;
use skywatch_core::state::{
    ApproachOptionView, ApproachView, CatalogView, CraterView, DeflectedView, DeflectionView,
    GeometryView, ImpactView, SceneSnapshot, ScenarioView, StrategyCardView, WaveArrowView,
};
use skywatch_core::types::ImpactParameters;
use skywatch_geo::landmask::{tsunami_concern, SurfaceClassifier};
use skywatch_geo::paths::{corridor_path, great_circle_ring};
use skywatch_geo::sphere::lat_lon_to_vec;
use skywatch_model::approach::ApproachPath;
use skywatch_model::deflection::{self, DeflectionSolution};
use skywatch_model::estimator;
use skywatch_model::strategy::{self, option_meta, ALL_STRATEGIES};
use skywatch_model::wave::wave_directions;

use crate::catalog::CatalogTable;
use crate::scenario::ScenarioState;

/// Inputs the builder needs beyond the parameters themselves.
pub struct SnapshotInputs<'a> {
    pub params: &'a ImpactParameters,
    pub classifier: &'a dyn SurfaceClassifier,
    /// Latest elevation sample from the external lookup, if any.
    pub elevation_m: Option<f64>,
    pub show_waves: bool,
    /// Set by ResetVisuals; cleared by the next recompute.
    pub visuals_hidden: bool,
    pub scenario: &'a ScenarioState,
    pub time_remaining_secs: Option<u32>,
    pub catalog: &'a CatalogTable,
    pub selected_key: &'a str,
    pub fallback_active: bool,
    pub fetching: bool,
    pub approach: Option<(&'a ApproachPath, f64)>,
}

/// Build the complete frame snapshot.
pub fn build_snapshot(inputs: SnapshotInputs<'_>, events: Vec<SimEvent>) -> SceneSnapshot {
    let solution = deflection::solve(inputs.params);

    SceneSnapshot {
        impact: build_impact_view(inputs.params, inputs.classifier, inputs.elevation_m),
        deflection: build_deflection_view(&solution),
        geometry: build_geometry_view(&inputs, &solution),
        scenario: build_scenario_view(inputs.scenario, inputs.time_remaining_secs),
        catalog: build_catalog_view(
            inputs.catalog,
            inputs.selected_key,
            inputs.fallback_active,
            inputs.fetching,
        ),
        events,
    }
}

fn build_impact_view(
    params: &ImpactParameters,
    classifier: &dyn SurfaceClassifier,
    elevation_m: Option<f64>,
) -> ImpactView {
    let mass_kg = estimator::mass_kg(params.diameter_km, params.density_kg_m3);
    let energy_j = estimator::impact_energy_j(mass_kg, params.velocity_km_s);
    let tnt_megatons = estimator::joules_to_megatons(energy_j);
    let crater_diameter_km = estimator::crater_diameter_km(energy_j);
    let crater_depth_km = estimator::crater_depth_km(crater_diameter_km, params.impact_angle_deg);

    let surface = classifier.classify(params.latitude_deg, params.longitude_deg);
    let wave_kind = match surface {
        SurfaceKind::Land => WaveKind::Seismic,
        SurfaceKind::Ocean => WaveKind::Tsunami,
    };

    ImpactView {
        mass_kg,
        energy_j,
        tnt_megatons,
        crater_diameter_km,
        crater_depth_km,
        surface,
        wave_kind,
        tsunami_concern: tsunami_concern(elevation_m),
    }
}

fn build_deflection_view(solution: &DeflectionSolution) -> DeflectionView {
    DeflectionView {
        shift_km: solution.shift_km,
        miss_probability: solution.miss_probability,
        outcome: solution.outcome,
        required_delta_v_m_s: solution.required_delta_v_m_s,
        deflected_point: solution.deflected_point,
    }
}

fn build_geometry_view(
    inputs: &SnapshotInputs<'_>,
    solution: &DeflectionSolution,
) -> GeometryView {
    let mut geometry = GeometryView::default();

    geometry.approach = inputs.approach.map(|(path, progress)| ApproachView {
        path: path.points.clone(),
        progress,
        position: path.sample(progress),
    });

    if inputs.visuals_hidden {
        return geometry;
    }

    let params = inputs.params;
    let lat = params.latitude_deg;
    let lon = params.longitude_deg;

    geometry.impact_marker = Some(lat_lon_to_vec(lat, lon, SURFACE_OFFSET));

    let crater_diameter_km =
        estimator::crater_diameter_km(estimator::impact_energy_j(
            estimator::mass_kg(params.diameter_km, params.density_kg_m3),
            params.velocity_km_s,
        ));

    let crater_for_damage =
        crater_diameter_km.clamp(DAMAGE_CRATER_MIN_KM, DAMAGE_CRATER_MAX_KM);
    let damage_radius_km = (crater_for_damage * DAMAGE_RADIUS_FACTOR)
        .clamp(DAMAGE_RADIUS_MIN_KM, DAMAGE_RADIUS_MAX_KM);
    geometry.damage_ring = great_circle_ring(lat, lon, damage_radius_km, PATH_SEGMENTS);

    if crater_diameter_km > CRATER_VISIBLE_KM {
        geometry.crater = Some(CraterView {
            radius_km: crater_diameter_km / 2.0,
            depth_km: estimator::crater_depth_km(crater_diameter_km, params.impact_angle_deg),
            position: lat_lon_to_vec(lat, lon, SURFACE_OFFSET),
        });
    }

    if inputs.show_waves {
        let base_length_km = WAVE_BASE_LENGTH_RADII * EARTH_RADIUS_KM;
        geometry.waves = wave_directions(
            lat,
            lon,
            params.impact_angle_deg,
            WAVE_COUNT,
            base_length_km,
            inputs.classifier,
        )
        .into_iter()
        .map(|w| WaveArrowView {
            direction: w.direction,
            length: w.length / EARTH_RADIUS_KM,
            intensity: w.intensity,
            category: w.category,
            color: w.category.color(),
            transitions: w.effects.transitions,
            refraction: w.effects.refraction,
        })
        .collect();
    }

    if solution.shift_km > 0.0 {
        let d = solution.deflected_point;
        let ring_radius_km = (crater_for_damage * DAMAGE_RADIUS_FACTOR).max(DEFLECTED_RING_MIN_KM);
        geometry.deflected = Some(DeflectedView {
            marker: lat_lon_to_vec(d.lat_deg, d.lon_deg, SURFACE_OFFSET),
            ring: great_circle_ring(d.lat_deg, d.lon_deg, ring_radius_km, PATH_SEGMENTS),
            corridor: corridor_path(params.impact_point(), d, PATH_SEGMENTS),
        });
    }

    geometry
}

fn build_scenario_view(scenario: &ScenarioState, time_remaining_secs: Option<u32>) -> ScenarioView {
    ScenarioView {
        phase: scenario.phase,
        asteroid: scenario.asteroid.as_ref().map(|a| a.name.clone()),
        question: scenario.question.clone(),
        options: if scenario.phase == ScenarioPhase::Idle {
            Vec::new()
        } else {
            scenario
                .options
                .iter()
                .map(|o| {
                    let meta = option_meta(o.id);
                    ApproachOptionView {
                        id: o.id,
                        title: meta.title.to_string(),
                        description: meta.description.to_string(),
                    }
                })
                .collect()
        },
        strategies: if scenario.phase == ScenarioPhase::Idle {
            Vec::new()
        } else {
            ALL_STRATEGIES
                .iter()
                .map(|&id| {
                    let card = strategy::profile(id);
                    StrategyCardView {
                        id,
                        title: card.title.to_string(),
                        description: card.description.to_string(),
                        effectiveness: card.effectiveness.to_string(),
                        cost: card.cost.to_string(),
                        timeframe: card.timeframe.to_string(),
                    }
                })
                .collect()
        },
        chosen_strategy: scenario.strategy,
        feedback: scenario.feedback,
        time_remaining_secs,
        outcome: scenario.outcome,
    }
}

fn build_catalog_view(
    catalog: &CatalogTable,
    selected_key: &str,
    fallback_active: bool,
    fetching: bool,
) -> CatalogView {
    CatalogView {
        version: catalog.version(),
        entries: catalog
            .entries()
            .iter()
            .map(|e| (e.key.clone(), e.profile.name.clone()))
            .collect(),
        selected: selected_key.to_string(),
        fallback_active,
        fetching,
    }
}
