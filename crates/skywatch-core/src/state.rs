//! Scene snapshot — the complete set of draw directives and readouts sent
//! to the external renderer after each frame.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::GeoPoint;

/// Everything the renderer needs for one frame. The engine never touches
/// rendering primitives; it emits geometry and scalar parameters only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub impact: ImpactView,
    pub deflection: DeflectionView,
    pub geometry: GeometryView,
    pub scenario: ScenarioView,
    pub catalog: CatalogView,
    pub events: Vec<SimEvent>,
}

/// Derived physical readouts. Recomputed every frame, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactView {
    pub mass_kg: f64,
    pub energy_j: f64,
    pub tnt_megatons: f64,
    pub crater_diameter_km: f64,
    pub crater_depth_km: f64,
    pub surface: SurfaceKind,
    pub wave_kind: WaveKind,
    pub tsunami_concern: TsunamiConcern,
}

impl Default for ImpactView {
    fn default() -> Self {
        Self {
            mass_kg: 0.0,
            energy_j: 0.0,
            tnt_megatons: 0.0,
            crater_diameter_km: 0.0,
            crater_depth_km: 0.0,
            surface: SurfaceKind::Ocean,
            wave_kind: WaveKind::Tsunami,
            tsunami_concern: TsunamiConcern::Unknown,
        }
    }
}

/// Deflection readouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeflectionView {
    pub shift_km: f64,
    pub miss_probability: f64,
    pub outcome: DeflectionOutcome,
    /// Δv required for the reference miss distance; `None` when the lead
    /// time is zero (undefined, not infinity).
    pub required_delta_v_m_s: Option<f64>,
    /// Predicted impact point after deflection (original point when the
    /// shift is zero).
    pub deflected_point: GeoPoint,
}

impl Default for DeflectionView {
    fn default() -> Self {
        Self {
            shift_km: 0.0,
            miss_probability: 0.0,
            outcome: DeflectionOutcome::ImpactLikely,
            required_delta_v_m_s: None,
            deflected_point: GeoPoint::default(),
        }
    }
}

/// Draw directives. All positions are on or near the unit sphere in
/// Earth-radius units.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeometryView {
    /// Impact marker position, or `None` after a visual reset.
    pub impact_marker: Option<DVec3>,
    /// Damage-radius ring polyline.
    pub damage_ring: Vec<DVec3>,
    /// Crater mesh parameters, omitted for negligible craters.
    pub crater: Option<CraterView>,
    /// Wave direction arrows (empty when the toggle is off).
    pub waves: Vec<WaveArrowView>,
    /// Deflected impact visuals, present when the shift is positive.
    pub deflected: Option<DeflectedView>,
    /// Approach animation path and progress while playing.
    pub approach: Option<ApproachView>,
}

/// Crater mesh dimensions (Earth-radius units for position, km for size).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CraterView {
    pub radius_km: f64,
    pub depth_km: f64,
    pub position: DVec3,
}

/// One wave direction arrow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveArrowView {
    /// Unit direction tangent to the surface at the impact point.
    pub direction: DVec3,
    /// Arrow length in Earth-radius units.
    pub length: f64,
    /// Intensity multiplier for arrow scale/opacity.
    pub intensity: f64,
    pub category: WaveCategory,
    /// Display color (0xRRGGBB), derived from the category.
    pub color: u32,
    /// Land/sea transitions along the wave path.
    pub transitions: u32,
    /// Accumulated refraction along the wave path.
    pub refraction: f64,
}

/// Deflected impact point visuals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeflectedView {
    pub marker: DVec3,
    pub ring: Vec<DVec3>,
    /// Great-circle corridor from the original to the deflected point;
    /// `None` when the two coincide.
    pub corridor: Option<Vec<DVec3>>,
}

/// Approach animation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproachView {
    pub path: Vec<DVec3>,
    /// Progress along the path in [0, 1].
    pub progress: f64,
    /// Current asteroid position along the path.
    pub position: DVec3,
}

/// Scenario state for the game overlay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioView {
    pub phase: ScenarioPhase,
    /// Name of the asteroid under scenario, when one is selected.
    pub asteroid: Option<String>,
    /// Generated question text for the dialog.
    pub question: Option<String>,
    /// Approach dialog options in display order. Correctness is not
    /// exposed here; the engine resolves it.
    pub options: Vec<ApproachOptionView>,
    /// Mitigation strategy cards for the free-choice grid.
    pub strategies: Vec<StrategyCardView>,
    /// Strategy picked from the grid, once one has been chosen.
    pub chosen_strategy: Option<StrategyId>,
    /// Feedback tier for the chosen strategy.
    pub feedback: Option<FeedbackQuality>,
    /// Countdown seconds remaining while the clock runs.
    pub time_remaining_secs: Option<u32>,
    pub outcome: Option<ScenarioOutcome>,
}

/// A single approach dialog option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproachOptionView {
    pub id: ApproachOptionId,
    pub title: String,
    pub description: String,
}

/// One mitigation-strategy card for the grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyCardView {
    pub id: StrategyId,
    pub title: String,
    pub description: String,
    pub effectiveness: String,
    pub cost: String,
    pub timeframe: String,
}

/// Catalog status for the asteroid selector.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogView {
    /// Table version, bumped on every successful swap.
    pub version: u64,
    /// Selector entries in display order: (key, display name).
    pub entries: Vec<(String, String)>,
    /// Currently selected key.
    pub selected: String,
    /// Whether the retry affordance should be visible.
    pub fallback_active: bool,
    /// Whether a fetch is in flight.
    pub fetching: bool,
}
