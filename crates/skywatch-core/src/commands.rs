//! Player commands sent from the frontend to the simulation.
//!
//! Commands are validated (clamped) and queued for processing at the next
//! frame boundary.

use serde::{Deserialize, Serialize};

use crate::enums::StrategyId;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Impact parameters ---
    /// Set the asteroid diameter in kilometers.
    SetDiameter { km: f64 },
    /// Set the asteroid bulk density in kg/m³.
    SetDensity { kg_m3: f64 },
    /// Set the approach velocity in km/s.
    SetVelocity { km_s: f64 },
    /// Set the impact latitude in degrees.
    SetLatitude { deg: f64 },
    /// Set the impact longitude in degrees.
    SetLongitude { deg: f64 },
    /// Set the impact angle from local horizontal in degrees.
    SetImpactAngle { deg: f64 },

    // --- Deflection parameters ---
    /// Set the deflection Δv in m/s.
    SetDeltaV { m_s: f64 },
    /// Set the deflection lead time in days.
    SetLeadTime { days: f64 },
    /// Set the deflection bearing in degrees.
    SetBearing { deg: f64 },

    // --- Catalog ---
    /// Load a catalog profile into the parameters (`custom` or a catalog key).
    SelectAsteroid { key: String },
    /// Request another catalog fetch after a failure.
    RetryCatalogFetch,

    // --- Display ---
    /// Show or hide the wave direction arrows.
    ToggleWaves { visible: bool },
    /// Clear all impact visuals until the next recompute.
    ResetVisuals,

    // --- Scenario ---
    /// Start a new timed defense scenario.
    StartScenario,
    /// Choose an option from the approach dialog (index into the shown list).
    ChooseApproachOption { index: usize },
    /// Choose a strategy from the free-choice grid.
    ChooseStrategy { strategy: StrategyId },
    /// Replay the approach animation without scoring an outcome.
    PlayApproachPreview,
    /// Dismiss the displayed outcome and return to Idle.
    DismissOutcome,
}
