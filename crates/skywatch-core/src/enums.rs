//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Coarse surface classification at a geographic point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceKind {
    Land,
    Ocean,
}

/// Dominant wave phenomenon for an impact site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaveKind {
    /// Land impact: ground shock dominates.
    Seismic,
    /// Ocean impact: displaced water dominates.
    Tsunami,
}

/// Category assigned to a single wave direction sample.
///
/// ComplexTerrain overrides the base land/ocean category whenever the
/// wave path crosses at least one land/sea boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaveCategory {
    Land,
    Ocean,
    ComplexTerrain,
}

impl WaveCategory {
    /// Display color (0xRRGGBB).
    pub fn color(&self) -> u32 {
        match self {
            WaveCategory::Land => 0xff4400,
            WaveCategory::Ocean => 0xff0000,
            WaveCategory::ComplexTerrain => 0xff2200,
        }
    }
}

/// Deflection outcome tiers, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeflectionOutcome {
    /// Miss probability reached 1.0.
    SuccessfulDeflection,
    /// Miss probability in [0.7, 1.0).
    LikelyMiss,
    /// Miss probability in [0.3, 0.7).
    PartialDeflection,
    /// Miss probability below 0.3.
    ImpactLikely,
}

/// Asteroid size bucket by diameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeClass {
    /// Diameter < 0.5 km.
    Small,
    /// Diameter < 2 km.
    Medium,
    /// Everything larger.
    Large,
}

/// Scenario lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioPhase {
    /// No scenario running; free parameter exploration.
    #[default]
    Idle,
    /// Scenario started: approach dialog pending or animation playing.
    Approaching,
    /// Outcome decided, awaiting dismissal.
    Resolved,
}

/// Final scenario result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioOutcome {
    /// Earth saved: correct approach chosen before the clock ran out.
    Saved,
    /// Impact: wrong choice, no choice, or countdown expiry.
    Failed,
}

/// Mitigation strategies for the free-choice strategy grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyId {
    KineticImpactor,
    GravityTractor,
    NuclearDeflection,
    LaserAblation,
    SolarSail,
    MassDriver,
}

/// Options shown in the forced-choice approach dialog.
///
/// Distinct from [`StrategyId`]: the dialog draws from fixed pools of
/// tagged-correct and tagged-wrong answers and has its own rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApproachOptionId {
    KineticImpactor,
    GravitationalTractor,
    LaserAblation,
    NuclearExplosions,
    BombingAsteroid,
    AttachingRocket,
    TeleportToSun,
    GlobalFireworks,
    BackyardSlingshots,
    ReflectiveFoil,
    ShootWithGun,
    AskGoku,
}

/// Coastal tsunami concern derived from an elevation sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TsunamiConcern {
    /// No elevation sample available.
    #[default]
    Unknown,
    Low,
    Moderate,
    High,
}

/// Quality tier for strategy feedback text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackQuality {
    Excellent,
    Good,
    Poor,
}
