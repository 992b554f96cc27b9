//! Events emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{FeedbackQuality, ScenarioOutcome, StrategyId};

/// One-shot events included in the next snapshot after they occur.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A fetched catalog replaced the profile table.
    CatalogLoaded { count: usize, version: u64 },
    /// Catalog fetch failed; the builtin table is active and the retry
    /// affordance should be shown.
    CatalogFallback { reason: String },
    /// A scenario started with the named asteroid.
    ScenarioStarted { asteroid: String },
    /// The approach animation began.
    ApproachStarted { should_miss: bool },
    /// A strategy was picked from the grid and graded.
    StrategyEvaluated {
        strategy: StrategyId,
        quality: FeedbackQuality,
    },
    /// The countdown reached zero.
    CountdownExpired,
    /// The scenario resolved.
    OutcomeResolved { outcome: ScenarioOutcome },
}
