//! Timed defense scenario state machine.
//!
//! Idle → Approaching (scenario started, dialog shown, clock running) →
//! Resolved (outcome decided) → Idle (dismissed). Whichever of the approach
//! animation, the strategy grid, or the countdown decides first wins; a
//! resolved outcome is never overwritten.

use rand::seq::SliceRandom;
use rand::Rng;

use skywatch_core::constants::DIALOG_OPTION_COUNT;
use skywatch_core::enums::{
    ApproachOptionId, FeedbackQuality, ScenarioOutcome, ScenarioPhase, StrategyId,
};
use skywatch_core::types::AsteroidProfile;
use skywatch_model::strategy::{CORRECT_OPTIONS, WRONG_OPTIONS};

/// One approach-dialog option with its hidden correctness tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogOption {
    pub id: ApproachOptionId,
    pub correct: bool,
}

/// Build the dialog option list: one option from the correct pool and the
/// rest from the wrong pool without replacement, shuffled together.
pub fn build_dialog_options<R: Rng>(rng: &mut R) -> Vec<DialogOption> {
    let correct = *CORRECT_OPTIONS
        .choose(rng)
        .unwrap_or(&CORRECT_OPTIONS[0]);

    let mut wrong = WRONG_OPTIONS.to_vec();
    wrong.shuffle(rng);

    let mut options: Vec<DialogOption> = wrong
        .into_iter()
        .take(DIALOG_OPTION_COUNT - 1)
        .map(|id| DialogOption { id, correct: false })
        .collect();
    options.push(DialogOption {
        id: correct,
        correct: true,
    });
    options.shuffle(rng);
    options
}

/// Engine-owned scenario state.
#[derive(Debug, Clone, Default)]
pub struct ScenarioState {
    pub phase: ScenarioPhase,
    /// Profile under scenario, captured at start.
    pub asteroid: Option<AsteroidProfile>,
    pub question: Option<String>,
    pub options: Vec<DialogOption>,
    /// Index into `options` once the player has chosen.
    pub chosen: Option<usize>,
    /// Strategy picked from the grid, with its graded feedback tier.
    pub strategy: Option<StrategyId>,
    pub feedback: Option<FeedbackQuality>,
    /// Captured when the approach option is chosen; drives the animation
    /// endpoint and the resolution on completion.
    pub should_miss: bool,
    /// Set by the quick-preview entry point: completion never scores.
    pub suppress_outcome: bool,
    pub outcome: Option<ScenarioOutcome>,
}

impl ScenarioState {
    /// Enter the Approaching phase with a fresh dialog.
    pub fn begin(asteroid: AsteroidProfile, question: String, options: Vec<DialogOption>) -> Self {
        Self {
            phase: ScenarioPhase::Approaching,
            asteroid: Some(asteroid),
            question: Some(question),
            options,
            chosen: None,
            strategy: None,
            feedback: None,
            should_miss: false,
            suppress_outcome: false,
            outcome: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == ScenarioPhase::Approaching
    }

    /// Record the final outcome. Once resolved, later attempts (countdown
    /// expiry, animation completion) are ignored.
    pub fn resolve(&mut self, outcome: ScenarioOutcome) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        self.outcome = Some(outcome);
        self.phase = ScenarioPhase::Resolved;
        true
    }

    /// Back to Idle, dropping everything.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_dialog_has_exactly_one_correct_option() {
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let options = build_dialog_options(&mut rng);
            assert_eq!(options.len(), DIALOG_OPTION_COUNT);
            let correct = options.iter().filter(|o| o.correct).count();
            assert_eq!(correct, 1, "seed {seed}");
        }
    }

    #[test]
    fn test_dialog_options_are_distinct() {
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let options = build_dialog_options(&mut rng);
            for (i, a) in options.iter().enumerate() {
                for b in &options[i + 1..] {
                    assert_ne!(a.id, b.id, "seed {seed}");
                }
            }
        }
    }

    #[test]
    fn test_resolve_never_overwrites() {
        let mut state = ScenarioState::begin(
            AsteroidProfile::custom(),
            "q".to_string(),
            Vec::new(),
        );
        assert!(state.resolve(ScenarioOutcome::Saved));
        assert!(!state.resolve(ScenarioOutcome::Failed));
        assert_eq!(state.outcome, Some(ScenarioOutcome::Saved));
        assert_eq!(state.phase, ScenarioPhase::Resolved);
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut state = ScenarioState::begin(
            AsteroidProfile::custom(),
            "q".to_string(),
            Vec::new(),
        );
        state.resolve(ScenarioOutcome::Failed);
        state.reset();
        assert_eq!(state.phase, ScenarioPhase::Idle);
        assert!(state.outcome.is_none());
        assert!(state.asteroid.is_none());
    }
}
