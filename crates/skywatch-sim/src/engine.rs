//! Simulation engine — the core of the application.
//!
//! `SimulationEngine` owns the impact parameters, catalog table, scenario
//! state machine, countdown clock, and approach playback; it processes
//! player commands and produces `SceneSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use skywatch_core::commands::PlayerCommand;
use skywatch_core::constants::{
    APPROACH_STEP_PER_FRAME, COUNTDOWN_SECS, CUSTOM_PROFILE_KEY, LATITUDE_MAX_DEG,
    LATITUDE_MIN_DEG, LONGITUDE_MAX_DEG, LONGITUDE_MIN_DEG,
};
use skywatch_core::enums::{ScenarioOutcome, ScenarioPhase, StrategyId};
use skywatch_core::events::SimEvent;
use skywatch_core::state::SceneSnapshot;
use skywatch_core::types::ImpactParameters;
use skywatch_geo::landmask::ContinentBoxes;
use skywatch_geo::sphere::destination_point;
use skywatch_model::approach::{build_approach_path, ApproachPath};
use skywatch_model::deflection::approach_shift_km;
use skywatch_model::strategy::{feedback_quality, is_strategy_appropriate, mitigation_question};

use crate::catalog::{self, CatalogTable};
use crate::countdown::{Countdown, TickResult};
use crate::scenario::{build_dialog_options, ScenarioState};
use crate::snapshot::{self, SnapshotInputs};

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// Whether a catalog fetch is in flight. The fetch itself happens in an
/// external collaborator; the engine only gates re-entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FetchState {
    #[default]
    Idle,
    InFlight,
}

/// Approach animation playback owned by the engine.
struct ApproachPlayback {
    path: ApproachPath,
    progress: f64,
}

/// The simulation engine. Owns all mutable state.
pub struct SimulationEngine {
    params: ImpactParameters,
    catalog: CatalogTable,
    selected_key: String,
    fallback_active: bool,
    fetch: FetchState,
    scenario: ScenarioState,
    countdown: Countdown,
    playback: Option<ApproachPlayback>,
    show_waves: bool,
    visuals_hidden: bool,
    elevation_m: Option<f64>,
    classifier: ContinentBoxes,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            params: ImpactParameters::default(),
            catalog: CatalogTable::initial(),
            selected_key: CUSTOM_PROFILE_KEY.to_string(),
            fallback_active: false,
            fetch: FetchState::default(),
            scenario: ScenarioState::default(),
            countdown: Countdown::default(),
            playback: None,
            show_waves: false,
            visuals_hidden: false,
            elevation_m: None,
            classifier: ContinentBoxes,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance one render frame and return the resulting snapshot.
    pub fn frame(&mut self) -> SceneSnapshot {
        self.process_commands();
        self.advance_playback();

        let events = std::mem::take(&mut self.events);
        snapshot::build_snapshot(
            SnapshotInputs {
                params: &self.params,
                classifier: &self.classifier,
                elevation_m: self.elevation_m,
                show_waves: self.show_waves,
                visuals_hidden: self.visuals_hidden,
                scenario: &self.scenario,
                time_remaining_secs: self.countdown.remaining_secs(),
                catalog: &self.catalog,
                selected_key: &self.selected_key,
                fallback_active: self.fallback_active,
                fetching: self.fetch == FetchState::InFlight,
                approach: self
                    .playback
                    .as_ref()
                    .map(|p| (&p.path, p.progress)),
            },
            events,
        )
    }

    /// Advance the countdown by one second. Called by the external 1 Hz
    /// timer collaborator; never called while no clock runs.
    pub fn countdown_tick(&mut self) {
        match self.countdown.tick() {
            TickResult::Inactive | TickResult::Running(_) => {}
            TickResult::Expired => {
                self.events.push(SimEvent::CountdownExpired);
                if self.scenario.is_active()
                    && self.scenario.resolve(ScenarioOutcome::Failed)
                {
                    log::info!("countdown expired, scenario failed");
                    self.events.push(SimEvent::OutcomeResolved {
                        outcome: ScenarioOutcome::Failed,
                    });
                }
            }
        }
    }

    /// Mark a catalog fetch as started. A no-op while one is in flight.
    pub fn begin_catalog_fetch(&mut self) -> bool {
        if self.fetch == FetchState::InFlight {
            log::debug!("catalog fetch already in flight, ignoring");
            return false;
        }
        log::info!("catalog fetch started");
        self.fetch = FetchState::InFlight;
        true
    }

    /// Deliver the fetch result. `Ok` carries the raw response body, `Err`
    /// the transport failure. Any failure installs the builtin fallback.
    pub fn complete_catalog_fetch(&mut self, result: Result<String, String>) {
        self.fetch = FetchState::Idle;

        let parse = result.and_then(|body| {
            catalog::parse_neo_catalog(&body).map_err(|e| e.to_string())
        });

        match parse {
            Ok(entries) => {
                let count = entries.len();
                self.catalog.swap(entries);
                self.fallback_active = false;
                if !self.catalog.contains(&self.selected_key) {
                    self.selected_key = CUSTOM_PROFILE_KEY.to_string();
                }
                log::info!(
                    "catalog loaded: {count} asteroids, version {}",
                    self.catalog.version()
                );
                self.events.push(SimEvent::CatalogLoaded {
                    count,
                    version: self.catalog.version(),
                });
            }
            Err(reason) => {
                log::warn!("catalog fetch failed ({reason}), using builtin table");
                self.catalog.swap(catalog::builtin_fallback());
                self.fallback_active = true;
                if !self.catalog.contains(&self.selected_key) {
                    self.selected_key = CUSTOM_PROFILE_KEY.to_string();
                }
                self.events.push(SimEvent::CatalogFallback { reason });
            }
        }
    }

    /// Record the latest elevation sample from the external lookup.
    pub fn set_elevation_sample(&mut self, elevation_m: Option<f64>) {
        self.elevation_m = elevation_m;
    }

    /// Current impact parameters.
    pub fn params(&self) -> &ImpactParameters {
        &self.params
    }

    /// Current scenario phase.
    pub fn phase(&self) -> ScenarioPhase {
        self.scenario.phase
    }

    #[cfg(test)]
    pub(crate) fn scenario(&self) -> &ScenarioState {
        &self.scenario
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SetDiameter { km } => {
                self.params.set_diameter_km(km);
                self.on_param_edit();
            }
            PlayerCommand::SetDensity { kg_m3 } => {
                self.params.set_density_kg_m3(kg_m3);
                self.on_param_edit();
            }
            PlayerCommand::SetVelocity { km_s } => {
                self.params.set_velocity_km_s(km_s);
                self.on_param_edit();
            }
            PlayerCommand::SetLatitude { deg } => {
                self.params.set_latitude_deg(deg);
                self.visuals_hidden = false;
            }
            PlayerCommand::SetLongitude { deg } => {
                self.params.set_longitude_deg(deg);
                self.visuals_hidden = false;
            }
            PlayerCommand::SetImpactAngle { deg } => {
                self.params.set_impact_angle_deg(deg);
                self.visuals_hidden = false;
            }
            PlayerCommand::SetDeltaV { m_s } => {
                self.params.set_delta_v_m_s(m_s);
                self.visuals_hidden = false;
            }
            PlayerCommand::SetLeadTime { days } => {
                self.params.set_lead_time_days(days);
                self.visuals_hidden = false;
            }
            PlayerCommand::SetBearing { deg } => {
                self.params.set_bearing_deg(deg);
                self.visuals_hidden = false;
            }
            PlayerCommand::SelectAsteroid { key } => {
                if let Some(profile) = self.catalog.get(&key) {
                    let profile = profile.clone();
                    self.params.apply_profile(&profile);
                    self.selected_key = key;
                    self.visuals_hidden = false;
                }
            }
            PlayerCommand::RetryCatalogFetch => {
                self.begin_catalog_fetch();
            }
            PlayerCommand::ToggleWaves { visible } => {
                self.show_waves = visible;
            }
            PlayerCommand::ResetVisuals => {
                self.visuals_hidden = true;
            }
            PlayerCommand::StartScenario => self.start_scenario(),
            PlayerCommand::ChooseApproachOption { index } => self.choose_approach_option(index),
            PlayerCommand::ChooseStrategy { strategy } => self.choose_strategy(strategy),
            PlayerCommand::PlayApproachPreview => self.play_preview(),
            PlayerCommand::DismissOutcome => {
                self.scenario.reset();
                self.countdown.stop();
                self.playback = None;
            }
        }
    }

    /// Editing a physical parameter detaches the selector from any catalog
    /// profile: the inputs now describe the custom asteroid.
    fn on_param_edit(&mut self) {
        self.selected_key = CUSTOM_PROFILE_KEY.to_string();
        self.visuals_hidden = false;
    }

    fn start_scenario(&mut self) {
        let named: Vec<_> = self.catalog.named_entries().cloned().collect();
        let (key, profile) = match named.as_slice().choose(&mut self.rng) {
            Some(entry) => (entry.key.clone(), entry.profile.clone()),
            None => (
                CUSTOM_PROFILE_KEY.to_string(),
                skywatch_core::types::AsteroidProfile::custom(),
            ),
        };

        self.params.apply_profile(&profile);
        self.selected_key = key;
        self.params
            .set_latitude_deg(self.rng.gen_range(LATITUDE_MIN_DEG..=LATITUDE_MAX_DEG));
        self.params
            .set_longitude_deg(self.rng.gen_range(LONGITUDE_MIN_DEG..=LONGITUDE_MAX_DEG));
        self.visuals_hidden = false;
        self.playback = None;

        let question = mitigation_question(&profile, &mut self.rng);
        let options = build_dialog_options(&mut self.rng);
        self.scenario = ScenarioState::begin(profile.clone(), question, options);
        self.countdown.start(COUNTDOWN_SECS);

        log::info!("scenario started: {}", profile.name);
        self.events.push(SimEvent::ScenarioStarted {
            asteroid: profile.name,
        });
    }

    fn choose_approach_option(&mut self, index: usize) {
        if !self.scenario.is_active() || self.scenario.chosen.is_some() {
            return;
        }
        let Some(correct) = self.scenario.options.get(index).map(|o| o.correct) else {
            return;
        };

        self.scenario.chosen = Some(index);
        self.scenario.should_miss = correct;
        self.scenario.suppress_outcome = false;
        self.start_playback(self.scenario.should_miss);
    }

    fn choose_strategy(&mut self, strategy: StrategyId) {
        if !self.scenario.is_active() {
            return;
        }
        let Some(asteroid) = self.scenario.asteroid.clone() else {
            return;
        };

        let outcome = if is_strategy_appropriate(strategy, &asteroid) {
            ScenarioOutcome::Saved
        } else {
            ScenarioOutcome::Failed
        };
        let quality = feedback_quality(strategy, &asteroid);
        self.scenario.strategy = Some(strategy);
        self.scenario.feedback = Some(quality);
        self.events.push(SimEvent::StrategyEvaluated { strategy, quality });

        self.countdown.stop();
        if self.scenario.resolve(outcome) {
            self.events.push(SimEvent::OutcomeResolved { outcome });
        }
    }

    /// Replay the approach animation without scoring. Available even with
    /// no scenario running.
    fn play_preview(&mut self) {
        if self.playback.is_some() {
            return;
        }
        self.scenario.suppress_outcome = true;
        let should_miss = self.scenario.should_miss;
        self.start_playback(should_miss);
    }

    fn start_playback(&mut self, should_miss: bool) {
        if self.playback.is_some() {
            return;
        }

        // The visual trajectory aims at the deflection-shifted point,
        // ignoring the impact-angle attenuation.
        let shift_km = approach_shift_km(self.params.delta_v_m_s, self.params.lead_time_days);
        let target = if shift_km > 0.0 {
            destination_point(
                self.params.latitude_deg,
                self.params.longitude_deg,
                self.params.bearing_deg,
                shift_km,
            )
        } else {
            self.params.impact_point()
        };

        self.playback = Some(ApproachPlayback {
            path: build_approach_path(target, should_miss),
            progress: 0.0,
        });
        self.events.push(SimEvent::ApproachStarted { should_miss });
    }

    /// Advance playback one frame and resolve on completion.
    fn advance_playback(&mut self) {
        let Some(playback) = self.playback.as_mut() else {
            return;
        };
        playback.progress = (playback.progress + APPROACH_STEP_PER_FRAME).min(1.0);
        if playback.progress < 1.0 {
            return;
        }

        self.playback = None;

        // A suppressed preview ends here without touching the scenario:
        // the countdown keeps running and expiry can still force failure.
        if self.scenario.suppress_outcome {
            self.scenario.suppress_outcome = false;
            return;
        }

        self.countdown.stop();
        let outcome = if self.scenario.should_miss {
            ScenarioOutcome::Saved
        } else {
            ScenarioOutcome::Failed
        };
        if self.scenario.resolve(outcome) {
            self.events.push(SimEvent::OutcomeResolved { outcome });
        }
    }
}
