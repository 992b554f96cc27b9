//! Simulation engine for SKYWATCH.
//!
//! Owns the impact parameters, catalog table, scenario state machine, and
//! countdown clock; processes player commands and produces a
//! [`SceneSnapshot`](skywatch_core::state::SceneSnapshot) per frame.
//! Completely headless: rendering, timers, and network fetches live in
//! external collaborators that call into the engine.

pub mod catalog;
pub mod countdown;
pub mod engine;
pub mod scenario;
pub mod snapshot;

pub use skywatch_core as core;
pub use engine::{SimConfig, SimulationEngine};
