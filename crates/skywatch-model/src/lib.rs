//! Numerical models for SKYWATCH.
//!
//! First-order approximations of impact physics, wave propagation,
//! deflection effectiveness, and approach geometry, plus the mitigation
//! strategy taxonomy. Everything here is a pure function over plain data;
//! no model retains state between calls.

pub use skywatch_core as core;

pub mod approach;
pub mod deflection;
pub mod estimator;
pub mod strategy;
pub mod wave;
