//! Particle swarm optimization for bounded black-box minimization.
//!
//! [`ParticleSwarm`] owns the swarm state and runs the fixed-length update
//! loop; [`benchmark`] repeats it over standard test functions.

pub mod benchmark;
pub mod core;
pub mod optimization;

pub use crate::core::*;
pub use optimization::*;
