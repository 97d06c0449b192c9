mod particle;
pub mod traits;

pub use particle::{EvaluationFault, ParticleSwarm, SwarmResult, SwarmState};
pub use traits::{IterationReport, NoopCallback, Objective, OptimizationCallback};
