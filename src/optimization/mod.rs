pub mod callback;
pub mod objective;
pub mod solvers;

pub use callback::ProgressLogger;
pub use objective::{sum_of_squares, Fallible};
pub use solvers::{EvaluationFault, ParticleSwarm, SwarmResult, SwarmState};
pub use solvers::{IterationReport, NoopCallback, Objective, OptimizationCallback};
