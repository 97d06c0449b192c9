use crate::core::ObjectiveError;

/// Scalar cost over an n-dimensional position.
///
/// Implementations must be deterministic and free of side effects: the swarm
/// calls `cost` once per particle per iteration, in particle order unless
/// parallel evaluation is requested.
pub trait Objective {
    /// Evaluate cost at `position`. Non-finite values and errors never
    /// become a personal or global best.
    fn cost(&self, position: &[f64]) -> Result<f64, ObjectiveError>;
}

/// Any plain `Fn(&[f64]) -> f64` is an infallible objective.
impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    fn cost(&self, position: &[f64]) -> Result<f64, ObjectiveError> {
        Ok(self(position))
    }
}

/// Snapshot handed to callbacks after each completed iteration
#[derive(Debug, Clone, Copy)]
pub struct IterationReport<'a> {
    /// One-based count of completed iterations
    pub iteration: u32,
    /// Inertia weight used for this iteration's velocity update
    pub inertia: f64,
    pub best_score: f64,
    pub best_position: Option<&'a [f64]>,
}

/// Callback interface for optimization progress
pub trait OptimizationCallback {
    /// Called once per completed iteration with the current global best
    fn on_iteration(&mut self, report: &IterationReport<'_>);
}

/// Callback that ignores every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCallback;

impl OptimizationCallback for NoopCallback {
    fn on_iteration(&mut self, _report: &IterationReport<'_>) {}
}
