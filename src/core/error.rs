use thiserror::Error;

/// Rejected construction parameters. Raised before any swarm state exists.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("particle count must be positive")]
    ZeroParticles,

    #[error("dimensionality must be positive")]
    ZeroDimensions,

    #[error("iteration count must be positive")]
    ZeroIterations,

    #[error("invalid bounds ({low}, {high}): need finite low < high")]
    InvalidBounds { low: f64, high: f64 },

    #[error("coefficient '{name}' must be finite, got {value}")]
    NonFiniteCoefficient { name: &'static str, value: f64 },
}

/// Failure reported by a fallible objective function.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObjectiveError {
    #[error("objective failed: {0}")]
    Failed(String),
}

#[derive(Error, Debug)]
pub enum BenchmarkError {
    #[error("unknown test function '{0}'")]
    UnknownFunction(String),

    #[error("benchmark needs at least one run")]
    ZeroRuns,

    #[error("invalid swarm configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("run {run} on '{function}' produced no finite score")]
    NoResult { function: String, run: usize },
}
