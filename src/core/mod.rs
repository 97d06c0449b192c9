pub mod error;
pub mod types;
pub mod validation;

pub use error::{BenchmarkError, ConfigError, ObjectiveError};
pub use types::*;
pub use validation::validate_config;
