//! Repeated optimizer runs over named test functions, with summary
//! statistics. Produces numeric data only; rendering is left to consumers.

pub mod functions;
pub mod harness;

pub use functions::{lookup, TestFunction, TEST_FUNCTIONS};
pub use harness::{run_benchmark, run_suite, BenchmarkOptions, BenchmarkReport, RunRecord, Summary};
