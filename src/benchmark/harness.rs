use super::functions::{lookup, TestFunction};
use crate::core::{BenchmarkError, SwarmConfig};
use crate::optimization::{ParticleSwarm, ProgressLogger};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Settings shared by every run of a benchmark.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkOptions {
    pub runs: usize,
    pub dimensions: usize,
    pub particles: usize,
    pub max_iter: u32,
    /// Use the linear inertia schedule
    pub adaptive: bool,
    /// Run `r` is seeded with `seed + r`; `None` leaves every run unseeded
    pub seed: Option<u64>,
    /// Evaluate particles on the rayon pool
    pub parallel: bool,
}

impl Default for BenchmarkOptions {
    fn default() -> Self {
        Self {
            runs: 10,
            dimensions: 10,
            particles: 30,
            max_iter: 200,
            adaptive: true,
            seed: None,
            parallel: false,
        }
    }
}

impl BenchmarkOptions {
    /// Swarm configuration for run `run` on `function`.
    pub fn swarm_config(&self, function: &TestFunction, run: usize) -> SwarmConfig {
        let (low, high) = function.bounds;
        let mut config = SwarmConfig::default()
            .with_particles(self.particles)
            .with_dimensions(self.dimensions)
            .with_max_iter(self.max_iter)
            .with_bounds(low, high);
        if self.adaptive {
            config = config.adaptive();
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed.wrapping_add(run as u64));
        }
        config
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunRecord {
    pub run: usize,
    pub seed: Option<u64>,
    pub best_score: f64,
    /// `|best_score - optimal|`
    pub error: f64,
    pub best_position: Vec<f64>,
    pub history: Vec<f64>,
}

/// Mean, population standard deviation and minimum of a sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
}

impl Summary {
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        Some(Self {
            mean,
            std: variance.sqrt(),
            min,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BenchmarkReport {
    pub function: String,
    pub description: String,
    pub bounds: (f64, f64),
    pub dimensions: usize,
    pub optimal: f64,
    pub summary: Summary,
    pub runs: Vec<RunRecord>,
}

impl BenchmarkReport {
    pub fn best_scores(&self) -> Vec<f64> {
        self.runs.iter().map(|r| r.best_score).collect()
    }

    /// Per-iteration mean of the global best across runs.
    pub fn mean_history(&self) -> Vec<f64> {
        let Some(first) = self.runs.first() else {
            return Vec::new();
        };
        let n = self.runs.len() as f64;
        (0..first.history.len())
            .map(|i| self.runs.iter().map(|r| r.history[i]).sum::<f64>() / n)
            .collect()
    }
}

/// Run `options.runs` independent swarms on `function` and summarize them.
pub fn run_benchmark(
    function: &TestFunction,
    options: &BenchmarkOptions,
) -> Result<BenchmarkReport, BenchmarkError> {
    if options.runs == 0 {
        return Err(BenchmarkError::ZeroRuns);
    }

    info!(
        function = function.name,
        dimensions = options.dimensions,
        runs = options.runs,
        "starting benchmark"
    );

    let mut runs = Vec::with_capacity(options.runs);
    for run in 0..options.runs {
        let config = options.swarm_config(function, run);
        let seed = config.seed;
        let mut swarm = ParticleSwarm::new(config)?;
        let mut logger = ProgressLogger::new(format!("{}#{}", function.name, run + 1))
            .with_interval(options.max_iter.max(1));

        let result = if options.parallel {
            swarm.solve_parallel(&function.func, &mut logger)
        } else {
            swarm.solve(&function.func, &mut logger)
        };

        let best_position = result.best_position.ok_or_else(|| BenchmarkError::NoResult {
            function: function.name.to_string(),
            run,
        })?;
        let error = (result.best_score - function.optimal).abs();
        info!(
            function = function.name,
            run = run + 1,
            best_score = result.best_score,
            error,
            "benchmark run complete"
        );

        runs.push(RunRecord {
            run,
            seed,
            best_score: result.best_score,
            error,
            best_position,
            history: result.history,
        });
    }

    let scores: Vec<f64> = runs.iter().map(|r| r.best_score).collect();
    let summary = Summary::of(&scores).ok_or(BenchmarkError::ZeroRuns)?;

    info!(
        function = function.name,
        mean = summary.mean,
        std = summary.std,
        min = summary.min,
        optimal = function.optimal,
        "benchmark summary"
    );

    Ok(BenchmarkReport {
        function: function.name.to_string(),
        description: function.description.to_string(),
        bounds: function.bounds,
        dimensions: options.dimensions,
        optimal: function.optimal,
        summary,
        runs,
    })
}

/// Run the named functions in order.
pub fn run_suite<S: AsRef<str>>(
    names: &[S],
    options: &BenchmarkOptions,
) -> Result<Vec<BenchmarkReport>, BenchmarkError> {
    names
        .iter()
        .map(|name| run_benchmark(lookup(name.as_ref())?, options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigError;
    use pretty_assertions::assert_eq;

    fn quick() -> BenchmarkOptions {
        BenchmarkOptions {
            runs: 3,
            dimensions: 3,
            max_iter: 50,
            seed: Some(5),
            ..BenchmarkOptions::default()
        }
    }

    #[test]
    fn summary_uses_population_std() {
        let summary = Summary::of(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(summary.mean, 2.5);
        assert!((summary.std - 1.25_f64.sqrt()).abs() < 1e-12);
        assert_eq!(summary.min, 1.0);
        assert_eq!(Summary::of(&[]), None);
    }

    #[test]
    fn runs_are_seeded_consecutively() {
        let options = quick();
        let sphere = lookup("sphere").unwrap();
        let seeds: Vec<Option<u64>> = (0..3).map(|r| options.swarm_config(sphere, r).seed).collect();
        assert_eq!(seeds, vec![Some(5), Some(6), Some(7)]);
        assert_eq!(options.swarm_config(sphere, 0).bounds, (-100.0, 100.0));
        assert!(options.swarm_config(sphere, 0).schedule.is_adaptive());
    }

    #[test]
    fn report_collects_every_run() {
        let report = run_benchmark(lookup("sphere").unwrap(), &quick()).unwrap();

        assert_eq!(report.runs.len(), 3);
        assert!(report.runs.iter().all(|r| r.history.len() == 50));
        assert!(report.runs.iter().all(|r| r.best_position.len() == 3));
        assert!(report.summary.min <= report.summary.mean);
        assert!(report.summary.std >= 0.0);

        let mean_history = report.mean_history();
        assert_eq!(mean_history.len(), 50);
        let last_mean = report.best_scores().iter().sum::<f64>() / 3.0;
        assert!((mean_history[49] - last_mean).abs() < 1e-9);
    }

    #[test]
    fn seeded_benchmarks_are_reproducible() {
        let rastrigin = lookup("rastrigin").unwrap();
        let first = run_benchmark(rastrigin, &quick()).unwrap();
        let second = run_benchmark(rastrigin, &quick()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_zero_runs_and_bad_config() {
        let sphere = lookup("sphere").unwrap();
        let zero_runs = BenchmarkOptions { runs: 0, ..quick() };
        assert!(matches!(run_benchmark(sphere, &zero_runs), Err(BenchmarkError::ZeroRuns)));

        let zero_dims = BenchmarkOptions { dimensions: 0, ..quick() };
        assert!(matches!(
            run_benchmark(sphere, &zero_dims),
            Err(BenchmarkError::Config(ConfigError::ZeroDimensions))
        ));
    }

    #[test]
    fn suite_stops_on_unknown_function() {
        let result = run_suite(&["sphere", "nope"], &quick());
        assert!(matches!(result, Err(BenchmarkError::UnknownFunction(name)) if name == "nope"));

        let reports = run_suite(&["sphere", "ackley"], &quick()).unwrap();
        let names: Vec<&str> = reports.iter().map(|r| r.function.as_str()).collect();
        assert_eq!(names, vec!["sphere", "ackley"]);
    }
}
