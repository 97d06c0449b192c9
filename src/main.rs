//! swarmopt CLI - particle swarm optimization and benchmarks.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use swarmopt::benchmark::{self, BenchmarkOptions, TEST_FUNCTIONS};
use swarmopt::{ParticleSwarm, ProgressLogger, SwarmConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "swarmopt")]
#[command(about = "Particle swarm optimization over bounded search spaces", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Minimize one test function
    Optimize(OptimizeArgs),
    /// Repeat runs over several test functions and summarize
    Benchmark(BenchmarkArgs),
    /// List available test functions
    Functions,
}

#[derive(Args)]
struct OptimizeArgs {
    /// Test function to minimize
    #[arg(long, default_value = "sphere")]
    function: String,
    /// JSON file with a swarm configuration; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    particles: Option<usize>,
    #[arg(long)]
    dimensions: Option<usize>,
    #[arg(long)]
    max_iter: Option<u32>,
    /// Inertia weight w
    #[arg(long)]
    inertia: Option<f64>,
    /// Cognitive coefficient c1
    #[arg(long)]
    cognitive: Option<f64>,
    /// Social coefficient c2
    #[arg(long)]
    social: Option<f64>,
    /// Lower bound (defaults to the function's own bounds)
    #[arg(long, allow_hyphen_values = true)]
    low: Option<f64>,
    /// Upper bound (defaults to the function's own bounds)
    #[arg(long, allow_hyphen_values = true)]
    high: Option<f64>,
    /// Linearly decay inertia from 0.9 to 0.4
    #[arg(long)]
    adaptive: bool,
    #[arg(long)]
    seed: Option<u64>,
    /// Evaluate particles in parallel
    #[arg(long)]
    parallel: bool,
    /// Write the result as JSON
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct BenchmarkArgs {
    /// Functions to run (default: all)
    #[arg(long, value_delimiter = ',')]
    functions: Vec<String>,
    #[arg(long, default_value = "10")]
    runs: usize,
    #[arg(long, default_value = "10")]
    dimensions: usize,
    #[arg(long, default_value = "30")]
    particles: usize,
    #[arg(long, default_value = "200")]
    max_iter: u32,
    /// Keep inertia constant instead of decaying it
    #[arg(long)]
    constant_inertia: bool,
    /// Base seed; run r uses seed + r
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    parallel: bool,
    /// Write all reports as JSON
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Optimize(args) => optimize(args),
        Commands::Benchmark(args) => run_benchmarks(args),
        Commands::Functions => {
            for function in &TEST_FUNCTIONS {
                let (low, high) = function.bounds;
                println!(
                    "{:<12} [{}, {}]  optimum {}  {}",
                    function.name, low, high, function.optimal, function.description
                );
            }
            Ok(())
        }
    }
}

fn load_config(path: &Path) -> Result<SwarmConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse config {}", path.display()))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), "wrote results");
    Ok(())
}

fn optimize(args: OptimizeArgs) -> Result<()> {
    let function = benchmark::lookup(&args.function)?;

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SwarmConfig::default().with_bounds(function.bounds.0, function.bounds.1),
    };
    if let Some(particles) = args.particles {
        config.particles = particles;
    }
    if let Some(dimensions) = args.dimensions {
        config.dimensions = dimensions;
    }
    if let Some(max_iter) = args.max_iter {
        config.max_iter = max_iter;
    }
    if let Some(inertia) = args.inertia {
        config.inertia = inertia;
    }
    if let Some(cognitive) = args.cognitive {
        config.cognitive = cognitive;
    }
    if let Some(social) = args.social {
        config.social = social;
    }
    if let Some(low) = args.low {
        config.bounds.0 = low;
    }
    if let Some(high) = args.high {
        config.bounds.1 = high;
    }
    if args.adaptive {
        config = config.adaptive();
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    let mut swarm = ParticleSwarm::new(config)?;
    let mut logger = ProgressLogger::new(function.name);
    let result = if args.parallel {
        swarm.solve_parallel(&function.func, &mut logger)
    } else {
        swarm.solve(&function.func, &mut logger)
    };

    if !result.is_defined() {
        bail!("no finite score was produced for '{}'", function.name);
    }

    println!("Best score:    {:.10e}", result.best_score);
    println!("Error:         {:.10e}", (result.best_score - function.optimal).abs());
    if let Some(position) = &result.best_position {
        println!("Best position: {:?}", position);
    }

    if let Some(path) = &args.output {
        write_json(path, &result)?;
    }
    Ok(())
}

fn run_benchmarks(args: BenchmarkArgs) -> Result<()> {
    let names: Vec<String> = if args.functions.is_empty() {
        benchmark::functions::names().map(str::to_string).collect()
    } else {
        args.functions
    };

    let options = BenchmarkOptions {
        runs: args.runs,
        dimensions: args.dimensions,
        particles: args.particles,
        max_iter: args.max_iter,
        adaptive: !args.constant_inertia,
        seed: args.seed,
        parallel: args.parallel,
    };

    let reports = benchmark::run_suite(names.as_slice(), &options)?;

    println!("{:<12} {:>14} {:>14} {:>14}", "function", "mean", "std", "min");
    for report in &reports {
        println!(
            "{:<12} {:>14.6e} {:>14.6e} {:>14.6e}",
            report.function, report.summary.mean, report.summary.std, report.summary.min
        );
    }

    if let Some(path) = &args.output {
        write_json(path, &reports)?;
    }
    Ok(())
}
