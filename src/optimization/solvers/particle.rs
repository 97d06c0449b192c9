use super::traits::{IterationReport, NoopCallback, Objective, OptimizationCallback};
use crate::core::{validate_config, ConfigError, ObjectiveError, SwarmConfig};
use crate::optimization::objective::sum_of_squares;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Initial velocities are drawn from +/- this fraction of the bound width
const INITIAL_VELOCITY_FRACTION: f64 = 0.1;

/// Mutable swarm state, one row per particle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwarmState {
    pub positions: Vec<Vec<f64>>,
    pub velocities: Vec<Vec<f64>>,
    pub pbest_positions: Vec<Vec<f64>>,
    /// `INFINITY` until the particle has a finite evaluation
    pub pbest_scores: Vec<f64>,
    /// `None` until any particle has a finite evaluation
    pub gbest_position: Option<Vec<f64>>,
    pub gbest_score: f64,
    /// Completed iterations
    pub iteration: u32,
    /// Global best score after each completed iteration
    pub history: Vec<f64>,
}

/// An evaluation whose score was discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationFault {
    /// Zero-based iteration in which the evaluation happened
    pub iteration: u32,
    pub particle: usize,
    pub position: Vec<f64>,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwarmResult {
    /// `None` if no evaluation ever produced a finite score
    pub best_position: Option<Vec<f64>>,
    /// `INFINITY` sentinel when `best_position` is `None`
    pub best_score: f64,
    pub history: Vec<f64>,
    pub iterations: u32,
    pub evaluations: usize,
    pub faults: Vec<EvaluationFault>,
}

impl SwarmResult {
    /// False for the degenerate case where no finite score was ever observed.
    pub fn is_defined(&self) -> bool {
        self.best_position.is_some() && self.best_score.is_finite()
    }

    /// `(best_position, best_score, history)`
    pub fn into_tuple(self) -> (Option<Vec<f64>>, f64, Vec<f64>) {
        (self.best_position, self.best_score, self.history)
    }
}

/// Particle Swarm Optimization over the box `[low, high]^n`.
///
/// Each iteration evaluates every particle, updates personal and global
/// bests on strict improvement, then moves the swarm with
/// `v = w·v + c1·r1·(pbest - x) + c2·r2·(gbest - x)`, `x = clip(x + v)`.
/// Velocities are not clamped and are left untouched when a position is
/// clipped to a bound. The run always lasts exactly `max_iter` iterations.
///
/// ```
/// use swarmopt::{ParticleSwarm, SwarmConfig};
///
/// let mut swarm = ParticleSwarm::new(SwarmConfig::default().with_seed(7)).unwrap();
/// let result = swarm.optimize();
/// assert_eq!(result.history.len(), 100);
/// assert!(result.best_score < 1e-3);
/// ```
pub struct ParticleSwarm {
    config: SwarmConfig,
    rng: StdRng,
    state: SwarmState,
    evaluations: usize,
    faults: Vec<EvaluationFault>,
}

impl ParticleSwarm {
    /// Validate `config`, seed the generator and initialize the swarm.
    pub fn new(config: SwarmConfig) -> Result<Self, ConfigError> {
        validate_config(&config)?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let state = Self::initialize(&config, &mut rng);

        Ok(Self {
            config,
            rng,
            state,
            evaluations: 0,
            faults: Vec::new(),
        })
    }

    /// Positions uniform in `[low, high]`, velocities uniform in
    /// `[-0.1 * width, 0.1 * width]`, pbests at the start positions.
    fn initialize(config: &SwarmConfig, rng: &mut StdRng) -> SwarmState {
        let (low, high) = config.bounds;
        let v_max = (high - low) * INITIAL_VELOCITY_FRACTION;
        let n = config.dimensions;

        let positions: Vec<Vec<f64>> = (0..config.particles)
            .map(|_| (0..n).map(|_| rng.gen_range(low..=high)).collect())
            .collect();
        let velocities: Vec<Vec<f64>> = (0..config.particles)
            .map(|_| (0..n).map(|_| rng.gen_range(-v_max..=v_max)).collect())
            .collect();

        SwarmState {
            pbest_positions: positions.clone(),
            pbest_scores: vec![f64::INFINITY; config.particles],
            positions,
            velocities,
            gbest_position: None,
            gbest_score: f64::INFINITY,
            iteration: 0,
            history: Vec::with_capacity(config.max_iter as usize),
        }
    }

    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    pub fn state(&self) -> &SwarmState {
        &self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.iteration >= self.config.max_iter
    }

    /// Minimize the default objective (sum of squares).
    pub fn optimize(&mut self) -> SwarmResult {
        self.optimize_with(&sum_of_squares)
    }

    pub fn optimize_with<O: Objective + ?Sized>(&mut self, objective: &O) -> SwarmResult {
        self.solve(objective, &mut NoopCallback)
    }

    /// Run the remaining iterations, reporting each one to `callback`.
    pub fn solve<O: Objective + ?Sized>(
        &mut self,
        objective: &O,
        callback: &mut dyn OptimizationCallback,
    ) -> SwarmResult {
        self.log_start(false);
        while !self.is_finished() {
            let scores = self.evaluate(objective);
            self.advance(scores, callback);
        }
        self.finish()
    }

    /// Same as [`optimize_with`](Self::optimize_with) but evaluates
    /// particles on the rayon pool. Results are identical to the sequential
    /// path for the same seed.
    pub fn optimize_parallel<O: Objective + Sync + ?Sized>(&mut self, objective: &O) -> SwarmResult {
        self.solve_parallel(objective, &mut NoopCallback)
    }

    pub fn solve_parallel<O: Objective + Sync + ?Sized>(
        &mut self,
        objective: &O,
        callback: &mut dyn OptimizationCallback,
    ) -> SwarmResult {
        self.log_start(true);
        while !self.is_finished() {
            let scores = self.evaluate_parallel(objective);
            self.advance(scores, callback);
        }
        self.finish()
    }

    /// Run a single iteration. Returns false (and does nothing) once
    /// `max_iter` iterations have completed.
    pub fn step<O: Objective + ?Sized>(&mut self, objective: &O) -> bool {
        if self.is_finished() {
            return false;
        }
        let scores = self.evaluate(objective);
        self.advance(scores, &mut NoopCallback);
        true
    }

    /// Snapshot of the current global best and bookkeeping.
    pub fn result(&self) -> SwarmResult {
        SwarmResult {
            best_position: self.state.gbest_position.clone(),
            best_score: self.state.gbest_score,
            history: self.state.history.clone(),
            iterations: self.state.iteration,
            evaluations: self.evaluations,
            faults: self.faults.clone(),
        }
    }

    fn evaluate<O: Objective + ?Sized>(&self, objective: &O) -> Vec<Result<f64, ObjectiveError>> {
        self.state.positions.iter().map(|p| objective.cost(p)).collect()
    }

    fn evaluate_parallel<O: Objective + Sync + ?Sized>(
        &self,
        objective: &O,
    ) -> Vec<Result<f64, ObjectiveError>> {
        self.state.positions.par_iter().map(|p| objective.cost(p)).collect()
    }

    /// Apply one iteration given this iteration's scores, in particle order.
    fn advance(
        &mut self,
        scores: Vec<Result<f64, ObjectiveError>>,
        callback: &mut dyn OptimizationCallback,
    ) {
        let iteration = self.state.iteration;

        self.update_bests(iteration, scores);

        let inertia = self.config.inertia_at(iteration);
        self.move_particles(inertia);

        self.state.history.push(self.state.gbest_score);
        self.state.iteration += 1;

        debug!(
            iteration = self.state.iteration,
            inertia,
            best_score = self.state.gbest_score,
            "iteration complete"
        );

        callback.on_iteration(&IterationReport {
            iteration: self.state.iteration,
            inertia,
            best_score: self.state.gbest_score,
            best_position: self.state.gbest_position.as_deref(),
        });
    }

    /// Strict improvement only: on ties the earlier particle keeps gbest.
    fn update_bests(&mut self, iteration: u32, scores: Vec<Result<f64, ObjectiveError>>) {
        for (p, outcome) in scores.into_iter().enumerate() {
            self.evaluations += 1;

            let cost = match outcome {
                Ok(cost) if cost.is_finite() => cost,
                Ok(cost) => {
                    self.record_fault(iteration, p, format!("non-finite score {cost}"));
                    continue;
                }
                Err(e) => {
                    self.record_fault(iteration, p, e.to_string());
                    continue;
                }
            };

            let state = &mut self.state;

            // Update personal best
            if cost < state.pbest_scores[p] {
                state.pbest_scores[p] = cost;
                state.pbest_positions[p].copy_from_slice(&state.positions[p]);
            }

            // Update global best
            if cost < state.gbest_score {
                state.gbest_score = cost;
                state.gbest_position = Some(state.positions[p].clone());
            }
        }
    }

    fn record_fault(&mut self, iteration: u32, particle: usize, reason: String) {
        let position = self.state.positions[particle].clone();
        warn!(
            iteration,
            particle,
            ?position,
            %reason,
            "evaluation discarded"
        );
        self.faults.push(EvaluationFault {
            iteration,
            particle,
            position,
            reason,
        });
    }

    /// Velocity and position update for every particle and dimension, with
    /// fresh r1, r2 per element. Without a global best the social term is
    /// dropped, but r2 is still drawn.
    fn move_particles(&mut self, inertia: f64) {
        let (low, high) = self.config.bounds;
        let (cognitive, social) = (self.config.cognitive, self.config.social);
        let rng = &mut self.rng;
        let SwarmState {
            positions,
            velocities,
            pbest_positions,
            gbest_position,
            ..
        } = &mut self.state;

        for ((position, velocity), pbest) in positions
            .iter_mut()
            .zip(velocities.iter_mut())
            .zip(pbest_positions.iter())
        {
            for d in 0..position.len() {
                let r1: f64 = rng.gen_range(0.0..1.0);
                let r2: f64 = rng.gen_range(0.0..1.0);

                let pull_social = gbest_position
                    .as_ref()
                    .map_or(0.0, |gbest| social * r2 * (gbest[d] - position[d]));

                // PSO velocity update equation
                velocity[d] = inertia * velocity[d]
                    + cognitive * r1 * (pbest[d] - position[d])
                    + pull_social;

                // Hard clip to bounds; velocity keeps its value. A NaN sum
                // (opposite infinities) leaves the coordinate in place.
                let moved = position[d] + velocity[d];
                if !moved.is_nan() {
                    position[d] = moved.clamp(low, high);
                }
            }
        }
    }

    fn log_start(&self, parallel: bool) {
        if self.state.iteration == 0 {
            info!(
                particles = self.config.particles,
                dimensions = self.config.dimensions,
                max_iter = self.config.max_iter,
                adaptive = self.config.schedule.is_adaptive(),
                seed = ?self.config.seed,
                parallel,
                "starting particle swarm"
            );
        }
    }

    fn finish(&self) -> SwarmResult {
        let result = self.result();
        if result.is_defined() {
            info!(
                best_score = result.best_score,
                evaluations = result.evaluations,
                faults = result.faults.len(),
                "particle swarm finished"
            );
        } else {
            warn!(
                evaluations = result.evaluations,
                faults = result.faults.len(),
                "particle swarm finished without a finite score"
            );
        }
        result
    }
}
