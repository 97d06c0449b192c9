use serde::{Deserialize, Serialize};

/// How the inertia weight evolves over a run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InertiaSchedule {
    /// Always use `SwarmConfig::inertia`.
    #[default]
    Constant,
    /// Linear decay from `start` toward `end` over `max_iter` iterations:
    /// `w(t) = start - (start - end) * t / max_iter` for zero-based `t`.
    Linear { start: f64, end: f64 },
}

impl InertiaSchedule {
    pub const DEFAULT_START: f64 = 0.9;
    pub const DEFAULT_END: f64 = 0.4;

    /// Linear schedule with the conventional 0.9 -> 0.4 endpoints.
    pub fn linear() -> Self {
        Self::Linear {
            start: Self::DEFAULT_START,
            end: Self::DEFAULT_END,
        }
    }

    /// Inertia weight for zero-based iteration `iteration` of `max_iter`.
    pub fn weight(&self, base: f64, iteration: u32, max_iter: u32) -> f64 {
        match *self {
            Self::Constant => base,
            Self::Linear { start, end } => {
                let progress = iteration as f64 / max_iter.max(1) as f64;
                start - (start - end) * progress
            }
        }
    }

    pub fn is_adaptive(&self) -> bool {
        matches!(self, Self::Linear { .. })
    }
}

/// Swarm construction parameters.
///
/// Defaults: 30 particles, 2 dimensions, 100 iterations, w=0.7, c1=1.5,
/// c2=1.5, bounds (-10, 10), constant inertia, unseeded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwarmConfig {
    pub particles: usize,
    pub dimensions: usize,
    pub max_iter: u32,
    pub inertia: f64,   // w - velocity inertia weight
    pub cognitive: f64, // c1 - personal best influence
    pub social: f64,    // c2 - global best influence
    /// Search box `(low, high)`, applied to every dimension
    pub bounds: (f64, f64),
    pub schedule: InertiaSchedule,
    /// Fixed seed for reproducible runs; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            particles: 30,
            dimensions: 2,
            max_iter: 100,
            inertia: 0.7,
            cognitive: 1.5,
            social: 1.5,
            bounds: (-10.0, 10.0),
            schedule: InertiaSchedule::Constant,
            seed: None,
        }
    }
}

impl SwarmConfig {
    pub fn with_particles(mut self, particles: usize) -> Self {
        self.particles = particles;
        self
    }

    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn with_max_iter(mut self, max_iter: u32) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Configure PSO coefficients (defaults: w=0.7, c1=1.5, c2=1.5)
    pub fn with_coefficients(mut self, inertia: f64, cognitive: f64, social: f64) -> Self {
        self.inertia = inertia;
        self.cognitive = cognitive;
        self.social = social;
        self
    }

    pub fn with_bounds(mut self, low: f64, high: f64) -> Self {
        self.bounds = (low, high);
        self
    }

    pub fn with_schedule(mut self, schedule: InertiaSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Enable adaptive inertia with the default linear schedule.
    pub fn adaptive(self) -> Self {
        self.with_schedule(InertiaSchedule::linear())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn low(&self) -> f64 {
        self.bounds.0
    }

    pub fn high(&self) -> f64 {
        self.bounds.1
    }

    /// Inertia weight in effect for zero-based iteration `iteration`.
    pub fn inertia_at(&self, iteration: u32) -> f64 {
        self.schedule.weight(self.inertia, iteration, self.max_iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = SwarmConfig::default();
        assert_eq!(config.particles, 30);
        assert_eq!(config.dimensions, 2);
        assert_eq!(config.max_iter, 100);
        assert_eq!((config.inertia, config.cognitive, config.social), (0.7, 1.5, 1.5));
        assert_eq!(config.bounds, (-10.0, 10.0));
        assert!(!config.schedule.is_adaptive());
        assert_eq!(config.seed, None);
    }

    #[test]
    fn constant_schedule_ignores_iteration() {
        let config = SwarmConfig::default().with_coefficients(0.5, 1.0, 1.0);
        assert_eq!(config.inertia_at(0), 0.5);
        assert_eq!(config.inertia_at(99), 0.5);
    }

    #[test]
    fn linear_schedule_decays_from_start_toward_end() {
        let config = SwarmConfig::default().with_max_iter(10).adaptive();
        assert!((config.inertia_at(0) - 0.9).abs() < 1e-12);
        assert!((config.inertia_at(5) - 0.65).abs() < 1e-12);
        assert!((config.inertia_at(9) - 0.45).abs() < 1e-12);

        let weights: Vec<f64> = (0..10).map(|t| config.inertia_at(t)).collect();
        assert!(weights.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: SwarmConfig =
            serde_json::from_str(r#"{"particles": 12, "schedule": {"kind": "linear", "start": 1.0, "end": 0.2}}"#)
                .unwrap();
        assert_eq!(config.particles, 12);
        assert_eq!(config.dimensions, 2);
        assert_eq!(config.schedule, InertiaSchedule::Linear { start: 1.0, end: 0.2 });
    }
}
