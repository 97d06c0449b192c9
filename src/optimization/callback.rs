use super::solvers::traits::{IterationReport, OptimizationCallback};
use tracing::info;

/// Logs the global best every `every` iterations (and on the first one).
#[derive(Debug, Clone)]
pub struct ProgressLogger {
    label: String,
    every: u32,
    reports: u32,
}

impl ProgressLogger {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            every: 10,
            reports: 0,
        }
    }

    /// Configure logging interval (default: 10, clamped to at least 1)
    pub fn with_interval(mut self, every: u32) -> Self {
        self.every = every.max(1);
        self
    }

    /// Number of reports actually logged so far
    pub fn reports(&self) -> u32 {
        self.reports
    }

    fn should_log(&self, iteration: u32) -> bool {
        // Iterations are one-based; log the first, then every `every`th after it
        (iteration - 1) % self.every == 0
    }
}

impl OptimizationCallback for ProgressLogger {
    fn on_iteration(&mut self, report: &IterationReport<'_>) {
        if report.iteration == 0 || !self.should_log(report.iteration) {
            return;
        }
        self.reports += 1;
        info!(
            run = %self.label,
            iteration = report.iteration,
            inertia = report.inertia,
            best_score = report.best_score,
            "swarm progress"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(iteration: u32) -> IterationReport<'static> {
        IterationReport {
            iteration,
            inertia: 0.7,
            best_score: 1.0,
            best_position: None,
        }
    }

    #[test]
    fn logs_first_and_every_tenth_iteration() {
        let mut logger = ProgressLogger::new("test");
        for iteration in 1..=25 {
            logger.on_iteration(&report(iteration));
        }
        // 1, 11, 21
        assert_eq!(logger.reports(), 3);
    }

    #[test]
    fn zero_interval_is_clamped() {
        let mut logger = ProgressLogger::new("test").with_interval(0);
        for iteration in 1..=4 {
            logger.on_iteration(&report(iteration));
        }
        assert_eq!(logger.reports(), 4);
    }
}
