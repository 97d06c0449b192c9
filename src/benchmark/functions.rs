//! Standard continuous test functions with known optima.

use crate::core::BenchmarkError;
use std::f64::consts::{E, PI};

/// Sphere `Σ x_i²`. Optimum 0 at the origin.
pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

/// Rastrigin, highly multimodal. Optimum 0 at the origin.
pub fn rastrigin(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    10.0 * n
        + x.iter()
            .map(|xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
            .sum::<f64>()
}

/// Rosenbrock valley. Optimum 0 at (1, ..., 1).
pub fn rosenbrock(x: &[f64]) -> f64 {
    x.windows(2)
        .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
        .sum()
}

/// Ackley. Optimum 0 at the origin.
pub fn ackley(x: &[f64]) -> f64 {
    if x.is_empty() {
        return 0.0;
    }
    let n = x.len() as f64;
    let sum_sq: f64 = x.iter().map(|xi| xi * xi).sum();
    let sum_cos: f64 = x.iter().map(|xi| (2.0 * PI * xi).cos()).sum();
    -20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp() + 20.0 + E
}

/// Griewank. Optimum 0 at the origin.
pub fn griewank(x: &[f64]) -> f64 {
    let sum_part: f64 = x.iter().map(|xi| xi * xi).sum::<f64>() / 4000.0;
    let prod_part: f64 = x
        .iter()
        .enumerate()
        .map(|(i, xi)| (xi / ((i + 1) as f64).sqrt()).cos())
        .product();
    sum_part - prod_part + 1.0
}

/// Schwefel, deceptive: the optimum sits near the box corner.
/// Approximately 0 at (420.9687, ..., 420.9687).
pub fn schwefel(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    418.9829 * n - x.iter().map(|xi| xi * xi.abs().sqrt().sin()).sum::<f64>()
}

/// A named benchmark function with its search box and known optimum.
#[derive(Debug, Clone, Copy)]
pub struct TestFunction {
    pub name: &'static str,
    pub func: fn(&[f64]) -> f64,
    pub bounds: (f64, f64),
    pub optimal: f64,
    pub description: &'static str,
}

impl TestFunction {
    pub fn evaluate(&self, x: &[f64]) -> f64 {
        (self.func)(x)
    }
}

pub static TEST_FUNCTIONS: [TestFunction; 6] = [
    TestFunction {
        name: "sphere",
        func: sphere,
        bounds: (-100.0, 100.0),
        optimal: 0.0,
        description: "Sphere - simple convex bowl",
    },
    TestFunction {
        name: "rastrigin",
        func: rastrigin,
        bounds: (-5.12, 5.12),
        optimal: 0.0,
        description: "Rastrigin - multimodal",
    },
    TestFunction {
        name: "rosenbrock",
        func: rosenbrock,
        bounds: (-5.0, 10.0),
        optimal: 0.0,
        description: "Rosenbrock - narrow curved valley",
    },
    TestFunction {
        name: "ackley",
        func: ackley,
        bounds: (-32.768, 32.768),
        optimal: 0.0,
        description: "Ackley - multimodal",
    },
    TestFunction {
        name: "griewank",
        func: griewank,
        bounds: (-600.0, 600.0),
        optimal: 0.0,
        description: "Griewank - multimodal",
    },
    TestFunction {
        name: "schwefel",
        func: schwefel,
        bounds: (-500.0, 500.0),
        optimal: 0.0,
        description: "Schwefel - deceptive",
    },
];

pub fn lookup(name: &str) -> Result<&'static TestFunction, BenchmarkError> {
    TEST_FUNCTIONS
        .iter()
        .find(|f| f.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| BenchmarkError::UnknownFunction(name.to_string()))
}

pub fn names() -> impl Iterator<Item = &'static str> {
    TEST_FUNCTIONS.iter().map(|f| f.name)
}
