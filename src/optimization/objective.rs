use super::solvers::traits::Objective;
use crate::core::ObjectiveError;
use std::fmt::Display;

/// Sum of squares `f(x) = Σ x_i²`, minimum 0 at the origin.
///
/// Used whenever the caller does not supply an objective.
pub fn sum_of_squares(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

/// Adapter for objectives that can fail, e.g. a simulation that may not
/// converge. A failure is recorded against the particle and skipped.
///
/// ```
/// use swarmopt::{Fallible, Objective};
///
/// let guarded = Fallible(|x: &[f64]| {
///     if x[0] < 0.0 { Err("negative input") } else { Ok(x[0].sqrt()) }
/// });
/// assert!(guarded.cost(&[-1.0]).is_err());
/// assert_eq!(guarded.cost(&[4.0]), Ok(2.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> Objective for Fallible<F>
where
    F: Fn(&[f64]) -> Result<f64, E>,
    E: Display,
{
    fn cost(&self, position: &[f64]) -> Result<f64, ObjectiveError> {
        (self.0)(position).map_err(|e| ObjectiveError::Failed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_of_squares_is_zero_at_origin() {
        assert_eq!(sum_of_squares(&[0.0, 0.0, 0.0]), 0.0);
        assert_eq!(sum_of_squares(&[3.0, -4.0]), 25.0);
        assert_eq!(sum_of_squares(&[]), 0.0);
    }

    #[test]
    fn plain_functions_and_closures_are_objectives() {
        assert_eq!(sum_of_squares.cost(&[1.0, 2.0]), Ok(5.0));

        let offset = 3.0;
        let shifted = |x: &[f64]| sum_of_squares(x) + offset;
        assert_eq!(shifted.cost(&[1.0]), Ok(4.0));
    }

    #[test]
    fn fallible_maps_errors_to_objective_error() {
        let failing = Fallible(|_: &[f64]| Err::<f64, _>("simulation diverged"));
        assert_eq!(
            failing.cost(&[0.0]),
            Err(ObjectiveError::Failed("simulation diverged".into()))
        );
    }
}
