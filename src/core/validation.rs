use super::error::ConfigError;
use super::types::{InertiaSchedule, SwarmConfig};

fn check_finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFiniteCoefficient { name, value })
    }
}

/// Validate swarm parameters
///
/// Checks counts first, then bounds, then coefficients. Returns the first
/// problem found, otherwise Ok(()).
pub fn validate_config(config: &SwarmConfig) -> Result<(), ConfigError> {
    if config.particles == 0 {
        return Err(ConfigError::ZeroParticles);
    }
    if config.dimensions == 0 {
        return Err(ConfigError::ZeroDimensions);
    }
    if config.max_iter == 0 {
        return Err(ConfigError::ZeroIterations);
    }

    let (low, high) = config.bounds;
    // NaN fails every comparison, so `!(low < high)` also rejects it.
    // The width must be finite too or uniform sampling overflows.
    if !low.is_finite() || !high.is_finite() || !(low < high) || !(high - low).is_finite() {
        return Err(ConfigError::InvalidBounds { low, high });
    }

    check_finite("inertia", config.inertia)?;
    check_finite("cognitive", config.cognitive)?;
    check_finite("social", config.social)?;

    if let InertiaSchedule::Linear { start, end } = config.schedule {
        check_finite("schedule.start", start)?;
        check_finite("schedule.end", end)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(validate_config(&SwarmConfig::default()), Ok(()));
    }

    #[test_case(SwarmConfig::default().with_particles(0), ConfigError::ZeroParticles ; "zero particles")]
    #[test_case(SwarmConfig::default().with_dimensions(0), ConfigError::ZeroDimensions ; "zero dimensions")]
    #[test_case(SwarmConfig::default().with_max_iter(0), ConfigError::ZeroIterations ; "zero iterations")]
    #[test_case(SwarmConfig::default().with_bounds(5.0, 5.0), ConfigError::InvalidBounds { low: 5.0, high: 5.0 } ; "zero width bounds")]
    #[test_case(SwarmConfig::default().with_bounds(3.0, -3.0), ConfigError::InvalidBounds { low: 3.0, high: -3.0 } ; "inverted bounds")]
    #[test_case(SwarmConfig::default().with_bounds(f64::NEG_INFINITY, 1.0), ConfigError::InvalidBounds { low: f64::NEG_INFINITY, high: 1.0 } ; "infinite bound")]
    #[test_case(SwarmConfig::default().with_bounds(-1e308, 1e308), ConfigError::InvalidBounds { low: -1e308, high: 1e308 } ; "overflowing width")]
    #[test_case(SwarmConfig::default().with_coefficients(f64::INFINITY, 1.5, 1.5), ConfigError::NonFiniteCoefficient { name: "inertia", value: f64::INFINITY } ; "infinite inertia")]
    fn rejects(config: SwarmConfig, expected: ConfigError) {
        assert_eq!(validate_config(&config), Err(expected));
    }

    #[test]
    fn rejects_nan_bounds_and_schedule_weights() {
        let nan_bounds = SwarmConfig::default().with_bounds(f64::NAN, 1.0);
        assert!(matches!(
            validate_config(&nan_bounds),
            Err(ConfigError::InvalidBounds { .. })
        ));

        let nan_schedule = SwarmConfig::default().with_schedule(InertiaSchedule::Linear {
            start: 0.9,
            end: f64::NAN,
        });
        assert!(matches!(
            validate_config(&nan_schedule),
            Err(ConfigError::NonFiniteCoefficient { name: "schedule.end", .. })
        ));
    }
}
