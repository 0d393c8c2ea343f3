use life_grid::{MAX_STEPS_PER_SECOND, SimulationConfig};
use log::warn;
use std::env;

const STEPS_PER_SECOND_VAR: &str = "CONWAY_STEPS_PER_SECOND";

/// Built-in settings, with the step rate optionally taken from the
/// environment.
pub fn load() -> SimulationConfig {
    let mut config = SimulationConfig::default();
    if let Ok(value) = env::var(STEPS_PER_SECOND_VAR) {
        match parse_steps_per_second(&value) {
            Some(steps_per_second) => config.steps_per_second = steps_per_second,
            None => warn!(
                "Ignoring {STEPS_PER_SECOND_VAR}={value:?}, expected a number in \
                 (0, {MAX_STEPS_PER_SECOND}]; using {}",
                config.steps_per_second
            ),
        }
    }
    config
}

fn parse_steps_per_second(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|steps| *steps > 0.0 && *steps <= MAX_STEPS_PER_SECOND)
}
