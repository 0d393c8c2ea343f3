use log::{debug, trace, warn};
use std::time::Duration;

pub const STEPS_PER_SECOND: f64 = 5.0;

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// One step per nanosecond, the finest step a `Duration` can hold.
pub const MAX_STEPS_PER_SECOND: f64 = NANOS_PER_SECOND;

/// Fixed-timestep clock. Frames may arrive at any rate; the clock turns the
/// time between them into a whole number of simulation steps and carries
/// the remainder forward.
///
/// Timestamps are durations since an epoch chosen by the caller, which is
/// taken to be the moment the clock was created.
#[derive(Clone, Debug)]
pub struct SimulationClock {
    steps_per_second: f64,
    step_duration: Duration,
    max_frame_time: Option<Duration>,
    last_timestamp: Duration,
    accumulator: Duration,
    paused: bool,
}

impl SimulationClock {
    /// Steps at `steps_per_second`, never catching up more than half that
    /// rate's worth of steps per frame. Below two steps per second there is
    /// no half rate, and frame time is not clamped.
    ///
    /// Panics unless `0 < steps_per_second <= MAX_STEPS_PER_SECOND`.
    pub fn new(steps_per_second: f64) -> Self {
        assert!(
            steps_per_second > 0.0 && steps_per_second <= MAX_STEPS_PER_SECOND,
            "Steps per second must be in (0, {MAX_STEPS_PER_SECOND}], not {steps_per_second}"
        );
        let min_steps_per_second = (steps_per_second / 2.0).floor().max(0.0);
        let max_frame_time = if min_steps_per_second > 0.0 {
            Some(Self::period(min_steps_per_second))
        } else {
            warn!(
                "Frame time is not clamped at {steps_per_second} steps per second; \
                 a long stall will be caught up in one frame"
            );
            None
        };
        let mut result = Self::from_durations(Self::period(steps_per_second), max_frame_time);
        result.steps_per_second = steps_per_second;
        result
    }

    pub fn from_durations(step_duration: Duration, max_frame_time: Option<Duration>) -> Self {
        assert!(!step_duration.is_zero(), "Step duration must be non-zero");
        Self {
            steps_per_second: NANOS_PER_SECOND / step_duration.as_nanos() as f64,
            step_duration,
            max_frame_time,
            last_timestamp: Duration::ZERO,
            accumulator: Duration::ZERO,
            paused: false,
        }
    }

    fn period(per_second: f64) -> Duration {
        Duration::from_nanos(((NANOS_PER_SECOND / per_second).round() as u64).max(1))
    }

    pub fn steps_per_second(&self) -> f64 {
        self.steps_per_second
    }

    pub fn step_duration(&self) -> Duration {
        self.step_duration
    }

    pub fn max_frame_time(&self) -> Option<Duration> {
        self.max_frame_time
    }

    pub fn accumulator(&self) -> Duration {
        self.accumulator
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            debug!("{}", if paused { "Paused" } else { "Resumed" });
        }
        self.paused = paused;
    }

    pub fn toggle_paused(&mut self) {
        self.set_paused(!self.paused);
    }

    /// Number of steps owed for a frame arriving at `now`. Paused time is
    /// consumed without being owed.
    pub fn on_frame(&mut self, now: Duration) -> u32 {
        let mut elapsed = now.saturating_sub(self.last_timestamp);
        if let Some(max_frame_time) = self.max_frame_time
            && elapsed > max_frame_time
        {
            trace!("Clamping frame time {elapsed:?} to {max_frame_time:?}");
            elapsed = max_frame_time;
        }
        self.last_timestamp = now;

        if self.paused {
            return 0;
        }

        self.accumulator += elapsed;
        let step_nanos = self.step_duration.as_nanos();
        let owed = self.accumulator.as_nanos() / step_nanos;
        let remainder = self.accumulator.as_nanos() % step_nanos;
        self.accumulator = Duration::from_nanos(remainder as u64);
        owed as u32
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(STEPS_PER_SECOND)
    }
}
