use std::time::Duration;

/// Fixed-timestep accumulator.
///
/// The host reports how much wall time passed since its last frame; the
/// accumulator answers how many whole ticks are due. Backlog beyond
/// `max_ticks` in one frame is dropped rather than replayed.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    interval: Duration,
    accumulator: Duration,
    max_ticks: u32,
}

impl FixedTimestep {
    pub fn new(interval: Duration, max_ticks: u32) -> Self {
        Self {
            interval,
            accumulator: Duration::ZERO,
            max_ticks: max_ticks.max(1),
        }
    }

    /// Time carried over towards the next tick.
    pub fn pending(&self) -> Duration {
        self.accumulator
    }

    /// Adds `elapsed` and returns the number of ticks to run now.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }

        self.accumulator += elapsed;
        let due = self.accumulator.as_nanos() / self.interval.as_nanos();

        if due > self.max_ticks as u128 {
            log::warn!(
                "frame took {:?}, dropping {} ticks of backlog",
                elapsed,
                due - self.max_ticks as u128
            );
            self.accumulator = Duration::ZERO;
            return self.max_ticks;
        }

        let due = due as u32;
        self.accumulator -= self.interval * due;
        due
    }
}
