use std::time::{Duration, Instant};

/// Longest frame delta handed to the controller, in seconds
pub const DEFAULT_MAX_DELTA: f32 = 0.25;

/// Frame clock - tracks delta time between ticks.
/// Deltas are clamped so a stalled frame cannot turn into one huge move.
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
    max_delta: f32,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self::with_max_delta(DEFAULT_MAX_DELTA)
    }

    pub fn with_max_delta(max_delta: f32) -> Self {
        Self {
            last_tick: Instant::now(),
            max_delta: max_delta.max(0.0),
        }
    }

    /// Seconds since the previous tick (clamped), and advance
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = self.clamp(now.duration_since(self.last_tick));
        self.last_tick = now;
        delta
    }

    /// Reset clock to current time
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }

    fn clamp(&self, elapsed: Duration) -> f32 {
        elapsed.as_secs_f32().min(self.max_delta)
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clock_measures_delta() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();

        assert!(delta >= 0.009 && delta <= DEFAULT_MAX_DELTA);
    }

    #[test]
    fn clock_resets() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        clock.reset();

        let delta = clock.tick();
        assert!(delta < 0.005);
    }

    #[test]
    fn clock_clamps_long_frames() {
        let clock = Clock::with_max_delta(0.1);
        assert_eq!(clock.clamp(Duration::from_secs(3)), 0.1);
        assert!((clock.clamp(Duration::from_millis(50)) - 0.05).abs() < 1e-6);
    }
}
