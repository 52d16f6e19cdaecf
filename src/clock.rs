// clock.rs
// Frame clock: per-frame delta and total elapsed time, both in seconds.

use std::time::Instant;

/// Wall-clock frame timer driven once per rendered frame.
#[derive(Clone, Debug)]
pub struct Clock {
    start: Instant,
    now: Option<Instant>,
    /// Seconds between the two most recent ticks (0 on the first tick).
    pub delta: f32,
    /// Seconds since the clock was created, as of the last tick.
    pub elapsed: f32,
}

impl Clock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            start,
            now: None,
            delta: 0.0,
            elapsed: 0.0,
        }
    }

    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Advance the clock to `now`. Instants earlier than the previous tick
    /// saturate to a zero delta.
    pub fn tick_at(&mut self, now: Instant) {
        self.delta = match self.now {
            Some(prev) => now.saturating_duration_since(prev).as_secs_f32(),
            None => 0.0,
        };
        self.elapsed = now.saturating_duration_since(self.start).as_secs_f32();
        self.now = Some(now);
    }

    pub fn now(&self) -> Option<Instant> {
        self.now
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
