use rand::Rng;
use std::time::Duration;

/// How long to wait after a poll that found nothing new.
///
/// The wait starts at one second and doubles after every idle poll up to `max` seconds.  Each
/// wait is jittered by up to ±1/32 of its base so that several streams started together drift
/// apart.
#[derive(Debug, Clone, PartialEq)]
pub struct BackoffCounter {
    base: u32,
    max: u32,
}

impl BackoffCounter {
    /// A `max` below one second is treated as one second.
    pub fn new(max: u32) -> Self {
        Self {
            base: 1,
            max: max.max(1),
        }
    }

    /// The wait for this idle poll; doubles the base for the next one.
    pub fn next_wait(&mut self) -> Duration {
        let base = f64::from(self.base);
        let jitter_range = base / 16.0;
        let offset = rand::thread_rng().gen_range(-jitter_range / 2.0..=jitter_range / 2.0);
        self.base = self.base.saturating_mul(2).min(self.max);
        Duration::from_secs_f64(base + offset)
    }

    pub fn reset(&mut self) {
        self.base = 1;
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn max(&self) -> u32 {
        self.max
    }
}
