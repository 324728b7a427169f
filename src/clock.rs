use std::thread;
use std::time::{Duration, Instant};

/// Fixed-rate tick limiter for the game loop.
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    last_tick: Option<Instant>,
}

impl FrameClock {
    /// Creates a clock admitting `ticks_per_second` ticks (at least one).
    #[must_use]
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            period: period_for_rate(ticks_per_second),
            last_tick: None,
        }
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Sleeps until one period has passed since the previous tick and
    /// returns the time elapsed between the two ticks.
    ///
    /// A late caller is admitted at once; missed ticks are not replayed.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let Some(last_tick) = self.last_tick else {
            self.last_tick = Some(now);
            return Duration::ZERO;
        };

        let remaining = self.period.saturating_sub(now.duration_since(last_tick));
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }

        let admitted = Instant::now();
        self.last_tick = Some(admitted);
        admitted.duration_since(last_tick)
    }
}

fn period_for_rate(ticks_per_second: u32) -> Duration {
    Duration::from_secs(1) / ticks_per_second.max(1)
}
